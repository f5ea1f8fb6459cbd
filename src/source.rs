//! Where the game specific message comes from.
//!
//! The driver station only makes the message available once the FMS
//! sends it (usually at the start of autonomous), so every source
//! returns an `Option`.
use log::debug;
use std::sync::{Arc, RwLock};

/// Accessor of the current game specific message.
///
/// `None` means the message is not yet provided by the upstream system.
pub trait GameDataSource: Send + Sync {
    fn game_specific_message(&self) -> Option<String>;
}

/// a fixed message, mostly for tests and replays
impl GameDataSource for Option<String> {
    fn game_specific_message(&self) -> Option<String> {
        self.clone()
    }
}

impl<T: GameDataSource + ?Sized> GameDataSource for &T {
    fn game_specific_message(&self) -> Option<String> {
        (**self).game_specific_message()
    }
}

impl<T: GameDataSource + ?Sized> GameDataSource for Arc<T> {
    fn game_specific_message(&self) -> Option<String> {
        (**self).game_specific_message()
    }
}

/// A message slot shared between the thread receiving driver station
/// packets and the robot code reading it.
///
/// Cloning returns a handle to the same slot.
#[derive(Clone, Debug, Default)]
pub struct SharedMessage {
    inner: Arc<RwLock<Option<String>>>,
}

impl SharedMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// publish a newly received message
    pub fn set(&self, message: impl Into<String>) {
        let message = message.into();
        debug!("game specific message received: {:?}", message);
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(message);
        }
    }

    /// forget the message, e.g. when a new match starts
    pub fn clear(&self) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = None;
        }
    }
}

impl GameDataSource for SharedMessage {
    fn game_specific_message(&self) -> Option<String> {
        // a poisoned slot is as good as no data
        self.inner.read().ok().and_then(|slot| slot.clone())
    }
}

#[cfg(test)]
mod test_source {
    use super::*;
    use std::thread;

    #[test]
    fn test_fixed_message() {
        let source = Some("LRL".to_string());
        assert_eq!(source.game_specific_message().as_deref(), Some("LRL"));
        let none: Option<String> = None;
        assert_eq!(none.game_specific_message(), None);
    }

    #[test]
    fn test_shared_message() {
        let message = SharedMessage::new();
        let reader = message.clone();
        assert_eq!(reader.game_specific_message(), None);
        message.set("RLR");
        assert_eq!(reader.game_specific_message().as_deref(), Some("RLR"));
        message.clear();
        assert_eq!(reader.game_specific_message(), None);
    }

    #[test]
    fn test_shared_message_across_threads() {
        let message = SharedMessage::new();
        let writer = message.clone();
        thread::spawn(move || writer.set("LLR")).join().unwrap();
        assert_eq!(message.game_specific_message().as_deref(), Some("LLR"));
    }

    #[test]
    fn test_forwarding() {
        let shared = Arc::new(SharedMessage::new());
        shared.set("RRR");
        let by_ref: &dyn GameDataSource = &*shared;
        assert_eq!(by_ref.game_specific_message().as_deref(), Some("RRR"));
        assert_eq!(shared.game_specific_message().as_deref(), Some("RRR"));
    }
}
