//! Follow the game specific message while it becomes available.
//!
//! Robot code usually needs the plate assignment right at the start of
//! autonomous, but the FMS may deliver the message a few packets late.
use crate::match_data::MatchData;
use crate::source::GameDataSource;
use crate::CHANNEL_SIZE;
use anyhow::{Error, Result};
use async_std::channel::{bounded, Receiver};
use async_std::future;
use async_std::task;
use bincode::{Decode, Encode};
use futures::StreamExt;
use log::{info, trace};
use std::time::Duration;

/// Polling configuration for the watcher.
///
/// 0 `timeout_ms` means waiting forever
#[derive(Clone, PartialEq, Debug, Encode, Decode)]
pub struct WatchConfig {
    pub poll_interval_ms: u64,
    pub timeout_ms: u64,
}

/// one poll per 20 ms robot loop, no timeout
impl Default for WatchConfig {
    fn default() -> Self {
        WatchConfig {
            poll_interval_ms: 20,
            timeout_ms: 0,
        }
    }
}

impl WatchConfig {
    #[inline]
    fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    #[inline]
    fn timeout(&self) -> Option<Duration> {
        match self.timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

/// Start watching a source.
///
/// The first snapshot is sent right away, afterwards only changes are sent.
/// The watcher stops once the returned receiver is dropped.
pub fn watch_match_data<S>(source: S, config: WatchConfig) -> Receiver<MatchData>
where
    S: GameDataSource + 'static,
{
    let (sender, receiver) = bounded(CHANNEL_SIZE);
    let interval = config.poll_interval();
    task::spawn(async move {
        let mut last: Option<MatchData> = None;
        while !sender.is_closed() {
            let data = MatchData::from_source(&source);
            if last != Some(data) {
                #[cfg(debug_assertions)]
                trace!("match data changed to {}", data);
                if data.is_complete() {
                    info!("match data available: {}", data);
                }
                if sender.send(data).await.is_err() {
                    break;
                }
                last = Some(data);
            }
            task::sleep(interval).await;
        }
        #[cfg(debug_assertions)]
        trace!("match data watcher stopped");
    });
    receiver
}

/// Wait until every feature of the match data is known.
///
/// Fails when `config.timeout_ms` elapses first.
pub async fn wait_for_match_data<S>(source: S, config: WatchConfig) -> Result<MatchData>
where
    S: GameDataSource + 'static,
{
    let timeout = config.timeout();
    let mut updates = watch_match_data(source, config);
    let complete = async move {
        while let Some(data) = updates.next().await {
            if data.is_complete() {
                return Ok(data);
            }
        }
        Err(Error::msg("match data watcher stopped"))
    };
    match timeout {
        None => complete.await,
        Some(t) => match future::timeout(t, complete).await {
            Ok(result) => result,
            Err(_) => Err(Error::msg(format!(
                "no complete match data after {} ms",
                t.as_millis()
            ))),
        },
    }
}

#[cfg(test)]
mod test_watch {
    use super::*;
    use crate::match_data::OwnedSide::{Left, Right, Unknown};
    use crate::source::SharedMessage;
    use futures::executor::block_on;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn fast_config(timeout_ms: u64) -> WatchConfig {
        WatchConfig {
            poll_interval_ms: 2,
            timeout_ms,
        }
    }

    #[test]
    fn test_default_config() {
        let config = WatchConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_millis(20));
        assert_eq!(config.timeout(), None);
        assert_eq!(fast_config(0).poll_interval(), Duration::from_millis(2));
        let busy = WatchConfig {
            poll_interval_ms: 0,
            timeout_ms: 5,
        };
        assert_eq!(busy.poll_interval(), Duration::from_millis(1));
        assert_eq!(busy.timeout(), Some(Duration::from_millis(5)));
    }

    #[test]
    fn test_watch_changes() {
        init_logger();
        let message = SharedMessage::new();
        let mut updates = watch_match_data(message.clone(), fast_config(0));
        block_on(async move {
            assert_eq!(updates.next().await, Some(MatchData::default()));
            message.set("LX");
            message.set("LXR");
            let partial = updates.next().await.unwrap();
            assert_eq!(partial.switch_near, Left);
            assert_eq!(partial.scale, Unknown);
            assert_eq!(partial.switch_far, Right);
            message.set("lrr");
            assert_eq!(
                updates.next().await,
                Some(MatchData {
                    switch_near: Left,
                    scale: Right,
                    switch_far: Right,
                })
            );
        });
    }

    #[test]
    fn test_wait_for_late_message() {
        init_logger();
        let message = SharedMessage::new();
        let writer = message.clone();
        block_on(async move {
            task::spawn(async move {
                task::sleep(Duration::from_millis(30)).await;
                writer.set("RLR");
            });
            let data = wait_for_match_data(message, fast_config(5_000))
                .await
                .unwrap();
            assert_eq!(data.to_string(), "RLR");
        });
    }

    #[test]
    fn test_wait_timeout() {
        init_logger();
        let source: Option<String> = None;
        let result = block_on(wait_for_match_data(source, fast_config(50)));
        assert!(result.is_err());
    }

    #[test]
    fn test_wait_ignores_incomplete() {
        init_logger();
        let source = Some("LXR".to_string());
        let result = block_on(wait_for_match_data(source, fast_config(50)));
        assert!(result.is_err());
    }
}
