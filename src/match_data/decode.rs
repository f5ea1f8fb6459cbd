use crate::match_data::{GameFeature, OwnedSide, FEATURE_COUNT};
use crate::source::GameDataSource;
use log::trace;

/// Determine the `OwnedSide` of a `GameFeature` from the current
/// game specific message of `source`.
///
/// Make sure to check for `OwnedSide::Unknown`.
pub fn get_owned_side<S: GameDataSource + ?Sized>(source: &S, feature: GameFeature) -> OwnedSide {
    owned_side(source.game_specific_message().as_deref(), feature)
}

/// Determine the `OwnedSide` of a `GameFeature` from a game specific message.
///
/// `None` means the message is not yet available. Messages shorter than
/// three characters are invalid, longer messages are permitted but only
/// the first three characters are read.
pub fn owned_side(message: Option<&str>, feature: GameFeature) -> OwnedSide {
    let message = match message {
        None => return OwnedSide::Unknown,
        Some(m) => m.as_bytes(),
    };
    if message.len() < FEATURE_COUNT {
        return unknown_message(message);
    }
    let index = feature.index();
    if index >= FEATURE_COUNT {
        return OwnedSide::Unknown;
    }
    plate_from_byte(message[index])
}

/// `L` and `R` in either case, anything else is unknown
#[inline(always)]
pub(crate) const fn plate_from_byte(b: u8) -> OwnedSide {
    match b {
        b'L' | b'l' => OwnedSide::Left,
        b'R' | b'r' => OwnedSide::Right,
        _ => OwnedSide::Unknown,
    }
}

#[cold]
fn unknown_message(message: &[u8]) -> OwnedSide {
    trace!(
        "game specific message too short: {:?}",
        String::from_utf8_lossy(message)
    );
    OwnedSide::Unknown
}
