mod decode;
mod snapshot;

use bincode::{Decode, Encode};
use std::fmt::{Display, Formatter};

pub use decode::{get_owned_side, owned_side};
pub use snapshot::MatchData;

/// number of features encoded in the game specific message
pub const FEATURE_COUNT: usize = 3;

/// Game features including the SWITCH and SCALE.
///
/// Near denotes close to the alliance wall and far denotes
/// furthest from the alliance wall.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Encode, Decode)]
#[repr(u8)]
pub enum GameFeature {
    SwitchNear = 0,
    Scale = 1,
    SwitchFar = 2,
}

/// Which side (from the perspective of the alliance station) is owned
/// by the alliance during the match.
///
/// `Unknown` when game data is not yet made available by the FMS or DS.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Encode, Decode)]
#[repr(u8)]
pub enum OwnedSide {
    Unknown = 0,
    Left = 1,
    Right = 2,
}

impl GameFeature {
    /// all features, in message order
    pub const ALL: [GameFeature; FEATURE_COUNT] =
        [GameFeature::SwitchNear, GameFeature::Scale, GameFeature::SwitchFar];

    /// position of this feature in the game specific message
    #[inline(always)]
    pub const fn index(&self) -> usize {
        match self {
            GameFeature::SwitchNear => 0,
            GameFeature::Scale => 1,
            GameFeature::SwitchFar => 2,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            GameFeature::SwitchNear => "SWITCH_NEAR",
            GameFeature::Scale => "SCALE",
            GameFeature::SwitchFar => "SWITCH_FAR",
        }
    }
}

impl OwnedSide {
    pub const fn name(&self) -> &'static str {
        match self {
            OwnedSide::Left => "LEFT",
            OwnedSide::Right => "RIGHT",
            OwnedSide::Unknown => "UNKNOWN",
        }
    }

    #[inline(always)]
    pub const fn is_known(&self) -> bool {
        !matches!(self, OwnedSide::Unknown)
    }
}

impl Display for GameFeature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for OwnedSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
