pub mod match_data;
pub mod source;
pub mod watch;

pub use match_data::{
    get_owned_side, owned_side, GameFeature, MatchData, OwnedSide, FEATURE_COUNT,
};
pub use source::{GameDataSource, SharedMessage};
pub use watch::{wait_for_match_data, watch_match_data, WatchConfig};

pub(crate) const CHANNEL_SIZE: usize = 5;
