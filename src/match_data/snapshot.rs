use crate::match_data::decode::{owned_side, plate_from_byte};
use crate::match_data::{GameFeature, OwnedSide, FEATURE_COUNT};
use crate::source::GameDataSource;
use anyhow::{Error, Result};
use bincode::config::Configuration;
use bincode::{config, decode_from_slice, encode_to_vec, Decode, Encode};
use std::fmt::{Display, Formatter, Write};
use std::str::FromStr;

const BIN_CONFIG: Configuration = config::standard().with_variable_int_encoding();

/// Owned side of every game feature, decoded from one game specific message.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Encode, Decode)]
pub struct MatchData {
    pub switch_near: OwnedSide,
    pub scale: OwnedSide,
    pub switch_far: OwnedSide,
}

/// nothing known before the FMS sends data
impl Default for MatchData {
    fn default() -> Self {
        MatchData {
            switch_near: OwnedSide::Unknown,
            scale: OwnedSide::Unknown,
            switch_far: OwnedSide::Unknown,
        }
    }
}

impl MatchData {
    /// Lenient decoding: every feature that cannot be read is `Unknown`.
    pub fn decode(message: Option<&str>) -> Self {
        MatchData {
            switch_near: owned_side(message, GameFeature::SwitchNear),
            scale: owned_side(message, GameFeature::Scale),
            switch_far: owned_side(message, GameFeature::SwitchFar),
        }
    }

    /// read and decode the current message of `source`
    pub fn from_source<S: GameDataSource + ?Sized>(source: &S) -> Self {
        Self::decode(source.game_specific_message().as_deref())
    }

    pub fn get(&self, feature: GameFeature) -> OwnedSide {
        match feature {
            GameFeature::SwitchNear => self.switch_near,
            GameFeature::Scale => self.scale,
            GameFeature::SwitchFar => self.switch_far,
        }
    }

    /// true if no feature is `Unknown`
    pub fn is_complete(&self) -> bool {
        GameFeature::ALL.iter().all(|f| self.get(*f).is_known())
    }
}

/// Strict parsing: fails unless the first three characters are all `L` or `R`.
impl FromStr for MatchData {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() < FEATURE_COUNT {
            return Err(Error::msg(format!(
                "game specific message too short: {:?}",
                s
            )));
        }
        let mut sides = [OwnedSide::Unknown; FEATURE_COUNT];
        for feature in GameFeature::ALL {
            let side = plate_from_byte(bytes[feature.index()]);
            if !side.is_known() {
                return Err(Error::msg(format!(
                    "invalid plate for {} in game specific message {:?}",
                    feature, s
                )));
            }
            sides[feature.index()] = side;
        }
        let [switch_near, scale, switch_far] = sides;
        Ok(MatchData {
            switch_near,
            scale,
            switch_far,
        })
    }
}

/// canonical message form, `?` for unknown plates
impl Display for MatchData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for feature in GameFeature::ALL {
            f.write_char(match self.get(feature) {
                OwnedSide::Left => 'L',
                OwnedSide::Right => 'R',
                OwnedSide::Unknown => '?',
            })?;
        }
        Ok(())
    }
}

impl Into<Vec<u8>> for MatchData {
    fn into(self) -> Vec<u8> {
        // fixed size enums, encoding into a Vec cannot fail
        encode_to_vec(self, BIN_CONFIG).unwrap_or_default()
    }
}

impl TryFrom<Vec<u8>> for MatchData {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> std::result::Result<Self, Self::Error> {
        match decode_from_slice(&value, BIN_CONFIG) {
            Ok((data, _)) => Ok(data),
            Err(_) => Err(Error::msg("match data decode error".to_string())),
        }
    }
}
