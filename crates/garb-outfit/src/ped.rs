//! Ped model identification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A ped (character) model, identified by its joaat hash.
///
/// Outfit files reference one of the two freemode multiplayer peds in
/// almost all cases; anything else is an opaque skeleton hash that is
/// carried through conversion untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PedModel {
    Male,
    Female,
    Other(i64),
}

impl PedModel {
    /// Hash of `mp_m_freemode_01`, the online male ped.
    pub const MALE_RAW: i64 = 1885233650;
    /// Hash of `mp_f_freemode_01`, the online female ped.
    pub const FEMALE_RAW: i64 = -1667301416;

    pub fn from_raw(raw: i64) -> Self {
        match raw {
            Self::MALE_RAW => Self::Male,
            Self::FEMALE_RAW => Self::Female,
            other => Self::Other(other),
        }
    }

    pub fn raw(&self) -> i64 {
        match *self {
            Self::Male => Self::MALE_RAW,
            Self::Female => Self::FEMALE_RAW,
            Self::Other(other) => other,
        }
    }

    pub fn is_male(&self) -> bool {
        matches!(self, Self::Male)
    }
}

impl fmt::Display for PedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Male => f.write_str("Online Male"),
            Self::Female => f.write_str("Online Female"),
            Self::Other(hash) => write!(f, "Custom ({})", hash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_round_trip() {
        assert_eq!(PedModel::from_raw(1885233650), PedModel::Male);
        assert_eq!(PedModel::from_raw(-1667301416), PedModel::Female);
        assert_eq!(PedModel::from_raw(42), PedModel::Other(42));

        for model in [PedModel::Male, PedModel::Female, PedModel::Other(7)] {
            assert_eq!(PedModel::from_raw(model.raw()), model);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(PedModel::Male.to_string(), "Online Male");
        assert_eq!(PedModel::Female.to_string(), "Online Female");
        assert_eq!(PedModel::Other(42).to_string(), "Custom (42)");
    }
}
