//! Ensemble identifiers.
//!
//! An ensemble is addressed by the UUID of the case it belongs to plus its
//! name within that case. The string form `<case-uuid>::<name>` is the
//! stable key used in persisted session records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Identifies one ensemble within a case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnsembleIdent {
    pub case_uuid: Uuid,
    pub ensemble_name: String,
}

impl EnsembleIdent {
    pub fn new(case_uuid: Uuid, ensemble_name: impl Into<String>) -> Self {
        Self {
            case_uuid,
            ensemble_name: ensemble_name.into(),
        }
    }
}

impl fmt::Display for EnsembleIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.case_uuid, self.ensemble_name)
    }
}

/// Error parsing an ensemble identifier string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnsembleIdentError {
    pub input: String,
}

impl fmt::Display for ParseEnsembleIdentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid ensemble identifier: {:?}", self.input)
    }
}

impl std::error::Error for ParseEnsembleIdentError {}

impl FromStr for EnsembleIdent {
    type Err = ParseEnsembleIdentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseEnsembleIdentError {
            input: s.to_string(),
        };
        let (uuid_part, name_part) = s.split_once("::").ok_or_else(err)?;
        if name_part.is_empty() {
            return Err(err());
        }
        let case_uuid = Uuid::parse_str(uuid_part).map_err(|_| err())?;
        Ok(Self {
            case_uuid,
            ensemble_name: name_part.to_string(),
        })
    }
}

// Persisted records store the string form, not the struct fields.
impl Serialize for EnsembleIdent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EnsembleIdent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident() -> EnsembleIdent {
        EnsembleIdent::new(
            Uuid::parse_str("11111111-2222-3333-4444-555555555555").unwrap(),
            "iter-0",
        )
    }

    #[test]
    fn test_display_round_trip() {
        let id = ident();
        let parsed: EnsembleIdent = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert!("not-an-ident".parse::<EnsembleIdent>().is_err());
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        assert!("11111111-2222-3333-4444-555555555555::"
            .parse::<EnsembleIdent>()
            .is_err());
    }

    #[test]
    fn test_parse_rejects_bad_uuid() {
        assert!("abc::iter-0".parse::<EnsembleIdent>().is_err());
    }

    #[test]
    fn test_serializes_as_string_form() {
        let id = ident();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(
            json,
            "\"11111111-2222-3333-4444-555555555555::iter-0\""
        );
        let back: EnsembleIdent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_name_may_contain_separator_free_colons() {
        let s = format!("{}::a:b", ident().case_uuid);
        let parsed: EnsembleIdent = s.parse().unwrap();
        assert_eq!(parsed.ensemble_name, "a:b");
    }
}
