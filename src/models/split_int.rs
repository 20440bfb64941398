//! Two-column storage encoding of an IPv6 address.

use serde::de;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize};

/// High and low 64-bit halves of an IPv6 address as decimal strings.
///
/// Serializes as a two-element array, e.g. `["2306139568115548160","1"]`.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct SplitInt128 {
    pub hi: String,
    pub lo: String,
}

impl SplitInt128 {
    pub fn new(hi: impl Into<String>, lo: impl Into<String>) -> SplitInt128 {
        SplitInt128 {
            hi: hi.into(),
            lo: lo.into(),
        }
    }

    pub fn from_halves(hi: u64, lo: u64) -> SplitInt128 {
        SplitInt128 {
            hi: hi.to_string(),
            lo: lo.to_string(),
        }
    }
}

impl Serialize for SplitInt128 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.hi)?;
        seq.serialize_element(&self.lo)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for SplitInt128 {
    fn deserialize<D>(deserializer: D) -> Result<SplitInt128, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parts: Vec<String> = Vec::deserialize(deserializer)?;
        if parts.len() != 2 {
            return Err(de::Error::custom(format!(
                "invalid split int: expected 2 values, got {}",
                parts.len()
            )));
        }
        let mut parts = parts.into_iter();
        match (parts.next(), parts.next()) {
            (Some(hi), Some(lo)) => Ok(SplitInt128 { hi, lo }),
            _ => Err(de::Error::custom("invalid split int")),
        }
    }
}

impl std::fmt::Display for SplitInt128 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.hi, self.lo)
    }
}
