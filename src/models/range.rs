//! First/last address pair produced by the range calculators.

use serde::{Deserialize, Serialize};

/// Inclusive range of addresses of one family, in canonical text form.
#[derive(Serialize, Deserialize, Eq, PartialEq, Debug, Clone, Hash)]
pub struct AddressRange {
    /// First address of the range.
    pub first: String,
    /// Last address of the range.
    pub last: String,
}

impl AddressRange {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> AddressRange {
        AddressRange {
            first: first.into(),
            last: last.into(),
        }
    }

    pub fn into_tuple(self) -> (String, String) {
        (self.first, self.last)
    }
}

impl std::fmt::Display for AddressRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} - {}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_display() {
        let range = AddressRange::new("10.0.0.0", "10.0.0.255");
        assert_eq!(range.to_string(), "10.0.0.0 - 10.0.0.255");
        assert_eq!(
            range.into_tuple(),
            ("10.0.0.0".to_string(), "10.0.0.255".to_string())
        );
    }

    #[test]
    fn test_range_json() {
        let range = AddressRange::new("2001:db8::1", "2001:db8::3");
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"first":"2001:db8::1","last":"2001:db8::3"}"#);
        let back: AddressRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}
