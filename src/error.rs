//! Error type shared by every conversion in the crate.

use colored::Colorize;

/// Failure kinds returned by the address conversions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IpError {
    /// Input text is not a valid address of the expected family.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// Prefix out of range, wrong arity, overflow or malformed mask.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A numeric string contained characters outside its radix.
    #[error("parse error: {0}")]
    ParseError(String),
    /// Expanded IPv6 text did not come out at the fixed length.
    ///
    /// Signals a defect in the validator or the expansion code, not bad input.
    #[error("expansion error: {0}")]
    ExpansionError(String),
}

impl IpError {
    /// True for errors that point at a bug rather than at the caller's input.
    pub fn is_defect(&self) -> bool {
        matches!(self, IpError::ExpansionError(_))
    }

    pub(crate) fn invalid_v4(addr: &str) -> IpError {
        log::warn!("Rejected IPv4 input [{}]", addr);
        IpError::InvalidAddress(format!("Please supply a valid IPv4 address, got {addr:?}"))
    }

    pub(crate) fn invalid_v6(addr: &str) -> IpError {
        log::warn!("Rejected IPv6 input [{}]", addr);
        IpError::InvalidAddress(format!("Please supply a valid IPv6 address, got {addr:?}"))
    }

    pub(crate) fn expansion(msg: String) -> IpError {
        log::error!("{} {}", "DEFECT".on_red(), msg.red());
        IpError::ExpansionError(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_defect() {
        assert!(IpError::ExpansionError("x".to_string()).is_defect());
        assert!(!IpError::InvalidAddress("x".to_string()).is_defect());
        assert!(!IpError::InvalidArgument("x".to_string()).is_defect());
        assert!(!IpError::ParseError("x".to_string()).is_defect());
    }

    #[test]
    fn test_expansion_is_defect() {
        let err = IpError::expansion("length of 0000:0000 not equal 39".to_string());
        assert!(err.is_defect());
        assert_eq!(
            err,
            IpError::ExpansionError("length of 0000:0000 not equal 39".to_string())
        );
        assert_eq!(
            err.to_string(),
            "expansion error: length of 0000:0000 not equal 39"
        );
        assert!(!IpError::invalid_v6("zz::").is_defect());
        assert!(!IpError::invalid_v4("1.2.3").is_defect());
    }

    #[test]
    fn test_display() {
        let err = IpError::InvalidArgument("prefix 129".to_string());
        assert_eq!(err.to_string(), "invalid argument: prefix 129");
    }
}
