//! The "prefix or mask" argument accepted by the range calculators.

use crate::error::IpError;
use crate::validate::is_decimal_digits;
use std::str::FromStr;

/// Network size given either as a prefix length or as mask text.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Netmask {
    /// Prefix length, e.g. `24`.
    Prefix(u8),
    /// Mask in address notation, e.g. `"255.255.255.0"` or `"ffff:ffff::"`.
    Mask(String),
}

impl Netmask {
    /// All-digit text is a prefix length, anything else is mask text.
    ///
    /// # Examples
    /// ```
    /// use ip_tools::models::Netmask;
    /// assert_eq!(Netmask::parse("24").unwrap(), Netmask::Prefix(24));
    /// assert_eq!(
    ///     Netmask::parse("255.255.0.0").unwrap(),
    ///     Netmask::Mask("255.255.0.0".to_string())
    /// );
    /// ```
    pub fn parse(s: &str) -> Result<Netmask, IpError> {
        let s = s.trim();
        if is_decimal_digits(s) {
            let prefix = s
                .parse::<u8>()
                .map_err(|_| IpError::InvalidArgument(format!("prefix out of range: {s}")))?;
            Ok(Netmask::Prefix(prefix))
        } else {
            Ok(Netmask::Mask(s.to_string()))
        }
    }
}

impl FromStr for Netmask {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Netmask::parse(s)
    }
}

impl From<u8> for Netmask {
    fn from(prefix: u8) -> Self {
        Netmask::Prefix(prefix)
    }
}

impl std::fmt::Display for Netmask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Netmask::Prefix(prefix) => write!(f, "/{prefix}"),
            Netmask::Mask(mask) => write!(f, "{mask}"),
        }
    }
}
