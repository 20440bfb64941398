//! Address syntax validation and digit-string grammars.
//!
//! IPv6 text with an embedded dotted quad (`::ffff:1.2.3.4`) and zone ids
//! (`fe80::1%eth0`) are rejected: only the colon-hex form is accepted.

use lazy_static::lazy_static;
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

lazy_static! {
    static ref DECIMAL_RE: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
    static ref HEX_RE: Regex = Regex::new(r"^[0-9A-Fa-f]+$").expect("Invalid Regex?");
    static ref V6_CHARS_RE: Regex = Regex::new(r"^[0-9A-Fa-f:]+$").expect("Invalid Regex?");
}

/// Check dotted-quad IPv4 text, e.g. `"192.168.1.10"`.
///
/// # Examples
/// ```
/// use ip_tools::validate::is_valid_v4;
/// assert!(is_valid_v4("10.0.0.1"));
/// assert!(!is_valid_v4("10.0.0"));
/// assert!(!is_valid_v4("256.0.0.1"));
/// ```
pub fn is_valid_v4(addr: &str) -> bool {
    Ipv4Addr::from_str(addr).is_ok()
}

/// Check colon-hex IPv6 text, with or without `::` elision.
///
/// # Examples
/// ```
/// use ip_tools::validate::is_valid_v6;
/// assert!(is_valid_v6("2001:db8::1"));
/// assert!(is_valid_v6("::"));
/// assert!(!is_valid_v6("2001:db8::1::2"));
/// assert!(!is_valid_v6("::ffff:10.0.0.1"));
/// ```
pub fn is_valid_v6(addr: &str) -> bool {
    V6_CHARS_RE.is_match(addr) && Ipv6Addr::from_str(addr).is_ok()
}

/// Non-empty string of ASCII decimal digits.
pub(crate) fn is_decimal_digits(s: &str) -> bool {
    DECIMAL_RE.is_match(s)
}

/// Non-empty string of ASCII hex digits, either case.
pub(crate) fn is_hex_digits(s: &str) -> bool {
    HEX_RE.is_match(s)
}
