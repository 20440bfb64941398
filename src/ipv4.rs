//! IPv4 mask, prefix, integer and range conversions.
//!
//! The 32-bit counterpart of [`crate::ipv6`], done with native `u32` arithmetic.

use crate::error::IpError;
use crate::models::{AddressRange, Netmask};
use crate::validate::is_valid_v4;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Check dotted-quad IPv4 text.
pub fn validate(addr: &str) -> bool {
    is_valid_v4(addr)
}

fn parse(addr: &str) -> Result<Ipv4Addr, IpError> {
    Ipv4Addr::from_str(addr).map_err(|_| IpError::invalid_v4(addr))
}

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_tools::ipv4::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, IpError> {
    let host_len = MAX_LENGTH
        .checked_sub(len)
        .ok_or_else(|| prefix_too_long(len))?;
    Ok(u32::MAX.checked_shl(host_len as u32).unwrap_or(0))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, IpError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast (last) address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, IpError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Count the set bits of a dotted mask.
///
/// Truncated masks are padded with `.0`, so `"255.255"` means `255.255.0.0`.
///
/// # Examples
/// ```
/// use ip_tools::ipv4::mask_to_prefix;
/// assert_eq!(mask_to_prefix("255.255.255.0").unwrap(), 24);
/// assert_eq!(mask_to_prefix("255.255").unwrap(), 16);
/// ```
pub fn mask_to_prefix(mask: &str) -> Result<u8, IpError> {
    let dots = mask.matches('.').count();
    let mut mask = mask.to_string();
    if dots < 3 {
        mask.push_str(&".0".repeat(3 - dots));
    }
    let bits = Ipv4Addr::from_str(&mask).map(u32::from).map_err(|_| {
        log::warn!("Rejected IPv4 mask [{mask}]");
        IpError::InvalidAddress(format!("Incorrect parameter mask {mask}"))
    })?;
    log::trace!("mask_to_prefix({mask}) bits={bits:032b}");
    Ok(bits.count_ones() as u8)
}

/// Dotted mask for a prefix length between 1 and 32.
///
/// # Examples
/// ```
/// use ip_tools::ipv4::prefix_to_mask;
/// assert_eq!(prefix_to_mask(24).unwrap(), "255.255.255.0");
/// assert!(prefix_to_mask(0).is_err());
/// ```
pub fn prefix_to_mask(prefix: u8) -> Result<String, IpError> {
    if !(1..=MAX_LENGTH).contains(&prefix) {
        return Err(IpError::InvalidArgument(format!(
            "Incorrect parameter prefix {prefix}, need int interval from 1 to {MAX_LENGTH}"
        )));
    }
    Ok(Ipv4Addr::from(get_cidr_mask(prefix)?).to_string())
}

/// First and last address of the network holding `addr`.
///
/// Without a mask the range is the single address. The first address is
/// the network identifier itself, the last has all host bits set.
///
/// # Examples
/// ```
/// use ip_tools::ipv4::to_range;
/// use ip_tools::models::Netmask;
/// let range = to_range("192.168.1.10", Some(&Netmask::Prefix(24))).unwrap();
/// assert_eq!(range.first, "192.168.1.0");
/// assert_eq!(range.last, "192.168.1.255");
/// ```
pub fn to_range(addr: &str, netmask: Option<&Netmask>) -> Result<AddressRange, IpError> {
    let ip = parse(addr)?;
    let netmask = match netmask {
        Some(netmask) => netmask,
        None => return Ok(AddressRange::new(ip.to_string(), ip.to_string())),
    };
    log::debug!("ipv4 to_range({addr}, {netmask})");

    let prefix = match netmask {
        Netmask::Prefix(prefix) => *prefix,
        Netmask::Mask(mask) if !mask.contains('.') => {
            return Err(IpError::InvalidArgument(format!(
                "Incorrect parameter mask {mask}, need dotted mask or a prefix length"
            )))
        }
        Netmask::Mask(mask) => mask_to_prefix(mask)?,
    };
    let first = cut_addr(ip, prefix)?;
    let last = broadcast_addr(ip, prefix)?;
    Ok(AddressRange::new(first.to_string(), last.to_string()))
}

/// Address as an unsigned 32-bit integer.
pub fn to_int(addr: &str) -> Result<u32, IpError> {
    Ok(u32::from(parse(addr)?))
}

pub fn from_int(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

fn prefix_too_long(len: u8) -> IpError {
    IpError::InvalidArgument(format!(
        "Network length {len} is too long, need int interval from 0 to {MAX_LENGTH}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
        assert!(get_cidr_mask(u8::MAX).is_err());
        assert_eq!(get_cidr_mask(1).unwrap(), 0x80000000);
        assert_eq!(get_cidr_mask(31).unwrap(), 0xFFFFFFFE);
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert_eq!(broadcast_addr(ip, 0).unwrap(), Ipv4Addr::BROADCAST);
    }

    #[test]
    fn test_mask_to_prefix() {
        assert_eq!(mask_to_prefix("255.255.255.0").unwrap(), 24);
        assert_eq!(mask_to_prefix("255.255.255.255").unwrap(), 32);
        assert_eq!(mask_to_prefix("255.255.255.128").unwrap(), 25);
        assert_eq!(mask_to_prefix("0.0.0.0").unwrap(), 0);
        assert_eq!(mask_to_prefix("255").unwrap(), 8);
        assert_eq!(mask_to_prefix("255.255").unwrap(), 16);
        assert_eq!(mask_to_prefix("255.255.240").unwrap(), 20);
        assert!(matches!(
            mask_to_prefix("255.255.256.0"),
            Err(IpError::InvalidAddress(_))
        ));
        assert!(matches!(
            mask_to_prefix("mask"),
            Err(IpError::InvalidAddress(_))
        ));
        assert!(matches!(
            mask_to_prefix("255.255.255.0.0"),
            Err(IpError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_prefix_to_mask() {
        assert_eq!(prefix_to_mask(1).unwrap(), "128.0.0.0");
        assert_eq!(prefix_to_mask(8).unwrap(), "255.0.0.0");
        assert_eq!(prefix_to_mask(20).unwrap(), "255.255.240.0");
        assert_eq!(prefix_to_mask(24).unwrap(), "255.255.255.0");
        assert_eq!(prefix_to_mask(32).unwrap(), "255.255.255.255");
        assert!(matches!(prefix_to_mask(0), Err(IpError::InvalidArgument(_))));
        assert!(matches!(prefix_to_mask(33), Err(IpError::InvalidArgument(_))));
    }

    #[test]
    fn test_mask_prefix_inverse() {
        for p in 1..=MAX_LENGTH {
            assert_eq!(mask_to_prefix(&prefix_to_mask(p).unwrap()).unwrap(), p);
        }
    }

    #[test]
    fn test_to_range() {
        assert_eq!(
            to_range("192.168.1.10", Some(&Netmask::Prefix(24))).unwrap(),
            AddressRange::new("192.168.1.0", "192.168.1.255")
        );
        assert_eq!(
            to_range("192.168.1.10", Some(&Netmask::Mask("255.255.0.0".into()))).unwrap(),
            AddressRange::new("192.168.0.0", "192.168.255.255")
        );
        assert_eq!(
            to_range("10.6.2.80", Some(&Netmask::Prefix(28))).unwrap(),
            AddressRange::new("10.6.2.80", "10.6.2.95")
        );
        assert_eq!(
            to_range("10.6.2.80", None).unwrap(),
            AddressRange::new("10.6.2.80", "10.6.2.80")
        );
        assert_eq!(
            to_range("10.6.2.80", Some(&Netmask::Prefix(32))).unwrap(),
            AddressRange::new("10.6.2.80", "10.6.2.80")
        );
        assert_eq!(
            to_range("10.6.2.80", Some(&Netmask::Prefix(0))).unwrap(),
            AddressRange::new("0.0.0.0", "255.255.255.255")
        );
    }

    #[test]
    fn test_to_range_invalid() {
        assert!(matches!(
            to_range("192.168.1", Some(&Netmask::Prefix(24))),
            Err(IpError::InvalidAddress(_))
        ));
        assert!(matches!(
            to_range("192.168.1.1", Some(&Netmask::Prefix(33))),
            Err(IpError::InvalidArgument(_))
        ));
        assert!(matches!(
            to_range("192.168.1.1", Some(&Netmask::Mask("ffff::".into()))),
            Err(IpError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_to_range_digit_netmask() {
        let parsed: Netmask = "24".parse().unwrap();
        assert_eq!(
            to_range("10.0.0.1", Some(&parsed)).unwrap(),
            to_range("10.0.0.1", Some(&Netmask::Prefix(24))).unwrap()
        );
        assert_eq!(
            to_range("10.0.0.1", Some(&parsed)).unwrap(),
            AddressRange::new("10.0.0.0", "10.0.0.255")
        );
        // bare digits as mask text would pad to 24.0.0.0
        assert!(matches!(
            to_range("10.0.0.1", Some(&Netmask::Mask("24".into()))),
            Err(IpError::InvalidArgument(_))
        ));
        assert!(matches!(
            to_range("10.0.0.1", Some(&Netmask::Mask("255".into()))),
            Err(IpError::InvalidArgument(_))
        ));
        assert_eq!(
            to_range("10.0.0.1", Some(&Netmask::Mask("255.0".into()))).unwrap(),
            AddressRange::new("10.0.0.0", "10.255.255.255")
        );
    }

    #[test]
    fn test_int() {
        assert_eq!(to_int("0.0.0.0").unwrap(), 0);
        assert_eq!(to_int("192.168.1.10").unwrap(), 3232235786);
        assert_eq!(to_int("255.255.255.255").unwrap(), u32::MAX);
        assert!(matches!(to_int("1.2.3"), Err(IpError::InvalidAddress(_))));
        assert_eq!(from_int(3232235786), "192.168.1.10");
        assert_eq!(from_int(0), "0.0.0.0");
    }
}
