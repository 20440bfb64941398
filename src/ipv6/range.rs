//! First and last address of an IPv6 network.

use super::prefix_mask::{mask_to_prefix, prefix_to_mask};
use super::textual::{format_compressed, parse};
use crate::error::IpError;
use crate::models::{AddressRange, BitVector128, Netmask, BITS};

/// Range of an IPv6 network given as prefix length or mask text.
///
/// The first address is the network identifier plus one: the all-zero host
/// part is not part of the range. The last address has all host bits set.
/// For a /128 this yields `first > last`.
///
/// # Examples
/// ```
/// use ip_tools::ipv6::to_range;
/// use ip_tools::models::Netmask;
/// let range = to_range("2001:db8::", &Netmask::Prefix(126)).unwrap();
/// assert_eq!(range.first, "2001:db8::1");
/// assert_eq!(range.last, "2001:db8::3");
/// ```
pub fn to_range(addr: &str, netmask: &Netmask) -> Result<AddressRange, IpError> {
    log::debug!("ipv6 to_range({addr}, {netmask})");
    let (prefix, mask) = match netmask {
        Netmask::Prefix(prefix) => (*prefix, prefix_to_mask(*prefix)?),
        Netmask::Mask(mask) => (mask_to_prefix(mask)?, parse(mask)?),
    };
    let addr_bits = parse(addr)?;

    let network = addr_bits.bitwise_and(mask);
    let host_bits = BITS - prefix as u32;
    log::trace!("network={network} host_bits={host_bits}");

    let first = network
        .add(BitVector128::from(1))
        .ok_or_else(|| overflow(addr, netmask))?;
    let last = network
        .add(BitVector128::all_ones(host_bits))
        .ok_or_else(|| overflow(addr, netmask))?;

    Ok(AddressRange::new(
        format_compressed(first),
        format_compressed(last),
    ))
}

fn overflow(addr: &str, netmask: &Netmask) -> IpError {
    IpError::InvalidArgument(format!(
        "range of {addr} {netmask} exceeds the IPv6 address space"
    ))
}
