//! IPv6 prefix length <-> 128-bit mask.

use super::textual::{format_compressed, parse};
use crate::error::IpError;
use crate::models::{BitVector128, BITS};

/// Maximum IPv6 prefix length.
pub const MAX_LENGTH: u8 = 128;

/// Build the mask with `prefix` leading ones.
///
/// # Examples
/// ```
/// use ip_tools::ipv6::prefix_to_mask;
/// assert_eq!(prefix_to_mask(0).unwrap().value(), 0);
/// assert_eq!(prefix_to_mask(128).unwrap().value(), u128::MAX);
/// assert!(prefix_to_mask(129).is_err());
/// ```
pub fn prefix_to_mask(prefix: u8) -> Result<BitVector128, IpError> {
    if prefix > MAX_LENGTH {
        return Err(IpError::InvalidArgument(format!(
            "Incorrect parameter prefix {prefix}, need int interval from 0 to {MAX_LENGTH}"
        )));
    }
    let prefix = prefix as u32;
    Ok(BitVector128::all_ones(prefix).shift_left(BITS - prefix))
}

/// Mask for `prefix` in compressed text form, e.g. `64` -> `ffff:ffff:ffff:ffff::`.
pub fn prefix_to_mask_text(prefix: u8) -> Result<String, IpError> {
    Ok(format_compressed(prefix_to_mask(prefix)?))
}

/// Count the set bits of a mask.
///
/// The mask is not checked for contiguity: `ffff::ffff` gives 32.
/// Use [`mask_to_prefix_strict`] to reject such masks.
pub fn mask_to_prefix(mask: &str) -> Result<u8, IpError> {
    let bits = parse(mask)?;
    log::trace!("mask_to_prefix({mask}) bits={}", bits.to_binary_padded(128));
    Ok(bits.count_ones() as u8)
}

/// Like [`mask_to_prefix`], but fails for masks that are not ones followed by zeros.
pub fn mask_to_prefix_strict(mask: &str) -> Result<u8, IpError> {
    let bits = parse(mask)?;
    if !bits.is_contiguous_mask() {
        return Err(IpError::InvalidArgument(format!(
            "mask {mask} is not contiguous"
        )));
    }
    Ok(bits.count_ones() as u8)
}
