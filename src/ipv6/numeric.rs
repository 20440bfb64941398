//! Storage encodings of IPv6 addresses: decimal, split 64-bit pair and packed bytes.

use super::textual::{format_compressed, parse};
use crate::error::IpError;
use crate::models::{BitVector128, SplitInt128};
use crate::validate::is_decimal_digits;

/// Address as an unsigned decimal string; `::` is `"0"`.
///
/// # Examples
/// ```
/// use ip_tools::ipv6::to_numeric;
/// assert_eq!(to_numeric("::").unwrap(), "0");
/// assert_eq!(to_numeric("::ff").unwrap(), "255");
/// ```
pub fn to_numeric(addr: &str) -> Result<String, IpError> {
    Ok(parse(addr)?.value().to_string())
}

/// Decimal string back to compressed address text.
pub fn numeric_to_addr(dec: &str) -> Result<String, IpError> {
    let value: u128 = parse_decimal(dec)?;
    Ok(format_compressed(BitVector128::from(value)))
}

/// High and low 64-bit halves as decimal strings.
///
/// # Examples
/// ```
/// use ip_tools::ipv6::to_split_int;
/// let split = to_split_int("::1").unwrap();
/// assert_eq!((split.hi.as_str(), split.lo.as_str()), ("0", "1"));
/// ```
pub fn to_split_int(addr: &str) -> Result<SplitInt128, IpError> {
    let (hi, lo) = parse(addr)?.to_u64_pair();
    Ok(SplitInt128::from_halves(hi, lo))
}

/// Join two 64-bit decimal halves back into compressed address text.
pub fn from_split_int(hi: &str, lo: &str) -> Result<String, IpError> {
    let hi: u64 = parse_decimal(hi)?;
    let lo: u64 = parse_decimal(lo)?;
    Ok(format_compressed(BitVector128::from_u64_pair(hi, lo)))
}

/// [`from_split_int`] for a stored value list, which must hold exactly two entries.
pub fn from_split_int_values<S: AsRef<str>>(values: &[S]) -> Result<String, IpError> {
    match values {
        [hi, lo] => from_split_int(hi.as_ref(), lo.as_ref()),
        _ => Err(IpError::InvalidArgument(format!(
            "split int needs exactly 2 values, got {}",
            values.len()
        ))),
    }
}

/// [`from_split_int`] for a [`SplitInt128`].
pub fn split_int_to_addr(split: &SplitInt128) -> Result<String, IpError> {
    from_split_int(&split.hi, &split.lo)
}

/// Packed 16-byte network-order form.
pub fn to_bin(addr: &str) -> Result<[u8; 16], IpError> {
    Ok(parse(addr)?.to_bytes())
}

/// Packed 16-byte form back to compressed address text.
pub fn bin_to_addr(bin: &[u8]) -> Result<String, IpError> {
    let bytes: [u8; 16] = bin.try_into().map_err(|_| {
        IpError::InvalidArgument(format!("binary address needs 16 bytes, got {}", bin.len()))
    })?;
    Ok(format_compressed(BitVector128::from_bytes(bytes)))
}

/// Parse an unsigned decimal string. Non-digits are a parse error, values
/// too large for `T` an invalid argument.
fn parse_decimal<T: std::str::FromStr>(dec: &str) -> Result<T, IpError> {
    if !is_decimal_digits(dec) {
        log::warn!("Rejected decimal input [{dec}]");
        return Err(IpError::ParseError(format!("not a decimal number: {dec:?}")));
    }
    dec.parse::<T>().map_err(|_| {
        IpError::InvalidArgument(format!(
            "{dec} does not fit in {} bits",
            std::mem::size_of::<T>() * 8
        ))
    })
}
