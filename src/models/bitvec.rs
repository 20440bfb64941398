//! Fixed-width 128-bit unsigned integer used for all IPv6 arithmetic.

use crate::error::IpError;
use crate::validate::is_hex_digits;

/// Width of an IPv6 address in bits.
pub const BITS: u32 = 128;

/// Number of hex digits in a full 128-bit value.
pub const HEX_DIGITS: usize = 32;

/// 128-bit unsigned value, big-endian when rendered or split.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct BitVector128(u128);

impl BitVector128 {
    pub const ZERO: BitVector128 = BitVector128(0);
    pub const MAX: BitVector128 = BitVector128(u128::MAX);

    /// Parse up to 32 hex digits as a big-endian value.
    ///
    /// # Examples
    /// ```
    /// use ip_tools::models::BitVector128;
    /// let v = BitVector128::from_hex_digits("ff").unwrap();
    /// assert_eq!(v.value(), 255);
    /// assert!(BitVector128::from_hex_digits("fg").is_err());
    /// ```
    pub fn from_hex_digits(s: &str) -> Result<BitVector128, IpError> {
        if !is_hex_digits(s) {
            return Err(IpError::ParseError(format!("not a hex string: {s:?}")));
        }
        if s.len() > HEX_DIGITS {
            return Err(IpError::ParseError(format!(
                "hex string longer than {HEX_DIGITS} digits: {s:?}"
            )));
        }
        let value = u128::from_str_radix(s, 16)
            .map_err(|e| IpError::ParseError(format!("hex string {s:?}: {e}")))?;
        Ok(BitVector128(value))
    }

    /// Render as lowercase hex, zero-padded on the left to `width` digits.
    pub fn to_hex_padded(&self, width: usize) -> String {
        format!("{:0width$x}", self.0, width = width)
    }

    /// Render as binary digits, zero-padded on the left to `width` digits.
    pub fn to_binary_padded(&self, width: usize) -> String {
        format!("{:0width$b}", self.0, width = width)
    }

    /// Shift towards the high bits. Shifting by the full width or more gives zero.
    pub fn shift_left(&self, n: u32) -> BitVector128 {
        BitVector128(self.0.checked_shl(n).unwrap_or(0))
    }

    pub fn bitwise_and(&self, other: BitVector128) -> BitVector128 {
        BitVector128(self.0 & other.0)
    }

    /// Unsigned add, `None` when the sum does not fit in 128 bits.
    pub fn add(&self, other: BitVector128) -> Option<BitVector128> {
        self.0.checked_add(other.0).map(BitVector128)
    }

    /// Value with the low `n` bits set. `n` above 128 is clamped.
    ///
    /// # Examples
    /// ```
    /// use ip_tools::models::BitVector128;
    /// assert_eq!(BitVector128::all_ones(0).value(), 0);
    /// assert_eq!(BitVector128::all_ones(4).value(), 0xf);
    /// assert_eq!(BitVector128::all_ones(128), BitVector128::MAX);
    /// ```
    pub fn all_ones(n: u32) -> BitVector128 {
        if n >= BITS {
            BitVector128::MAX
        } else {
            BitVector128((1u128 << n) - 1)
        }
    }

    pub fn count_ones(&self) -> u32 {
        self.0.count_ones()
    }

    /// True when the value is a run of ones followed only by zeros (zero included).
    pub fn is_contiguous_mask(&self) -> bool {
        self.0.leading_ones() + self.0.trailing_zeros() >= BITS
    }

    pub fn from_u64_pair(hi: u64, lo: u64) -> BitVector128 {
        BitVector128(((hi as u128) << 64) | lo as u128)
    }

    /// Split into the high and low 64-bit halves.
    pub fn to_u64_pair(&self) -> (u64, u64) {
        ((self.0 >> 64) as u64, self.0 as u64)
    }

    pub fn from_bytes(bytes: [u8; 16]) -> BitVector128 {
        BitVector128(u128::from_be_bytes(bytes))
    }

    /// Network byte order.
    pub fn to_bytes(&self) -> [u8; 16] {
        self.0.to_be_bytes()
    }

    /// The eight 16-bit groups, most significant first.
    pub fn groups(&self) -> [u16; 8] {
        let mut groups = [0u16; 8];
        for (i, group) in groups.iter_mut().enumerate() {
            *group = (self.0 >> (112 - 16 * i)) as u16;
        }
        groups
    }

    pub fn from_groups(groups: [u16; 8]) -> BitVector128 {
        BitVector128(
            groups
                .iter()
                .fold(0u128, |acc, group| (acc << 16) | *group as u128),
        )
    }

    pub fn value(&self) -> u128 {
        self.0
    }
}

impl From<u128> for BitVector128 {
    fn from(value: u128) -> Self {
        BitVector128(value)
    }
}

impl std::fmt::Display for BitVector128 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_hex_padded(HEX_DIGITS))
    }
}
