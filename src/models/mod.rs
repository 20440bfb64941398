//! Value types shared by the IPv4 and IPv6 conversions.
//!
//! - [`BitVector128`] - 128-bit unsigned integer behind all IPv6 arithmetic
//! - [`AddressRange`] - first/last address pair
//! - [`SplitInt128`] - IPv6 address as two 64-bit decimal strings
//! - [`Netmask`] - prefix length or mask text

mod bitvec;
mod netmask;
mod range;
mod split_int;

// Re-export public types
pub use bitvec::{BitVector128, BITS, HEX_DIGITS};
pub use netmask::Netmask;
pub use range::AddressRange;
pub use split_int::SplitInt128;
