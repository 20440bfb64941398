//! IPv6 canonicalization and arithmetic.
//!
//! - [`textual`] - expansion, compression and parsing of colon-hex text
//! - [`prefix_mask`] - prefix length <-> mask
//! - [`range`] - first/last address of a network
//! - [`numeric`] - decimal, split 64-bit and packed binary encodings

pub mod numeric;
pub mod prefix_mask;
pub mod range;
pub mod textual;

pub use numeric::{
    bin_to_addr, from_split_int, from_split_int_values, numeric_to_addr, split_int_to_addr,
    to_bin, to_numeric, to_split_int,
};
pub use prefix_mask::{mask_to_prefix, mask_to_prefix_strict, prefix_to_mask, prefix_to_mask_text};
pub use range::to_range;
pub use textual::{compress, expand, format_compressed, format_expanded, parse, validate};
