//! IPv4 and IPv6 address toolkit.
//!
//! Canonicalizes IPv6 text (expansion / `::` compression), converts between
//! prefix lengths and masks, computes network ranges, and encodes addresses
//! as decimal strings, split 64-bit integer pairs and packed bytes for storage.
//!
//! ```
//! use ip_tools::{ipv4, ipv6, models::Netmask};
//!
//! assert_eq!(ipv6::compress("2001:0db8:0000:0000:0000:0000:0000:0001").unwrap(), "2001:db8::1");
//! assert_eq!(ipv4::prefix_to_mask(24).unwrap(), "255.255.255.0");
//!
//! let range = ipv6::to_range("2001:db8::", &Netmask::Prefix(126)).unwrap();
//! assert_eq!((range.first.as_str(), range.last.as_str()), ("2001:db8::1", "2001:db8::3"));
//! ```

mod error;
pub mod ipv4;
pub mod ipv6;
pub mod logging;
pub mod models;
pub mod validate;

pub use error::IpError;
pub use models::{AddressRange, BitVector128, Netmask, SplitInt128};
pub use validate::{is_valid_v4, is_valid_v6};
