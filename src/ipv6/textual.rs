//! Colon-hex text form of IPv6 addresses: expansion, compression and parsing.

use crate::error::IpError;
use crate::models::{BitVector128, HEX_DIGITS};
use crate::validate::is_valid_v6;

/// Number of 16-bit groups in an address.
pub const GROUPS: usize = 8;

/// Length of the fully expanded text, `xxxx:` * 7 + `xxxx`.
pub const EXPANDED_LEN: usize = 39;

/// Check IPv6 text syntax.
pub fn validate(addr: &str) -> bool {
    is_valid_v6(addr)
}

/// Expand an IPv6 address to all 8 groups of 4 lowercase hex digits.
///
/// # Examples
/// ```
/// use ip_tools::ipv6::expand;
/// assert_eq!(expand("::1").unwrap(), "0000:0000:0000:0000:0000:0000:0000:0001");
/// assert_eq!(expand("2001:DB8::").unwrap(), "2001:0db8:0000:0000:0000:0000:0000:0000");
/// ```
pub fn expand(addr: &str) -> Result<String, IpError> {
    if !validate(addr) {
        return Err(IpError::invalid_v6(addr));
    }
    log::debug!("expand({addr})");

    let groups: Vec<&str> = match addr.split_once("::") {
        Some((left, right)) => {
            let left = split_groups(left);
            let right = split_groups(right);
            let missing = GROUPS.saturating_sub(left.len() + right.len());
            log::trace!("expand {addr}: left={left:?} right={right:?} missing={missing}");
            left.into_iter()
                .chain(std::iter::repeat("0").take(missing))
                .chain(right)
                .collect()
        }
        None => split_groups(addr),
    };

    let result = groups
        .iter()
        .map(|g| format!("{:0>4}", g.to_ascii_lowercase()))
        .collect::<Vec<String>>()
        .join(":");

    if result.len() == EXPANDED_LEN {
        Ok(result)
    } else {
        Err(IpError::expansion(format!(
            "Error expand ipv6, length of {result} not equal {EXPANDED_LEN}"
        )))
    }
}

/// Rewrite an IPv6 address in its shortest canonical form.
///
/// # Examples
/// ```
/// use ip_tools::ipv6::compress;
/// assert_eq!(compress("0000:0000:0000:0000:0000:0000:0000:0001").unwrap(), "::1");
/// assert_eq!(compress("2001:0db8:0000:0000:0000:0000:0000:0001").unwrap(), "2001:db8::1");
/// ```
pub fn compress(addr: &str) -> Result<String, IpError> {
    Ok(format_compressed(parse(addr)?))
}

/// Parse IPv6 text into its 128-bit value.
pub fn parse(addr: &str) -> Result<BitVector128, IpError> {
    let expanded = expand(addr)?;
    BitVector128::from_hex_digits(&expanded.replace(':', ""))
}

/// Render 8 groups of 4 hex digits, no elision.
pub fn format_expanded(bits: BitVector128) -> String {
    let hex = bits.to_hex_padded(HEX_DIGITS);
    let groups: Vec<&str> = (0..GROUPS).map(|i| &hex[i * 4..i * 4 + 4]).collect();
    groups.join(":")
}

/// Render the shortest form: the leftmost longest run of zero groups becomes `::`.
pub fn format_compressed(bits: BitVector128) -> String {
    let groups = bits.groups();
    let (start, len) = longest_zero_run(&groups);
    if len == 0 {
        return join_groups(&groups);
    }
    format!(
        "{}::{}",
        join_groups(&groups[..start]),
        join_groups(&groups[start + len..])
    )
}

fn split_groups(part: &str) -> Vec<&str> {
    if part.is_empty() {
        vec![]
    } else {
        part.split(':').collect()
    }
}

fn join_groups(groups: &[u16]) -> String {
    groups
        .iter()
        .map(|g| format!("{g:x}"))
        .collect::<Vec<String>>()
        .join(":")
}

/// Start and length of the longest run of zero groups, ties go to the left.
fn longest_zero_run(groups: &[u16]) -> (usize, usize) {
    let (mut best_start, mut best_len) = (0, 0);
    let mut i = 0;
    while i < groups.len() {
        if groups[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < groups.len() && groups[i] == 0 {
            i += 1;
        }
        if i - start > best_len {
            best_start = start;
            best_len = i - start;
        }
    }
    (best_start, best_len)
}
