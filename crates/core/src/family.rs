//! Family name extraction.

/// Strip `count` trailing tokens from `base_name`.
///
/// `count` is the number of attributes recognized by
/// [`classify`](crate::classify::classify), not the number of tokens that
/// matched, so an unrecognized trailing token may be stripped in place of a
/// recognized one earlier in the name. A base name without hyphens, or a
/// `count` of zero, yields the whole base name. When `count` covers every
/// token the result is empty.
pub fn extract_family(base_name: &str, count: usize) -> String {
    let parts: Vec<&str> = base_name.split('-').collect();
    if parts.len() == 1 || count == 0 {
        return base_name.to_string();
    }
    let keep = parts.len().saturating_sub(count);
    parts[..keep].join("-")
}
