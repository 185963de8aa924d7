/// First whitespace-separated token as u64, for fields like
/// `File size    : 463023 bytes`.
pub(crate) fn u64_prefix(s: &str) -> Option<u64> {
    s.split_whitespace().next()?.parse().ok()
}

/// First whitespace-separated token as u32 (ISO, JPEG quality).
pub(crate) fn u32_prefix(s: &str) -> Option<u32> {
    s.split_whitespace().next()?.parse().ok()
}
