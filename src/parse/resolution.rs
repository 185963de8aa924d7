use regex::Regex;

/// `Resolution   : 2272 x 1704` into a width/height pair.
pub(crate) fn pair(s: &str) -> Option<(u32, u32)> {
    let re = Regex::new(r"(\d+)\s*x\s*(\d+)").ok()?;
    let caps = re.captures(s)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}
