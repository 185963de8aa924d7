use regex::Regex;

/// Extracts the version number from the `jhead -V` banner.
///
/// Seen in the wild as `Jhead version: 3.00  Compiled: Mar 22 2016` and
/// `jhead v3.04`.
pub(crate) fn from_banner(banner: &str) -> Option<String> {
    let re = Regex::new(r"(?i)jhead\s+v(?:ersion:?\s*)?([0-9][0-9A-Za-z.]*)").ok()?;
    Some(re.captures(banner)?[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_variants() {
        assert_eq!(
            from_banner("Jhead version: 3.00  Compiled: Mar 22 2016").as_deref(),
            Some("3.00")
        );
        assert_eq!(from_banner("jhead v3.04").as_deref(), Some("3.04"));
        assert_eq!(from_banner("jhead version 2.97").as_deref(), Some("2.97"));
    }

    #[test]
    fn test_unrecognized_banner() {
        assert_eq!(from_banner("no version here"), None);
        assert_eq!(from_banner(""), None);
    }
}
