/// Yes/No fields. jhead may append detail in parentheses, e.g.
/// `Yes (manual, return light detected)`.
pub(crate) fn yes_no(s: &str) -> Option<bool> {
    match s.split_whitespace().next()? {
        w if w.eq_ignore_ascii_case("yes") => Some(true),
        w if w.eq_ignore_ascii_case("no") => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        assert_eq!(yes_no("Yes"), Some(true));
        assert_eq!(yes_no("No"), Some(false));
    }

    #[test]
    fn test_flash_detail() {
        assert_eq!(yes_no("Yes (manual, return light detected)"), Some(true));
        assert_eq!(yes_no("No (auto)"), Some(false));
    }

    #[test]
    fn test_not_a_flag() {
        assert_eq!(yes_no(""), None);
        assert_eq!(yes_no("maybe"), None);
    }
}
