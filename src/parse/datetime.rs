use chrono::NaiveDateTime;

/// jhead prints timestamps as `YYYY:MM:DD HH:MM:SS`, without a zone.
pub(crate) fn naive(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y:%m:%d %H:%M:%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_exif_timestamp() {
        let ts = naive("2003:12:14 12:01:44").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2003, 12, 14).unwrap());
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (12, 1, 44));
    }

    #[test]
    fn test_padding_tolerated() {
        assert!(naive("  2011:04:06 12:13:05  ").is_some());
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(naive("2003-12-14 12:01:44"), None);
        assert_eq!(naive("unknown"), None);
        assert_eq!(naive(""), None);
    }
}
