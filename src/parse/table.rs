/// Splits jhead's tabular output into per-file field lists.
///
/// Each file's section starts with a `File name` line. Within a section,
/// every `label : value` line becomes one pair; labels never contain a
/// colon, values (timestamps) often do, so the split is on the first one.
/// Section banners like `======= IPTC data: =======` and blank lines are
/// skipped.
pub(crate) fn blocks(output: &str) -> Vec<Vec<(String, String)>> {
    let mut all = Vec::new();
    let mut current: Vec<(String, String)> = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() || line.trim_start().starts_with('=') {
            continue;
        }
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        if label == "File name" && !current.is_empty() {
            all.push(std::mem::take(&mut current));
        }
        current.push((label.to_string(), value.trim().to_string()));
    }
    if !current.is_empty() {
        all.push(current);
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_FILES: &str = "\
File name    : a.jpg
File size    : 100 bytes
Date/Time    : 2003:12:14 12:01:44

File name    : b.jpg
File size    : 200 bytes
";

    #[test]
    fn test_two_blocks() {
        let blocks = blocks(TWO_FILES);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0][0], ("File name".into(), "a.jpg".into()));
        // The timestamp's own colons stay in the value.
        assert_eq!(
            blocks[0][2],
            ("Date/Time".into(), "2003:12:14 12:01:44".into())
        );
        assert_eq!(blocks[1][1], ("File size".into(), "200 bytes".into()));
    }

    #[test]
    fn test_banners_and_blanks_skipped() {
        let output = "\
File name    : a.jpg
======= IPTC data: =======
City         : Paris

Record vers. : 4
";
        let blocks = blocks(output);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 3);
        assert_eq!(blocks[0][1], ("City".into(), "Paris".into()));
    }

    #[test]
    fn test_empty_output() {
        assert!(blocks("").is_empty());
        assert!(blocks("\n\n").is_empty());
    }
}
