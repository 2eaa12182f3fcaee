//! YAML front matter extraction.

use serde_yaml::Error;

use super::ArticleMeta;

const DELIMITER: &str = "---";

/// Splits a document into front matter and body.
///
/// Front matter is the text between a leading `---` line and the next `---`
/// line. Documents without a complete front matter block are returned whole
/// as body.
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let Some(rest) = strip_delimiter_line(text) else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_delimiter(line) {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, text)
}

/// Parses front matter into article metadata.
///
/// Blank front matter yields default metadata.
pub(super) fn parse_meta(front_matter: &str) -> Result<ArticleMeta, Error> {
    if front_matter.trim().is_empty() {
        return Ok(ArticleMeta::default());
    }
    serde_yaml::from_str(front_matter)
}

fn strip_delimiter_line(text: &str) -> Option<&str> {
    let end = text.find('\n')?;
    is_delimiter(&text[..end]).then(|| &text[end + 1..])
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']).trim_end() == DELIMITER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_front_matter() {
        // Arrange
        let text = "---\ntitle: \"X\"\n---\nhello";

        // Act
        let (front, body) = split_front_matter(text);

        // Assert
        assert_eq!(front, Some("title: \"X\"\n"));
        assert_eq!(body, "hello");
    }

    #[test]
    fn test_split_crlf() {
        let (front, body) = split_front_matter("---\r\ntitle: X\r\n---\r\nbody\r\n");

        assert_eq!(front, Some("title: X\r\n"));
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn test_split_without_front_matter() {
        let text = "# Heading\n\n---\n\nText";

        let (front, body) = split_front_matter(text);

        assert_eq!(front, None);
        assert_eq!(body, text);
    }

    #[test]
    fn test_split_unterminated_front_matter() {
        let text = "---\ntitle: X\nno closing line";

        assert_eq!(split_front_matter(text), (None, text));
    }

    #[test]
    fn test_split_empty_front_matter() {
        assert_eq!(split_front_matter("---\n---\nbody"), (Some(""), "body"));
    }

    #[test]
    fn test_parse_meta() {
        // Act
        let meta = parse_meta("title: Install\ndate: 2024-01-06\nauthor: ops\n")
            .expect("Should parse front matter");

        // Assert
        assert_eq!(meta.title, "Install");
        assert_eq!(meta.date.as_deref(), Some("2024-01-06"));
        assert_eq!(meta.extra["author"], "ops");
    }

    #[test]
    fn test_parse_blank_meta() {
        assert_eq!(parse_meta("  \n").unwrap(), ArticleMeta::default());
    }

    #[test]
    fn test_parse_invalid_meta() {
        assert!(parse_meta("title: [unclosed\n").is_err());
    }
}
