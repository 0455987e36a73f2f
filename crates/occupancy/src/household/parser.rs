use super::ImportError;
use regex::Regex;
use std::sync::OnceLock;

/// Number of quoted fields a record must carry.
pub(crate) const RECORD_FIELDS: usize = 6;

/// One input line split into its six positional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) street: String,
    pub(crate) city: String,
    pub(crate) state: String,
    pub(crate) age: String,
}

impl Record {
    /// Fields past the sixth are ignored.
    pub(crate) fn from_fields(fields: Vec<String>, line: usize) -> Result<Self, ImportError> {
        if fields.len() < RECORD_FIELDS {
            return Err(ImportError::MalformedRecord {
                line,
                found: fields.len(),
            });
        }

        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();

        Ok(Self {
            first_name: next(),
            last_name: next(),
            street: next(),
            city: next(),
            state: next(),
            age: next(),
        })
    }
}

fn quoted_field_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""([^"]*)""#).expect("quoted field pattern compiles"))
}

/// Returns the content of every double-quoted segment in `line`, left to right.
///
/// Text between segments is ignored, no escapes are processed, and an unmatched
/// trailing quote is dropped.
pub fn extract_fields(line: &str) -> Vec<String> {
    quoted_field_pattern()
        .captures_iter(line)
        .filter_map(|captures| captures.get(1))
        .map(|field| field.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn extracts_quoted_fields_in_order() {
        let line = r#""Eve","Smith","234 2nd Ave.","Tacoma","WA","25""#;
        assert_eq!(
            extract_fields(line),
            fields(&["Eve", "Smith", "234 2nd Ave.", "Tacoma", "WA", "25"])
        );
    }

    #[test]
    fn ignores_text_between_quotes() {
        let line = r#"  "a" ,junk, "b c"   ;"" trailing"#;
        assert_eq!(extract_fields(line), fields(&["a", "b c", ""]));
    }

    #[test]
    fn unquoted_line_yields_nothing() {
        assert!(extract_fields("Eve,Smith,25").is_empty());
        assert!(extract_fields("").is_empty());
    }

    #[test]
    fn unmatched_trailing_quote_is_dropped() {
        assert_eq!(extract_fields(r#""one","two","thr"#), fields(&["one", "two"]));
    }

    #[test]
    fn inner_content_is_verbatim() {
        assert_eq!(
            extract_fields(r#""  spaced, with commas.  ""#),
            fields(&["  spaced, with commas.  "])
        );
    }

    #[test]
    fn record_requires_six_fields() {
        let error = Record::from_fields(fields(&["Eve", "Smith", "234 2nd Ave."]), 4)
            .expect_err("short record rejected");
        match error {
            ImportError::MalformedRecord { line, found } => {
                assert_eq!(line, 4);
                assert_eq!(found, 3);
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn record_ignores_extra_fields() {
        let record = Record::from_fields(
            fields(&["eve", "smith", "1 Main", "tacoma", "wa", "25", "extra"]),
            1,
        )
        .expect("record builds");
        assert_eq!(record.first_name, "eve");
        assert_eq!(record.state, "wa");
        assert_eq!(record.age, "25");
    }
}
