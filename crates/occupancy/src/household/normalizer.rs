use super::parser::Record;
use regex::{NoExpand, Regex};
use std::sync::OnceLock;

const STREET_ABBREVIATIONS: &[(&str, &str)] = &[
    (r"\b(St|st|street)\b", "St."),
    // The trailing comma is part of the canonical form.
    (r"\b(Blvd|blvd|boulevard)\b", "Blvd.,"),
    (r"\b(Ave|ave|avenue)\b", "Ave."),
    (r"\b(Apt|apt|apartment)\b", "Apt."),
];

fn street_abbreviations() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        STREET_ABBREVIATIONS
            .iter()
            .map(|(pattern, replacement)| {
                let regex = Regex::new(pattern).expect("street abbreviation pattern compiles");
                (regex, *replacement)
            })
            .collect()
    })
}

/// Uppercases the first character and lowercases the rest, then trims.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    let capitalized = match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    };
    capitalized.trim().to_string()
}

/// Capitalizes each whitespace-delimited word and joins them with single spaces.
pub fn capitalize_words(value: &str) -> String {
    value
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn normalize_street(value: &str) -> String {
    let mut street = capitalize_words(value).replace([',', '.'], "");
    for (pattern, replacement) in street_abbreviations() {
        street = pattern.replace_all(&street, NoExpand(replacement)).into_owned();
    }
    street.trim().to_string()
}

pub fn normalize_state(value: &str) -> String {
    value.to_uppercase().trim().to_string()
}

/// Age is passed through untouched; it is parsed when the occupant is built.
pub(crate) fn normalize_record(record: Record) -> Record {
    Record {
        first_name: capitalize(&record.first_name),
        last_name: capitalize(&record.last_name),
        street: normalize_street(&record.street),
        city: capitalize(&record.city),
        state: normalize_state(&record.state),
        age: record.age,
    }
}
