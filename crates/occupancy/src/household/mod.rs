pub mod domain;
pub mod normalizer;
mod parser;
pub mod registry;
pub mod report;

pub use domain::{Address, Occupant, OccupantKey};
pub use parser::extract_fields;
pub use registry::{Household, Registry};
pub use report::views::{HouseholdView, OccupantView, ReportSummary};
pub use report::ReportBuilder;

use parser::Record;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("input file not found or unreadable: {}", .path.display())]
    InputNotFound { path: PathBuf },
    #[error("failed to read household input: {0}")]
    Io(#[from] io::Error),
    #[error("malformed record on line {line}: expected 6 quoted fields, found {found}")]
    MalformedRecord { line: usize, found: usize },
    #[error("malformed age on line {line}: '{value}' is not a non-negative integer")]
    MalformedAge { line: usize, value: String },
}

/// Loads quoted-field household records into a [`Registry`].
///
/// The first bad record aborts the whole import.
pub struct HouseholdImporter;

impl HouseholdImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Registry, ImportError> {
        let path = path.as_ref();
        let not_found = || ImportError::InputNotFound {
            path: path.to_path_buf(),
        };

        if !path.is_file() {
            return Err(not_found());
        }

        let file = std::fs::File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => not_found(),
            _ => ImportError::Io(err),
        })?;
        Self::from_reader(file)
    }

    /// Reads the whole input into memory before parsing any record.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Registry, ImportError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        drop(reader);
        Self::from_lines(contents.lines())
    }

    pub fn from_lines<I, S>(lines: I) -> Result<Registry, ImportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Registry::new();
        let mut records = 0usize;
        let mut duplicates = 0usize;

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            let (address, occupant) = load_record(line.as_ref(), line_number)?;
            records += 1;

            if !registry.insert(address, occupant.clone()) {
                duplicates += 1;
                debug!(
                    line = line_number,
                    occupant = %occupant,
                    "duplicate occupant discarded"
                );
            }
        }

        info!(
            records,
            duplicates,
            addresses = registry.len(),
            "household registry loaded"
        );
        Ok(registry)
    }
}

fn load_record(line: &str, line_number: usize) -> Result<(Address, Occupant), ImportError> {
    let fields = extract_fields(line);
    let record = normalizer::normalize_record(Record::from_fields(fields, line_number)?);
    let age = domain::parse_age(&record.age, line_number)?;

    let address = Address::new(record.street, record.city, record.state);
    let occupant = Occupant::new(record.first_name, record.last_name, age, address.clone());
    Ok((address, occupant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn raw_variants_collapse_to_one_address() {
        let input = "\"eve\",\"SMITH\",\"234 2nd ave.\",\"tacoma\",\"wa\",\"25\"\n\
\"BOB\",\"jones\",\"234   2ND AVE\",\"TACOMA\",\" WA\",\"40\"\n";
        let registry = HouseholdImporter::from_reader(Cursor::new(input)).expect("import succeeds");

        assert_eq!(registry.len(), 1);
        let address = Address::new("234 2nd Ave.", "Tacoma", "WA");
        let household = registry.get(&address).expect("normalized address present");
        assert_eq!(household.len(), 2);
    }

    #[test]
    fn short_record_reports_line_number() {
        let input = "\"eve\",\"smith\",\"1 Elm\",\"austin\",\"tx\",\"25\"\n\"bob\",\"jones\"\n";
        let error = HouseholdImporter::from_reader(Cursor::new(input)).expect_err("import fails");
        match error {
            ImportError::MalformedRecord { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, 2);
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn blank_line_is_a_malformed_record() {
        let error = HouseholdImporter::from_lines(["", "\"a\""]).expect_err("blank line rejected");
        assert!(matches!(
            error,
            ImportError::MalformedRecord { line: 1, found: 0 }
        ));
    }

    #[test]
    fn bad_age_aborts_import() {
        let lines = [
            r#""eve","smith","1 Elm","austin","tx","25""#,
            r#""bob","jones","1 Elm","austin","tx","old""#,
        ];
        let error = HouseholdImporter::from_lines(lines).expect_err("import fails");
        assert_eq!(
            error.to_string(),
            "malformed age on line 2: 'old' is not a non-negative integer"
        );
    }

    #[test]
    fn empty_input_yields_empty_registry() {
        let registry = HouseholdImporter::from_reader(Cursor::new("")).expect("import succeeds");
        assert!(registry.is_empty());
    }

    #[test]
    fn from_path_reports_missing_file() {
        let error = HouseholdImporter::from_path("./does-not-exist.txt").expect_err("missing file");
        match error {
            ImportError::InputNotFound { path } => {
                assert_eq!(path, PathBuf::from("./does-not-exist.txt"));
            }
            other => panic!("expected input not found, got {other:?}"),
        }
    }

    #[test]
    fn from_path_rejects_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let error = HouseholdImporter::from_path(dir.path()).expect_err("directory rejected");
        assert!(matches!(error, ImportError::InputNotFound { .. }));
    }
}
