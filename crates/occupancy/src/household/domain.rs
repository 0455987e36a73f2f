use super::ImportError;
use serde::Serialize;
use std::fmt;

/// Normalized home address; two addresses with the same fields are the same household.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Address {
    street: String,
    city: String,
    state: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.street, self.state, self.city)
    }
}

/// Identity of an occupant within a household, ordered by last name then first name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccupantKey {
    pub last_name: String,
    pub first_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    first_name: String,
    last_name: String,
    age: u32,
    address: Address,
}

impl Occupant {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        address: Address,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            address,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn key(&self) -> OccupantKey {
        OccupantKey {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
        }
    }

    /// Strictly older than `threshold`.
    pub fn is_adult(&self, threshold: u32) -> bool {
        self.age > threshold
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.first_name, self.last_name, self.address, self.age
        )
    }
}

/// Parses the raw age field. Whitespace is not trimmed and negative values are rejected.
pub(crate) fn parse_age(raw: &str, line: usize) -> Result<u32, ImportError> {
    raw.parse::<u32>().map_err(|_| ImportError::MalformedAge {
        line,
        value: raw.to_string(),
    })
}
