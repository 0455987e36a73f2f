pub mod views;

use super::domain::Occupant;
use super::registry::{Household, Registry};
use crate::config::DEFAULT_ADULT_AGE;
use views::{HouseholdView, OccupantView, ReportSummary};

/// Walks a [`Registry`] once, listing each household's adults under an address header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportBuilder {
    adult_age: u32,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ADULT_AGE)
    }
}

impl ReportBuilder {
    /// Occupants are listed only when strictly older than `adult_age`.
    pub fn new(adult_age: u32) -> Self {
        Self { adult_age }
    }

    pub fn adult_age(&self) -> u32 {
        self.adult_age
    }

    pub fn render(&self, registry: &Registry) -> String {
        let mut output = String::new();

        for (address, household) in registry {
            output.push_str(&format!(
                "Address: {} - Occupants: {}\n",
                address,
                household.len()
            ));
            for occupant in self.adults(household) {
                output.push_str(&format!("{occupant}\n"));
            }
            output.push('\n');
        }

        output
    }

    pub fn summary(&self, registry: &Registry) -> ReportSummary {
        let households = registry
            .entries()
            .map(|(address, household)| HouseholdView {
                address: address.clone(),
                label: address.to_string(),
                occupant_count: household.len(),
                adults: self
                    .adults(household)
                    .map(|occupant| OccupantView {
                        first_name: occupant.first_name().to_string(),
                        last_name: occupant.last_name().to_string(),
                        age: occupant.age(),
                    })
                    .collect(),
            })
            .collect();

        ReportSummary {
            adult_age: self.adult_age,
            total_occupants: registry.occupant_count(),
            households,
        }
    }

    fn adults<'a>(&self, household: &'a Household) -> impl Iterator<Item = &'a Occupant> {
        let adult_age = self.adult_age;
        household
            .occupants()
            .filter(move |occupant| occupant.is_adult(adult_age))
    }
}
