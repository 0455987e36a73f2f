use super::super::domain::Address;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccupantView {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HouseholdView {
    pub address: Address,
    pub label: String,
    /// Counts every occupant, including those not listed.
    pub occupant_count: usize,
    pub adults: Vec<OccupantView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub adult_age: u32,
    pub total_occupants: usize,
    pub households: Vec<HouseholdView>,
}
