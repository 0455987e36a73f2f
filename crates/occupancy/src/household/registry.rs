use super::domain::{Address, Occupant, OccupantKey};
use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;

/// Occupants sharing one address, kept sorted by [`OccupantKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Household {
    occupants: BTreeMap<OccupantKey, Occupant>,
}

impl Household {
    /// First occupant seen for a key wins; later ones are discarded.
    pub fn insert(&mut self, occupant: Occupant) -> bool {
        match self.occupants.entry(occupant.key()) {
            Entry::Vacant(slot) => {
                slot.insert(occupant);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    pub fn occupants(&self) -> btree_map::Values<'_, OccupantKey, Occupant> {
        self.occupants.values()
    }
}

/// Every distinct address seen during an import, each with its household.
///
/// Addresses iterate in ascending (street, city, state) order so a report is
/// reproducible for the same input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    households: BTreeMap<Address, Household>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the occupant duplicates one already at `address`.
    pub fn insert(&mut self, address: Address, occupant: Occupant) -> bool {
        self.households.entry(address).or_default().insert(occupant)
    }

    pub fn get(&self, address: &Address) -> Option<&Household> {
        self.households.get(address)
    }

    pub fn entries(&self) -> btree_map::Iter<'_, Address, Household> {
        self.households.iter()
    }

    /// Number of distinct addresses.
    pub fn len(&self) -> usize {
        self.households.len()
    }

    pub fn is_empty(&self) -> bool {
        self.households.is_empty()
    }

    pub fn occupant_count(&self) -> usize {
        self.households.values().map(Household::len).sum()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = (&'a Address, &'a Household);
    type IntoIter = btree_map::Iter<'a, Address, Household>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elm() -> Address {
        Address::new("1 Elm St.", "Austin", "TX")
    }

    fn resident(first: &str, last: &str, age: u32) -> Occupant {
        Occupant::new(first, last, age, elm())
    }

    #[test]
    fn duplicate_key_keeps_first_occupant() {
        let mut registry = Registry::new();
        assert!(registry.insert(elm(), resident("Eve", "Smith", 25)));
        assert!(!registry.insert(elm(), resident("Eve", "Smith", 61)));

        let household = registry.get(&elm()).expect("household exists");
        assert_eq!(household.len(), 1);
        let kept = household.occupants().next().expect("occupant kept");
        assert_eq!(kept.age(), 25);
    }

    #[test]
    fn same_name_at_different_addresses_is_kept() {
        let mut registry = Registry::new();
        let other = Address::new("2 Oak Ave.", "Austin", "TX");
        assert!(registry.insert(elm(), resident("Eve", "Smith", 25)));
        assert!(registry.insert(
            other.clone(),
            Occupant::new("Eve", "Smith", 25, other)
        ));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.occupant_count(), 2);
    }

    #[test]
    fn household_iterates_in_name_order() {
        let mut registry = Registry::new();
        for (first, last) in [("Zoe", "Brown"), ("Abe", "Carter"), ("Al", "Brown")] {
            registry.insert(elm(), resident(first, last, 30));
        }

        let names: Vec<_> = registry
            .get(&elm())
            .expect("household exists")
            .occupants()
            .map(|occupant| format!("{} {}", occupant.first_name(), occupant.last_name()))
            .collect();
        assert_eq!(names, ["Al Brown", "Zoe Brown", "Abe Carter"]);
    }

    #[test]
    fn addresses_iterate_in_sorted_order() {
        let mut registry = Registry::new();
        let later = Address::new("9 Pine St.", "Austin", "TX");
        registry.insert(later.clone(), Occupant::new("A", "B", 30, later));
        registry.insert(elm(), resident("C", "D", 30));

        let streets: Vec<_> = registry
            .entries()
            .map(|(address, _)| address.street().to_string())
            .collect();
        assert_eq!(streets, ["1 Elm St.", "9 Pine St."]);
    }
}
