use chrono::{Local, Months};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::models::Person;

const GIVEN_NAMES: [&str; 2] = ["Bob", "Betty"];
const MIN_AGE: u32 = 18;
const MAX_AGE: u32 = 85;
const MAX_NAME_LENGTH: usize = 255;

/// Owns a growing collection of generated people and the operations over it.
/// The collection only ever leaves as a clone, so callers cannot reach the
/// internal state through returned values.
pub struct PeopleGenerator {
    people: Vec<Person>,
    rng: StdRng,
}

impl PeopleGenerator {
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Seeded construction, for reproducible generation.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            people: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates and stores `count` random people, each named Bob or Betty
    /// with an age between 18 and 85, and returns a snapshot of the whole
    /// collection, previously generated people included.
    pub fn generate(&mut self, count: usize) -> Vec<Person> {
        tracing::debug!("Generating {} people", count);

        for _ in 0..count {
            let name = GIVEN_NAMES[self.rng.random_range(0..GIVEN_NAMES.len())];
            let age = self.rng.random_range(MIN_AGE..=MAX_AGE);
            let date_of_birth = Local::now().naive_local() - Months::new(12 * age);

            self.people.push(Person::new(name, date_of_birth));
        }

        self.people.clone()
    }

    /// Returns every stored person named "Bob", in storage order. With
    /// `only_older_than_30` set, a Bob qualifies only when his birth moment
    /// lies strictly before thirty years ago. This compares instants, unlike
    /// `Person::age_in_years`, which compares calendar years.
    pub fn bobs(&self, only_older_than_30: bool) -> Vec<Person> {
        tracing::trace!("Filtering for Bobs, only_older_than_30: {}", only_older_than_30);

        let thirty_years_ago = Local::now().fixed_offset() - Months::new(12 * 30);
        self.people
            .iter()
            .filter(|person| person.name() == "Bob")
            .filter(|person| !only_older_than_30 || person.date_of_birth() < thirty_years_ago)
            .cloned()
            .collect()
    }

    /// Combines the person's name with a married last name. Absent last names
    /// and last names containing "test" mark synthetic data and leave the
    /// name unchanged. Results longer than 255 characters are cut off there.
    pub fn married_name(&self, person: &Person, last_name: Option<&str>) -> String {
        let Some(last_name) = last_name else {
            return person.name().to_string();
        };
        if last_name.contains("test") {
            return person.name().to_string();
        }

        let full_name = format!("{} {}", person.name(), last_name);
        match full_name.char_indices().nth(MAX_NAME_LENGTH) {
            Some((cut, _)) => full_name[..cut].to_string(),
            None => full_name,
        }
    }

    /// Snapshot of the full collection.
    pub fn people(&self) -> Vec<Person> {
        self.people.clone()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl Default for PeopleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn married_name_combines_first_and_last() {
        let unit = PeopleGenerator::default();
        let person = Person::named("Alice");
        assert_eq!(unit.married_name(&person, Some("Smith")), "Alice Smith");
    }

    #[test]
    fn married_name_without_last_name_is_unchanged() {
        let unit = PeopleGenerator::default();
        let person = Person::named("Alice");
        assert_eq!(unit.married_name(&person, None), "Alice");
    }

    #[test]
    fn married_name_skips_test_data() {
        let unit = PeopleGenerator::default();
        let person = Person::named("Alice");
        assert_eq!(unit.married_name(&person, Some("testLastName")), "Alice");
        assert_eq!(unit.married_name(&person, Some("anytestvalue")), "Alice");
        // The marker is case-sensitive.
        assert_eq!(unit.married_name(&person, Some("Test")), "Alice Test");
    }

    #[test]
    fn married_name_truncates_at_255_characters() {
        let unit = PeopleGenerator::default();
        let person = Person::named("LongNamePerson");
        let last_name = "A".repeat(300);

        let married = unit.married_name(&person, Some(&last_name));

        assert_eq!(married.chars().count(), 255);
        let full = format!("LongNamePerson {}", last_name);
        assert_eq!(married, full[..255]);
    }
}
