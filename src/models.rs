use chrono::{DateTime, Datelike, FixedOffset, Local, Months, NaiveDateTime};
use once_cell::sync::Lazy;

// Fallback birth moment for people created without one: fixed 15 years before
// the first name-only construction in this process, then shared by every
// subsequent one, so they all report the same moment.
static DEFAULT_UNDER_16_DOB: Lazy<DateTime<FixedOffset>> =
    Lazy::new(|| Local::now().fixed_offset() - Months::new(12 * 15));

/// An immutable person record: a name and a birth moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: String,
    date_of_birth: DateTime<FixedOffset>,
}

impl Person {
    /// Builds a person from a name and a local birth moment. The moment is
    /// pinned to the timezone offset in effect now, not the offset that
    /// applied at the birth instant.
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDateTime) -> Self {
        let offset = *Local::now().offset();
        let date_of_birth = date_of_birth
            .and_local_timezone(offset)
            .single()
            .expect("a fixed offset maps every local datetime to a single instant");

        Self {
            name: name.into(),
            date_of_birth,
        }
    }

    /// Builds a person from a name alone, using the shared under-16 fallback
    /// birth moment.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date_of_birth: *DEFAULT_UNDER_16_DOB,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_of_birth(&self) -> DateTime<FixedOffset> {
        self.date_of_birth
    }

    /// Age as a calendar-year difference, ignoring month and day.
    pub fn age_in_years(&self) -> i32 {
        Local::now().year() - self.date_of_birth.year()
    }
}
