//! In-memory generation of synthetic person records: random name/age
//! generation, name-based filtering, and married-name formatting.

mod generator;
mod models;

pub use generator::PeopleGenerator;
pub use models::Person;
