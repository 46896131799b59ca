mod exam;
mod profile;

pub use exam::{Exam, PreparationLevel, Topic};
pub use profile::UserProfile;
