//! Random password generation and a heuristic strength gauge.
//!
//! The two core operations are [`generate_password`] and [`score_strength`];
//! [`PasswordGenerator`] ties them together into a generate-and-display cycle.

pub mod charset;
pub mod config;
mod error;
pub mod generator;
pub mod meter;
pub mod session;
pub mod strength;

pub use charset::{CharacterClass, CharacterClassSelection};
pub use config::GeneratorConfig;
pub use error::Error;
pub use generator::{generate_password, generate_password_with};
pub use session::{Generated, PasswordGenerator};
pub use strength::{score_strength, StrengthAssessment, StrengthLabel};

// Custom type alias for Result
pub type Result<T> = std::result::Result<T, Error>;
