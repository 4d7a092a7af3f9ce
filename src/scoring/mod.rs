pub mod config;
pub mod engine;
pub mod error;
pub mod exclusion;
pub mod insights;
pub mod standing;
pub mod validation;

pub use config::*;
pub use engine::{compute, evaluate, AggregateResult, ScoreReport};
pub use error::ScoringError;
pub use exclusion::{is_active, is_excluded};
pub use insights::{select_insights, Insights};
pub use standing::{classify, Standing};
pub use validation::{validate, validate_policy, MAX_GRADE, MIN_GRADE};
