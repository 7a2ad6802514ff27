// DISC behavioral assessment: static weight table, scoring, and trait descriptions.
// Scoring is pure; persistence of the computed score belongs to the results service.

pub mod profiles;
pub mod questions;
pub mod scoring;
pub mod weights;

pub use scoring::{calculate_disc_score, DiscScore, DiscTrait};
