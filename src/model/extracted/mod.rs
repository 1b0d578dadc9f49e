//! Raw answer shapes the model is asked to produce
//!
//! These types are the structural gate: deserializing into them fails only when
//! the answer's overall shape cannot be trusted. Scalar fields are kept as raw
//! JSON so that enum and text normalization can default them field by field.

mod deal;
mod grade;

pub use deal::{ExtractedDeal, ExtractedOpportunityType};
pub use grade::{ExtractedGrade, ExtractedMissingElement};
