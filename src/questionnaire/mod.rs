//! Questionnaire answers and their resolution into a scoreable profile.
//!
//! The scoring core has no notion of an unanswered question. This layer
//! owns that state: [`ProfileAnswers`] keeps every field optional and
//! [`ProfileAnswers::resolve`] substitutes defaults before scoring.

mod answers;

pub use answers::{ProfileAnswers, ResolvedProfile};
