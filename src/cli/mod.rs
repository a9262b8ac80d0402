//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs. Each returns the process exit code
//! it wants; main.rs owns `std::process::exit`.

mod assess;
mod batch;
mod scale;
mod template;

pub use assess::run_assess;
pub use batch::{assess_all, run_batch};
pub use scale::run_scale;
pub use template::{render_template, run_template, TemplateFormat};
