//! Scale command handler.

use crate::pipeline::{should_use_color, write_output, OutputTarget};
use crate::reports::{render_scale, ReportFormat};
use anyhow::Result;

/// Print the A–G class thresholds.
pub fn run_scale(format: ReportFormat, no_color: bool) -> Result<()> {
    let target = OutputTarget::Stdout;
    let text = render_scale(format, should_use_color(no_color, &target))?;
    write_output(&text, &target, true)
}
