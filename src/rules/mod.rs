mod boundary;
mod overlap;
mod spacing;
mod wall;

pub use spacing::max_spacing_ft;

use crate::config::RuleConfig;
use crate::model::{Conflict, Device, ValidationContext};

/// Runs every rule against one device. Each rule reports at most one
/// finding; rules are independent, so a device may carry zero to four
/// conflicts. Order is overlap, code spacing, wall proximity, boundary
/// containment.
pub fn evaluate_device(
    device: &Device,
    ctx: &ValidationContext,
    config: &RuleConfig,
) -> Vec<Conflict> {
    let findings = [
        overlap::check_overlap(device, ctx, config),
        spacing::check_spacing(device, ctx),
        wall::check_wall(device, ctx, config),
        boundary::check_boundary(device, ctx),
    ];
    findings.into_iter().flatten().collect()
}
