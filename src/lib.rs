pub mod autofix;
pub mod config;
pub mod geometry;
pub mod input;
pub mod lookup;
pub mod model;
pub mod report;
pub mod rules;
pub mod summary;
pub mod validate;

pub use autofix::{auto_fix, proposed_fixes};
pub use config::{RuleConfig, load_rule_config};
pub use input::{LayoutError, check_layout, load_layout, parse_layout};
pub use model::{
    Conflict, ConflictKind, Device, DeviceType, Layout, Room, Severity, SystemKind,
    ValidationContext,
};
pub use report::{ValidationReport, write_report};
pub use summary::{Stats, summarize};
pub use validate::{validate, validate_layout};
