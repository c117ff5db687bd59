use serde::{Deserialize, Serialize};
use std::path::Path;

/// Overlap rule thresholds, in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapConfig {
    /// Two same-system devices closer than this conflict.
    pub radius: f64,
    /// Extra margin the auto-fix adds beyond the radius when pushing a
    /// device away.
    pub clearance: f64,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            radius: 12.0,
            clearance: 2.0,
        }
    }
}

/// Wall proximity thresholds, in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    /// Minimum perpendicular distance from any wall of the containing room.
    pub min_distance: f64,
    /// Extra margin the auto-fix adds beyond the minimum.
    pub clearance: f64,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            min_distance: 4.0,
            clearance: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub overlap: OverlapConfig,
    pub wall: WallConfig,
}

/// Loads rule thresholds from a JSON file; absent path or absent fields
/// fall back to the defaults above. The code-spacing table is not
/// configurable here: it encodes a code standard, not a tunable.
pub fn load_rule_config(path: Option<&Path>) -> anyhow::Result<RuleConfig> {
    let Some(path) = path else {
        return Ok(RuleConfig::default());
    };

    let contents = std::fs::read_to_string(path)?;
    let config: RuleConfig = serde_json::from_str(&contents)?;
    Ok(config)
}
