use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceType {
    SmokeDetector,
    HeatDetector,
    CoDetector,
    PullStation,
    Strobe,
    Horn,
    Camera,
    CardReader,
    DoorContact,
    MotionSensor,
}

impl DeviceType {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "smoke-detector" => Some(Self::SmokeDetector),
            "heat-detector" => Some(Self::HeatDetector),
            "co-detector" => Some(Self::CoDetector),
            "pull-station" => Some(Self::PullStation),
            "strobe" => Some(Self::Strobe),
            "horn" => Some(Self::Horn),
            "camera" => Some(Self::Camera),
            "card-reader" => Some(Self::CardReader),
            "door-contact" => Some(Self::DoorContact),
            "motion-sensor" => Some(Self::MotionSensor),
            _ => None,
        }
    }

    pub fn as_token(self) -> &'static str {
        match self {
            Self::SmokeDetector => "smoke-detector",
            Self::HeatDetector => "heat-detector",
            Self::CoDetector => "co-detector",
            Self::PullStation => "pull-station",
            Self::Strobe => "strobe",
            Self::Horn => "horn",
            Self::Camera => "camera",
            Self::CardReader => "card-reader",
            Self::DoorContact => "door-contact",
            Self::MotionSensor => "motion-sensor",
        }
    }

    /// Display name used in conflict messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::SmokeDetector => "smoke detector",
            Self::HeatDetector => "heat detector",
            Self::CoDetector => "CO detector",
            Self::PullStation => "pull station",
            Self::Strobe => "strobe",
            Self::Horn => "horn",
            Self::Camera => "camera",
            Self::CardReader => "card reader",
            Self::DoorContact => "door contact",
            Self::MotionSensor => "motion sensor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemKind {
    Fire,
    Cctv,
    Access,
}

impl SystemKind {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "fire" => Some(Self::Fire),
            "cctv" => Some(Self::Cctv),
            "access" => Some(Self::Access),
            _ => None,
        }
    }

    pub fn as_token(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Cctv => "cctv",
            Self::Access => "access",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictKind {
    Overlap,
    CodeSpacing,
    WallProximity,
    OutsideBoundary,
    /// Reserved for coverage analysis; produced by no current rule.
    CoverageGap,
}

impl ConflictKind {
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Overlap => "overlap",
            Self::CodeSpacing => "code-spacing",
            Self::WallProximity => "wall-proximity",
            Self::OutsideBoundary => "outside-boundary",
            Self::CoverageGap => "coverage-gap",
        }
    }
}

/// A detected placement violation. Conflicts carry data and a capability
/// flag only; corrected positions come from the resolver in `autofix`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub id: String,
    pub device_id: String,
    pub kind: ConflictKind,
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub related_device_id: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
    pub has_auto_fix: bool,
}

impl Conflict {
    /// Deterministic conflict id: the same violation yields the same id
    /// across recomputation.
    pub fn id_for(device_id: &str, kind: ConflictKind, related: Option<&str>) -> String {
        match related {
            Some(other) => format!("{device_id}/{}/{other}", kind.as_token()),
            None => format!("{device_id}/{}", kind.as_token()),
        }
    }
}

/// A point-placed item on a floor plan. Coordinates are inches in
/// blueprint space; rotation is cosmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub device_type: DeviceType,
    pub system: SystemKind,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    /// Owned by the aggregator; overwritten wholesale on every pass.
    #[serde(default)]
    pub conflicts: Vec<Conflict>,
}

impl Device {
    pub fn new(id: &str, device_type: DeviceType, system: SystemKind, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            device_type,
            system,
            x,
            y,
            rotation: 0.0,
            conflicts: Vec::new(),
        }
    }
}

/// An axis-aligned rectangle, immutable for the duration of a pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub room_type: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Room {
    pub fn new(id: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            room_type: String::new(),
            x,
            y,
            width,
            height,
        }
    }

    /// Room name for messages, falling back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { &self.id } else { &self.name }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub blueprint: Option<String>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// The immutable input bundle for one validation pass. Every evaluator is
/// a pure function of `(device, context, config)`; the blueprint label is
/// used in messages only, never in rule logic.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub devices: &'a [Device],
    pub rooms: &'a [Room],
    pub blueprint: Option<&'a str>,
}
