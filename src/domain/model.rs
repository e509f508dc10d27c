use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One schedule row: a class/event spanning a time window on a given day,
/// with a display color specification as read from the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub day: String,
    pub color: String,
}

/// Normalized text color, one intensity per channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ResolvedColor {
    pub const BLACK: ResolvedColor = ResolvedColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
}

/// Where a slot lands on the page grid. Row 0 is the first row under the
/// header band; positions repeat with the page capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub row: u32,
    pub column: u32,
    pub first_of_new_page: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}
