use std::ops::RangeInclusive;

use crate::shape::{MAX_EXTENT, MIN_EXTENT, ShapeAttrs, ShapeKind};

/// Range every size input is clamped to before it reaches the session
pub const EXTENT_RANGE: RangeInclusive<f32> = MIN_EXTENT..=MAX_EXTENT;

/// Clamp a size input into [`EXTENT_RANGE`]. Non-numbers become the minimum.
pub fn clamp_extent(value: f32) -> f32 {
    if value.is_nan() {
        MIN_EXTENT
    } else {
        value.clamp(MIN_EXTENT, MAX_EXTENT)
    }
}

/// Tool panel state, persisted between runs.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ToolSettings {
    pub kind: ShapeKind,
    pub radius: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Circle,
            radius: 15.0,
            width: 20.0,
            height: 30.0,
            color: "blue".to_owned(),
        }
    }
}

impl ToolSettings {
    /// Force every size back into range, e.g. after loading edited state
    pub fn clamp(&mut self) {
        self.radius = clamp_extent(self.radius);
        self.width = clamp_extent(self.width);
        self.height = clamp_extent(self.height);
    }

    /// Clamped attributes for the next placement
    pub fn attrs(&self) -> ShapeAttrs {
        ShapeAttrs {
            radius: clamp_extent(self.radius),
            width: clamp_extent(self.width),
            height: clamp_extent(self.height),
            color: self.color.clone(),
        }
    }
}
