use egui::{Color32, Pos2};

use crate::color;
use crate::error::{RenderError, RenderResult};

/// Inclusive range the UI clamps every size attribute to
pub const MIN_EXTENT: f32 = 0.0;
pub const MAX_EXTENT: f32 = 200.0;

/// Half the fixed base width of a triangle
pub const TRIANGLE_HALF_BASE: f32 = 50.0;

/// Validates that both coordinates of an anchor point are finite
pub(crate) fn validate_position(kind: &'static str, pos: Pos2) -> RenderResult {
    for (field, value) in [("x", pos.x), ("y", pos.y)] {
        if !value.is_finite() {
            return Err(RenderError::InvalidGeometry { kind, field, value });
        }
    }
    Ok(())
}

/// Validates that a size attribute is finite and non-negative
pub(crate) fn validate_extent(kind: &'static str, field: &'static str, value: f32) -> RenderResult {
    if value.is_finite() && value >= MIN_EXTENT {
        Ok(())
    } else {
        Err(RenderError::InvalidGeometry { kind, field, value })
    }
}

pub(crate) fn resolve_color(token: &str) -> RenderResult<Color32> {
    color::parse_color(token).ok_or_else(|| RenderError::UnknownColor(token.to_owned()))
}
