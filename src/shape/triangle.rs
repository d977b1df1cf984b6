use egui::{Color32, Pos2};

use super::{Drawable, ShapeKind, common};
use crate::error::RenderResult;
use crate::surface::Surface;

/// Isosceles triangle hanging from its apex.
///
/// The base is always `2 * TRIANGLE_HALF_BASE` wide and sits `height` below
/// the apex.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    apex: Pos2,
    height: f32,
    color: String,
}

impl Triangle {
    pub fn new(apex: Pos2, height: f32, color: impl Into<String>) -> Self {
        Self {
            apex,
            height,
            color: color.into(),
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Apex, then base-left, then base-right
    pub fn vertices(&self) -> [Pos2; 3] {
        let base_y = self.apex.y + self.height;
        [
            self.apex,
            Pos2::new(self.apex.x - common::TRIANGLE_HALF_BASE, base_y),
            Pos2::new(self.apex.x + common::TRIANGLE_HALF_BASE, base_y),
        ]
    }
}

impl Drawable for Triangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn origin(&self) -> Pos2 {
        self.apex
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn validate(&self) -> RenderResult<Color32> {
        common::validate_position("triangle", self.apex)?;
        common::validate_extent("triangle", "height", self.height)?;
        common::resolve_color(&self.color)
    }

    fn paint(&self, fill: Color32, surface: &mut dyn Surface) {
        let [apex, left, right] = self.vertices();
        surface.set_fill_color(fill);
        surface.begin_path();
        surface.move_to(apex);
        surface.line_to(left);
        surface.line_to(right);
        surface.close_path();
        surface.fill();
    }
}
