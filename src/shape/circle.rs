use egui::{Color32, Pos2};

use super::{Drawable, ShapeKind, common};
use crate::error::RenderResult;
use crate::surface::Surface;

/// Filled circle centered on the click position
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Pos2,
    radius: f32,
    color: String,
}

impl Circle {
    pub fn new(center: Pos2, radius: f32, color: impl Into<String>) -> Self {
        Self {
            center,
            radius,
            color: color.into(),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Drawable for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn origin(&self) -> Pos2 {
        self.center
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn validate(&self) -> RenderResult<Color32> {
        common::validate_position("circle", self.center)?;
        common::validate_extent("circle", "radius", self.radius)?;
        common::resolve_color(&self.color)
    }

    fn paint(&self, fill: Color32, surface: &mut dyn Surface) {
        surface.set_fill_color(fill);
        surface.begin_path();
        surface.arc(self.center, self.radius, 0.0, std::f32::consts::TAU);
        surface.close_path();
        surface.fill();
    }
}
