use egui::{Color32, Pos2, Rect, Vec2};

use super::{Drawable, ShapeKind, common};
use crate::error::RenderResult;
use crate::surface::Surface;

/// Axis-aligned filled rectangle whose top-left corner is the click position
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    origin: Pos2,
    size: Vec2,
    color: String,
}

impl Rectangle {
    pub fn new(origin: Pos2, width: f32, height: f32, color: impl Into<String>) -> Self {
        Self {
            origin,
            size: Vec2::new(width, height),
            color: color.into(),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// The area covered by this rectangle in canvas coordinates
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size)
    }
}

impl Drawable for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn origin(&self) -> Pos2 {
        self.origin
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn validate(&self) -> RenderResult<Color32> {
        common::validate_position("rectangle", self.origin)?;
        common::validate_extent("rectangle", "width", self.size.x)?;
        common::validate_extent("rectangle", "height", self.size.y)?;
        common::resolve_color(&self.color)
    }

    fn paint(&self, fill: Color32, surface: &mut dyn Surface) {
        surface.set_fill_color(fill);
        surface.fill_rect(self.rect());
    }
}
