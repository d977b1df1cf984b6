use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

mod circle;
mod common;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use common::{MAX_EXTENT, MIN_EXTENT, TRIANGLE_HALF_BASE};
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use crate::error::RenderResult;
use crate::surface::Surface;

/// Common trait that every placed shape implements
pub trait Drawable {
    /// Which variant this is
    fn kind(&self) -> ShapeKind;

    /// The anchor point the shape was placed at
    fn origin(&self) -> Pos2;

    /// The color token the shape was created with
    fn color(&self) -> &str;

    /// Check geometry and resolve the fill color without touching a surface
    fn validate(&self) -> RenderResult<Color32>;

    /// Issue the draw calls for this shape. Callers go through [`Drawable::render`].
    fn paint(&self, fill: Color32, surface: &mut dyn Surface);

    /// Paint the shape, or nothing at all if it does not validate
    fn render(&self, surface: &mut dyn Surface) -> RenderResult {
        let fill = self.validate()?;
        self.paint(fill, surface);
        Ok(())
    }
}

/// The closed set of shapes a user can place
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Circle,
    Rectangle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Triangle];

    /// Lowercase name, identical to the persisted tag
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Triangle => "Triangle",
        }
    }

    pub fn uses_radius(self) -> bool {
        self == ShapeKind::Circle
    }

    pub fn uses_width(self) -> bool {
        self == ShapeKind::Rectangle
    }

    pub fn uses_height(self) -> bool {
        matches!(self, ShapeKind::Rectangle | ShapeKind::Triangle)
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Attribute values handed over by the UI when placing a shape.
///
/// Sizes are expected to be clamped already; only the fields the chosen
/// kind uses are read.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeAttrs {
    pub radius: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
}

/// A placed shape. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
}

impl Shape {
    /// Build a shape of `kind` anchored at `origin` from the relevant attributes
    pub fn new(kind: ShapeKind, origin: Pos2, attrs: &ShapeAttrs) -> Self {
        let color = attrs.color.clone();
        match kind {
            ShapeKind::Circle => Shape::Circle(Circle::new(origin, attrs.radius, color)),
            ShapeKind::Rectangle => {
                Shape::Rectangle(Rectangle::new(origin, attrs.width, attrs.height, color))
            }
            ShapeKind::Triangle => Shape::Triangle(Triangle::new(origin, attrs.height, color)),
        }
    }

    fn as_drawable(&self) -> &dyn Drawable {
        match self {
            Shape::Circle(c) => c,
            Shape::Rectangle(r) => r,
            Shape::Triangle(t) => t,
        }
    }
}

impl Drawable for Shape {
    fn kind(&self) -> ShapeKind {
        self.as_drawable().kind()
    }

    fn origin(&self) -> Pos2 {
        self.as_drawable().origin()
    }

    fn color(&self) -> &str {
        self.as_drawable().color()
    }

    fn validate(&self) -> RenderResult<Color32> {
        self.as_drawable().validate()
    }

    fn paint(&self, fill: Color32, surface: &mut dyn Surface) {
        self.as_drawable().paint(fill, surface);
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;

    pub fn circle(x: f32, y: f32, radius: f32, color: &str) -> Shape {
        Circle::new(Pos2::new(x, y), radius, color).into()
    }

    pub fn rectangle(x: f32, y: f32, width: f32, height: f32, color: &str) -> Shape {
        Rectangle::new(Pos2::new(x, y), width, height, color).into()
    }

    pub fn triangle(x: f32, y: f32, height: f32, color: &str) -> Shape {
        Triangle::new(Pos2::new(x, y), height, color).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::surface::{DisplayList, DrawCall};
    use egui::{Rect, Vec2};

    fn attrs() -> ShapeAttrs {
        ShapeAttrs {
            radius: 15.0,
            width: 20.0,
            height: 30.0,
            color: "red".to_owned(),
        }
    }

    #[test]
    fn test_new_uses_only_relevant_attrs() {
        let origin = Pos2::new(5.0, 6.0);
        assert_eq!(
            Shape::new(ShapeKind::Circle, origin, &attrs()),
            factory::circle(5.0, 6.0, 15.0, "red")
        );
        assert_eq!(
            Shape::new(ShapeKind::Rectangle, origin, &attrs()),
            factory::rectangle(5.0, 6.0, 20.0, 30.0, "red")
        );
        assert_eq!(
            Shape::new(ShapeKind::Triangle, origin, &attrs()),
            factory::triangle(5.0, 6.0, 30.0, "red")
        );
    }

    #[test]
    fn test_circle_draw_calls() {
        let mut list = DisplayList::new();
        factory::circle(120.0, 80.0, 15.0, "red").render(&mut list).unwrap();
        assert_eq!(
            list.calls(),
            &[
                DrawCall::SetFillColor(Color32::from_rgb(255, 0, 0)),
                DrawCall::BeginPath,
                DrawCall::Arc {
                    center: Pos2::new(120.0, 80.0),
                    radius: 15.0,
                    start_angle: 0.0,
                    end_angle: std::f32::consts::TAU,
                },
                DrawCall::ClosePath,
                DrawCall::Fill,
            ]
        );
    }

    #[test]
    fn test_rectangle_draw_calls() {
        let mut list = DisplayList::new();
        factory::rectangle(50.0, 50.0, 20.0, 30.0, "green").render(&mut list).unwrap();
        assert_eq!(
            list.calls(),
            &[
                DrawCall::SetFillColor(Color32::from_rgb(0, 128, 0)),
                DrawCall::FillRect(Rect::from_min_size(
                    Pos2::new(50.0, 50.0),
                    Vec2::new(20.0, 30.0)
                )),
            ]
        );
    }

    #[test]
    fn test_triangle_draw_calls() {
        let mut list = DisplayList::new();
        factory::triangle(200.0, 100.0, 40.0, "blue").render(&mut list).unwrap();
        assert_eq!(
            list.calls(),
            &[
                DrawCall::SetFillColor(Color32::from_rgb(0, 0, 255)),
                DrawCall::BeginPath,
                DrawCall::MoveTo(Pos2::new(200.0, 100.0)),
                DrawCall::LineTo(Pos2::new(150.0, 140.0)),
                DrawCall::LineTo(Pos2::new(250.0, 140.0)),
                DrawCall::ClosePath,
                DrawCall::Fill,
            ]
        );
    }

    #[test]
    fn test_invalid_shape_draws_nothing() {
        let mut list = DisplayList::new();

        let err = factory::circle(0.0, 0.0, -1.0, "red").render(&mut list).unwrap_err();
        assert!(matches!(err, RenderError::InvalidGeometry { field: "radius", .. }));

        let err = factory::triangle(f32::NAN, 0.0, 10.0, "red").render(&mut list).unwrap_err();
        assert!(matches!(err, RenderError::InvalidGeometry { field: "x", .. }));

        let err = factory::rectangle(0.0, 0.0, 1.0, 1.0, "nope").render(&mut list).unwrap_err();
        assert_eq!(err, RenderError::UnknownColor("nope".to_owned()));

        assert!(list.calls().is_empty());
    }

    #[test]
    fn test_zero_sized_shapes_are_valid() {
        let mut list = DisplayList::new();
        assert!(factory::circle(1.0, 1.0, 0.0, "black").render(&mut list).is_ok());
        assert!(factory::rectangle(1.0, 1.0, 0.0, 0.0, "black").render(&mut list).is_ok());
        assert!(factory::triangle(1.0, 1.0, 0.0, "black").render(&mut list).is_ok());
    }

    #[test]
    fn test_kind_attribute_usage() {
        assert!(ShapeKind::Circle.uses_radius());
        assert!(!ShapeKind::Circle.uses_height());
        assert!(ShapeKind::Rectangle.uses_width() && ShapeKind::Rectangle.uses_height());
        assert!(ShapeKind::Triangle.uses_height() && !ShapeKind::Triangle.uses_width());
        assert_eq!(ShapeKind::default(), ShapeKind::Circle);
    }
}
