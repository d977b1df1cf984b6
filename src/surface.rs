use egui::{Color32, Painter, Pos2, Rect, Vec2};

/// Background the canvas is cleared to.
pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// Abstract 2D drawing target, modelled on a canvas 2D context.
///
/// Coordinates are canvas-local: `(0, 0)` is the top-left corner of the
/// drawing area.
pub trait Surface {
    /// Wipe everything painted so far
    fn clear(&mut self);

    /// Set the color used by subsequent `fill` / `fill_rect` calls
    fn set_fill_color(&mut self, color: Color32);

    /// Discard the current path and start a new one
    fn begin_path(&mut self);

    fn move_to(&mut self, point: Pos2);

    fn line_to(&mut self, point: Pos2);

    /// Append a clockwise arc around `center`, angles in radians
    fn arc(&mut self, center: Pos2, radius: f32, start_angle: f32, end_angle: f32);

    fn close_path(&mut self);

    /// Fill the current path with the fill color
    fn fill(&mut self);

    /// Fill an axis-aligned rectangle with the fill color, independent of the path
    fn fill_rect(&mut self, rect: Rect);
}

/// A single recorded call on a [`DisplayList`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    SetFillColor(Color32),
    BeginPath,
    MoveTo(Pos2),
    LineTo(Pos2),
    Arc {
        center: Pos2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    ClosePath,
    Fill,
    FillRect(Rect),
}

/// Surface that records every call instead of rasterizing.
///
/// Two display lists with equal [`DisplayList::frame`] slices paint the same
/// pixels, which makes this the surface of choice for headless callers and
/// tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    calls: Vec<DrawCall>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call recorded since creation
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Calls recorded since the most recent `clear`, i.e. what is currently visible
    pub fn frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|call| *call == DrawCall::Clear)
            .map_or(0, |index| index + 1);
        &self.calls[start..]
    }

    /// Whether anything has been filled since the last clear
    pub fn has_paint(&self) -> bool {
        self.frame()
            .iter()
            .any(|call| matches!(call, DrawCall::Fill | DrawCall::FillRect(_)))
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.calls.push(DrawCall::SetFillColor(color));
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, point: Pos2) {
        self.calls.push(DrawCall::MoveTo(point));
    }

    fn line_to(&mut self, point: Pos2) {
        self.calls.push(DrawCall::LineTo(point));
    }

    fn arc(&mut self, center: Pos2, radius: f32, start_angle: f32, end_angle: f32) {
        self.calls.push(DrawCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn close_path(&mut self) {
        self.calls.push(DrawCall::ClosePath);
    }

    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::FillRect(rect));
    }
}

// Segments used for a full turn when flattening arcs
const ARC_SEGMENTS_PER_TURN: f32 = 64.0;

/// Surface adapter over an egui [`Painter`].
///
/// Paths are flattened to polygons and emitted as convex egui shapes, which
/// covers every shape this crate draws.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas: Rect,
    fill_color: Color32,
    path: Vec<Pos2>,
}

impl<'a> PainterSurface<'a> {
    /// Wrap `painter`, mapping canvas-local coordinates into `canvas`
    pub fn new(painter: &'a Painter, canvas: Rect) -> Self {
        Self {
            painter,
            canvas,
            fill_color: Color32::BLACK,
            path: Vec::new(),
        }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        self.canvas.min + point.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.path.clear();
        self.painter.rect_filled(self.canvas, 0.0, CANVAS_BACKGROUND);
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.fill_color = color;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: Pos2) {
        self.path.push(self.to_screen(point));
    }

    fn line_to(&mut self, point: Pos2) {
        self.path.push(self.to_screen(point));
    }

    fn arc(&mut self, center: Pos2, radius: f32, start_angle: f32, end_angle: f32) {
        let sweep = end_angle - start_angle;
        let segments = (sweep.abs() / std::f32::consts::TAU * ARC_SEGMENTS_PER_TURN)
            .ceil()
            .max(1.0) as usize;
        let center = self.to_screen(center);
        for step in 0..=segments {
            let angle = start_angle + sweep * step as f32 / segments as f32;
            self.path.push(center + radius * Vec2::angled(angle));
        }
    }

    fn close_path(&mut self) {
        // Polygons are closed implicitly when filled
        if self.path.len() > 1 && self.path.first() == self.path.last() {
            self.path.pop();
        }
    }

    fn fill(&mut self) {
        if self.path.len() < 3 {
            return;
        }
        self.painter.add(egui::Shape::convex_polygon(
            self.path.clone(),
            self.fill_color,
            egui::Stroke::NONE,
        ));
    }

    fn fill_rect(&mut self, rect: Rect) {
        let rect = rect.translate(self.canvas.min.to_vec2());
        self.painter.rect_filled(rect, 0.0, self.fill_color);
    }
}
