use egui::Pos2;

use crate::shape::{Shape, ShapeAttrs, ShapeKind};

/// Everything the UI can ask the session to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Change the shape kind used for subsequent placements
    SelectKind(ShapeKind),
    /// Place a new shape at a canvas-local position
    Place {
        kind: ShapeKind,
        position: Pos2,
        attrs: ShapeAttrs,
    },
    /// Remove the most recently placed shape
    Undo,
    /// Remove every shape
    Clear,
}

/// Result of handling a [`Command`]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    KindSelected(ShapeKind),
    Placed(Shape),
    /// The removed shape, or `None` if there was nothing to undo
    Undone(Option<Shape>),
    Cleared,
}

impl Outcome {
    /// Whether the canvas has to be repainted from the store
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Outcome::KindSelected(_))
    }
}
