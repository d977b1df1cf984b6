use crate::shape::Shape;

/// Ordered list of placed shapes.
///
/// Insertion order is draw order, so the last shape is painted on top.
/// Only the session mutates the store, and every mutation is followed by a
/// persistence write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Add a shape on top of everything drawn so far
    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove the most recently placed shape, if any
    pub fn remove_last(&mut self) -> Option<Shape> {
        self.shapes.pop()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// All shapes in draw order
    pub fn all(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn last(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
