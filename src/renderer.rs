use crate::shape::{Drawable, Shape};
use crate::surface::Surface;

/// What a full redraw did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawSummary {
    pub painted: usize,
    pub skipped: usize,
}

/// Clear `surface` and paint every shape in draw order.
///
/// A shape that fails to render is skipped; it never stops the shapes after
/// it from being drawn. Runs every frame, so skips are only logged at debug.
pub fn redraw(shapes: &[Shape], surface: &mut dyn Surface) -> RedrawSummary {
    surface.clear();

    let mut summary = RedrawSummary::default();
    for (index, shape) in shapes.iter().enumerate() {
        match shape.render(surface) {
            Ok(()) => summary.painted += 1,
            Err(err) => {
                log::debug!("Skipping shape {index}: {err}");
                summary.skipped += 1;
            }
        }
    }
    summary
}
