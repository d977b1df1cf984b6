use thiserror::Error;

/// Reasons a shape refuses to render.
///
/// A shape that fails validation issues no draw calls at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("{kind} has invalid {field}: {value}")]
    InvalidGeometry {
        kind: &'static str,
        field: &'static str,
        value: f32,
    },

    #[error("Unknown color token: {0:?}")]
    UnknownColor(String),
}

/// Result type for render operations
pub type RenderResult<T = ()> = Result<T, RenderError>;
