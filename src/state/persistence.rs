use egui::Pos2;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::storage::KeyValueStore;
use crate::shape::{Circle, Drawable, Rectangle, Shape, ShapeKind, Triangle};
use crate::store::ShapeStore;

/// Key the serialized shape list is stored under
pub const STORAGE_KEY: &str = "drawnShapes";

// Fallbacks for fields missing from a stored record
const DEFAULT_X: f32 = 100.0;
const DEFAULT_Y: f32 = 100.0;
const DEFAULT_RADIUS: f32 = 1.0;
const DEFAULT_WIDTH: f32 = 10.0;
const DEFAULT_HEIGHT: f32 = 10.0;
const DEFAULT_COLOR: &str = "blue";

/// Errors that can occur while encoding or decoding the shape list
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to (de)serialize shapes: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Shape {index} has non-finite geometry")]
    NonFinite { index: usize },
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// One shape as it appears in storage.
///
/// Records written by this crate always carry `kind`. Older untagged records
/// are told apart by which geometry keys are present. Numeric fields are
/// `None` when the key is absent and `Some(None)` when it holds `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ShapeKind>,
    #[serde(default, deserialize_with = "present_number")]
    pub x: Option<Option<f32>>,
    #[serde(default, deserialize_with = "present_number")]
    pub y: Option<Option<f32>>,
    #[serde(
        default,
        deserialize_with = "present_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub radius: Option<Option<f32>>,
    #[serde(
        default,
        deserialize_with = "present_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<Option<f32>>,
    #[serde(
        default,
        deserialize_with = "present_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<Option<f32>>,
    #[serde(default)]
    pub color: Option<String>,
}

// Only called for keys that exist, so an explicit `null` stays distinguishable from absence
fn present_number<'de, D>(deserializer: D) -> Result<Option<Option<f32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f32>::deserialize(deserializer).map(Some)
}

/// Absent keys take the default; `null` paints as zero, like a canvas call would
fn resolve(field: Option<Option<f32>>, default: f32) -> f32 {
    match field {
        None => default,
        Some(value) => value.unwrap_or(0.0),
    }
}

impl ShapeRecord {
    /// Variant this record decodes to.
    ///
    /// An explicit tag wins. Otherwise a `radius` key means circle, then a
    /// `width` key means rectangle, and anything else is a triangle.
    pub fn discriminant(&self) -> ShapeKind {
        if let Some(kind) = self.kind {
            kind
        } else if self.radius.is_some() {
            ShapeKind::Circle
        } else if self.width.is_some() {
            ShapeKind::Rectangle
        } else {
            ShapeKind::Triangle
        }
    }

    pub fn into_shape(self) -> Shape {
        let kind = self.discriminant();
        let origin = Pos2::new(resolve(self.x, DEFAULT_X), resolve(self.y, DEFAULT_Y));
        let color = self.color.unwrap_or_else(|| DEFAULT_COLOR.to_owned());
        let height = resolve(self.height, DEFAULT_HEIGHT);
        match kind {
            ShapeKind::Circle => {
                Circle::new(origin, resolve(self.radius, DEFAULT_RADIUS), color).into()
            }
            ShapeKind::Rectangle => {
                Rectangle::new(origin, resolve(self.width, DEFAULT_WIDTH), height, color).into()
            }
            ShapeKind::Triangle => Triangle::new(origin, height, color).into(),
        }
    }

    fn is_finite(&self) -> bool {
        [self.x, self.y, self.radius, self.width, self.height]
            .into_iter()
            .flatten()
            .flatten()
            .all(f32::is_finite)
    }
}

impl From<&Shape> for ShapeRecord {
    fn from(shape: &Shape) -> Self {
        let mut record = match shape {
            Shape::Circle(c) => ShapeRecord {
                radius: Some(Some(c.radius())),
                ..Default::default()
            },
            Shape::Rectangle(r) => ShapeRecord {
                width: Some(Some(r.width())),
                height: Some(Some(r.height())),
                ..Default::default()
            },
            Shape::Triangle(t) => ShapeRecord {
                height: Some(Some(t.height())),
                ..Default::default()
            },
        };
        let origin = shape.origin();
        record.kind = Some(shape.kind());
        record.x = Some(Some(origin.x));
        record.y = Some(Some(origin.y));
        record.color = Some(shape.color().to_owned());
        record
    }
}

/// Serialize shapes, in order, to the stored JSON text
pub fn encode_shapes(shapes: &[Shape]) -> PersistenceResult<String> {
    let records = shapes
        .iter()
        .enumerate()
        .map(|(index, shape)| {
            let record = ShapeRecord::from(shape);
            if record.is_finite() {
                Ok(record)
            } else {
                Err(PersistenceError::NonFinite { index })
            }
        })
        .collect::<PersistenceResult<Vec<_>>>()?;
    Ok(serde_json::to_string(&records)?)
}

/// Parse stored JSON text back into shapes, failing on malformed input.
///
/// Numbers outside the `f32` range count as malformed.
pub fn decode_shapes(text: &str) -> PersistenceResult<Vec<Shape>> {
    let records: Vec<ShapeRecord> = serde_json::from_str(text)?;
    if let Some(index) = records.iter().position(|record| !record.is_finite()) {
        return Err(PersistenceError::NonFinite { index });
    }
    Ok(records.into_iter().map(ShapeRecord::into_shape).collect())
}

/// Hydrate shapes from a stored blob.
///
/// Absent, blank or malformed state all mean "nothing drawn yet".
pub fn load_shapes(blob: Option<&str>) -> Vec<Shape> {
    let Some(text) = blob.map(str::trim).filter(|text| !text.is_empty()) else {
        return Vec::new();
    };
    match decode_shapes(text) {
        Ok(shapes) => shapes,
        Err(err) => {
            log::warn!("Ignoring malformed stored shapes: {err}");
            Vec::new()
        }
    }
}

/// Write the whole store under [`STORAGE_KEY`] and flush
pub fn save_store(store: &ShapeStore, storage: &mut dyn KeyValueStore) -> PersistenceResult<()> {
    let text = encode_shapes(store.all())?;
    storage.set_string(STORAGE_KEY, text);
    storage.flush();
    Ok(())
}

/// Read the store from [`STORAGE_KEY`], falling back to an empty store
pub fn load_store(storage: &dyn KeyValueStore) -> ShapeStore {
    ShapeStore::from_shapes(load_shapes(storage.get_string(STORAGE_KEY).as_deref()))
}
