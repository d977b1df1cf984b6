#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod error;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod shape;
pub mod state;
pub mod store;
pub mod surface;

pub use app::ShapeCanvasApp;
pub use command::{Command, Outcome};
pub use error::{RenderError, RenderResult};
pub use renderer::{RedrawSummary, redraw};
pub use settings::ToolSettings;
pub use shape::{Drawable, Shape, ShapeAttrs, ShapeKind};
pub use state::Session;
pub use store::ShapeStore;
pub use surface::{DisplayList, DrawCall, PainterSurface, Surface};
