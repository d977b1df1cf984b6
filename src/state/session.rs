use egui::Pos2;

use super::persistence;
use super::storage::KeyValueStore;
use crate::command::{Command, Outcome};
use crate::renderer::{self, RedrawSummary};
use crate::shape::{Drawable, Shape, ShapeAttrs, ShapeKind};
use crate::store::ShapeStore;
use crate::surface::Surface;

/// The drawing session: the shape store plus the currently selected kind.
///
/// All state lives here and is handed to the UI by reference. Every command
/// runs to completion synchronously, and every store mutation is written to
/// storage before the command returns, so a reload always sees the latest
/// drawing.
///
/// # Example
///
/// ```rust
/// use shape_canvas::command::Command;
/// use shape_canvas::state::{MemoryStorage, Session};
///
/// let mut storage = MemoryStorage::new();
/// let mut session = Session::load_from_persistence(&storage);
/// session.handle(Command::Undo, &mut storage);
/// assert!(session.store().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: ShapeStore,
    selected_kind: ShapeKind,
}

impl Session {
    /// Creates an empty session with the default kind selected
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: ShapeStore) -> Self {
        Self {
            store,
            selected_kind: ShapeKind::default(),
        }
    }

    /// Start with `kind` selected instead of the default
    pub fn with_kind(mut self, kind: ShapeKind) -> Self {
        self.selected_kind = kind;
        self
    }

    /// Startup hydration from the shape list kept in `storage`
    pub fn load_from_persistence(storage: &dyn KeyValueStore) -> Self {
        Self::hydrate(persistence::load_store(storage))
    }

    /// Startup hydration from a raw stored blob
    pub fn from_persisted(blob: Option<&str>) -> Self {
        Self::hydrate(ShapeStore::from_shapes(persistence::load_shapes(blob)))
    }

    fn hydrate(store: ShapeStore) -> Self {
        for (index, shape) in store.all().iter().enumerate() {
            if let Err(err) = shape.validate() {
                log::warn!("Restored shape {index} cannot be drawn: {err}");
            }
        }
        log::info!("Restored {} shapes from storage", store.len());
        Self::with_store(store)
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn selected_kind(&self) -> ShapeKind {
        self.selected_kind
    }

    /// Apply one command. Store mutations are persisted before this returns.
    pub fn handle(&mut self, command: Command, storage: &mut dyn KeyValueStore) -> Outcome {
        log::debug!("Handling {command:?}");
        match command {
            Command::SelectKind(kind) => {
                self.selected_kind = kind;
                Outcome::KindSelected(kind)
            }
            Command::Place {
                kind,
                position,
                attrs,
            } => Outcome::Placed(self.on_place(kind, position, &attrs, storage)),
            Command::Undo => Outcome::Undone(self.on_undo(storage)),
            Command::Clear => {
                self.on_clear(storage);
                Outcome::Cleared
            }
        }
    }

    /// Construct a shape, append it and persist
    pub fn on_place(
        &mut self,
        kind: ShapeKind,
        position: Pos2,
        attrs: &ShapeAttrs,
        storage: &mut dyn KeyValueStore,
    ) -> Shape {
        let shape = Shape::new(kind, position, attrs);
        if let Err(err) = shape.validate() {
            log::warn!("Placed {kind} cannot be drawn: {err}");
        }
        self.store.append(shape.clone());
        self.persist(storage);
        shape
    }

    /// Pop the last shape, if any, and persist
    pub fn on_undo(&mut self, storage: &mut dyn KeyValueStore) -> Option<Shape> {
        let removed = self.store.remove_last();
        if removed.is_none() {
            log::debug!("Nothing to undo");
        }
        self.persist(storage);
        removed
    }

    /// Remove every shape and persist
    pub fn on_clear(&mut self, storage: &mut dyn KeyValueStore) {
        log::info!("Clearing {} shapes", self.store.len());
        self.store.clear();
        self.persist(storage);
    }

    /// Repaint the whole canvas from the store
    pub fn redraw(&self, surface: &mut dyn Surface) -> RedrawSummary {
        renderer::redraw(self.store.all(), surface)
    }

    // The in-memory store stays authoritative when a write fails
    fn persist(&self, storage: &mut dyn KeyValueStore) {
        if let Err(err) = persistence::save_store(&self.store, storage) {
            log::error!("Failed to persist shapes: {err}");
        }
    }
}
