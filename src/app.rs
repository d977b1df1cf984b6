use crate::command::{Command, Outcome};
use crate::panels;
use crate::settings::ToolSettings;
use crate::state::{EframeStorage, MemoryStorage, STORAGE_KEY, Session};

/// Tool settings are saved under `APP_KEY` on shutdown. The shapes
/// themselves are written under their own key after every change.
#[derive(Debug, Default)]
pub struct ShapeCanvasApp {
    settings: ToolSettings,
    session: Session,
    // Stands in for eframe storage when the integration has none
    fallback_storage: MemoryStorage,
}

impl ShapeCanvasApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let Some(storage) = cc.storage else {
            log::warn!("No persistent storage available, drawings will not survive a restart");
            return Self::default();
        };

        let mut settings: ToolSettings =
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        settings.clamp();
        let session = Session::from_persisted(storage.get_string(STORAGE_KEY).as_deref())
            .with_kind(settings.kind);

        Self {
            settings,
            session,
            fallback_storage: MemoryStorage::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    /// Build a placement command from the current tool settings
    pub fn place_command(&self, position: egui::Pos2) -> Command {
        Command::Place {
            kind: self.session.selected_kind(),
            position,
            attrs: self.settings.attrs(),
        }
    }

    /// Run a command against the session, persisting through the frame's storage
    pub fn dispatch(&mut self, command: Command, frame: &mut eframe::Frame) -> Outcome {
        let outcome = match frame.storage_mut() {
            Some(storage) => self.session.handle(command, &mut EframeStorage::new(storage)),
            None => self.session.handle(command, &mut self.fallback_storage),
        };
        if let Outcome::KindSelected(kind) = outcome {
            self.settings.kind = kind;
        }
        outcome
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let undo = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z));
        if undo {
            self.dispatch(Command::Undo, frame);
        }
    }
}

impl eframe::App for ShapeCanvasApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
        // Shapes are already written on every change, this only covers a missed write
        let mut shapes_storage = EframeStorage::new(storage);
        if let Err(err) = crate::state::save_store(self.session.store(), &mut shapes_storage) {
            log::error!("Failed to save shapes: {err}");
        }
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx, frame);
        panels::tools_panel(self, ctx, frame);
        panels::central_panel(self, ctx, frame);
    }
}
