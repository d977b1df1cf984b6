use std::collections::BTreeMap;

/// Durable textual key-value storage the shape list is written to.
pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Option<String>;

    fn set_string(&mut self, key: &str, value: String);

    /// Make previous writes durable. Default: nothing to do.
    fn flush(&mut self) {}
}

/// In-memory storage, used headless and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
    flushes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `flush` has been called
    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

/// Adapter over eframe's storage: a RON file on native, `localStorage` on the web
pub struct EframeStorage<'a> {
    storage: &'a mut dyn eframe::Storage,
}

impl<'a> EframeStorage<'a> {
    pub fn new(storage: &'a mut dyn eframe::Storage) -> Self {
        Self { storage }
    }
}

impl KeyValueStore for EframeStorage<'_> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.storage.get_string(key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.storage.set_string(key, value);
    }

    fn flush(&mut self) {
        self.storage.flush();
    }
}
