mod persistence;
mod session;
mod storage;

pub use persistence::{
    PersistenceError, PersistenceResult, STORAGE_KEY, ShapeRecord, decode_shapes, encode_shapes,
    load_shapes, load_store, save_store,
};
pub use session::Session;
pub use storage::{EframeStorage, KeyValueStore, MemoryStorage};
