// Adapters layer: concrete implementations for the outside world (files, terminal).

pub mod storage;
pub mod terminal;

pub use storage::LocalStorage;
