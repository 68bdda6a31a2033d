//! Local storage module for persisting user preferences
//!
//! The only persisted state is the theme preference, stored as one
//! key-value entry:
//! - [`db`] opens the SQLite database through SeaORM and creates the schema
//! - [`preferences`] exposes the [`PreferenceStore`] seam used by the UI

pub mod db;
pub mod preferences;

pub use db::LocalStorage;
pub use preferences::{MemoryPreferenceStore, PreferenceError, PreferenceStore, SqlitePreferenceStore};
