//! Durable key/value storage contracts used by the desktop runtime.

pub mod prefs;
