//! Key-value preference storage contracts and namespaced JSON access.

pub mod namespaced;
pub mod prefs;
