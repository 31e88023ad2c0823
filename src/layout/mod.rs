//! Vertical grid layout: geometry, viewport range cache, and zoom transitions.

pub(crate) mod cache;
pub(crate) mod config;
pub(crate) mod grid;
pub(crate) mod shared;
pub(crate) mod transition;
