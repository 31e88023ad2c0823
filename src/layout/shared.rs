use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    foundation::core::{ItemIndex, PlacedItem, Rect, Size},
    layout::config::GridConfig,
    layout::grid::GridLayout,
};

/// A [`GridLayout`] behind a single mutex, for hosts that query from several threads.
///
/// Clones share the same engine and cache. Each call holds the lock for its whole duration.
#[derive(Clone, Debug)]
pub struct SharedGridLayout {
    inner: Arc<Mutex<GridLayout>>,
}

impl SharedGridLayout {
    /// Wrap `layout` for shared use.
    pub fn new(layout: GridLayout) -> Self {
        Self {
            inner: Arc::new(Mutex::new(layout)),
        }
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut GridLayout) -> R) -> R {
        f(&mut self.lock())
    }

    /// See [`GridLayout::configure`].
    pub fn configure(
        &self,
        column_count: usize,
        horizontal_gap: f64,
        vertical_gap: f64,
        bounds_width: f64,
    ) -> GridConfig {
        self.lock()
            .configure(column_count, horizontal_gap, vertical_gap, bounds_width)
    }

    /// Snapshot of the current geometry.
    pub fn config(&self) -> GridConfig {
        *self.lock().config()
    }

    /// See [`GridLayout::frame_for_index`].
    pub fn frame_for_index(&self, index: ItemIndex) -> Rect {
        self.lock().frame_for_index(index)
    }

    /// See [`GridLayout::items_in_viewport`].
    pub fn items_in_viewport(&self, viewport: Rect, loaded_item_count: usize) -> Arc<[PlacedItem]> {
        self.lock().items_in_viewport(viewport, loaded_item_count)
    }

    /// See [`GridLayout::content_extent`].
    pub fn content_extent(&self, loaded_item_count: usize) -> Size {
        self.lock().content_extent(loaded_item_count)
    }

    // The engine never leaves itself half-updated, and a stale cache entry is still a
    // complete result, so a panic in another holder does not invalidate the state.
    fn lock(&self) -> MutexGuard<'_, GridLayout> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/shared.rs"]
mod tests;
