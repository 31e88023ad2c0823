use std::sync::Arc;

use crate::{
    foundation::core::{ItemIndex, PlacedItem, Point, Rect, Size},
    layout::cache::{RangeQueryCache, RangeQueryKey},
    layout::config::GridConfig,
    layout::transition::TransitionState,
};

/// Vertical grid layout engine.
///
/// Owns the current [`GridConfig`] and the [`RangeQueryCache`] for viewport queries.
/// All geometry is deterministic; the cache only ever holds ranges that were fully
/// backed by loaded items when they were computed.
#[derive(Debug)]
pub struct GridLayout {
    config: GridConfig,
    cache: RangeQueryCache,
    bounds: Option<Size>,
    focus_index: Option<ItemIndex>,
    last_loaded_count: usize,
}

impl GridLayout {
    /// Engine with an unbounded cache.
    pub fn new(config: GridConfig) -> Self {
        Self::with_cache(config, RangeQueryCache::unbounded())
    }

    /// Engine using the given cache (for example an LRU-bounded one).
    pub fn with_cache(config: GridConfig, cache: RangeQueryCache) -> Self {
        Self {
            config,
            cache,
            bounds: None,
            focus_index: None,
            last_loaded_count: 0,
        }
    }

    /// Current geometry.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Recompute geometry for new parameters.
    ///
    /// Call whenever the viewport width or the column count changes.
    ///
    /// # Panics
    /// Panics on `column_count == 0` or negative gaps, see [`GridConfig::configure`].
    #[tracing::instrument(skip(self))]
    pub fn configure(
        &mut self,
        column_count: usize,
        horizontal_gap: f64,
        vertical_gap: f64,
        bounds_width: f64,
    ) -> GridConfig {
        let config =
            GridConfig::configure(column_count, horizontal_gap, vertical_gap, bounds_width);
        self.apply_config(config);
        config
    }

    /// Install an already derived configuration.
    ///
    /// Cached ranges are dropped when the geometry actually changes: the cache key only
    /// records row height and column count, which two different widths can share.
    pub fn apply_config(&mut self, config: GridConfig) {
        if config != self.config {
            if !self.cache.is_empty() {
                tracing::debug!(
                    dropped = self.cache.len(),
                    "grid geometry changed; clearing range cache"
                );
            }
            self.cache.clear();
        }
        self.config = config;
    }

    /// Reconfigure for a new viewport width, keeping columns and gaps.
    pub fn set_bounds_width(&mut self, bounds_width: f64) -> GridConfig {
        let config = self.config.with_bounds_width(bounds_width);
        self.apply_config(config);
        config
    }

    /// Reconfigure for a new column count, keeping gaps and width.
    ///
    /// # Panics
    /// Panics if `column_count` is 0.
    pub fn set_column_count(&mut self, column_count: usize) -> GridConfig {
        let config = self.config.with_column_count(column_count);
        self.apply_config(config);
        config
    }

    /// Whether a host bounds change requires a relayout.
    ///
    /// Only size changes matter; a pure scroll (origin change) does not.
    pub fn should_invalidate_for_bounds_change(&self, new_bounds: Size) -> bool {
        self.bounds != Some(new_bounds)
    }

    /// Record the host's bounds size, reconfiguring if the width changed.
    ///
    /// Returns whether the layout was invalidated.
    pub fn set_bounds(&mut self, bounds: Size) -> bool {
        if !self.should_invalidate_for_bounds_change(bounds) {
            return false;
        }
        self.bounds = Some(bounds);
        if bounds.width != self.config.bounds_width() {
            self.set_bounds_width(bounds.width);
        }
        true
    }

    /// Frame of the cell at `index`.
    pub fn frame_for_index(&self, index: ItemIndex) -> Rect {
        self.config.frame_for_index(index)
    }

    /// Items whose rows intersect `viewport`, in index order.
    ///
    /// One extra row below the viewport is included as slack. Indices at or past
    /// `loaded_item_count` are never returned. A result is cached only when the whole
    /// candidate range was backed by loaded items; a truncated result depends on the
    /// loaded count and would under-render once more items arrive.
    #[tracing::instrument(skip(self))]
    pub fn items_in_viewport(
        &mut self,
        viewport: Rect,
        loaded_item_count: usize,
    ) -> Arc<[PlacedItem]> {
        if loaded_item_count < self.last_loaded_count && !self.cache.is_empty() {
            tracing::debug!(
                previous = self.last_loaded_count,
                current = loaded_item_count,
                "loaded item count shrank; clearing range cache"
            );
            self.cache.clear();
        }
        self.last_loaded_count = loaded_item_count;

        let row_height = self.config.row_height();
        if row_height == 0 {
            // zero-height rows: nothing has any extent yet
            return Arc::from([]);
        }

        let viewport = viewport.abs();
        let rh = f64::from(row_height);
        let start_row = (viewport.y0 / rh).floor() as i64;
        let row_count = ((viewport.height() / rh).ceil() as usize).saturating_add(1);
        let columns = self.config.column_count();

        let key = RangeQueryKey {
            start_row,
            row_count,
            row_height,
            column_count: columns,
        };
        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(?key, items = hit.len(), "range cache hit");
            return hit;
        }

        let location = usize::try_from(start_row.saturating_mul(columns as i64)).unwrap_or(0);
        let length = row_count.saturating_mul(columns);
        let end = location.saturating_add(length);
        tracing::trace!(location, length, loaded_item_count, "range candidates");

        let items: Arc<[PlacedItem]> = (location..end.min(loaded_item_count))
            .map(|i| {
                let index = ItemIndex(i);
                PlacedItem {
                    index,
                    frame: self.config.frame_for_index(index),
                }
            })
            .collect();

        if end <= loaded_item_count {
            tracing::debug!(?key, items = items.len(), "caching complete range");
            self.cache.insert(key, items.clone());
        } else {
            tracing::debug!(
                ?key,
                end,
                loaded_item_count,
                "range runs past loaded items; not caching"
            );
        }
        items
    }

    /// Total scrollable size for `loaded_item_count` items.
    pub fn content_extent(&self, loaded_item_count: usize) -> Size {
        let last = ItemIndex(loaded_item_count.saturating_sub(1));
        let frame = self.frame_for_index(last);
        Size::new(
            self.config.bounds_width(),
            frame.y0 + self.config.item_size().height + self.config.vertical_gap(),
        )
    }

    /// Scroll offset that vertically centers `focus_index` in the viewport.
    ///
    /// The result is clamped to `[0, content_height - viewport_height]` and is 0 when the
    /// content fits in the viewport. The proposed horizontal offset is kept.
    pub fn target_scroll_offset(
        &self,
        proposed_offset: Point,
        focus_index: ItemIndex,
        viewport_height: f64,
        content_height: f64,
    ) -> Point {
        let max_offset = content_height - viewport_height;
        if max_offset.is_nan() || max_offset <= 0.0 {
            return Point::new(proposed_offset.x, 0.0);
        }
        let frame = self.frame_for_index(focus_index);
        let optimal = frame.center().y - viewport_height / 2.0;
        Point::new(proposed_offset.x, optimal.clamp(0.0, max_offset))
    }

    /// Item to keep in view across the next reconfiguration.
    pub fn set_focus_index(&mut self, focus_index: Option<ItemIndex>) {
        self.focus_index = focus_index;
    }

    /// See [`GridLayout::set_focus_index`].
    pub fn focus_index(&self) -> Option<ItemIndex> {
        self.focus_index
    }

    /// Scroll target for the host after a relayout.
    ///
    /// Centers the stored focus item using this engine's own content extent; without a
    /// focus item the proposed offset is returned unchanged.
    pub fn target_content_offset(
        &self,
        proposed_offset: Point,
        viewport: Size,
        loaded_item_count: usize,
    ) -> Point {
        let Some(focus) = self.focus_index else {
            return proposed_offset;
        };
        let content = self.content_extent(loaded_item_count);
        self.target_scroll_offset(proposed_offset, focus, viewport.height, content.height)
    }

    /// Approximate number of items that fill one viewport of `viewport_height`.
    pub fn zoomed_item_count(&self, viewport_height: f64) -> usize {
        let pitch = self.config.item_size().height + self.config.vertical_gap();
        if pitch.is_nan() || pitch <= 0.0 || viewport_height.is_nan() || viewport_height <= 0.0 {
            return 0;
        }
        ((viewport_height / pitch) * self.config.column_count() as f64).ceil() as usize
    }

    /// Begin animating from the current geometry to `to`.
    pub fn begin_transition(&self, to: GridConfig) -> TransitionState {
        tracing::debug!(
            from_columns = self.config.column_count(),
            to_columns = to.column_count(),
            "grid transition started"
        );
        TransitionState::begin(self.config, to)
    }

    /// Complete `transition` and install its target geometry.
    pub fn finish_transition(&mut self, transition: TransitionState) -> GridConfig {
        let config = transition.finish();
        self.apply_config(config);
        config
    }

    /// Drop every cached range.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of cached ranges.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// The range cache, read-only.
    pub fn cache(&self) -> &RangeQueryCache {
        &self.cache
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
