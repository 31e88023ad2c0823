//! # zoomgrid guide
//!
//! A walkthrough of how a host view drives the engine. If you only need the API surface,
//! the item docs are enough; this page explains how the pieces fit together.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`GridConfig`](crate::GridConfig): column count, gaps and viewport width, plus the derived
//!   square item size and whole-pixel row height
//! - [`GridLayout`](crate::GridLayout): owns the config and the range cache; answers frame and
//!   viewport queries
//! - [`TransitionState`](crate::TransitionState): interpolates between two configs while a zoom
//!   animation runs
//! - [`ItemSizing`](crate::ItemSizing): "what size should cells be right now", implemented by both
//!   the steady-state config and a running transition
//!
//! ---
//!
//! ## Geometry
//!
//! For `n` columns, gap `g` and width `W` the cell side is `max(0, (W - 2g - g(n-1)) / n)`.
//! Cells are inset by one gap on the left. Rows are `ceil(side + vertical_gap)` pixels apart,
//! so row origins always land on whole pixels.
//!
//! A two-column phone grid (`W = 375`, `g = 8`) has 175.5 px cells at x = 8 and x = 191.5 and
//! 184 px rows.
//!
//! ---
//!
//! ## Viewport queries and the cache
//!
//! [`GridLayout::items_in_viewport`](crate::GridLayout::items_in_viewport) turns a viewport
//! rectangle into a row range (plus one row of slack), then into a candidate index range. Items
//! past the loaded count are dropped.
//!
//! Results are memoized by `(start row, row count, row height, column count)`. Only results whose
//! whole candidate range was loaded are stored. A truncated result depends on how many items
//! happened to be loaded at that moment; serving it again after more items arrive leaves the
//! bottom of the screen empty. The cache is also dropped when the geometry changes or the loaded
//! count shrinks.
//!
//! ---
//!
//! ## A zoom, step by step
//!
//! ```
//! use zoomgrid::{GridConfig, GridLayout, ItemIndex, ItemSizing, Point, Rect, Size};
//!
//! let mut grid = GridLayout::new(GridConfig::configure(2, 8.0, 8.0, 375.0));
//! let viewport = Size::new(375.0, 667.0);
//!
//! // Remember which item the user was looking at.
//! grid.set_focus_index(Some(ItemIndex(12)));
//!
//! // Animate to a single column.
//! let target = grid.config().with_column_count(1);
//! let mut transition = grid.begin_transition(target);
//! for step in 0..=10 {
//!     transition.set_progress(f64::from(step) / 10.0);
//!     let cell_constraint = transition.size_range();
//!     let _frame = transition.frame(ItemIndex(12));
//!     assert!(cell_constraint.is_exact());
//! }
//! grid.finish_transition(transition);
//!
//! // Scroll so the focused item is centered again.
//! let offset = grid.target_content_offset(Point::ZERO, viewport, 50);
//! let visible = grid.items_in_viewport(
//!     Rect::from_origin_size(offset, viewport),
//!     50,
//! );
//! assert!(visible.iter().any(|p| p.index == ItemIndex(12)));
//! ```
//!
//! ---
//!
//! ## Settings
//!
//! [`LayoutSettings`](crate::LayoutSettings) reads the grid parameters and an optional cache
//! capacity from JSON; see its docs for the format.
