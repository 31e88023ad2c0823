//! zoomgrid is a framework-agnostic layout engine for vertical grids of square cells.
//!
//! It answers the questions a scrolling collection view asks of its layout:
//!
//! 1. **Configure**: column count, gaps and viewport width -> square item size and row height
//! 2. **Place**: item index -> frame (`kurbo::Rect`)
//! 3. **Query**: viewport rectangle + loaded item count -> visible items, memoized per row range
//! 4. **Transition**: interpolate frames between two configurations during a zoom animation
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every geometry query is a pure function of the configuration.
//! - **Never cache truncated ranges**: a viewport result is memoized only when every candidate
//!   item was loaded, so asynchronously arriving items always show up.
//! - **No global state**: the range cache belongs to a [`GridLayout`] instance.
//!
//! See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod layout;

/// Walkthrough of the engine and the zoom flow.
pub mod guide;
/// JSON-backed layout settings.
pub mod settings;

pub use animation::ease::TransitionCurve;
pub use foundation::core::{ItemIndex, PlacedItem, Point, Rect, Size, SizeRange};
pub use foundation::error::{GridError, GridResult};
pub use layout::cache::{RangeQueryCache, RangeQueryKey};
pub use layout::config::{GridConfig, GridSpec, ItemSizing};
pub use layout::grid::GridLayout;
pub use layout::shared::SharedGridLayout;
pub use layout::transition::TransitionState;
pub use settings::{CacheSettings, LayoutSettings};
