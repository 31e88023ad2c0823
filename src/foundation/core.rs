pub use kurbo::{Point, Rect, Size};

/// Zero-based, row-major position of an item in the grid.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ItemIndex(pub usize);

impl ItemIndex {
    /// Row of this item for a grid with `columns` columns.
    pub fn row(self, columns: usize) -> usize {
        self.0 / columns
    }

    /// Column of this item for a grid with `columns` columns.
    pub fn col(self, columns: usize) -> usize {
        self.0 % columns
    }
}

impl From<usize> for ItemIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

/// An item index together with its resolved frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlacedItem {
    /// Item position in the data source.
    pub index: ItemIndex,
    /// Frame in content coordinates.
    pub frame: Rect,
}

/// Size constraint handed to cell measurement.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SizeRange {
    /// Smallest acceptable size.
    pub min: Size,
    /// Largest acceptable size.
    pub max: Size,
}

impl SizeRange {
    /// A range that admits exactly one size.
    pub fn exact(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Whether `min == max`.
    pub fn is_exact(self) -> bool {
        self.min == self.max
    }

    /// Clamp `size` component-wise into the range; `max` wins if the range is inverted.
    pub fn clamp(self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min.width).min(self.max.width),
            size.height.max(self.min.height).min(self.max.height),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
