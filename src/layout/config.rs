use crate::{
    foundation::core::{ItemIndex, Point, Rect, Size, SizeRange},
    foundation::error::{GridError, GridResult},
    foundation::math::ceil_px,
};

/// Anything that can report the size cells should currently be measured at.
///
/// Implemented by the steady-state [`GridConfig`] and by an in-flight
/// [`TransitionState`](crate::TransitionState), so hosts can size cells without
/// knowing which of the two is active.
pub trait ItemSizing {
    /// Current cell size.
    fn item_size(&self) -> Size;

    /// Exact size constraint for measuring a cell.
    fn size_range(&self) -> SizeRange {
        SizeRange::exact(self.item_size())
    }
}

/// User-facing grid parameters, independent of the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridSpec {
    /// Number of columns; must be `>= 1`.
    pub column_count: usize,
    /// Gap between columns, also used as the leading and trailing inset.
    pub horizontal_gap: f64,
    /// Gap between rows.
    pub vertical_gap: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            column_count: 2,
            horizontal_gap: 8.0,
            vertical_gap: 8.0,
        }
    }
}

impl GridSpec {
    /// Check the parameters without deriving any geometry.
    pub fn validate(&self) -> GridResult<()> {
        if self.column_count == 0 {
            return Err(GridError::validation("column_count must be >= 1"));
        }
        for (name, value) in [
            ("horizontal_gap", self.horizontal_gap),
            ("vertical_gap", self.vertical_gap),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Resolved grid geometry for one viewport width.
///
/// Built only through [`GridConfig::configure`] or [`GridConfig::try_configure`],
/// so the derived item size and row height always match the inputs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GridConfig {
    spec: GridSpec,
    bounds_width: f64,
    item_size: Size,
    row_height: u32,
}

impl GridConfig {
    /// Derive the grid geometry.
    ///
    /// # Panics
    /// Panics if `column_count` is 0, a gap is negative or non-finite, or
    /// `bounds_width` is NaN. These are programming errors; use
    /// [`GridConfig::try_configure`] for untrusted input.
    pub fn configure(
        column_count: usize,
        horizontal_gap: f64,
        vertical_gap: f64,
        bounds_width: f64,
    ) -> Self {
        match Self::try_configure(column_count, horizontal_gap, vertical_gap, bounds_width) {
            Ok(config) => config,
            Err(err) => panic!("invalid grid configuration: {err}"),
        }
    }

    /// Fallible twin of [`GridConfig::configure`].
    pub fn try_configure(
        column_count: usize,
        horizontal_gap: f64,
        vertical_gap: f64,
        bounds_width: f64,
    ) -> GridResult<Self> {
        Self::from_spec(
            GridSpec {
                column_count,
                horizontal_gap,
                vertical_gap,
            },
            bounds_width,
        )
    }

    /// Derive the geometry for `spec` at `bounds_width`.
    ///
    /// A negative or infinite width is treated as "no room" and yields zero-sized items.
    pub fn from_spec(spec: GridSpec, bounds_width: f64) -> GridResult<Self> {
        spec.validate()?;
        if bounds_width.is_nan() {
            return Err(GridError::validation("bounds_width must not be NaN"));
        }
        let bounds_width = if bounds_width.is_finite() {
            bounds_width.max(0.0)
        } else {
            0.0
        };

        let columns = spec.column_count as f64;
        let inset_total = spec.horizontal_gap * 2.0;
        let avail_w = bounds_width - spec.horizontal_gap * (columns - 1.0) - inset_total;
        let side = (avail_w / columns).max(0.0);
        let item_size = Size::new(side, side);
        let row_height = ceil_px(side + spec.vertical_gap);

        Ok(Self {
            spec,
            bounds_width,
            item_size,
            row_height,
        })
    }

    /// Same gaps and width, different column count (the "zoom" target).
    ///
    /// # Panics
    /// Panics if `column_count` is 0.
    pub fn with_column_count(&self, column_count: usize) -> Self {
        Self::configure(
            column_count,
            self.spec.horizontal_gap,
            self.spec.vertical_gap,
            self.bounds_width,
        )
    }

    /// Same parameters at a new viewport width.
    ///
    /// # Panics
    /// Panics if `bounds_width` is NaN.
    pub fn with_bounds_width(&self, bounds_width: f64) -> Self {
        Self::configure(
            self.spec.column_count,
            self.spec.horizontal_gap,
            self.spec.vertical_gap,
            bounds_width,
        )
    }

    /// Parameters this geometry was derived from.
    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.spec.column_count
    }

    /// Horizontal gap (and leading inset).
    pub fn horizontal_gap(&self) -> f64 {
        self.spec.horizontal_gap
    }

    /// Vertical gap between rows.
    pub fn vertical_gap(&self) -> f64 {
        self.spec.vertical_gap
    }

    /// Viewport width the geometry was derived for.
    pub fn bounds_width(&self) -> f64 {
        self.bounds_width
    }

    /// Square cell size.
    pub fn item_size(&self) -> Size {
        self.item_size
    }

    /// Whole-pixel distance between consecutive row origins.
    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    /// Top-left corner of the cell at `index`.
    pub fn origin_for_index(&self, index: ItemIndex) -> Point {
        let col = index.col(self.spec.column_count) as f64;
        let row = index.row(self.spec.column_count) as f64;

        let mut x = col * self.item_size.width;
        x += col * self.spec.horizontal_gap;
        // leading inset
        x += self.spec.horizontal_gap;

        Point::new(x, row * f64::from(self.row_height))
    }

    /// Frame of the cell at `index`. No range check against the loaded item count.
    pub fn frame_for_index(&self, index: ItemIndex) -> Rect {
        Rect::from_origin_size(self.origin_for_index(index), self.item_size)
    }
}

impl ItemSizing for GridConfig {
    fn item_size(&self) -> Size {
        self.item_size
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;
