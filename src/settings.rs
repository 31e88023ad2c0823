use std::{num::NonZeroUsize, path::Path};

use anyhow::Context;

use crate::{
    foundation::error::{GridError, GridResult},
    layout::cache::RangeQueryCache,
    layout::config::{GridConfig, GridSpec},
    layout::grid::GridLayout,
};

/// Range cache settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheSettings {
    /// Maximum number of cached ranges; `None` keeps every complete range.
    pub capacity: Option<usize>,
}

impl CacheSettings {
    /// Build the configured cache.
    pub fn build(&self) -> GridResult<RangeQueryCache> {
        match self.capacity {
            None => Ok(RangeQueryCache::unbounded()),
            Some(n) => {
                let cap = NonZeroUsize::new(n)
                    .ok_or_else(|| GridError::validation("cache.capacity must be > 0 when set"))?;
                Ok(RangeQueryCache::bounded(cap))
            }
        }
    }
}

/// Everything needed to build a [`GridLayout`] apart from the viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSettings {
    /// Grid parameters.
    pub grid: GridSpec,
    /// Range cache parameters.
    pub cache: CacheSettings,
}

impl LayoutSettings {
    /// Parse and validate settings from a JSON string.
    pub fn from_json_str(s: &str) -> GridResult<Self> {
        let settings: Self = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a JSON settings file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> GridResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read layout settings from {}", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Check every field without building anything.
    pub fn validate(&self) -> GridResult<()> {
        self.grid.validate()?;
        if self.cache.capacity == Some(0) {
            return Err(GridError::validation("cache.capacity must be > 0 when set"));
        }
        Ok(())
    }

    /// Build an engine for a viewport of `bounds_width`.
    pub fn build_layout(&self, bounds_width: f64) -> GridResult<GridLayout> {
        let config = GridConfig::from_spec(self.grid, bounds_width)?;
        let cache = self.cache.build()?;
        tracing::debug!(
            columns = config.column_count(),
            row_height = config.row_height(),
            cache_capacity = ?cache.capacity(),
            "built grid layout from settings"
        );
        Ok(GridLayout::with_cache(config, cache))
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
