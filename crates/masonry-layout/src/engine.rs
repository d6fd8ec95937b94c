//! Layout engine implementation.

use std::ops::Range;

use masonry_core::{LayoutState, MasonryConfig, MasonryError, Placement, Result};

use crate::columns::ColumnState;

/// Operations a coordinator drives on a layout engine.
pub trait LayoutTarget {
    /// Number of columns currently in use.
    fn column_count(&self) -> usize;

    /// Change the number of columns. Rejects zero.
    fn set_column_count(&mut self, column_count: usize) -> Result<()>;

    /// Resize the item sequence. Removed and added items have no height.
    fn set_item_count(&mut self, item_count: usize);

    /// Record the measured height of one item.
    fn set_item_height(&mut self, index: usize, height: f32) -> Result<()>;

    /// Re-place items from `start` onwards; returns the re-emitted range.
    fn recompute_from(&mut self, start: usize) -> Range<usize>;
}

/// Incremental shortest-column layout engine.
///
/// Heights are recorded with [`set_item_height`](Self::set_item_height) and
/// only take effect on the next [`recompute_from`](Self::recompute_from).
/// Placements before the recompute start are kept as they are; the column
/// heights they produced are replayed so the suffix is placed exactly as a
/// full pass would place it.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    column_count: usize,
    heights: Vec<f32>,
    columns: ColumnState,
    state: LayoutState,
    /// Lowest index whose placement is invalid regardless of the requested start
    stale_from: Option<usize>,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            column_count: 1,
            heights: Vec::new(),
            columns: ColumnState::new(1),
            state: LayoutState::new(),
            stale_from: None,
        }
    }
}

impl LayoutEngine {
    /// Create an engine with `column_count` columns and no items.
    pub fn new(column_count: usize) -> Result<Self> {
        let mut engine = Self::default();
        engine.set_column_count(column_count)?;
        Ok(engine)
    }

    /// Create an engine from a configuration.
    pub fn from_config(config: &MasonryConfig) -> Result<Self> {
        Self::new(config.column_count)
    }

    /// Replace all item heights at once. Does not recompute.
    pub fn set_item_heights(&mut self, heights: &[f32]) {
        self.set_item_count(0);
        self.heights = heights
            .iter()
            .enumerate()
            .map(|(index, &height)| sanitize_height(index, height))
            .collect();
    }

    /// Change the number of columns.
    ///
    /// A different count invalidates every placement, so the next recompute
    /// runs from index 0 whatever start it is given.
    pub fn set_column_count(&mut self, column_count: usize) -> Result<()> {
        if column_count == 0 {
            return Err(MasonryError::InvalidColumnCount(column_count));
        }
        if column_count != self.column_count {
            tracing::debug!(
                from = self.column_count,
                to = column_count,
                "column count changed"
            );
            self.column_count = column_count;
            self.stale_from = Some(0);
        }
        Ok(())
    }

    /// Resize the item sequence.
    ///
    /// Heights of removed items are discarded; new items start unmeasured.
    pub fn set_item_count(&mut self, item_count: usize) {
        let previous = self.heights.len();
        if item_count == previous {
            return;
        }
        self.heights.resize(item_count, 0.0);
        let first_changed = previous.min(item_count);
        self.stale_from = Some(self.stale_from.map_or(first_changed, |s| s.min(first_changed)));
    }

    /// Record the measured height of `index`.
    ///
    /// Negative or non-finite heights are stored as 0. Indices beyond the
    /// current item count are rejected.
    pub fn set_item_height(&mut self, index: usize, height: f32) -> Result<()> {
        let count = self.heights.len();
        let slot = self
            .heights
            .get_mut(index)
            .ok_or_else(|| MasonryError::index_out_of_range(index, count))?;
        *slot = sanitize_height(index, height);
        Ok(())
    }

    /// Re-place items `start..item_count`.
    ///
    /// Column heights for `0..start` are replayed from the recorded heights
    /// and the existing placements for that prefix are kept. A start past
    /// the end only replays. Returns the range of placements emitted.
    pub fn recompute_from(&mut self, start: usize) -> Range<usize> {
        let count = self.heights.len();
        let mut start = start.min(count).min(self.state.placements.len());
        if let Some(stale) = self.stale_from.take() {
            start = start.min(stale);
        }

        // Replay
        self.columns.reset(self.column_count);
        for &height in &self.heights[..start] {
            self.columns.push(height);
        }

        // Place
        self.state.placements.truncate(start);
        for &height in &self.heights[start..] {
            if let Some((column, offset)) = self.columns.push(height) {
                self.state
                    .placements
                    .push(Placement::new(column, self.column_count, offset));
            }
        }

        self.state.tallest_column_height = if count == 0 {
            0.0
        } else {
            self.columns.tallest()
        };

        tracing::trace!(
            start,
            count,
            columns = self.column_count,
            tallest = self.state.tallest_column_height,
            "recomputed layout"
        );
        start..count
    }

    /// Placements from the last recompute.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.state.placements
    }

    /// Placement of one item from the last recompute.
    #[must_use]
    pub fn placement(&self, index: usize) -> Option<&Placement> {
        self.state.get(index)
    }

    /// Height of the tallest column after the last recompute.
    #[must_use]
    pub fn tallest_column_height(&self) -> f32 {
        self.state.tallest_column_height
    }

    /// Full result of the last recompute.
    #[must_use]
    pub fn layout_state(&self) -> &LayoutState {
        &self.state
    }

    /// Column heights after the last recompute.
    #[must_use]
    pub fn column_heights(&self) -> &[f32] {
        self.columns.heights()
    }

    /// Current column count.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Current item count.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.heights.len()
    }

    /// Recorded height of `index`.
    #[must_use]
    pub fn item_height(&self, index: usize) -> Option<f32> {
        self.heights.get(index).copied()
    }
}

impl LayoutTarget for LayoutEngine {
    fn column_count(&self) -> usize {
        self.column_count
    }

    fn set_column_count(&mut self, column_count: usize) -> Result<()> {
        Self::set_column_count(self, column_count)
    }

    fn set_item_count(&mut self, item_count: usize) {
        Self::set_item_count(self, item_count);
    }

    fn set_item_height(&mut self, index: usize, height: f32) -> Result<()> {
        Self::set_item_height(self, index, height)
    }

    fn recompute_from(&mut self, start: usize) -> Range<usize> {
        Self::recompute_from(self, start)
    }
}

fn sanitize_height(index: usize, height: f32) -> f32 {
    if height.is_finite() && height >= 0.0 {
        height
    } else {
        tracing::debug!(index, height = %height, "clamping malformed height to 0");
        0.0
    }
}
