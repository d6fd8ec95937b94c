//! Running column heights.

use serde::{Deserialize, Serialize};

/// Accumulated height of each column during a placement pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnState {
    heights: Vec<f32>,
}

impl ColumnState {
    /// Create `count` empty columns.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            heights: vec![0.0; count],
        }
    }

    /// Reset to `count` empty columns, reusing the allocation.
    pub fn reset(&mut self, count: usize) {
        self.heights.clear();
        self.heights.resize(count, 0.0);
    }

    /// Index and height of the shortest column.
    ///
    /// Ties go to the lowest index. Returns `None` when there are no columns.
    #[must_use]
    pub fn shortest(&self) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (index, &height) in self.heights.iter().enumerate() {
            match best {
                Some((_, min)) if height >= min => {}
                _ => best = Some((index, height)),
            }
        }
        best
    }

    /// Place an item of `height` in the shortest column.
    ///
    /// Returns the chosen column and the offset the item starts at.
    pub fn push(&mut self, height: f32) -> Option<(usize, f32)> {
        let (column, offset) = self.shortest()?;
        self.heights[column] = offset + height;
        Some((column, offset))
    }

    /// Height of the tallest column, or 0 without columns.
    #[must_use]
    pub fn tallest(&self) -> f32 {
        self.heights.iter().copied().fold(0.0, f32::max)
    }

    /// Per-column heights.
    #[must_use]
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Check if there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}
