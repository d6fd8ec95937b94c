//! Layout output types.

use serde::{Deserialize, Serialize};

/// Computed position of one item.
///
/// Width and horizontal offset are percentages so the host can position
/// items without knowing the container width. The horizontal offset is
/// relative to the item's own width, which makes it `column * 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Column the item was assigned to
    pub column: usize,
    /// Item width as a percentage of the container width
    pub width_percent: f32,
    /// Horizontal offset as a percentage of the item width
    pub offset_x_percent: f32,
    /// Vertical offset in pixels
    pub offset_y_pixels: f32,
}

impl Placement {
    /// Create a placement in `column` of `column_count` at `offset_y` pixels.
    #[must_use]
    pub fn new(column: usize, column_count: usize, offset_y: f32) -> Self {
        Self {
            column,
            width_percent: width_percent(column_count),
            offset_x_percent: column as f32 * 100.0,
            offset_y_pixels: offset_y,
        }
    }
}

/// Width of a single column as a percentage of the container.
#[must_use]
pub fn width_percent(column_count: usize) -> f32 {
    100.0 / column_count.max(1) as f32
}

/// Result of the last completed layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    /// One placement per item, in presentation order
    pub placements: Vec<Placement>,
    /// Height of the tallest column; the container's required height
    pub tallest_column_height: f32,
}

impl LayoutState {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Check if no item is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Get the placement of `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }
}
