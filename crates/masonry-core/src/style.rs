//! CSS rendering of placements.
//!
//! Purely presentational; nothing in the engine reads these values back.

use serde::{Deserialize, Serialize};

use crate::config::Transition;
use crate::placement::{LayoutState, Placement};

/// Absolute-positioned style for a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStyle {
    /// Width as a percentage of the container
    pub width_percent: f32,
    /// Horizontal translation as a percentage of the item width
    pub translate_x_percent: f32,
    /// Vertical translation in pixels
    pub translate_y_pixels: f32,
    /// Stacking order; earlier items sit above later ones
    pub z_index: usize,
    /// Transition shorthand
    pub transition: String,
}

impl ItemStyle {
    /// Style of item `index` out of `item_count`.
    #[must_use]
    pub fn new(
        placement: &Placement,
        index: usize,
        item_count: usize,
        transition: &Transition,
    ) -> Self {
        Self {
            width_percent: placement.width_percent,
            translate_x_percent: placement.offset_x_percent,
            translate_y_pixels: placement.offset_y_pixels,
            z_index: item_count.saturating_sub(index),
            transition: transition.to_css(),
        }
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn transform(&self) -> String {
        format!(
            "translate({}%, {}px)",
            self.translate_x_percent, self.translate_y_pixels
        )
    }

    /// Inline CSS declaration block.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "position: absolute; top: 0; left: 0; z-index: {}; width: {}%; transform: {}; transition: {};",
            self.z_index,
            self.width_percent,
            self.transform(),
            self.transition
        )
    }
}

/// Style of the relatively positioned container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerStyle {
    /// Required height in pixels
    pub height: f32,
}

impl ContainerStyle {
    /// Container style for a layout.
    #[must_use]
    pub fn new(state: &LayoutState) -> Self {
        Self {
            height: state.tallest_column_height,
        }
    }

    /// Inline CSS declaration block.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("position: relative; height: {}px;", self.height)
    }
}

/// Styles for every placed item, in presentation order.
#[must_use]
pub fn item_styles(state: &LayoutState, transition: &Transition) -> Vec<ItemStyle> {
    let count = state.len();
    state
        .placements
        .iter()
        .enumerate()
        .map(|(index, placement)| ItemStyle::new(placement, index, count, transition))
        .collect()
}
