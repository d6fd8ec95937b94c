#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
//! Incremental masonry layout.
//!
//! Items with individually measured heights are distributed over N equal
//! width columns, each item going into the currently shortest column.
//!
//! # Engine
//!
//! [`LayoutEngine`] owns the measured heights and the resulting placements.
//! A recompute can start at any index: column heights for the untouched
//! prefix are replayed, and only the suffix is re-emitted.
//!
//! # Coordinator
//!
//! [`MeasurementCoordinator`] subscribes items to a host-provided
//! [`MeasurementObserver`], coalesces measurement batches into a single
//! recompute from the lowest changed index, and debounces resize events.
//! It drives the engine through the [`LayoutTarget`] trait.

mod columns;
mod coordinator;
mod debounce;
mod engine;
mod observer;

pub use columns::ColumnState;
pub use coordinator::{CoordinatorState, MeasurementCoordinator};
pub use debounce::Debouncer;
pub use engine::{LayoutEngine, LayoutTarget};
pub use observer::{ManualObserver, MeasurementEvent, MeasurementObserver};

pub use masonry_core::{
    item_styles, ColumnBreakpoints, ContainerStyle, ItemStyle, LayoutState, MasonryConfig,
    MasonryError, Placement, Result, Transition,
};
