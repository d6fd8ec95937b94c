#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
//! Core types for the masonry layout engine.
//!
//! This crate provides the values exchanged between the engine and its host:
//! - Layout output: [`Placement`], [`LayoutState`]
//! - Errors: [`MasonryError`] and the index parsers used at the API boundary
//! - Configuration: [`MasonryConfig`], [`Transition`], [`ColumnBreakpoints`]
//! - Presentation: [`ItemStyle`], [`ContainerStyle`]

mod config;
mod error;
mod placement;
mod style;

pub use config::{
    Breakpoint, ColumnBreakpoints, MasonryConfig, Transition, DEFAULT_RESIZE_DEBOUNCE_MS,
};
pub use error::{index_from_f64, parse_index, MasonryError, Result};
pub use placement::{width_percent, LayoutState, Placement};
pub use style::{item_styles, ContainerStyle, ItemStyle};
