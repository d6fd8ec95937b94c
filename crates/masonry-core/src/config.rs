//! Host-facing configuration.
//!
//! Only `column_count` affects layout. The transition settings are passed
//! through to the presentation layer, and the breakpoints are the pure
//! width-to-column mapping a host feeds into the resize path.

use serde::{Deserialize, Serialize};

use crate::error::{MasonryError, Result};

/// Default trailing delay of the resize path.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 200;

/// CSS transition applied to every item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transition {
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// CSS timing function
    pub timing_function: String,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_ms: 200,
            timing_function: "ease-in-out".to_string(),
        }
    }
}

impl Transition {
    /// Create a transition.
    #[must_use]
    pub fn new(duration_ms: u32, timing_function: impl Into<String>) -> Self {
        Self {
            duration_ms,
            timing_function: timing_function.into(),
        }
    }

    /// CSS `transition` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("all {}ms {}", self.duration_ms, self.timing_function)
    }
}

/// One responsive rule: widths strictly above `min_width` get `columns`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Exclusive lower bound in pixels
    pub min_width: f32,
    /// Column count above the bound
    pub columns: usize,
}

impl Breakpoint {
    /// Create a breakpoint.
    #[must_use]
    pub const fn new(min_width: f32, columns: usize) -> Self {
        Self { min_width, columns }
    }
}

/// Width to column-count mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnBreakpoints {
    /// Rules, checked widest first
    pub rules: Vec<Breakpoint>,
    /// Columns when no rule matches
    pub fallback: usize,
}

impl Default for ColumnBreakpoints {
    fn default() -> Self {
        Self {
            rules: vec![
                Breakpoint::new(1080.0, 5),
                Breakpoint::new(960.0, 4),
                Breakpoint::new(640.0, 3),
            ],
            fallback: 2,
        }
    }
}

impl ColumnBreakpoints {
    /// Create breakpoints from rules in any order.
    #[must_use]
    pub fn new(rules: impl IntoIterator<Item = Breakpoint>, fallback: usize) -> Self {
        let mut rules: Vec<Breakpoint> = rules.into_iter().collect();
        rules.sort_by(|a, b| b.min_width.total_cmp(&a.min_width));
        Self { rules, fallback }
    }

    /// Column count for a viewport `width`.
    #[must_use]
    pub fn columns_for_width(&self, width: f32) -> usize {
        self.rules
            .iter()
            .filter(|rule| width > rule.min_width)
            .max_by(|a, b| a.min_width.total_cmp(&b.min_width))
            .map_or(self.fallback, |rule| rule.columns)
    }

    fn validate(&self) -> Result<()> {
        if self.fallback == 0 {
            return Err(MasonryError::Config(
                "breakpoint fallback must have at least 1 column".to_string(),
            ));
        }
        if let Some(rule) = self.rules.iter().find(|rule| rule.columns == 0) {
            return Err(MasonryError::Config(format!(
                "breakpoint above {}px must have at least 1 column",
                rule.min_width
            )));
        }
        Ok(())
    }
}

/// Masonry configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasonryConfig {
    /// Number of columns; changing it forces a full relayout
    pub column_count: usize,
    /// Presentational transition
    pub transition: Transition,
    /// Trailing debounce of the resize path in milliseconds
    pub resize_debounce_ms: u64,
    /// Responsive column mapping
    pub breakpoints: ColumnBreakpoints,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            column_count: 1,
            transition: Transition::default(),
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            breakpoints: ColumnBreakpoints::default(),
        }
    }
}

impl MasonryConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the column count.
    #[must_use]
    pub const fn with_column_count(mut self, column_count: usize) -> Self {
        self.column_count = column_count;
        self
    }

    /// Set the transition.
    #[must_use]
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Set the resize debounce delay.
    #[must_use]
    pub const fn with_resize_debounce_ms(mut self, ms: u64) -> Self {
        self.resize_debounce_ms = ms;
        self
    }

    /// Set the breakpoints.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: ColumnBreakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Check the configuration for values the engine would reject.
    pub fn validate(&self) -> Result<()> {
        if self.column_count == 0 {
            return Err(MasonryError::InvalidColumnCount(0));
        }
        if self.transition.timing_function.trim().is_empty() {
            return Err(MasonryError::Config(
                "transition timing function must not be empty".to_string(),
            ));
        }
        self.breakpoints.validate()
    }
}
