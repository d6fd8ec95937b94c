//! Size observation seam.
//!
//! The host owns the actual measurement mechanism. The coordinator only asks
//! it to start or stop watching an item and receives `(index, height)`
//! events back through [`MeasurementCoordinator::push_measurement`].
//!
//! [`MeasurementCoordinator::push_measurement`]: crate::MeasurementCoordinator::push_measurement

use masonry_core::Result;
use serde::{Deserialize, Serialize};

/// A reported height for one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementEvent {
    /// Item index
    pub index: usize,
    /// Measured height in pixels
    pub height: f32,
}

impl MeasurementEvent {
    /// Create an event.
    #[must_use]
    pub const fn new(index: usize, height: f32) -> Self {
        Self { index, height }
    }
}

impl From<(usize, f32)> for MeasurementEvent {
    fn from((index, height): (usize, f32)) -> Self {
        Self::new(index, height)
    }
}

/// External size-observation mechanism.
pub trait MeasurementObserver {
    /// Opaque subscription handle returned by [`observe`](Self::observe).
    type Handle;

    /// Start watching the item at `index`.
    fn observe(&mut self, index: usize) -> Result<Self::Handle>;

    /// Stop watching a previously observed item.
    fn unobserve(&mut self, index: usize, handle: Self::Handle) -> Result<()>;
}

/// Observer for hosts that push every measurement themselves.
///
/// Subscriptions are tracked only by index.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualObserver;

impl MeasurementObserver for ManualObserver {
    type Handle = ();

    fn observe(&mut self, _index: usize) -> Result<()> {
        Ok(())
    }

    fn unobserve(&mut self, _index: usize, _handle: ()) -> Result<()> {
        Ok(())
    }
}
