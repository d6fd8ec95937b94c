//! Bridges measurement notifications and structural changes to the engine.
//!
//! Work arrives in three forms during a host tick: a new item count, a new
//! column count, and any number of measured heights. They are queued and
//! applied together by [`MeasurementCoordinator::flush`] in a fixed order:
//!
//! 1. Reconcile subscriptions with the item count
//! 2. Apply the column count
//! 3. Record heights of items that are still subscribed
//! 4. Run exactly one recompute, from 0 after a structural change, otherwise
//!    from the lowest measured index
//!
//! Observer failures are local to one subscription; they are logged and
//! never abort the tick.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;
use std::time::{Duration, Instant};

use masonry_core::{ColumnBreakpoints, MasonryConfig, MasonryError, Result};
use serde::{Deserialize, Serialize};

use crate::debounce::Debouncer;
use crate::engine::LayoutTarget;
use crate::observer::{MeasurementEvent, MeasurementObserver};

/// Pending work of a coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinatorState {
    /// Nothing queued
    Idle,
    /// Item or column count changed; the next flush recomputes from 0
    SubscriptionsDirty,
    /// Only measurements are queued
    BatchPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingItems {
    /// Smallest count requested this tick; indices at or above it are new items
    low_water: usize,
    /// Last count requested this tick
    count: usize,
}

/// Tracks observed items and turns notifications into recomputes.
pub struct MeasurementCoordinator<O: MeasurementObserver> {
    observer: O,
    subscriptions: BTreeMap<usize, O::Handle>,
    pending_items: Option<PendingItems>,
    pending_columns: Option<usize>,
    batch: Vec<MeasurementEvent>,
    resize: Debouncer<usize>,
    breakpoints: ColumnBreakpoints,
}

impl<O: MeasurementObserver> fmt::Debug for MeasurementCoordinator<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeasurementCoordinator")
            .field("subscriptions", &self.subscriptions.len())
            .field("pending_items", &self.pending_items)
            .field("pending_columns", &self.pending_columns)
            .field("batch", &self.batch.len())
            .field("resize_pending", &self.resize.is_pending())
            .finish_non_exhaustive()
    }
}

impl<O: MeasurementObserver> MeasurementCoordinator<O> {
    /// Create a coordinator with the default resize delay and breakpoints.
    pub fn new(observer: O) -> Self {
        Self::with_resize_delay(
            observer,
            Duration::from_millis(masonry_core::DEFAULT_RESIZE_DEBOUNCE_MS),
        )
    }

    /// Create a coordinator with a custom trailing resize delay.
    pub fn with_resize_delay(observer: O, delay: Duration) -> Self {
        Self {
            observer,
            subscriptions: BTreeMap::new(),
            pending_items: None,
            pending_columns: None,
            batch: Vec::new(),
            resize: Debouncer::new(delay),
            breakpoints: ColumnBreakpoints::default(),
        }
    }

    /// Create a coordinator from a configuration.
    pub fn from_config(observer: O, config: &MasonryConfig) -> Self {
        let mut coordinator =
            Self::with_resize_delay(observer, Duration::from_millis(config.resize_debounce_ms));
        coordinator.breakpoints = config.breakpoints.clone();
        coordinator
    }

    // =========================================================================
    // Queueing
    // =========================================================================

    /// Queue a new item count for the next flush.
    ///
    /// Queued measurements for indices that no longer exist are dropped.
    pub fn request_item_count(&mut self, count: usize) {
        self.pending_items = Some(match self.pending_items {
            Some(pending) => PendingItems {
                low_water: pending.low_water.min(count),
                count,
            },
            None => PendingItems {
                low_water: count,
                count,
            },
        });
        self.batch.retain(|event| event.index < count);
    }

    /// Queue a new column count for the next flush.
    pub fn request_column_count(&mut self, columns: usize) -> Result<()> {
        if columns == 0 {
            return Err(MasonryError::InvalidColumnCount(columns));
        }
        self.pending_columns = Some(columns);
        Ok(())
    }

    /// Queue one measurement for the next flush.
    pub fn push_measurement(&mut self, event: impl Into<MeasurementEvent>) {
        self.batch.push(event.into());
    }

    /// Current pending work.
    #[must_use]
    pub fn state(&self) -> CoordinatorState {
        if self.pending_items.is_some() || self.pending_columns.is_some() {
            CoordinatorState::SubscriptionsDirty
        } else if !self.batch.is_empty() {
            CoordinatorState::BatchPending
        } else {
            CoordinatorState::Idle
        }
    }

    // =========================================================================
    // Flushing
    // =========================================================================

    /// Apply all queued work and run at most one recompute.
    ///
    /// Returns the range of placements the engine re-emitted, or `None` when
    /// nothing was queued.
    pub fn flush<T: LayoutTarget + ?Sized>(&mut self, target: &mut T) -> Option<Range<usize>> {
        let mut structural = false;

        if let Some(pending) = self.pending_items.take() {
            if pending.low_water < pending.count {
                // Shrink first so re-created indices come back unmeasured.
                self.reconcile(pending.low_water);
                target.set_item_count(pending.low_water);
            }
            self.reconcile(pending.count);
            target.set_item_count(pending.count);
            structural = true;
        }

        if let Some(columns) = self.pending_columns.take() {
            match target.set_column_count(columns) {
                Ok(()) => structural = true,
                Err(err) => tracing::warn!(%err, "ignoring column count"),
            }
        }

        let mut min_index: Option<usize> = None;
        let batch_len = self.batch.len();
        for event in self.batch.drain(..) {
            if !self.subscriptions.contains_key(&event.index) {
                tracing::debug!(index = event.index, "dropping measurement for unobserved item");
                continue;
            }
            match target.set_item_height(event.index, event.height) {
                Ok(()) => {
                    min_index = Some(min_index.map_or(event.index, |m| m.min(event.index)));
                }
                Err(err) => tracing::warn!(%err, "dropping stale measurement"),
            }
        }

        let start = if structural { Some(0) } else { min_index };
        let start = start?;
        tracing::debug!(start, batch_len, structural, "flushing layout");
        Some(target.recompute_from(start))
    }

    /// Sync subscriptions with `0..count`.
    fn reconcile(&mut self, count: usize) {
        let removed = self.subscriptions.split_off(&count);
        let removed_len = removed.len();
        for (index, handle) in removed {
            if let Err(err) = self.observer.unobserve(index, handle) {
                tracing::warn!(%err, index, "unobserve failed");
            }
        }

        let mut added = 0usize;
        for index in 0..count {
            if let Entry::Vacant(slot) = self.subscriptions.entry(index) {
                match self.observer.observe(index) {
                    Ok(handle) => {
                        slot.insert(handle);
                        added += 1;
                    }
                    Err(err) => tracing::warn!(%err, index, "observe failed"),
                }
            }
        }

        tracing::debug!(count, added, removed = removed_len, "reconciled subscriptions");
    }

    // =========================================================================
    // Immediate entry points
    // =========================================================================

    /// Item count changed; always recomputes from 0.
    pub fn on_items_changed<T: LayoutTarget + ?Sized>(
        &mut self,
        target: &mut T,
        count: usize,
    ) -> Option<Range<usize>> {
        self.request_item_count(count);
        self.flush(target)
    }

    /// Column count changed; recomputes from 0.
    ///
    /// A zero count is rejected before anything is touched.
    pub fn on_column_count_changed<T: LayoutTarget + ?Sized>(
        &mut self,
        target: &mut T,
        columns: usize,
    ) -> Result<Option<Range<usize>>> {
        self.request_column_count(columns)?;
        Ok(self.flush(target))
    }

    /// A batch of measurements arrived; recomputes once from the lowest index.
    pub fn on_measurement_batch<T, I>(&mut self, target: &mut T, events: I) -> Option<Range<usize>>
    where
        T: LayoutTarget + ?Sized,
        I: IntoIterator,
        I::Item: Into<MeasurementEvent>,
    {
        for event in events {
            self.push_measurement(event);
        }
        self.flush(target)
    }

    // =========================================================================
    // Resize path
    // =========================================================================

    /// Raw resize notification with an already mapped column count.
    ///
    /// The first call applies immediately; later calls are debounced and
    /// applied by [`poll_resize`](Self::poll_resize).
    /// A count equal to the one already in use does not relayout.
    pub fn on_resize<T: LayoutTarget + ?Sized>(
        &mut self,
        target: &mut T,
        columns: usize,
        now: Instant,
    ) -> Result<Option<Range<usize>>> {
        if columns == 0 {
            return Err(MasonryError::InvalidColumnCount(columns));
        }
        match self.resize.call(columns, now) {
            Some(columns) => self.apply_resize(target, columns),
            None => {
                tracing::debug!(columns, "debouncing resize");
                Ok(None)
            }
        }
    }

    /// Raw resize notification carrying the viewport width.
    pub fn on_viewport_resize<T: LayoutTarget + ?Sized>(
        &mut self,
        target: &mut T,
        width: f32,
        now: Instant,
    ) -> Result<Option<Range<usize>>> {
        let columns = self.breakpoints.columns_for_width(width);
        self.on_resize(target, columns, now)
    }

    /// Apply a debounced resize whose delay has elapsed.
    pub fn poll_resize<T: LayoutTarget + ?Sized>(
        &mut self,
        target: &mut T,
        now: Instant,
    ) -> Option<Range<usize>> {
        let columns = self.resize.poll(now)?;
        match self.apply_resize(target, columns) {
            Ok(range) => range,
            Err(err) => {
                tracing::warn!(%err, "ignoring debounced resize");
                None
            }
        }
    }

    /// Relayout for a resize only when the column count actually moves.
    fn apply_resize<T: LayoutTarget + ?Sized>(
        &mut self,
        target: &mut T,
        columns: usize,
    ) -> Result<Option<Range<usize>>> {
        if columns == target.column_count() {
            tracing::debug!(columns, "resize keeps column count");
            return Ok(None);
        }
        self.on_column_count_changed(target, columns)
    }

    /// Deadline of the armed trailing resize, if any.
    #[must_use]
    pub fn resize_deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    // =========================================================================
    // Lifecycle and accessors
    // =========================================================================

    /// Unobserve every item and drop all queued work.
    pub fn shutdown(&mut self) {
        self.pending_items = None;
        self.pending_columns = None;
        self.batch.clear();
        self.resize.cancel();
        self.reconcile(0);
    }

    /// Check if `index` is currently observed.
    #[must_use]
    pub fn is_subscribed(&self, index: usize) -> bool {
        self.subscriptions.contains_key(&index)
    }

    /// Number of observed items.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Breakpoints used by [`on_viewport_resize`](Self::on_viewport_resize).
    #[must_use]
    pub fn breakpoints(&self) -> &ColumnBreakpoints {
        &self.breakpoints
    }

    /// The wrapped observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The wrapped observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LayoutEngine;
    use std::collections::BTreeSet;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Columns(usize),
        Items(usize),
        Height(usize, f32),
        Recompute(usize),
    }

    /// Target that records every call and forwards to a real engine.
    #[derive(Debug, Default)]
    struct RecordingTarget {
        engine: LayoutEngine,
        calls: Vec<Call>,
    }

    impl RecordingTarget {
        fn recomputes(&self) -> Vec<usize> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Recompute(start) => Some(*start),
                    _ => None,
                })
                .collect()
        }
    }

    impl LayoutTarget for RecordingTarget {
        fn column_count(&self) -> usize {
            self.engine.column_count()
        }

        fn set_column_count(&mut self, column_count: usize) -> Result<()> {
            self.calls.push(Call::Columns(column_count));
            self.engine.set_column_count(column_count)
        }

        fn set_item_count(&mut self, item_count: usize) {
            self.calls.push(Call::Items(item_count));
            self.engine.set_item_count(item_count);
        }

        fn set_item_height(&mut self, index: usize, height: f32) -> Result<()> {
            self.calls.push(Call::Height(index, height));
            self.engine.set_item_height(index, height)
        }

        fn recompute_from(&mut self, start: usize) -> Range<usize> {
            self.calls.push(Call::Recompute(start));
            self.engine.recompute_from(start)
        }
    }

    /// Observer that fails for selected indices.
    #[derive(Debug, Default)]
    struct FlakyObserver {
        observed: BTreeSet<usize>,
        fail_observe: BTreeSet<usize>,
        fail_unobserve: BTreeSet<usize>,
        next_handle: u32,
    }

    impl MeasurementObserver for FlakyObserver {
        type Handle = u32;

        fn observe(&mut self, index: usize) -> Result<u32> {
            if self.fail_observe.contains(&index) {
                return Err(MasonryError::Observer {
                    index,
                    reason: "node missing".to_string(),
                });
            }
            self.observed.insert(index);
            self.next_handle += 1;
            Ok(self.next_handle)
        }

        fn unobserve(&mut self, index: usize, _handle: u32) -> Result<()> {
            self.observed.remove(&index);
            if self.fail_unobserve.contains(&index) {
                return Err(MasonryError::Observer {
                    index,
                    reason: "already detached".to_string(),
                });
            }
            Ok(())
        }
    }

    fn ev(index: usize, height: f32) -> MeasurementEvent {
        MeasurementEvent::new(index, height)
    }

    fn setup(count: usize) -> (MeasurementCoordinator<FlakyObserver>, RecordingTarget) {
        let mut coordinator = MeasurementCoordinator::new(FlakyObserver::default());
        let mut target = RecordingTarget::default();
        coordinator.on_items_changed(&mut target, count);
        target.calls.clear();
        (coordinator, target)
    }

    #[test]
    fn test_items_changed_subscribes_and_recomputes_from_zero() {
        let mut coordinator = MeasurementCoordinator::new(FlakyObserver::default());
        let mut target = RecordingTarget::default();
        let range = coordinator.on_items_changed(&mut target, 3);
        assert_eq!(range, Some(0..3));
        assert_eq!(coordinator.subscription_count(), 3);
        assert_eq!(coordinator.observer().observed, BTreeSet::from([0, 1, 2]));
        assert_eq!(target.calls, vec![Call::Items(3), Call::Recompute(0)]);
    }

    #[test]
    fn test_items_changed_unsubscribes_removed() {
        let (mut coordinator, mut target) = setup(5);
        coordinator.on_items_changed(&mut target, 3);
        assert!(coordinator.is_subscribed(2));
        assert!(!coordinator.is_subscribed(3));
        assert!(!coordinator.is_subscribed(4));
        assert_eq!(coordinator.observer().observed.len(), 3);
        assert_eq!(target.recomputes(), vec![0]);
    }

    #[test]
    fn test_same_item_count_still_recomputes() {
        let (mut coordinator, mut target) = setup(2);
        assert_eq!(coordinator.on_items_changed(&mut target, 2), Some(0..2));
        assert_eq!(target.recomputes(), vec![0]);
    }

    #[test]
    fn test_batch_coalesces_to_single_recompute_from_min() {
        let (mut coordinator, mut target) = setup(8);
        coordinator.on_measurement_batch(&mut target, [ev(4, 10.0), ev(1, 20.0), ev(7, 5.0)]);
        assert_eq!(target.recomputes(), vec![1]);
        assert_eq!(
            target.calls,
            vec![
                Call::Height(4, 10.0),
                Call::Height(1, 20.0),
                Call::Height(7, 5.0),
                Call::Recompute(1),
            ]
        );
    }

    #[test]
    fn test_empty_batch_does_nothing() {
        let (mut coordinator, mut target) = setup(3);
        let empty: [MeasurementEvent; 0] = [];
        assert_eq!(coordinator.on_measurement_batch(&mut target, empty), None);
        assert!(target.calls.is_empty());
    }

    #[test]
    fn test_measurement_for_unsubscribed_index_dropped() {
        let (mut coordinator, mut target) = setup(2);
        let range = coordinator.on_measurement_batch(&mut target, [ev(5, 10.0)]);
        assert_eq!(range, None);
        assert!(target.calls.is_empty());
    }

    #[test]
    fn test_column_count_changed() {
        let (mut coordinator, mut target) = setup(4);
        let range = coordinator.on_column_count_changed(&mut target, 3).unwrap();
        assert_eq!(range, Some(0..4));
        assert_eq!(target.calls, vec![Call::Columns(3), Call::Recompute(0)]);
    }

    #[test]
    fn test_column_count_zero_rejected_without_mutation() {
        let (mut coordinator, mut target) = setup(4);
        let err = coordinator
            .on_column_count_changed(&mut target, 0)
            .unwrap_err();
        assert_eq!(err, MasonryError::InvalidColumnCount(0));
        assert!(target.calls.is_empty());
        assert_eq!(coordinator.state(), CoordinatorState::Idle);
    }

    #[test]
    fn test_same_tick_reconcile_before_batch_single_recompute() {
        let (mut coordinator, mut target) = setup(2);
        coordinator.push_measurement(ev(3, 40.0));
        coordinator.request_item_count(4);
        coordinator.push_measurement(ev(1, 15.0));
        assert_eq!(coordinator.state(), CoordinatorState::SubscriptionsDirty);

        let range = coordinator.flush(&mut target);
        assert_eq!(range, Some(0..4));
        assert_eq!(
            target.calls,
            vec![
                Call::Items(4),
                Call::Height(3, 40.0),
                Call::Height(1, 15.0),
                Call::Recompute(0),
            ]
        );
        assert_eq!(coordinator.state(), CoordinatorState::Idle);
    }

    #[test]
    fn test_shrink_drops_queued_measurements_for_removed_items() {
        let (mut coordinator, mut target) = setup(5);
        coordinator.push_measurement(ev(4, 40.0));
        coordinator.request_item_count(3);
        coordinator.flush(&mut target);
        assert!(!target.calls.contains(&Call::Height(4, 40.0)));
    }

    #[test]
    fn test_shrink_then_regrow_in_one_tick_discards_old_heights() {
        let (mut coordinator, mut target) = setup(3);
        coordinator.on_measurement_batch(&mut target, [ev(0, 10.0), ev(1, 10.0), ev(2, 99.0)]);
        target.calls.clear();

        coordinator.request_item_count(2);
        coordinator.request_item_count(3);
        coordinator.flush(&mut target);

        assert_eq!(
            target.calls,
            vec![Call::Items(2), Call::Items(3), Call::Recompute(0)]
        );
        assert_eq!(target.engine.item_height(2), Some(0.0));
        assert_eq!(target.engine.tallest_column_height(), 20.0);
    }

    #[test]
    fn test_state_transitions() {
        let (mut coordinator, mut target) = setup(2);
        assert_eq!(coordinator.state(), CoordinatorState::Idle);
        coordinator.push_measurement(ev(0, 1.0));
        assert_eq!(coordinator.state(), CoordinatorState::BatchPending);
        coordinator.request_column_count(2).unwrap();
        assert_eq!(coordinator.state(), CoordinatorState::SubscriptionsDirty);
        coordinator.flush(&mut target);
        assert_eq!(coordinator.state(), CoordinatorState::Idle);
        assert_eq!(target.recomputes(), vec![0]);
    }

    #[test]
    fn test_observe_failure_is_local() {
        let mut observer = FlakyObserver::default();
        observer.fail_observe.insert(1);
        let mut coordinator = MeasurementCoordinator::new(observer);
        let mut target = RecordingTarget::default();

        assert_eq!(coordinator.on_items_changed(&mut target, 3), Some(0..3));
        assert!(coordinator.is_subscribed(0));
        assert!(!coordinator.is_subscribed(1));
        assert!(coordinator.is_subscribed(2));

        target.calls.clear();
        coordinator.on_measurement_batch(&mut target, [ev(1, 5.0), ev(2, 7.0)]);
        assert_eq!(target.calls, vec![Call::Height(2, 7.0), Call::Recompute(2)]);
    }

    #[test]
    fn test_failed_subscription_retried_on_next_reconcile() {
        let mut observer = FlakyObserver::default();
        observer.fail_observe.insert(1);
        let mut coordinator = MeasurementCoordinator::new(observer);
        let mut target = RecordingTarget::default();
        coordinator.on_items_changed(&mut target, 2);

        coordinator.observer_mut().fail_observe.clear();
        coordinator.on_items_changed(&mut target, 2);
        assert!(coordinator.is_subscribed(1));
    }

    #[test]
    fn test_unobserve_failure_does_not_abort() {
        let (mut coordinator, mut target) = setup(4);
        coordinator.observer_mut().fail_unobserve.insert(2);
        assert_eq!(coordinator.on_items_changed(&mut target, 1), Some(0..1));
        assert_eq!(coordinator.subscription_count(), 1);
        assert!(!coordinator.is_subscribed(3));
    }

    #[test]
    fn test_shutdown_unobserves_everything() {
        let (mut coordinator, _target) = setup(4);
        coordinator.push_measurement(ev(0, 1.0));
        coordinator.shutdown();
        assert_eq!(coordinator.subscription_count(), 0);
        assert!(coordinator.observer().observed.is_empty());
        assert_eq!(coordinator.state(), CoordinatorState::Idle);
        // Idempotent
        coordinator.shutdown();
        assert_eq!(coordinator.subscription_count(), 0);
    }

    #[test]
    fn test_resize_leading_then_trailing() {
        let (mut coordinator, mut target) = setup(3);
        let t0 = Instant::now();

        let first = coordinator.on_resize(&mut target, 3, t0).unwrap();
        assert_eq!(first, Some(0..3));
        assert_eq!(target.calls, vec![Call::Columns(3), Call::Recompute(0)]);
        target.calls.clear();

        assert_eq!(coordinator.on_resize(&mut target, 4, t0).unwrap(), None);
        assert_eq!(coordinator.on_resize(&mut target, 5, t0).unwrap(), None);
        assert!(target.calls.is_empty());
        assert_eq!(
            coordinator.resize_deadline(),
            Some(t0 + Duration::from_millis(200))
        );

        assert_eq!(coordinator.poll_resize(&mut target, t0), None);
        let later = t0 + Duration::from_millis(200);
        assert_eq!(coordinator.poll_resize(&mut target, later), Some(0..3));
        assert_eq!(target.calls, vec![Call::Columns(5), Call::Recompute(0)]);
    }

    #[test]
    fn test_resize_to_same_column_count_skips_relayout() {
        let (mut coordinator, mut target) = setup(4);
        let t0 = Instant::now();

        coordinator
            .on_viewport_resize(&mut target, 1200.0, t0)
            .unwrap();
        assert_eq!(target.engine.column_count(), 5);
        target.calls.clear();

        // Still five columns after the nudge.
        coordinator
            .on_viewport_resize(&mut target, 1210.0, t0)
            .unwrap();
        let fired = coordinator.poll_resize(&mut target, t0 + Duration::from_millis(200));
        assert_eq!(fired, None);
        assert!(target.calls.is_empty());
        assert!(coordinator.resize_deadline().is_none());
    }

    #[test]
    fn test_leading_resize_to_current_count_skips_relayout() {
        let (mut coordinator, mut target) = setup(2);
        let range = coordinator.on_resize(&mut target, 1, Instant::now()).unwrap();
        assert_eq!(range, None);
        assert!(target.calls.is_empty());
    }

    #[test]
    fn test_resize_rejects_zero_columns() {
        let (mut coordinator, mut target) = setup(1);
        assert!(coordinator
            .on_resize(&mut target, 0, Instant::now())
            .is_err());
        assert!(target.calls.is_empty());
    }

    #[test]
    fn test_viewport_resize_uses_breakpoints() {
        let config = MasonryConfig::new().with_resize_debounce_ms(50);
        let mut coordinator = MeasurementCoordinator::from_config(FlakyObserver::default(), &config);
        let mut target = RecordingTarget::default();
        coordinator.on_items_changed(&mut target, 2);
        target.calls.clear();

        let t0 = Instant::now();
        coordinator
            .on_viewport_resize(&mut target, 1200.0, t0)
            .unwrap();
        assert_eq!(target.calls[0], Call::Columns(5));

        coordinator.on_viewport_resize(&mut target, 700.0, t0).unwrap();
        let fired = coordinator.poll_resize(&mut target, t0 + Duration::from_millis(50));
        assert_eq!(fired, Some(0..2));
        assert_eq!(target.engine.column_count(), 3);
    }

    #[test]
    fn test_debug_output() {
        let (coordinator, _target) = setup(2);
        let debug = format!("{coordinator:?}");
        assert!(debug.contains("MeasurementCoordinator"));
        assert!(debug.contains("subscriptions: 2"));
    }
}
