// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred tap / double tap resolution.
//!
//! A release without motion gestures is only a tap *candidate*: whether it is
//! a tap, half of a double tap, or a long press is decided once no further
//! candidate has arrived for [`tap_resolution_delay`] milliseconds.
//!
//! The tracker keeps a single deadline. Each new candidate pushes it out
//! again, so at most one resolution is ever pending, and candidates from
//! separate sessions accumulate until it elapses.
//!
//! ## Resolution rules
//!
//! 1. If the latest candidate was held longer than [`tap_hold_threshold`],
//!    it is a long press and every pending candidate is discarded.
//! 2. Earlier candidates held that long are dropped. If exactly two remain
//!    and their gap (end of the first to start of the second) is at most
//!    [`double_tap_max_gap`], they form a double tap.
//! 3. Otherwise each remaining candidate lasting at least
//!    [`tap_min_duration`] is a tap.
//!
//! The pending list is empty after every resolution.
//!
//! [`tap_resolution_delay`]: crate::GestureConfig::tap_resolution_delay
//! [`tap_hold_threshold`]: crate::GestureConfig::tap_hold_threshold
//! [`double_tap_max_gap`]: crate::GestureConfig::double_tap_max_gap
//! [`tap_min_duration`]: crate::GestureConfig::tap_min_duration

use core::mem;

use kurbo::Point;
use smallvec::SmallVec;

use crate::config::GestureConfig;
use crate::gesture::Gesture;

/// One released press that recognized no motion gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct TapRecord<K> {
    /// Pointer down time.
    pub start: u64,
    /// Pointer up time.
    pub end: u64,
    /// Element the release was delivered to.
    pub target: K,
    /// Last known pointer position.
    pub position: Point,
    /// Vertical scroll offset at release.
    pub scroll_y: f64,
}

impl<K> TapRecord<K> {
    /// How long the press was held.
    pub fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}

/// Gestures produced by one resolution, each with the record it fires for.
pub type Resolved<K> = SmallVec<[(Gesture, TapRecord<K>); 2]>;

/// Pending tap candidates and the deadline at which they are resolved.
#[derive(Clone, Debug)]
pub struct TapTracker<K> {
    records: SmallVec<[TapRecord<K>; 2]>,
    deadline: Option<u64>,
}

impl<K> Default for TapTracker<K> {
    fn default() -> Self {
        Self {
            records: SmallVec::new(),
            deadline: None,
        }
    }
}

impl<K: Clone> TapTracker<K> {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates awaiting resolution, oldest first.
    pub fn records(&self) -> &[TapRecord<K>] {
        &self.records
    }

    /// Time at which [`resolve`](Self::resolve) will act, if anything is pending.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Adds a candidate and restarts the deadline `delay` ms after its release.
    pub fn push(&mut self, record: TapRecord<K>, delay: u64) {
        self.deadline = Some(record.end.saturating_add(delay));
        self.records.push(record);
    }

    /// Resolves pending candidates if the deadline has passed.
    ///
    /// Returns `None` when nothing is due at `now`; otherwise the gestures to
    /// fire, which may be empty (long press, presses too short).
    pub fn resolve(&mut self, now: u64, config: &GestureConfig) -> Option<Resolved<K>> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        let mut records = mem::take(&mut self.records);
        let mut fired = Resolved::new();

        if records
            .last()
            .is_some_and(|r| r.duration() > config.tap_hold_threshold)
        {
            log::debug!("long press, discarding {} tap candidate(s)", records.len());
            return Some(fired);
        }
        records.retain(|r| r.duration() <= config.tap_hold_threshold);

        if let [first, second] = records.as_slice()
            && second.start.saturating_sub(first.end) <= config.double_tap_max_gap
        {
            fired.push((Gesture::DoubleTap, second.clone()));
            return Some(fired);
        }

        fired.extend(
            records
                .into_iter()
                .filter(|r| r.duration() >= config.tap_min_duration)
                .map(|r| (Gesture::Tap, r)),
        );
        Some(fired)
    }
}
