// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer configuration and host bindings.

bitflags::bitflags! {
    /// Native event families a host must subscribe to on behalf of a recognizer.
    ///
    /// Reported once, when a [`GestureSlot`](crate::GestureSlot) creates its
    /// recognizer, so that document-level listeners are bound exactly once.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerBindings: u8 {
        /// `touchstart` / `touchmove` / `touchend` / `touchcancel`.
        const TOUCH = 1 << 0;
        /// `mousedown` / `mousemove` / `mouseup`.
        const MOUSE = 1 << 1;
    }
}

/// Thresholds and switches for gesture recognition.
///
/// Fixed once handed to a [`GestureRecognizer`](crate::GestureRecognizer).
/// Distances are in page pixels, durations in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Ask the host to suppress native scrolling during near-horizontal swipes
    /// over delegated elements.
    pub prevent_default_on_horizontal_swipe: bool,
    /// Track mouse input in addition to touch input.
    pub allow_mouse_events: bool,
    /// Distance a pointer must travel along one axis to register a swipe segment.
    pub swipe_threshold: f64,
    /// Shortest press that still counts as a single tap.
    pub tap_min_duration: u64,
    /// Presses held longer than this are long presses and never tap.
    pub tap_hold_threshold: u64,
    /// Longest gap between the end of one tap and the start of the next for a double tap.
    pub double_tap_max_gap: u64,
    /// How long after a tap candidate the tap decision is made.
    pub tap_resolution_delay: u64,
    /// Change in finger distance needed to recognize a pinch.
    pub pinch_threshold: f64,
    /// Change in finger distance needed to recognize a pull.
    pub pull_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            prevent_default_on_horizontal_swipe: true,
            allow_mouse_events: true,
            swipe_threshold: 60.0,
            tap_min_duration: 60,
            tap_hold_threshold: 300,
            double_tap_max_gap: 300,
            tap_resolution_delay: 300,
            pinch_threshold: 150.0,
            pull_threshold: 150.0,
        }
    }
}

impl GestureConfig {
    /// Defaults with a single `threshold` driving both the swipe distance (px)
    /// and the minimum tap duration (ms).
    #[must_use]
    pub fn legacy(threshold: u32) -> Self {
        Self {
            swipe_threshold: f64::from(threshold),
            tap_min_duration: u64::from(threshold),
            ..Self::default()
        }
    }

    /// Sets [`swipe_threshold`](Self::swipe_threshold).
    #[must_use]
    pub fn with_swipe_threshold(mut self, px: f64) -> Self {
        self.swipe_threshold = px;
        self
    }

    /// Sets the tap timing thresholds.
    #[must_use]
    pub fn with_tap_timing(mut self, min_duration: u64, hold_threshold: u64) -> Self {
        self.tap_min_duration = min_duration;
        self.tap_hold_threshold = hold_threshold;
        self
    }

    /// Sets the double tap gap and, with it, the tap resolution delay.
    #[must_use]
    pub fn with_double_tap_gap(mut self, gap: u64) -> Self {
        self.double_tap_max_gap = gap;
        self.tap_resolution_delay = gap;
        self
    }

    /// Sets both two-finger thresholds.
    #[must_use]
    pub fn with_pinch_pull_threshold(mut self, px: f64) -> Self {
        self.pinch_threshold = px;
        self.pull_threshold = px;
        self
    }

    /// Sets [`prevent_default_on_horizontal_swipe`](Self::prevent_default_on_horizontal_swipe).
    #[must_use]
    pub fn with_prevent_default(mut self, enabled: bool) -> Self {
        self.prevent_default_on_horizontal_swipe = enabled;
        self
    }

    /// Sets [`allow_mouse_events`](Self::allow_mouse_events).
    #[must_use]
    pub fn with_mouse_events(mut self, enabled: bool) -> Self {
        self.allow_mouse_events = enabled;
        self
    }

    /// Event families a host has to bind for this configuration.
    #[must_use]
    pub fn bindings(&self) -> PointerBindings {
        if self.allow_mouse_events {
            PointerBindings::TOUCH | PointerBindings::MOUSE
        } else {
            PointerBindings::TOUCH
        }
    }
}
