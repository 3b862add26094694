// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input as delivered by the host.
//!
//! Hosts translate native touch and mouse events into [`PointerEvent`] values.
//! A touch event carries the list of active touch points; a mouse event
//! carries only its page position.

use kurbo::Point;

/// Lifecycle phase of a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// `touchstart` / `mousedown`.
    Down,
    /// `touchmove` / `mousemove`.
    Move,
    /// `touchend` / `mouseup`.
    Up,
    /// `touchcancel`.
    Cancel,
}

/// The kind of device that produced an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Touch screen input.
    Touch,
    /// Mouse input.
    Mouse,
}

/// One pointer event in page coordinates.
#[derive(Copy, Clone, Debug)]
pub struct PointerEvent<'a, K> {
    /// Lifecycle phase.
    pub phase: PointerPhase,
    /// Device kind.
    pub kind: PointerKind,
    /// Page position of the mouse, or of the touch that changed.
    pub page: Point,
    /// Active touch points, in native order. Ignored for mouse events.
    pub touches: &'a [Point],
    /// Element the host delivered the event to.
    pub target: K,
    /// Event time in milliseconds.
    pub timestamp: u64,
    /// Vertical page scroll offset at the time of the event.
    pub scroll_y: f64,
}

impl<'a, K> PointerEvent<'a, K> {
    /// A mouse event at `page`.
    pub fn mouse(phase: PointerPhase, target: K, page: Point, timestamp: u64) -> Self {
        Self {
            phase,
            kind: PointerKind::Mouse,
            page,
            touches: &[],
            target,
            timestamp,
            scroll_y: 0.0,
        }
    }

    /// A touch event with the given active touch points.
    ///
    /// The page position defaults to the first touch point; use
    /// [`with_page`](Self::with_page) when the touch list is empty, as it is
    /// for the final `touchend`.
    pub fn touch(phase: PointerPhase, target: K, touches: &'a [Point], timestamp: u64) -> Self {
        Self {
            phase,
            kind: PointerKind::Touch,
            page: touches.first().copied().unwrap_or(Point::ZERO),
            touches,
            target,
            timestamp,
            scroll_y: 0.0,
        }
    }

    /// Overrides the page position.
    #[must_use]
    pub fn with_page(mut self, page: Point) -> Self {
        self.page = page;
        self
    }

    /// Sets the vertical scroll offset.
    #[must_use]
    pub fn with_scroll_y(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    /// Number of touch points this event reports; always 0 for mouse events.
    pub fn touch_count(&self) -> usize {
        match self.kind {
            PointerKind::Touch => self.touches.len(),
            PointerKind::Mouse => 0,
        }
    }

    /// The position of touch `index`, falling back to [`page`](Self::page)
    /// for mouse events and for touch events that lack that point.
    pub fn sample(&self, index: usize) -> Point {
        match self.kind {
            PointerKind::Touch => self.touches.get(index).copied().unwrap_or(self.page),
            PointerKind::Mouse => self.page,
        }
    }

    /// The first two touch points, when at least two are present.
    pub fn touch_pair(&self) -> Option<(Point, Point)> {
        match (self.kind, self.touches) {
            (PointerKind::Touch, [a, b, ..]) => Some((*a, *b)),
            _ => None,
        }
    }
}

/// What the host should do with the native event after the recognizer saw it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PointerResponse {
    /// Suppress the browser's default action (native scrolling).
    pub prevent_default: bool,
}
