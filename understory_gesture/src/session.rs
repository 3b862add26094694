// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-interaction touch state: swipe segments and two-finger distance.
//!
//! A [`TouchSession`] lives from pointer down to pointer up. Single-touch
//! input is split into swipe segments: whenever the pointer has moved at
//! least the swipe threshold along either axis since the last segment
//! baseline, a direction is classified and the baseline advances. Two-finger
//! input compares the current finger distance with the distance captured when
//! the second finger joined.

use kurbo::Point;
use smallvec::SmallVec;

use crate::gesture::{Gesture, SwipeDirection};
use crate::pointer::PointerEvent;

/// Result of feeding one single-touch sample into a session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct SwipeStep {
    /// Angle in degrees from the session origin toward the current sample,
    /// as `atan2(origin.y - current.y, origin.x - current.x)`.
    pub(crate) angle: f64,
    /// A swipe newly added to the session's gesture list.
    pub(crate) recognized: Option<Gesture>,
}

/// Live state of one pointer interaction.
#[derive(Clone, Debug, Default)]
pub struct TouchSession {
    active: bool,
    multi_touch: bool,
    origin: Point,
    previous: Point,
    current: Point,
    start_time: u64,
    scroll_y_at_start: f64,
    active_touch: usize,
    gestures: SmallVec<[Gesture; 4]>,
    last_direction: Option<SwipeDirection>,
    multi_touch_origin: f64,
}

impl TouchSession {
    /// Returns `true` between pointer down and pointer up.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` once a second finger has been seen in this session.
    pub fn is_multi_touch(&self) -> bool {
        self.multi_touch
    }

    /// First sample of the session, or the finger midpoint for sessions that
    /// start with two fingers.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Baseline of the current swipe segment.
    pub fn previous(&self) -> Point {
        self.previous
    }

    /// Most recent sample.
    pub fn current(&self) -> Point {
        self.current
    }

    /// Time the session began.
    pub fn start_time(&self) -> u64 {
        self.start_time
    }

    /// Vertical scroll offset captured at pointer down.
    pub fn scroll_y_at_start(&self) -> f64 {
        self.scroll_y_at_start
    }

    /// Index of the touch point tracked for single-touch gestures.
    pub fn active_touch(&self) -> usize {
        self.active_touch
    }

    /// Gestures recognized so far, in recognition order, without duplicates.
    pub fn gestures(&self) -> &[Gesture] {
        &self.gestures
    }

    /// Direction of the most recent swipe segment.
    pub fn last_direction(&self) -> Option<SwipeDirection> {
        self.last_direction
    }

    /// Finger distance captured when the second finger joined; 0 otherwise.
    pub fn multi_touch_origin(&self) -> f64 {
        self.multi_touch_origin
    }

    /// Starts a new session, discarding any previous state.
    pub(crate) fn begin<K>(&mut self, event: &PointerEvent<'_, K>) {
        *self = Self {
            active: true,
            start_time: event.timestamp,
            scroll_y_at_start: event.scroll_y,
            ..Self::default()
        };
        if let Some((a, b)) = event.touch_pair() {
            self.multi_touch = true;
            self.multi_touch_origin = a.distance(b);
            let center = a.midpoint(b);
            self.origin = center;
            self.previous = center;
            self.current = center;
        } else {
            self.active_touch = event.touch_count().saturating_sub(1);
            let first = event.sample(self.active_touch);
            self.origin = first;
            self.previous = first;
            self.current = first;
        }
    }

    /// Marks the session finished. The gesture list stays readable until the
    /// next [`begin`](Self::begin).
    pub(crate) fn finish(&mut self) {
        self.active = false;
    }

    /// Feeds one single-touch sample.
    pub(crate) fn track(&mut self, position: Point, threshold: f64) -> SwipeStep {
        self.current = position;
        let travel = self.previous - self.current;
        let angle = swipe_angle(self.origin, self.current);

        let mut recognized = None;
        if travel.x.abs() >= threshold || travel.y.abs() >= threshold {
            let direction = SwipeDirection::from_delta(self.current - self.previous);
            self.previous = self.current;
            if self.last_direction != Some(direction) {
                self.last_direction = Some(direction);
                let gesture = direction.gesture();
                if self.push(gesture) {
                    recognized = Some(gesture);
                }
            }
        }
        SwipeStep { angle, recognized }
    }

    /// Feeds one two-finger sample. Returns a newly recognized pinch or pull.
    ///
    /// The midpoint of the two fingers becomes the current position. If the
    /// session started with a single finger, the first two-finger sample only
    /// captures the reference distance.
    pub(crate) fn track_pair(
        &mut self,
        a: Point,
        b: Point,
        pinch_threshold: f64,
        pull_threshold: f64,
    ) -> Option<Gesture> {
        let distance = a.distance(b);
        self.current = a.midpoint(b);
        if !self.multi_touch {
            self.multi_touch = true;
            self.multi_touch_origin = distance;
            return None;
        }
        if self.gestures.iter().any(|g| g.is_multi_touch()) {
            return None;
        }
        let (gesture, threshold) = if distance < self.multi_touch_origin {
            (Gesture::Pinch, pinch_threshold)
        } else {
            (Gesture::Pull, pull_threshold)
        };
        if (self.multi_touch_origin - distance).abs() >= threshold && self.push(gesture) {
            Some(gesture)
        } else {
            None
        }
    }

    fn push(&mut self, gesture: Gesture) -> bool {
        if self.gestures.contains(&gesture) {
            false
        } else {
            self.gestures.push(gesture);
            true
        }
    }
}

/// Angle in degrees of the vector from `current` back to `origin`.
pub(crate) fn swipe_angle(origin: Point, current: Point) -> f64 {
    (origin - current).atan2().to_degrees()
}

/// Returns `true` if `angle` lies strictly within 45° of the horizontal axis.
pub(crate) fn is_near_horizontal(angle: f64) -> bool {
    let angle = angle.abs();
    (angle > 0.0 && angle < 45.0) || (angle > 135.0 && angle < 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PointerPhase;

    fn started_at(x: f64, y: f64) -> TouchSession {
        let mut session = TouchSession::default();
        let points = [Point::new(x, y)];
        session.begin(&PointerEvent::touch(PointerPhase::Down, (), &points, 0));
        session
    }

    #[test]
    fn begin_sets_all_baselines_to_first_sample() {
        let session = started_at(10.0, 20.0);
        assert!(session.is_active());
        assert!(!session.is_multi_touch());
        assert_eq!(session.origin(), Point::new(10.0, 20.0));
        assert_eq!(session.previous(), session.origin());
        assert_eq!(session.current(), session.origin());
        assert!(session.gestures().is_empty());
    }

    #[test]
    fn begin_tracks_last_touch_index() {
        let mut session = TouchSession::default();
        let ev = PointerEvent::mouse(PointerPhase::Down, (), Point::new(1.0, 1.0), 0);
        session.begin(&ev);
        assert_eq!(session.active_touch(), 0);
        assert_eq!(session.origin(), Point::new(1.0, 1.0));
    }

    #[test]
    fn begin_with_two_touches_records_distance() {
        let mut session = TouchSession::default();
        let points = [Point::new(0.0, 0.0), Point::new(30.0, 40.0)];
        session.begin(&PointerEvent::touch(PointerPhase::Down, (), &points, 5));
        assert!(session.is_multi_touch());
        assert_eq!(session.multi_touch_origin(), 50.0);
        assert_eq!(session.start_time(), 5);
        assert_eq!(session.origin(), Point::new(15.0, 20.0));
        assert_eq!(session.current(), Point::new(15.0, 20.0));
    }

    #[test]
    fn begin_discards_previous_session() {
        let mut session = started_at(0.0, 0.0);
        session.track(Point::new(100.0, 0.0), 60.0);
        assert_eq!(session.gestures(), &[Gesture::SwipeRight]);

        let points = [Point::new(5.0, 5.0)];
        session.begin(&PointerEvent::touch(PointerPhase::Down, (), &points, 99));
        assert!(session.gestures().is_empty());
        assert_eq!(session.last_direction(), None);
        assert_eq!(session.start_time(), 99);
    }

    #[test]
    fn below_threshold_moves_only_update_current() {
        let mut session = started_at(100.0, 100.0);
        let step = session.track(Point::new(130.0, 80.0), 60.0);
        assert_eq!(step.recognized, None);
        assert_eq!(session.current(), Point::new(130.0, 80.0));
        assert_eq!(session.previous(), Point::new(100.0, 100.0));
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut session = started_at(100.0, 100.0);
        let step = session.track(Point::new(100.0, 40.0), 60.0);
        assert_eq!(step.recognized, Some(Gesture::SwipeUp));
        assert_eq!(session.previous(), Point::new(100.0, 40.0));
    }

    #[test]
    fn same_direction_run_is_recognized_once() {
        let mut session = started_at(300.0, 100.0);
        assert_eq!(
            session.track(Point::new(230.0, 100.0), 60.0).recognized,
            Some(Gesture::SwipeLeft)
        );
        assert_eq!(session.track(Point::new(160.0, 100.0), 60.0).recognized, None);
        // The baseline advances even when the swipe is suppressed.
        assert_eq!(session.previous(), Point::new(160.0, 100.0));
        assert_eq!(
            session.track(Point::new(240.0, 100.0), 60.0).recognized,
            Some(Gesture::SwipeRight)
        );
        assert_eq!(
            session.gestures(),
            &[Gesture::SwipeLeft, Gesture::SwipeRight]
        );
    }

    #[test]
    fn gesture_list_holds_no_duplicates() {
        let mut session = started_at(300.0, 100.0);
        session.track(Point::new(230.0, 100.0), 60.0);
        session.track(Point::new(300.0, 100.0), 60.0);
        let step = session.track(Point::new(230.0, 100.0), 60.0);
        assert_eq!(step.recognized, None);
        assert_eq!(session.last_direction(), Some(SwipeDirection::Left));
        assert_eq!(
            session.gestures(),
            &[Gesture::SwipeLeft, Gesture::SwipeRight]
        );
    }

    #[test]
    fn angle_is_measured_from_origin() {
        let mut session = started_at(300.0, 100.0);
        session.track(Point::new(230.0, 100.0), 60.0);
        // Segment baseline is now (230, 100), but the angle still uses the origin.
        let step = session.track(Point::new(200.0, 70.0), 60.0);
        let from_origin = swipe_angle(Point::new(300.0, 100.0), Point::new(200.0, 70.0));
        assert!((step.angle - from_origin).abs() < 1e-9);
        assert!((step.angle - 16.699_244_233_993_6).abs() < 1e-6);
    }

    #[test]
    fn near_horizontal_bounds_are_exclusive() {
        assert!(is_near_horizontal(10.0));
        assert!(is_near_horizontal(-10.0));
        assert!(is_near_horizontal(170.0));
        assert!(is_near_horizontal(-170.0));
        assert!(!is_near_horizontal(0.0));
        assert!(!is_near_horizontal(45.0));
        assert!(!is_near_horizontal(90.0));
        assert!(!is_near_horizontal(135.0));
        assert!(!is_near_horizontal(180.0));
    }

    #[test]
    fn pinch_needs_full_threshold() {
        let mut session = TouchSession::default();
        let start = [Point::new(0.0, 0.0), Point::new(200.0, 0.0)];
        session.begin(&PointerEvent::touch(PointerPhase::Down, (), &start, 0));

        let pinch = |s: &mut TouchSession, gap: f64| {
            s.track_pair(Point::new(0.0, 0.0), Point::new(gap, 0.0), 150.0, 150.0)
        };
        assert_eq!(pinch(&mut session, 140.0), None);
        assert_eq!(pinch(&mut session, 110.0), None);
        assert_eq!(pinch(&mut session, 50.0), Some(Gesture::Pinch));
        assert_eq!(pinch(&mut session, 10.0), None);
        assert_eq!(session.gestures(), &[Gesture::Pinch]);
        assert_eq!(session.current(), Point::new(5.0, 0.0));
    }

    #[test]
    fn pinch_and_pull_are_exclusive() {
        let mut session = TouchSession::default();
        let start = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        session.begin(&PointerEvent::touch(PointerPhase::Down, (), &start, 0));

        let pull = session.track_pair(Point::new(0.0, 0.0), Point::new(300.0, 0.0), 150.0, 150.0);
        assert_eq!(pull, Some(Gesture::Pull));
        // Fingers close all the way; no pinch after a pull.
        let pinch = session.track_pair(Point::new(0.0, 0.0), Point::new(0.0, 0.0), 50.0, 50.0);
        assert_eq!(pinch, None);
        assert_eq!(session.gestures(), &[Gesture::Pull]);
    }

    #[test]
    fn second_finger_joining_captures_reference_distance() {
        let mut session = started_at(0.0, 0.0);
        let joined = session.track_pair(Point::new(0.0, 0.0), Point::new(400.0, 0.0), 150.0, 150.0);
        assert_eq!(joined, None);
        assert!(session.is_multi_touch());
        assert_eq!(session.multi_touch_origin(), 400.0);

        let pinch = session.track_pair(Point::new(0.0, 0.0), Point::new(200.0, 0.0), 150.0, 150.0);
        assert_eq!(pinch, Some(Gesture::Pinch));
    }
}
