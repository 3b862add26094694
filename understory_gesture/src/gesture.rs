// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture names and swipe directions.

use core::fmt;

use kurbo::Vec2;

/// A named gesture the recognizer can emit.
///
/// Listeners subscribe by name (see [`Gesture::from_name`]); the names match
/// the DOM-style event names hosts usually expose.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Raw single-touch movement, fired on every move sample.
    Move,
    /// A short press and release without motion.
    Tap,
    /// Two taps in quick succession.
    DoubleTap,
    /// Leftward swipe.
    SwipeLeft,
    /// Rightward swipe.
    SwipeRight,
    /// Upward swipe.
    SwipeUp,
    /// Downward swipe.
    SwipeDown,
    /// Two fingers moving together.
    Pinch,
    /// Two fingers moving apart.
    Pull,
}

impl Gesture {
    /// Every gesture, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Move,
        Self::Tap,
        Self::DoubleTap,
        Self::SwipeLeft,
        Self::SwipeRight,
        Self::SwipeUp,
        Self::SwipeDown,
        Self::Pinch,
        Self::Pull,
    ];

    /// The canonical event name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Move => "touchmove",
            Self::Tap => "tap",
            Self::DoubleTap => "doubletap",
            Self::SwipeLeft => "swipeleft",
            Self::SwipeRight => "swiperight",
            Self::SwipeUp => "swipeup",
            Self::SwipeDown => "swipedown",
            Self::Pinch => "pinch",
            Self::Pull => "pull",
        }
    }

    /// Looks up a gesture by event name.
    ///
    /// Accepts the canonical names as well as their `touch`-prefixed
    /// spelling (`"touchswipeup"`, `"touchtap"`, ...). Returns `None` for
    /// names the recognizer never emits.
    ///
    /// ```
    /// use understory_gesture::Gesture;
    ///
    /// assert_eq!(Gesture::from_name("swipeup"), Some(Gesture::SwipeUp));
    /// assert_eq!(Gesture::from_name("touchswipeup"), Some(Gesture::SwipeUp));
    /// assert_eq!(Gesture::from_name("touchmove"), Some(Gesture::Move));
    /// assert_eq!(Gesture::from_name("hover"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lookup = |name: &str| Self::ALL.into_iter().find(|g| g.name() == name);
        lookup(name).or_else(|| name.strip_prefix("touch").and_then(lookup))
    }

    /// Returns `true` for the two-finger gestures.
    #[must_use]
    pub const fn is_multi_touch(self) -> bool {
        matches!(self, Self::Pinch | Self::Pull)
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a swipe segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Toward smaller x.
    Left,
    /// Toward larger x.
    Right,
    /// Toward smaller y (page coordinates grow downward).
    Up,
    /// Toward larger y.
    Down,
}

impl SwipeDirection {
    /// Classifies a movement delta.
    ///
    /// The dominant axis wins; equal magnitudes resolve to the horizontal axis.
    #[must_use]
    pub fn from_delta(delta: Vec2) -> Self {
        if delta.x.abs() >= delta.y.abs() {
            if delta.x < 0.0 { Self::Left } else { Self::Right }
        } else if delta.y < 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    /// Returns `true` for [`Left`](Self::Left) and [`Right`](Self::Right).
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// The swipe gesture for this direction.
    #[must_use]
    pub const fn gesture(self) -> Gesture {
        match self {
            Self::Left => Gesture::SwipeLeft,
            Self::Right => Gesture::SwipeRight,
            Self::Up => Gesture::SwipeUp,
            Self::Down => Gesture::SwipeDown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for gesture in Gesture::ALL {
            assert_eq!(Gesture::from_name(gesture.name()), Some(gesture));
        }
    }

    #[test]
    fn touch_prefix_is_optional() {
        assert_eq!(Gesture::from_name("touchtap"), Some(Gesture::Tap));
        assert_eq!(Gesture::from_name("touchpinch"), Some(Gesture::Pinch));
        assert_eq!(Gesture::from_name("touch"), None);
        assert_eq!(Gesture::from_name(""), None);
        // Only one prefix is stripped.
        assert_eq!(Gesture::from_name("touchtouchtap"), None);
    }

    #[test]
    fn dominant_axis_picks_direction() {
        assert_eq!(
            SwipeDirection::from_delta(Vec2::new(-70.0, 10.0)),
            SwipeDirection::Left
        );
        assert_eq!(
            SwipeDirection::from_delta(Vec2::new(70.0, -10.0)),
            SwipeDirection::Right
        );
        assert_eq!(
            SwipeDirection::from_delta(Vec2::new(5.0, -60.0)),
            SwipeDirection::Up
        );
        assert_eq!(
            SwipeDirection::from_delta(Vec2::new(-5.0, 60.0)),
            SwipeDirection::Down
        );
    }

    #[test]
    fn ties_resolve_horizontally() {
        assert_eq!(
            SwipeDirection::from_delta(Vec2::new(-40.0, 40.0)),
            SwipeDirection::Left
        );
        assert_eq!(
            SwipeDirection::from_delta(Vec2::new(40.0, -40.0)),
            SwipeDirection::Right
        );
    }

    #[test]
    fn gesture_kinds() {
        assert!(Gesture::Pull.is_multi_touch());
        assert!(!Gesture::Move.is_multi_touch());
        assert_eq!(SwipeDirection::Up.gesture(), Gesture::SwipeUp);
        assert!(SwipeDirection::Right.is_horizontal());
        assert!(!SwipeDirection::Down.is_horizontal());
    }
}
