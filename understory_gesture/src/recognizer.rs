// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture recognizer: pointer lifecycle, classification and dispatch.
//!
//! ## Usage
//!
//! 1) Register listeners with [`GestureRecognizer::on`].
//! 2) Feed every native pointer event through [`GestureRecognizer::handle`]
//!    and honor the returned [`PointerResponse`].
//! 3) Whenever [`GestureRecognizer::tap_deadline`] is `Some`, arrange for
//!    [`GestureRecognizer::resolve_taps`] to run at that time.
//!
//! Motion gestures (swipes, pinch, pull) fire on pointer up, in the order
//! they were recognized. Taps and double taps fire from `resolve_taps`. A
//! session that recognized a motion gesture never produces a tap.

use core::slice;

use crate::config::{GestureConfig, PointerBindings};
use crate::gesture::Gesture;
use crate::pointer::{PointerEvent, PointerKind, PointerPhase, PointerResponse};
use crate::registry::{GestureEvent, HandlerId, Occurrence, Registry};
use crate::selector::ElementTree;
use crate::session::{TouchSession, is_near_horizontal};
use crate::tap::{TapRecord, TapTracker};

/// Turns a stream of pointer events into named gestures.
///
/// Generic over the host's element key `K`.
#[derive(Debug)]
pub struct GestureRecognizer<K> {
    config: GestureConfig,
    session: TouchSession,
    taps: TapTracker<K>,
    registry: Registry<K>,
}

impl<K: Clone> GestureRecognizer<K> {
    /// Create a recognizer with `config`.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: TouchSession::default(),
            taps: TapTracker::new(),
            registry: Registry::new(),
        }
    }

    /// The configuration this recognizer was built with.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Event families the host must bind.
    pub fn bindings(&self) -> PointerBindings {
        self.config.bindings()
    }

    /// The current (or most recently finished) session.
    pub fn session(&self) -> &TouchSession {
        &self.session
    }

    /// Tap candidates awaiting resolution.
    pub fn pending_taps(&self) -> &[TapRecord<K>] {
        self.taps.records()
    }

    /// When [`resolve_taps`](Self::resolve_taps) should next be called.
    pub fn tap_deadline(&self) -> Option<u64> {
        self.taps.deadline()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.len()
    }

    /// Registers `handler` for gesture `name` on elements matching `selector`.
    ///
    /// See [`Gesture::from_name`] for accepted names. Unknown names and
    /// unsupported selectors register successfully but never fire.
    pub fn on(
        &mut self,
        name: &str,
        selector: &str,
        handler: impl FnMut(&GestureEvent<'_, K>) + 'static,
    ) -> HandlerId {
        self.registry.on(name, selector, handler)
    }

    /// Removes a handler registered under `name`. Returns `false` if it was not registered.
    pub fn off(&mut self, name: &str, id: HandlerId) -> bool {
        self.registry.off(name, id)
    }

    /// Routes `event` by its phase.
    pub fn handle<T>(&mut self, tree: &T, event: &PointerEvent<'_, K>) -> PointerResponse
    where
        T: ElementTree<K> + ?Sized,
    {
        match event.phase {
            PointerPhase::Down => self.pointer_down(event),
            PointerPhase::Move => self.pointer_move(tree, event),
            PointerPhase::Up => self.pointer_up(tree, event),
            PointerPhase::Cancel => {
                self.cancel();
                PointerResponse::default()
            }
        }
    }

    /// Starts a new session, discarding the previous one.
    ///
    /// Pending tap candidates survive so that a second tap can still pair up
    /// with the first.
    pub fn pointer_down(&mut self, event: &PointerEvent<'_, K>) -> PointerResponse {
        if !self.accepts(event) {
            return PointerResponse::default();
        }
        self.session.begin(event);
        log::debug!(
            "session start at {}ms, {} touch point(s)",
            event.timestamp,
            event.touch_count()
        );
        PointerResponse::default()
    }

    /// Updates the live session.
    pub fn pointer_move<T>(&mut self, tree: &T, event: &PointerEvent<'_, K>) -> PointerResponse
    where
        T: ElementTree<K> + ?Sized,
    {
        if !self.accepts(event) || !self.session.is_active() {
            return PointerResponse::default();
        }

        if let Some((a, b)) = event.touch_pair() {
            let config = &self.config;
            if let Some(gesture) =
                self.session
                    .track_pair(a, b, config.pinch_threshold, config.pull_threshold)
            {
                log::debug!("recognized {gesture}");
            }
            return PointerResponse::default();
        }
        if self.session.is_multi_touch() {
            return PointerResponse::default();
        }

        let position = event.sample(self.session.active_touch());
        let step = self.session.track(position, self.config.swipe_threshold);
        log::trace!("move to ({}, {}), angle {:.1}", position.x, position.y, step.angle);
        if let Some(gesture) = step.recognized {
            log::debug!("recognized {gesture}");
        }

        let prevent_default = self.config.prevent_default_on_horizontal_swipe
            && self
                .session
                .last_direction()
                .is_some_and(|direction| direction.is_horizontal())
            && is_near_horizontal(step.angle)
            && self.registry.is_delegated(tree, &event.target);

        let occurrence = Occurrence {
            origin: event.target.clone(),
            position,
            timestamp: event.timestamp,
            scroll_y: event.scroll_y,
        };
        self.registry
            .dispatch(tree, Gesture::Move, self.session.gestures(), &occurrence);

        PointerResponse { prevent_default }
    }

    /// Ends the live session.
    ///
    /// Fires the recognized motion gestures, or records a tap candidate and
    /// restarts the tap deadline when there are none.
    pub fn pointer_up<T>(&mut self, tree: &T, event: &PointerEvent<'_, K>) -> PointerResponse
    where
        T: ElementTree<K> + ?Sized,
    {
        if !self.accepts(event) || !self.session.is_active() {
            return PointerResponse::default();
        }
        self.session.finish();

        let gestures = self.session.gestures();
        if gestures.is_empty() {
            let record = TapRecord {
                start: self.session.start_time(),
                end: event.timestamp,
                target: event.target.clone(),
                position: self.session.current(),
                scroll_y: event.scroll_y,
            };
            log::debug!(
                "tap candidate held {}ms, {} pending",
                record.duration(),
                self.taps.records().len() + 1
            );
            self.taps.push(record, self.config.tap_resolution_delay);
            return PointerResponse::default();
        }

        let occurrence = Occurrence {
            origin: event.target.clone(),
            position: self.session.current(),
            timestamp: event.timestamp,
            scroll_y: event.scroll_y,
        };
        for &gesture in gestures {
            let ran = self.registry.dispatch(tree, gesture, gestures, &occurrence);
            log::debug!("fired {gesture} to {ran} listener(s)");
        }
        PointerResponse::default()
    }

    /// Abandons the live session without firing or recording anything.
    pub fn cancel(&mut self) {
        if self.session.is_active() {
            log::debug!("session cancelled");
        }
        self.session.finish();
    }

    /// Resolves pending tap candidates once the tap deadline has passed.
    ///
    /// Returns the number of tap / double tap gestures fired; calls before
    /// the deadline do nothing and return 0.
    pub fn resolve_taps<T>(&mut self, tree: &T, now: u64) -> usize
    where
        T: ElementTree<K> + ?Sized,
    {
        let Some(resolved) = self.taps.resolve(now, &self.config) else {
            return 0;
        };
        for (gesture, record) in &resolved {
            let occurrence = Occurrence {
                origin: record.target.clone(),
                position: record.position,
                timestamp: now,
                scroll_y: record.scroll_y,
            };
            let ran = self
                .registry
                .dispatch(tree, *gesture, slice::from_ref(gesture), &occurrence);
            log::debug!("fired {gesture} to {ran} listener(s)");
        }
        resolved.len()
    }

    fn accepts(&self, event: &PointerEvent<'_, K>) -> bool {
        event.kind == PointerKind::Touch || self.config.allow_mouse_events
    }
}
