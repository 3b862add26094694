// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector-scoped gesture listeners.
//!
//! Registrations pair a gesture with a [`Selector`]. When a gesture fires on
//! an event target, each registration for that gesture looks for the nearest
//! element on the target's ancestor chain that its selector matches; if one
//! exists, the handler runs with that element as [`GestureEvent::target`].
//!
//! Registrations are visited newest first, so a handler registered later runs
//! before the ones it overrides.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::gesture::Gesture;
use crate::selector::{ElementTree, Selector};

/// Identifies one registration for [`Registry::off`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerId(u64);

/// The value handed to gesture handlers.
#[derive(Clone, Copy, Debug)]
pub struct GestureEvent<'a, K> {
    /// The gesture that fired.
    pub gesture: Gesture,
    /// The element the listener's selector matched.
    pub target: K,
    /// The element the pointer event was delivered to.
    pub origin: K,
    /// Gestures recognized in the session that produced this event.
    pub gestures: &'a [Gesture],
    /// Last known pointer position.
    pub position: Point,
    /// Time of the event that triggered dispatch.
    pub timestamp: u64,
    /// Vertical scroll offset at that time.
    pub scroll_y: f64,
}

/// A boxed gesture handler.
pub type Handler<K> = Box<dyn FnMut(&GestureEvent<'_, K>)>;

struct Registration<K> {
    name: String,
    gesture: Option<Gesture>,
    selector: Selector,
    id: HandlerId,
    handler: Handler<K>,
}

/// Where and when a gesture fired, minus the per-listener target.
#[derive(Clone, Debug)]
pub(crate) struct Occurrence<K> {
    pub(crate) origin: K,
    pub(crate) position: Point,
    pub(crate) timestamp: u64,
    pub(crate) scroll_y: f64,
}

/// Listener registrations.
pub struct Registry<K> {
    registrations: Vec<Registration<K>>,
    next_id: u64,
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self {
            registrations: Vec::new(),
            next_id: 1,
        }
    }
}

impl<K> fmt::Debug for Registry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for reg in &self.registrations {
            list.entry(&(reg.id, reg.gesture, &reg.selector));
        }
        list.finish()
    }
}

impl<K: Clone> Registry<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for the gesture called `name` on elements matching `selector`.
    ///
    /// Names the recognizer never emits are accepted; such handlers never run.
    pub fn on(
        &mut self,
        name: &str,
        selector: &str,
        handler: impl FnMut(&GestureEvent<'_, K>) + 'static,
    ) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        let gesture = Gesture::from_name(name);
        let selector = Selector::parse(selector);
        if gesture.is_none() {
            log::debug!("listener {id:?} registered for unknown gesture {name:?}");
        }
        if !selector.is_supported() {
            log::debug!("listener {id:?} uses unsupported selector {selector}");
        }
        self.registrations.push(Registration {
            name: name.to_string(),
            gesture,
            selector,
            id,
            handler: Box::new(handler),
        });
        id
    }

    /// Removes the registration `id` made under `name`.
    ///
    /// Aliases of a known gesture name are interchangeable; unknown names
    /// must match exactly. Returns `false` if no such registration exists.
    pub fn off(&mut self, name: &str, id: HandlerId) -> bool {
        let gesture = Gesture::from_name(name);
        let Some(index) = self.registrations.iter().position(|reg| {
            reg.id == id
                && match (reg.gesture, gesture) {
                    (Some(registered), Some(requested)) => registered == requested,
                    (None, None) => reg.name == name,
                    _ => false,
                }
        }) else {
            return false;
        };
        self.registrations.remove(index);
        true
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Returns `true` if any registered selector matches `target` or one of its ancestors.
    pub fn is_delegated<T>(&self, tree: &T, target: &K) -> bool
    where
        T: ElementTree<K> + ?Sized,
    {
        self.registrations
            .iter()
            .any(|reg| reg.selector.find_match(tree, target).is_some())
    }

    /// Runs every handler registered for `gesture` whose selector matches.
    ///
    /// Returns the number of handlers that ran.
    pub(crate) fn dispatch<T>(
        &mut self,
        tree: &T,
        gesture: Gesture,
        gestures: &[Gesture],
        occurrence: &Occurrence<K>,
    ) -> usize
    where
        T: ElementTree<K> + ?Sized,
    {
        let mut ran = 0;
        for reg in self.registrations.iter_mut().rev() {
            if reg.gesture != Some(gesture) {
                continue;
            }
            let Some(target) = reg.selector.find_match(tree, &occurrence.origin) else {
                continue;
            };
            (reg.handler)(&GestureEvent {
                gesture,
                target,
                origin: occurrence.origin.clone(),
                gestures,
                position: occurrence.position,
                timestamp: occurrence.timestamp,
                scroll_y: occurrence.scroll_y,
            });
            ran += 1;
        }
        ran
    }
}
