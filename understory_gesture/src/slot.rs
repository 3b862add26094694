// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One recognizer per document.
//!
//! A document must bind its native pointer listeners exactly once, or every
//! gesture fires twice. [`GestureSlot`] is the host-owned guard for that: the
//! first [`get_or_create`](GestureSlot::get_or_create) builds the recognizer
//! and reports the bindings to install; later calls hand back the same
//! recognizer and ignore their configuration.
//!
//! ```
//! use understory_gesture::{GestureConfig, GestureSlot, PointerBindings};
//!
//! let mut slot = GestureSlot::<u32>::new();
//! let mut bound = Vec::new();
//!
//! slot.get_or_create(GestureConfig::default(), |b| bound.push(b));
//! slot.get_or_create(GestureConfig::default().with_mouse_events(false), |b| bound.push(b));
//!
//! assert_eq!(bound, [PointerBindings::TOUCH | PointerBindings::MOUSE]);
//! assert!(slot.get().unwrap().config().allow_mouse_events);
//! ```

use crate::config::{GestureConfig, PointerBindings};
use crate::recognizer::GestureRecognizer;

/// Holder for a document's single [`GestureRecognizer`].
#[derive(Debug)]
pub struct GestureSlot<K> {
    recognizer: Option<GestureRecognizer<K>>,
}

impl<K> Default for GestureSlot<K> {
    fn default() -> Self {
        Self { recognizer: None }
    }
}

impl<K: Clone> GestureSlot<K> {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recognizer, creating it on first use.
    ///
    /// `bind` runs only when the recognizer is created, with the event
    /// families the host has to subscribe to. On later calls `config` is
    /// ignored.
    pub fn get_or_create(
        &mut self,
        config: GestureConfig,
        bind: impl FnOnce(PointerBindings),
    ) -> &mut GestureRecognizer<K> {
        let created = self.recognizer.is_none();
        let recognizer = self
            .recognizer
            .get_or_insert_with(|| GestureRecognizer::new(config));
        if created {
            log::debug!("gesture recognizer created, binding {:?}", recognizer.bindings());
            bind(recognizer.bindings());
        } else {
            log::debug!("gesture recognizer already exists, configuration ignored");
        }
        recognizer
    }

    /// The recognizer, if it has been created.
    pub fn get(&self) -> Option<&GestureRecognizer<K>> {
        self.recognizer.as_ref()
    }

    /// The recognizer, if it has been created.
    pub fn get_mut(&mut self) -> Option<&mut GestureRecognizer<K>> {
        self.recognizer.as_mut()
    }

    /// Returns `true` once [`get_or_create`](Self::get_or_create) has run.
    pub fn is_created(&self) -> bool {
        self.recognizer.is_some()
    }
}
