// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: touch gesture recognition with selector-scoped listeners.
//!
//! This crate turns raw pointer events (touch points and, optionally, mouse
//! positions) into discrete gestures:
//!
//! - `tap` and `doubletap`
//! - `swipeleft`, `swiperight`, `swipeup`, `swipedown`
//! - `pinch` and `pull` (two fingers moving together or apart)
//! - `touchmove`, a raw passthrough of single-touch movement
//!
//! Listeners subscribe per gesture with a delegation selector (`*`, a tag,
//! `.class` or `#id`). When a gesture fires, the selector is matched against
//! the event target and its ancestors through the host's [`ElementTree`].
//!
//! ## Model
//!
//! - One interaction, from pointer down to pointer up, is a [`TouchSession`].
//!   A new pointer down always starts over.
//! - Single-touch motion is split into swipe segments. Each time the pointer
//!   covers the swipe threshold along either axis, the segment's dominant
//!   direction is classified. A run in one direction yields one swipe;
//!   reversing yields another.
//! - Two-finger motion compares the finger distance with the distance when
//!   the second finger landed: shrinking is a pinch, growing is a pull. At
//!   most one of them is recognized per session.
//! - On pointer up, recognized motion gestures fire in order. A session
//!   without any becomes a tap candidate; candidates are resolved into `tap`,
//!   `doubletap` or nothing (long press) after a short delay, see [`tap`].
//!
//! The crate keeps no clock and no timers. Hosts pass event timestamps and
//! call [`GestureRecognizer::resolve_taps`] when
//! [`GestureRecognizer::tap_deadline`] elapses.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use understory_gesture::{
//!     ElementTree, GestureConfig, GestureRecognizer, PointerEvent, PointerPhase,
//! };
//!
//! // A page with a single element.
//! struct Page;
//! impl ElementTree<u32> for Page {
//!     fn parent_of(&self, _: &u32) -> Option<u32> {
//!         None
//!     }
//! }
//!
//! let mut recognizer = GestureRecognizer::new(GestureConfig::default());
//! let fired = Rc::new(RefCell::new(Vec::new()));
//! let sink = fired.clone();
//! recognizer.on("touchswipeup", "*", move |ev| sink.borrow_mut().push(ev.gesture.name()));
//!
//! let down = [Point::new(100.0, 100.0)];
//! let moved = [Point::new(100.0, 40.0)];
//! recognizer.handle(&Page, &PointerEvent::touch(PointerPhase::Down, 0, &down, 0));
//! recognizer.handle(&Page, &PointerEvent::touch(PointerPhase::Move, 0, &moved, 16));
//! recognizer.handle(
//!     &Page,
//!     &PointerEvent::touch(PointerPhase::Up, 0, &[], 40).with_page(moved[0]),
//! );
//!
//! assert_eq!(*fired.borrow(), ["swipeup"]);
//! // A swipe is never also a tap.
//! assert_eq!(recognizer.tap_deadline(), None);
//! ```
//!
//! ## One recognizer per document
//!
//! Binding native listeners twice would fire every gesture twice. Hosts that
//! want a create-once entry point keep a [`GestureSlot`], which builds the
//! recognizer on first use and reports the [`PointerBindings`] to install
//! exactly once.
//!
//! ## Logging
//!
//! Session starts, recognized gestures and tap decisions are reported through
//! the [`log`] facade at `debug` level; per-move samples at `trace`.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: use `libm` for float math in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod gesture;
pub mod pointer;
pub mod recognizer;
pub mod registry;
pub mod selector;
pub mod session;
pub mod slot;
pub mod tap;

pub use config::{GestureConfig, PointerBindings};
pub use gesture::{Gesture, SwipeDirection};
pub use pointer::{PointerEvent, PointerKind, PointerPhase, PointerResponse};
pub use recognizer::GestureRecognizer;
pub use registry::{GestureEvent, Handler, HandlerId, Registry};
pub use selector::{ElementTree, Selector};
pub use session::TouchSession;
pub use slot::GestureSlot;
