// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delegation selectors and the element tree they are matched against.
//!
//! Selectors are single atoms: `*`, a tag name, `.class`, or `#id`. Anything
//! else (combinators, attribute selectors, compound selectors) parses to
//! [`Selector::Unsupported`] and never matches.
//!
//! Matching walks from the event target toward the root, testing the same
//! atom on each element, and yields the first element that matches.
//!
//! ## Minimal example
//!
//! ```
//! use understory_gesture::{ElementTree, Selector};
//!
//! // 0: <body>, 1: <ul class="menu">, 2: <li>
//! struct Page;
//! impl ElementTree<u32> for Page {
//!     fn parent_of(&self, element: &u32) -> Option<u32> {
//!         element.checked_sub(1)
//!     }
//!     fn tag_name(&self, element: &u32) -> Option<&str> {
//!         Some(["body", "ul", "li"][*element as usize])
//!     }
//!     fn has_class(&self, element: &u32, class: &str) -> bool {
//!         *element == 1 && class == "menu"
//!     }
//! }
//!
//! assert_eq!(Selector::parse(".menu").find_match(&Page, &2), Some(1));
//! assert_eq!(Selector::parse("li").find_match(&Page, &2), Some(2));
//! assert_eq!(Selector::parse("#nav").find_match(&Page, &2), None);
//! assert_eq!(Selector::parse("ul > li").find_match(&Page, &2), None);
//! ```

use alloc::boxed::Box;
use core::fmt;

/// Host-side view of the element hierarchy.
///
/// Only [`parent_of`](Self::parent_of) is required. Elements that cannot
/// report a tag, id or class simply never match the corresponding atom.
pub trait ElementTree<K> {
    /// The parent of `element`, or `None` at the document root.
    fn parent_of(&self, element: &K) -> Option<K>;

    /// Lowercase or mixed-case tag name.
    fn tag_name(&self, element: &K) -> Option<&str> {
        let _ = element;
        None
    }

    /// The element's `id` attribute.
    fn element_id(&self, element: &K) -> Option<&str> {
        let _ = element;
        None
    }

    /// Returns `true` if `element` carries `class`.
    fn has_class(&self, element: &K, class: &str) -> bool {
        let _ = (element, class);
        false
    }
}

/// A single-atom delegation selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `*`: every element.
    Any,
    /// A tag name, compared ASCII case-insensitively.
    Tag(Box<str>),
    /// `.class`.
    Class(Box<str>),
    /// `#id`.
    Id(Box<str>),
    /// Anything else; kept verbatim for diagnostics.
    Unsupported(Box<str>),
}

impl Selector {
    /// Parses a selector string. Never fails; see [`Selector::Unsupported`].
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        if source == "*" {
            return Self::Any;
        }
        let (ctor, name): (fn(Box<str>) -> Self, &str) =
            if let Some(class) = source.strip_prefix('.') {
                (Self::Class, class)
            } else if let Some(id) = source.strip_prefix('#') {
                (Self::Id, id)
            } else {
                (Self::Tag, source)
            };
        if is_identifier(name) {
            ctor(name.into())
        } else {
            Self::Unsupported(source.into())
        }
    }

    /// Returns `false` for [`Selector::Unsupported`].
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }

    /// Tests this atom against a single element.
    pub fn matches<K, T>(&self, tree: &T, element: &K) -> bool
    where
        T: ElementTree<K> + ?Sized,
    {
        match self {
            Self::Any => true,
            Self::Tag(tag) => tree
                .tag_name(element)
                .is_some_and(|name| name.eq_ignore_ascii_case(tag)),
            Self::Class(class) => tree.has_class(element, class),
            Self::Id(id) => tree.element_id(element) == Some(&**id),
            Self::Unsupported(_) => false,
        }
    }

    /// Walks from `target` to the root and returns the first matching element.
    pub fn find_match<K, T>(&self, tree: &T, target: &K) -> Option<K>
    where
        K: Clone,
        T: ElementTree<K> + ?Sized,
    {
        if !self.is_supported() {
            return None;
        }
        let mut current = target.clone();
        loop {
            if self.matches(tree, &current) {
                return Some(current);
            }
            current = tree.parent_of(&current)?;
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Tag(tag) => f.write_str(tag),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Id(id) => write!(f, "#{id}"),
            Self::Unsupported(source) => f.write_str(source),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `html > body > div#slider.carousel.wide > img`
    struct Doc;

    impl ElementTree<usize> for Doc {
        fn parent_of(&self, element: &usize) -> Option<usize> {
            element.checked_sub(1)
        }
        fn tag_name(&self, element: &usize) -> Option<&str> {
            ["html", "body", "DIV", "img"].get(*element).copied()
        }
        fn element_id(&self, element: &usize) -> Option<&str> {
            (*element == 2).then_some("slider")
        }
        fn has_class(&self, element: &usize, class: &str) -> bool {
            *element == 2 && matches!(class, "carousel" | "wide")
        }
    }

    /// A tree whose elements expose nothing but structure.
    struct Bare;

    impl ElementTree<usize> for Bare {
        fn parent_of(&self, element: &usize) -> Option<usize> {
            element.checked_sub(1)
        }
    }

    #[test]
    fn parses_atoms() {
        assert_eq!(Selector::parse("*"), Selector::Any);
        assert_eq!(Selector::parse(" div "), Selector::Tag("div".into()));
        assert_eq!(Selector::parse(".tab-bar"), Selector::Class("tab-bar".into()));
        assert_eq!(Selector::parse("#main_nav"), Selector::Id("main_nav".into()));
    }

    #[test]
    fn complex_selectors_are_unsupported() {
        for source in ["", ".", "#", "div > img", "div.carousel", "a[href]", ".a .b"] {
            let selector = Selector::parse(source);
            assert!(!selector.is_supported(), "{source:?} should be unsupported");
            assert_eq!(selector.find_match(&Doc, &3), None);
        }
    }

    #[test]
    fn walks_ancestors_until_match() {
        assert_eq!(Selector::parse(".carousel").find_match(&Doc, &3), Some(2));
        assert_eq!(Selector::parse("#slider").find_match(&Doc, &3), Some(2));
        assert_eq!(Selector::parse("body").find_match(&Doc, &3), Some(1));
        assert_eq!(Selector::parse("img").find_match(&Doc, &3), Some(3));
        assert_eq!(Selector::parse("*").find_match(&Doc, &3), Some(3));
    }

    #[test]
    fn tag_match_ignores_ascii_case() {
        assert_eq!(Selector::parse("div").find_match(&Doc, &3), Some(2));
        assert_eq!(Selector::parse("IMG").find_match(&Doc, &3), Some(3));
    }

    #[test]
    fn no_match_above_target() {
        assert_eq!(Selector::parse(".carousel").find_match(&Doc, &1), None);
        assert_eq!(Selector::parse("section").find_match(&Doc, &3), None);
    }

    #[test]
    fn elements_without_capabilities_never_match() {
        assert_eq!(Selector::parse(".carousel").find_match(&Bare, &3), None);
        assert_eq!(Selector::parse("div").find_match(&Bare, &3), None);
        assert_eq!(Selector::parse("*").find_match(&Bare, &3), Some(3));
    }

    #[test]
    fn display_round_trips_source() {
        for source in ["*", "li", ".menu", "#nav", "ul li"] {
            assert_eq!(alloc::format!("{}", Selector::parse(source)), source);
        }
    }
}
