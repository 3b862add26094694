// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the gesture demos: a toy page and a scripted pointer driver.

use kurbo::Point;
use understory_gesture::{ElementTree, GestureRecognizer, PointerEvent, PointerPhase};

/// One element on a [`DemoPage`].
#[derive(Clone, Debug)]
pub struct Element {
    /// Tag name.
    pub tag: &'static str,
    /// `id` attribute.
    pub id: Option<&'static str>,
    /// Class list.
    pub classes: &'static [&'static str],
    /// Parent index; `None` for the root.
    pub parent: Option<usize>,
}

/// A flat list of elements addressed by index.
#[derive(Clone, Debug, Default)]
pub struct DemoPage {
    elements: Vec<Element>,
}

impl DemoPage {
    /// Appends an element and returns its index.
    pub fn push(
        &mut self,
        tag: &'static str,
        id: Option<&'static str>,
        classes: &'static [&'static str],
        parent: Option<usize>,
    ) -> usize {
        self.elements.push(Element {
            tag,
            id,
            classes,
            parent,
        });
        self.elements.len() - 1
    }

    /// A short description such as `div#slider.carousel`.
    pub fn describe(&self, element: usize) -> String {
        let Some(el) = self.elements.get(element) else {
            return format!("<unknown {element}>");
        };
        let mut out = String::from(el.tag);
        if let Some(id) = el.id {
            out.push('#');
            out.push_str(id);
        }
        for class in el.classes {
            out.push('.');
            out.push_str(class);
        }
        out
    }
}

impl ElementTree<usize> for DemoPage {
    fn parent_of(&self, element: &usize) -> Option<usize> {
        self.elements.get(*element)?.parent
    }

    fn tag_name(&self, element: &usize) -> Option<&str> {
        self.elements.get(*element).map(|el| el.tag)
    }

    fn element_id(&self, element: &usize) -> Option<&str> {
        self.elements.get(*element)?.id
    }

    fn has_class(&self, element: &usize, class: &str) -> bool {
        self.elements
            .get(*element)
            .is_some_and(|el| el.classes.contains(&class))
    }
}

/// One scripted pointer action.
#[derive(Clone, Debug)]
pub enum Step {
    /// Touch down with the given points.
    Down(Vec<Point>),
    /// Move the touches to the given points.
    Move(Vec<Point>),
    /// Lift all fingers; the page position is the last known one.
    Up,
    /// Let time pass without input.
    Wait,
}

/// Plays `(time, step)` pairs on `target`, running tap resolution whenever
/// its deadline falls before the next step. Returns the final time.
pub fn play(
    recognizer: &mut GestureRecognizer<usize>,
    page: &DemoPage,
    target: usize,
    script: &[(u64, Step)],
) -> u64 {
    let mut last = Point::ZERO;
    let mut now = 0;
    for (time, step) in script {
        flush_taps(recognizer, page, *time);
        now = *time;
        let response = match step {
            Step::Down(points) | Step::Move(points) => {
                let phase = if matches!(step, Step::Down(_)) {
                    PointerPhase::Down
                } else {
                    PointerPhase::Move
                };
                if let Some(first) = points.first() {
                    last = *first;
                }
                recognizer.handle(page, &PointerEvent::touch(phase, target, points, now))
            }
            Step::Up => recognizer.handle(
                page,
                &PointerEvent::touch(PointerPhase::Up, target, &[], now).with_page(last),
            ),
            Step::Wait => continue,
        };
        if response.prevent_default {
            log::info!("{now:>5}ms  native scroll suppressed");
        }
    }
    if let Some(deadline) = recognizer.tap_deadline() {
        flush_taps(recognizer, page, deadline);
        now = now.max(deadline);
    }
    now
}

fn flush_taps(recognizer: &mut GestureRecognizer<usize>, page: &DemoPage, until: u64) {
    if let Some(deadline) = recognizer.tap_deadline()
        && deadline <= until
    {
        recognizer.resolve_taps(page, deadline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use understory_gesture::{GestureConfig, Selector};

    fn page() -> (DemoPage, usize) {
        let mut page = DemoPage::default();
        let body = page.push("body", None, &[], None);
        let slider = page.push("div", Some("slider"), &["carousel"], Some(body));
        let img = page.push("img", None, &[], Some(slider));
        (page, img)
    }

    #[test]
    fn page_supports_all_selector_atoms() {
        let (page, img) = page();
        assert_eq!(Selector::parse(".carousel").find_match(&page, &img), Some(1));
        assert_eq!(Selector::parse("#slider").find_match(&page, &img), Some(1));
        assert_eq!(Selector::parse("body").find_match(&page, &img), Some(0));
        assert_eq!(page.describe(1), "div#slider.carousel");
    }

    #[test]
    fn play_resolves_trailing_taps() {
        let (page, img) = page();
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let taps = Rc::new(Cell::new(0));
        let sink = taps.clone();
        recognizer.on("tap", "img", move |_| sink.set(sink.get() + 1));

        let end = play(
            &mut recognizer,
            &page,
            img,
            &[
                (0, Step::Down(vec![Point::new(5.0, 5.0)])),
                (90, Step::Up),
            ],
        );
        assert_eq!(taps.get(), 1);
        assert_eq!(end, 390);
    }
}
