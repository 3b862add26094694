// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture trace.
//!
//! Replay a few scripted touch interactions over a tiny page and print the
//! gestures each one produces. Set `RUST_LOG=debug` to see the recognizer's
//! own decisions.
//!
//! Run:
//! - `cargo run -p understory_gesture_demos --example gesture_trace`

use std::cell::RefCell;
use std::rc::Rc;

use env_logger::{Builder, Env};
use kurbo::Point;
use understory_gesture::{Gesture, GestureConfig, GestureSlot, PointerBindings};
use understory_gesture_demos::{DemoPage, Step, play};

fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    // html > body > (div#slider.carousel > img, p)
    let mut page = DemoPage::default();
    let html = page.push("html", None, &[], None);
    let body = page.push("body", None, &[], Some(html));
    let slider = page.push("div", Some("slider"), &["carousel"], Some(body));
    let img = page.push("img", None, &[], Some(slider));
    let para = page.push("p", None, &[], Some(body));

    let mut slot = GestureSlot::new();
    let recognizer = slot.get_or_create(GestureConfig::default(), |bindings| {
        log::info!(
            "binding touch={} mouse={}",
            bindings.contains(PointerBindings::TOUCH),
            bindings.contains(PointerBindings::MOUSE)
        );
    });

    let fired: Rc<RefCell<Vec<(Gesture, usize)>>> = Rc::default();
    for gesture in Gesture::ALL {
        if gesture == Gesture::Move {
            continue;
        }
        let sink = fired.clone();
        recognizer.on(gesture.name(), ".carousel", move |ev| {
            sink.borrow_mut().push((ev.gesture, ev.target));
        });
    }
    let sink = fired.clone();
    recognizer.on("tap", "p", move |ev| sink.borrow_mut().push((ev.gesture, ev.target)));

    let p = Point::new;
    let scripts: [(&str, usize, Vec<(u64, Step)>); 5] = [
        (
            "swipe left then back right",
            img,
            vec![
                (0, Step::Down(vec![p(300.0, 200.0)])),
                (16, Step::Move(vec![p(230.0, 205.0)])),
                (32, Step::Move(vec![p(160.0, 210.0)])),
                (48, Step::Move(vec![p(240.0, 205.0)])),
                (64, Step::Up),
            ],
        ),
        (
            "pinch",
            img,
            vec![
                (0, Step::Down(vec![p(100.0, 200.0), p(300.0, 200.0)])),
                (16, Step::Move(vec![p(140.0, 200.0), p(260.0, 200.0)])),
                (32, Step::Move(vec![p(180.0, 200.0), p(220.0, 200.0)])),
                (48, Step::Up),
            ],
        ),
        (
            "tap",
            img,
            vec![
                (0, Step::Down(vec![p(50.0, 50.0)])),
                (90, Step::Up),
            ],
        ),
        (
            "double tap",
            img,
            vec![
                (0, Step::Down(vec![p(50.0, 50.0)])),
                (80, Step::Up),
                (200, Step::Down(vec![p(52.0, 51.0)])),
                (280, Step::Up),
            ],
        ),
        (
            "long press outside the carousel",
            para,
            vec![
                (0, Step::Down(vec![p(20.0, 400.0)])),
                (500, Step::Wait),
                (900, Step::Up),
            ],
        ),
    ];

    for (label, target, script) in &scripts {
        fired.borrow_mut().clear();
        let end = play(recognizer, &page, *target, script);
        let names: Vec<String> = fired
            .borrow()
            .iter()
            .map(|(gesture, element)| format!("{gesture} on {}", page.describe(*element)))
            .collect();
        println!(
            "{label:<34} -> {} (settled at {end}ms)",
            if names.is_empty() {
                "nothing".to_owned()
            } else {
                names.join(", ")
            }
        );
    }
}
