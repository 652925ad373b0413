// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image carousel.
//!
//! Changing the image fades `#feed-image` out, waits for the fade, then
//! preloads the target off-screen with [`preload`]. The visible image is only
//! swapped once the preload settles, to the target on success or to the
//! fallback on failure.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use js_sys::Promise;
use solvara_core::config::FeedConfig;
use solvara_core::feed::{Feed, LoadOutcome};
use solvara_core::trace::FeedImageEvent;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, HtmlElement, HtmlImageElement};

use super::Mount;
use crate::dom::{self, SharedSink};

struct Shared {
    feed: RefCell<Feed>,
    image: HtmlImageElement,
    counter: Option<Element>,
    config: FeedConfig,
    sink: SharedSink,
    /// Pending end of the fade-out.
    fade: RefCell<Option<Timeout>>,
    /// Auto-advance timer.
    advance: RefCell<Option<Interval>>,
}

impl Shared {
    fn show_counter(&self, text: &str) {
        if let Some(counter) = &self.counter {
            dom::set_text(counter, text);
        }
    }
}

/// Carousel on `#feed-image`.
///
/// `#feed-counter`, `#prev-feed` and `#next-feed` are optional; without them
/// the feed still auto-advances.
pub struct ImageFeed {
    shared: Rc<Shared>,
    _listeners: Vec<EventListener>,
}

impl ImageFeed {
    /// Renders the counter and starts auto-advance.
    pub fn mount(m: &Mount<'_>, config: FeedConfig) -> Option<Self> {
        let image: HtmlImageElement = m.by_id("#feed-image")?;
        let prev: Option<HtmlElement> = m.optional_id("#prev-feed");
        let next: Option<HtmlElement> = m.optional_id("#next-feed");

        let feed = Feed::landing();
        let shared = Rc::new(Shared {
            counter: m.optional_id("#feed-counter"),
            image,
            config,
            sink: m.sink(),
            fade: RefCell::new(None),
            advance: RefCell::new(None),
            feed: RefCell::new(feed),
        });
        shared.show_counter(&shared.feed.borrow().counter_text());
        restart_advance(&shared);

        let mut listeners = Vec::new();
        if let Some(prev) = prev {
            let shared = Rc::clone(&shared);
            listeners.push(EventListener::new(&prev, "click", move |_| {
                let index = shared.feed.borrow().prev_index();
                change_image(&shared, index);
                restart_advance(&shared);
            }));
        }
        if let Some(next) = next {
            let shared = Rc::clone(&shared);
            listeners.push(EventListener::new(&next, "click", move |_| {
                let index = shared.feed.borrow().next_index();
                change_image(&shared, index);
                restart_advance(&shared);
            }));
        }

        m.mounted();
        Some(Self {
            shared,
            _listeners: listeners,
        })
    }

    /// Returns the current feed index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.shared.feed.borrow().index()
    }
}

impl core::fmt::Debug for ImageFeed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ImageFeed")
            .field("index", &self.index())
            .finish_non_exhaustive()
    }
}

/// Moves to `index`: updates the counter now, swaps the image after the fade.
fn change_image(shared: &Rc<Shared>, index: usize) {
    let change = shared.feed.borrow_mut().change(index);
    shared.show_counter(&change.counter);
    dom::set_style(&shared.image, "opacity", "0");

    let weak = Rc::downgrade(shared);
    let fade = Timeout::new(shared.config.fade_delay.get(), move || swap_after_fade(weak));
    let _previous = shared.fade.replace(Some(fade));
}

fn swap_after_fade(weak: Weak<Shared>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let (index, url) = {
        let feed = shared.feed.borrow();
        (feed.index(), feed.current_url())
    };
    drop(shared);

    spawn_local(async move {
        let outcome = preload(url).await;
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let src = shared.feed.borrow().resolve(url, outcome);
        shared.image.set_src(src);
        dom::set_style(&shared.image, "opacity", "1");
        dom::with_tracer(&shared.sink, |t| {
            t.feed_image(&FeedImageEvent { index, outcome });
        });
    });
}

/// (Re)starts auto-advance, replacing any running interval.
fn restart_advance(shared: &Rc<Shared>) {
    if !shared.feed.borrow().auto_advances() {
        return;
    }
    let weak = Rc::downgrade(shared);
    let interval = Interval::new(shared.config.advance_period.get(), move || {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let index = shared.feed.borrow().next_index();
        change_image(&shared, index);
    });
    let _previous = shared.advance.replace(Some(interval));
}

/// Loads `url` into a detached image and reports whether it loaded.
///
/// Settles exactly once: the element's `load` resolves the promise and its
/// `error` rejects it.
pub async fn preload(url: &str) -> LoadOutcome {
    let Ok(image) = HtmlImageElement::new() else {
        return LoadOutcome::Failed;
    };
    let promise = Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);
    let outcome = match JsFuture::from(promise).await {
        Ok(_) => LoadOutcome::Loaded,
        Err(_) => LoadOutcome::Failed,
    };
    image.set_onload(None);
    image.set_onerror(None);
    outcome
}
