// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser bindings for the Solvara Prime landing page.
//!
//! This crate drives the state machines of [`solvara_core`] from the DOM:
//!
//! - [`RafLoop`]: `requestAnimationFrame` loop for the sprite
//! - [`widgets`]: one owner per page widget
//! - [`Page`]: mounts and owns every widget
//! - [`ConsoleSink`]: trace events to `console.debug`
//!
//! The `start` function runs on module instantiation and mounts the page
//! once the document has been parsed.

mod console;
mod dom;
mod page;
mod raf;
pub mod widgets;

use std::cell::RefCell;
use std::rc::Rc;

pub use console::ConsoleSink;
pub use dom::SharedSink;
pub use page::Page;
pub use raf::RafLoop;

use gloo_events::EventListener;
use solvara_core::config::PageConfig;
use wasm_bindgen::prelude::*;
use web_sys::Document;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    static READY: RefCell<Option<EventListener>> = const { RefCell::new(None) };
}

/// Module entry point.
///
/// Mounts the page immediately if the document is already parsed, otherwise
/// on `DOMContentLoaded`.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if doc.ready_state() == "loading" {
        let target = doc.clone();
        let listener = EventListener::once(&target, "DOMContentLoaded", move |_| {
            mount(&doc);
            READY.with(|ready| ready.borrow_mut().take());
        });
        READY.with(|ready| *ready.borrow_mut() = Some(listener));
    } else {
        mount(&doc);
    }
    Ok(())
}

/// Drops the mounted page, removing every listener and timer.
#[wasm_bindgen]
pub fn teardown() {
    READY.with(|ready| ready.borrow_mut().take());
    if let Some(page) = PAGE.with(|page| page.borrow_mut().take()) {
        page.teardown();
    }
}

fn mount(doc: &Document) {
    let sink: SharedSink = Rc::new(RefCell::new(ConsoleSink::new()));
    let page = Page::mount(doc, &PageConfig::landing(), &sink);
    PAGE.with(|slot| {
        // A second mount replaces (and tears down) the first.
        let _previous = slot.borrow_mut().replace(page);
    });
}
