// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element lookup and small DOM write helpers.
//!
//! Writes ignore their `Result`: a failed style or class write leaves the
//! page as it was, which is all a widget could do about it anyway.

use std::cell::RefCell;
use std::rc::Rc;

use solvara_core::trace::{TraceSink, Tracer};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Trace sink shared by every widget on the page.
pub type SharedSink = Rc<RefCell<dyn TraceSink>>;

/// Runs `f` with a [`Tracer`] borrowing the shared sink.
///
/// Skips the event if the sink is already borrowed, which only happens when a
/// sink itself triggers a widget handler.
pub(crate) fn with_tracer(sink: &SharedSink, f: impl FnOnce(&mut Tracer<'_>)) {
    let Ok(mut guard) = sink.try_borrow_mut() else {
        return;
    };
    let mut tracer = Tracer::new(&mut *guard);
    f(&mut tracer);
}

/// Looks up an element by id and casts it to `T`.
pub(crate) fn by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Returns the first element matching `selector`, cast to `T`.
pub(crate) fn query<T: JsCast>(doc: &Document, selector: &str) -> Option<T> {
    doc.query_selector(selector).ok()??.dyn_into::<T>().ok()
}

/// Returns every element matching `selector`, in document order.
pub(crate) fn query_all(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i)?.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Adds or removes `class` on `el`.
pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

/// Sets one inline style property.
pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Replaces the text content of `el`.
pub(crate) fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}
