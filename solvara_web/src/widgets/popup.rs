// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Newsletter popup.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use solvara_core::popup::{Popup, Visibility};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Node};

use super::Mount;
use crate::dom;

const POPUP_ID: &str = "#newsletter-popup";

/// Shared handle to the popup element and its visibility.
///
/// Cloned by every control that can open or close the popup.
#[derive(Clone, Debug)]
pub struct PopupHandle {
    element: HtmlElement,
    state: Rc<Cell<Popup>>,
}

impl PopupHandle {
    fn new(element: HtmlElement) -> Self {
        Self {
            element,
            state: Rc::new(Cell::new(Popup::new())),
        }
    }

    /// Looks up `#newsletter-popup` without mounting its own controls.
    #[must_use]
    pub fn find(doc: &Document) -> Option<Self> {
        let id = POPUP_ID.strip_prefix('#').unwrap_or(POPUP_ID);
        dom::by_id(doc, id).map(Self::new)
    }

    /// Shows the popup.
    pub fn open(&self) {
        self.update(Popup::open);
    }

    /// Hides the popup.
    pub fn close(&self) {
        self.update(Popup::close);
    }

    /// Returns the current visibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.state.get().visibility()
    }

    fn backdrop_click(&self, target: Option<&Node>) {
        let mut popup = self.state.get();
        let is_backdrop = self.element.is_same_node(target);
        if let Some(visibility) = popup.backdrop_click(is_backdrop) {
            self.state.set(popup);
            self.show(visibility);
        }
    }

    fn update(&self, transition: impl FnOnce(&mut Popup) -> Visibility) {
        let mut popup = self.state.get();
        let visibility = transition(&mut popup);
        self.state.set(popup);
        self.show(visibility);
    }

    fn show(&self, visibility: Visibility) {
        dom::set_style(&self.element, "display", visibility.css_display());
    }
}

/// Open button, close button and backdrop click for the newsletter popup.
#[derive(Debug)]
pub struct Newsletter {
    handle: PopupHandle,
    _listeners: [EventListener; 3],
}

impl Newsletter {
    /// Wires `#newsletter-btn`, `#close-popup` and the popup backdrop.
    pub fn mount(m: &Mount<'_>) -> Option<Self> {
        let open_button: HtmlElement = m.by_id("#newsletter-btn")?;
        let element: HtmlElement = m.by_id(POPUP_ID)?;
        let close_button: HtmlElement = m.by_id("#close-popup")?;
        let handle = PopupHandle::new(element);

        let open = {
            let handle = handle.clone();
            EventListener::new(&open_button, "click", move |_| handle.open())
        };
        let close = {
            let handle = handle.clone();
            EventListener::new(&close_button, "click", move |_| handle.close())
        };
        let backdrop = {
            let element = handle.element.clone();
            let handle = handle.clone();
            EventListener::new(&element, "click", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                handle.backdrop_click(target.as_ref());
            })
        };

        m.mounted();
        Some(Self {
            handle,
            _listeners: [open, close, backdrop],
        })
    }

    /// Returns a handle other widgets can use to open the popup.
    #[must_use]
    pub fn handle(&self) -> &PopupHandle {
        &self.handle
    }
}
