// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call-to-action buttons.

use gloo_events::EventListener;
use web_sys::HtmlElement;

use super::Mount;
use super::popup::PopupHandle;
use crate::dom;

/// Streaming link opened by the "listen everywhere" button.
pub const LISTEN_EVERYWHERE_URL: &str = "https://linktr.ee/sethpower";

/// `.listen-everywhere-btn` and `.early-access-btn`.
///
/// Either button may be missing; the widget mounts as long as one is present.
#[derive(Debug)]
pub struct CallToAction {
    _listeners: Vec<EventListener>,
}

impl CallToAction {
    /// Wires the buttons. The early-access button opens `popup`, if any.
    pub fn mount(m: &Mount<'_>, popup: Option<PopupHandle>) -> Option<Self> {
        let mut listeners = Vec::new();

        if let Some(button) = dom::query::<HtmlElement>(m.doc(), ".listen-everywhere-btn") {
            listeners.push(EventListener::new(&button, "click", |_| {
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(LISTEN_EVERYWHERE_URL, "_blank");
                }
            }));
        }

        if let Some(popup) = popup
            && let Some(button) = dom::query::<HtmlElement>(m.doc(), ".early-access-btn")
        {
            listeners.push(EventListener::new(&button, "click", move |_| popup.open()));
        }

        if listeners.is_empty() {
            m.skipped(".listen-everywhere-btn");
            return None;
        }
        m.mounted();
        Some(Self {
            _listeners: listeners,
        })
    }
}
