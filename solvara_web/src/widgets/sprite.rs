// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard-driven sprite.
//!
//! Key listeners live on the document. A movement key starts a
//! [`RafLoop`]; releasing the last one stops it. Every frame advances the
//! [`SpriteNav`] and, if it moved, rewrites the sprite's inline style and the
//! coordinate readout.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use solvara_core::config::SpriteConfig;
use solvara_core::sprite::{LoopCommand, MovementKey, Sprite, SpriteNav};
use solvara_core::trace::SpriteFrameEvent;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions, Window};

use super::Mount;
use crate::dom::{self, SharedSink};
use crate::raf::RafLoop;

struct Shared {
    nav: RefCell<SpriteNav>,
    player: HtmlElement,
    coord_x: Option<Element>,
    coord_y: Option<Element>,
    window: Option<Window>,
    sink: SharedSink,
}

impl Shared {
    fn render(&self, sprite: &Sprite) {
        self.player.style().set_css_text(&sprite.css_text());
        let (x, y) = sprite.readout();
        if let Some(el) = &self.coord_x {
            dom::set_text(el, &x);
        }
        if let Some(el) = &self.coord_y {
            dom::set_text(el, &y);
        }
    }

    fn scroll_by(&self, dy: i32) {
        let Some(window) = &self.window else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(f64::from(dy));
        options.set_behavior(ScrollBehavior::Instant);
        window.scroll_by_with_scroll_to_options(&options);
    }

    fn frame(&self, frame_index: u64) {
        let (outcome, sprite) = {
            let mut nav = self.nav.borrow_mut();
            (nav.step(), *nav.sprite())
        };
        if !outcome.moved {
            return;
        }
        self.render(&sprite);
        if let Some(dy) = outcome.scroll {
            self.scroll_by(dy);
        }
        dom::with_tracer(&self.sink, |t| {
            t.sprite_frame(&SpriteFrameEvent {
                frame_index,
                x: sprite.x,
                y: sprite.y,
                rotation: sprite.rotation,
                scroll: outcome.scroll,
            });
        });
    }
}

/// Sprite on `#player`, with an optional `#coord-x` / `#coord-y` readout.
pub struct SpriteWidget {
    shared: Rc<Shared>,
    raf: Rc<RafLoop>,
    _listeners: [EventListener; 2],
}

impl SpriteWidget {
    /// Places the sprite at its start position and listens for movement keys.
    pub fn mount(m: &Mount<'_>, config: SpriteConfig) -> Option<Self> {
        let player: HtmlElement = m.by_id("#player")?;
        let shared = Rc::new(Shared {
            nav: RefCell::new(SpriteNav::new(config)),
            player,
            coord_x: m.optional_id("#coord-x"),
            coord_y: m.optional_id("#coord-y"),
            window: web_sys::window(),
            sink: m.sink(),
        });
        let initial = *shared.nav.borrow().sprite();
        shared.render(&initial);

        let raf = {
            let weak = Rc::downgrade(&shared);
            Rc::new(RafLoop::new(move |frame_index| {
                if let Some(shared) = weak.upgrade() {
                    shared.frame(frame_index);
                }
            }))
        };

        // Not passive: movement keys suppress arrow-key scrolling.
        let keydown = {
            let shared = Rc::clone(&shared);
            let raf = Rc::clone(&raf);
            EventListener::new_with_options(
                m.doc(),
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(key) = movement_key(event) else {
                        return;
                    };
                    event.prevent_default();
                    let command = shared.nav.borrow_mut().key_down(key);
                    if command == LoopCommand::Start {
                        raf.start();
                    }
                },
            )
        };

        let keyup = {
            let shared = Rc::clone(&shared);
            let raf = Rc::clone(&raf);
            EventListener::new(m.doc(), "keyup", move |event| {
                let Some(key) = movement_key(event) else {
                    return;
                };
                let command = shared.nav.borrow_mut().key_up(key);
                if command == LoopCommand::Stop {
                    raf.stop();
                }
            })
        };

        m.mounted();
        Some(Self {
            shared,
            raf,
            _listeners: [keydown, keyup],
        })
    }

    /// Returns the current sprite.
    #[must_use]
    pub fn sprite(&self) -> Sprite {
        *self.shared.nav.borrow().sprite()
    }
}

impl Drop for SpriteWidget {
    fn drop(&mut self) {
        self.raf.stop();
    }
}

impl core::fmt::Debug for SpriteWidget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpriteWidget")
            .field("sprite", &self.sprite())
            .field("raf", &self.raf)
            .finish_non_exhaustive()
    }
}

fn movement_key(event: &web_sys::Event) -> Option<MovementKey> {
    let event = event.dyn_ref::<KeyboardEvent>()?;
    MovementKey::from_key(&event.key())
}
