// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget state machines for the Solvara Prime landing page.
//!
//! `solvara_core` holds every piece of page behavior that can be expressed
//! without a browser: the state of each widget, its transition functions, and
//! the text it renders. It is `no_std` compatible (with `alloc`). The
//! `solvara_web` crate owns the DOM side and calls into these types from its
//! event handlers and timers.
//!
//! # Architecture
//!
//! Each widget is an independent owner of its own state. Browser events are
//! turned into transitions, and transitions report what the DOM has to do:
//!
//! ```text
//!   DOM event / timer / frame callback
//!       │
//!       ▼
//!   Widget state ── transition ──► change (label, class, style, command)
//!                                        │
//!                                        ▼
//!                                 solvara_web writes the DOM
//! ```
//!
//! **[`coords`]** — Screen-percentage to readout coordinate conversion.
//!
//! **[`playback`]** — Play/pause toggle shared by the main audio button and
//! the radio play button.
//!
//! **[`flicker`]** — The `MY`/`OUR` glitch cycle as an explicit step chain.
//!
//! **[`sprite`]** — Held movement keys and the per-frame position integrator
//! with edge clamping.
//!
//! **[`popup`]** — Newsletter popup visibility.
//!
//! **[`mission`]** — Elapsed-time counter and its `T+ HH:MM:SS` rendering.
//!
//! **[`feed`]** — Image carousel index, counter text, and load fallback.
//!
//! **[`tuner`]** — Station table, slider selection, and the play rule for
//! stations without a signal.
//!
//! **[`config`]** — Timing and geometry constants in one [`PageConfig`].
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! widget instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//!
//! [`PageConfig`]: config::PageConfig

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod coords;
pub mod feed;
pub mod flicker;
pub mod mission;
pub mod playback;
pub mod popup;
pub mod sprite;
pub mod time;
pub mod trace;
pub mod tuner;
