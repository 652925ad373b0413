// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for Solvara widget traces.
//!
//! This crate provides [`TraceSink`](solvara_core::trace::TraceSink)
//! implementations for development and tests:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: in-memory event log.
//! - [`json::export`]: writes a recording as a JSON array.

pub mod json;
pub mod pretty;
pub mod recorder;
