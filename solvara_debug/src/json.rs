// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] writes the events of a [`RecorderSink`](super::recorder::RecorderSink)
//! as a JSON array, one object per event, in recording order.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::RecordedEvent;

/// Writes `events` as a pretty-printed JSON array.
///
/// Every object carries `seq`, `name` and `widget`; event fields go under
/// `args`.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events
        .iter()
        .enumerate()
        .map(|(seq, event)| {
            json!({
                "seq": seq,
                "name": event.name(),
                "widget": event.widget().name(),
                "args": args(event),
            })
        })
        .collect();
    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}

fn args(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::WidgetMounted(_) => json!({}),
        RecordedEvent::WidgetSkipped(e) => json!({ "missing": e.missing }),
        RecordedEvent::Playback(e) => json!({ "state": format!("{:?}", e.state) }),
        RecordedEvent::SpriteFrame(e) => json!({
            "frame_index": e.frame_index,
            "x": e.x,
            "y": e.y,
            "rotation": e.rotation,
            "scroll": e.scroll,
        }),
        RecordedEvent::FeedImage(e) => json!({
            "index": e.index,
            "outcome": format!("{:?}", e.outcome),
        }),
        RecordedEvent::Station(e) => json!({
            "index": e.index,
            "stopped_playback": e.stopped_playback,
            "source_changed": e.source_changed,
        }),
        RecordedEvent::NoSignal(e) => json!({ "index": e.index }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use solvara_core::trace::{
        NoSignalEvent, SpriteFrameEvent, StationEvent, TraceSink, WidgetKind, WidgetSkippedEvent,
    };

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_widget_skipped(&WidgetSkippedEvent {
            widget: WidgetKind::Newsletter,
            missing: "#close-popup",
        });
        rec.on_station(&StationEvent {
            index: 2,
            stopped_playback: true,
            source_changed: false,
        });
        rec.on_no_signal(&NoSignalEvent { index: 2 });
        rec.on_sprite_frame(&SpriteFrameEvent {
            frame_index: 4,
            x: 95.0,
            y: 2.0,
            rotation: 90,
            scroll: None,
        });

        let mut out = Vec::new();
        export(rec.events(), &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 4);

        assert_eq!(parsed[0]["name"], "WidgetSkipped");
        assert_eq!(parsed[0]["widget"], "newsletter");
        assert_eq!(parsed[0]["args"]["missing"], "#close-popup");

        assert_eq!(parsed[1]["seq"], 1);
        assert_eq!(parsed[1]["args"]["stopped_playback"], true);

        assert_eq!(parsed[2]["widget"], "tuner");

        assert_eq!(parsed[3]["args"]["rotation"], 90);
        assert!(parsed[3]["args"]["scroll"].is_null());
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();
        assert!(parsed.is_empty());
    }
}
