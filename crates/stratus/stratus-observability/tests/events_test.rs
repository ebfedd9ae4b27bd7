//! Event and span fields, captured as JSON under a scoped subscriber.

use std::io;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use stratus_observability::tracing_setup::events;
use stratus_observability::{design_span, stage_span};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a JSON subscriber scoped to this thread and return one value per line.
fn capture(f: impl FnOnce()) -> Vec<Value> {
    capture_at(tracing::Level::DEBUG, f)
}

fn capture_at(level: tracing::Level, f: impl FnOnce()) -> Vec<Value> {
    let out = Capture::default();
    let writer = out.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = out.0.lock().unwrap().clone();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn design_events_carry_structured_fields() {
    let lines = capture(|| {
        events::design_started("E-commerce (web & APIs)", true, 42);
        events::selection_made(
            "serverless function compute",
            "managed relational DB (standard)",
            None,
            Some("managed stream ingestion"),
        );
        events::risk_scored(45.0, "low");
        events::design_completed("abc123", 7, 6, 2);
    });
    assert_eq!(lines.len(), 4);

    let started = &lines[0]["fields"];
    assert_eq!(started["event"], "design_started");
    assert_eq!(started["focus"], "E-commerce (web & APIs)");
    assert_eq!(started["recognized"], true);
    assert_eq!(started["use_case_len"], 42);

    let selected = &lines[1]["fields"];
    assert_eq!(selected["compute"], "serverless function compute");
    assert_eq!(selected["queue"], "None");
    assert_eq!(selected["stream"], "Some(\"managed stream ingestion\")");

    assert_eq!(lines[2]["fields"]["risk"], 45.0);
    assert_eq!(lines[2]["fields"]["level"], "low");

    let completed = &lines[3]["fields"];
    assert_eq!(completed["fingerprint"], "abc123");
    assert_eq!(completed["nodes"], 7);
    assert_eq!(completed["edges"], 6);
    assert_eq!(completed["gaps"], 2);
    assert!(lines.iter().all(|line| line["level"] == "INFO"));
}

#[test]
fn actionable_gaps_log_as_warnings() {
    let lines = capture(|| {
        events::compliance_gap_found("waf_presence", true, "Add WAF for L7 filtering.");
        events::compliance_gap_found("dpia_reminder", false, "Ensure DPIA where required.");
    });
    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0]["level"], "WARN");
    assert_eq!(lines[0]["fields"]["rule_id"], "waf_presence");
    assert_eq!(lines[0]["fields"]["gap"], "Add WAF for L7 filtering.");
    assert_eq!(lines[0]["fields"]["message"], "compliance gap found");

    assert_eq!(lines[1]["level"], "INFO");
    assert_eq!(lines[1]["fields"]["rule_id"], "dpia_reminder");
}

#[test]
fn events_inside_stages_report_the_span_chain() {
    let lines = capture(|| {
        let span = design_span!("IoT ingest + stream processing");
        let _guard = span.enter();
        let _stage = stage_span!("select").entered();
        events::risk_scored(59.0, "moderate");
    });
    assert_eq!(lines.len(), 1);

    let spans = lines[0]["spans"].as_array().unwrap();
    let names: Vec<&str> = spans.iter().filter_map(|s| s["name"].as_str()).collect();
    assert_eq!(names, vec!["stratus.design", "stratus.stage"]);
    assert_eq!(spans[0]["focus"], "IoT ingest + stream processing");
    assert_eq!(lines[0]["span"]["stage"], "select");
}

#[test]
fn nothing_is_emitted_below_the_max_level() {
    let lines = capture_at(tracing::Level::WARN, || {
        events::design_completed("abc123", 7, 6, 2);
        events::compliance_gap_found("waf_presence", true, "Add WAF for L7 filtering.");
    });
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["fields"]["event"], "compliance_gap_found");
}
