use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::{fs, process::Command};
use tempfile::TempDir;

fn sample_course_event() -> serde_json::Value {
    serde_json::json!({
        "id": "aa11",
        "pubkey": "author",
        "kind": 30004,
        "created_at": 1700000000,
        "tags": [
            ["d", "intro-to-x"],
            ["name", "Intro to X"],
            ["about", "Ten+ chars here"],
            ["a", "30023:p1:lesson-1"],
            ["a", "30023:p1:lesson-2"]
        ],
        "content": "",
        "sig": ""
    })
}

fn sample_course_draft() -> serde_json::Value {
    serde_json::json!({
        "title": "Intro to X",
        "description": "Ten+ chars here",
        "pubkey": "author",
        "premium": true,
        "price_sats": 5000,
        "lessons": [
            {
                "title": "Lesson A",
                "description": "What lesson A covers",
                "body": "lesson body",
                "kind": 30023,
                "pubkey": "p1",
                "identifier": "lesson-a"
            }
        ]
    })
}

fn write_json(dir: &TempDir, name: &str, value: &serde_json::Value) -> String {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn decode_cli_prints_parsed_course() {
    let dir = TempDir::new().unwrap();
    let file = write_json(&dir, "ev.json", &sample_course_event());

    Command::cargo_bin("coursr")
        .unwrap()
        .args(["decode", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Intro to X"))
        .stdout(predicate::str::contains("lesson-2"));
}

#[test]
fn decode_cli_keeps_going_past_bad_events() {
    let dir = TempDir::new().unwrap();
    let good = write_json(&dir, "good.json", &sample_course_event());
    let mut unknown = sample_course_event();
    unknown["kind"] = serde_json::json!(99999);
    let bad = write_json(&dir, "bad.json", &unknown);

    Command::cargo_bin("coursr")
        .unwrap()
        .args(["decode", &bad, &good])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Intro to X"));
}

#[test]
fn encode_then_decode_through_files() {
    let dir = TempDir::new().unwrap();
    let draft = write_json(&dir, "draft.json", &sample_course_draft());

    let output = Command::cargo_bin("coursr")
        .unwrap()
        .args(["encode-course", &draft])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let envelope: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(envelope["kind"], 30004);

    let ev_path = dir.path().join("encoded.json");
    fs::write(&ev_path, serde_json::to_string(&envelope).unwrap()).unwrap();
    Command::cargo_bin("coursr")
        .unwrap()
        .args(["decode", ev_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"price_sats\": 5000"))
        .stdout(predicate::str::contains("lesson-a"));
}

#[test]
fn encode_course_cli_rejects_invalid_draft() {
    let dir = TempDir::new().unwrap();
    let mut draft = sample_course_draft();
    draft["lessons"] = serde_json::json!([]);
    let file = write_json(&dir, "draft.json", &draft);

    Command::cargo_bin("coursr")
        .unwrap()
        .args(["encode-course", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one lesson"));
}

#[test]
fn validate_cli_reports_every_violation() {
    let dir = TempDir::new().unwrap();
    let draft = serde_json::json!({
        "title": "ab",
        "summary": "short",
        "body": "too short",
        "pubkey": ""
    });
    let file = write_json(&dir, "draft.json", &draft);

    Command::cargo_bin("coursr")
        .unwrap()
        .args(["validate", &file, "--kind", "video"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title"))
        .stderr(predicate::str::contains("body"))
        .stderr(predicate::str::contains("duration"));
}

#[test]
fn addr_cli_round_trips_naddr() {
    let pubkey = "ab".repeat(32);
    let token = format!("30004:{pubkey}:intro-to-x");

    let output = Command::cargo_bin("coursr")
        .unwrap()
        .args(["addr", "encode", &token, "--relay", "wss://relay.example.com"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let naddr = String::from_utf8(output).unwrap().trim().to_string();
    assert!(naddr.starts_with("naddr1"));

    Command::cargo_bin("coursr")
        .unwrap()
        .args(["addr", "decode", &naddr])
        .assert()
        .success()
        .stdout(predicate::str::contains(&token))
        .stdout(predicate::str::contains("wss://relay.example.com"));
}

#[test]
fn cli_help_lists_commands() {
    let output = Command::cargo_bin("coursr")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    for cmd in ["decode", "encode-course", "encode-resource", "validate", "addr"] {
        assert!(text.contains(cmd));
    }
}
