//! End-to-end session exchange over in-memory pipes

use klondike::adapter::{Session, SessionConfig};
use klondike::core::Seed;
use serde::Deserialize;
use serde_json::Value;

/// The fields a controller reads back from an error line
#[derive(Debug, Deserialize)]
struct ErrorLine {
    status: String,
    seq: u64,
    code: String,
    message: String,
}

fn run(config: SessionConfig, input: &str) -> Vec<Value> {
    let mut session = Session::new(config);
    let mut output = Vec::new();
    session.serve(input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn seeded() -> SessionConfig {
    SessionConfig {
        seed: Some(Seed(42)),
        ..SessionConfig::default()
    }
}

#[test]
fn test_full_exchange() {
    let input = [
        r#"{"type":"state","seq":1}"#,
        r#"{"type":"move","seq":2,"move":{"kind":"draw","source":{"pile":"stock"}}}"#,
        r#"{"type":"undo","seq":3}"#,
        r#"{"type":"redo","seq":4}"#,
        r#"{"type":"redo","seq":5}"#,
        r#"{"type":"legal_moves","seq":6}"#,
        r#"{"type":"hint","seq":7}"#,
        r#"{"type":"save","seq":8}"#,
    ]
    .join("\n");
    let replies = run(seeded(), &input);
    assert_eq!(replies.len(), 8);

    for (i, reply) in replies.iter().enumerate() {
        assert_eq!(reply["seq"], (i + 1) as u64);
    }
    assert_eq!(replies[0]["state"]["stock"], 24);
    assert_eq!(replies[1]["state"]["stock"], 23);
    assert_eq!(replies[1]["outcome"]["kind"], "draw");
    assert_eq!(replies[2]["state"]["stock"], 24);
    assert_eq!(replies[3]["state"]["waste"].as_array().unwrap().len(), 1);
    assert_eq!(replies[4]["status"], "error");
    assert_eq!(replies[4]["code"], "nothing_to_redo");
    assert!(!replies[5]["moves"].as_array().unwrap().is_empty());
    assert!(replies[6]["hint"].is_object());
    assert_eq!(replies[7]["game"]["version"], 1);
}

#[test]
fn test_illegal_move_reports_code() {
    let input = r#"{"type":"move","seq":1,"move":{"kind":"recycle","source":{"pile":"waste"}}}"#;
    let replies = run(seeded(), input);
    let line: ErrorLine = serde_json::from_value(replies[0].clone()).unwrap();
    assert_eq!(line.status, "error");
    assert_eq!(line.seq, 1);
    assert_eq!(line.code, "rule_violation");
    assert!(!line.message.is_empty());
}

#[test]
fn test_save_then_load_in_new_session() {
    let replies = run(
        seeded(),
        "{\"type\":\"move\",\"move\":{\"kind\":\"draw\",\"source\":{\"pile\":\"stock\"}}}\n{\"type\":\"save\"}",
    );
    let game = replies[1]["game"].clone();
    let load = serde_json::json!({"type": "load", "seq": 1, "game": game}).to_string();

    let replies = run(SessionConfig::default(), &format!("{load}\n{{\"type\":\"state\"}}"));
    assert_eq!(replies[0]["status"], "ok");
    assert_eq!(replies[1]["state"]["seed"], 42);
    assert_eq!(replies[1]["state"]["stock"], 23);
    assert_eq!(replies[1]["state"]["can_undo"], true);
}

#[test]
fn test_autoplay_reports_count() {
    let config = SessionConfig {
        autoplay: true,
        ..seeded()
    };
    let replies = run(config, r#"{"type":"autoplay","seq":9}"#);
    assert_eq!(replies[0]["status"], "ok");
    assert!(replies[0]["autoplayed"].is_u64());
}
