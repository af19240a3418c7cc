use std::io;
use std::sync::Arc;
use std::time::Duration;

use glossa_config::Config;
use glossa_core::Dictionary;
use glossa_core::state::AppState;
use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::render::OutputFormat;
use crate::session::{PROMPT, Session};

async fn session(format: OutputFormat, all: bool) -> Session {
    let dictionary: Dictionary = [
        ("cat", "a small domesticated feline"),
        ("horse", "a large hoofed mammal"),
        ("house", "a building for people to live in"),
    ]
    .into_iter()
    .collect();

    let state = Arc::new(AppState::new(Config::default()));
    state.set_dictionary(dictionary).await;
    Session::new(state, format, all)
}

/// A closed line source holding `lines`
fn lines(lines: &[&str]) -> mpsc::Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel(lines.len().max(1));
    for line in lines {
        tx.try_send(Ok(line.to_string())).unwrap();
    }
    rx
}

#[tokio::test]
async fn test_run_words_prints_each_answer() {
    let session = session(OutputFormat::Text, false).await;
    let words = vec!["CAT".to_string(), "kat".to_string(), "xyz123".to_string()];

    let mut out = Vec::new();
    session.run_words(&words, &mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "a small domesticated feline\n\
         Word not found. Did you mean 'cat'? Definition: a small domesticated feline\n\
         Word not found.\n"
    );
}

#[tokio::test]
async fn test_interactive_reads_until_input_closes() {
    let session = session(OutputFormat::Text, false).await;
    let mut input = lines(&["horse", "hous"]);

    let mut out = Vec::new();
    session.run_interactive(&mut input, &mut out, false).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "a large hoofed mammal\n\
         Word not found. Did you mean 'house'? Definition: a building for people to live in\n"
    );
}

#[tokio::test]
async fn test_interactive_prompt() {
    let session = session(OutputFormat::Text, false).await;
    let mut input = lines(&["cat"]);

    let mut out = Vec::new();
    session.run_interactive(&mut input, &mut out, true).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, format!("{PROMPT}a small domesticated feline\n{PROMPT}"));
}

#[tokio::test]
async fn test_interactive_read_error_is_returned() {
    let session = session(OutputFormat::Text, false).await;
    let (tx, mut rx) = mpsc::channel(1);
    tx.send(Err(io::Error::other("broken pipe"))).await.unwrap();

    let mut out = Vec::new();
    let err = session.run_interactive(&mut rx, &mut out, false).await.unwrap_err();
    assert!(err.to_string().contains("broken pipe"));
}

#[tokio::test]
async fn test_shutdown_ends_prompt_waiting_for_input() {
    let session = session(OutputFormat::Text, false).await;
    // Sender stays alive, so no line ever arrives and input never closes
    let (_tx, rx) = mpsc::channel(1);

    let mut out = Vec::new();
    let result = timeout(
        Duration::from_secs(2),
        session.run_until(rx, &mut out, true, async {}),
    )
    .await;

    assert!(matches!(result, Ok(Ok(()))), "prompt did not stop on shutdown");
}

#[tokio::test]
async fn test_run_until_finishes_at_end_of_input() {
    let session = session(OutputFormat::Text, false).await;

    let mut out = Vec::new();
    let result = timeout(
        Duration::from_secs(2),
        session.run_until(lines(&["cat"]), &mut out, false, std::future::pending()),
    )
    .await;

    assert!(matches!(result, Ok(Ok(()))));
    assert_eq!(String::from_utf8(out).unwrap(), "a small domesticated feline\n");
}

#[tokio::test]
async fn test_json_lines() {
    let session = session(OutputFormat::Json, false).await;
    let mut out = Vec::new();
    session.run_words(&["kat".to_string()], &mut out).await.unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["kind"], "suggested");
    assert_eq!(value["word"], "cat");
    assert_eq!(value["query"], "kat");
}

#[tokio::test]
async fn test_all_suggestions() {
    let session = session(OutputFormat::Text, true).await;
    let answer = session.answer("hors").await.unwrap();
    assert_eq!(answer, "Suggestions for 'hors':\n  horse (0.889)\n  house (0.667)");
}

#[tokio::test]
async fn test_missing_dictionary_is_an_error() {
    let state = Arc::new(AppState::new(Config::default()));
    let session = Session::new(state, OutputFormat::Text, false);
    let err = session.answer("cat").await.unwrap_err();
    assert!(err.to_string().contains("no dictionary loaded"));
}
