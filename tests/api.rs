//! Calling-convention tests for QueryParser

use mgoquery::{ParseErrorKind, ParserOptions, QueryParser};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

#[test]
fn test_parse_calls_its_callback_synchronously() {
    let parser = QueryParser::default();
    let mut calls = 0;

    parser
        .parse("x=3", |filter| {
            assert_eq!(filter, "{'x': 3}");
            calls += 1;
        })
        .unwrap();

    assert_eq!(calls, 1);
}

#[test]
fn test_parse_sync_returns_the_filter() {
    let parser = QueryParser::default();
    assert_eq!(parser.parse_sync("x=3").unwrap(), "{'x': 3}");
}

#[test]
fn test_parse_sync_propagates_errors() {
    let parser = QueryParser::default();
    let err = parser.parse_sync("(x='3'").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnbalancedGroup);
}

#[tokio::test]
async fn test_parse_async_resolves() {
    let parser = QueryParser::default();
    assert_eq!(parser.parse_async("x=3").await.unwrap(), "{'x': 3}");
}

#[tokio::test]
async fn test_parse_async_rejects() {
    let parser = QueryParser::default();
    let err = parser.parse_async("y ^ 2").await.unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::OperatorValue);
}

#[tokio::test]
async fn test_parse_async_with_calls_back_later() {
    let parser = QueryParser::default();
    let calls = Arc::new(Mutex::new(Vec::new()));

    let seen = Arc::clone(&calls);
    let handle = parser.parse_async_with("x=3", move |result| {
        seen.lock().unwrap().push(result);
    });
    // the current-thread runtime has not polled the task yet
    assert!(calls.lock().unwrap().is_empty());

    handle.await.unwrap();
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].as_deref(), Ok("{'x': 3}"));
}

#[tokio::test]
async fn test_parse_async_with_reports_errors() {
    let parser = QueryParser::new(ParserOptions::default());
    let (tx, rx) = mpsc::channel();

    parser
        .parse_async_with("x>true", move |result| {
            tx.send(result).unwrap();
        })
        .await
        .unwrap();

    let err = rx.recv().unwrap().unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::OperatorValue);
}

#[test]
fn test_parser_is_shareable_across_threads() {
    let parser = QueryParser::default();
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || parser.parse_sync(&format!("x={}", i)).unwrap()))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("{{'x': {}}}", i));
    }
}
