use std::net::TcpListener;
use std::process::{Command, Output};

fn run_client(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_price_client"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_prints_current_price() {
    let mut mock_server = mockito::Server::new();

    let mock = mock_server
        .mock("GET", "/api/v3/ticker/price")
        .match_query(mockito::Matcher::UrlEncoded("symbol".into(), "BTCUSDT".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"symbol": "BTCUSDT", "price": "65432.10"}"#)
        .expect(1)
        .create();

    let base_url = mock_server.url();
    let output = run_client(&["--base-url", &base_url]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Current BTCUSDT 65432.1\n");
    assert!(output.stderr.is_empty());
    mock.assert();
}

#[test]
fn test_symbol_override() {
    let mut mock_server = mockito::Server::new();

    let mock = mock_server
        .mock("GET", "/api/v3/ticker/price")
        .match_query(mockito::Matcher::UrlEncoded("symbol".into(), "ETHUSDT".into()))
        .with_status(200)
        .with_body(r#"{"symbol": "ETHUSDT", "price": "0"}"#)
        .create();

    let base_url = mock_server.url();
    let output = run_client(&["--base-url", &base_url, "--symbol", "ethusdt"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Current ETHUSDT 0\n");
    mock.assert();
}

#[test]
fn test_refused_connection_exits_non_zero() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let base_url = format!("http://127.0.0.1:{}", port);

    let output = run_client(&["--base-url", &base_url, "--timeout-secs", "5"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Network error"));
}

#[test]
fn test_timeout_exits_non_zero() {
    // Bound but never accepting: the request sits in the backlog until it times out.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());

    let output = run_client(&["--base-url", &base_url, "--timeout-secs", "1"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Network error"));
    drop(listener);
}

#[test]
fn test_malformed_payload_exits_non_zero() {
    let mut mock_server = mockito::Server::new();

    mock_server
        .mock("GET", "/api/v3/ticker/price")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"symbol": "BTCUSDT", "price": "N/A"}"#)
        .create();

    let base_url = mock_server.url();
    let output = run_client(&["--base-url", &base_url]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.starts_with("Error: Malformed response"));
}

#[test]
fn test_unknown_symbol_exits_non_zero() {
    let mut mock_server = mockito::Server::new();

    mock_server
        .mock("GET", "/api/v3/ticker/price")
        .match_query(mockito::Matcher::Any)
        .with_status(400)
        .with_body(r#"{"code":-1121,"msg":"Invalid symbol."}"#)
        .create();

    let base_url = mock_server.url();
    let output = run_client(&["--base-url", &base_url, "--symbol", "NOPEUSDT"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Quote unavailable"));
}

#[test]
fn test_empty_symbol_is_rejected() {
    let output = run_client(&["--symbol", "", "--base-url", "http://127.0.0.1:9"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid symbol"));
}
