use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("html-grader").unwrap()
}

// A temp dir holding checks.json and index.html
fn fixture(checks: &str, html: &str) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("checks.json"), checks).expect("write checks.json");
    fs::write(dir.path().join("index.html"), html).expect("write index.html");
    dir
}

// Answers a single HTTP request with the given status line and body
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        if let Ok((mut socket, _)) = listener.accept() {
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes());
        }
    });

    format!("http://{}/", addr)
}

fn checks_arg(dir: &Path) -> String {
    dir.join("checks.json").display().to_string()
}

#[test]
fn file_mode_reports_each_selector() {
    let dir = fixture(r##"["h1", "#nope"]"##, "<html><body><h1>Hi</h1></body></html>");

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("{\n    \"#nope\": false,\n    \"h1\": true\n}\n");
}

#[test]
fn explicit_paths_and_duplicates() {
    let dir = fixture(r#"["p", "a[href]", "p"]"#, r#"<a href="/x">x</a>"#);
    let checks = checks_arg(dir.path());
    let html = dir.path().join("index.html").display().to_string();

    cmd()
        .args(["-c", checks.as_str(), "-f", html.as_str()])
        .assert()
        .success()
        .stdout("{\n    \"a[href]\": true,\n    \"p\": false\n}\n");
}

#[test]
fn missing_checks_file_exits_1() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["--checks", "missing.json"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("missing.json does not exist. Exiting."));
}

#[test]
fn missing_html_file_exits_1() {
    let dir = fixture(r#"["h1"]"#, "");

    cmd()
        .current_dir(dir.path())
        .args(["--file", "nothere.html"])
        .assert()
        .code(1)
        .stderr(contains("nothere.html does not exist. Exiting."));
}

#[test]
fn default_html_file_is_checked_in_file_mode() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("checks.json"), r#"["h1"]"#).unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("index.html does not exist. Exiting."));
}

#[test]
fn unreachable_url_exits_2() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("checks.json"), r#"["h1"]"#).unwrap();

    // Grab a free port, then close it so nothing is listening there
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    cmd()
        .current_dir(dir.path())
        .args(["-t", "url", "-u", url.as_str(), "--timeout", "10"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(contains("Error:").and(contains("failed to fetch")));
}

#[test]
fn url_mode_ignores_http_status() {
    let dir = fixture(r#"["a[href]"]"#, "");
    fs::remove_file(dir.path().join("index.html")).unwrap();

    for status in ["200 OK", "404 Not Found"] {
        let url = serve_once(status, r#"<html><body><a href="x">x</a></body></html>"#);

        cmd()
            .current_dir(dir.path())
            .args(["-t", "url", "-u", url.as_str(), "--timeout", "10"])
            .assert()
            .success()
            .stdout("{\n    \"a[href]\": true\n}\n");
    }
}

#[test]
fn invalid_selector_exits_2() {
    let dir = fixture(r#"["h1", "a[[["]"#, "<h1>Hi</h1>");

    cmd()
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stdout("")
        .stderr(contains("invalid selector 'a[[['"));
}

#[test]
fn malformed_checks_file_exits_2() {
    let dir = fixture("not json", "<h1>Hi</h1>");

    cmd()
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(contains("Error:").and(contains("checks.json")));
}

#[test]
fn unknown_type_is_a_usage_error() {
    cmd().args(["--type", "ftp"]).assert().code(2);
}

#[test]
fn verbose_prints_diagnostics_before_report() {
    let dir = fixture(r#"["h1"]"#, "<h1>Hi</h1>");

    cmd()
        .current_dir(dir.path())
        .arg("-v")
        .assert()
        .success()
        .stdout(
            contains("Checking for file checks.json")
                .and(contains("Checking using type: file"))
                .and(contains("Checking file index.html"))
                .and(contains("Checking using file checks.json"))
                .and(contains("\"h1\": true")),
        );
}
