// ABOUTME: Integration tests for the unfurl CLI binary.
// ABOUTME: Tests JSON envelope output, error reporting, and flag handling.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn unfurl_cmd() -> Command {
    Command::cargo_bin("unfurl").unwrap()
}

fn stdout_json(output: Vec<u8>) -> serde_json::Value {
    let stdout = String::from_utf8(output).unwrap();
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn single_url_outputs_an_envelope() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/page");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(concat!(
                "<html><head><title>Page One</title>",
                "<meta name=\"description\" content=\"First page.\">",
                "<meta property=\"og:title\" content=\"OG One\">",
                "</head><body><p>One</p></body></html>"
            ));
    });

    let url = server.url("/page");

    let output = unfurl_cmd()
        .arg(&url)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    mock.assert();

    let v = stdout_json(output);
    assert_eq!(v["total_pages"], 1);
    assert_eq!(v["inspected"], 1);
    assert_eq!(v["failed"], 0);
    assert_eq!(v["pages"][0]["url"], url.as_str());
    assert_eq!(v["pages"][0]["ok"], true);
    assert_eq!(v["pages"][0]["meta"]["title"], "Page One");
    assert_eq!(v["pages"][0]["meta"]["description"], "First page.");
    assert_eq!(v["pages"][0]["meta"]["og_title"], "OG One");
}

#[test]
fn multiple_urls_are_reported_with_counts() {
    let server = MockServer::start();

    let mock1 = server.mock(|when, then| {
        when.method(GET).path("/page1");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><head><title>Page One</title></head><body></body></html>");
    });

    let mock2 = server.mock(|when, then| {
        when.method(GET).path("/page2");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><head><title>Page Two</title></head><body></body></html>");
    });

    let url1 = server.url("/page1");
    let url2 = server.url("/page2");

    let output = unfurl_cmd()
        .arg(&url1)
        .arg(&url2)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    mock1.assert();
    mock2.assert();

    let v = stdout_json(output);
    assert_eq!(v["total_pages"], 2);
    assert_eq!(v["inspected"], 2);
    assert_eq!(v["failed"], 0);
    assert_eq!(v["pages"][0]["url"], url1.as_str());
    assert_eq!(v["pages"][0]["meta"]["title"], "Page One");
    assert_eq!(v["pages"][1]["url"], url2.as_str());
    assert_eq!(v["pages"][1]["meta"]["title"], "Page Two");
}

#[test]
fn a_failed_page_sets_the_exit_code() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/good");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><head><title>Good</title></head><body></body></html>");
    });

    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("not found");
    });

    let good = server.url("/good");
    let missing = server.url("/missing");

    let output = unfurl_cmd()
        .arg(&good)
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error inspecting"))
        .stderr(predicate::str::contains("404"))
        .get_output()
        .stdout
        .clone();

    let v = stdout_json(output);
    assert_eq!(v["total_pages"], 2);
    assert_eq!(v["inspected"], 1);
    assert_eq!(v["failed"], 1);
    assert_eq!(v["pages"][0]["ok"], true);
    assert_eq!(v["pages"][1]["ok"], false);
    assert!(v["pages"][1]["meta"].is_null());
    let error = v["pages"][1]["error"].as_str().unwrap();
    assert!(error.contains("404"), "expected 404 in error, got {}", error);
}

#[test]
fn an_invalid_url_fails_without_a_request() {
    let output = unfurl_cmd()
        .arg("http://")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid url"))
        .get_output()
        .stdout
        .clone();

    let v = stdout_json(output);
    assert_eq!(v["failed"], 1);
    assert_eq!(v["pages"][0]["ok"], false);
}

#[test]
fn compact_output_is_a_single_line() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/page");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><head><title>Compact</title></head><body></body></html>");
    });

    let output = unfurl_cmd()
        .arg(server.url("/page"))
        .arg("--compact")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert!(
        !stdout.trim_end().contains('\n'),
        "expected single-line output, got {}",
        stdout
    );
    assert!(stdout.contains("\"title\":\"Compact\""));
}

#[test]
fn the_user_agent_flag_is_sent() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/page")
            .header("user-agent", "unfurl-tester/9.9");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><head><title>Agent</title></head><body></body></html>");
    });

    unfurl_cmd()
        .arg(server.url("/page"))
        .arg("--user-agent")
        .arg("unfurl-tester/9.9")
        .assert()
        .success();

    mock.assert();
}

#[test]
fn no_args_fails() {
    unfurl_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments"));
}
