use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use super::{Dispatcher, Source};
use crate::config::{Config, Provider};
use crate::exec::test_support::write_script;

async fn openai_ok<'a>(server: &'a MockServer, answer: &str) -> httpmock::Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("Authorization", "Bearer sk-test");
            then.status(200).json_body(json!({
                "choices": [
                    {
                        "index": 0,
                        "finish_reason": "stop",
                        "message": {"role": "assistant", "content": answer}
                    }
                ]
            }));
        })
        .await
}

async fn gemini_ok<'a>(server: &'a MockServer, answer: &str) -> httpmock::Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-test:generateContent")
                .query_param("key", "g-test");
            then.status(200).json_body(json!({
                "candidates": [
                    {
                        "content": {"role": "model", "parts": [{"text": answer}]},
                        "finishReason": "STOP"
                    }
                ]
            }));
        })
        .await
}

/// Both providers pointed at `server` with API keys set.
fn config_with_keys(server: &MockServer) -> Config {
    Config::builder()
        .with_provider(Provider::ChatGpt, |settings| {
            settings.api_key = Some("sk-test".to_string());
            settings.model = "gpt-test".to_string();
            settings.base_url = server.url("/v1");
        })
        .with_provider(Provider::Gemini, |settings| {
            settings.api_key = Some("g-test".to_string());
            settings.model = "gemini-test".to_string();
            settings.base_url = server.url("/v1beta");
        })
        .with_runtime(|runtime| {
            runtime.cli_timeout_secs = 5;
            runtime.api_timeout_secs = 5;
        })
        .build()
}

#[tokio::test]
async fn reports_missing_prerequisites_without_keys_or_tools() {
    let empty_path = TempDir::new().unwrap();
    let dispatcher = Dispatcher::new(Config::builder().build()).with_search_path(empty_path.path());

    let report = dispatcher.query_all("hello?").await;

    assert_eq!(report.prompt, "hello?");
    assert_eq!(
        report.chatgpt.response,
        "Error: codex CLI not available and OPENAI_API_KEY not found"
    );
    assert_eq!(
        report.gemini.response,
        "Error: gemini CLI not available and GEMINI_API_KEY not found"
    );
    assert_eq!(report.chatgpt.source, Some(Source::None));
    assert_eq!(report.gemini.source, Some(Source::None));
    assert_eq!(report.chatgpt.model, "gpt-5-nano");
    assert_eq!(report.gemini.model, "gemini-3-flash-preview");
}

#[tokio::test]
async fn cli_success_skips_the_api() {
    let server = MockServer::start_async().await;
    let api = openai_ok(&server, "from api").await;
    let tools = TempDir::new().unwrap();
    write_script(tools.path(), "codex", "echo hello");

    let dispatcher = Dispatcher::new(config_with_keys(&server)).with_search_path(tools.path());
    let result = dispatcher.query(Provider::ChatGpt, "say hello").await;

    assert_eq!(result.response, "hello");
    assert_eq!(result.source, Some(Source::Cli));
    assert_eq!(result.model, "gpt-test");
    api.assert_hits_async(0).await;
}

#[tokio::test]
async fn cli_timeout_falls_back_to_api() {
    let server = MockServer::start_async().await;
    let api = gemini_ok(&server, "from api").await;
    let tools = TempDir::new().unwrap();
    write_script(tools.path(), "gemini", "exec sleep 10");

    let mut config = config_with_keys(&server);
    config.runtime.cli_timeout_secs = 1;
    let dispatcher = Dispatcher::new(config).with_search_path(tools.path());
    let result = dispatcher.query(Provider::Gemini, "slow question").await;

    assert_eq!(result.response, "from api");
    assert_eq!(
        result.source,
        Some(Source::Api {
            model: "gemini-test".to_string()
        })
    );
    api.assert_async().await;
}

#[tokio::test]
async fn cli_failure_falls_back_to_api() {
    let server = MockServer::start_async().await;
    let api = openai_ok(&server, "from api").await;
    let tools = TempDir::new().unwrap();
    write_script(tools.path(), "codex", "echo 'auth required' >&2\nexit 1");

    let dispatcher = Dispatcher::new(config_with_keys(&server)).with_search_path(tools.path());
    let result = dispatcher.query(Provider::ChatGpt, "question").await;

    assert_eq!(result.response, "from api");
    assert_eq!(
        result.source.map(|source| source.to_string()).as_deref(),
        Some("api (gpt-test)")
    );
    api.assert_async().await;
}

#[tokio::test]
async fn cli_failure_without_key_surfaces_the_failure() {
    let tools = TempDir::new().unwrap();
    write_script(tools.path(), "gemini", "echo boom >&2\nexit 2");

    let dispatcher = Dispatcher::new(Config::builder().build()).with_search_path(tools.path());
    let result = dispatcher.query(Provider::Gemini, "question").await;

    assert_eq!(
        result.response,
        "Error: gemini CLI failed (gemini error: boom) and GEMINI_API_KEY not found"
    );
    assert_eq!(result.source, Some(Source::None));
}

#[tokio::test]
async fn api_failure_becomes_response_text() {
    let server = MockServer::start_async().await;
    let _api = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(400).body("max_tokens is not supported with this model");
        })
        .await;
    let empty_path = TempDir::new().unwrap();

    let dispatcher = Dispatcher::new(config_with_keys(&server)).with_search_path(empty_path.path());
    let result = dispatcher.query(Provider::ChatGpt, "question").await;

    assert!(result.response.starts_with("Error querying ChatGPT (gpt-test): "));
    assert!(result.response.contains("max_tokens is not supported"));
    assert_eq!(
        result.source,
        Some(Source::Api {
            model: "gpt-test".to_string()
        })
    );
}

#[tokio::test]
async fn unreachable_endpoint_becomes_response_text() {
    let empty_path = TempDir::new().unwrap();
    let config = Config::builder()
        .with_provider(Provider::Gemini, |settings| {
            settings.api_key = Some("g-test".to_string());
            settings.base_url = "http://127.0.0.1:9".to_string();
        })
        .with_runtime(|runtime| runtime.api_timeout_secs = 2)
        .build();

    let dispatcher = Dispatcher::new(config).with_search_path(empty_path.path());
    let result = dispatcher.query(Provider::Gemini, "question").await;

    assert!(
        result
            .response
            .starts_with("Error querying Gemini (gemini-3-flash-preview): ")
    );
    assert!(!result.response.contains("g-test"));
}

#[tokio::test]
async fn api_only_never_runs_tools_and_omits_source() {
    let server = MockServer::start_async().await;
    let openai = openai_ok(&server, "chatgpt via api").await;
    let gemini = gemini_ok(&server, "gemini via api").await;
    let tools = TempDir::new().unwrap();
    write_script(tools.path(), "codex", "echo from-cli");
    write_script(tools.path(), "gemini", "echo from-cli");

    let mut config = config_with_keys(&server);
    config.runtime.cli_enabled = false;
    let dispatcher = Dispatcher::new(config).with_search_path(tools.path());
    let report = dispatcher.query_all("both").await;

    assert_eq!(report.chatgpt.response, "chatgpt via api");
    assert_eq!(report.gemini.response, "gemini via api");
    assert_eq!(report.chatgpt.source, None);
    assert_eq!(report.gemini.source, None);
    openai.assert_async().await;
    gemini.assert_async().await;

    let rendered = serde_json::to_value(&report).unwrap();
    assert!(rendered["chatgpt"].get("source").is_none());
}

#[tokio::test]
async fn api_only_without_key_names_the_key() {
    let dispatcher = Dispatcher::new(
        Config::builder()
            .with_runtime(|runtime| runtime.cli_enabled = false)
            .build(),
    );

    let result = dispatcher.query(Provider::ChatGpt, "question").await;

    assert_eq!(result.response, "Error: OPENAI_API_KEY not found");
    assert_eq!(result.source, None);
}

#[tokio::test]
async fn report_serializes_in_output_shape() {
    let server = MockServer::start_async().await;
    let _openai = openai_ok(&server, "first").await;
    let _gemini = gemini_ok(&server, "second").await;
    let tools = TempDir::new().unwrap();
    write_script(tools.path(), "gemini", "echo from gemini cli");

    let dispatcher = Dispatcher::new(config_with_keys(&server)).with_search_path(tools.path());
    let report = dispatcher.query_all("compare").await;

    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "prompt": "compare",
            "chatgpt": {"model": "gpt-test", "source": "api (gpt-test)", "response": "first"},
            "gemini": {"model": "gemini-test", "source": "cli", "response": "from gemini cli"}
        })
    );
}
