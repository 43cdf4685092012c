use dummylm_config::{ProviderConfig, ProviderMode};
use dummylm_llm::types::Message;
use dummylm_llm::{CompletionRequest, LlmError, ProviderRegistry};
use serde_json::json;

fn registry(mode: ProviderMode) -> ProviderRegistry {
    ProviderRegistry::from_config(&ProviderConfig {
        id: "dummylm".to_owned(),
        mode,
    })
}

#[test]
fn echo_response_matches_wire_shape() {
    let request = CompletionRequest::from_json(json!({
        "model": "dummylm/Dummy",
        "messages": [{"role": "user", "content": "London"}]
    }))
    .unwrap();

    let response = registry(ProviderMode::Echo).complete(&request).unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "id": "dummy-response-id",
            "object": "chat.completion",
            "created": 1_234_567_890,
            "model": "Dummy",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "hello London"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 1, "completion_tokens": 12, "total_tokens": 13}
        })
    );
}

#[test]
fn echo_counts_every_message_as_a_prompt_token() {
    let request = CompletionRequest::new(
        "dummylm/Dummy",
        vec![Message::system("be brief"), Message::user("Paris"), Message::user("Oslo")],
    );

    let response = registry(ProviderMode::Echo).complete(&request).unwrap();

    assert_eq!(response.content(), "hello Oslo");
    assert_eq!(response.usage.prompt_tokens, 3);
    assert_eq!(response.usage.completion_tokens, 10);
    assert_eq!(response.usage.total_tokens, 13);
}

#[test]
fn tool_calling_session_requests_weather_once() {
    let registry = registry(ProviderMode::ToolCalling);
    let request = CompletionRequest::new("dummylm/Dummy", vec![Message::user("London")]);

    let first = registry.complete(&request).unwrap();
    let body = serde_json::to_value(&first).unwrap();

    assert_eq!(body["choices"][0]["message"]["content"], "dummy: London");
    assert_eq!(
        body["choices"][0]["message"]["tool_calls"],
        json!([{
            "id": "toolu_dummy_0001",
            "type": "function",
            "function": {"name": "get_weather", "arguments": {"city": "London"}}
        }])
    );
    assert_eq!(
        body["usage"],
        json!({"prompt_tokens": -1, "completion_tokens": -1, "total_tokens": -1})
    );

    let second = registry.complete(&request).unwrap();
    let body = serde_json::to_value(&second).unwrap();

    assert_eq!(body["choices"][0]["message"]["content"], "dummy: London");
    assert!(body["choices"][0]["message"].get("tool_calls").is_none());
}

#[test]
fn empty_history_is_rejected_by_both_backends() {
    let request = CompletionRequest::new("dummylm/Dummy", Vec::new());

    for mode in [ProviderMode::Echo, ProviderMode::ToolCalling] {
        let err = registry(mode).complete(&request).unwrap_err();
        assert!(matches!(err, LlmError::InvalidRequest(_)), "{mode:?}: {err}");
    }
}

#[tokio::test]
async fn async_and_sync_entry_points_agree() {
    let registry = registry(ProviderMode::Echo);
    let request = CompletionRequest::new("dummylm/Dummy", vec![Message::user("Lima")]);

    let sync = registry.complete(&request).unwrap();
    let async_ = registry.acomplete(&request).await.unwrap();

    assert_eq!(sync, async_);
}
