use httpmock::prelude::*;
use mandi_assist::{Assistant, GeminiClient, NegotiationContext, ProviderConfig, Reply};

fn test_config(server: &MockServer) -> ProviderConfig {
    ProviderConfig {
        endpoint: server.url(""),
        model: "test-model".to_string(),
        api_key: "test-key".to_string(),
        timeout_seconds: 5,
        temperature: 0.7,
        max_output_tokens: 256,
    }
}

fn assistant_for(server: &MockServer) -> Assistant<GeminiClient> {
    let client = GeminiClient::new(&test_config(server)).unwrap();
    Assistant::new(client)
}

fn gemini_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            {"content": {"parts": [{"text": text}]}}
        ]
    })
}

#[tokio::test]
async fn test_translate_end_to_end() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/models/test-model:generateContent")
            .query_param("key", "test-key")
            .json_body_partial(r#"{"generationConfig": {"maxOutputTokens": 256}}"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(gemini_reply("\"Translation: नमस्ते\""));
    });

    let assistant = assistant_for(&server);
    let reply = assistant.translate("Hello", "Hindi").await.unwrap();

    mock.assert();
    // Label and quote artifacts are cleaned before the caller sees the text.
    assert_eq!(reply, Reply::Success("नमस्ते".to_string()));
}

#[tokio::test]
async fn test_translate_request_carries_prompt_rules() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/models/test-model:generateContent")
            .body_contains("Output ONLY the translated text")
            .body_contains("kitna hai bhaiya");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(gemini_reply("எவ்வளவு அண்ணா"));
    });

    let assistant = assistant_for(&server);
    let reply = assistant.translate("kitna hai bhaiya", "Tamil").await.unwrap();

    mock.assert();
    assert_eq!(reply.text(), "எவ்வளவு அண்ணா");
}

#[tokio::test]
async fn test_unsupported_language_never_calls_provider() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path_contains("generateContent");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(gemini_reply("unused"));
    });

    let assistant = assistant_for(&server);
    let reply = assistant.translate("Hello", "Klingon").await.unwrap();

    assert_eq!(reply.text(), "[Unsupported language: Klingon]");
    assert!(!reply.is_degraded());
    mock.assert_hits(0);
}

#[tokio::test]
async fn test_validation_rejects_before_any_http_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path_contains("generateContent");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(gemini_reply("unused"));
    });

    let assistant = assistant_for(&server);

    assert!(assistant.translate("", "Hindi").await.is_err());
    assert!(assistant.translate("   \n", "Hindi").await.is_err());
    let too_long = "a".repeat(2001);
    assert!(assistant.translate(&too_long, "Hindi").await.is_err());
    assert!(assistant.detect_language("").await.is_err());
    assert!(assistant.chat("", "Hinglish").await.is_err());

    mock.assert_hits(0);
}

#[tokio::test]
async fn test_negotiate_end_to_end_with_style_block() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/models/test-model:generateContent")
            .body_contains("Devanagari")
            .body_contains("tomato");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(gemini_reply("भाव ठीक है, थोड़ा मोल-भाव करें।"));
    });

    let assistant = assistant_for(&server);
    let ctx = NegotiationContext {
        item: "tomato".to_string(),
        vendor_price: "₹50/kg".to_string(),
        market_reference: "₹40/kg".to_string(),
        language: "Hindi".to_string(),
    };
    let reply = assistant.negotiate(&ctx).await.unwrap();

    mock.assert();
    assert_eq!(reply.text(), "भाव ठीक है, थोड़ा मोल-भाव करें।");
}

#[tokio::test]
async fn test_detect_language_normalizes_to_catalog() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path_contains("generateContent");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(gemini_reply("The language is Bengali."));
    });

    let assistant = assistant_for(&server);
    let reply = assistant.detect_language("এটা কত টাকা?").await.unwrap();
    assert_eq!(reply.text(), "Bengali");
    assert!(!reply.is_degraded());
}

#[tokio::test]
async fn test_detect_language_unrecognized_reply_defaults() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path_contains("generateContent");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(gemini_reply("Esperanto, probably"));
    });

    let assistant = assistant_for(&server);
    let reply = assistant.detect_language("saluton").await.unwrap();
    assert_eq!(reply.text(), "Hindi");
}

#[tokio::test]
async fn test_price_insight_and_chat_and_phrases_end_to_end() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path_contains("generateContent");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(gemini_reply("Tomatoes run ₹30-45/kg, in season. Buy early morning."));
    });

    let assistant = assistant_for(&server);

    let insight = assistant.price_insight("tomato", "Pune").await.unwrap();
    assert!(insight.text().contains("₹30-45/kg"));

    let chat = assistant.chat("When should I buy?", "English").await.unwrap();
    assert!(!chat.text().is_empty());

    let phrases = assistant
        .smart_phrases("tomato", "bulk buy", "Hinglish")
        .await
        .unwrap();
    assert!(!phrases.is_degraded());
}
