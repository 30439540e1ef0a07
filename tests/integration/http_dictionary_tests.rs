//! Integration tests for the HTTP dictionary against a local server

use shiritori::{Dictionary, DictionaryConfig, DictionaryError, HttpDictionary};

use crate::mocks::MockHttpServer;

const SNAKE_ENTRY: &str = r#"[{"word":"snake","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"A legless reptile."}]}]}]"#;
const NOT_FOUND: &str = r#"{"title":"No Definitions Found","message":"Sorry pal, we couldn't find definitions for the word you were looking for."}"#;

fn dictionary_for(base_url: &str) -> HttpDictionary {
    HttpDictionary::new(&DictionaryConfig {
        base_url: base_url.to_string(),
        ..DictionaryConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_entry_found() {
    let mut server = MockHttpServer::start(200, SNAKE_ENTRY).await;
    let dictionary = dictionary_for(server.base_url());

    assert!(dictionary.lookup("snake").await.unwrap());
    assert_eq!(
        server.next_request().await.unwrap(),
        "GET /api/v2/entries/en/snake HTTP/1.1"
    );
}

#[tokio::test]
async fn test_not_found() {
    let server = MockHttpServer::start(404, NOT_FOUND).await;
    let dictionary = dictionary_for(server.base_url());

    assert!(!dictionary.lookup("snaky").await.unwrap());
    assert!(!dictionary.exists("snaky").await);
}

#[tokio::test]
async fn test_empty_result_set_is_not_found() {
    let server = MockHttpServer::start(200, "[]").await;
    let dictionary = dictionary_for(server.base_url());

    assert!(!dictionary.lookup("snake").await.unwrap());
}

#[tokio::test]
async fn test_server_error_fails_closed() {
    let server = MockHttpServer::start(500, "{}").await;
    let dictionary = dictionary_for(server.base_url());

    assert!(matches!(
        dictionary.lookup("snake").await,
        Err(DictionaryError::UnexpectedStatus { status: 500 })
    ));
    assert!(!dictionary.exists("snake").await);
}

#[tokio::test]
async fn test_malformed_body_fails_closed() {
    let server = MockHttpServer::start(200, "not json").await;
    let dictionary = dictionary_for(server.base_url());

    assert!(matches!(dictionary.lookup("snake").await, Err(DictionaryError::Parse { .. })));
    assert!(!dictionary.exists("snake").await);
}

#[tokio::test]
async fn test_unreachable_service_fails_closed() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let dictionary = dictionary_for(&format!("http://{}/api/v2/entries/en", addr));

    assert!(matches!(dictionary.lookup("snake").await, Err(DictionaryError::Http(_))));
    assert!(!dictionary.exists("snake").await);
}
