//! Integration tests for the SuiteTalk SDK.
//!
//! These tests verify end-to-end functionality of the SDK configuration
//! system and the client surface built on top of it.

use netsuite_suitetalk::{
    BaseUri, ConfigError, ConsumerKey, ConsumerSecret, Realm, ResourceKind, SuiteTalkClient,
    SuiteTalkConfig, Token, TokenSecret,
};

#[test]
fn test_full_workflow_create_newtypes_build_config_access_fields() {
    // Create validated newtypes
    let base_uri = BaseUri::new("https://123456.suitetalk.api.netsuite.com/services/rest").unwrap();
    let realm = Realm::new("123456").unwrap();
    let consumer_key = ConsumerKey::new("test-consumer-key").unwrap();
    let consumer_secret = ConsumerSecret::new("test-consumer-secret").unwrap();
    let token = Token::new("test-token-id").unwrap();
    let token_secret = TokenSecret::new("test-token-secret").unwrap();

    // Build configuration
    let config = SuiteTalkConfig::builder()
        .base_uri(base_uri.clone())
        .realm(realm.clone())
        .consumer_key(consumer_key)
        .consumer_secret(consumer_secret)
        .token(token)
        .token_secret(token_secret)
        .user_agent_prefix("TestApp/1.0")
        .build()
        .unwrap();

    // Access fields and verify
    assert_eq!(
        config.base_uri().as_ref(),
        "https://123456.suitetalk.api.netsuite.com/services/rest"
    );
    assert_eq!(config.realm().as_ref(), "123456");
    assert_eq!(config.consumer_key().as_ref(), "test-consumer-key");
    assert_eq!(config.token().as_ref(), "test-token-id");
    assert_eq!(config.user_agent_prefix(), Some("TestApp/1.0"));

    // The config produces a working client with resource handles
    let client = SuiteTalkClient::new(&config);
    assert_eq!(client.customer().name(), "customer");
    assert_eq!(client.resource("salesOrder").unwrap().name(), "salesOrder");
}

#[test]
fn test_multi_account_scenario_independent_configs() {
    // Create configuration for a production account
    let config_a = SuiteTalkConfig::builder()
        .base_uri(
            BaseUri::new("https://111111.suitetalk.api.netsuite.com/services/rest").unwrap(),
        )
        .realm(Realm::new("111111").unwrap())
        .consumer_key(ConsumerKey::new("key-a").unwrap())
        .consumer_secret(ConsumerSecret::new("secret-a").unwrap())
        .token(Token::new("token-a").unwrap())
        .token_secret(TokenSecret::new("token-secret-a").unwrap())
        .build()
        .unwrap();

    // Create configuration for a sandbox account
    let config_b = SuiteTalkConfig::builder()
        .base_uri(
            BaseUri::new("https://111111-sb1.suitetalk.api.netsuite.com/services/rest").unwrap(),
        )
        .realm(Realm::new("111111_SB1").unwrap())
        .consumer_key(ConsumerKey::new("key-b").unwrap())
        .consumer_secret(ConsumerSecret::new("secret-b").unwrap())
        .token(Token::new("token-b").unwrap())
        .token_secret(TokenSecret::new("token-secret-b").unwrap())
        .build()
        .unwrap();

    // Verify configurations are independent
    assert_eq!(config_a.realm().as_ref(), "111111");
    assert_eq!(config_b.realm().as_ref(), "111111_SB1");
    assert_eq!(
        config_a.base_uri().host_name(),
        "111111.suitetalk.api.netsuite.com"
    );
    assert_eq!(
        config_b.base_uri().host_name(),
        "111111-sb1.suitetalk.api.netsuite.com"
    );

    // Each client signs for its own account
    let client_a = SuiteTalkClient::new(&config_a);
    let client_b = SuiteTalkClient::new(&config_b);
    assert_eq!(client_a.invoice().name(), "invoice");
    assert_eq!(client_b.invoice().name(), "invoice");
}

#[test]
fn test_error_handling_invalid_inputs_produce_correct_errors() {
    // Invalid base URI
    let result = BaseUri::new("123456.suitetalk.api.netsuite.com");
    assert!(matches!(result, Err(ConfigError::InvalidBaseUri { .. })));

    // Empty realm
    let result = Realm::new("");
    assert!(matches!(result, Err(ConfigError::EmptyRealm)));

    // Empty credentials
    assert!(matches!(
        ConsumerKey::new(""),
        Err(ConfigError::EmptyConsumerKey)
    ));
    assert!(matches!(
        ConsumerSecret::new(""),
        Err(ConfigError::EmptyConsumerSecret)
    ));
    assert!(matches!(Token::new(""), Err(ConfigError::EmptyToken)));
    assert!(matches!(
        TokenSecret::new(""),
        Err(ConfigError::EmptyTokenSecret)
    ));

    // Missing required fields in builder
    let result = SuiteTalkConfig::builder()
        .base_uri(
            BaseUri::new("https://123456.suitetalk.api.netsuite.com/services/rest").unwrap(),
        )
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField { field: "realm" })
    ));
}

#[test]
fn test_config_can_be_cloned_and_shared() {
    let config = SuiteTalkConfig::builder()
        .base_uri(
            BaseUri::new("https://123456.suitetalk.api.netsuite.com/services/rest").unwrap(),
        )
        .realm(Realm::new("123456").unwrap())
        .consumer_key(ConsumerKey::new("key").unwrap())
        .consumer_secret(ConsumerSecret::new("secret").unwrap())
        .token(Token::new("token").unwrap())
        .token_secret(TokenSecret::new("token-secret").unwrap())
        .build()
        .unwrap();

    // Clone the config
    let config_clone = config.clone();

    // Both should have the same values
    assert_eq!(config.realm().as_ref(), config_clone.realm().as_ref());
    assert_eq!(
        config.base_uri().as_ref(),
        config_clone.base_uri().as_ref()
    );

    // Verify Send + Sync by moving to thread (compile-time check)
    let handle = std::thread::spawn(move || {
        let _ = config_clone.realm().as_ref();
    });
    handle.join().unwrap();
}

#[test]
fn test_every_record_kind_is_addressable() {
    let config = SuiteTalkConfig::builder()
        .base_uri(
            BaseUri::new("https://123456.suitetalk.api.netsuite.com/services/rest").unwrap(),
        )
        .realm(Realm::new("123456").unwrap())
        .consumer_key(ConsumerKey::new("key").unwrap())
        .consumer_secret(ConsumerSecret::new("secret").unwrap())
        .token(Token::new("token").unwrap())
        .token_secret(TokenSecret::new("token-secret").unwrap())
        .build()
        .unwrap();
    let client = SuiteTalkClient::new(&config);

    for kind in ResourceKind::ALL {
        // Every kind resolves by wire name to the same descriptor
        let resource = client.resource(kind.name()).unwrap();
        assert_eq!(resource.descriptor().kind, kind);
        assert!(resource
            .descriptor()
            .base_path
            .starts_with("record/v1/"));
    }
}

#[test]
fn test_types_exported_at_crate_root() {
    // Verify types are accessible from crate root
    let _: fn(netsuite_suitetalk::SuiteTalkClient) = |_| {};
    let _: fn(netsuite_suitetalk::OperationResult) = |_| {};
    let _: fn(netsuite_suitetalk::RecordResource<'_>) = |_| {};
    let _: fn(netsuite_suitetalk::ResourceError) = |_| {};
    let _: fn(netsuite_suitetalk::TransformTarget) = |_| {};
    let _: fn(netsuite_suitetalk::IdempotencyKey) = |_| {};
    let _: fn(netsuite_suitetalk::HttpError) = |_| {};
}
