// Shared helpers for integration tests against a local mock server

#![allow(dead_code)]

use pusher_core::auth::signature::{body_md5, hmac_sha256_hex, string_to_sign};
use pusher_core::auth::QueryParams;
use pusher_core::{Client, ClientBuilder, FixedClock, HttpMethod};
use std::time::Duration;
use wiremock::MockServer;

pub const APP_ID: &str = "id";
pub const KEY: &str = "key";
pub const SECRET: &str = "secret";
pub const TIMESTAMP: u64 = 1_353_088_179;

/// Builder pointed at the mock server with a fixed clock
pub fn builder_for(server: &MockServer) -> ClientBuilder {
    Client::builder()
        .app_id(APP_ID)
        .key(KEY)
        .secret(SECRET)
        .host(server.address().to_string())
        .timeout(Duration::from_secs(5))
        .clock(FixedClock(TIMESTAMP))
}

pub fn client_for(server: &MockServer) -> Client {
    builder_for(server).build().expect("client should build")
}

/// Client whose push host is the mock server
pub fn push_client_for(server: &MockServer) -> Client {
    Client::builder()
        .app_id(APP_ID)
        .key(KEY)
        .secret(SECRET)
        .push_host(server.address().to_string())
        .timeout(Duration::from_millis(500))
        .clock(FixedClock(TIMESTAMP))
        .build()
        .expect("client should build")
}

/// Client that must never reach the network
pub fn offline_client() -> Client {
    Client::builder()
        .app_id(APP_ID)
        .key(KEY)
        .secret(SECRET)
        .host("127.0.0.1:9")
        .build()
        .expect("client should build")
}

/// Recompute the signature of a received request the way the service does
pub fn assert_signed(request: &wiremock::Request) {
    let mut params: QueryParams = request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let signature = params
        .remove("auth_signature")
        .expect("request should carry auth_signature");

    let method = match request.method.as_str() {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unexpected method {}", other),
    };

    assert_eq!(params["auth_key"], KEY);
    assert_eq!(params["auth_version"], "1.0");
    assert_eq!(params["auth_timestamp"], TIMESTAMP.to_string());
    if request.body.is_empty() {
        assert!(!params.contains_key("body_md5"));
    } else {
        assert_eq!(params["body_md5"], body_md5(&request.body));
    }

    let expected =
        hmac_sha256_hex(SECRET, &string_to_sign(method, request.url.path(), &params)).unwrap();
    assert_eq!(signature, expected);
}
