// Signatures are reproducible from a request's own query string

use pusher_core::auth::signature::{hmac_sha256_hex, string_to_sign};
use pusher_core::auth::{QueryParams, Signer};
use pusher_core::{Client, FixedClock, HttpMethod, SignedRequest};
use url::Url;

const TIMESTAMP: u64 = 1_353_088_179;

fn client() -> Client {
    Client::builder()
        .app_id("3")
        .key("278d425bdf160c739803")
        .secret("7ad3773142a6692b25b8")
        .clock(FixedClock(TIMESTAMP))
        .build()
        .unwrap()
}

/// Split a built request into its signed parameters and signature
fn split(request: &SignedRequest) -> (Url, QueryParams, String) {
    let url = Url::parse(&request.url).unwrap();
    let mut params: QueryParams = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let signature = params.remove("auth_signature").unwrap();
    (url, params, signature)
}

#[test]
fn test_documented_trigger_signature() {
    let request = client()
        .requests()
        .trigger(&["project-3"], "foo", r#"{"some":"data"}"#, None)
        .unwrap();

    let (_, params, signature) = split(&request);
    assert_eq!(params["body_md5"], "ec365a775a4cd0599faeb73354201b6f");
    assert_eq!(
        signature,
        "da454824c97ba181a32ccc17a72625ba02771f50b50e1e7430e47a1f3f457e6c"
    );
}

#[test]
fn test_signature_is_deterministic_with_fixed_clock() {
    let client = client();
    let first = client
        .requests()
        .trigger(&["test_channel"], "test", "yolo", None)
        .unwrap();
    let second = client
        .requests()
        .trigger(&["test_channel"], "test", "yolo", None)
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_timestamp_changes_signature() {
    let later = Client::builder()
        .app_id("3")
        .key("278d425bdf160c739803")
        .secret("7ad3773142a6692b25b8")
        .clock(FixedClock(TIMESTAMP + 1))
        .build()
        .unwrap();

    let a = client().requests().trigger(&["c"], "e", "d", None).unwrap();
    let b = later.requests().trigger(&["c"], "e", "d", None).unwrap();

    assert_ne!(split(&a).2, split(&b).2);
}

#[test]
fn test_round_trip_recomputes_signature() {
    let client = client();
    let mut extra = QueryParams::new();
    extra.insert(
        "info".to_string(),
        "user_count,subscription_count".to_string(),
    );

    let requests = [
        client
            .requests()
            .trigger(&["a", "b"], "event", "data", Some("123.456"))
            .unwrap(),
        client.requests().channel("presence-room", &extra).unwrap(),
        client.requests().channels(&QueryParams::new()).unwrap(),
        client.requests().channel_users("presence-room").unwrap(),
    ];

    for request in &requests {
        let (url, params, signature) = split(request);

        let recomputed = hmac_sha256_hex(
            client.secret(),
            &string_to_sign(request.method, url.path(), &params),
        )
        .unwrap();
        assert_eq!(signature, recomputed, "{}", request.url);

        // Re-signing the stripped parameters lands on the same value.
        let resigned = Signer::new(client.key(), client.secret())
            .sign(
                request.method,
                url.path(),
                params.clone(),
                request.body.as_deref(),
                TIMESTAMP,
            )
            .unwrap();
        assert_eq!(resigned.signature, signature);
        assert_eq!(resigned.params, params);
    }
}

#[test]
fn test_get_and_post_differ() {
    let signer = Signer::new("key", "secret");
    let get = signer
        .sign(HttpMethod::Get, "/apps/1/channels", QueryParams::new(), None, 1)
        .unwrap();
    let post = signer
        .sign(HttpMethod::Post, "/apps/1/channels", QueryParams::new(), None, 1)
        .unwrap();
    assert_ne!(get.signature, post.signature);
}
