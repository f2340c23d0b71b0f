//! Request signing
//!
//! Every API request carries its credentials in the query string. The
//! signature is an HMAC-SHA256 over
//!
//! ```text
//! METHOD\nPATH\nCANONICAL_QUERY_STRING
//! ```
//!
//! where the canonical query string holds every parameter (the `auth_*`
//! ones and `body_md5` included) sorted by name and left unescaped.

use crate::error::{PusherError, PusherResult};
use crate::http::HttpMethod;
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha2::Sha256;
use std::collections::BTreeMap;

type HmacSha256 = Hmac<Sha256>;

/// Query parameters, ordered by name
pub type QueryParams = BTreeMap<String, String>;

pub const AUTH_VERSION: &str = "1.0";

/// Query parameters after signing. `auth_signature` is kept apart so it
/// can be appended last on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedQuery {
    pub params: QueryParams,
    pub signature: String,
}

impl SignedQuery {
    /// Pairs in wire order: the signed set, then `auth_signature`
    pub fn wire_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .chain(std::iter::once(("auth_signature", self.signature.as_str())))
    }
}

/// Signs requests with an application's key and secret
pub struct Signer<'a> {
    key: &'a str,
    secret: &'a str,
}

impl<'a> Signer<'a> {
    pub fn new(key: &'a str, secret: &'a str) -> Self {
        Self { key, secret }
    }

    /// Merge the auth parameters into `params` and sign the result.
    ///
    /// Caller-supplied parameters with an `auth_` name or `body_md5` are
    /// overwritten.
    pub fn sign(
        &self,
        method: HttpMethod,
        path: &str,
        mut params: QueryParams,
        body: Option<&[u8]>,
        timestamp: u64,
    ) -> PusherResult<SignedQuery> {
        params.remove("auth_signature");
        params.insert("auth_key".to_string(), self.key.to_string());
        params.insert("auth_timestamp".to_string(), timestamp.to_string());
        params.insert("auth_version".to_string(), AUTH_VERSION.to_string());
        match body {
            Some(body) => {
                params.insert("body_md5".to_string(), body_md5(body));
            }
            None => {
                params.remove("body_md5");
            }
        }

        let signature = hmac_sha256_hex(self.secret, &string_to_sign(method, path, &params))?;
        Ok(SignedQuery { params, signature })
    }
}

/// `name=value` pairs joined with `&`, sorted by name
pub fn canonical_query_string(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn string_to_sign(method: HttpMethod, path: &str, params: &QueryParams) -> String {
    format!(
        "{}\n{}\n{}",
        method.as_str(),
        path,
        canonical_query_string(params)
    )
}

/// Lowercase hex MD5 of the exact body bytes
pub fn body_md5(body: &[u8]) -> String {
    hex::encode(Md5::digest(body))
}

pub fn hmac_sha256_hex(secret: &str, data: &str) -> PusherResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| PusherError::config(format!("Failed to create HMAC: {}", e)))?;
    mac.update(data.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Constant-time check of a hex HMAC-SHA256 against `data`
pub fn verify_hmac_sha256_hex(secret: &str, data: &[u8], signature: &str) -> bool {
    let Ok(expected) = hex::decode(signature) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(data);
    mac.verify_slice(&expected).is_ok()
}
