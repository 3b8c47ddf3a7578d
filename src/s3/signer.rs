// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Signature V2 for S3 API

use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::{UtcTime, b64_encode, to_http_header_value};
use http::Method;

#[cfg(not(feature = "ring"))]
use hmac::{Hmac, Mac};
#[cfg(feature = "ring")]
use ring::hmac;
#[cfg(not(feature = "ring"))]
use sha1::Sha1;

/// Returns HMAC-SHA1 hash for given key and data
#[cfg(not(feature = "ring"))]
pub fn hmac_hash(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut hasher = Hmac::<Sha1>::new_from_slice(key).expect("HMAC can take key of any size");
    hasher.update(data);
    hasher.finalize().into_bytes().to_vec()
}

/// Returns HMAC-SHA1 hash for given key and data
#[cfg(feature = "ring")]
pub fn hmac_hash(key: &[u8], data: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key);
    hmac::sign(&key, data).as_ref().to_vec()
}

/// Returns the base64 encoded HMAC-SHA1 of `message` keyed by `secret_key`
pub fn sign(secret_key: &str, message: &str) -> String {
    b64_encode(hmac_hash(secret_key.as_bytes(), message.as_bytes()))
}

/// Returns canonical resource of given bucket, path and canonical query string
///
/// `path` is either empty (bucket root) or the escaped object key prefixed with `/`.
pub fn get_canonical_resource(bucket_name: &str, path: &str, canonical_query: &str) -> String {
    let mut resource = String::with_capacity(1 + bucket_name.len() + path.len());
    resource.push('/');
    resource.push_str(bucket_name);
    resource.push_str(path);
    if !canonical_query.is_empty() {
        resource.push('?');
        resource.push_str(canonical_query);
    }
    resource
}

/// Returns string-to-sign value of given request fields
pub fn get_string_to_sign(
    method: &Method,
    content_md5: &str,
    content_type: &str,
    date: &str,
    canonical_resource: &str,
) -> String {
    // StringToSign =
    //   HTTP-Verb + '\n' +
    //   Content-MD5 + '\n' +
    //   Content-Type + '\n' +
    //   Date + '\n' +
    //   CanonicalizedResource
    format!("{method}\n{content_md5}\n{content_type}\n{date}\n{canonical_resource}")
}

/// Returns authorization value for given access key and signature
pub fn get_authorization(access_key: &str, signature: &str) -> String {
    format!("AWS {access_key}:{signature}")
}

/// Signs an S3 request and adds `Date` (when absent) and `Authorization` headers.
///
/// Returns the canonical query string; it must be sent on the wire unchanged, since the
/// signature covers its exact bytes.
pub fn sign_v2_s3(
    method: &Method,
    bucket_name: &str,
    path: &str,
    headers: &mut Multimap,
    query_params: &Multimap,
    access_key: &str,
    secret_key: &str,
    date: UtcTime,
) -> String {
    if headers.get_ignore_case(DATE).is_none() {
        headers.add(DATE, to_http_header_value(date));
    }

    let canonical_query = query_params.get_canonical_query_string();
    let resource = get_canonical_resource(bucket_name, path, &canonical_query);
    let string_to_sign = get_string_to_sign(
        method,
        headers.get_ignore_case(CONTENT_MD5).unwrap_or_default(),
        headers.get_ignore_case(CONTENT_TYPE).unwrap_or_default(),
        headers.get_ignore_case(DATE).unwrap_or_default(),
        &resource,
    );
    let signature = sign(secret_key, &string_to_sign);

    headers.set(AUTHORIZATION, get_authorization(access_key, &signature));
    canonical_query
}

/// Returns string-to-sign of a pre-signed URL
pub fn get_presign_string_to_sign(
    method: &Method,
    expires: i64,
    bucket_name: &str,
    escaped_key: &str,
) -> String {
    format!("{method}\n\n\n{expires}\n/{bucket_name}/{escaped_key}")
}

/// Signs a pre-signed URL and returns its `AWSAccessKeyId`, `Expires` and `Signature`
/// query parameters.
///
/// `expires` is an absolute Unix timestamp in seconds; it is not checked against the
/// current time.
pub fn presign_v2(
    method: &Method,
    bucket_name: &str,
    escaped_key: &str,
    access_key: &str,
    secret_key: &str,
    expires: i64,
) -> Multimap {
    // A '+' would read as a literal plus in the request path.
    let key = escaped_key.replace('+', "%20");
    let string_to_sign = get_presign_string_to_sign(method, expires, bucket_name, &key);
    let signature = sign(secret_key, &string_to_sign);

    let mut query_params = Multimap::new();
    query_params.add(AWS_ACCESS_KEY_ID, access_key);
    query_params.add(EXPIRES, expires.to_string());
    query_params.add(SIGNATURE, signature);
    query_params
}

/// Returns signature of a base64 encoded post policy
pub fn post_policy_signature(secret_key: &str, encoded_policy: &str) -> String {
    sign(secret_key, encoded_policy)
}
