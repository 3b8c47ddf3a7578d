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

//! Various utility and helper functions

use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use xmltree::Element;

use crate::s3::error::ValidationErr;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Encodes data using base64 algorithm
pub fn b64_encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Gets base64 encoded MD5 hash of given data, as sent in the `Content-MD5` header
pub fn md5sum_hash(data: &[u8]) -> String {
    b64_encode(md5::compute(data).as_slice())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets HTTP header value of given time (RFC 1123, always GMT)
pub fn to_http_header_value(time: UtcTime) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parses HTTP header value to time
pub fn from_http_header_value(s: &str) -> Result<UtcTime, ParseError> {
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(
        NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S GMT")?,
        Utc,
    ))
}

/// Gets ISO8601 UTC formatted value of given time
pub fn to_iso8601utc(time: UtcTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S.%3fZ").to_string()
}

/// Bytes left as-is by [`query_escape`]: `A-Z a-z 0-9 - _ . ~`.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &UNRESERVED.remove(b'/');

/// Escapes a string for use as a query component.
///
/// Unreserved bytes are kept, a space becomes `+` and every other byte becomes `%XX`.
pub fn query_escape(s: &str) -> String {
    let escaped: String = utf8_percent_encode(s, UNRESERVED).collect();
    // '%' itself is escaped, so "%20" can only stand for a space here.
    escaped.replace("%20", "+")
}

/// Escapes an object key for use in a request path and in a canonical resource.
///
/// Every `/`-separated segment is escaped on its own so the separators survive, and the
/// `+` that query escaping produces for a space is rewritten to `%20`: a `+` in a path
/// segment means a literal plus to the server.
///
/// ```
/// use s3lite::s3::utils::url_safe_key;
/// assert_eq!(url_safe_key("a b/c+d"), "a%20b/c%2Bd");
/// ```
pub fn url_safe_key(key: &str) -> String {
    key.split('/')
        .map(query_escape)
        .collect::<Vec<_>>()
        .join("/")
        .replace('+', "%20")
}

/// Percent-encodes an object key for a URL path, leaving `/` untouched.
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Normalizes an object key by trimming leading and trailing slashes and spaces.
pub fn normalize_object_key(key: &str) -> String {
    key.trim_matches(|c| c == ' ' || c == '/').to_string()
}

/// Validates given bucket name
///
/// With `strict` set, the name must also be usable as a DNS label, which virtual-hosted
/// addressing requires.
pub fn check_bucket_name(bucket_name: &str, strict: bool) -> Result<(), ValidationErr> {
    if bucket_name.trim().is_empty() {
        return Err(ValidationErr::InvalidBucketName(
            "bucket name cannot be empty".into(),
        ));
    }

    if bucket_name.len() < 3 {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name '{bucket_name}' cannot be less than 3 characters"
        )));
    }

    if bucket_name.len() > 63 {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name '{bucket_name}' cannot be greater than 63 characters"
        )));
    }

    lazy_static! {
        static ref IPV4_REGEX: Regex = Regex::new(r"^((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])$").unwrap();
        static ref VALID_BUCKET_NAME_REGEX: Regex =
            Regex::new("^[A-Za-z0-9][A-Za-z0-9\\.\\-_:]{1,61}[A-Za-z0-9]$").unwrap();
        static ref VALID_BUCKET_NAME_STRICT_REGEX: Regex =
            Regex::new("^[a-z0-9][a-z0-9\\.\\-]{1,61}[a-z0-9]$").unwrap();
    }

    if IPV4_REGEX.is_match(bucket_name) {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name '{bucket_name}' cannot be an IP address"
        )));
    }

    if bucket_name.contains("..") || bucket_name.contains(".-") || bucket_name.contains("-.") {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name '{bucket_name}' contains invalid successive characters '..', '.-' or '-.'"
        )));
    }

    let valid = if strict {
        VALID_BUCKET_NAME_STRICT_REGEX.is_match(bucket_name)
    } else {
        VALID_BUCKET_NAME_REGEX.is_match(bucket_name)
    };
    if !valid {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name '{bucket_name}' does not follow S3 standards"
        )));
    }

    Ok(())
}

/// Validates a normalized object key
pub fn check_object_name(object_name: &str) -> Result<(), ValidationErr> {
    if object_name.is_empty() {
        return Err(ValidationErr::InvalidObjectName(
            "object name cannot be empty".into(),
        ));
    }
    if object_name.len() > 1024 {
        return Err(ValidationErr::InvalidObjectName(format!(
            "object name '{object_name}' cannot be greater than 1024 bytes"
        )));
    }
    // HTTP clients collapse these segments, so the path on the wire would not be the
    // signed one.
    if object_name.split('/').any(|s| s == "." || s == "..") {
        return Err(ValidationErr::InvalidObjectName(format!(
            "object name '{object_name}' cannot contain '.' or '..' path segments"
        )));
    }
    Ok(())
}

/// Gets default text value of given XML element for given tag.
pub fn get_text_default(element: &Element, tag: &str) -> String {
    element.get_child(tag).map_or(String::new(), |v| {
        v.get_text().unwrap_or_default().to_string()
    })
}
