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

//! Error definitions for S3 operations

use crate::s3::utils::get_text_default;
use bytes::{Buf, Bytes};
use http::{HeaderMap, StatusCode};
use std::fmt;
use thiserror::Error;
use xmltree::Element;

/// Errors detected on the client side before anything is sent to the server.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid uri: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error("invalid access control level '{0}'")]
    InvalidAcl(String),

    #[error("credentials are required to {0}")]
    MissingCredentials(&'static str),

    #[error("post policy error: {0}")]
    PostPolicyError(String),

    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    #[error("invalid value for header {name}: {source}")]
    InvalidHeaderValue {
        name: String,
        source: http::header::InvalidHeaderValue,
    },

    #[error("invalid integer value: {0}")]
    IntError(#[from] std::num::ParseIntError),
}

/// Error document returned by the server, together with the HTTP status of the response
/// that carried it.
#[derive(Clone, Debug, Default)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub status_text: String,
    pub headers: HeaderMap,
    pub code: String,
    pub message: String,
    pub resource: String,
    pub request_id: String,
    pub host_id: String,
}

impl ErrorResponse {
    /// Builds an error response from a status code, the response headers and the raw body.
    ///
    /// The body is parsed as an S3 XML error document when possible. Bodies that are empty
    /// (HEAD responses) or not XML still produce an error carrying the status text.
    pub fn from_status(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let mut resp = ErrorResponse {
            status_code: status.as_u16(),
            status_text,
            headers,
            ..Default::default()
        };

        if body.is_empty() {
            return resp;
        }

        match Element::parse(body.reader()) {
            Ok(root) => {
                resp.code = get_text_default(&root, "Code");
                resp.message = get_text_default(&root, "Message");
                resp.resource = get_text_default(&root, "Resource");
                resp.request_id = get_text_default(&root, "RequestId");
                resp.host_id = get_text_default(&root, "HostId");
            }
            Err(e) => log::debug!("error response body is not an S3 error document: {e}"),
        }
        resp
    }

    /// Returns the S3 error code, falling back to the HTTP status text when the server
    /// did not send an error document.
    pub fn code(&self) -> &str {
        if self.code.is_empty() {
            &self.status_text
        } else {
            &self.code
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status: {} {}", self.status_code, self.status_text)?;
        if !self.code.is_empty() {
            write!(f, ", code: {}", self.code)?;
        }
        if !self.message.is_empty() {
            write!(f, ", message: {}", self.message)?;
        }
        if !self.resource.is_empty() {
            write!(f, ", resource: {}", self.resource)?;
        }
        if !self.request_id.is_empty() {
            write!(f, ", request_id: {}", self.request_id)?;
        }
        Ok(())
    }
}

/// Errors reported by the server.
#[derive(Error, Debug)]
pub enum S3ServerError {
    #[error("s3 operation failed; {0}")]
    S3Error(Box<ErrorResponse>),
}

impl S3ServerError {
    pub fn response(&self) -> &ErrorResponse {
        match self {
            S3ServerError::S3Error(e) => e,
        }
    }
}

/// Top level error type of the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("cannot serialize policy document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("s3 server error: {0}")]
    S3Server(#[from] S3ServerError),

    #[error("time parse error: {0}")]
    TimeParse(#[from] chrono::ParseError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the HTTP status code when the error was reported by the server.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::S3Server(e) => Some(e.response().status_code),
            _ => None,
        }
    }
}
