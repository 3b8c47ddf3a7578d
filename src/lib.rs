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

//! # s3lite
//!
//! A small, bucket-scoped client for Amazon S3 compatible object storage that
//! authenticates with signature version 2 (HMAC-SHA1).
//!
//! A [`s3::Client`] is bound to a single bucket and a set of credentials. Object
//! handles obtained from [`s3::Client::object`] share the client by reference and
//! expose the object operations as request builders:
//!
//! ```no_run
//! use s3lite::s3::Client;
//! use s3lite::s3::creds::StaticProvider;
//! use s3lite::s3::types::S3Api;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::builder("my-bucket")
//!         .provider(Some(StaticProvider::new("ACCESS", "SECRET")))
//!         .build()
//!         .unwrap();
//!
//!     let object = client.object("photos/puppy.jpg");
//!     let exists = object.exists().build().send().await.unwrap();
//!     println!("object exists: {}", exists.exists());
//! }
//! ```
//!
//! Besides the dispatched requests, the client produces
//! - pre-signed URLs granting time-limited access ([`s3::client::Object::presigned_url`])
//! - signed form upload URLs for direct browser uploads ([`s3::client::Object::form_upload_url`])
//!
//! The signing engine itself lives in [`s3::signer`] and is usable without a client.

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
