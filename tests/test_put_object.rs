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

use bytes::Bytes;
use http::{Method, StatusCode};
use s3lite::s3::error::{Error, ValidationErr};
use s3lite::s3::response::PutObjectResponse;
use s3lite::s3::response_traits::HasEtagFromHeaders;
use s3lite::s3::types::S3Api;
use s3lite::s3::utils::md5sum_hash;
use s3lite_common::mock_server::MockResponse;
use s3lite_common::test_context::TestContext;
use s3lite_common::utils::rand_object_name;
use std::io::Write;

#[tokio::test]
async fn put_object() {
    let ctx = TestContext::new_from_env().await;
    let object_name = rand_object_name();
    ctx.server.respond_with(
        MockResponse::new(StatusCode::OK).header("ETag", "\"5eb63bbbe01eeed093cb22bb8f5acdc3\""),
    );

    let resp: PutObjectResponse = ctx
        .client
        .object(&object_name)
        .put("hello world")
        .content_type(Some("text/plain".to_string()))
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.etag(), "5eb63bbbe01eeed093cb22bb8f5acdc3");

    let req = ctx.server.last_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.path, ctx.object_path(&object_name));
    assert_eq!(req.body, Bytes::from_static(b"hello world"));
    assert_eq!(req.header("content-type"), Some("text/plain"));
    assert_eq!(req.header("content-md5"), Some(md5sum_hash(b"hello world").as_str()));
    ctx.assert_signed(&req);
}

#[tokio::test]
async fn put_object_default_content_type() {
    let ctx = TestContext::new_from_env().await;

    ctx.client
        .object("blob.bin")
        .put(vec![0u8, 1, 2, 3])
        .build()
        .send()
        .await
        .unwrap();

    let req = ctx.server.last_request();
    assert_eq!(req.header("content-type"), Some("application/octet-stream"));
    assert_eq!(req.body.len(), 4);
    ctx.assert_signed(&req);
}

#[tokio::test]
async fn put_object_special_characters() {
    let ctx = TestContext::new_from_env().await;

    ctx.client
        .object("a b/c+d")
        .put("x")
        .build()
        .send()
        .await
        .unwrap();

    let req = ctx.server.last_request();
    assert_eq!(req.path, ctx.object_path("a%20b/c%2Bd"));
    ctx.assert_signed(&req);
}

#[tokio::test]
async fn put_object_rejected() {
    let ctx = TestContext::new_from_env().await;
    ctx.server.respond_with(MockResponse::s3_error(
        StatusCode::FORBIDDEN,
        "SignatureDoesNotMatch",
        "The request signature we calculated does not match the signature you provided.",
    ));

    let err = ctx
        .client
        .object("a.txt")
        .put("data")
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(403));
}

#[tokio::test]
async fn put_object_rejects_invalid_header_value() {
    let ctx = TestContext::new_from_env().await;

    let err = ctx
        .client
        .object("a.txt")
        .put("data")
        .content_type(Some("text/plain\r\nX-Injected: 1".to_string()))
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            Error::Validation(ValidationErr::InvalidHeaderValue { ref name, .. })
                if name == "Content-Type"
        ),
        "{err:?}"
    );
    assert!(ctx.server.requests().is_empty());
}

#[tokio::test]
async fn object_writer_rejects_invalid_content_type() {
    let ctx = TestContext::new_from_env().await;

    let mut writer = ctx
        .client
        .object("a.txt")
        .writer()
        .content_type("text/plain\nX-Injected: 1");
    writer.write_all(b"data").unwrap();

    let err = writer.finalize().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidHeaderValue { .. })
    ));
    assert!(ctx.server.requests().is_empty());
}

#[tokio::test]
async fn object_writer_finalize() {
    let ctx = TestContext::new_from_env().await;
    let object_name = rand_object_name();

    let mut writer = ctx
        .client
        .object(&object_name)
        .writer()
        .content_type("text/plain");
    writeln!(writer, "first line").unwrap();
    writer.write_all(b"second line\n").unwrap();
    assert!(ctx.server.requests().is_empty());

    writer.finalize().await.unwrap();

    let requests = ctx.server.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.path, ctx.object_path(&object_name));
    assert_eq!(req.body, Bytes::from_static(b"first line\nsecond line\n"));
    assert_eq!(req.header("content-type"), Some("text/plain"));
    ctx.assert_signed(req);
}

#[tokio::test]
async fn object_writer_abort_and_drop() {
    let ctx = TestContext::new_from_env().await;

    let mut writer = ctx.client.object("aborted.txt").writer();
    writer.write_all(b"discarded").unwrap();
    writer.abort();

    let mut writer = ctx.client.object("dropped.txt").writer();
    writer.write_all(b"discarded").unwrap();
    drop(writer);

    assert!(ctx.server.requests().is_empty());
}
