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

use http::{Method, StatusCode};
use s3lite::s3::error::{Error, ValidationErr};
use s3lite::s3::response::ObjectExistsResponse;
use s3lite::s3::response_traits::{HasBucket, HasObject};
use s3lite::s3::types::S3Api;
use s3lite_common::mock_server::MockResponse;
use s3lite_common::test_context::TestContext;
use s3lite_common::utils::rand_object_name;

#[tokio::test]
async fn object_exists() {
    let ctx = TestContext::new_from_env().await;
    let object_name = rand_object_name();
    ctx.server.respond_with(MockResponse::new(StatusCode::OK));

    let resp: ObjectExistsResponse = ctx
        .client
        .object(&object_name)
        .exists()
        .build()
        .send()
        .await
        .unwrap();
    assert!(resp.exists());
    assert_eq!(resp.bucket(), ctx.bucket);
    assert_eq!(resp.object(), object_name);

    let req = ctx.server.last_request();
    assert_eq!(req.method, Method::HEAD);
    assert_eq!(req.path, ctx.object_path(&object_name));
    assert!(req.query.is_none());
    ctx.assert_signed(&req);
}

#[tokio::test]
async fn object_exists_not_found_is_not_an_error() {
    let ctx = TestContext::new_from_env().await;
    ctx.server.respond_with(MockResponse::new(StatusCode::NOT_FOUND));

    let resp = ctx
        .client
        .object(&rand_object_name())
        .exists()
        .build()
        .send()
        .await
        .unwrap();
    assert!(!resp.exists());
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn object_exists_only_for_200() {
    let ctx = TestContext::new_from_env().await;
    for status in [StatusCode::FORBIDDEN, StatusCode::NO_CONTENT] {
        ctx.server.respond_with(MockResponse::new(status));
        let resp = ctx
            .client
            .object("some/key")
            .exists()
            .build()
            .send()
            .await
            .unwrap();
        assert!(!resp.exists(), "{status}");
    }
}

#[tokio::test]
async fn object_exists_anonymous_is_unsigned() {
    let ctx = TestContext::new_from_env().await;
    let client = ctx.anonymous_client();

    let resp = client.object("public.txt").exists().build().send().await.unwrap();
    assert!(resp.exists());

    let req = ctx.server.last_request();
    assert!(req.header("authorization").is_none());
    assert!(req.header("date").is_some());
}

#[tokio::test]
async fn object_exists_rejects_dot_segments() {
    let ctx = TestContext::new_from_env().await;

    for key in ["a/../b", "./a", "a/b/.."] {
        let err = ctx
            .client
            .object(key)
            .exists()
            .build()
            .send()
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::Validation(ValidationErr::InvalidObjectName(_))),
            "{key}: {err:?}"
        );
    }
    assert!(ctx.server.requests().is_empty());
}
