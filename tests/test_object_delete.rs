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
use s3lite::s3::error::Error;
use s3lite::s3::response::DeleteObjectResponse;
use s3lite::s3::response_traits::HasObject;
use s3lite::s3::types::S3Api;
use s3lite_common::mock_server::MockResponse;
use s3lite_common::test_context::TestContext;
use s3lite_common::utils::rand_object_name;

#[tokio::test]
async fn delete_object() {
    let ctx = TestContext::new_from_env().await;
    let object_name = rand_object_name();
    ctx.server
        .respond_with(MockResponse::new(StatusCode::NO_CONTENT));

    let resp: DeleteObjectResponse = ctx
        .client
        .object(&object_name)
        .delete()
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.object(), object_name);

    let req = ctx.server.last_request();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(req.path, ctx.object_path(&object_name));
    ctx.assert_signed(&req);
}

#[tokio::test]
async fn delete_object_with_whitespace() {
    let ctx = TestContext::new_from_env().await;
    let object_name = rand_object_name();
    ctx.server
        .respond_with(MockResponse::new(StatusCode::NO_CONTENT));

    ctx.client
        .object(&format!(" /{object_name}/ "))
        .delete()
        .build()
        .send()
        .await
        .unwrap();

    let req = ctx.server.last_request();
    assert_eq!(req.path, ctx.object_path(&object_name));
}

#[tokio::test]
async fn delete_object_requires_no_content() {
    let ctx = TestContext::new_from_env().await;
    ctx.server.respond_with(MockResponse::new(StatusCode::OK));

    let err = ctx
        .client
        .object("a.txt")
        .delete()
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(200));
}

#[tokio::test]
async fn delete_object_access_denied() {
    let ctx = TestContext::new_from_env().await;
    ctx.server.respond_with(MockResponse::s3_error(
        StatusCode::FORBIDDEN,
        "AccessDenied",
        "Access Denied",
    ));

    let err = ctx
        .client
        .object("a.txt")
        .delete()
        .build()
        .send()
        .await
        .unwrap_err();
    match err {
        Error::S3Server(e) => {
            let resp = e.response();
            assert_eq!(resp.status_code, 403);
            assert_eq!(resp.code(), "AccessDenied");
            assert_eq!(resp.message, "Access Denied");
            assert_eq!(resp.request_id, "4442587FB7D0A2F9");
        }
        e => panic!("unexpected error: {e:?}"),
    }
}
