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

use chrono::{TimeZone, Utc};
use http::{Method, StatusCode};
use s3lite::s3::error::Error;
use s3lite::s3::response::StatObjectResponse;
use s3lite::s3::response_traits::HasEtagFromHeaders;
use s3lite::s3::types::S3Api;
use s3lite_common::mock_server::MockResponse;
use s3lite_common::test_context::TestContext;
use s3lite_common::utils::rand_object_name;

const LAST_MODIFIED: &str = "Fri, 24 May 2013 00:00:00 GMT";

fn object_metadata() -> MockResponse {
    MockResponse::new(StatusCode::OK)
        .header("Content-Type", "text/plain")
        .header("Content-Length", "11")
        .header("ETag", "\"5eb63bbbe01eeed093cb22bb8f5acdc3\"")
        .header("Last-Modified", LAST_MODIFIED)
        .header("Date", "Sat, 25 May 2013 10:30:00 GMT")
        .body("hello world")
}

#[tokio::test]
async fn stat_object() {
    let ctx = TestContext::new_from_env().await;
    let object_name = rand_object_name();
    ctx.server.respond_with(object_metadata());

    let resp: StatObjectResponse = ctx
        .client
        .object(&object_name)
        .stat()
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.content_length().unwrap(), 11);
    assert_eq!(resp.content_type(), "text/plain");
    assert_eq!(resp.etag(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
    assert_eq!(
        resp.last_modified().unwrap(),
        Utc.with_ymd_and_hms(2013, 5, 24, 0, 0, 0).unwrap()
    );
    assert_eq!(
        resp.date().unwrap(),
        Utc.with_ymd_and_hms(2013, 5, 25, 10, 30, 0).unwrap()
    );

    let req = ctx.server.last_request();
    assert_eq!(req.method, Method::HEAD);
    assert_eq!(req.path, ctx.object_path(&object_name));
    ctx.assert_signed(&req);
}

#[tokio::test]
async fn stat_object_malformed_last_modified() {
    let ctx = TestContext::new_from_env().await;
    ctx.server.respond_with(
        MockResponse::new(StatusCode::OK).header("Last-Modified", "yesterday"),
    );

    let resp = ctx
        .client
        .object("a.txt")
        .stat()
        .build()
        .send()
        .await
        .unwrap();
    assert!(matches!(resp.last_modified(), Err(Error::TimeParse(_))));
}

#[tokio::test]
async fn stat_object_not_found() {
    let ctx = TestContext::new_from_env().await;
    ctx.server
        .respond_with(MockResponse::new(StatusCode::NOT_FOUND));

    let err = ctx
        .client
        .object("missing.txt")
        .stat()
        .build()
        .send()
        .await
        .unwrap_err();
    match err {
        Error::S3Server(e) => {
            assert_eq!(e.response().status_code, 404);
            assert_eq!(e.response().code(), "Not Found");
        }
        e => panic!("unexpected error: {e:?}"),
    }
}
