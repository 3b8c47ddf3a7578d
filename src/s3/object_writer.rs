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

//! Buffered uploader for a single object

use crate::s3::client::Object;
use crate::s3::error::Error;
use crate::s3::response::PutObjectResponse;
use crate::s3::types::S3Api;
use bytes::{BufMut, BytesMut};
use std::io;

/// Writer buffering an object's content in memory.
///
/// Nothing reaches the server until [`finalize`](Self::finalize) uploads the buffer as a
/// single signed PUT. [`abort`](Self::abort) discards it; so does dropping a writer that
/// was never finalized.
///
/// # Example
///
/// ```no_run
/// use std::io::Write;
/// use s3lite::s3::Client;
/// use s3lite::s3::creds::StaticProvider;
///
/// #[tokio::main]
/// async fn main() {
///     let client = Client::builder("my-bucket")
///         .provider(Some(StaticProvider::new("ACCESS", "SECRET")))
///         .build()
///         .unwrap();
///     let mut writer = client.object("logs/today.txt").writer();
///     writeln!(writer, "first line").unwrap();
///     writeln!(writer, "second line").unwrap();
///     writer.finalize().await.unwrap();
/// }
/// ```
#[derive(Debug)]
pub struct ObjectWriter {
    object: Object,
    content_type: Option<String>,
    buf: Option<BytesMut>,
}

impl ObjectWriter {
    pub(crate) fn new(object: Object) -> Self {
        Self {
            object,
            content_type: None,
            buf: Some(BytesMut::new()),
        }
    }

    /// Sets the `Content-Type` sent on finalize; `application/octet-stream` otherwise.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn object(&self) -> &Object {
        &self.object
    }

    /// Returns the number of bytes buffered so far
    pub fn len(&self) -> usize {
        self.buf.as_ref().map_or(0, BytesMut::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Uploads the buffered bytes as the object body.
    pub async fn finalize(mut self) -> Result<PutObjectResponse, Error> {
        let data = self.buf.take().unwrap_or_default().freeze();
        log::debug!(
            "finalizing writer of {}: {} bytes",
            self.object.key(),
            data.len()
        );

        self.object
            .put(data)
            .content_type(self.content_type.take())
            .build()
            .send()
            .await
    }

    /// Discards the buffered bytes without contacting the server.
    pub fn abort(mut self) {
        self.buf = None;
    }
}

impl io::Write for ObjectWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        match self.buf.as_mut() {
            Some(buf) => {
                buf.put_slice(data);
                Ok(data.len())
            }
            None => Err(io::Error::other("object writer is closed")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ObjectWriter {
    fn drop(&mut self) {
        if let Some(buf) = self.buf.take() {
            log::warn!(
                "object writer of {} dropped without finalize; discarding {} bytes",
                self.object.key(),
                buf.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::s3::Client;
    use std::io::Write;

    #[test]
    fn test_writer_buffers() {
        let client = Client::builder("mybucket").build().unwrap();
        let mut writer = client.object("a.txt").writer();
        assert!(writer.is_empty());

        writer.write_all(b"hello ").unwrap();
        write!(writer, "{}", "world").unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.len(), 11);
        assert_eq!(writer.object().key(), "a.txt");

        writer.abort();
    }

    #[test]
    fn test_writer_drop_discards() {
        let client = Client::builder("mybucket").build().unwrap();
        let mut writer = client.object("a.txt").writer();
        writer.write_all(b"data").unwrap();
        drop(writer);
    }
}
