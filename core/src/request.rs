// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Request helpers shared by signing algorithms.

use std::collections::BTreeMap;
use std::mem;
use std::str::FromStr;

use bytes::{BufMut, Bytes, BytesMut};
use http::uri::PathAndQuery;
use http::Uri;
use http_body::Body;
use http_body_util::BodyExt;

use crate::{Error, Result};

/// Query parameters keyed by name, each name holding one or more values.
///
/// The map is ordered so that encoding is deterministic.
pub type QueryParams = BTreeMap<String, Vec<String>>;

/// Read the whole request body and put an identical, fresh body back.
///
/// Reading a body consumes it, so the captured bytes are used to rebuild the
/// body before returning. A request whose body is already at end of stream is
/// left untouched and yields empty bytes.
///
/// If the body stream fails, the bytes read so far are put back as the body
/// and the error is returned.
pub async fn extract_body<B>(req: &mut http::Request<B>) -> Result<Bytes>
where
    B: Body + From<Bytes> + Default + Unpin,
    B::Error: Into<anyhow::Error>,
{
    if req.body().is_end_stream() {
        return Ok(Bytes::new());
    }

    let mut body = mem::take(req.body_mut());
    let mut content = BytesMut::new();
    while let Some(frame) = body.frame().await {
        match frame {
            Ok(frame) => {
                // Trailers carry no payload.
                if let Ok(data) = frame.into_data() {
                    content.put(data);
                }
            }
            Err(e) => {
                let read = content.len();
                *req.body_mut() = B::from(content.freeze());
                return Err(Error::unexpected("failed to read request body")
                    .with_source(e)
                    .with_context(format!("bytes_read: {read}")));
            }
        }
    }

    let content = content.freeze();
    *req.body_mut() = B::from(content.clone());
    Ok(content)
}

/// Merge the request's query into `params` and write the union back.
///
/// Every key already present on the request replaces the same key in
/// `params`, so request values win over caller supplied defaults. A key
/// repeated on the request keeps only its last value. The result
/// is encoded as `application/x-www-form-urlencoded` sorted by key. An empty
/// union removes the query string.
pub fn merge_query_params(
    parts: &mut http::request::Parts,
    mut params: QueryParams,
) -> Result<()> {
    let mut uri_parts = mem::take(&mut parts.uri).into_parts();
    let paq = uri_parts
        .path_and_query
        .take()
        .unwrap_or_else(|| PathAndQuery::from_static("/"));

    let mut existing = QueryParams::new();
    if let Some(query) = paq.query() {
        for (k, v) in form_urlencoded::parse(query.as_bytes()) {
            existing.insert(k.into_owned(), vec![v.into_owned()]);
        }
    }
    params.extend(existing);

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (k, values) in &params {
        for v in values {
            serializer.append_pair(k, v);
        }
    }
    let query = serializer.finish();

    let mut s = paq.path().to_string();
    if !query.is_empty() {
        s.reserve(query.len() + 1);
        s.push('?');
        s.push_str(&query);
    }
    uri_parts.path_and_query = Some(PathAndQuery::from_str(&s)?);
    parts.uri = Uri::from_parts(uri_parts)?;

    Ok(())
}
