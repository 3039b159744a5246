// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[tokio::test]
async fn test_instant_streaming_yields_one_chunk() {
    let mut response =
        StreamingResponse::new("Hello, world!".to_string(), StreamingConfig::instant());

    assert_eq!(response.next_chunk().await, Some("Hello, world!".to_string()));
    assert_eq!(response.next_chunk().await, None);
    assert!(response.is_complete());
}

#[tokio::test]
async fn test_chunked_streaming_reassembles() {
    let config = StreamingConfig {
        tokens_per_second: 1000,
        thinking_delay_ms: 0,
        min_chunk_size: 2,
        max_chunk_size: 4,
    };
    let mut response = StreamingResponse::new("Hello there!".to_string(), config);

    let mut chunks = Vec::new();
    while let Some(chunk) = response.next_chunk().await {
        chunks.push(chunk);
    }

    assert!(chunks.len() > 1);
    assert_eq!(chunks.concat(), "Hello there!");
}

#[tokio::test]
async fn test_multibyte_text_never_splits_glyphs() {
    let config = StreamingConfig {
        tokens_per_second: 1000,
        thinking_delay_ms: 0,
        min_chunk_size: 1,
        max_chunk_size: 1,
    };
    let mut response = StreamingResponse::new("a✻b✽c".to_string(), config);

    let mut out = String::new();
    while let Some(chunk) = response.next_chunk().await {
        out.push_str(&chunk);
    }
    assert_eq!(out, "a✻b✽c");
}

#[test]
fn test_skip_to_end_returns_remainder() {
    let mut response = StreamingResponse::new("Test message".to_string(), StreamingConfig::default());
    let rest = response.skip_to_end();
    assert_eq!(rest, "Test message");
    assert!(response.is_complete());
    assert_eq!(response.full_text(), "Test message");
}
