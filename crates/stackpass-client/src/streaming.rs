use std::collections::VecDeque;
use std::pin::Pin;

use futures::{Stream, StreamExt};
use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Marker prefixing every SSE data frame.
const DATA_PREFIX: &str = "data: ";

/// Literal payload signalling the end of the stream.
const DONE_SENTINEL: &str = "[DONE]";

/// One decoded unit of a streaming chat response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Next fragment of generated text, in arrival order.
    Message { content: String },

    /// Termination sentinel; nothing follows.
    Done,
}

/// Wire shape of one streaming chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatStreamChunk {
    pub choices: Vec<StreamChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamChoice {
    #[serde(default)]
    pub delta: Delta,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Delta {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatStreamChunk {
    /// Content fragment of the first choice, if this chunk carries one.
    pub fn content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.delta.content.as_deref())
    }
}

/// Result of framing one line of the SSE body.
#[derive(Debug)]
pub enum SseLine {
    /// Not a data frame (blank line, comment, other SSE field); no effect.
    Skip,
    /// Termination sentinel; stop reading.
    Done,
    /// Data frame with a decoded chunk.
    Chunk(ChatStreamChunk),
}

/// Frame and decode a single line of the SSE body.
///
/// Malformed JSON in a data frame is an error, not a skip: a frame we cannot
/// decode means the protocol is not what we think it is.
pub fn decode_sse_line(line: &str) -> Result<SseLine> {
    let line = line.trim();

    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return Ok(SseLine::Skip);
    };

    if payload.trim() == DONE_SENTINEL {
        return Ok(SseLine::Done);
    }

    let chunk: ChatStreamChunk = serde_json::from_str(payload)?;
    Ok(SseLine::Chunk(chunk))
}

/// Decode a streaming chat response into content fragments.
///
/// Yields one `Message` per non-empty content delta, in arrival order, and a
/// final `Done` when the `[DONE]` sentinel arrives. The sentinel stops
/// reading immediately; stream exhaustion without one ends the stream
/// without a `Done`, which callers treat the same way. Dropping the returned
/// stream drops the response and releases the connection.
pub fn parse_chat_sse_stream(
    response: Response,
) -> Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>> {
    let stream = response.bytes_stream();

    Box::pin(async_stream::stream! {
        let mut byte_chunks = Box::pin(stream);
        let mut buffer: VecDeque<u8> = VecDeque::with_capacity(8192);

        'read: while let Some(chunk_result) = byte_chunks.next().await {
            let bytes = match chunk_result {
                Ok(bytes) => bytes,
                Err(e) => {
                    yield Err(Error::Transport(e));
                    break 'read;
                }
            };

            buffer.extend(bytes);

            // Drain every complete line currently buffered
            while let Some(newline_pos) = buffer.iter().position(|&b| b == b'\n') {
                let line_bytes: Vec<u8> = buffer.drain(..=newline_pos).collect();

                let Ok(line) = std::str::from_utf8(&line_bytes) else {
                    continue;
                };

                match decode_sse_line(line) {
                    Ok(SseLine::Skip) => {}
                    Ok(SseLine::Done) => {
                        yield Ok(StreamEvent::Done);
                        break 'read;
                    }
                    Ok(SseLine::Chunk(chunk)) => {
                        if let Some(content) = chunk.content() {
                            if !content.is_empty() {
                                yield Ok(StreamEvent::Message {
                                    content: content.to_string(),
                                });
                            }
                        }
                    }
                    Err(e) => {
                        yield Err(e);
                        break 'read;
                    }
                }
            }
        }
    })
}
