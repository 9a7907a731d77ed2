use std::collections::VecDeque;

use bytes::BytesMut;
use serde::de::DeserializeOwned;
use simd_json::OwnedValue;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_stream::Stream;
use tracing::{debug, instrument};

use crate::scanner::DedupScanner;
use crate::utf8::Utf8Chunker;

#[derive(Debug, thiserror::Error)]
pub enum JsonSiftError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("deserialization error: {0}")]
    Deserialize(#[from] simd_json::Error),
}

pub struct ParserConfig {
    /// Bytes requested from the reader per fill.
    pub read_buffer_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            read_buffer_size: 8 * 1024,
        }
    }
}

/// Pull-style front end over an [`AsyncRead`] byte source.
///
/// Reads raw bytes, reassembles UTF-8 across read boundaries, and feeds the
/// text to a [`DedupScanner`]. Values come out strictly in the order their
/// closing brace arrived. The parser buffers only what one fill produced;
/// a consumer that stops calling [`next`](Self::next) stalls the reads
/// rather than piling up decoded values.
///
/// Dropping the parser (or a stream made from it) releases the carry-over
/// buffer and fingerprint set. Content still unterminated at end of stream
/// is discarded without an error; only a debug diagnostic records the loss.
pub struct JsonSiftParser<R> {
    reader: R,
    read_buf: BytesMut,
    chunker: Utf8Chunker,
    scanner: DedupScanner,
    ready: VecDeque<OwnedValue>,
    eof: bool,
    config: ParserConfig,
}

impl<R: AsyncRead + Unpin> JsonSiftParser<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ParserConfig::default())
    }

    pub fn with_config(reader: R, config: ParserConfig) -> Self {
        Self {
            reader,
            read_buf: BytesMut::with_capacity(config.read_buffer_size),
            chunker: Utf8Chunker::new(),
            scanner: DedupScanner::new(),
            ready: VecDeque::new(),
            eof: false,
            config,
        }
    }

    /// Returns the next distinct decoded object, or `None` once the source
    /// is exhausted and no complete object remains.
    pub async fn next(&mut self) -> Result<Option<OwnedValue>, JsonSiftError> {
        loop {
            if let Some(value) = self.ready.pop_front() {
                return Ok(Some(value));
            }
            if self.eof {
                return Ok(None);
            }
            self.fill().await?;
        }
    }

    /// Like [`next`](Self::next), but deserializes the emitted object into
    /// `T`.
    pub async fn next_typed<T: DeserializeOwned>(
        &mut self,
    ) -> Result<Option<T>, JsonSiftError> {
        match self.next().await? {
            Some(value) => Ok(Some(simd_json::serde::from_owned_value(value)?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn fill(&mut self) -> Result<(), JsonSiftError> {
        self.read_buf.clear();
        self.read_buf.reserve(self.config.read_buffer_size);
        let bytes_read = self.reader.read_buf(&mut self.read_buf).await?;

        if bytes_read == 0 {
            self.eof = true;
            let tail = self.chunker.finish();
            if !tail.is_empty() {
                self.ready.extend(self.scanner.push(&tail));
            }
            let leftover = self.scanner.pending_len();
            if leftover > 0 {
                debug!(bytes = leftover, "unterminated content dropped at end of stream");
            }
            return Ok(());
        }

        let text = self.chunker.push(&self.read_buf);
        if !text.is_empty() {
            self.ready.extend(self.scanner.push(&text));
        }
        Ok(())
    }

    /// Consumes the parser into a lazy, finite stream of decoded objects.
    /// Upstream I/O errors surface as stream items; dropping the stream
    /// releases the source and all scan state.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<OwnedValue, JsonSiftError>> {
        async_stream::try_stream! {
            while let Some(value) = self.next().await? {
                yield value;
            }
        }
    }
}
