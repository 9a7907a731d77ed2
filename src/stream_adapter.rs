use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Buf, Bytes};
use futures::Stream;
use tokio::io::{AsyncRead, ReadBuf};

/// Adapts a fallible [`Stream`] of byte chunks into an [`AsyncRead`], so
/// HTTP body streams and similar sources can drive a
/// [`crate::JsonSiftParser`] directly. Source errors pass through to the
/// reader unchanged.
pub struct StreamReader<S> {
    stream: S,
    current: Bytes,
}

impl<S> StreamReader<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            current: Bytes::new(),
        }
    }
}

impl<S> AsyncRead for StreamReader<S>
where
    S: Stream<Item = Result<Bytes, std::io::Error>> + Unpin,
{
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        while self.current.is_empty() {
            match Pin::new(&mut self.stream).poll_next(cx) {
                Poll::Ready(Some(Ok(chunk))) => self.current = chunk,
                Poll::Ready(Some(Err(e))) => return Poll::Ready(Err(e)),
                Poll::Ready(None) => return Poll::Ready(Ok(())),
                Poll::Pending => return Poll::Pending,
            }
        }

        let n = std::cmp::min(self.current.len(), buf.remaining());
        buf.put_slice(&self.current[..n]);
        self.current.advance(n);
        Poll::Ready(Ok(()))
    }
}
