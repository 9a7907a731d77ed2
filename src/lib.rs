//! # json_sift
//!
//! Incrementally extracts well-formed JSON objects from an arbitrarily
//! chunked stream (an HTTP response body, a websocket feed) and emits each
//! distinct object exactly once, in arrival order. Objects split across
//! chunk boundaries are reassembled, several objects in one chunk all come
//! out, and byte-identical repeats (heartbeats, poll responses) are
//! suppressed by content fingerprint. Only `{...}`-rooted objects are
//! recognized; a malformed span is skipped and logged rather than failing
//! the stream.
//!
//! ## Example
//!
//! ```no_run
//! use bytes::Bytes;
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Simulate a network source delivering an object in two fragments,
//!     // then resending it whole.
//!     let (tx, rx) = mpsc::channel::<Bytes>(10);
//!     tokio::spawn(async move {
//!         tx.send(Bytes::from_static(b"{\"id\": 1, \"na")).await.unwrap();
//!         tx.send(Bytes::from_static(b"me\": \"Alice\"}")).await.unwrap();
//!         tx.send(Bytes::from_static(b"{\"id\": 1, \"name\": \"Alice\"}"))
//!             .await
//!             .unwrap();
//!     });
//!
//!     let reader = json_sift::ChannelReader::new(rx);
//!     let mut parser = json_sift::JsonSiftParser::new(reader);
//!
//!     // Prints the reassembled object once; the resend is suppressed.
//!     while let Some(value) = parser.next().await? {
//!         println!("{}", value);
//!     }
//!     Ok(())
//! }
//! ```

#[cfg(test)]
mod tests;

mod fingerprint;
pub use fingerprint::*;

mod decode;
pub use decode::*;

mod extract;
pub use extract::*;

mod scanner;
pub use scanner::*;

mod utf8;
pub use utf8::*;

mod reader;
pub use reader::*;

mod stream_adapter;
pub use stream_adapter::*;

mod async_parser;
pub use async_parser::*;
