//! Line Transport
//!
//! Newline-delimited framing on top of any async byte stream. The request
//! side is pull-based: callers ask for the next decoded request and get
//! `None` once the input is closed.
//!
//! Lines are read as raw bytes and decoded here, so a line that is not valid
//! UTF-8 becomes a protocol error for that line instead of an I/O error that
//! would end the session. Surrounding whitespace, including the `\r` of a
//! CRLF line ending, is ignored.

use crate::protocol::types::{ProtocolError, Request, Response};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::debug;

/// Lazily decodes one request per input line
pub struct RequestStream<R> {
    reader: R,

    /// Raw bytes of the line being decoded, reused between reads
    buffer: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> RequestStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }

    /// Next request, `Ok(None)` at end of input
    ///
    /// Blank lines are skipped. A line that cannot be decoded yields
    /// `Some(Err(..))` so the caller can answer it and keep reading.
    pub async fn next_request(
        &mut self,
    ) -> std::io::Result<Option<Result<Request, ProtocolError>>> {
        loop {
            self.buffer.clear();
            if self.reader.read_until(b'\n', &mut self.buffer).await? == 0 {
                return Ok(None);
            }

            let line = match std::str::from_utf8(&self.buffer) {
                Ok(line) => line.trim(),
                Err(e) => return Ok(Some(Err(ProtocolError::InvalidUtf8(e.to_string())))),
            };
            if line.is_empty() {
                continue;
            }

            debug!("📥 Request: {}", line);
            return Ok(Some(Request::parse(line)));
        }
    }
}

/// Writes one response per line, flushing after each
pub struct ResponseSink<W: AsyncWrite + Unpin> {
    writer: BufWriter<W>,
}

impl<W: AsyncWrite + Unpin> ResponseSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Write a response line and flush it
    pub async fn send(&mut self, response: &Response) -> std::io::Result<()> {
        let line = response.to_line();
        debug!("📤 Response: {}", line);

        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}
