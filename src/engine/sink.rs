use crate::engine::cancel::CancelToken;
use std::io::{self, Write};
use std::sync::mpsc::Sender;

/// Append-only destination for report lines. The sink adds line endings, not the caller.
pub trait OutputSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// A result row, as opposed to a header or blank separator line
    fn write_row(&mut self, line: &str) -> io::Result<()> {
        self.write_line(line)
    }
}

impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn write_row(&mut self, line: &str) -> io::Result<()> {
        (**self).write_row(line)
    }
}

/// Writes each line followed by '\n' to any `io::Write`: stdout, a file, a buffer
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}

/// Hands lines to another thread. Fails with `BrokenPipe` once the receiver is gone.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: Sender<String>,
}

impl ChannelSink {
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }
}

impl OutputSink for ChannelSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.sender
            .send(line.to_string())
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "report receiver closed"))
    }
}

/// Cancels `token` once `limit` rows have gone through to the inner sink.
#[derive(Debug)]
pub struct CancelAfterRows<S> {
    inner: S,
    remaining: usize,
    token: CancelToken,
}

impl<S: OutputSink> CancelAfterRows<S> {
    pub fn new(inner: S, limit: usize, token: CancelToken) -> Self {
        if limit == 0 {
            token.cancel();
        }
        Self {
            inner,
            remaining: limit,
            token,
        }
    }
}

impl<S: OutputSink> OutputSink for CancelAfterRows<S> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_line(line)
    }

    fn write_row(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_row(line)?;
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.token.cancel();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn test_writer_sink_adds_newlines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line("").unwrap();
        sink.write_line("header:").unwrap();
        sink.write_row("row").unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "\nheader:\nrow\n");
    }

    #[test]
    fn test_channel_sink() {
        let (sender, receiver) = channel();
        let mut sink = ChannelSink::new(sender);
        sink.write_line("one").unwrap();
        sink.write_row("two").unwrap();
        drop(sink);

        let lines: Vec<String> = receiver.iter().collect();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_channel_sink_receiver_gone() {
        let (sender, receiver) = channel();
        drop(receiver);
        let mut sink = ChannelSink::new(sender);
        let error = sink.write_line("lost").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_cancel_after_rows_ignores_headers() {
        let token = CancelToken::new();
        let mut lines = Vec::new();
        let mut sink = CancelAfterRows::new(&mut lines, 2, token.clone());

        sink.write_line("header").unwrap();
        sink.write_row("row 1").unwrap();
        assert!(!token.is_cancelled());
        sink.write_row("row 2").unwrap();
        assert!(token.is_cancelled());

        assert_eq!(lines, vec!["header", "row 1", "row 2"]);
    }

    #[test]
    fn test_cancel_after_zero_rows() {
        let token = CancelToken::new();
        let _sink = CancelAfterRows::new(Vec::new(), 0, token.clone());
        assert!(token.is_cancelled());
    }
}
