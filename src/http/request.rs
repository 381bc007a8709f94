/// The first line of a request, split on whitespace.
///
/// Only `path` drives the response. The method is expected to be `GET` and the
/// version is whatever the client sent; neither is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// Request method, e.g. "GET"
    pub method: String,
    /// Requested path as raw bytes, exactly as sent, e.g. b"/index.html"
    pub path: Vec<u8>,
    /// Protocol version, absent for HTTP/0.9 style lines
    pub version: Option<String>,
}

/// Raw header lines in the order they were received, line terminators stripped.
///
/// Headers are observed (logged) but never split into name/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBlock {
    lines: Vec<String>,
    terminated: bool,
}

impl HeaderBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Records that the block ended on a blank line rather than end of stream.
    pub fn mark_terminated(&mut self) {
        self.terminated = true;
    }

    /// `true` if a blank line closed the block, `false` if the client hung up first.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
