use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::http::request::{HeaderBlock, RequestLine};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("request line is blank")]
    Empty,
    #[error("request line has no path: {0:?}")]
    MissingPath(String),
}

/// Reads one line including its `\n` terminator, as raw bytes.
///
/// Returns `None` once the stream is exhausted. A trailing fragment without a
/// terminator is still returned as a line.
pub async fn read_line<R>(reader: &mut R) -> io::Result<Option<Vec<u8>>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let n = reader.read_until(b'\n', &mut buf).await?;

    if n == 0 {
        return Ok(None);
    }

    Ok(Some(buf))
}

/// Consumes header lines up to and including the blank separator line.
///
/// Stops at end of stream as well, so a client that never sends the blank
/// line cannot keep this loop alive past its disconnect.
pub async fn read_header_block<R>(reader: &mut R) -> io::Result<HeaderBlock>
where
    R: AsyncBufRead + Unpin,
{
    let mut block = HeaderBlock::new();

    while let Some(line) = read_line(reader).await? {
        if is_blank_line(&line) {
            block.mark_terminated();
            break;
        }

        let header = display_line(&line);
        info!(header = %header, "header line");
        block.push(header);
    }

    Ok(block)
}

/// Splits a request line on ASCII whitespace. The second token is the path,
/// kept byte-for-byte so it can name files that are not valid UTF-8.
pub fn parse_request_line(line: &[u8]) -> Result<RequestLine, ParseError> {
    let mut parts = line
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty());

    let method = parts.next().ok_or(ParseError::Empty)?;
    let path = parts
        .next()
        .ok_or_else(|| ParseError::MissingPath(display_line(line)))?;
    let version = parts.next().map(|v| String::from_utf8_lossy(v).into_owned());

    Ok(RequestLine {
        method: String::from_utf8_lossy(method).into_owned(),
        path: path.to_vec(),
        version,
    })
}

pub fn strip_line_ending(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r\n")
        .or_else(|| line.strip_suffix(b"\n"))
        .unwrap_or(line)
}

/// Line without its terminator, decoded lossily. For logs only.
pub fn display_line(line: &[u8]) -> String {
    String::from_utf8_lossy(strip_line_ending(line)).into_owned()
}

// A lone `\n` counts too: line readers treat it the same as CRLF.
fn is_blank_line(line: &[u8]) -> bool {
    line == b"\r\n" || line == b"\n"
}
