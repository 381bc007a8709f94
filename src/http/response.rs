use std::path::Path;

use bytes::{BufMut, Bytes, BytesMut};
use tokio::fs::File;

use crate::http::resolve::path_bytes;

/// HTTP status codes the server can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docroot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Entity body of a response.
#[derive(Debug)]
pub enum Body {
    /// An opened file, streamed to the client in fixed-size chunks
    File(File),
    /// A generated page held in memory
    Html(Bytes),
}

/// A response ready to be written: status line, one content-type line, body.
///
/// There is no `Content-Length`; closing the connection marks the end of the body.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Body,
}

impl Response {
    /// 200 OK carrying the contents of `file`.
    pub fn file(file: File, content_type: &'static str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type,
            body: Body::File(file),
        }
    }

    /// 404 page naming the resolved path that was not found.
    pub fn not_found(path: &Path) -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: "text/html",
            body: Body::Html(not_found_page(path)),
        }
    }
}

// The path goes in byte-for-byte so the client sees what it asked for.
fn not_found_page(path: &Path) -> Bytes {
    let mut page = BytesMut::with_capacity(128);
    page.put_slice(b"<html>\n<head>\n<title>Error 404</title>\n</head>\n<body>\n\"");
    page.put_slice(&path_bytes(path));
    page.put_slice(b"\" Not Found</body>\n</html>\n");
    page.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_path() {
        let response = Response::not_found(Path::new("./missing.html"));

        assert_eq!(response.status, StatusCode::NotFound);
        assert_eq!(response.content_type, "text/html");

        let Body::Html(body) = response.body else {
            panic!("expected an html body");
        };
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("\"./missing.html\" Not Found"));
        assert!(text.starts_with("<html>"));
    }

    #[cfg(unix)]
    #[test]
    fn not_found_keeps_raw_path_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(std::ffi::OsStr::from_bytes(b"./\xff.txt"));
        let Body::Html(body) = Response::not_found(path).body else {
            panic!("expected an html body");
        };

        let expected = b"\"./\xff.txt\" Not Found";
        assert!(body.windows(expected.len()).any(|w| w == expected));
    }

    #[test]
    fn reason_phrases() {
        assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
        assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    }
}
