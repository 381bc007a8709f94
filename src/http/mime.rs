use std::path::Path;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Picks a content type from the file's extension.
///
/// Matching is exact and case-sensitive: `photo.JPG` is served as
/// `application/octet-stream`, not `image/jpeg`.
///
/// ```
/// # use docroot::http::mime::content_type;
/// # use std::path::Path;
/// assert_eq!(content_type(Path::new("./index.html")), "text/html");
/// assert_eq!(content_type(Path::new("./photo.JPG")), "application/octet-stream");
/// ```
pub fn content_type(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return DEFAULT_CONTENT_TYPE;
    };

    match ext {
        "html" | "htm" => "text/html",
        "txt" | "rs" => "text/plain",
        "css" => "text/css",
        "jpeg" | "jpg" => "image/jpeg",
        "gif" => "image/gif",
        "png" => "image/png",
        "bmp" => "image/bmp",
        "xml" | "xsl" => "text/xml",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
