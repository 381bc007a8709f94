//! Maps request paths onto the document root.
//!
//! Resolution is plain concatenation of the root and the requested path, so
//! `..` segments are not filtered and can reach outside the root. Callers
//! exposing this server beyond a trusted network should put it behind
//! something that normalizes paths.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tokio::fs::File;
use tracing::debug;

/// Appends the raw `requested` bytes to the textual form of `root`.
///
/// ```
/// # use docroot::http::resolve::resolve_path;
/// # use std::path::{Path, PathBuf};
/// assert_eq!(resolve_path(Path::new("."), b"/index.html"), PathBuf::from("./index.html"));
/// ```
pub fn resolve_path(root: &Path, requested: &[u8]) -> PathBuf {
    let mut joined: OsString = root.as_os_str().to_os_string();
    joined.push(bytes_to_os_str(requested));
    PathBuf::from(joined)
}

/// Raw bytes of a path, the inverse of how requested paths are resolved.
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    os_str_to_bytes(path.as_os_str())
}

#[cfg(unix)]
fn bytes_to_os_str(raw: &[u8]) -> Cow<'_, OsStr> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(OsStr::from_bytes(raw))
}

// Paths are not byte strings here; fall back to a lossy decode.
#[cfg(not(unix))]
fn bytes_to_os_str(raw: &[u8]) -> Cow<'_, OsStr> {
    match String::from_utf8_lossy(raw) {
        Cow::Borrowed(s) => Cow::Borrowed(OsStr::new(s)),
        Cow::Owned(s) => Cow::Owned(OsString::from(s)),
    }
}

#[cfg(unix)]
fn os_str_to_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(s.as_bytes())
}

#[cfg(not(unix))]
fn os_str_to_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    match s.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// Opens `path` if it names an existing regular file.
///
/// Missing paths, directories, and files that cannot be opened all yield
/// `None`; the caller answers those with a 404.
pub async fn open_regular_file(path: &Path) -> Option<File> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            debug!(path = %path.display(), "not a regular file");
            return None;
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "stat failed");
            return None;
        }
    }

    match File::open(path).await {
        Ok(file) => Some(file),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "open failed");
            None
        }
    }
}
