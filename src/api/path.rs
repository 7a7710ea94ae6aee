//! Raw path segment lookup.
//!
//! axum's `Path` rejects captures that are not valid UTF-8 once decoded.
//! Handlers here accept any segment, so they read it from the request URI
//! and decode it lossily.

use percent_encoding::percent_decode_str;

/// Percent-decoded segment `index` of `path`, counting the empty segment
/// before the leading `/` as 0. Invalid UTF-8 becomes U+FFFD.
pub fn path_segment(path: &str, index: usize) -> Option<String> {
    path.split('/')
        .nth(index)
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}
