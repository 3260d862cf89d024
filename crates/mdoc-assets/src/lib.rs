//! Static assets compiled into the mdoc binary.
//!
//! Files under `assets/` are embedded with `rust-embed`, so the server has no
//! runtime dependency on the install location.

use std::borrow::Cow;

/// Path of the site stylesheet, relative to the asset root.
pub const STYLESHEET: &str = "style.css";

/// Path of the navigation script, relative to the asset root.
pub const NAV_SCRIPT: &str = "nav.js";

#[derive(rust_embed::RustEmbed)]
#[folder = "assets"]
struct Assets;

/// Get an asset by path (relative to the asset root).
///
/// Returns the file contents if the asset exists, `None` otherwise.
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Return the `Content-Type` value for the given file path.
///
/// Text types carry a UTF-8 charset.
pub fn content_type_for(path: &str) -> String {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.type_() == mime_guess::mime::TEXT {
        format!("{}; charset=utf-8", mime.essence_str())
    } else {
        mime.essence_str().to_owned()
    }
}
