//! # Book path and href utilities
//!
//! Pure string helpers for references inside an e-book style package: a root
//! folder with nested directories, addressed by `/`-separated book paths.
//!
//! ## Features
//! - Relative hrefs between two files of the package
//! - Resolution of relative hrefs back into book paths (`.` / `..`)
//! - Longest common directory of a set of book paths
//! - IRI quoting: unsafe ASCII is percent-encoded, non-ASCII stays readable
//!
//! ## Example
//! ```
//! use bookhref::{book_path_from_href, relative_href};
//!
//! let href = relative_href("OEBPS/Text/chapter 1.xhtml", "OEBPS/Images/cover art.png");
//! assert_eq!(href, "../Images/cover%20art.png");
//!
//! let path = book_path_from_href(&href, "OEBPS/Text").unwrap();
//! assert_eq!(path, "OEBPS/Images/cover art.png");
//! ```

pub mod error;
pub mod iri;
pub mod options;
pub mod path;

pub use error::{HrefError, HrefResult};
pub use iri::{quote_iri, quote_iri_bytes, unquote_iri, unquote_iri_bytes};
pub use options::{ResolveOptions, RootAscentPolicy};
pub use path::{
    build_book_path, build_book_path_with, build_relative_path, longest_common_path,
    relative_path, resolve_relative_segments, resolve_relative_segments_with, starting_dir,
};

/// Quoted relative href from the file `from_path` to `to_path`
pub fn relative_href(from_path: &str, to_path: &str) -> String {
    quote_iri(&build_relative_path(from_path, to_path))
}

/// Book path targeted by a quoted `href` found in a file under `start_folder`
pub fn book_path_from_href(href: &str, start_folder: &str) -> HrefResult<String> {
    book_path_from_href_with(href, start_folder, &ResolveOptions::default())
}

/// Like [`book_path_from_href`], with explicit resolve options
pub fn book_path_from_href_with(
    href: &str,
    start_folder: &str,
    options: &ResolveOptions,
) -> HrefResult<String> {
    let unquoted = unquote_iri(href);
    build_book_path_with(&unquoted, start_folder, options)
}
