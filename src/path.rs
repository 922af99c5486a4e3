//! Pure book path algebra (string-only, no file system).
//!
//! Book paths are `/`-separated locations inside the package with no leading
//! slash; the empty string is the package root.

use crate::error::{HrefError, HrefResult};
use crate::options::{ResolveOptions, RootAscentPolicy};

/// Returns the directory containing `path`, i.e. `path` without its last segment.
///
/// - `starting_dir("OEBPS/Text/ch1.xhtml")` → `"OEBPS/Text"`
/// - `starting_dir("content.opf")` → `""`
pub fn starting_dir(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => path[..idx].to_string(),
        None => String::new(),
    }
}

/// Resolves `.` and `..` segments using the default [`ResolveOptions`].
///
/// A `..` that would climb above the root is dropped with a warning.
pub fn resolve_relative_segments(path: &str) -> HrefResult<String> {
    resolve_relative_segments_with(path, &ResolveOptions::default())
}

/// Resolves `.` and `..` segments, applying `options.on_root_ascent` when a
/// `..` has nothing left to pop.
///
/// A leading `/` (a join onto the root directory) is dropped, since book
/// paths are never absolute.
///
/// - `"This/is/the/../../end.txt"` → `"This/end.txt"`
/// - `"/OEBPS/package.opf"` → `"OEBPS/package.opf"`
pub fn resolve_relative_segments_with(path: &str, options: &ResolveOptions) -> HrefResult<String> {
    let mut out: Vec<&str> = Vec::new();
    for (i, seg) in path.split('/').enumerate() {
        match seg {
            "" if i == 0 => {}
            "." => {}
            ".." => {
                if out.pop().is_none() {
                    match options.on_root_ascent {
                        RootAscentPolicy::Drop => {
                            log::warn!("ignoring '..' above the package root in '{}'", path);
                        }
                        RootAscentPolicy::Error => {
                            return Err(HrefError::RootAscent {
                                path: path.to_string(),
                            });
                        }
                    }
                }
            }
            _ => out.push(seg),
        }
    }
    Ok(out.join("/"))
}

/// Splits a directory path into segments; trailing separators are ignored
/// and the root has no segments.
fn dir_segments(dir: &str) -> Vec<&str> {
    let trimmed = dir.trim_end_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

/// Relative reference from directory `start_dir` to `target_dir`.
///
/// One `..` is emitted per `start_dir` segment past the common prefix, followed
/// by the remaining `target_dir` segments.
pub fn relative_path(target_dir: &str, start_dir: &str) -> String {
    let target = dir_segments(target_dir);
    let start = dir_segments(start_dir);

    let common = target
        .iter()
        .zip(start.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut res: Vec<&str> = Vec::with_capacity(start.len() - common + target.len() - common);
    res.extend(std::iter::repeat_n("..", start.len() - common));
    res.extend_from_slice(&target[common..]);
    res.join("/")
}

/// Relative href from the file `from_path` to `to_path`; empty for a self-reference.
pub fn build_relative_path(from_path: &str, to_path: &str) -> String {
    if from_path == to_path {
        return String::new();
    }
    relative_path(to_path, &starting_dir(from_path))
}

/// Resolves `dest_relative_href` against `start_folder` using the default options.
pub fn build_book_path(dest_relative_href: &str, start_folder: &str) -> HrefResult<String> {
    build_book_path_with(dest_relative_href, start_folder, &ResolveOptions::default())
}

/// Resolves `dest_relative_href` against `start_folder` into a book path.
///
/// A blank `start_folder` returns the href as-is; its `.`/`..` segments are
/// left unresolved in that case.
pub fn build_book_path_with(
    dest_relative_href: &str,
    start_folder: &str,
    options: &ResolveOptions,
) -> HrefResult<String> {
    if start_folder.trim().is_empty() {
        return Ok(dest_relative_href.to_string());
    }
    let joined = format!("{}/{}", start_folder.trim_end_matches('/'), dest_relative_href);
    resolve_relative_segments_with(&joined, options)
}

/// Longest directory shared by all `paths`, with a trailing `/`.
///
/// Returns `""` for no paths or when the first segments already differ. A
/// single path yields its starting directory plus `/`.
pub fn longest_common_path<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let paths: Vec<S> = paths.into_iter().collect();
    match paths.as_slice() {
        [] => return String::new(),
        [only] => return starting_dir(only.as_ref()) + "/",
        _ => {}
    }

    let split: Vec<Vec<&str>> = paths.iter().map(|p| p.as_ref().split('/').collect()).collect();
    let min_len = split.iter().map(Vec::len).min().unwrap_or(0);
    let first = &split[0];

    let common = (0..min_len)
        .take_while(|&i| split[1..].iter().all(|segs| segs[i] == first[i]))
        .count();

    if common == 0 {
        return String::new();
    }
    first[..common].join("/") + "/"
}
