//! Link targets and the documentation page set they must resolve to.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// Classified link target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target<'a> {
    /// Absolute `http://` or `https://` URL. Never checked against pages.
    External(&'a str),
    /// Site-relative path starting with `/`.
    Page(&'a str),
}

impl<'a> Target<'a> {
    /// Classify a raw target string.
    ///
    /// Returns `None` for anything that is neither an absolute http(s) URL
    /// nor a site-relative path.
    #[must_use]
    pub fn parse(raw: &'a str) -> Option<Self> {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Some(Self::External(raw))
        } else if raw.starts_with('/') {
            Some(Self::Page(raw))
        } else {
            None
        }
    }

    /// Page path this target points at, or `None` for external URLs.
    ///
    /// Strips the leading slash, a trailing slash, and an `.html`/`.md`
    /// suffix: `/ru/guide/actions/usage` -> `ru/guide/actions/usage`,
    /// `/` -> `""`.
    #[must_use]
    pub fn page_path(self) -> Option<String> {
        let Self::Page(path) = self else {
            return None;
        };
        let path = path.trim_start_matches('/').trim_end_matches('/');
        let path = path
            .strip_suffix(".html")
            .or_else(|| path.strip_suffix(".md"))
            .unwrap_or(path);
        Some(path.to_owned())
    }
}

/// Set of published documentation page paths (no leading slash).
///
/// Stands in for the content build step: [`PageSet::scan`] derives it from
/// a markdown source directory, the same way the site generator maps files
/// to URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageSet {
    pages: BTreeSet<String>,
}

impl PageSet {
    /// Scan a markdown source directory.
    ///
    /// `index.md` maps to its directory path, `x.md` to `x`. Hidden entries
    /// are skipped, as are subdirectories that cannot be read.
    ///
    /// # Errors
    ///
    /// Returns an error if `source_dir` itself cannot be read.
    pub fn scan(source_dir: &Path) -> io::Result<Self> {
        let mut pages = BTreeSet::new();
        let entries = fs::read_dir(source_dir)?;
        scan_entries(entries, "", &mut pages);
        tracing::debug!(
            source_dir = %source_dir.display(),
            page_count = pages.len(),
            "Page scan completed"
        );
        Ok(Self { pages })
    }

    /// True if the page path is published.
    #[must_use]
    pub fn contains(&self, page_path: &str) -> bool {
        self.pages.contains(page_path)
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True when the set has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over page paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PageSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().map(Into::into).collect(),
        }
    }
}

fn scan_entries(entries: fs::ReadDir, url_prefix: &str, pages: &mut BTreeSet<String>) {
    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

        if is_dir {
            let child_url = join_url(url_prefix, &name);
            match fs::read_dir(&path) {
                Ok(children) => scan_entries(children, &child_url, pages),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to read directory, skipping");
                }
            }
        } else if path.extension().is_some_and(|ext| ext == "md") {
            pages.insert(file_to_page_path(Path::new(&name), url_prefix));
        }
    }
}

fn join_url(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_owned()
    } else {
        format!("{base}/{name}")
    }
}

/// Convert a markdown file name to a page path under `base`.
///
/// - `index.md`, base `""` -> `""`
/// - `index.md`, base `"guide"` -> `"guide"`
/// - `usage.md`, base `"guide/actions"` -> `"guide/actions/usage"`
fn file_to_page_path(file_name: &Path, base: &str) -> String {
    let stem = file_name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if stem == "index" {
        base.to_owned()
    } else {
        join_url(base, &stem)
    }
}
