//! Canonical app names and URL-likeness.
//!
//! Every entry (org clone URL, manual URL or bare name) is reduced to a short
//! lowercase name which is the deduplication key in [`crate::merge::AppSet`].

/// Suffix left by clone URLs (`https://host/org/app.git`).
const GIT_SUFFIX: &str = ".git";

/// Derives the canonical short name for an app entry.
///
/// Trims and lowercases, strips trailing `.git`, `/` and whitespace until none
/// is left, then keeps the text after the last `/`. Empty input gives an empty
/// name, which callers must skip.
///
/// # Examples
///
/// - `canonical_name("https://github.com/Org/myapp.git/")` → `"myapp"`
/// - `canonical_name("git@github.com:org/MyApp.git")` → `"myapp"`
/// - `canonical_name("myapp")` → `"myapp"`
pub fn canonical_name(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let mut name = lowered.as_str();

    loop {
        let before = name.len();
        if let Some(rest) = name.strip_suffix(GIT_SUFFIX) {
            name = rest;
        }
        if let Some(rest) = name.strip_suffix('/') {
            name = rest;
        }
        name = name.trim_end();
        if name.len() == before {
            break;
        }
    }

    match name.rsplit_once('/') {
        Some((_, last)) => last.trim().to_string(),
        None => name.to_string(),
    }
}

/// True if `entry` looks like a URL rather than a bare app name.
///
/// Matches anything containing `/` or `github.com`, or starting with `http`
/// or `git@`. Deliberately loose: downstream consumers rely on exactly this
/// classification to decide between `name#url` and `name`.
pub fn is_url_like(entry: &str) -> bool {
    entry.contains('/')
        || entry.contains("github.com")
        || entry.starts_with("http")
        || entry.starts_with("git@")
}
