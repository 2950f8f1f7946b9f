//! Avatar source resolution.
//!
//! Local mode prefers an existing file and falls back to an absolute URI.
//! Online mode only accepts an absolute URI; it never looks on disk.

use std::path::{Path, PathBuf};

use url::Url;

use crate::models::AvatarSettings;

/// A reference the widget can load an image from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSource {
    LocalFile(PathBuf),
    Remote(Url),
}

/// Resolve an avatar, or `None` when nothing usable is configured.
pub fn resolve_avatar(source_path: &str, is_local_mode: bool) -> Option<AvatarSource> {
    let trimmed = source_path.trim();
    if trimmed.is_empty() {
        return None;
    }

    if is_local_mode {
        let path = Path::new(trimmed);
        match path.try_exists() {
            Ok(true) if path.is_file() => return Some(AvatarSource::LocalFile(path.to_path_buf())),
            Ok(_) => {}
            Err(error) => {
                tracing::debug!("Could not probe avatar path {}: {}", trimmed, error);
            }
        }
    }

    parse_absolute_uri(trimmed).map(AvatarSource::Remote)
}

/// Shorthand for [`resolve_avatar`] over stored settings.
pub fn resolve_avatar_settings(avatar: &AvatarSettings) -> Option<AvatarSource> {
    resolve_avatar(&avatar.source_path, avatar.is_local_mode)
}

/// Parse `value` only if it is a well-formed absolute URI.
///
/// Strings with whitespace or backslashes are rejected, as are single-letter
/// schemes so that drive paths like `C:/a.png` are not taken for URIs.
pub fn parse_absolute_uri(value: &str) -> Option<Url> {
    if value.chars().any(|c| c.is_whitespace() || c == '\\') {
        return None;
    }
    let url = Url::parse(value).ok()?;
    if url.scheme().len() < 2 {
        return None;
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_path_resolves_to_nothing() {
        assert_eq!(resolve_avatar("", true), None);
        assert_eq!(resolve_avatar("   ", false), None);
    }

    #[test]
    fn local_mode_prefers_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("left.png");
        std::fs::write(&file, b"png").unwrap();

        assert_eq!(
            resolve_avatar(file.to_str().unwrap(), true),
            Some(AvatarSource::LocalFile(file))
        );
    }

    #[test]
    fn local_mode_falls_back_to_uri() {
        assert_eq!(
            resolve_avatar("https://example.com/missing.png", true),
            Some(AvatarSource::Remote(
                Url::parse("https://example.com/missing.png").unwrap()
            ))
        );
    }

    #[test]
    fn local_mode_with_missing_relative_path_is_nothing() {
        assert_eq!(resolve_avatar("avatars/nope.png", true), None);
    }

    #[test]
    fn local_mode_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_avatar(dir.path().to_str().unwrap(), true), None);
    }

    #[test]
    fn online_mode_rejects_relative_or_malformed() {
        assert_eq!(resolve_avatar("images/a.png", false), None);
        assert_eq!(resolve_avatar("http://exa mple.com/a.png", false), None);
        assert_eq!(resolve_avatar("C:\\Users\\me\\a.png", false), None);
        assert_eq!(resolve_avatar("C:/Users/me/a.png", false), None);
    }

    #[test]
    fn online_mode_never_reads_local_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("right.png");
        std::fs::write(&file, b"png").unwrap();

        assert_eq!(resolve_avatar(file.to_str().unwrap(), false), None);
    }

    #[test]
    fn online_mode_accepts_absolute_uri() {
        assert_eq!(
            resolve_avatar(" https://example.com/b.png ", false),
            Some(AvatarSource::Remote(
                Url::parse("https://example.com/b.png").unwrap()
            ))
        );
        assert!(resolve_avatar("file:///tmp/b.png", false).is_some());
    }
}
