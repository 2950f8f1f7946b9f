//! Avatar badges in the bottom corners of the widget

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use dioxus::prelude::*;

use since_core::avatar::AvatarSource;
use since_core::surface::AvatarSide;

use crate::state::WidgetState;

const MAX_AVATAR_BYTES: usize = 8 * 1024 * 1024;
const AVATAR_SIZE_PX: u32 = 56;

/// Image plus display name for one side of the widget.
#[component]
pub(super) fn AvatarBadge(side: AvatarSide) -> Element {
    let state = use_context::<WidgetState>();
    let surface = state.surface;

    let image = use_memo(move || surface.read().avatar(side).image.clone());
    let image_src = use_memo(move || image().as_ref().and_then(avatar_image_src));

    let avatar = surface.read().avatar(side).clone();
    let side_class = match side {
        AvatarSide::Left => "left",
        AvatarSide::Right => "right",
    };

    rsx! {
        div {
            class: "widget-avatar {side_class}",

            if let Some(src) = image_src() {
                img {
                    class: "widget-avatar-image",
                    src: "{src}",
                    width: "{AVATAR_SIZE_PX}",
                    height: "{AVATAR_SIZE_PX}",
                    draggable: "false",
                    style: "opacity: {avatar.image_opacity};",
                }
            } else {
                div {
                    class: "widget-avatar-placeholder",
                    style: "opacity: {avatar.image_opacity};",
                }
            }

            span {
                class: "widget-avatar-name",
                style: "opacity: {avatar.name_opacity};",
                "{avatar.name}"
            }
        }
    }
}

/// Something the webview can put in an `img` `src`.
///
/// Local files are inlined as data URIs; remote images load directly.
pub(super) fn avatar_image_src(source: &AvatarSource) -> Option<String> {
    match source {
        AvatarSource::LocalFile(path) => file_data_uri(path),
        AvatarSource::Remote(url) if url.scheme() == "file" => {
            let path = url.to_file_path().ok()?;
            file_data_uri(&path)
        }
        AvatarSource::Remote(url) => Some(url.to_string()),
    }
}

fn file_data_uri(path: &Path) -> Option<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to read avatar {}: {}", path.display(), e);
            return None;
        }
    };
    if bytes.len() > MAX_AVATAR_BYTES {
        tracing::warn!(
            "Avatar {} is larger than {} bytes, skipping",
            path.display(),
            MAX_AVATAR_BYTES
        );
        return None;
    }

    let mime_type = mime_guess::from_path(path)
        .first()
        .map_or_else(|| "application/octet-stream".to_string(), |mime| mime.to_string());
    let encoded = BASE64_STANDARD.encode(bytes);
    Some(format!("data:{mime_type};base64,{encoded}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use url::Url;

    #[test]
    fn local_file_becomes_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.png");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let src = avatar_image_src(&AvatarSource::LocalFile(path)).unwrap();
        assert_eq!(src, "data:image/png;base64,AQID");
    }

    #[test]
    fn file_url_is_inlined_too() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.gif");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();
        let url = Url::from_file_path(&path).unwrap();

        let src = avatar_image_src(&AvatarSource::Remote(url)).unwrap();
        assert!(src.starts_with("data:image/gif;base64,"));
    }

    #[test]
    fn remote_url_passes_through() {
        let url = Url::parse("https://example.com/a.png").unwrap();
        assert_eq!(
            avatar_image_src(&AvatarSource::Remote(url)).as_deref(),
            Some("https://example.com/a.png")
        );
    }

    #[test]
    fn unreadable_file_has_no_src() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.png");
        assert_eq!(avatar_image_src(&AvatarSource::LocalFile(missing)), None);
    }
}
