use chrono::{DateTime, SecondsFormat, Utc};
use leptos::logging::warn;
use serde::{Deserialize, Serialize};

/// Kind of media a capture produced. Decides the element we render and
/// the file extension / MIME type we hand to the platform.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            MediaKind::Image => "jpg",
            MediaKind::Video => "webm",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            MediaKind::Image => "image/jpeg",
            MediaKind::Video => "video/webm",
        }
    }
}

/// A reference to media produced elsewhere. The url is borrowed for the
/// lifetime of the preview and never revoked here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CapturedItem {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

impl CapturedItem {
    pub fn new(url: impl Into<String>, kind: MediaKind) -> Self {
        Self { url: url.into(), kind }
    }

    /// Builds an item from `src` and `type` query values. Both are required.
    pub fn from_query(src: Option<String>, kind: Option<String>) -> Option<Self> {
        let url = src.filter(|s| !s.is_empty())?;
        let Some(value) = kind else {
            warn!("missing media type, expected type=image or type=video");
            return None;
        };
        let Some(kind) = MediaKind::parse(&value) else {
            warn!("unknown media type {:?}, expected image or video", value);
            return None;
        };
        Some(Self::new(url, kind))
    }
}

/// `<prefix>_<iso timestamp, ':' -> '-'>.<ext>`
pub fn download_filename(prefix: &str, kind: MediaKind, at: DateTime<Utc>) -> String {
    let stamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(':', "-");
    format!("{}_{}.{}", prefix, stamp, kind.extension())
}

pub fn share_file_name(prefix: &str, kind: MediaKind) -> String {
    format!("{}.{}", prefix, kind.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 5).unwrap()
            + chrono::Duration::milliseconds(123)
    }

    mod media_kind_tests {
        use super::*;

        #[test]
        fn image_maps_to_jpeg() {
            assert_eq!(MediaKind::Image.extension(), "jpg");
            assert_eq!(MediaKind::Image.mime_type(), "image/jpeg");
        }

        #[test]
        fn video_maps_to_webm() {
            assert_eq!(MediaKind::Video.extension(), "webm");
            assert_eq!(MediaKind::Video.mime_type(), "video/webm");
        }

        #[test]
        fn parse_is_case_insensitive() {
            assert_eq!(MediaKind::parse("image"), Some(MediaKind::Image));
            assert_eq!(MediaKind::parse(" Video "), Some(MediaKind::Video));
        }

        #[test]
        fn parse_rejects_unknown_kinds() {
            assert_eq!(MediaKind::parse("audio"), None);
            assert_eq!(MediaKind::parse(""), None);
        }
    }

    mod item_tests {
        use super::*;

        #[test]
        fn deserializes_props_shape() {
            let item: CapturedItem =
                serde_json::from_str(r#"{"url":"blob:abc","type":"image"}"#).unwrap();
            assert_eq!(item, CapturedItem::new("blob:abc", MediaKind::Image));
        }

        #[test]
        fn rejects_unknown_type_tag() {
            let result = serde_json::from_str::<CapturedItem>(r#"{"url":"blob:abc","type":"gif"}"#);
            assert!(result.is_err());
        }

        #[test]
        fn from_query_requires_type() {
            assert_eq!(CapturedItem::from_query(Some("blob:abc".to_string()), None), None);
        }

        #[test]
        fn from_query_rejects_unknown_type() {
            let item = CapturedItem::from_query(Some("blob:abc".to_string()), Some("gif".to_string()));
            assert_eq!(item, None);
        }

        #[test]
        fn from_query_requires_src() {
            assert_eq!(CapturedItem::from_query(None, Some("image".to_string())), None);
            assert_eq!(CapturedItem::from_query(Some(String::new()), Some("image".to_string())), None);
        }

        #[test]
        fn from_query_builds_video_item() {
            let item = CapturedItem::from_query(Some("blob:xyz".to_string()), Some("Video".to_string()));
            assert_eq!(item, Some(CapturedItem::new("blob:xyz", MediaKind::Video)));
        }

        #[test]
        fn serializes_type_field_lowercase() {
            let json = serde_json::to_string(&CapturedItem::new("blob:xyz", MediaKind::Video)).unwrap();
            assert_eq!(json, r#"{"url":"blob:xyz","type":"video"}"#);
        }
    }

    mod filename_tests {
        use super::*;

        #[test]
        fn image_filename_ends_in_jpg() {
            let name = download_filename("pixelcam", MediaKind::Image, fixed_time());
            assert!(name.ends_with(".jpg"));
        }

        #[test]
        fn video_filename_ends_in_webm() {
            let name = download_filename("pixelcam", MediaKind::Video, fixed_time());
            assert!(name.ends_with(".webm"));
        }

        #[test]
        fn timestamp_has_no_colons() {
            let name = download_filename("pixelcam", MediaKind::Image, Utc::now());
            assert!(!name.contains(':'));
        }

        #[test]
        fn matches_iso_shape() {
            let name = download_filename("pixelcam", MediaKind::Image, fixed_time());
            assert_eq!(name, "pixelcam_2026-10-18T09-30-05.123Z.jpg");
        }

        #[test]
        fn stamp_is_digits_hyphens_and_iso_markers() {
            let name = download_filename("pixelcam", MediaKind::Image, Utc::now());
            let stamp = name
                .strip_prefix("pixelcam_")
                .and_then(|rest| rest.strip_suffix(".jpg"))
                .unwrap();
            assert!(stamp
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '-' | 'T' | '.' | 'Z')));
        }

        #[test]
        fn honours_custom_prefix() {
            let name = download_filename("shot", MediaKind::Video, fixed_time());
            assert!(name.starts_with("shot_2026-10-18T"));
        }

        #[test]
        fn share_names_follow_kind() {
            assert_eq!(share_file_name("pixelcam", MediaKind::Image), "pixelcam.jpg");
            assert_eq!(share_file_name("pixelcam", MediaKind::Video), "pixelcam.webm");
        }
    }
}
