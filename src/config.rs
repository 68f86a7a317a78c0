use serde::Deserialize;

pub const DEFAULT_FILE_PREFIX: &str = "pixelcam";
pub const DEFAULT_SHARE_TITLE: &str = "PixelCam Capture";
pub const DEFAULT_MEDIA_FILL_PERCENT: u8 = 90;

const MIN_FILL_PERCENT: u8 = 10;
const MAX_FILL_PERCENT: u8 = 100;
// Leaves room under the media for the action row.
const ACTION_ROW_VH: u8 = 20;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    pub file_prefix: String,
    pub share_title: String,
    pub media_fill_percent: u8,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            share_title: DEFAULT_SHARE_TITLE.to_string(),
            media_fill_percent: DEFAULT_MEDIA_FILL_PERCENT,
        }
    }
}

impl PreviewConfig {
    /// Max media size as (vw, vh).
    pub fn media_bounds(&self) -> (u8, u8) {
        let fill = self.media_fill_percent.clamp(MIN_FILL_PERCENT, MAX_FILL_PERCENT);
        (fill, fill.saturating_sub(ACTION_ROW_VH).max(MIN_FILL_PERCENT))
    }

    pub fn media_style(&self) -> String {
        let (vw, vh) = self.media_bounds();
        format!(
            "max-width: {}vw; max-height: {}vh; object-fit: contain; \
             border: 1px solid #44dd66; box-shadow: 0 0 30px rgba(68, 221, 102, 0.3);",
            vw, vh
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_pixelcam_names() {
        let config = PreviewConfig::default();
        assert_eq!(config.file_prefix, "pixelcam");
        assert_eq!(config.share_title, "PixelCam Capture");
        assert_eq!(config.media_fill_percent, 90);
    }

    #[test]
    fn empty_json_gives_defaults() {
        let config: PreviewConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PreviewConfig::default());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config: PreviewConfig = serde_json::from_str(r#"{"file_prefix":"snap"}"#).unwrap();
        assert_eq!(config.file_prefix, "snap");
        assert_eq!(config.share_title, DEFAULT_SHARE_TITLE);
    }

    #[test]
    fn media_bounds_default() {
        assert_eq!(PreviewConfig::default().media_bounds(), (90, 70));
    }

    #[test]
    fn media_bounds_are_clamped() {
        let tiny = PreviewConfig { media_fill_percent: 0, ..Default::default() };
        assert_eq!(tiny.media_bounds(), (10, 10));

        let huge = PreviewConfig { media_fill_percent: 250, ..Default::default() };
        assert_eq!(huge.media_bounds(), (100, 80));
    }

    #[test]
    fn media_style_mentions_bounds() {
        let style = PreviewConfig::default().media_style();
        assert!(style.contains("max-width: 90vw"));
        assert!(style.contains("max-height: 70vh"));
    }
}
