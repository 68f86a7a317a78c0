pub mod actions;
pub mod capture;
pub mod components;
pub mod config;
pub mod platform;

pub use capture::{CapturedItem, MediaKind};
pub use components::PreviewModal;
pub use config::PreviewConfig;
pub use platform::PlatformShare;
