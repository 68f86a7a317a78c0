use chrono::{DateTime, Utc};
use leptos::logging::{error, log};

use crate::capture::{download_filename, share_file_name, CapturedItem};
use crate::config::PreviewConfig;
use crate::platform::{Download, Fetch, PlatformError, Share, ShareFile, ShareRequest};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Unsupported,
    Cancelled,
    Failed(PlatformError),
}

/// A click dismisses only when it landed on the overlay itself, not on
/// anything inside it.
pub fn is_backdrop_click<T: PartialEq>(target: Option<T>, current_target: Option<T>) -> bool {
    match (target, current_target) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// Overlay handler: closes only on a backdrop hit.
pub fn on_overlay_click<T: PartialEq>(
    target: Option<T>,
    current_target: Option<T>,
    close: impl Fn(),
) {
    if is_backdrop_click(target, current_target) {
        close();
    }
}

/// Close control handler: stops the click reaching the overlay, then closes
/// whatever the click target was.
pub fn on_close_control(stop_propagation: impl FnOnce(), close: impl Fn()) {
    stop_propagation();
    close();
}

/// Asks the platform to save `item` and returns the filename it suggested.
pub fn download_captured<D: Download>(
    item: &CapturedItem,
    config: &PreviewConfig,
    at: DateTime<Utc>,
    downloader: &D,
) -> Result<String, PlatformError> {
    let filename = download_filename(&config.file_prefix, item.kind, at);
    downloader.download(&item.url, &filename)?;
    Ok(filename)
}

/// Best-effort share. Failures are logged and reported, never propagated.
pub async fn share_captured<F: Fetch, S: Share>(
    item: &CapturedItem,
    config: &PreviewConfig,
    fetcher: &F,
    sharer: &S,
) -> ShareOutcome {
    if !sharer.is_supported() {
        log!("native sharing is not supported on this platform");
        return ShareOutcome::Unsupported;
    }

    match try_share(item, config, fetcher, sharer).await {
        Ok(()) => ShareOutcome::Shared,
        Err(PlatformError::ShareCancelled) => {
            log!("share cancelled by user");
            ShareOutcome::Cancelled
        }
        Err(PlatformError::ShareUnsupported) => {
            log!("native sharing is not supported on this platform");
            ShareOutcome::Unsupported
        }
        Err(e) => {
            error!("error sharing {}: {}", item.url, e);
            ShareOutcome::Failed(e)
        }
    }
}

async fn try_share<F: Fetch, S: Share>(
    item: &CapturedItem,
    config: &PreviewConfig,
    fetcher: &F,
    sharer: &S,
) -> Result<(), PlatformError> {
    let bytes = fetcher.fetch_bytes(&item.url).await?;
    let file = ShareFile {
        name: share_file_name(&config.file_prefix, item.kind),
        mime_type: item.kind.mime_type(),
        bytes,
    };
    sharer
        .share(ShareRequest {
            title: config.share_title.clone(),
            files: vec![file],
        })
        .await
}
