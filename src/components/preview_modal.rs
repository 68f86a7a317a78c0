use chrono::Utc;
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

use crate::actions::{download_captured, on_close_control, on_overlay_click, share_captured};
use crate::capture::{CapturedItem, MediaKind};
use crate::config::PreviewConfig;
use crate::platform::{BrowserDownload, BrowserFetch, PlatformShare, Share};

const ACCENT: &str = "#44dd66";
const FONT: &str = "'JetBrains Mono', 'Fira Code', Consolas, monospace";

fn action_button_style(primary: bool) -> String {
    let (bg, fg, border) = if primary {
        (ACCENT, "#020202", "none".to_string())
    } else {
        ("transparent", "#66cc88", "1px solid #66cc88".to_string())
    };
    format!(
        "background: {}; color: {}; border: {}; padding: 8px 16px; cursor: pointer; \
         font-family: {}; font-size: 12px; font-weight: bold;",
        bg, fg, border, FONT
    )
}

/// Full-viewport preview of a captured image or video with download and
/// share actions.
///
/// `share` overrides platform detection; when absent the browser is probed
/// once at construction.
#[component]
pub fn PreviewModal(
    item: CapturedItem,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional)] config: Option<PreviewConfig>,
    #[prop(optional)] share: Option<PlatformShare>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let share = share.unwrap_or_else(PlatformShare::detect);
    let media_style = config.media_style();

    let on_backdrop = move |ev: MouseEvent| {
        on_overlay_click(ev.target(), ev.current_target(), || on_close.run(()));
    };

    let on_close_button = move |ev: MouseEvent| {
        on_close_control(|| ev.stop_propagation(), || on_close.run(()));
    };

    let download_item = item.clone();
    let download_config = config.clone();
    let on_download = move |_: MouseEvent| {
        if let Err(e) =
            download_captured(&download_item, &download_config, Utc::now(), &BrowserDownload)
        {
            error!("error downloading {}: {}", download_item.url, e);
        }
    };

    let share_item = item.clone();
    let share_config = config.clone();
    let on_share = move |_: MouseEvent| {
        let item = share_item.clone();
        let config = share_config.clone();
        // Not cancelled on close; a pending share finishes or fails on its own.
        spawn_local(async move {
            share_captured(&item, &config, &BrowserFetch, &share).await;
        });
    };

    let media = match item.kind {
        MediaKind::Image => view! {
            <img src=item.url.clone() alt="Captured image" style=media_style />
        }
        .into_any(),
        MediaKind::Video => view! {
            <video src=item.url.clone() controls=true style=media_style />
        }
        .into_any(),
    };

    let share_button = share.is_supported().then(|| {
        view! {
            <button style=action_button_style(false) on:click=on_share>
                "Share"
            </button>
        }
    });

    view! {
        <div
            style="position: fixed; inset: 0; background: rgba(0,0,0,0.9); \
                   display: flex; align-items: center; justify-content: center; \
                   z-index: 1000; cursor: pointer;"
            on:click=on_backdrop
        >
            <div
                style=format!(
                    "position: relative; display: flex; flex-direction: column; \
                     align-items: center; gap: 16px; padding: 24px; cursor: default; \
                     background: #020202; font-family: {};",
                    FONT
                )
            >
                <button
                    style=format!(
                        "position: absolute; top: 4px; right: 4px; background: transparent; \
                         color: {}; border: none; font-size: 20px; cursor: pointer;",
                        ACCENT
                    )
                    title="Close preview"
                    on:click=on_close_button
                >
                    "\u{00d7}"
                </button>
                {media}
                <div style="display: flex; justify-content: center; gap: 8px;">
                    <button style=action_button_style(true) on:click=on_download>
                        "Download"
                    </button>
                    {share_button}
                </div>
            </div>
        </div>
    }
}
