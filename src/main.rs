use leptos::prelude::*;
use pixelcam_preview::{CapturedItem, PreviewModal};

/// Reads `?src=<url>&type=image|video` from the page address.
fn item_from_location() -> Option<CapturedItem> {
    let href = web_sys::window()?.location().href().ok()?;
    let params = web_sys::Url::new(&href).ok()?.search_params();
    CapturedItem::from_query(params.get("src"), params.get("type"))
}

#[component]
fn Demo() -> impl IntoView {
    let initial = item_from_location();
    let (current, set_current) = signal(initial.clone());

    move || match current.get() {
        Some(item) => view! {
            <PreviewModal
                item=item
                on_close=Callback::new(move |_: ()| set_current.set(None))
            />
        }
        .into_any(),
        None => match initial.clone() {
            Some(item) => view! {
                <button on:click=move |_| set_current.set(Some(item.clone()))>
                    "Show preview"
                </button>
            }
            .into_any(),
            None => view! {
                <p style="font-family: monospace; color: #66cc88;">
                    "Open with ?src=<media url>&type=image|video"
                </p>
            }
            .into_any(),
        },
    }
}

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(Demo);
}
