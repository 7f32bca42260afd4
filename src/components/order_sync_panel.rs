//! Order Sync Panel
//!
//! Pulls open sw6 orders into the bridge with a progress bar, then reloads
//! the orders page.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpBridgeApi;
use crate::components::ToastService;
use crate::orders::sync_open_orders;

const ORDERS_PAGE: &str = "/orders";
const RELOAD_DELAY_MS: u32 = 2_000;

#[component]
pub fn OrderSyncPanel(api: HttpBridgeApi, toasts: ToastService) -> impl IntoView {
    let (progress, set_progress) = signal::<Option<u8>>(None);

    let on_click = move |_| {
        if progress.get_untracked().is_some() {
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            sync_open_orders(&api, &toasts, |p| set_progress.set(p)).await;
            Timeout::new(RELOAD_DELAY_MS, || {
                log::info!("reloading {} after order sync", ORDERS_PAGE);
                if let Some(win) = web_sys::window() {
                    if let Err(err) = win.location().set_href(ORDERS_PAGE) {
                        log::warn!("reload failed: {:?}", err);
                    }
                }
            })
            .forget();
        });
    };

    view! {
        <div class="order-sync-panel">
            <button class="btn btn-primary" disabled=move || progress.get().is_some() on:click=on_click>
                "Offene sw6 Bestellungen abrufen"
            </button>
            <div class="progress" style:display=move || if progress.get().is_some() { "flex" } else { "none" }>
                <div
                    class="progress-bar progress-bar-striped progress-bar-animated"
                    role="progressbar"
                    style:width=move || format!("{}%", progress.get().unwrap_or(0))
                >
                    {move || format!("{}%", progress.get().unwrap_or(0))}
                </div>
            </div>
        </div>
    }
}
