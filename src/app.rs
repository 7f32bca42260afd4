//! Bridge Admin App
//!
//! Backup and order sync panels above the category tree, toasts on top.

use leptos::prelude::*;

use crate::api::HttpBridgeApi;
use crate::components::{BackupPanel, CategoryTreePage, OrderSyncPanel, ToastService, ToastStack};
use crate::config::BridgeConfig;

#[component]
pub fn App(config: BridgeConfig) -> impl IntoView {
    let toasts = ToastService::new(config.toast_ttl_ms);
    let api = HttpBridgeApi::new(config.api_base.clone());

    view! {
        <div class="bridge-admin">
            <BackupPanel api=api.clone() toasts=toasts />
            <OrderSyncPanel api=api.clone() toasts=toasts />
            <CategoryTreePage config=config api=api toasts=toasts />
            <ToastStack service=toasts />
        </div>
    }
}
