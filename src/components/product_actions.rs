//! Product Action Buttons
//!
//! SW6 / ERP sync, reload and delete buttons of one product row.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ProductAction;
use crate::components::AppSync;
use crate::product_actions::run_product_action;

#[component]
pub fn ProductActions(product_id: u32, sync: AppSync) -> impl IntoView {
    ProductAction::ALL
        .into_iter()
        .map(|action| view! { <ProductActionButton action=action product_id=product_id sync=sync.clone() /> })
        .collect_view()
}

#[component]
fn ProductActionButton(action: ProductAction, product_id: u32, sync: AppSync) -> impl IntoView {
    let (busy, set_busy) = signal(false);

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if busy.get_untracked() {
            return;
        }
        if let Some(prompt) = action.confirm_prompt() {
            let accepted = web_sys::window()
                .and_then(|win| win.confirm_with_message(prompt).ok())
                .unwrap_or(false);
            if !accepted {
                return;
            }
        }
        set_busy.set(true);
        let sync = sync.clone();
        spawn_local(async move {
            run_product_action(sync.api(), sync.notifier(), action, product_id).await;
            set_busy.set(false);
        });
    };

    let class = if action == ProductAction::DeleteInBridge { "btn btn-sm btn-danger" } else { "btn btn-sm btn-secondary" };

    view! {
        <button
            type="button"
            class=move || if busy.get() { format!("{} spinner-grow", class) } else { class.to_string() }
            disabled=move || busy.get()
            on:click=on_click
        >
            {action.label()}
        </button>
    }
}
