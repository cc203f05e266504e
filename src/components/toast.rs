//! Toast Host Component
//!
//! Renders the context's current toast; toasts dismiss themselves after a
//! few seconds (see `AppContext::show_toast`) or on click.

use leptos::prelude::*;

use crate::context::{AppContext, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast-banner alert alert-success",
                ToastKind::Error => "toast-banner alert alert-danger",
            };
            view! {
                <div class=class role="alert">
                    <span>{toast.message.clone()}</span>
                    <button class="btn-close" on:click=move |_| ctx.dismiss_toast()>"×"</button>
                </div>
            }
        })}
    }
}
