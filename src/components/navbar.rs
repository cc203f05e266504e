//! Admin Navbar Component
//!
//! Site logo + name from the settings record, and the account menu
//! (profile, password, logout).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, AuthTokens, Screen, ToastKind};
use crate::store::{store_set_settings, use_app_store, AppStateStoreFields};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let tokens = use_context::<AuthTokens>().expect("AuthTokens should be provided");
    let store = use_app_store();

    // Logo/site name come from the first settings row
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::fetch_settings(1).await {
                Ok(settings) => store_set_settings(&store, Some(settings)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching logo: {e}").into());
                }
            }
        });
    });

    let logo_url = move || {
        store
            .settings()
            .get()
            .and_then(|s| s.site_logo)
            .map(|path| api::asset_url(&path))
    };
    let site_name = move || {
        store
            .settings()
            .get()
            .map(|s| s.site_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Admin Console".to_string())
    };

    let logout = move |_| {
        tokens.clear();
        ctx.show_toast("Signed out", ToastKind::Success);
        ctx.navigate(Screen::Dashboard);
    };

    view! {
        <header class="admin-navbar">
            <div class="navbar-brand">
                {move || match logo_url() {
                    Some(url) => view! { <img class="site-logo" src=url alt="Site logo"/> }.into_any(),
                    None => view! { <span class="site-logo placeholder">"Logo"</span> }.into_any(),
                }}
                <span class="site-name">{site_name}</span>
            </div>

            <div class="navbar-actions">
                <button class="btn btn-light" on:click=move |_| ctx.navigate(Screen::EditProfile)>
                    "Profile"
                </button>
                <button class="btn btn-light" on:click=move |_| ctx.navigate(Screen::ChangePassword)>
                    "Password"
                </button>
                <button class="btn btn-outline-danger" on:click=logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
