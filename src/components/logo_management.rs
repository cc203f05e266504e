//! Logo Management Screen
//!
//! Uploads the site icon / logo / dark logo. With no settings row yet the
//! submit creates one (the backend requires a site name on create);
//! otherwise it goes through the image-upload endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LogoImages};
use crate::components::picked_file;
use crate::context::{AppContext, ToastKind};
use crate::store::{store_set_settings, use_app_store, AppStateStoreFields};

#[component]
pub fn LogoManagement() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (images, set_images) = signal_local(LogoImages::default());
    let (is_creating, set_is_creating) = signal(false);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_settings_all().await {
                Ok(settings) if !settings.is_empty() => {
                    store_set_settings(&store, Some(settings[0].clone()));
                    set_is_creating.set(false);
                }
                Ok(_) => set_is_creating.set(true),
                Err(e) if e.is_not_found() => set_is_creating.set(true),
                Err(e) => set_error.set(Some(
                    e.user_message("An error occurred while fetching settings"),
                )),
            }
            set_loading.set(false);
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = images.get();
        if current.is_empty() {
            set_error.set(Some("At least one image must be selected.".to_string()));
            return;
        }

        set_error.set(None);
        spawn_local(async move {
            let result = if is_creating.get_untracked() {
                api::create_settings_with_images(&current, "Default Site Name").await
            } else {
                api::upload_settings_images(&current).await
            };
            match result {
                Ok(response) => {
                    if let Some(settings) = response.into_settings() {
                        store_set_settings(&store, Some(settings));
                    }
                    set_is_creating.set(false);
                    set_images.set(LogoImages::default());
                    ctx.show_toast("Images uploaded successfully", ToastKind::Success);
                    // navbar re-reads the logo
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error uploading images: {e}").into());
                    set_error.set(Some(e.user_message("Failed to upload images")));
                }
            }
        });
    };

    let current_path = move |pick: fn(&crate::models::SiteSettings) -> Option<String>| {
        store.settings().get().and_then(|s| pick(&s))
    };

    view! {
        <div class="screen logo-management">
            <h4>"Logo Management"</h4>

            {move || error.get().map(|message| view! {
                <div class="alert alert-danger">{message}</div>
            })}

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <form on:submit=submit>
                    <label class="form-label">"Site Icon"</label>
                    <input
                        type="file"
                        class="form-control"
                        accept="image/*"
                        on:change=move |ev| {
                            let file = picked_file(&ev);
                            set_images.update(|i| i.site_icon = file);
                        }
                    />
                    {move || current_path(|s| s.site_icon.clone()).map(|path| view! {
                        <img class="logo-preview" src=api::asset_url(&path) alt="Site icon"/>
                    })}

                    <label class="form-label">"Site Logo"</label>
                    <input
                        type="file"
                        class="form-control"
                        accept="image/*"
                        on:change=move |ev| {
                            let file = picked_file(&ev);
                            set_images.update(|i| i.site_logo = file);
                        }
                    />
                    {move || current_path(|s| s.site_logo.clone()).map(|path| view! {
                        <img class="logo-preview" src=api::asset_url(&path) alt="Site logo"/>
                    })}

                    <label class="form-label">"Site Dark Logo"</label>
                    <input
                        type="file"
                        class="form-control"
                        accept="image/*"
                        on:change=move |ev| {
                            let file = picked_file(&ev);
                            set_images.update(|i| i.site_dark_logo = file);
                        }
                    />
                    {move || current_path(|s| s.site_dark_logo.clone()).map(|path| view! {
                        <img class="logo-preview" src=api::asset_url(&path) alt="Site dark logo"/>
                    })}

                    <button type="submit" class="btn btn-primary mt-3">"Upload Images"</button>
                </form>
            </Show>
        </div>
    }
}
