//! Edit Profile Screen
//!
//! Bearer-authenticated profile form. A refreshed `accessToken` in the
//! update response is handed back to the credential provider.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::input_value;
use crate::context::{AppContext, AuthTokens, ToastKind};
use crate::models::AdminProfile;
use crate::store::{store_set_profile, use_app_store};

#[component]
pub fn EditProfile() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    // kept in a StoredValue so the submit handler stays Copy
    let tokens = StoredValue::new(use_context::<AuthTokens>().expect("AuthTokens should be provided"));
    let store = use_app_store();

    let (form, set_form) = signal(AdminProfile::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let Some(token) = tokens.with_value(|t| t.token()) else {
            set_error.set(Some("You are not signed in".to_string()));
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_profile(&token).await {
                Ok(profile) => {
                    set_form.set(profile.clone());
                    store_set_profile(&store, Some(profile));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.user_message("Failed to fetch profile"))),
            }
            set_loading.set(false);
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let profile = form.get();
        if profile.username.trim().is_empty() {
            set_error.set(Some("Username is required".to_string()));
            return;
        }
        let Some(token) = tokens.with_value(|t| t.token()) else {
            set_error.set(Some("You are not signed in".to_string()));
            return;
        };

        set_error.set(None);
        spawn_local(async move {
            match api::update_profile(&token, &profile).await {
                Ok(response) => {
                    // the server may rotate the bearer token on a profile change
                    if let Some(access_token) = response.access_token {
                        tokens.with_value(|t| t.store(access_token));
                    }
                    store_set_profile(&store, Some(profile));
                    ctx.show_toast(
                        response
                            .msg
                            .unwrap_or_else(|| "Profile updated successfully".to_string()),
                        ToastKind::Success,
                    );
                }
                Err(e) => set_error.set(Some(e.user_message("Failed to update profile"))),
            }
        });
    };

    view! {
        <div class="screen edit-profile">
            <h4>"Edit Profile"</h4>

            {move || error.get().map(|message| view! {
                <div class="alert alert-danger">{message}</div>
            })}

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <form on:submit=submit>
                    <label class="form-label">"Username"</label>
                    <input
                        type="text"
                        class="form-control"
                        prop:value=move || form.get().username
                        on:input=move |ev| {
                            let value = input_value(&ev);
                            set_form.update(|f| f.username = value);
                        }
                    />

                    <label class="form-label">"Email"</label>
                    <input
                        type="email"
                        class="form-control"
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            let value = input_value(&ev);
                            set_form.update(|f| f.email = value);
                        }
                    />

                    <button type="submit" class="btn btn-primary mt-3">"Save Profile"</button>
                </form>
            </Show>
        </div>
    }
}
