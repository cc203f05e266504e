//! Change Password Screen
//!
//! Bearer-authenticated password update; rules are checked locally before
//! the call.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::input_value;
use crate::context::{AppContext, AuthTokens, ToastKind};
use crate::validation::validate_password_change;

#[component]
pub fn ChangePassword() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let tokens = use_context::<AuthTokens>().expect("AuthTokens should be provided");

    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if let Err(message) = validate_password_change(&new_password.get(), &confirm_password.get())
        {
            set_error.set(Some(message));
            return;
        }
        let Some(token) = tokens.token() else {
            set_error.set(Some("You are not signed in".to_string()));
            return;
        };

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::change_password(&token, &new_password.get_untracked(), &confirm_password.get_untracked()).await {
                Ok(()) => {
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                    ctx.show_toast("Password changed successfully", ToastKind::Success);
                }
                Err(e) => {
                    set_error.set(Some(e.user_message("Failed to change password")));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="screen change-password">
            <h4>"Change Password"</h4>

            <form on:submit=submit>
                <label class="form-label">"New Password"</label>
                <input
                    type="password"
                    class="form-control"
                    prop:value=move || new_password.get()
                    on:input=move |ev| set_new_password.set(input_value(&ev))
                />

                <label class="form-label">"Confirm Password"</label>
                <input
                    type="password"
                    class="form-control"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| set_confirm_password.set(input_value(&ev))
                />

                {move || error.get().map(|message| view! {
                    <div class="alert alert-danger mt-3">{message}</div>
                })}

                <button type="submit" class="btn btn-primary mt-3" disabled=move || loading.get()>
                    {move || if loading.get() { "Saving..." } else { "Change Password" }}
                </button>
            </form>
        </div>
    }
}
