//! Default Settings Screen
//!
//! Site settings form. A missing settings row (empty list or 404) flips
//! the screen into create mode; afterwards submissions update in place.
//! The contact number is a digits-only masked input.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{input_value, textarea_value};
use crate::context::{AppContext, ToastKind};
use crate::models::SiteSettings;
use crate::validation::{accepts_numeric_input, is_digits, is_valid_email};

#[component]
pub fn DefaultSettings() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (form, set_form) = signal(SiteSettings::default());
    let (is_new, set_is_new) = signal(true);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_settings_all().await {
                Ok(settings) if !settings.is_empty() => {
                    set_form.set(settings[0].clone());
                    set_is_new.set(false);
                }
                Ok(_) => set_is_new.set(true),
                Err(e) if e.is_not_found() => set_is_new.set(true),
                Err(e) => set_error.set(Some(
                    e.user_message("An error occurred while fetching settings"),
                )),
            }
            set_loading.set(false);
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get();

        if !current.contact_mail.is_empty() && !is_valid_email(&current.contact_mail) {
            ctx.show_toast("Please enter a valid email address", ToastKind::Error);
            return;
        }
        if !current.contact_no.is_empty() && !is_digits(&current.contact_no) {
            ctx.show_toast("Contact number must be numeric", ToastKind::Error);
            return;
        }
        if current.site_name.trim().is_empty() {
            ctx.show_toast("Site name is required", ToastKind::Error);
            return;
        }

        spawn_local(async move {
            let creating = is_new.get_untracked();
            let result = if creating {
                api::create_settings(&current).await
            } else {
                match current.id {
                    Some(id) => api::update_settings(id, &current).await,
                    None => api::create_settings(&current).await,
                }
            };
            match result {
                Ok(response) => {
                    if let Some(settings) = response.into_settings() {
                        set_form.set(settings);
                    }
                    set_is_new.set(false);
                    ctx.show_toast(
                        if creating {
                            "Settings created successfully"
                        } else {
                            "Settings updated successfully"
                        },
                        ToastKind::Success,
                    );
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error saving settings: {e}").into());
                    ctx.show_toast(e.user_message("Network error"), ToastKind::Error);
                }
            }
        });
    };

    // one text row bound to a settings field
    let text_field = move |label: &'static str,
                           placeholder: &'static str,
                           read: fn(&SiteSettings) -> String,
                           write: fn(&mut SiteSettings, String)| {
        view! {
            <label class="form-label">{label}</label>
            <input
                type="text"
                class="form-control"
                placeholder=placeholder
                prop:value=move || read(&form.get())
                on:input=move |ev| {
                    let value = input_value(&ev);
                    set_form.update(|f| write(f, value));
                }
            />
        }
    };

    view! {
        <div class="screen default-settings">
            <h4>
                {move || {
                    if is_new.get() {
                        "Create Default Settings"
                    } else {
                        "Update Default Settings"
                    }
                }}
            </h4>

            {move || error.get().map(|message| view! {
                <div class="alert alert-danger">{message}</div>
            })}

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <form on:submit=submit>
                    {text_field(
                        "Site Name *",
                        "Site Name",
                        |f| f.site_name.clone(),
                        |f, v| f.site_name = v,
                    )}

                    <label class="form-label">"Site Description"</label>
                    <textarea
                        class="form-control"
                        rows="3"
                        prop:value=move || form.get().site_description
                        on:input=move |ev| {
                            let value = textarea_value(&ev);
                            set_form.update(|f| f.site_description = value);
                        }
                    ></textarea>

                    {text_field(
                        "Contact Mail ID",
                        "Contact Email",
                        |f| f.contact_mail.clone(),
                        |f, v| f.contact_mail = v,
                    )}

                    <label class="form-label">"Contact Number"</label>
                    <input
                        type="text"
                        class="form-control"
                        placeholder="Contact Number"
                        prop:value=move || form.get().contact_no
                        on:input=move |ev| {
                            // non-numeric keystrokes are swallowed
                            let value = input_value(&ev);
                            if accepts_numeric_input(&value) {
                                set_form.update(|f| f.contact_no = value);
                            }
                        }
                    />

                    {text_field(
                        "Location URL",
                        "Location URL",
                        |f| f.location_url.clone(),
                        |f, v| f.location_url = v,
                    )}
                    {text_field(
                        "Play Store URL",
                        "Play Store URL",
                        |f| f.playstore_url.clone(),
                        |f, v| f.playstore_url = v,
                    )}
                    {text_field(
                        "App Store URL",
                        "App Store URL",
                        |f| f.appstore_url.clone(),
                        |f, v| f.appstore_url = v,
                    )}
                    {text_field(
                        "Facebook URL",
                        "Facebook URL",
                        |f| f.facebook_url.clone(),
                        |f, v| f.facebook_url = v,
                    )}
                    {text_field(
                        "Instagram URL",
                        "Instagram URL",
                        |f| f.instagram_url.clone(),
                        |f, v| f.instagram_url = v,
                    )}
                    {text_field(
                        "LinkedIn URL",
                        "LinkedIn URL",
                        |f| f.linkedin_url.clone(),
                        |f, v| f.linkedin_url = v,
                    )}

                    <label class="form-label">"About"</label>
                    <textarea
                        class="form-control"
                        rows="4"
                        prop:value=move || form.get().about
                        on:input=move |ev| {
                            let value = textarea_value(&ev);
                            set_form.update(|f| f.about = value);
                        }
                    ></textarea>

                    {text_field(
                        "FCM Key",
                        "FCM Key",
                        |f| f.fcm_key.clone(),
                        |f, v| f.fcm_key = v,
                    )}

                    <label class="form-label">"Storage Type"</label>
                    <div class="radio-row">
                        {["local", "s3"]
                            .iter()
                            .map(|value| {
                                let value = *value;
                                view! {
                                    <label class="radio-option">
                                        <input
                                            type="radio"
                                            name="storage_type"
                                            value=value
                                            prop:checked=move || form.get().storage_type == value
                                            on:change=move |_| {
                                                set_form.update(|f| {
                                                    f.storage_type = value.to_string()
                                                });
                                            }
                                        />
                                        {value}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button type="submit" class="btn btn-primary mt-3">
                        {move || if is_new.get() { "Create Settings" } else { "Update Settings" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
