//! Edit Template Screen
//!
//! Hydrates the slot list from the server's stored file records; retained
//! files travel back as `existingFile{n}` blobs, new picks as `file1..N`.
//! Navigates back to the template list shortly after a successful update.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api;
use crate::components::{input_value, picked_file, textarea_value};
use crate::context::{AppContext, Screen, ToastKind};
use crate::template_form::{price_or_zero, validate_template, FileSlots};

#[component]
pub fn EditTemplate(id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (cover, set_cover) = signal_local(None::<File>);
    let (existing_cover, set_existing_cover) = signal(String::new());
    let (slots, set_slots) = signal_local(FileSlots::<File>::new());
    let (message, set_message) = signal(None::<String>);
    let (initial_loading, set_initial_loading) = signal(true);
    let (uploading, set_uploading) = signal(false);

    Effect::new(move |_| {
        set_initial_loading.set(true);
        spawn_local(async move {
            match api::fetch_template(id).await {
                Ok(template) => {
                    set_name.set(template.template_name.clone());
                    set_description.set(template.description.clone().unwrap_or_default());
                    set_price.set(match &template.price {
                        Some(serde_json::Value::Number(n)) => n.to_string(),
                        Some(serde_json::Value::String(s)) => s.clone(),
                        _ => "0".to_string(),
                    });
                    set_existing_cover.set(template.cover_image.clone().unwrap_or_default());
                    set_slots.set(FileSlots::from_existing(api::parse_file_records(&template)));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Fetch error: {e}").into());
                    set_message.set(Some(
                        "Error loading template data. Please try again.".to_string(),
                    ));
                }
            }
            set_initial_loading.set(false);
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let current_slots = slots.get();
        // the server may already hold the cover and the files
        if let Err(validation) = validate_template(
            &name.get(),
            &description.get(),
            &price.get(),
            cover.get().is_some(),
            false,
            current_slots.has_any_file(),
            false,
        ) {
            set_message.set(Some(validation));
            return;
        }

        set_uploading.set(true);
        set_message.set(None);
        spawn_local(async move {
            let result = api::update_template(
                id,
                &name.get_untracked(),
                &description.get_untracked(),
                &price_or_zero(&price.get_untracked()),
                cover.get_untracked().as_ref(),
                &current_slots,
            )
            .await;
            match result {
                Ok(()) => {
                    ctx.show_toast("Template updated successfully!", ToastKind::Success);
                    TimeoutFuture::new(2_000).await;
                    ctx.navigate(Screen::ViewTemplates);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Update error: {e}").into());
                    set_message.set(Some(e.user_message(
                        "Error updating template. Please try again.",
                    )));
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <div class="screen edit-template">
            <Show
                when=move || !initial_loading.get()
                fallback=|| view! { <p>"Loading template data..."</p> }
            >
                <h5>"Edit Template"</h5>
                <form on:submit=submit>
                    <label class="form-label">"Template Name *"</label>
                    <input
                        type="text"
                        class="form-control"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(input_value(&ev))
                    />

                    <label class="form-label">"Description *"</label>
                    <textarea
                        class="form-control"
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(textarea_value(&ev))
                    ></textarea>

                    <label class="form-label">"Cover Image (leave empty to keep the current one)"</label>
                    <input
                        type="file"
                        class="form-control"
                        accept="image/*"
                        on:change=move |ev| set_cover.set(picked_file(&ev))
                    />
                    <Show when=move || !existing_cover.get().is_empty()>
                        <img
                            class="template-cover"
                            src=move || api::asset_url(&existing_cover.get())
                            alt="Current cover"
                        />
                    </Show>

                    <label class="form-label">"Price"</label>
                    <input
                        type="number"
                        class="form-control"
                        min="0"
                        prop:value=move || price.get()
                        on:input=move |ev| set_price.set(input_value(&ev))
                    />

                    <label class="form-label">"Template Files"</label>
                    <For
                        each=move || {
                            slots
                                .get()
                                .slots()
                                .iter()
                                .map(|slot| {
                                    (
                                        slot.id,
                                        slot.file.as_ref().map(|f| f.name()),
                                        slot.existing
                                            .as_ref()
                                            .and_then(|r| r.filename.clone().or_else(|| r.path.clone())),
                                    )
                                })
                                .collect::<Vec<_>>()
                        }
                        key=|(id, _, _)| *id
                        children=move |(id, file_name, existing_name)| {
                            view! {
                                <div class="file-slot-row">
                                    <input
                                        type="file"
                                        class="form-control"
                                        accept=".jpg,.jpeg,.png,.pdf,.doc,.docx"
                                        on:change=move |ev| {
                                            let file = picked_file(&ev);
                                            set_message.set(None);
                                            set_slots.update(|slots| slots.set_file(id, file));
                                        }
                                    />
                                    <button
                                        type="button"
                                        class="btn btn-danger"
                                        disabled=move || !slots.get().can_remove()
                                        on:click=move |_| set_slots.update(|slots| slots.remove(id))
                                    >
                                        "×"
                                    </button>
                                    {file_name.map(|file_name| view! {
                                        <small class="text-muted">"Selected file: " {file_name}</small>
                                    })}
                                    {existing_name.map(|existing_name| view! {
                                        <small class="text-muted">"Current: " {existing_name}</small>
                                    })}
                                </div>
                            }
                        }
                    />

                    <button
                        type="button"
                        class="btn btn-primary"
                        on:click=move |_| set_slots.update(|slots| slots.add())
                    >
                        "Add More Files"
                    </button>

                    {move || message.get().map(|message| view! {
                        <div class="alert alert-danger mt-3">{message}</div>
                    })}

                    <div class="mt-4">
                        <button type="submit" class="btn btn-primary" disabled=move || uploading.get()>
                            {move || if uploading.get() { "Updating..." } else { "Update Template" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-light ms-2"
                            on:click=move |_| ctx.navigate(Screen::ViewTemplates)
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
