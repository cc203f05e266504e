//! Add Template Screen
//!
//! Upload form with a dynamic list of file slots; `file0` carries the
//! cover image, template files follow in slot order.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api;
use crate::components::{input_value, picked_file, textarea_value};
use crate::context::{AppContext, ToastKind};
use crate::template_form::{price_or_zero, validate_template, FileSlots};

#[component]
pub fn AddTemplate() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (cover, set_cover) = signal_local(None::<File>);
    let (slots, set_slots) = signal_local(FileSlots::<File>::new());
    let (message, set_message) = signal(None::<String>);
    let (uploading, set_uploading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let current_slots = slots.get();
        if let Err(validation) = validate_template(
            &name.get(),
            &description.get(),
            &price.get(),
            cover.get().is_some(),
            true,
            current_slots.has_any_file(),
            true,
        ) {
            set_message.set(Some(validation));
            return;
        }
        let Some(cover_file) = cover.get() else {
            return;
        };

        set_uploading.set(true);
        set_message.set(None);
        spawn_local(async move {
            let result = api::create_template(
                &name.get_untracked(),
                &description.get_untracked(),
                &price_or_zero(&price.get_untracked()),
                &cover_file,
                &current_slots,
            )
            .await;
            match result {
                Ok(()) => {
                    set_name.set(String::new());
                    set_description.set(String::new());
                    set_price.set(String::new());
                    set_cover.set(None);
                    set_slots.set(FileSlots::new());
                    ctx.show_toast("Template uploaded successfully!", ToastKind::Success);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Upload error: {e}").into());
                    set_message.set(Some(e.user_message(
                        "Error uploading template. Please try again.",
                    )));
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <div class="screen add-template">
            <h5>"Add Template"</h5>
            <form on:submit=submit>
                <label class="form-label">"Template Name *"</label>
                <input
                    type="text"
                    class="form-control"
                    placeholder="Enter template name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(input_value(&ev))
                />

                <label class="form-label">"Description *"</label>
                <textarea
                    class="form-control"
                    rows="3"
                    placeholder="Enter template description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(textarea_value(&ev))
                ></textarea>

                <label class="form-label">"Cover Image *"</label>
                <input
                    type="file"
                    class="form-control"
                    accept="image/*"
                    on:change=move |ev| set_cover.set(picked_file(&ev))
                />
                {move || cover.get().map(|file| view! {
                    <small class="text-muted">"Selected cover: " {file.name()}</small>
                })}

                <label class="form-label">"Price"</label>
                <input
                    type="number"
                    class="form-control"
                    placeholder="0"
                    min="0"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(input_value(&ev))
                />
                <small class="text-muted">"Leave blank for free templates"</small>

                <label class="form-label">"Template Files *"</label>
                <For
                    each=move || {
                        slots
                            .get()
                            .slots()
                            .iter()
                            .map(|slot| (slot.id, slot.file.as_ref().map(|f| f.name())))
                            .collect::<Vec<_>>()
                    }
                    key=|(id, _)| *id
                    children=move |(id, file_name)| {
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
                        {move || if uploading.get() { "Uploading..." } else { "Upload Template" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
