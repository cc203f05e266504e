//! Course Fields Component
//!
//! The scalar half of the course form (title, categories, pricing, media
//! pickers), shared by the add and edit screens. Category options come
//! from the store-backed cache; a failed picker fetch just leaves the
//! select empty.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CourseMedia};
use crate::components::{input_value, picked_file, select_value, textarea_value};
use crate::course_form::CourseFields;
use crate::store::{store_set_categories, store_set_sub_categories, use_app_store, AppStateStoreFields};

const LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced"];

type Fields = (ReadSignal<CourseFields>, WriteSignal<CourseFields>);
// media holds `web_sys::File` handles: local (non-Send) signal storage
type Media = (
    ReadSignal<CourseMedia, LocalStorage>,
    WriteSignal<CourseMedia, LocalStorage>,
);

/// Scalar course inputs + top-level media pickers. In edit mode the file
/// inputs are optional replacements for what the server already holds.
#[component]
pub fn CourseFieldsForm(fields: Fields, media: Media, #[prop(optional)] edit_mode: bool) -> impl IntoView {
    let (fields, set_fields) = fields;
    let (_, set_media) = media;
    let store = use_app_store();

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(loaded) => store_set_categories(&store, loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching categories: {e}").into());
                }
            }
        });
        spawn_local(async move {
            match api::fetch_sub_categories().await {
                Ok(loaded) => store_set_sub_categories(&store, loaded),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error fetching sub categories: {e}").into(),
                    );
                }
            }
        });
    });

    view! {
        <div class="course-fields">
            <label class="form-label">"Course Title"</label>
            <input
                type="text"
                class="form-control"
                placeholder="Course Name"
                prop:value=move || fields.get().title
                on:input=move |ev| {
                    let value = input_value(&ev);
                    set_fields.update(|f| f.title = value);
                }
            />

            <label class="form-label">"Course Description"</label>
            <textarea
                class="form-control"
                rows="6"
                prop:value=move || fields.get().description
                on:input=move |ev| {
                    let value = textarea_value(&ev);
                    set_fields.update(|f| f.description = value);
                }
            ></textarea>

            <label class="form-label">"Parent Category"</label>
            <select
                class="form-select"
                prop:value=move || fields.get().parent_category
                on:change=move |ev| {
                    let value = select_value(&ev);
                    set_fields.update(|f| f.parent_category = value);
                }
            >
                <option value="" disabled selected>"Select Category"</option>
                <For
                    each=move || store.categories().get()
                    key=|category| category.cid
                    children=|category| view! {
                        <option value=category.category_name.clone()>
                            {category.category_name.clone()}
                        </option>
                    }
                />
            </select>

            <label class="form-label">"Sub Category"</label>
            <select
                class="form-select"
                prop:value=move || fields.get().sub_category
                on:change=move |ev| {
                    let value = select_value(&ev);
                    set_fields.update(|f| f.sub_category = value);
                }
            >
                <option value="" disabled selected>"Select Sub Category"</option>
                <For
                    each=move || store.sub_categories().get()
                    key=|sub| sub.id
                    children=|sub| view! {
                        <option value=sub.sub_category.clone()>{sub.sub_category.clone()}</option>
                    }
                />
            </select>

            <label class="form-label">
                {move || {
                    if edit_mode {
                        "Course Cover Image (leave empty to keep the current one)"
                    } else {
                        "Course Cover Image (.jpg, .png, .jpeg)"
                    }
                }}
            </label>
            <input
                type="file"
                class="form-control"
                accept=".jpg,.png,.jpeg"
                on:change=move |ev| {
                    let file = picked_file(&ev);
                    set_media.update(|m| m.image = file);
                }
            />

            <label class="form-label">"Course Preview video upload (.mp4)"</label>
            <input
                type="file"
                class="form-control"
                accept=".mp4"
                on:change=move |ev| {
                    let file = picked_file(&ev);
                    set_media.update(|m| m.preview_video = file);
                }
            />

            <label class="form-label">"How much time spend"</label>
            <input
                type="text"
                class="form-control"
                placeholder="How much time spend"
                prop:value=move || fields.get().time_spend
                on:input=move |ev| {
                    let value = input_value(&ev);
                    set_fields.update(|f| f.time_spend = value);
                }
            />

            <label class="form-label">"Requirement or Prerequisites"</label>
            <textarea
                class="form-control"
                rows="4"
                placeholder="Requirements for taking your course"
                prop:value=move || fields.get().requirements
                on:input=move |ev| {
                    let value = textarea_value(&ev);
                    set_fields.update(|f| f.requirements = value);
                }
            ></textarea>

            <label class="form-label">"Level"</label>
            <select
                class="form-select"
                prop:value=move || fields.get().level
                on:change=move |ev| {
                    let value = select_value(&ev);
                    set_fields.update(|f| f.level = value);
                }
            >
                <option value="" disabled selected>"Select Level"</option>
                {LEVELS
                    .iter()
                    .map(|level| view! { <option value=*level>{*level}</option> })
                    .collect_view()}
            </select>

            <label class="form-label">"Validity (Days)"</label>
            <input
                type="number"
                class="form-control"
                placeholder="Course Validity in Days"
                prop:value=move || fields.get().validity_days
                on:input=move |ev| {
                    let value = input_value(&ev);
                    set_fields.update(|f| f.validity_days = value);
                }
            />
            <small class="text-muted">"Default: 365 days (1 year)"</small>

            <label class="form-label">"Course Price"</label>
            <input
                type="number"
                class="form-control"
                placeholder="Course Price"
                min="0"
                step="0.01"
                prop:value=move || fields.get().price
                on:input=move |ev| {
                    let value = input_value(&ev);
                    set_fields.update(|f| f.price = value);
                }
            />
            <small class="text-muted">"Enter 0 for free courses"</small>

            <label class="form-label">"Certificate Template (Optional)"</label>
            <input
                type="file"
                class="form-control"
                accept=".jpg,.png,.jpeg"
                on:change=move |ev| {
                    let file = picked_file(&ev);
                    set_media.update(|m| m.certificate_template = file);
                }
            />
        </div>
    }
}
