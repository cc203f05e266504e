//! Add Course Screen
//!
//! Create form: scalar fields + lesson editor, submitted as one multipart
//! request. Validation failures abort locally; a successful create resets
//! the whole form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CourseMedia};
use crate::components::course_fields::CourseFieldsForm;
use crate::components::LessonEditor;
use crate::context::{AppContext, ToastKind};
use crate::course_form::{course_document, validate, CourseFields, LessonDraft};

#[component]
pub fn AddCourse() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (fields, set_fields) = signal(CourseFields::default());
    let (media, set_media) = signal_local(CourseMedia::default());
    let (lessons, set_lessons) = signal_local(Vec::<LessonDraft>::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current_fields = fields.get();
        let current_lessons = lessons.get();

        if let Err(message) = validate(&current_fields, &current_lessons) {
            set_error.set(Some(message));
            return;
        }
        if media.get().image.is_none() {
            set_error.set(Some("Please select a course cover image".to_string()));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let document = course_document(&current_fields, &current_lessons);
            match api::create_course(&document, &media.get_untracked(), &current_lessons).await {
                Ok(()) => {
                    set_fields.set(CourseFields::default());
                    set_media.set(CourseMedia::default());
                    set_lessons.set(Vec::new());
                    ctx.show_toast("Course created successfully!", ToastKind::Success);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error creating course: {e}").into());
                    set_error.set(Some(e.user_message(
                        "An error occurred while creating the course",
                    )));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="screen add-course">
            <form on:submit=submit>
                <h4>"Add Course"</h4>

                <CourseFieldsForm fields=(fields, set_fields) media=(media, set_media)/>

                <LessonEditor lessons=(lessons, set_lessons)/>

                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating..." } else { "Create Course" }}
                </button>

                {move || error.get().map(|message| view! {
                    <div class="alert alert-danger mt-3">{message}</div>
                })}
            </form>
        </div>
    }
}
