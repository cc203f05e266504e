//! Edit Course Screen
//!
//! Hydrates the form from the fetched course, preserving lesson/quiz/
//! question ids through the update round-trip, then navigates back to the
//! course list on success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CourseMedia};
use crate::components::course_fields::CourseFieldsForm;
use crate::components::LessonEditor;
use crate::context::{AppContext, Screen, ToastKind};
use crate::course_form::{course_document, hydrate, validate, CourseFields, LessonDraft};

#[component]
pub fn EditCourse(id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (fields, set_fields) = signal(CourseFields::default());
    let (media, set_media) = signal_local(CourseMedia::default());
    let (lessons, set_lessons) = signal_local(Vec::<LessonDraft>::new());
    let (page_loading, set_page_loading) = signal(true);
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        set_page_loading.set(true);
        spawn_local(async move {
            match api::fetch_course(id).await {
                Ok(course) => {
                    let (loaded_fields, loaded_lessons) = hydrate(&course);
                    set_fields.set(loaded_fields);
                    set_lessons.set(loaded_lessons);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching course data: {e}").into());
                    set_error.set(Some(
                        "Failed to load course data. Please try again.".to_string(),
                    ));
                }
            }
            set_page_loading.set(false);
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current_fields = fields.get();
        let current_lessons = lessons.get();

        if let Err(message) = validate(&current_fields, &current_lessons) {
            set_error.set(Some(message));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let document = course_document(&current_fields, &current_lessons);
            match api::update_course(id, &document, &media.get_untracked(), &current_lessons).await
            {
                Ok(()) => {
                    ctx.show_toast("Course updated successfully!", ToastKind::Success);
                    ctx.navigate(Screen::ViewCourses);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error updating course: {e}").into());
                    set_error.set(Some(e.user_message(
                        "An error occurred while updating the course",
                    )));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="screen edit-course">
            <Show
                when=move || !page_loading.get()
                fallback=|| view! { <p>"Loading course data..."</p> }
            >
                <form on:submit=submit>
                    <h4>"Edit Course"</h4>

                    <CourseFieldsForm
                        fields=(fields, set_fields)
                        media=(media, set_media)
                        edit_mode=true
                    />

                    <LessonEditor lessons=(lessons, set_lessons) edit_mode=true/>

                    <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Updating..." } else { "Update Course" }}
                    </button>
                    <button
                        type="button"
                        class="btn btn-light ms-2"
                        on:click=move |_| ctx.navigate(Screen::ViewCourses)
                    >
                        "Cancel"
                    </button>

                    {move || error.get().map(|message| view! {
                        <div class="alert alert-danger mt-3">{message}</div>
                    })}
                </form>
            </Show>
        </div>
    }
}
