//! View Courses Screen
//!
//! Approved-course table with a full-detail modal (lessons sorted by
//! order, quiz answers marked), edit navigation and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_listview::{create_list_signals, filter_items, first_index, page_slice, total_pages};

use crate::api;
use crate::components::{input_value, DeleteConfirmButton, Pagination};
use crate::context::{AppContext, Screen, ToastKind};
use crate::models::{CourseDetail, LessonRecord};

const PAGE_SIZE: usize = 5;

#[component]
pub fn ViewCourses() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (courses, set_courses) = signal(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (selected, set_selected) = signal(None::<CourseDetail>);
    let list = create_list_signals();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_courses().await {
                Ok(loaded) => {
                    set_courses.set(loaded);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching courses: {e}").into());
                    set_error.set(Some("Failed to fetch courses".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        filter_items(&courses.get(), &list.search_read.get(), |course| {
            vec![course.course_title.clone()]
        })
    });
    let pages = Signal::derive(move || total_pages(filtered.get().len(), PAGE_SIZE));
    let visible = Memo::new(move |_| page_slice(&filtered.get(), list.page_read.get(), PAGE_SIZE));

    let view_course = move |id: u32| {
        spawn_local(async move {
            match api::fetch_course(id).await {
                Ok(course) => set_selected.set(Some(course)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error fetching course details: {e}").into(),
                    );
                    ctx.show_toast(
                        e.user_message("Failed to fetch course details"),
                        ToastKind::Error,
                    );
                }
            }
        });
    };

    let delete_course = move |id: u32| {
        spawn_local(async move {
            match api::delete_course(id).await {
                Ok(()) => {
                    set_courses.update(|courses| courses.retain(|c| c.id != id));
                    ctx.show_toast("Course deleted", ToastKind::Success);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting course: {e}").into());
                    ctx.show_toast(e.user_message("Failed to delete course"), ToastKind::Error);
                }
            }
        });
    };

    view! {
        <div class="screen view-courses">
            <h4>"Manage Approved Courses"</h4>

            <div class="list-toolbar">
                <input
                    type="text"
                    class="form-control search-input"
                    placeholder="Search Courses"
                    prop:value=move || list.search_read.get()
                    on:input=move |ev| list.set_search_term(input_value(&ev))
                />
            </div>

            <Show when=move || loading.get()>
                <p>"Loading courses..."</p>
            </Show>
            {move || error.get().map(|message| view! { <p class="text-danger">{message}</p> })}

            <Show when=move || !loading.get() && error.get().is_none()>
                <table class="table table-bordered">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Course Title"</th>
                            <th>"Category"</th>
                            <th>"Subcategory"</th>
                            <th>"Level"</th>
                            <th>"Duration"</th>
                            <th>"View"</th>
                            <th>"Edit"</th>
                            <th>"Delete"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !visible.get().is_empty()
                            fallback=|| view! {
                                <tr><td colspan="9" class="text-center">"No courses found"</td></tr>
                            }
                        >
                            <For
                                each={move || visible.get().into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(_, course)| course.id
                                children=move |(row, course)| {
                                    let id = course.id;
                                    view! {
                                        <tr>
                                            <td>{move || first_index(list.page_read.get(), PAGE_SIZE) + row + 1}</td>
                                            <td>{course.course_title.clone()}</td>
                                            <td>{course.parent_category.clone().unwrap_or_default()}</td>
                                            <td>{course.sub_category.clone().unwrap_or_default()}</td>
                                            <td>{course.course_level.clone().unwrap_or_default()}</td>
                                            <td>{course.time_spend.clone().unwrap_or_default()}</td>
                                            <td>
                                                <button class="btn btn-info" on:click=move |_| view_course(id)>
                                                    "View"
                                                </button>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn-primary"
                                                    on:click=move |_| ctx.navigate(Screen::EditCourse(id))
                                                >
                                                    "Edit"
                                                </button>
                                            </td>
                                            <td>
                                                <DeleteConfirmButton
                                                    button_class="btn btn-danger"
                                                    on_confirm=Callback::new(move |_| delete_course(id))
                                                />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </Show>
                    </tbody>
                </table>

                <Pagination list=list total_pages=pages/>
            </Show>

            {move || selected.get().map(|course| view! {
                <CourseDetailModal course=course on_close=Callback::new(move |_| set_selected.set(None))/>
            })}
        </div>
    }
}

/// Lessons in display order (by stored `lession_order`)
fn sorted_lessons(course: &CourseDetail) -> Vec<LessonRecord> {
    let mut lessons = course.lessons.clone();
    lessons.sort_by_key(|lesson| lesson.lession_order.unwrap_or(0));
    lessons
}

#[component]
fn CourseDetailModal(course: CourseDetail, on_close: Callback<()>) -> impl IntoView {
    let lessons = sorted_lessons(&course);
    let video_count = lessons.iter().filter(|l| l.is_video()).count();
    let quiz_count = lessons.iter().filter(|l| l.is_quiz()).count();

    view! {
        <div class="modal-backdrop">
            <div class="modal-dialog modal-xl">
                <div class="modal-header">
                    <h5>{course.course_title.clone()}</h5>
                    <button class="btn-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="modal-body">
                    <h6>"Course Overview"</h6>
                    <p><strong>"Course ID: "</strong>{course.id}</p>
                    <p><strong>"Category: "</strong>{course.parent_category.clone().unwrap_or_default()}</p>
                    <p><strong>"Subcategory: "</strong>{course.sub_category.clone().unwrap_or_default()}</p>
                    <p><strong>"Level: "</strong>{course.course_level.clone().unwrap_or_default()}</p>
                    <p><strong>"Duration: "</strong>{course.time_spend.clone().unwrap_or_default()}</p>
                    <p>
                        <strong>"Description: "</strong>
                        {course.course_description.clone().unwrap_or_default()}
                    </p>
                    <p>
                        <strong>"Requirements: "</strong>
                        {course
                            .course_requirements
                            .clone()
                            .unwrap_or_else(|| "No specific requirements".to_string())}
                    </p>

                    {course.course_image.clone().map(|path| view! {
                        <img class="course-thumbnail" src=api::asset_url(&path) alt="Course thumbnail"/>
                    })}

                    <div class="course-stats">
                        <span>"Total Lessons: " {lessons.len()}</span>
                        <span>"Video Lessons: " {video_count}</span>
                        <span>"Quiz Lessons: " {quiz_count}</span>
                    </div>

                    <h6>"Course Lessons"</h6>
                    <Show
                        when={
                            let has_lessons = !lessons.is_empty();
                            move || has_lessons
                        }
                        fallback=|| view! { <p>"This course has no lessons yet."</p> }
                    >
                        {lessons
                            .iter()
                            .enumerate()
                            .map(|(index, lesson)| lesson_card(index, lesson))
                            .collect_view()}
                    </Show>
                </div>
            </div>
        </div>
    }
}

fn lesson_card(index: usize, lesson: &LessonRecord) -> impl IntoView {
    let badge = if lesson.is_video() { "Video" } else { "Quiz" };
    let questions = lesson
        .quiz
        .as_ref()
        .map(|quiz| quiz.questions.clone())
        .unwrap_or_default();

    view! {
        <div class="lesson-card">
            <div class="lesson-card-header">
                <span class="badge">{badge}</span>
                <span>{format!("{}. ", index + 1)}</span>
                <strong>{lesson.lession_title.clone()}</strong>
            </div>
            <p>
                <strong>"Description: "</strong>
                {lesson
                    .description
                    .clone()
                    .unwrap_or_else(|| "No description available".to_string())}
            </p>
            <p><strong>"Order: "</strong>{lesson.lession_order.unwrap_or(0)}</p>

            {questions
                .iter()
                .enumerate()
                .map(|(q_index, question)| {
                    let correct = question.correct_answer.clone().unwrap_or_default();
                    let options = [
                        question.option_1.clone().unwrap_or_default(),
                        question.option_2.clone().unwrap_or_default(),
                        question.option_3.clone().unwrap_or_default(),
                        question.option_4.clone().unwrap_or_default(),
                    ];
                    view! {
                        <div class="question-card">
                            <h6>{format!("Question {}", q_index + 1)}</h6>
                            <p>{question.question.clone().unwrap_or_default()}</p>
                            <ol type="a">
                                {options
                                    .iter()
                                    .map(|option| {
                                        let is_correct = !correct.is_empty() && *option == correct;
                                        let text = if is_correct {
                                            format!("{option} (Correct)")
                                        } else {
                                            option.clone()
                                        };
                                        view! {
                                            <li class=move || {
                                                if is_correct { "text-success" } else { "" }
                                            }>
                                                {text}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ol>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
