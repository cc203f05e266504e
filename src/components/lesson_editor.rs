//! Lesson Editor Component
//!
//! The nested add/remove/update editor for a course's lesson list, shared
//! by the add and edit screens. Rows are keyed by position and read their
//! fields reactively, so removals shift cleanly; all writes go through
//! the `course_form` operations.

use leptos::prelude::*;

use crate::components::{input_value, picked_file, select_value, textarea_value};
use crate::course_form::{
    add_question, push_lesson, remove_lesson, remove_question, set_option, LessonDraft,
    LessonKind, QuizDraft, VideoDraft, OPTION_COUNT,
};

// lesson drafts hold `web_sys::File` handles, so their signals live in
// local (non-Send) storage
type LessonsRead = ReadSignal<Vec<LessonDraft>, LocalStorage>;
type LessonsWrite = WriteSignal<Vec<LessonDraft>, LocalStorage>;
type Lessons = (LessonsRead, LessonsWrite);

fn video_field(
    lessons: LessonsRead,
    index: usize,
    read: impl Fn(&VideoDraft) -> String + Copy + 'static,
) -> impl Fn() -> String + Copy {
    move || {
        lessons.with(|l| match l.get(index) {
            Some(LessonDraft::Video(video)) => read(video),
            _ => String::new(),
        })
    }
}

fn with_video(lessons: &mut Vec<LessonDraft>, index: usize, write: impl FnOnce(&mut VideoDraft)) {
    if let Some(LessonDraft::Video(video)) = lessons.get_mut(index) {
        write(video);
    }
}

fn with_quiz(lessons: &mut Vec<LessonDraft>, index: usize, write: impl FnOnce(&mut QuizDraft)) {
    if let Some(LessonDraft::Quiz(quiz)) = lessons.get_mut(index) {
        write(quiz);
    }
}

/// Lesson list editor: "Add Video Lesson" / "Add Quiz" plus one editable
/// card per lesson. `edit_mode` shows the server paths of already
/// uploaded media next to the replacement pickers.
#[component]
pub fn LessonEditor(lessons: Lessons, #[prop(optional)] edit_mode: bool) -> impl IntoView {
    let (lessons, set_lessons) = lessons;

    view! {
        <div class="lesson-editor">
            <h5>"Lessons"</h5>
            <div class="lesson-editor-actions">
                <button
                    type="button"
                    class="btn btn-primary me-2"
                    on:click=move |_| set_lessons.update(|l| push_lesson(l, LessonKind::Video))
                >
                    "Add Video Lesson"
                </button>
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| set_lessons.update(|l| push_lesson(l, LessonKind::Quiz))
                >
                    "Add Quiz"
                </button>
            </div>

            <For
                each={move || (0..lessons.get().len()).collect::<Vec<_>>()}
                key=|index| *index
                children=move |index| {
                    let is_video = move || {
                        lessons.with(|l| matches!(l.get(index), Some(LessonDraft::Video(_))))
                    };
                    view! {
                        <div class="card lesson-draft-card">
                            <div class="lesson-draft-header">
                                <h6>{move || if is_video() { "Video Lesson" } else { "Quiz" }}</h6>
                                <button
                                    type="button"
                                    class="btn btn-danger btn-sm"
                                    on:click=move |_| set_lessons.update(|l| remove_lesson(l, index))
                                >
                                    "×"
                                </button>
                            </div>

                            <label class="form-label">"Title"</label>
                            <input
                                type="text"
                                class="form-control"
                                prop:value=move || {
                                    lessons.with(|l| match l.get(index) {
                                        Some(LessonDraft::Video(v)) => v.title.clone(),
                                        Some(LessonDraft::Quiz(q)) => q.title.clone(),
                                        None => String::new(),
                                    })
                                }
                                on:input=move |ev| {
                                    let value = input_value(&ev);
                                    set_lessons.update(|l| match l.get_mut(index) {
                                        Some(LessonDraft::Video(v)) => v.title = value,
                                        Some(LessonDraft::Quiz(q)) => q.title = value,
                                        None => {}
                                    });
                                }
                            />

                            <label class="form-label">"Description"</label>
                            <textarea
                                class="form-control"
                                prop:value=move || {
                                    lessons.with(|l| match l.get(index) {
                                        Some(LessonDraft::Video(v)) => v.description.clone(),
                                        Some(LessonDraft::Quiz(q)) => q.description.clone(),
                                        None => String::new(),
                                    })
                                }
                                on:input=move |ev| {
                                    let value = textarea_value(&ev);
                                    set_lessons.update(|l| match l.get_mut(index) {
                                        Some(LessonDraft::Video(v)) => v.description = value,
                                        Some(LessonDraft::Quiz(q)) => q.description = value,
                                        None => {}
                                    });
                                }
                            ></textarea>

                            <label class="form-label">"Order"</label>
                            <input
                                type="number"
                                class="form-control"
                                prop:value=move || {
                                    lessons.with(|l| match l.get(index) {
                                        Some(LessonDraft::Video(v)) => v.order.clone(),
                                        Some(LessonDraft::Quiz(q)) => q.order.clone(),
                                        None => String::new(),
                                    })
                                }
                                on:input=move |ev| {
                                    let value = input_value(&ev);
                                    set_lessons.update(|l| match l.get_mut(index) {
                                        Some(LessonDraft::Video(v)) => v.order = value,
                                        Some(LessonDraft::Quiz(q)) => q.order = value,
                                        None => {}
                                    });
                                }
                            />

                            <Show
                                when=is_video
                                fallback=move || quiz_section(lessons, set_lessons, index)
                            >
                                {video_section(lessons, set_lessons, index, edit_mode)}
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}

fn video_section(
    lessons: LessonsRead,
    set_lessons: LessonsWrite,
    index: usize,
    edit_mode: bool,
) -> impl IntoView {
    let existing_image = video_field(lessons, index, |v| v.existing_image.clone());
    let existing_video = video_field(lessons, index, |v| v.existing_video.clone());

    view! {
        <div class="video-lesson-fields">
            <label class="form-label">"Duration (in minutes)"</label>
            <input
                type="number"
                class="form-control"
                prop:value=video_field(lessons, index, |v| v.duration.clone())
                on:input=move |ev| {
                    let value = input_value(&ev);
                    set_lessons.update(|l| with_video(l, index, |v| v.duration = value));
                }
            />

            <label class="form-label">"Lesson Image"</label>
            <input
                type="file"
                class="form-control"
                accept=".jpg,.png,.jpeg"
                on:change=move |ev| {
                    let file = picked_file(&ev);
                    set_lessons.update(|l| with_video(l, index, |v| v.image = file));
                }
            />
            <Show when=move || edit_mode && !existing_image().is_empty()>
                <small class="text-muted">"Current: " {existing_image}</small>
            </Show>

            <label class="form-label">"Lesson Video"</label>
            <input
                type="file"
                class="form-control"
                accept=".mp4"
                on:change=move |ev| {
                    let file = picked_file(&ev);
                    set_lessons.update(|l| with_video(l, index, |v| v.video = file));
                }
            />
            <Show when=move || edit_mode && !existing_video().is_empty()>
                <small class="text-muted">"Current: " {existing_video}</small>
            </Show>

            <label class="form-label">"Lesson Document (Optional)"</label>
            <input
                type="file"
                class="form-control"
                accept=".pdf,.doc,.docx"
                on:change=move |ev| {
                    let file = picked_file(&ev);
                    set_lessons.update(|l| with_video(l, index, |v| v.document = file));
                }
            />
        </div>
    }
}

fn quiz_section(lessons: LessonsRead, set_lessons: LessonsWrite, index: usize) -> impl IntoView {
    let question_count = move || {
        lessons.with(|l| match l.get(index) {
            Some(LessonDraft::Quiz(quiz)) => quiz.questions.len(),
            _ => 0,
        })
    };

    view! {
        <div class="quiz-fields">
            <For
                each={move || (0..question_count()).collect::<Vec<_>>()}
                key=|q_index| *q_index
                children=move |q_index| {
                    let question_text = move || {
                        lessons.with(|l| match l.get(index) {
                            Some(LessonDraft::Quiz(quiz)) => quiz
                                .questions
                                .get(q_index)
                                .map(|q| q.question.clone())
                                .unwrap_or_default(),
                            _ => String::new(),
                        })
                    };
                    let correct_answer = move || {
                        lessons.with(|l| match l.get(index) {
                            Some(LessonDraft::Quiz(quiz)) => quiz
                                .questions
                                .get(q_index)
                                .map(|q| q.correct_answer.clone())
                                .unwrap_or_default(),
                            _ => String::new(),
                        })
                    };
                    let option_values = move || {
                        lessons.with(|l| match l.get(index) {
                            Some(LessonDraft::Quiz(quiz)) => quiz
                                .questions
                                .get(q_index)
                                .map(|q| q.options.clone())
                                .unwrap_or_default(),
                            _ => Default::default(),
                        })
                    };

                    view! {
                        <div class="card question-card">
                            <div class="question-card-header">
                                <h6>{format!("Question {}", q_index + 1)}</h6>
                                // a quiz keeps at least one question
                                <button
                                    type="button"
                                    class="btn btn-danger btn-sm"
                                    disabled=move || question_count() <= 1
                                    on:click=move |_| {
                                        set_lessons.update(|l| remove_question(l, index, q_index))
                                    }
                                >
                                    "×"
                                </button>
                            </div>

                            <label class="form-label">"Question"</label>
                            <input
                                type="text"
                                class="form-control"
                                prop:value=question_text
                                on:input=move |ev| {
                                    let value = input_value(&ev);
                                    set_lessons.update(|l| {
                                        with_quiz(l, index, |quiz| {
                                            if let Some(q) = quiz.questions.get_mut(q_index) {
                                                q.question = value;
                                            }
                                        })
                                    });
                                }
                            />

                            {(0..OPTION_COUNT)
                                .map(|o_index| {
                                    view! {
                                        <label class="form-label">
                                            {format!("Option {}", o_index + 1)}
                                        </label>
                                        <input
                                            type="text"
                                            class="form-control"
                                            prop:value=move || {
                                                option_values()[o_index].clone()
                                            }
                                            on:input=move |ev| {
                                                let value = input_value(&ev);
                                                set_lessons.update(|l| {
                                                    set_option(l, index, q_index, o_index, value)
                                                });
                                            }
                                        />
                                    }
                                })
                                .collect_view()}

                            <label class="form-label">"Correct Answer"</label>
                            // the select only ever offers the current option texts
                            <select
                                class="form-select"
                                prop:value=correct_answer
                                on:change=move |ev| {
                                    let value = select_value(&ev);
                                    set_lessons.update(|l| {
                                        with_quiz(l, index, |quiz| {
                                            if let Some(q) = quiz.questions.get_mut(q_index) {
                                                q.correct_answer = value;
                                            }
                                        })
                                    });
                                }
                            >
                                <option value="" disabled selected>"Select correct answer"</option>
                                {move || {
                                    option_values()
                                        .iter()
                                        .enumerate()
                                        .map(|(o_index, option)| {
                                            let label = if option.is_empty() {
                                                format!("Option {}", o_index + 1)
                                            } else {
                                                option.clone()
                                            };
                                            view! {
                                                <option value=option.clone()>{label}</option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                    }
                }
            />

            <button
                type="button"
                class="btn btn-primary"
                on:click=move |_| set_lessons.update(|l| add_question(l, index))
            >
                "Add Question"
            </button>
        </div>
    }
}
