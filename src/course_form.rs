//! Course Form State
//!
//! Draft records behind the course authoring screens: an ordered list of
//! heterogeneous lessons (video or quiz) edited in place, then serialized
//! into the backend's nested `data` JSON document. Stored ids survive the
//! hydrate/serialize round-trip so edits update rows instead of recreating
//! them.

use serde::Serialize;
use web_sys::File;

use crate::models::CourseDetail;

/// Fixed option count per quiz question
pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonKind {
    Video,
    Quiz,
}

/// Scalar course fields, bound to the top half of the form
#[derive(Clone, Debug, Default)]
pub struct CourseFields {
    pub title: String,
    pub parent_category: String,
    pub sub_category: String,
    pub description: String,
    pub time_spend: String,
    pub requirements: String,
    pub level: String,
    pub validity_days: String,
    pub price: String,
}

#[derive(Clone, Debug, Default)]
pub struct QuestionDraft {
    pub id: Option<u32>,
    pub question: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer: String,
}

#[derive(Clone, Debug, Default)]
pub struct VideoDraft {
    pub id: Option<u32>,
    pub title: String,
    pub description: String,
    /// Raw input; blank falls back to the array position at serialization
    pub order: String,
    pub duration: String,
    pub image: Option<File>,
    pub video: Option<File>,
    pub document: Option<File>,
    /// Server paths kept for display in edit mode
    pub existing_image: String,
    pub existing_video: String,
    pub document_url: String,
}

#[derive(Clone, Debug, Default)]
pub struct QuizDraft {
    pub id: Option<u32>,
    pub quiz_id: Option<u32>,
    pub title: String,
    pub description: String,
    pub order: String,
    pub questions: Vec<QuestionDraft>,
}

/// One lesson under edit. Matched exhaustively everywhere a variant
/// matters; there is no `type` string to drift out of sync.
#[derive(Clone, Debug)]
pub enum LessonDraft {
    Video(VideoDraft),
    Quiz(QuizDraft),
}

impl LessonDraft {
    pub fn kind(&self) -> LessonKind {
        match self {
            LessonDraft::Video(_) => LessonKind::Video,
            LessonDraft::Quiz(_) => LessonKind::Quiz,
        }
    }
}

/// Empty-state template for a new video lesson
pub fn empty_video() -> LessonDraft {
    LessonDraft::Video(VideoDraft::default())
}

/// Empty-state template for a new quiz; a quiz always carries at least
/// one question
pub fn empty_quiz() -> LessonDraft {
    LessonDraft::Quiz(QuizDraft {
        questions: vec![QuestionDraft::default()],
        ..QuizDraft::default()
    })
}

// ========================
// Editing Operations
// ========================

/// Append a fresh lesson of the requested kind
pub fn push_lesson(lessons: &mut Vec<LessonDraft>, kind: LessonKind) {
    lessons.push(match kind {
        LessonKind::Video => empty_video(),
        LessonKind::Quiz => empty_quiz(),
    });
}

/// Remove a lesson by position; out-of-range indexes are ignored
pub fn remove_lesson(lessons: &mut Vec<LessonDraft>, index: usize) {
    if index < lessons.len() {
        lessons.remove(index);
    }
}

/// Append a blank question to the quiz at `lesson_index`
pub fn add_question(lessons: &mut [LessonDraft], lesson_index: usize) {
    if let Some(LessonDraft::Quiz(quiz)) = lessons.get_mut(lesson_index) {
        quiz.questions.push(QuestionDraft::default());
    }
}

/// Remove a question by position. A quiz never drops below one question:
/// the removal is refused (the UI also disables the button there).
pub fn remove_question(lessons: &mut [LessonDraft], lesson_index: usize, question_index: usize) {
    if let Some(LessonDraft::Quiz(quiz)) = lessons.get_mut(lesson_index) {
        if quiz.questions.len() > 1 && question_index < quiz.questions.len() {
            quiz.questions.remove(question_index);
        }
    }
}

/// Write one option slot. The option array is fixed at four slots;
/// writes past the end are ignored.
pub fn set_option(
    lessons: &mut [LessonDraft],
    lesson_index: usize,
    question_index: usize,
    option_index: usize,
    value: String,
) {
    if let Some(LessonDraft::Quiz(quiz)) = lessons.get_mut(lesson_index) {
        if let Some(question) = quiz.questions.get_mut(question_index) {
            if option_index < OPTION_COUNT {
                question.options[option_index] = value;
            }
        }
    }
}

// ========================
// Wire Format
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseDocument {
    pub course_title: String,
    pub parent_category: String,
    pub sub_category: String,
    pub course_description: String,
    pub time_spend: String,
    pub course_requirements: String,
    pub course_level: String,
    pub validity_days: String,
    pub course_price: String,
    pub lessons: Vec<LessonWire>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub lession_title: String,
    pub content_type: &'static str,
    pub lession_order: u32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<QuizWire>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub quiz_title: String,
    pub questions: Vec<QuestionWire>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub question: String,
    pub option_1: String,
    pub option_2: String,
    pub option_3: String,
    pub option_4: String,
    pub correct_answer: String,
}

/// Effective order: the typed value, or the 1-based array position when
/// the box was left blank (or holds something unparseable)
pub fn lesson_order(order: &str, index: usize) -> u32 {
    let trimmed = order.trim();
    if trimmed.is_empty() {
        return (index + 1) as u32;
    }
    trimmed.parse().unwrap_or((index + 1) as u32)
}

fn question_wire(question: &QuestionDraft) -> QuestionWire {
    QuestionWire {
        id: question.id,
        question: question.question.clone(),
        option_1: question.options[0].clone(),
        option_2: question.options[1].clone(),
        option_3: question.options[2].clone(),
        option_4: question.options[3].clone(),
        correct_answer: question.correct_answer.clone(),
    }
}

fn lesson_wire(lesson: &LessonDraft, index: usize) -> LessonWire {
    match lesson {
        LessonDraft::Video(video) => LessonWire {
            id: video.id,
            lession_title: video.title.clone(),
            content_type: "Video",
            lession_order: lesson_order(&video.order, index),
            description: video.description.clone(),
            duration: Some(video.duration.clone()),
            document_url: if video.document_url.is_empty() {
                None
            } else {
                Some(video.document_url.clone())
            },
            quiz: None,
        },
        LessonDraft::Quiz(quiz) => LessonWire {
            id: quiz.id,
            lession_title: quiz.title.clone(),
            content_type: "Quiz",
            lession_order: lesson_order(&quiz.order, index),
            description: quiz.description.clone(),
            duration: None,
            document_url: None,
            quiz: Some(QuizWire {
                id: quiz.quiz_id,
                quiz_title: quiz.title.clone(),
                questions: quiz.questions.iter().map(question_wire).collect(),
            }),
        },
    }
}

/// Flatten the form into the `data` JSON document the backend expects.
/// Binary parts travel separately as multipart fields.
pub fn course_document(fields: &CourseFields, lessons: &[LessonDraft]) -> CourseDocument {
    CourseDocument {
        course_title: fields.title.clone(),
        parent_category: fields.parent_category.clone(),
        sub_category: fields.sub_category.clone(),
        course_description: fields.description.clone(),
        time_spend: fields.time_spend.clone(),
        course_requirements: fields.requirements.clone(),
        course_level: fields.level.clone(),
        validity_days: fields.validity_days.clone(),
        course_price: fields.price.clone(),
        lessons: lessons
            .iter()
            .enumerate()
            .map(|(index, lesson)| lesson_wire(lesson, index))
            .collect(),
    }
}

/// Client-side checks run before any network call. The first violation
/// aborts the submission with a message for the status banner.
pub fn validate(fields: &CourseFields, lessons: &[LessonDraft]) -> Result<(), String> {
    if fields.title.trim().is_empty() {
        return Err("Course title is required".to_string());
    }
    if fields.parent_category.is_empty() {
        return Err("Please select a category".to_string());
    }
    if fields.sub_category.is_empty() {
        return Err("Please select a sub category".to_string());
    }
    if fields.level.is_empty() {
        return Err("Please select a level".to_string());
    }
    for (index, lesson) in lessons.iter().enumerate() {
        match lesson {
            LessonDraft::Video(video) => {
                if video.title.trim().is_empty() {
                    return Err(format!("Lesson {} needs a title", index + 1));
                }
            }
            LessonDraft::Quiz(quiz) => {
                if quiz.title.trim().is_empty() {
                    return Err(format!("Lesson {} needs a title", index + 1));
                }
                for (q_index, question) in quiz.questions.iter().enumerate() {
                    if question.question.trim().is_empty() {
                        return Err(format!(
                            "Question {} of lesson {} is empty",
                            q_index + 1,
                            index + 1
                        ));
                    }
                    if question.correct_answer.is_empty() {
                        return Err(format!(
                            "Pick a correct answer for question {} of lesson {}",
                            q_index + 1,
                            index + 1
                        ));
                    }
                }
            }
        }
    }
    Ok(())
}

// ========================
// Hydration (edit mode)
// ========================

fn value_to_input(value: &Option<serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Rebuild form state from a fetched course, preserving lesson, quiz and
/// question ids for the update round-trip
pub fn hydrate(course: &CourseDetail) -> (CourseFields, Vec<LessonDraft>) {
    let fields = CourseFields {
        title: course.course_title.clone(),
        parent_category: course.parent_category.clone().unwrap_or_default(),
        sub_category: course.sub_category.clone().unwrap_or_default(),
        description: course.course_description.clone().unwrap_or_default(),
        time_spend: course.time_spend.clone().unwrap_or_default(),
        requirements: course.course_requirements.clone().unwrap_or_default(),
        level: course.course_level.clone().unwrap_or_default(),
        validity_days: value_to_input(&course.validity_days),
        price: value_to_input(&course.course_price),
    };

    let lessons = course
        .lessons
        .iter()
        .map(|lesson| {
            if lesson.is_video() {
                LessonDraft::Video(VideoDraft {
                    id: Some(lesson.id),
                    title: lesson.lession_title.clone(),
                    description: lesson.description.clone().unwrap_or_default(),
                    order: lesson.lession_order.map(|o| o.to_string()).unwrap_or_default(),
                    duration: value_to_input(&lesson.duration),
                    image: None,
                    video: None,
                    document: None,
                    existing_image: lesson.lession_image.clone().unwrap_or_default(),
                    existing_video: lesson.lession_video.clone().unwrap_or_default(),
                    document_url: lesson.document_url.clone().unwrap_or_default(),
                })
            } else {
                let questions = lesson
                    .quiz
                    .as_ref()
                    .map(|quiz| {
                        quiz.questions
                            .iter()
                            .map(|q| QuestionDraft {
                                id: Some(q.id),
                                question: q.question.clone().unwrap_or_default(),
                                options: [
                                    q.option_1.clone().unwrap_or_default(),
                                    q.option_2.clone().unwrap_or_default(),
                                    q.option_3.clone().unwrap_or_default(),
                                    q.option_4.clone().unwrap_or_default(),
                                ],
                                correct_answer: q.correct_answer.clone().unwrap_or_default(),
                            })
                            .collect::<Vec<_>>()
                    })
                    .unwrap_or_default();

                LessonDraft::Quiz(QuizDraft {
                    id: Some(lesson.id),
                    quiz_id: lesson.quiz.as_ref().map(|quiz| quiz.id),
                    title: lesson.lession_title.clone(),
                    description: lesson.description.clone().unwrap_or_default(),
                    order: lesson.lession_order.map(|o| o.to_string()).unwrap_or_default(),
                    // a stored quiz without questions still edits as one blank row
                    questions: if questions.is_empty() {
                        vec![QuestionDraft::default()]
                    } else {
                        questions
                    },
                })
            }
        })
        .collect();

    (fields, lessons)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_quiz(question_count: usize) -> LessonDraft {
        let mut quiz = QuizDraft::default();
        for i in 0..question_count {
            quiz.questions.push(QuestionDraft {
                question: format!("Question {}", i + 1),
                options: [
                    "a".to_string(),
                    "b".to_string(),
                    "c".to_string(),
                    "d".to_string(),
                ],
                correct_answer: "a".to_string(),
                ..QuestionDraft::default()
            });
        }
        LessonDraft::Quiz(quiz)
    }

    #[test]
    fn test_add_lessons_preserves_insertion_order() {
        let mut lessons = Vec::new();
        push_lesson(&mut lessons, LessonKind::Video);
        push_lesson(&mut lessons, LessonKind::Quiz);

        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].kind(), LessonKind::Video);
        assert_eq!(lessons[1].kind(), LessonKind::Quiz);
    }

    #[test]
    fn test_new_quiz_starts_with_one_blank_question() {
        let quiz = empty_quiz();
        match quiz {
            LessonDraft::Quiz(q) => {
                assert_eq!(q.questions.len(), 1);
                assert!(q.questions[0].question.is_empty());
            }
            LessonDraft::Video(_) => panic!("expected quiz"),
        }
    }

    #[test]
    fn test_remove_lesson_by_position() {
        let mut lessons = vec![empty_video(), empty_quiz(), empty_video()];
        remove_lesson(&mut lessons, 1);
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].kind(), LessonKind::Video);
        assert_eq!(lessons[1].kind(), LessonKind::Video);

        // past the end: no-op
        remove_lesson(&mut lessons, 9);
        assert_eq!(lessons.len(), 2);
    }

    #[test]
    fn test_remove_last_question_is_refused() {
        let mut lessons = vec![make_quiz(1)];
        remove_question(&mut lessons, 0, 0);
        match &lessons[0] {
            LessonDraft::Quiz(quiz) => assert_eq!(quiz.questions.len(), 1),
            LessonDraft::Video(_) => panic!("expected quiz"),
        }
    }

    #[test]
    fn test_remove_question_when_more_than_one() {
        let mut lessons = vec![make_quiz(3)];
        remove_question(&mut lessons, 0, 1);
        match &lessons[0] {
            LessonDraft::Quiz(quiz) => {
                assert_eq!(quiz.questions.len(), 2);
                assert_eq!(quiz.questions[0].question, "Question 1");
                assert_eq!(quiz.questions[1].question, "Question 3");
            }
            LessonDraft::Video(_) => panic!("expected quiz"),
        }
    }

    #[test]
    fn test_set_option_writes_one_slot() {
        let mut lessons = vec![make_quiz(1)];
        set_option(&mut lessons, 0, 0, 2, "updated".to_string());
        match &lessons[0] {
            LessonDraft::Quiz(quiz) => {
                assert_eq!(quiz.questions[0].options[2], "updated");
                assert_eq!(quiz.questions[0].options[0], "a");
            }
            LessonDraft::Video(_) => panic!("expected quiz"),
        }
    }

    #[test]
    fn test_set_option_out_of_bounds_is_ignored() {
        let mut lessons = vec![make_quiz(1)];
        set_option(&mut lessons, 0, 0, OPTION_COUNT, "oob".to_string());
        match &lessons[0] {
            LessonDraft::Quiz(quiz) => {
                assert!(quiz.questions[0].options.iter().all(|o| o != "oob"));
            }
            LessonDraft::Video(_) => panic!("expected quiz"),
        }
    }

    #[test]
    fn test_blank_order_defaults_to_position() {
        assert_eq!(lesson_order("", 2), 3);
        assert_eq!(lesson_order("  ", 0), 1);
        assert_eq!(lesson_order("7", 2), 7);
        assert_eq!(lesson_order("abc", 4), 5);
    }

    #[test]
    fn test_serializer_defaults_order_from_index() {
        let mut lessons = vec![empty_video(), empty_video(), empty_video()];
        if let LessonDraft::Video(video) = &mut lessons[2] {
            video.title = "Third".to_string();
        }
        let doc = course_document(&CourseFields::default(), &lessons);
        assert_eq!(doc.lessons[2].lession_order, 3);
        assert_eq!(doc.lessons[2].lession_title, "Third");
    }

    #[test]
    fn test_serializer_flattens_quiz_options() {
        let lessons = vec![make_quiz(1)];
        let doc = course_document(&CourseFields::default(), &lessons);

        let quiz = doc.lessons[0].quiz.as_ref().expect("quiz payload");
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].option_1, "a");
        assert_eq!(quiz.questions[0].option_4, "d");
        assert_eq!(quiz.questions[0].correct_answer, "a");
        assert_eq!(doc.lessons[0].content_type, "Quiz");
        assert!(doc.lessons[0].duration.is_none());
    }

    #[test]
    fn test_serializer_keeps_ids_for_round_trip() {
        let mut lessons = vec![make_quiz(1)];
        if let LessonDraft::Quiz(quiz) = &mut lessons[0] {
            quiz.id = Some(11);
            quiz.quiz_id = Some(22);
            quiz.questions[0].id = Some(33);
        }
        let doc = course_document(&CourseFields::default(), &lessons);
        assert_eq!(doc.lessons[0].id, Some(11));
        let quiz = doc.lessons[0].quiz.as_ref().unwrap();
        assert_eq!(quiz.id, Some(22));
        assert_eq!(quiz.questions[0].id, Some(33));
    }

    #[test]
    fn test_new_lessons_serialize_without_ids() {
        let lessons = vec![empty_video()];
        let doc = course_document(&CourseFields::default(), &lessons);
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["lessons"][0].get("id").is_none());
        assert!(json["lessons"][0].get("quiz").is_none());
    }

    #[test]
    fn test_validate_rejects_missing_correct_answer() {
        let fields = CourseFields {
            title: "Rust 101".to_string(),
            parent_category: "Programming".to_string(),
            sub_category: "Systems".to_string(),
            level: "Beginner".to_string(),
            ..CourseFields::default()
        };
        let mut lessons = vec![make_quiz(1)];
        if let LessonDraft::Quiz(quiz) = &mut lessons[0] {
            quiz.title = "Check-in".to_string();
            quiz.questions[0].correct_answer = String::new();
        }
        let err = validate(&fields, &lessons).unwrap_err();
        assert!(err.contains("correct answer"));
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        let fields = CourseFields {
            title: "Rust 101".to_string(),
            parent_category: "Programming".to_string(),
            sub_category: "Systems".to_string(),
            level: "Beginner".to_string(),
            ..CourseFields::default()
        };
        let mut lessons = vec![make_quiz(2)];
        if let LessonDraft::Quiz(quiz) = &mut lessons[0] {
            quiz.title = "Check-in".to_string();
        }
        assert!(validate(&fields, &lessons).is_ok());
    }

    #[test]
    fn test_hydrate_round_trip_preserves_ids_and_order() {
        use crate::models::{CourseDetail, LessonRecord, QuestionRecord, QuizRecord};

        let course = CourseDetail {
            id: 5,
            course_title: "Rust 101".to_string(),
            parent_category: Some("Programming".to_string()),
            sub_category: Some("Systems".to_string()),
            course_description: Some("desc".to_string()),
            course_requirements: None,
            course_level: Some("Beginner".to_string()),
            time_spend: Some("4h/week".to_string()),
            validity_days: Some(serde_json::json!(365)),
            course_price: Some(serde_json::json!("49.99")),
            course_image: None,
            preview_video: None,
            certificate_template: None,
            subscription_id: None,
            created_at: None,
            updated_at: None,
            lessons: vec![
                LessonRecord {
                    id: 1,
                    lession_title: "Intro".to_string(),
                    content_type: "Video".to_string(),
                    lession_order: Some(1),
                    description: Some("welcome".to_string()),
                    duration: Some(serde_json::json!(12)),
                    lession_image: Some("uploads/intro.png".to_string()),
                    lession_video: None,
                    document_url: None,
                    quiz: None,
                },
                LessonRecord {
                    id: 2,
                    lession_title: "Check-in".to_string(),
                    content_type: "Quiz".to_string(),
                    lession_order: Some(2),
                    description: None,
                    duration: None,
                    lession_image: None,
                    lession_video: None,
                    document_url: None,
                    quiz: Some(QuizRecord {
                        id: 9,
                        quiz_title: Some("Check-in".to_string()),
                        questions: vec![QuestionRecord {
                            id: 42,
                            question: Some("2 + 2?".to_string()),
                            option_1: Some("3".to_string()),
                            option_2: Some("4".to_string()),
                            option_3: Some("5".to_string()),
                            option_4: Some("6".to_string()),
                            correct_answer: Some("4".to_string()),
                        }],
                    }),
                },
            ],
        };

        let (fields, lessons) = hydrate(&course);
        assert_eq!(fields.title, "Rust 101");
        assert_eq!(fields.validity_days, "365");
        assert_eq!(fields.price, "49.99");
        assert_eq!(lessons.len(), 2);

        let doc = course_document(&fields, &lessons);
        assert_eq!(doc.lessons[0].id, Some(1));
        assert_eq!(doc.lessons[0].duration.as_deref(), Some("12"));
        assert_eq!(doc.lessons[1].id, Some(2));
        let quiz = doc.lessons[1].quiz.as_ref().unwrap();
        assert_eq!(quiz.id, Some(9));
        assert_eq!(quiz.questions[0].id, Some(42));
        assert_eq!(quiz.questions[0].correct_answer, "4");
    }
}
