//! Course Endpoints
//!
//! Course CRUD. Create/update travel as multipart: one `data` field
//! holding the nested course+lessons JSON document, plus binary parts for
//! the course media and per-lesson files in lesson traversal order.

use reqwasm::http::Method;
use web_sys::{File, FormData};

use super::{delete, get_json, send_form, ApiError};
use crate::course_form::{CourseDocument, LessonDraft};
use crate::models::{CourseDetail, CourseListResponse, CourseResponse, CourseSummary};

/// Top-level media selected in the course form
#[derive(Clone, Debug, Default)]
pub struct CourseMedia {
    pub image: Option<File>,
    pub preview_video: Option<File>,
    pub certificate_template: Option<File>,
}

pub async fn fetch_courses() -> Result<Vec<CourseSummary>, ApiError> {
    let response: CourseListResponse = get_json("/api/course/all").await?;
    Ok(response.courses)
}

pub async fn fetch_course(id: u32) -> Result<CourseDetail, ApiError> {
    let response: CourseResponse = get_json(&format!("/api/course/{id}")).await?;
    Ok(response.course)
}

pub async fn delete_course(id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/course/{id}")).await
}

fn new_form_data() -> Result<FormData, ApiError> {
    FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_string()))
}

fn append_str(form: &FormData, name: &str, value: &str) -> Result<(), ApiError> {
    form.append_with_str(name, value)
        .map_err(|_| ApiError::Network(format!("failed to append {name}")))
}

fn append_file(form: &FormData, name: &str, file: &File) -> Result<(), ApiError> {
    form.append_with_blob(name, file)
        .map_err(|_| ApiError::Network(format!("failed to append {name}")))
}

/// Assemble the multipart body shared by create and update.
/// `with_indexes` additionally records which lesson each binary part
/// belongs to, so an update can re-link files to surviving lessons.
fn course_form(
    document: &CourseDocument,
    media: &CourseMedia,
    lessons: &[LessonDraft],
    with_indexes: bool,
) -> Result<FormData, ApiError> {
    let form = new_form_data()?;
    let data = serde_json::to_string(document).map_err(|e| ApiError::Decode(e.to_string()))?;
    append_str(&form, "data", &data)?;

    if let Some(image) = &media.image {
        append_file(&form, "course_image", image)?;
    }
    if let Some(video) = &media.preview_video {
        append_file(&form, "preview_video", video)?;
    }
    if let Some(certificate) = &media.certificate_template {
        append_file(&form, "certificate_template", certificate)?;
    }

    for (index, lesson) in lessons.iter().enumerate() {
        if let LessonDraft::Video(video) = lesson {
            if let Some(image) = &video.image {
                append_file(&form, "lesson_images", image)?;
                if with_indexes {
                    append_str(&form, "lesson_image_index", &index.to_string())?;
                }
            }
            if let Some(file) = &video.video {
                append_file(&form, "lesson_videos", file)?;
                if with_indexes {
                    append_str(&form, "lesson_video_index", &index.to_string())?;
                }
            }
            if let Some(document) = &video.document {
                append_file(&form, "lesson_documents", document)?;
            }
        }
    }

    Ok(form)
}

pub async fn create_course(
    document: &CourseDocument,
    media: &CourseMedia,
    lessons: &[LessonDraft],
) -> Result<(), ApiError> {
    let form = course_form(document, media, lessons, false)?;
    let _: serde_json::Value = send_form(Method::POST, "/api/course", form, None).await?;
    Ok(())
}

pub async fn update_course(
    id: u32,
    document: &CourseDocument,
    media: &CourseMedia,
    lessons: &[LessonDraft],
) -> Result<(), ApiError> {
    let form = course_form(document, media, lessons, true)?;
    let _: serde_json::Value =
        send_form(Method::PUT, &format!("/api/course/{id}"), form, None).await?;
    Ok(())
}
