//! Template Endpoints
//!
//! Template marketplace CRUD. Uploads are multipart with indexed file
//! parts: `file0` is reserved for the cover image, template files follow
//! as `file1..fileN`; edits additionally carry `existingFile{n}` JSON
//! blobs for server files being kept, plus the slot count.

use reqwasm::http::Method;
use web_sys::{File, FormData};

use super::{delete, get_json, send_form, ApiError};
use crate::models::{Template, TemplateFileRecord, TemplateListResponse, TemplateResponse};
use crate::template_form::FileSlots;

pub async fn fetch_templates() -> Result<Vec<Template>, ApiError> {
    let response: TemplateListResponse = get_json("/api/templates/all").await?;
    Ok(response.templates)
}

pub async fn fetch_template(id: u32) -> Result<Template, ApiError> {
    let response: TemplateResponse = get_json(&format!("/api/templates/{id}")).await?;
    Ok(response.template)
}

pub async fn delete_template(id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/templates/delete/{id}")).await
}

/// The template's stored `files` column: either a JSON array already, or
/// a JSON-encoded string of one
pub fn parse_file_records(template: &Template) -> Vec<TemplateFileRecord> {
    let Some(files) = &template.files else {
        return Vec::new();
    };
    let value = match files {
        serde_json::Value::String(raw) => match serde_json::from_str(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Error parsing template files: {e}").into(),
                );
                return Vec::new();
            }
        },
        other => other.clone(),
    };
    serde_json::from_value(value).unwrap_or_default()
}

fn new_form_data() -> Result<FormData, ApiError> {
    FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_string()))
}

fn append_str(form: &FormData, name: &str, value: &str) -> Result<(), ApiError> {
    form.append_with_str(name, value)
        .map_err(|_| ApiError::Network(format!("failed to append {name}")))
}

fn template_form(
    name: &str,
    description: &str,
    price: &str,
    cover: Option<&File>,
    slots: &FileSlots<File>,
    include_existing: bool,
) -> Result<FormData, ApiError> {
    let form = new_form_data()?;
    append_str(&form, "templateName", name)?;
    append_str(&form, "templateDescription", description)?;
    append_str(&form, "templatePrice", price)?;

    if let Some(cover) = cover {
        form.append_with_blob("file0", cover)
            .map_err(|_| ApiError::Network("failed to append file0".to_string()))?;
    }

    for (part_name, file) in slots.file_parts() {
        form.append_with_blob(&part_name, &file)
            .map_err(|_| ApiError::Network(format!("failed to append {part_name}")))?;
    }

    if include_existing {
        for (part_name, record) in slots.existing_parts() {
            let blob =
                serde_json::to_string(&record).map_err(|e| ApiError::Decode(e.to_string()))?;
            append_str(&form, &part_name, &blob)?;
        }
        append_str(&form, "fileCount", &slots.len().to_string())?;
    }

    Ok(form)
}

pub async fn create_template(
    name: &str,
    description: &str,
    price: &str,
    cover: &File,
    slots: &FileSlots<File>,
) -> Result<(), ApiError> {
    let form = template_form(name, description, price, Some(cover), slots, false)?;
    let _: serde_json::Value = send_form(Method::POST, "/api/templates/create", form, None).await?;
    Ok(())
}

pub async fn update_template(
    id: u32,
    name: &str,
    description: &str,
    price: &str,
    cover: Option<&File>,
    slots: &FileSlots<File>,
) -> Result<(), ApiError> {
    let form = template_form(name, description, price, cover, slots, true)?;
    let _: serde_json::Value = send_form(
        Method::PUT,
        &format!("/api/templates/update/{id}"),
        form,
        None,
    )
    .await?;
    Ok(())
}
