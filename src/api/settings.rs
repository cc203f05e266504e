//! Settings Endpoints
//!
//! Site settings CRUD plus the logo/icon image upload. A fresh install
//! has no settings row yet; the screens treat an empty list or a 404 as
//! "create mode".

use reqwasm::http::Method;
use web_sys::{File, FormData};

use super::{get_json, send_form, send_json, ApiError};
use crate::models::{SettingsMutationResponse, SiteSettings};

pub async fn fetch_settings_all() -> Result<Vec<SiteSettings>, ApiError> {
    get_json("/api/settings/all").await
}

/// The navbar's single-row fetch (logo and site name)
pub async fn fetch_settings(id: u32) -> Result<SiteSettings, ApiError> {
    get_json(&format!("/api/settings/{id}")).await
}

pub async fn create_settings(
    settings: &SiteSettings,
) -> Result<SettingsMutationResponse, ApiError> {
    send_json(Method::POST, "/api/settings/create", settings, None).await
}

pub async fn update_settings(
    id: u32,
    settings: &SiteSettings,
) -> Result<SettingsMutationResponse, ApiError> {
    send_json(Method::PUT, &format!("/api/settings/edit/{id}"), settings, None).await
}

/// Images selected on the logo management screen
#[derive(Clone, Debug, Default)]
pub struct LogoImages {
    pub site_icon: Option<File>,
    pub site_logo: Option<File>,
    pub site_dark_logo: Option<File>,
}

impl LogoImages {
    pub fn is_empty(&self) -> bool {
        self.site_icon.is_none() && self.site_logo.is_none() && self.site_dark_logo.is_none()
    }
}

fn logo_form(images: &LogoImages, site_name: Option<&str>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_string()))?;
    if let Some(site_name) = site_name {
        form.append_with_str("site_name", site_name)
            .map_err(|_| ApiError::Network("failed to append site_name".to_string()))?;
    }
    for (name, file) in [
        ("site_icon", &images.site_icon),
        ("site_logo", &images.site_logo),
        ("site_dark_logo", &images.site_dark_logo),
    ] {
        if let Some(file) = file {
            form.append_with_blob(name, file)
                .map_err(|_| ApiError::Network(format!("failed to append {name}")))?;
        }
    }
    Ok(form)
}

/// First-time setup: create the settings row together with the images.
/// The backend requires a site name on create.
pub async fn create_settings_with_images(
    images: &LogoImages,
    site_name: &str,
) -> Result<SettingsMutationResponse, ApiError> {
    let form = logo_form(images, Some(site_name))?;
    send_form(Method::POST, "/api/settings/create", form, None).await
}

/// Replace images on an existing settings row
pub async fn upload_settings_images(
    images: &LogoImages,
) -> Result<SettingsMutationResponse, ApiError> {
    let form = logo_form(images, None)?;
    send_form(Method::POST, "/api/settings/upload-images", form, None).await
}
