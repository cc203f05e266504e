//! User Endpoints

use super::{delete, get_json, ApiError};
use crate::models::{EnrollmentCheck, UserAccount};

pub async fn fetch_users() -> Result<Vec<UserAccount>, ApiError> {
    get_json("/api/user/all").await
}

pub async fn delete_user(uid: &str) -> Result<(), ApiError> {
    delete(&format!("/api/user/delete/{uid}")).await
}

/// Whether (and where) the user is enrolled; shown before deletion
pub async fn check_enrollment(uid: &str) -> Result<EnrollmentCheck, ApiError> {
    get_json(&format!("/api/enrollment/course/check/{uid}")).await
}
