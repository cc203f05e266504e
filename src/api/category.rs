//! Category Endpoints
//!
//! Main and sub category CRUD. List responses differ in shape: main
//! categories arrive under a `data` envelope, subcategories as a bare
//! array.

use reqwasm::http::Method;
use serde::Serialize;

use super::{delete, get_json, send_json, ApiError};
use crate::models::{Category, CategoryListResponse, SubCategory};

#[derive(Serialize)]
struct CategoryPayload<'a> {
    category_name: &'a str,
}

#[derive(Serialize)]
struct SubCategoryPayload<'a> {
    sub_category: &'a str,
    parent_category: &'a str,
}

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let response: CategoryListResponse = get_json("/api/category/all").await?;
    Ok(response.data)
}

pub async fn create_category(name: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = send_json(
        Method::POST,
        "/api/category/create",
        &CategoryPayload {
            category_name: name,
        },
        None,
    )
    .await?;
    Ok(())
}

pub async fn delete_category(id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/category/delete/{id}")).await
}

pub async fn fetch_sub_categories() -> Result<Vec<SubCategory>, ApiError> {
    get_json("/api/sub_category/all").await
}

pub async fn create_sub_category(name: &str, parent: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = send_json(
        Method::POST,
        "/api/sub_category/create",
        &SubCategoryPayload {
            sub_category: name,
            parent_category: parent,
        },
        None,
    )
    .await?;
    Ok(())
}

pub async fn delete_sub_category(id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/sub_category/delete/{id}")).await
}
