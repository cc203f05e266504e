//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The backend is
//! the source of truth; everything here is a cache refreshed by full
//! refetch after mutations, never patched incrementally.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{AdminProfile, Category, SiteSettings, SubCategory};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Category picker options, shared by the course forms
    pub categories: Vec<Category>,
    /// Subcategory picker options
    pub sub_categories: Vec<SubCategory>,
    /// Site settings record (navbar logo, settings screens)
    pub settings: Option<SiteSettings>,
    /// Signed-in admin profile
    pub profile: Option<AdminProfile>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_categories(store: &AppStore, categories: Vec<Category>) {
    *store.categories().write() = categories;
}

pub fn store_set_sub_categories(store: &AppStore, sub_categories: Vec<SubCategory>) {
    *store.sub_categories().write() = sub_categories;
}

pub fn store_set_settings(store: &AppStore, settings: Option<SiteSettings>) {
    *store.settings().write() = settings;
}

pub fn store_set_profile(store: &AppStore, profile: Option<AdminProfile>) {
    *store.profile().write() = profile;
}
