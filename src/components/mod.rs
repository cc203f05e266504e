//! UI Components
//!
//! Screens and reusable widgets.

mod add_course;
mod add_template;
mod change_password;
pub(crate) mod course_fields;
mod course_orders;
mod dashboard;
mod default_settings;
mod delete_confirm_button;
mod edit_course;
mod edit_profile;
mod edit_template;
mod lesson_editor;
mod logo_management;
mod main_categories;
mod manage_users;
mod navbar;
mod pagination;
mod sidebar;
mod sub_categories;
mod toast;
mod view_courses;
mod view_payments;
mod view_templates;

pub use add_course::AddCourse;
pub use add_template::AddTemplate;
pub use change_password::ChangePassword;
pub use course_orders::CourseOrders;
pub use dashboard::Dashboard;
pub use default_settings::DefaultSettings;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_course::EditCourse;
pub use edit_profile::EditProfile;
pub use edit_template::EditTemplate;
pub use lesson_editor::LessonEditor;
pub use logo_management::LogoManagement;
pub use main_categories::MainCategories;
pub use manage_users::ManageUsers;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use sidebar::Sidebar;
pub use sub_categories::SubCategories;
pub use toast::ToastHost;
pub use view_courses::ViewCourses;
pub use view_payments::ViewPayments;
pub use view_templates::ViewTemplates;

use wasm_bindgen::JsCast;

// ========================
// Event Plumbing Helpers
// ========================

/// Current value of the `<input>` behind an event
pub(crate) fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Current value of the `<textarea>` behind an event
pub(crate) fn textarea_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        .map(|area| area.value())
        .unwrap_or_default()
}

/// Current value of the `<select>` behind an event
pub(crate) fn select_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        .map(|select| select.value())
        .unwrap_or_default()
}

/// First file picked in the `<input type="file">` behind an event
pub(crate) fn picked_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}
