//! Frontend Models
//!
//! Data structures matching backend entities and response envelopes.

use serde::{Deserialize, Serialize};

/// Course category (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub cid: u32,
    pub category_name: String,
}

/// Course subcategory (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: u32,
    pub sub_category: String,
    #[serde(default)]
    pub parent_category: Option<String>,
}

/// Platform user account (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub uid: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Course row as listed by `GET /api/course/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: u32,
    pub course_title: String,
    #[serde(default)]
    pub parent_category: Option<String>,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub course_level: Option<String>,
    #[serde(default)]
    pub time_spend: Option<String>,
}

/// Full course record as returned by `GET /api/course/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDetail {
    pub id: u32,
    pub course_title: String,
    #[serde(default)]
    pub parent_category: Option<String>,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub course_description: Option<String>,
    #[serde(default)]
    pub course_requirements: Option<String>,
    #[serde(default)]
    pub course_level: Option<String>,
    #[serde(default)]
    pub time_spend: Option<String>,
    #[serde(default)]
    pub validity_days: Option<serde_json::Value>,
    #[serde(default)]
    pub course_price: Option<serde_json::Value>,
    #[serde(default)]
    pub course_image: Option<String>,
    #[serde(default)]
    pub preview_video: Option<String>,
    #[serde(default)]
    pub certificate_template: Option<String>,
    #[serde(default)]
    pub subscription_id: Option<u32>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
    /// Lesson spelling follows the backend schema
    #[serde(rename = "Lessions", default)]
    pub lessons: Vec<LessonRecord>,
}

/// Stored lesson row (either variant; quiz payload present for quizzes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonRecord {
    pub id: u32,
    pub lession_title: String,
    pub content_type: String,
    #[serde(default)]
    pub lession_order: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<serde_json::Value>,
    #[serde(default)]
    pub lession_image: Option<String>,
    #[serde(default)]
    pub lession_video: Option<String>,
    #[serde(default)]
    pub document_url: Option<String>,
    #[serde(rename = "Quiz", default)]
    pub quiz: Option<QuizRecord>,
}

impl LessonRecord {
    pub fn is_video(&self) -> bool {
        self.content_type == "Video"
    }

    pub fn is_quiz(&self) -> bool {
        self.content_type == "Quiz"
    }
}

/// Stored quiz attached to a lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub id: u32,
    #[serde(default)]
    pub quiz_title: Option<String>,
    #[serde(rename = "Questions", default)]
    pub questions: Vec<QuestionRecord>,
}

/// Stored quiz question with its fixed four options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u32,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub option_1: Option<String>,
    #[serde(default)]
    pub option_2: Option<String>,
    #[serde(default)]
    pub option_3: Option<String>,
    #[serde(default)]
    pub option_4: Option<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
}

/// Certificate/document template row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: u32,
    pub template_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<serde_json::Value>,
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Server-side file records; the backend stores either a JSON array
    /// or a JSON-encoded string of one
    #[serde(default)]
    pub files: Option<serde_json::Value>,
}

/// Opaque server record for one already-uploaded template file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateFileRecord {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Payment row (display only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u32,
    pub user_id: String,
    pub subscription_id: String,
    pub course_id: String,
    pub amount: f64,
    pub payment_status: String,
    pub transaction_id: String,
    pub payment_method: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Course order row (display only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOrder {
    pub id: u32,
    pub order_id: String,
    pub instructor_name: String,
    pub student_name: String,
    pub order_date: String,
    pub order_cost: String,
}

/// Site settings record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default = "default_storage_type")]
    pub storage_type: String,
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub site_description: String,
    #[serde(default)]
    pub contact_mail: String,
    #[serde(default)]
    pub location_url: String,
    #[serde(default)]
    pub playstore_url: String,
    #[serde(default)]
    pub appstore_url: String,
    #[serde(default)]
    pub facebook_url: String,
    #[serde(default)]
    pub instagram_url: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub contact_no: String,
    #[serde(default)]
    pub fcm_key: String,
    #[serde(default)]
    pub site_icon: Option<String>,
    #[serde(default)]
    pub site_logo: Option<String>,
    #[serde(default)]
    pub site_dark_logo: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            id: None,
            storage_type: default_storage_type(),
            site_name: String::new(),
            site_description: String::new(),
            contact_mail: String::new(),
            location_url: String::new(),
            playstore_url: String::new(),
            appstore_url: String::new(),
            facebook_url: String::new(),
            instagram_url: String::new(),
            linkedin_url: String::new(),
            about: String::new(),
            contact_no: String::new(),
            fcm_key: String::new(),
            site_icon: None,
            site_logo: None,
            site_dark_logo: None,
        }
    }
}

fn default_storage_type() -> String {
    "local".to_string()
}

/// Admin profile (bearer-authenticated endpoints)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdminProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryListResponse {
    pub data: Vec<Category>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseResponse {
    pub course: CourseDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateListResponse {
    pub templates: Vec<Template>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateResponse {
    pub template: Template,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentCheck {
    #[serde(default)]
    pub enrolled: bool,
    #[serde(default)]
    pub courses: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<AdminProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<String>,
}

/// Settings mutations come back under either `settings` or `setting`
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsMutationResponse {
    #[serde(default)]
    pub settings: Option<SiteSettings>,
    #[serde(default)]
    pub setting: Option<SiteSettings>,
    #[serde(default)]
    pub images: Option<serde_json::Map<String, serde_json::Value>>,
}

impl SettingsMutationResponse {
    pub fn into_settings(self) -> Option<SiteSettings> {
        self.settings.or(self.setting)
    }
}
