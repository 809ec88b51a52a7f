use serde::Serialize;

/// Singleton row holding the site's contact details and social links.
#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub id: i64,
    pub phone_one: String,
    pub phone_two: Option<String>,
    pub whatsapp: String,
    pub address: String,
    pub map_link: Option<String>,
    pub working_hours: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub snapchat: Option<String>,
    pub youtube: Option<String>,
    pub tiktok: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
