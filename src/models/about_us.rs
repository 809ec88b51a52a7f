use serde::Serialize;

/// Singleton row; created on first update.
#[derive(Debug, Clone, Serialize)]
pub struct AboutUs {
    pub id: i64,
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub home_description_en: Option<String>,
    pub home_description_ar: Option<String>,
    pub about_description_en: Option<String>,
    pub about_description_ar: Option<String>,
    pub mission_en: Option<String>,
    pub mission_ar: Option<String>,
    pub vision_en: Option<String>,
    pub vision_ar: Option<String>,
    pub investments_en: Option<String>,
    pub investments_ar: Option<String>,
    pub why_us_en: Option<String>,
    pub why_us_ar: Option<String>,
    pub image: Option<String>,
    pub en_alt_image: Option<String>,
    pub ar_alt_image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
