use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: i64,
    pub title_en: String,
    pub title_ar: String,
    pub short_description_en: Option<String>,
    pub short_description_ar: Option<String>,
    pub full_description_en: Option<String>,
    pub full_description_ar: Option<String>,
    pub en_meta_title: Option<String>,
    pub en_meta_description: Option<String>,
    pub ar_meta_title: Option<String>,
    pub ar_meta_description: Option<String>,
    pub slug_en: String,
    pub slug_ar: String,
    pub main_image: Option<String>,
    pub header_image: Option<String>,
    pub supplies_image: Option<String>,
    pub main_image_alt_en: Option<String>,
    pub main_image_alt_ar: Option<String>,
    pub header_image_alt_en: Option<String>,
    pub header_image_alt_ar: Option<String>,
    pub supplies_image_alt_en: Option<String>,
    pub supplies_image_alt_ar: Option<String>,
    pub supplies_text_en: Option<String>,
    pub supplies_text_ar: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}
