use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Slider {
    pub id: i64,
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub image: Option<String>,
    pub video: Option<String>,
    pub en_image_alt: Option<String>,
    pub ar_image_alt: Option<String>,
    pub en_video_alt: Option<String>,
    pub ar_video_alt: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}
