use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Partner {
    pub id: i64,
    pub name_en: String,
    pub name_ar: String,
    /// Stored asset name under the `partners` bucket.
    pub image: String,
    pub en_alt_image: Option<String>,
    pub ar_alt_image: Option<String>,
    pub category_id: i64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}
