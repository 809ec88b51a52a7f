use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SeoTag {
    pub id: i64,
    pub en_meta_title: Option<String>,
    pub en_meta_description: Option<String>,
    pub ar_meta_title: Option<String>,
    pub ar_meta_description: Option<String>,
    pub page_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
