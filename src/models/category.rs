use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: i64,
    pub name_en: String,
    pub name_ar: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryWithPartners {
    #[serde(flatten)]
    pub category: Category,
    pub partners: Vec<super::Partner>,
}
