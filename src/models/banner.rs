use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Banner {
    pub id: i64,
    /// Page identifier the banner belongs to, e.g. `services` or `blog`.
    pub page: String,
    pub image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
