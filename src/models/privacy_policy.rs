use serde::Serialize;

/// Singleton row; created on first update.
#[derive(Debug, Clone, Serialize)]
pub struct PrivacyPolicy {
    pub id: i64,
    pub en_title: Option<String>,
    pub en_description: Option<String>,
    pub ar_title: Option<String>,
    pub ar_description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
