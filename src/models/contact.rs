use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
    pub updated_at: String,
}
