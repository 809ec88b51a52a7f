use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl FromStr for MediaKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaItem {
    pub id: i64,
    pub kind: MediaKind,
    /// Stored asset name under `media/images` or `media/videos`.
    pub file_name: String,
    /// External link shown alongside uploaded videos.
    pub video_url: Option<String>,
    pub alt_text: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}
