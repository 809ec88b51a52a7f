use crate::models::{MediaItem, MediaKind};
use crate::Database;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};
use std::str::FromStr;

pub struct MediaInput {
    pub kind: MediaKind,
    /// Stored asset name, already written by the asset store.
    pub file_name: String,
    pub video_url: Option<String>,
    pub alt_text: Option<String>,
    pub is_active: bool,
}

/// Bucket the stored file lives under, derived from the item kind.
pub fn bucket_for(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "media/images",
        MediaKind::Video => "media/videos",
    }
}

fn row_to_media(row: &Row) -> rusqlite::Result<MediaItem> {
    let kind: String = row.get(1)?;
    Ok(MediaItem {
        id: row.get(0)?,
        kind: MediaKind::from_str(&kind).unwrap_or_default(),
        file_name: row.get(2)?,
        video_url: row.get(3)?,
        alt_text: row.get(4)?,
        is_active: row.get::<_, i64>(5)? != 0,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

const COLUMNS: &str = "id, kind, file_name, video_url, alt_text, is_active, created_at, updated_at";

pub fn create_media(db: &Database, input: &MediaInput) -> Result<MediaItem> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO media (kind, file_name, video_url, alt_text, is_active) VALUES (?, ?, ?, ?, ?)",
        params![
            input.kind.to_string(),
            input.file_name,
            input.video_url,
            input.alt_text,
            input.is_active as i64,
        ],
    )?;
    let id = conn.last_insert_rowid();
    let item = conn.query_row(
        &format!("SELECT {} FROM media WHERE id = ?", COLUMNS),
        [id],
        row_to_media,
    )?;
    Ok(item)
}

pub fn update_media(db: &Database, id: i64, input: &MediaInput) -> Result<Option<MediaItem>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE media SET kind = ?, file_name = ?, video_url = ?, alt_text = ?, is_active = ?,
            updated_at = CURRENT_TIMESTAMP
         WHERE id = ?",
        params![
            input.kind.to_string(),
            input.file_name,
            input.video_url,
            input.alt_text,
            input.is_active as i64,
            id,
        ],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    get_media(db, id)
}

pub fn toggle_media(db: &Database, id: i64) -> Result<Option<bool>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE media SET is_active = 1 - is_active, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        [id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    let active: i64 = conn.query_row("SELECT is_active FROM media WHERE id = ?", [id], |row| {
        row.get(0)
    })?;
    Ok(Some(active != 0))
}

pub fn get_media(db: &Database, id: i64) -> Result<Option<MediaItem>> {
    let conn = db.get()?;
    let item = conn
        .query_row(
            &format!("SELECT {} FROM media WHERE id = ?", COLUMNS),
            [id],
            row_to_media,
        )
        .optional()?;
    Ok(item)
}

pub fn list_media(db: &Database, only_active: bool) -> Result<Vec<MediaItem>> {
    let conn = db.get()?;
    let sql = if only_active {
        format!(
            "SELECT {} FROM media WHERE is_active = 1 ORDER BY created_at DESC, id DESC",
            COLUMNS
        )
    } else {
        format!(
            "SELECT {} FROM media ORDER BY created_at DESC, id DESC",
            COLUMNS
        )
    };
    let mut stmt = conn.prepare(&sql)?;
    let items = stmt
        .query_map([], row_to_media)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(items)
}

pub fn list_active_by_kind(db: &Database, kind: MediaKind) -> Result<Vec<MediaItem>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM media WHERE is_active = 1 AND kind = ? ORDER BY created_at DESC, id DESC",
        COLUMNS
    ))?;
    let items = stmt
        .query_map([kind.to_string()], row_to_media)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(items)
}
