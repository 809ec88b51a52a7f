use crate::models::Slider;
use crate::Database;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

pub struct SliderInput {
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
}

const COLUMNS: &str = "id, title_en, title_ar, description_en, description_ar, image, video, \
    en_image_alt, ar_image_alt, en_video_alt, ar_video_alt, is_active, created_at, updated_at";

fn row_to_slider(row: &Row) -> rusqlite::Result<Slider> {
    Ok(Slider {
        id: row.get(0)?,
        title_en: row.get(1)?,
        title_ar: row.get(2)?,
        description_en: row.get(3)?,
        description_ar: row.get(4)?,
        image: row.get(5)?,
        video: row.get(6)?,
        en_image_alt: row.get(7)?,
        ar_image_alt: row.get(8)?,
        en_video_alt: row.get(9)?,
        ar_video_alt: row.get(10)?,
        is_active: row.get::<_, i64>(11)? != 0,
        created_at: row.get(12)?,
        updated_at: row.get(13)?,
    })
}

pub fn create_slider(db: &Database, input: &SliderInput) -> Result<Slider> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO sliders (title_en, title_ar, description_en, description_ar, image, video,
            en_image_alt, ar_image_alt, en_video_alt, ar_video_alt, is_active)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            input.title_en,
            input.title_ar,
            input.description_en,
            input.description_ar,
            input.image,
            input.video,
            input.en_image_alt,
            input.ar_image_alt,
            input.en_video_alt,
            input.ar_video_alt,
            input.is_active as i64,
        ],
    )?;
    let id = conn.last_insert_rowid();
    let slider = conn.query_row(
        &format!("SELECT {} FROM sliders WHERE id = ?", COLUMNS),
        [id],
        row_to_slider,
    )?;
    Ok(slider)
}

pub fn update_slider(db: &Database, id: i64, input: &SliderInput) -> Result<Option<Slider>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE sliders SET title_en = ?, title_ar = ?, description_en = ?, description_ar = ?,
            image = ?, video = ?, en_image_alt = ?, ar_image_alt = ?, en_video_alt = ?,
            ar_video_alt = ?, is_active = ?, updated_at = CURRENT_TIMESTAMP
         WHERE id = ?",
        params![
            input.title_en,
            input.title_ar,
            input.description_en,
            input.description_ar,
            input.image,
            input.video,
            input.en_image_alt,
            input.ar_image_alt,
            input.en_video_alt,
            input.ar_video_alt,
            input.is_active as i64,
            id,
        ],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    get_slider(db, id)
}

pub fn toggle_slider(db: &Database, id: i64) -> Result<Option<bool>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE sliders SET is_active = 1 - is_active, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        [id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    let active: i64 = conn.query_row("SELECT is_active FROM sliders WHERE id = ?", [id], |row| {
        row.get(0)
    })?;
    Ok(Some(active != 0))
}

pub fn get_slider(db: &Database, id: i64) -> Result<Option<Slider>> {
    let conn = db.get()?;
    let slider = conn
        .query_row(
            &format!("SELECT {} FROM sliders WHERE id = ?", COLUMNS),
            [id],
            row_to_slider,
        )
        .optional()?;
    Ok(slider)
}

pub fn list_sliders(db: &Database, only_active: bool) -> Result<Vec<Slider>> {
    let conn = db.get()?;
    let sql = if only_active {
        format!(
            "SELECT {} FROM sliders WHERE is_active = 1 ORDER BY created_at DESC, id DESC",
            COLUMNS
        )
    } else {
        format!(
            "SELECT {} FROM sliders ORDER BY created_at DESC, id DESC",
            COLUMNS
        )
    };
    let mut stmt = conn.prepare(&sql)?;
    let sliders = stmt
        .query_map([], row_to_slider)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(sliders)
}
