use crate::models::Blog;
use crate::Database;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

pub struct BlogInput {
    pub title_en: String,
    pub title_ar: String,
    pub short_description_en: Option<String>,
    pub short_description_ar: Option<String>,
    pub full_description_en: Option<String>,
    pub full_description_ar: Option<String>,
    pub en_meta_title: Option<String>,
    pub en_meta_description: Option<String>,
    pub ar_meta_title: Option<String>,
    pub ar_meta_description: Option<String>,
    pub external_image: Option<String>,
    pub external_image_alt_en: Option<String>,
    pub external_image_alt_ar: Option<String>,
    pub internal_image: Option<String>,
    pub internal_image_alt_en: Option<String>,
    pub internal_image_alt_ar: Option<String>,
    pub header_image: Option<String>,
    pub header_image_alt_en: Option<String>,
    pub header_image_alt_ar: Option<String>,
    pub slug_en: String,
    pub slug_ar: String,
    pub is_active: bool,
}

const COLUMNS: &str = "id, title_en, title_ar, short_description_en, short_description_ar, \
    full_description_en, full_description_ar, en_meta_title, en_meta_description, \
    ar_meta_title, ar_meta_description, external_image, external_image_alt_en, \
    external_image_alt_ar, internal_image, internal_image_alt_en, internal_image_alt_ar, \
    header_image, header_image_alt_en, header_image_alt_ar, slug_en, slug_ar, is_active, \
    created_at, updated_at";

fn row_to_blog(row: &Row) -> rusqlite::Result<Blog> {
    Ok(Blog {
        id: row.get(0)?,
        title_en: row.get(1)?,
        title_ar: row.get(2)?,
        short_description_en: row.get(3)?,
        short_description_ar: row.get(4)?,
        full_description_en: row.get(5)?,
        full_description_ar: row.get(6)?,
        en_meta_title: row.get(7)?,
        en_meta_description: row.get(8)?,
        ar_meta_title: row.get(9)?,
        ar_meta_description: row.get(10)?,
        external_image: row.get(11)?,
        external_image_alt_en: row.get(12)?,
        external_image_alt_ar: row.get(13)?,
        internal_image: row.get(14)?,
        internal_image_alt_en: row.get(15)?,
        internal_image_alt_ar: row.get(16)?,
        header_image: row.get(17)?,
        header_image_alt_en: row.get(18)?,
        header_image_alt_ar: row.get(19)?,
        slug_en: row.get(20)?,
        slug_ar: row.get(21)?,
        is_active: row.get::<_, i64>(22)? != 0,
        created_at: row.get(23)?,
        updated_at: row.get(24)?,
    })
}

pub fn create_blog(db: &Database, input: &BlogInput) -> Result<Blog> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO blogs (title_en, title_ar, short_description_en, short_description_ar,
            full_description_en, full_description_ar, en_meta_title, en_meta_description,
            ar_meta_title, ar_meta_description, external_image, external_image_alt_en,
            external_image_alt_ar, internal_image, internal_image_alt_en, internal_image_alt_ar,
            header_image, header_image_alt_en, header_image_alt_ar, slug_en, slug_ar, is_active)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            input.title_en,
            input.title_ar,
            input.short_description_en,
            input.short_description_ar,
            input.full_description_en,
            input.full_description_ar,
            input.en_meta_title,
            input.en_meta_description,
            input.ar_meta_title,
            input.ar_meta_description,
            input.external_image,
            input.external_image_alt_en,
            input.external_image_alt_ar,
            input.internal_image,
            input.internal_image_alt_en,
            input.internal_image_alt_ar,
            input.header_image,
            input.header_image_alt_en,
            input.header_image_alt_ar,
            input.slug_en,
            input.slug_ar,
            input.is_active as i64,
        ],
    )?;
    let id = conn.last_insert_rowid();
    let blog = conn.query_row(
        &format!("SELECT {} FROM blogs WHERE id = ?", COLUMNS),
        [id],
        row_to_blog,
    )?;
    Ok(blog)
}

pub fn update_blog(db: &Database, id: i64, input: &BlogInput) -> Result<Option<Blog>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE blogs SET title_en = ?, title_ar = ?, short_description_en = ?,
            short_description_ar = ?, full_description_en = ?, full_description_ar = ?,
            en_meta_title = ?, en_meta_description = ?, ar_meta_title = ?, ar_meta_description = ?,
            external_image = ?, external_image_alt_en = ?, external_image_alt_ar = ?,
            internal_image = ?, internal_image_alt_en = ?, internal_image_alt_ar = ?,
            header_image = ?, header_image_alt_en = ?, header_image_alt_ar = ?,
            slug_en = ?, slug_ar = ?, is_active = ?, updated_at = CURRENT_TIMESTAMP
         WHERE id = ?",
        params![
            input.title_en,
            input.title_ar,
            input.short_description_en,
            input.short_description_ar,
            input.full_description_en,
            input.full_description_ar,
            input.en_meta_title,
            input.en_meta_description,
            input.ar_meta_title,
            input.ar_meta_description,
            input.external_image,
            input.external_image_alt_en,
            input.external_image_alt_ar,
            input.internal_image,
            input.internal_image_alt_en,
            input.internal_image_alt_ar,
            input.header_image,
            input.header_image_alt_en,
            input.header_image_alt_ar,
            input.slug_en,
            input.slug_ar,
            input.is_active as i64,
            id,
        ],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    get_blog(db, id)
}

pub fn toggle_blog(db: &Database, id: i64) -> Result<Option<bool>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE blogs SET is_active = 1 - is_active, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        [id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    let active: i64 = conn.query_row("SELECT is_active FROM blogs WHERE id = ?", [id], |row| {
        row.get(0)
    })?;
    Ok(Some(active != 0))
}

pub fn get_blog(db: &Database, id: i64) -> Result<Option<Blog>> {
    let conn = db.get()?;
    let blog = conn
        .query_row(
            &format!("SELECT {} FROM blogs WHERE id = ?", COLUMNS),
            [id],
            row_to_blog,
        )
        .optional()?;
    Ok(blog)
}

/// Lookup by English or Arabic slug, active rows only.
pub fn get_active_by_slug(db: &Database, slug: &str) -> Result<Option<Blog>> {
    let conn = db.get()?;
    let blog = conn
        .query_row(
            &format!(
                "SELECT {} FROM blogs WHERE is_active = 1 AND (slug_en = ? OR slug_ar = ?)",
                COLUMNS
            ),
            params![slug, slug],
            row_to_blog,
        )
        .optional()?;
    Ok(blog)
}

pub fn list_blogs(db: &Database, only_active: bool) -> Result<Vec<Blog>> {
    let conn = db.get()?;
    let sql = if only_active {
        format!(
            "SELECT {} FROM blogs WHERE is_active = 1 ORDER BY created_at DESC, id DESC",
            COLUMNS
        )
    } else {
        format!(
            "SELECT {} FROM blogs ORDER BY created_at DESC, id DESC",
            COLUMNS
        )
    };
    let mut stmt = conn.prepare(&sql)?;
    let blogs = stmt
        .query_map([], row_to_blog)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(blogs)
}

pub fn slug_exists(db: &Database, slug: &str) -> Result<bool> {
    let conn = db.get()?;
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM blogs WHERE slug_en = ? OR slug_ar = ?",
        params![slug, slug],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
