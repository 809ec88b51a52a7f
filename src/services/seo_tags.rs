use crate::models::SeoTag;
use crate::Database;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

pub struct SeoTagInput {
    pub en_meta_title: Option<String>,
    pub en_meta_description: Option<String>,
    pub ar_meta_title: Option<String>,
    pub ar_meta_description: Option<String>,
    pub page_name: Option<String>,
}

const COLUMNS: &str = "id, en_meta_title, en_meta_description, ar_meta_title, \
    ar_meta_description, page_name, created_at, updated_at";

fn row_to_seo_tag(row: &Row) -> rusqlite::Result<SeoTag> {
    Ok(SeoTag {
        id: row.get(0)?,
        en_meta_title: row.get(1)?,
        en_meta_description: row.get(2)?,
        ar_meta_title: row.get(3)?,
        ar_meta_description: row.get(4)?,
        page_name: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

pub fn create_seo_tag(db: &Database, input: &SeoTagInput) -> Result<SeoTag> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO seo_tags (en_meta_title, en_meta_description, ar_meta_title, ar_meta_description, page_name)
         VALUES (?, ?, ?, ?, ?)",
        params![
            input.en_meta_title,
            input.en_meta_description,
            input.ar_meta_title,
            input.ar_meta_description,
            input.page_name,
        ],
    )?;
    let id = conn.last_insert_rowid();
    let tag = conn.query_row(
        &format!("SELECT {} FROM seo_tags WHERE id = ?", COLUMNS),
        [id],
        row_to_seo_tag,
    )?;
    Ok(tag)
}

pub fn update_seo_tag(db: &Database, id: i64, input: &SeoTagInput) -> Result<Option<SeoTag>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE seo_tags SET en_meta_title = ?, en_meta_description = ?, ar_meta_title = ?,
            ar_meta_description = ?, page_name = ?, updated_at = CURRENT_TIMESTAMP
         WHERE id = ?",
        params![
            input.en_meta_title,
            input.en_meta_description,
            input.ar_meta_title,
            input.ar_meta_description,
            input.page_name,
            id,
        ],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    get_seo_tag(db, id)
}

pub fn get_seo_tag(db: &Database, id: i64) -> Result<Option<SeoTag>> {
    let conn = db.get()?;
    let tag = conn
        .query_row(
            &format!("SELECT {} FROM seo_tags WHERE id = ?", COLUMNS),
            [id],
            row_to_seo_tag,
        )
        .optional()?;
    Ok(tag)
}

pub fn list_seo_tags(db: &Database) -> Result<Vec<SeoTag>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM seo_tags ORDER BY created_at DESC, id DESC",
        COLUMNS
    ))?;
    let tags = stmt
        .query_map([], row_to_seo_tag)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tags)
}
