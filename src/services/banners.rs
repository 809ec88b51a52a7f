use crate::models::Banner;
use crate::Database;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

fn row_to_banner(row: &Row) -> rusqlite::Result<Banner> {
    Ok(Banner {
        id: row.get(0)?,
        page: row.get(1)?,
        image: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

pub fn create_banner(db: &Database, page: &str, image: Option<&str>) -> Result<Banner> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO banners (page, image) VALUES (?, ?)",
        params![page, image],
    )?;
    let id = conn.last_insert_rowid();
    let banner = conn.query_row(
        "SELECT id, page, image, created_at, updated_at FROM banners WHERE id = ?",
        [id],
        row_to_banner,
    )?;
    Ok(banner)
}

/// Swap the stored image name for an existing page banner.
pub fn set_banner_image(db: &Database, page: &str, image: &str) -> Result<Option<Banner>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE banners SET image = ?, updated_at = CURRENT_TIMESTAMP WHERE page = ?",
        params![image, page],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    get_by_page(db, page)
}

pub fn get_by_page(db: &Database, page: &str) -> Result<Option<Banner>> {
    let conn = db.get()?;
    let banner = conn
        .query_row(
            "SELECT id, page, image, created_at, updated_at FROM banners WHERE page = ?",
            [page],
            row_to_banner,
        )
        .optional()?;
    Ok(banner)
}

pub fn page_exists(db: &Database, page: &str) -> Result<bool> {
    let conn = db.get()?;
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM banners WHERE page = ?",
        [page],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn list_banners(db: &Database) -> Result<Vec<Banner>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, page, image, created_at, updated_at FROM banners ORDER BY created_at DESC, id DESC",
    )?;
    let banners = stmt
        .query_map([], row_to_banner)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(banners)
}
