use crate::models::Service;
use crate::Database;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

pub struct ServiceInput {
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
    pub slug_en: String,
    pub slug_ar: String,
    pub main_image: Option<String>,
    pub header_image: Option<String>,
    pub supplies_image: Option<String>,
    pub main_image_alt_en: Option<String>,
    pub main_image_alt_ar: Option<String>,
    pub header_image_alt_en: Option<String>,
    pub header_image_alt_ar: Option<String>,
    pub supplies_image_alt_en: Option<String>,
    pub supplies_image_alt_ar: Option<String>,
    pub supplies_text_en: Option<String>,
    pub supplies_text_ar: Option<String>,
    pub is_active: bool,
}

const COLUMNS: &str = "id, title_en, title_ar, short_description_en, short_description_ar, \
    full_description_en, full_description_ar, en_meta_title, en_meta_description, \
    ar_meta_title, ar_meta_description, slug_en, slug_ar, main_image, header_image, \
    supplies_image, main_image_alt_en, main_image_alt_ar, header_image_alt_en, \
    header_image_alt_ar, supplies_image_alt_en, supplies_image_alt_ar, \
    supplies_text_en, supplies_text_ar, is_active, created_at, updated_at";

fn row_to_service(row: &Row) -> rusqlite::Result<Service> {
    Ok(Service {
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
        slug_en: row.get(11)?,
        slug_ar: row.get(12)?,
        main_image: row.get(13)?,
        header_image: row.get(14)?,
        supplies_image: row.get(15)?,
        main_image_alt_en: row.get(16)?,
        main_image_alt_ar: row.get(17)?,
        header_image_alt_en: row.get(18)?,
        header_image_alt_ar: row.get(19)?,
        supplies_image_alt_en: row.get(20)?,
        supplies_image_alt_ar: row.get(21)?,
        supplies_text_en: row.get(22)?,
        supplies_text_ar: row.get(23)?,
        is_active: row.get::<_, i64>(24)? != 0,
        created_at: row.get(25)?,
        updated_at: row.get(26)?,
    })
}

pub fn create_service(db: &Database, input: &ServiceInput) -> Result<Service> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO services (title_en, title_ar, short_description_en, short_description_ar,
            full_description_en, full_description_ar, en_meta_title, en_meta_description,
            ar_meta_title, ar_meta_description, slug_en, slug_ar, main_image, header_image,
            supplies_image, main_image_alt_en, main_image_alt_ar, header_image_alt_en,
            header_image_alt_ar, supplies_image_alt_en, supplies_image_alt_ar,
            supplies_text_en, supplies_text_ar, is_active)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
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
            input.slug_en,
            input.slug_ar,
            input.main_image,
            input.header_image,
            input.supplies_image,
            input.main_image_alt_en,
            input.main_image_alt_ar,
            input.header_image_alt_en,
            input.header_image_alt_ar,
            input.supplies_image_alt_en,
            input.supplies_image_alt_ar,
            input.supplies_text_en,
            input.supplies_text_ar,
            input.is_active as i64,
        ],
    )?;
    let id = conn.last_insert_rowid();
    let service = conn.query_row(
        &format!("SELECT {} FROM services WHERE id = ?", COLUMNS),
        [id],
        row_to_service,
    )?;
    Ok(service)
}

pub fn update_service(db: &Database, id: i64, input: &ServiceInput) -> Result<Option<Service>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE services SET title_en = ?, title_ar = ?, short_description_en = ?,
            short_description_ar = ?, full_description_en = ?, full_description_ar = ?,
            en_meta_title = ?, en_meta_description = ?, ar_meta_title = ?, ar_meta_description = ?,
            slug_en = ?, slug_ar = ?, main_image = ?, header_image = ?, supplies_image = ?,
            main_image_alt_en = ?, main_image_alt_ar = ?, header_image_alt_en = ?,
            header_image_alt_ar = ?, supplies_image_alt_en = ?, supplies_image_alt_ar = ?,
            supplies_text_en = ?, supplies_text_ar = ?, is_active = ?,
            updated_at = CURRENT_TIMESTAMP
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
            input.slug_en,
            input.slug_ar,
            input.main_image,
            input.header_image,
            input.supplies_image,
            input.main_image_alt_en,
            input.main_image_alt_ar,
            input.header_image_alt_en,
            input.header_image_alt_ar,
            input.supplies_image_alt_en,
            input.supplies_image_alt_ar,
            input.supplies_text_en,
            input.supplies_text_ar,
            input.is_active as i64,
            id,
        ],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    get_service(db, id)
}

pub fn toggle_service(db: &Database, id: i64) -> Result<Option<bool>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE services SET is_active = 1 - is_active, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        [id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    let active: i64 =
        conn.query_row("SELECT is_active FROM services WHERE id = ?", [id], |row| {
            row.get(0)
        })?;
    Ok(Some(active != 0))
}

pub fn get_service(db: &Database, id: i64) -> Result<Option<Service>> {
    let conn = db.get()?;
    let service = conn
        .query_row(
            &format!("SELECT {} FROM services WHERE id = ?", COLUMNS),
            [id],
            row_to_service,
        )
        .optional()?;
    Ok(service)
}

/// Lookup by English or Arabic slug, active rows only.
pub fn get_active_by_slug(db: &Database, slug: &str) -> Result<Option<Service>> {
    let conn = db.get()?;
    let service = conn
        .query_row(
            &format!(
                "SELECT {} FROM services WHERE is_active = 1 AND (slug_en = ? OR slug_ar = ?)",
                COLUMNS
            ),
            params![slug, slug],
            row_to_service,
        )
        .optional()?;
    Ok(service)
}

pub fn list_services(db: &Database, only_active: bool) -> Result<Vec<Service>> {
    let conn = db.get()?;
    let sql = if only_active {
        format!(
            "SELECT {} FROM services WHERE is_active = 1 ORDER BY created_at DESC, id DESC",
            COLUMNS
        )
    } else {
        format!(
            "SELECT {} FROM services ORDER BY created_at DESC, id DESC",
            COLUMNS
        )
    };
    let mut stmt = conn.prepare(&sql)?;
    let services = stmt
        .query_map([], row_to_service)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(services)
}

pub fn slug_exists(db: &Database, slug: &str) -> Result<bool> {
    let conn = db.get()?;
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM services WHERE slug_en = ? OR slug_ar = ?",
        params![slug, slug],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
