use crate::models::Partner;
use crate::Database;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

pub struct PartnerInput {
    pub name_en: String,
    pub name_ar: String,
    /// Stored asset name, already written by the asset store.
    pub image: String,
    pub en_alt_image: Option<String>,
    pub ar_alt_image: Option<String>,
    pub category_id: i64,
    pub is_active: bool,
}

fn row_to_partner(row: &Row) -> rusqlite::Result<Partner> {
    Ok(Partner {
        id: row.get(0)?,
        name_en: row.get(1)?,
        name_ar: row.get(2)?,
        image: row.get(3)?,
        en_alt_image: row.get(4)?,
        ar_alt_image: row.get(5)?,
        category_id: row.get(6)?,
        is_active: row.get::<_, i64>(7)? != 0,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

const COLUMNS: &str = "id, name_en, name_ar, image, en_alt_image, ar_alt_image, category_id, is_active, created_at, updated_at";

pub fn create_partner(db: &Database, input: &PartnerInput) -> Result<Partner> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO partners (name_en, name_ar, image, en_alt_image, ar_alt_image, category_id, is_active)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
        params![
            input.name_en,
            input.name_ar,
            input.image,
            input.en_alt_image,
            input.ar_alt_image,
            input.category_id,
            input.is_active as i64,
        ],
    )?;
    let id = conn.last_insert_rowid();
    let partner = conn.query_row(
        &format!("SELECT {} FROM partners WHERE id = ?", COLUMNS),
        [id],
        row_to_partner,
    )?;
    Ok(partner)
}

pub fn update_partner(db: &Database, id: i64, input: &PartnerInput) -> Result<Option<Partner>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE partners SET name_en = ?, name_ar = ?, image = ?, en_alt_image = ?, ar_alt_image = ?,
         category_id = ?, is_active = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        params![
            input.name_en,
            input.name_ar,
            input.image,
            input.en_alt_image,
            input.ar_alt_image,
            input.category_id,
            input.is_active as i64,
            id,
        ],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    get_partner(db, id)
}

pub fn toggle_partner(db: &Database, id: i64) -> Result<Option<bool>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE partners SET is_active = 1 - is_active, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        [id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    let active: i64 =
        conn.query_row("SELECT is_active FROM partners WHERE id = ?", [id], |row| {
            row.get(0)
        })?;
    Ok(Some(active != 0))
}

pub fn get_partner(db: &Database, id: i64) -> Result<Option<Partner>> {
    let conn = db.get()?;
    let partner = conn
        .query_row(
            &format!("SELECT {} FROM partners WHERE id = ?", COLUMNS),
            [id],
            row_to_partner,
        )
        .optional()?;
    Ok(partner)
}

pub fn list_by_category(db: &Database, category_id: i64, only_active: bool) -> Result<Vec<Partner>> {
    let conn = db.get()?;
    let sql = if only_active {
        format!(
            "SELECT {} FROM partners WHERE category_id = ? AND is_active = 1 ORDER BY created_at DESC, id DESC",
            COLUMNS
        )
    } else {
        format!(
            "SELECT {} FROM partners WHERE category_id = ? ORDER BY created_at DESC, id DESC",
            COLUMNS
        )
    };
    let mut stmt = conn.prepare(&sql)?;
    let partners = stmt
        .query_map([category_id], row_to_partner)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(partners)
}
