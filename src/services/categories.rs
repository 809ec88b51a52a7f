use crate::models::{Category, CategoryWithPartners};
use crate::services::partners;
use crate::Database;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

pub struct CategoryInput {
    pub name_en: String,
    pub name_ar: String,
    pub is_active: bool,
}

fn row_to_category(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name_en: row.get(1)?,
        name_ar: row.get(2)?,
        is_active: row.get::<_, i64>(3)? != 0,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

pub fn create_category(db: &Database, input: &CategoryInput) -> Result<Category> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO categories (name_en, name_ar, is_active) VALUES (?, ?, ?)",
        params![input.name_en, input.name_ar, input.is_active as i64],
    )?;
    let id = conn.last_insert_rowid();
    let category = conn.query_row(
        "SELECT id, name_en, name_ar, is_active, created_at, updated_at FROM categories WHERE id = ?",
        [id],
        row_to_category,
    )?;
    Ok(category)
}

pub fn update_category(db: &Database, id: i64, input: &CategoryInput) -> Result<Option<Category>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE categories SET name_en = ?, name_ar = ?, is_active = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        params![input.name_en, input.name_ar, input.is_active as i64, id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    get_category(db, id)
}

pub fn toggle_category(db: &Database, id: i64) -> Result<Option<bool>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE categories SET is_active = 1 - is_active, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        [id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    let active: i64 = conn.query_row("SELECT is_active FROM categories WHERE id = ?", [id], |row| {
        row.get(0)
    })?;
    Ok(Some(active != 0))
}

pub fn get_category(db: &Database, id: i64) -> Result<Option<Category>> {
    let conn = db.get()?;
    let category = conn
        .query_row(
            "SELECT id, name_en, name_ar, is_active, created_at, updated_at FROM categories WHERE id = ?",
            [id],
            row_to_category,
        )
        .optional()?;
    Ok(category)
}

pub fn list_categories(db: &Database) -> Result<Vec<Category>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, name_en, name_ar, is_active, created_at, updated_at FROM categories ORDER BY created_at DESC, id DESC",
    )?;
    let categories = stmt
        .query_map([], row_to_category)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(categories)
}

/// Active categories that have at least one active partner, newest first.
pub fn list_active_with_partners(db: &Database) -> Result<Vec<CategoryWithPartners>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, name_en, name_ar, is_active, created_at, updated_at FROM categories WHERE is_active = 1 ORDER BY created_at DESC, id DESC",
    )?;
    let categories = stmt
        .query_map([], row_to_category)?
        .collect::<Result<Vec<_>, _>>()?;
    drop(stmt);
    drop(conn);

    let mut out = Vec::new();
    for category in categories {
        let partners = partners::list_by_category(db, category.id, true)?;
        if !partners.is_empty() {
            out.push(CategoryWithPartners { category, partners });
        }
    }
    Ok(out)
}
