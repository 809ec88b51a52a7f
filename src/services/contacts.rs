use crate::models::ContactMessage;
use crate::Database;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

pub struct ContactInput {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
}

fn row_to_contact(row: &Row) -> rusqlite::Result<ContactMessage> {
    Ok(ContactMessage {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        message: row.get(4)?,
        is_read: row.get::<_, i64>(5)? != 0,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

const COLUMNS: &str = "id, name, email, phone, message, is_read, created_at, updated_at";

pub fn create_contact(db: &Database, input: &ContactInput) -> Result<ContactMessage> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO contacts (name, email, phone, message) VALUES (?, ?, ?, ?)",
        params![input.name, input.email, input.phone, input.message],
    )?;
    let id = conn.last_insert_rowid();
    let contact = conn.query_row(
        &format!("SELECT {} FROM contacts WHERE id = ?", COLUMNS),
        [id],
        row_to_contact,
    )?;
    Ok(contact)
}

pub fn list_contacts(db: &Database) -> Result<Vec<ContactMessage>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM contacts ORDER BY created_at DESC, id DESC",
        COLUMNS
    ))?;
    let contacts = stmt
        .query_map([], row_to_contact)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(contacts)
}

/// Fetch a message and mark it read, mirroring the dashboard detail view.
pub fn get_and_mark_read(db: &Database, id: i64) -> Result<Option<ContactMessage>> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE contacts SET is_read = 1, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        [id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    let contact = conn
        .query_row(
            &format!("SELECT {} FROM contacts WHERE id = ?", COLUMNS),
            [id],
            row_to_contact,
        )
        .optional()?;
    Ok(contact)
}

pub fn mark_seen(db: &Database, id: i64) -> Result<bool> {
    let conn = db.get()?;
    let changed = conn.execute(
        "UPDATE contacts SET is_read = 1, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        [id],
    )?;
    Ok(changed > 0)
}
