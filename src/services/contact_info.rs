use crate::models::ContactInfo;
use crate::Database;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

pub struct ContactInfoInput {
    pub phone_one: String,
    pub phone_two: Option<String>,
    pub whatsapp: String,
    pub address: String,
    pub map_link: Option<String>,
    pub working_hours: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub snapchat: Option<String>,
    pub youtube: Option<String>,
    pub tiktok: Option<String>,
}

const COLUMNS: &str = "id, phone_one, phone_two, whatsapp, address, map_link, working_hours, \
    facebook, instagram, twitter, snapchat, youtube, tiktok, created_at, updated_at";

fn row_to_info(row: &Row) -> rusqlite::Result<ContactInfo> {
    Ok(ContactInfo {
        id: row.get(0)?,
        phone_one: row.get(1)?,
        phone_two: row.get(2)?,
        whatsapp: row.get(3)?,
        address: row.get(4)?,
        map_link: row.get(5)?,
        working_hours: row.get(6)?,
        facebook: row.get(7)?,
        instagram: row.get(8)?,
        twitter: row.get(9)?,
        snapchat: row.get(10)?,
        youtube: row.get(11)?,
        tiktok: row.get(12)?,
        created_at: row.get(13)?,
        updated_at: row.get(14)?,
    })
}

pub fn get_contact_info(db: &Database) -> Result<Option<ContactInfo>> {
    let conn = db.get()?;
    let info = conn
        .query_row(
            &format!("SELECT {} FROM contact_info ORDER BY id LIMIT 1", COLUMNS),
            [],
            row_to_info,
        )
        .optional()?;
    Ok(info)
}

/// Create the singleton row on first call, update it afterwards.
pub fn upsert_contact_info(db: &Database, input: &ContactInfoInput) -> Result<ContactInfo> {
    let existing = get_contact_info(db)?;
    let conn = db.get()?;
    match existing {
        Some(info) => {
            conn.execute(
                "UPDATE contact_info SET phone_one = ?, phone_two = ?, whatsapp = ?, address = ?,
                    map_link = ?, working_hours = ?, facebook = ?, instagram = ?, twitter = ?,
                    snapchat = ?, youtube = ?, tiktok = ?, updated_at = CURRENT_TIMESTAMP
                 WHERE id = ?",
                params![
                    input.phone_one,
                    input.phone_two,
                    input.whatsapp,
                    input.address,
                    input.map_link,
                    input.working_hours,
                    input.facebook,
                    input.instagram,
                    input.twitter,
                    input.snapchat,
                    input.youtube,
                    input.tiktok,
                    info.id,
                ],
            )?;
        }
        None => {
            conn.execute(
                "INSERT INTO contact_info (phone_one, phone_two, whatsapp, address, map_link,
                    working_hours, facebook, instagram, twitter, snapchat, youtube, tiktok)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    input.phone_one,
                    input.phone_two,
                    input.whatsapp,
                    input.address,
                    input.map_link,
                    input.working_hours,
                    input.facebook,
                    input.instagram,
                    input.twitter,
                    input.snapchat,
                    input.youtube,
                    input.tiktok,
                ],
            )?;
        }
    }
    drop(conn);
    get_contact_info(db)?
        .ok_or_else(|| anyhow::anyhow!("contact_info row missing after upsert"))
}
