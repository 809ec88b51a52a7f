use crate::models::AboutUs;
use crate::Database;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

pub struct AboutUsInput {
    pub title_en: String,
    pub title_ar: String,
    pub home_description_en: String,
    pub home_description_ar: String,
    pub about_description_en: String,
    pub about_description_ar: String,
    pub mission_en: Option<String>,
    pub mission_ar: Option<String>,
    pub vision_en: Option<String>,
    pub vision_ar: Option<String>,
    pub investments_en: Option<String>,
    pub investments_ar: Option<String>,
    pub why_us_en: Option<String>,
    pub why_us_ar: Option<String>,
    /// Final stored asset name, already written by the asset store.
    pub image: Option<String>,
    pub en_alt_image: Option<String>,
    pub ar_alt_image: Option<String>,
}

const COLUMNS: &str = "id, title_en, title_ar, home_description_en, home_description_ar, \
    about_description_en, about_description_ar, mission_en, mission_ar, vision_en, vision_ar, \
    investments_en, investments_ar, why_us_en, why_us_ar, image, en_alt_image, ar_alt_image, \
    created_at, updated_at";

fn row_to_about(row: &Row) -> rusqlite::Result<AboutUs> {
    Ok(AboutUs {
        id: row.get(0)?,
        title_en: row.get(1)?,
        title_ar: row.get(2)?,
        home_description_en: row.get(3)?,
        home_description_ar: row.get(4)?,
        about_description_en: row.get(5)?,
        about_description_ar: row.get(6)?,
        mission_en: row.get(7)?,
        mission_ar: row.get(8)?,
        vision_en: row.get(9)?,
        vision_ar: row.get(10)?,
        investments_en: row.get(11)?,
        investments_ar: row.get(12)?,
        why_us_en: row.get(13)?,
        why_us_ar: row.get(14)?,
        image: row.get(15)?,
        en_alt_image: row.get(16)?,
        ar_alt_image: row.get(17)?,
        created_at: row.get(18)?,
        updated_at: row.get(19)?,
    })
}

pub fn get_about_us(db: &Database) -> Result<Option<AboutUs>> {
    let conn = db.get()?;
    let about = conn
        .query_row(
            &format!("SELECT {} FROM about_us ORDER BY id LIMIT 1", COLUMNS),
            [],
            row_to_about,
        )
        .optional()?;
    Ok(about)
}

pub fn upsert_about_us(db: &Database, input: &AboutUsInput) -> Result<AboutUs> {
    let existing = get_about_us(db)?;
    let conn = db.get()?;
    match existing {
        Some(about) => {
            conn.execute(
                "UPDATE about_us SET title_en = ?, title_ar = ?, home_description_en = ?,
                    home_description_ar = ?, about_description_en = ?, about_description_ar = ?,
                    mission_en = ?, mission_ar = ?, vision_en = ?, vision_ar = ?,
                    investments_en = ?, investments_ar = ?, why_us_en = ?, why_us_ar = ?,
                    image = ?, en_alt_image = ?, ar_alt_image = ?, updated_at = CURRENT_TIMESTAMP
                 WHERE id = ?",
                params![
                    input.title_en,
                    input.title_ar,
                    input.home_description_en,
                    input.home_description_ar,
                    input.about_description_en,
                    input.about_description_ar,
                    input.mission_en,
                    input.mission_ar,
                    input.vision_en,
                    input.vision_ar,
                    input.investments_en,
                    input.investments_ar,
                    input.why_us_en,
                    input.why_us_ar,
                    input.image,
                    input.en_alt_image,
                    input.ar_alt_image,
                    about.id,
                ],
            )?;
        }
        None => {
            conn.execute(
                "INSERT INTO about_us (title_en, title_ar, home_description_en, home_description_ar,
                    about_description_en, about_description_ar, mission_en, mission_ar,
                    vision_en, vision_ar, investments_en, investments_ar, why_us_en, why_us_ar,
                    image, en_alt_image, ar_alt_image)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    input.title_en,
                    input.title_ar,
                    input.home_description_en,
                    input.home_description_ar,
                    input.about_description_en,
                    input.about_description_ar,
                    input.mission_en,
                    input.mission_ar,
                    input.vision_en,
                    input.vision_ar,
                    input.investments_en,
                    input.investments_ar,
                    input.why_us_en,
                    input.why_us_ar,
                    input.image,
                    input.en_alt_image,
                    input.ar_alt_image,
                ],
            )?;
        }
    }
    drop(conn);
    get_about_us(db)?.ok_or_else(|| anyhow::anyhow!("about_us row missing after upsert"))
}
