use crate::models::PrivacyPolicy;
use crate::Database;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

pub struct PrivacyPolicyInput {
    pub en_title: String,
    pub en_description: String,
    pub ar_title: String,
    pub ar_description: String,
}

fn row_to_policy(row: &Row) -> rusqlite::Result<PrivacyPolicy> {
    Ok(PrivacyPolicy {
        id: row.get(0)?,
        en_title: row.get(1)?,
        en_description: row.get(2)?,
        ar_title: row.get(3)?,
        ar_description: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

pub fn get_policy(db: &Database) -> Result<Option<PrivacyPolicy>> {
    let conn = db.get()?;
    let policy = conn
        .query_row(
            "SELECT id, en_title, en_description, ar_title, ar_description, created_at, updated_at
             FROM privacy_policy ORDER BY id LIMIT 1",
            [],
            row_to_policy,
        )
        .optional()?;
    Ok(policy)
}

pub fn upsert_policy(db: &Database, input: &PrivacyPolicyInput) -> Result<PrivacyPolicy> {
    let existing = get_policy(db)?;
    let conn = db.get()?;
    match existing {
        Some(policy) => {
            conn.execute(
                "UPDATE privacy_policy SET en_title = ?, en_description = ?, ar_title = ?,
                    ar_description = ?, updated_at = CURRENT_TIMESTAMP
                 WHERE id = ?",
                params![
                    input.en_title,
                    input.en_description,
                    input.ar_title,
                    input.ar_description,
                    policy.id,
                ],
            )?;
        }
        None => {
            conn.execute(
                "INSERT INTO privacy_policy (en_title, en_description, ar_title, ar_description)
                 VALUES (?, ?, ?, ?)",
                params![
                    input.en_title,
                    input.en_description,
                    input.ar_title,
                    input.ar_description,
                ],
            )?;
        }
    }
    drop(conn);
    get_policy(db)?.ok_or_else(|| anyhow::anyhow!("privacy_policy row missing after upsert"))
}
