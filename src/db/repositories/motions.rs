use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::{
    connection::Database,
    helpers::parse_category,
    models::{normalize_code, MotionDefinition},
};

const MOTION_COLUMNS: &str = "code, category, description, body_region, mod_value";

fn row_to_motion(row: &Row) -> Result<MotionDefinition> {
    let code: String = row.get("code")?;
    let category: String = row.get("category")?;
    let description: String = row.get("description")?;
    let body_region: String = row.get("body_region")?;
    let mod_value: f64 = row.get("mod_value")?;

    Ok(MotionDefinition::new(
        &code,
        parse_category(&category)?,
        &description,
        &body_region,
        mod_value,
    ))
}

fn fetch_motions(conn: &Connection) -> Result<Vec<MotionDefinition>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {MOTION_COLUMNS} FROM motions ORDER BY id ASC"
    ))?;

    let mut rows = stmt.query([])?;
    let mut motions = Vec::new();
    while let Some(row) = rows.next()? {
        motions.push(row_to_motion(row)?);
    }

    Ok(motions)
}

impl Database {
    pub async fn list_motions(&self) -> Result<Vec<MotionDefinition>> {
        self.execute(|conn| fetch_motions(conn)).await
    }

    pub async fn lookup_motion(&self, code: &str) -> Result<Option<MotionDefinition>> {
        let code = normalize_code(code);
        self.execute(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {MOTION_COLUMNS} FROM motions WHERE code = ?1"
            ))?;
            let motion = stmt
                .query_row(params![code], |row| Ok(row_to_motion(row)))
                .optional()?
                .transpose()?;
            Ok(motion)
        })
        .await
    }

    pub async fn count_motions(&self) -> Result<usize> {
        self.execute(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM motions", [], |row| row.get(0))?;
            Ok(count as usize)
        })
        .await
    }

    /// Insert `definitions` only when the catalog holds no motions yet.
    /// Returns the number of rows inserted (0 when already populated).
    pub async fn bulk_load_motions_if_empty(
        &self,
        definitions: Vec<MotionDefinition>,
    ) -> Result<usize> {
        self.execute_tx("motion seed", move |tx| {
            let existing: i64 = tx.query_row("SELECT COUNT(*) FROM motions", [], |row| row.get(0))?;
            if existing > 0 {
                return Ok(0);
            }

            let mut stmt = tx.prepare(
                "INSERT INTO motions (code, category, description, body_region, mod_value)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for definition in &definitions {
                stmt.execute(params![
                    normalize_code(&definition.code),
                    definition.category.as_str(),
                    definition.description,
                    definition.body_region,
                    definition.mod_value,
                ])
                .with_context(|| format!("failed to insert motion {}", definition.code))?;
            }

            Ok(definitions.len())
        })
        .await
    }
}
