use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use crate::db::{
    connection::Database,
    helpers::parse_datetime,
    models::{MotionOccurrence, NewOccurrence, StudyDefinition, StudyRecord},
};

fn row_to_study(row: &Row) -> Result<StudyDefinition> {
    let created_at: String = row.get("created_at")?;

    Ok(StudyDefinition {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        created_at: parse_datetime(&created_at, "created_at")?,
    })
}

fn row_to_occurrence(row: &Row) -> Result<MotionOccurrence> {
    Ok(MotionOccurrence {
        study_id: row.get("study_id")?,
        motion_code: row.get("motion_code")?,
        sequence_order: row.get("sequence_order")?,
        quantity: row.get("quantity")?,
    })
}

impl Database {
    /// Write a study and all of its occurrences in one transaction; either
    /// every row lands or none does.
    pub async fn create_study_atomic(
        &self,
        name: String,
        description: Option<String>,
        occurrences: Vec<NewOccurrence>,
    ) -> Result<StudyRecord> {
        self.execute_tx("study", move |tx| {
            let study = StudyDefinition {
                id: Uuid::new_v4().to_string(),
                name,
                description,
                created_at: Utc::now(),
            };

            tx.execute(
                "INSERT INTO studies (id, name, description, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    study.id,
                    study.name,
                    study.description,
                    study.created_at.to_rfc3339(),
                ],
            )
            .context("failed to insert study")?;

            let mut stmt = tx.prepare(
                "INSERT INTO study_motions (study_id, motion_code, sequence_order, quantity)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            let mut stored = Vec::with_capacity(occurrences.len());
            for occurrence in occurrences {
                stmt.execute(params![
                    study.id,
                    occurrence.motion_code,
                    occurrence.sequence_order,
                    occurrence.quantity,
                ])
                .with_context(|| format!("failed to insert study motion {}", occurrence.motion_code))?;

                stored.push(MotionOccurrence {
                    study_id: study.id.clone(),
                    motion_code: occurrence.motion_code,
                    sequence_order: occurrence.sequence_order,
                    quantity: occurrence.quantity,
                });
            }

            Ok(StudyRecord {
                study,
                occurrences: stored,
            })
        })
        .await
    }

    pub async fn get_study_with_occurrences(&self, study_id: &str) -> Result<Option<StudyRecord>> {
        let study_id = study_id.to_string();
        self.execute(move |conn| {
            let study = conn
                .query_row(
                    "SELECT id, name, description, created_at
                     FROM studies
                     WHERE id = ?1",
                    params![study_id],
                    |row| Ok(row_to_study(row)),
                )
                .optional()?
                .transpose()?;

            let Some(study) = study else {
                return Ok(None);
            };

            let mut stmt = conn.prepare(
                "SELECT study_id, motion_code, sequence_order, quantity
                 FROM study_motions
                 WHERE study_id = ?1
                 ORDER BY sequence_order ASC, id ASC",
            )?;
            let mut rows = stmt.query(params![study.id])?;
            let mut occurrences = Vec::new();
            while let Some(row) = rows.next()? {
                occurrences.push(row_to_occurrence(row)?);
            }

            Ok(Some(StudyRecord { study, occurrences }))
        })
        .await
    }

    pub async fn count_studies(&self) -> Result<usize> {
        self.execute(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM studies", [], |row| row.get(0))?;
            Ok(count as usize)
        })
        .await
    }
}
