//! Motion catalog: the code -> definition index studies are resolved against.

pub mod commands;
pub mod seed;

use std::collections::HashMap;

use crate::{
    db::{normalize_code, Database, MotionDefinition},
    error::StudyError,
};

/// Read-only snapshot of the catalog, indexed by uppercase code and keeping
/// catalog order for listing.
#[derive(Debug, Clone, Default)]
pub struct MotionCatalog {
    motions: Vec<MotionDefinition>,
    index: HashMap<String, usize>,
}

impl MotionCatalog {
    pub fn from_definitions(definitions: Vec<MotionDefinition>) -> Self {
        let mut motions = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());

        for definition in definitions {
            let key = normalize_code(&definition.code);
            if index.contains_key(&key) {
                continue;
            }
            index.insert(key, motions.len());
            motions.push(definition);
        }

        Self { motions, index }
    }

    pub fn lookup(&self, code: &str) -> Option<&MotionDefinition> {
        self.index
            .get(&normalize_code(code))
            .map(|&position| &self.motions[position])
    }

    pub fn list_all(&self) -> &[MotionDefinition] {
        &self.motions
    }

    /// Snapshot the catalog as it is stored right now.
    pub async fn load(db: &Database) -> Result<Self, StudyError> {
        Ok(Self::from_definitions(db.list_motions().await?))
    }
}

pub async fn list_motions(db: &Database) -> Result<Vec<MotionDefinition>, StudyError> {
    Ok(db.list_motions().await?)
}

pub async fn get_motion(db: &Database, code: &str) -> Result<MotionDefinition, StudyError> {
    db.lookup_motion(code)
        .await?
        .ok_or_else(|| StudyError::motion_not_found(normalize_code(code)))
}
