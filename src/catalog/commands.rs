use crate::{db::MotionDefinition, error::CommandError, AppState};

pub async fn list_motions(state: &AppState) -> Result<Vec<MotionDefinition>, CommandError> {
    let db = &state.db;
    super::list_motions(db).await.map_err(CommandError::from)
}

pub async fn get_motion(state: &AppState, code: String) -> Result<MotionDefinition, CommandError> {
    let db = &state.db;
    super::get_motion(db, &code).await.map_err(CommandError::from)
}
