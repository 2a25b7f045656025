use openpts_lib::{
    bootstrap,
    catalog::commands::list_motions,
    config::AppConfig,
    db::MotionInput,
    studies::commands::{create_study, get_study, CreateStudyInput},
    AppState, ErrorKind,
};
use tempfile::{tempdir, TempDir};

async fn setup() -> (TempDir, AppState) {
    let tmp = tempdir().unwrap();
    let config = AppConfig {
        database_path: tmp.path().join("openpts.db"),
        debug: false,
    };
    let state = bootstrap::initialize(config).await.unwrap();
    (tmp, state)
}

fn assembly_a() -> CreateStudyInput {
    CreateStudyInput {
        name: "Assembly A".into(),
        description: Some("Bracket sub-assembly".into()),
        motions: vec![
            MotionInput::new("M3", 1),
            MotionInput::new("G1", 2),
            MotionInput::new("P2", 1),
        ],
    }
}

#[tokio::test]
async fn test_create_study_computes_standard_time() {
    let (_tmp, state) = setup().await;

    let result = create_study(&state, assembly_a()).await.unwrap();
    assert_eq!(result.name, "Assembly A");
    assert_eq!(result.total_mods, 7.0);
    assert_eq!(result.total_motions, 4);
    assert_eq!(result.base_time_seconds, 0.903);
    assert_eq!(result.allowances_pct, 12.0);
    assert_eq!(result.standard_time_seconds, 1.011);
    assert_eq!(result.units_per_hour, 3560);
}

#[tokio::test]
async fn test_get_study_matches_create() {
    let (_tmp, state) = setup().await;

    let created = create_study(&state, assembly_a()).await.unwrap();
    let fetched = get_study(&state, created.study_id.clone()).await.unwrap();
    assert_eq!(created, fetched);

    let record = state
        .db
        .get_study_with_occurrences(&created.study_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.study.description.as_deref(), Some("Bracket sub-assembly"));
    let stored: Vec<_> = record
        .occurrences
        .iter()
        .map(|o| (o.motion_code.as_str(), o.sequence_order, o.quantity))
        .collect();
    assert_eq!(stored, [("M3", 0, 1), ("G1", 1, 2), ("P2", 2, 1)]);
}

#[tokio::test]
async fn test_lowercase_codes_are_resolved() {
    let (_tmp, state) = setup().await;

    let input = CreateStudyInput {
        name: "Lowercase".into(),
        description: None,
        motions: vec![MotionInput::new("m3", 1), MotionInput::new("g1", 2)],
    };
    let result = create_study(&state, input).await.unwrap();
    assert_eq!(result.total_mods, 5.0);

    let record = state
        .db
        .get_study_with_occurrences(&result.study_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.occurrences[0].motion_code, "M3");
}

#[tokio::test]
async fn test_empty_study_has_zero_rate() {
    let (_tmp, state) = setup().await;

    let input = CreateStudyInput {
        name: "Idle".into(),
        description: None,
        motions: Vec::new(),
    };
    let result = create_study(&state, input).await.unwrap();
    assert_eq!(result.total_mods, 0.0);
    assert_eq!(result.total_motions, 0);
    assert_eq!(result.base_time_seconds, 0.0);
    assert_eq!(result.standard_time_seconds, 0.0);
    assert_eq!(result.units_per_hour, 0);

    let fetched = get_study(&state, result.study_id.clone()).await.unwrap();
    assert_eq!(fetched, result);
}

#[tokio::test]
async fn test_unknown_code_persists_nothing() {
    let (_tmp, state) = setup().await;

    let input = CreateStudyInput {
        name: "Broken".into(),
        description: None,
        motions: vec![MotionInput::new("M3", 1), MotionInput::new("ZZ9", 1)],
    };
    let err = create_study(&state, input).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidMotionCode);
    assert!(err.message.contains("ZZ9"));

    assert_eq!(state.db.count_studies().await.unwrap(), 0);
}

#[tokio::test]
async fn test_non_positive_quantity_is_rejected() {
    let (_tmp, state) = setup().await;

    let input = CreateStudyInput {
        name: "Zero".into(),
        description: None,
        motions: vec![MotionInput::new("M3", 0)],
    };
    let err = create_study(&state, input).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
    assert_eq!(state.db.count_studies().await.unwrap(), 0);
}

#[tokio::test]
async fn test_blank_name_is_rejected() {
    let (_tmp, state) = setup().await;

    let input = CreateStudyInput {
        name: "   ".into(),
        description: None,
        motions: vec![MotionInput::new("M3", 1)],
    };
    let err = create_study(&state, input).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
}

#[tokio::test]
async fn test_get_missing_study_is_not_found() {
    let (_tmp, state) = setup().await;

    let err = get_study(&state, "does-not-exist".into()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "study not found: does-not-exist");
}

#[tokio::test]
async fn test_stale_occurrence_is_skipped_on_recompute() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("openpts.db");
    let config = AppConfig {
        database_path: db_path.clone(),
        debug: false,
    };
    let state = bootstrap::initialize(config).await.unwrap();

    let created = create_study(&state, assembly_a()).await.unwrap();
    drop(state);

    // Retire G1 from the catalog behind the service's back.
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute("DELETE FROM motions WHERE code = 'G1'", []).unwrap();
    }

    let config = AppConfig {
        database_path: db_path,
        debug: false,
    };
    let state = bootstrap::initialize(config).await.unwrap();
    let fetched = get_study(&state, created.study_id.clone()).await.unwrap();

    assert_eq!(fetched.total_mods, 5.0);
    assert_eq!(fetched.total_motions, 2);
    assert_eq!(fetched.base_time_seconds, 0.645);
}

#[tokio::test]
async fn test_overflowing_quantities_leave_store_usable() {
    let (_tmp, state) = setup().await;

    let input = CreateStudyInput {
        name: "Huge".into(),
        description: None,
        motions: vec![MotionInput::new("M3", i64::MAX), MotionInput::new("G1", 1)],
    };
    let err = create_study(&state, input).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
    assert_eq!(state.db.count_studies().await.unwrap(), 0);

    let motions = list_motions(&state).await.unwrap();
    assert!(!motions.is_empty());
    let result = create_study(&state, assembly_a()).await.unwrap();
    assert_eq!(result.units_per_hour, 3560);
}

#[tokio::test]
async fn test_changed_mod_value_applies_on_recompute() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("openpts.db");
    let config = AppConfig {
        database_path: db_path.clone(),
        debug: false,
    };
    let state = bootstrap::initialize(config).await.unwrap();

    let created = create_study(&state, assembly_a()).await.unwrap();
    drop(state);

    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute("UPDATE motions SET mod_value = 10 WHERE code = 'G1'", [])
            .unwrap();
    }

    let config = AppConfig {
        database_path: db_path,
        debug: false,
    };
    let state = bootstrap::initialize(config).await.unwrap();
    let fetched = get_study(&state, created.study_id.clone()).await.unwrap();

    // 3*1 + 10*2 + 2*1
    assert_eq!(fetched.total_mods, 25.0);
    assert_eq!(fetched.total_motions, 4);
    assert_eq!(fetched.base_time_seconds, 3.225);
    assert_eq!(fetched.standard_time_seconds, 3.612);
    assert_eq!(fetched.units_per_hour, 996);
    assert_ne!(fetched, created);
}
