use sf_app::*;
use sf_study::StudyConfig;

fn temp_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("sf_app_study_files");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn save_and_load_by_extension() {
    let mut study = StudyConfig::default();
    study.n_fixed = 0.5;

    for name in ["study.yaml", "study.json"] {
        let path = temp_path(name);
        save_study(&path, &study).unwrap();
        let loaded = load_study(&path).unwrap();
        assert_eq!(loaded, study);
    }
}

#[test]
fn missing_file_is_a_read_error() {
    let err = load_study(&temp_path("missing.yaml")).unwrap_err();
    assert!(matches!(err, AppError::StudyFileRead { .. }));
}

#[test]
fn invalid_file_is_a_validation_error() {
    let path = temp_path("invalid.yaml");
    std::fs::write(&path, "pipe: { mu0: 0.0 }\n").unwrap();
    let err = load_study(&path).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn scenes_from_loaded_study() {
    let path = temp_path("scenes.yaml");
    std::fs::write(
        &path,
        "samples: 5\nn_fixed: 1.0\nkey_n_values: [1.0, 0.5]\n",
    )
    .unwrap();
    let study = load_study(&path).unwrap();

    let profile = static_profile_scene(&study).unwrap();
    assert_eq!(
        profile.series[0].points,
        vec![
            [0.0, 0.25],
            [0.25, 0.234375],
            [0.5, 0.1875],
            [0.75, 0.109375],
            [1.0, 0.0]
        ]
    );

    let comparison = comparison_scene(&study).unwrap();
    assert_eq!(comparison.series.len(), 2);
    let csv = scene_to_csv(&comparison, "v_norm");
    assert!(csv.starts_with("n,r,v_norm\n1,0,1\n"));
    assert_eq!(csv.lines().count(), 1 + 2 * 5);
}

#[test]
fn bundled_study_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../studies")
        .join("default.yaml");
    let study = load_study(&path).unwrap();
    assert_eq!(study, StudyConfig::default());
}
