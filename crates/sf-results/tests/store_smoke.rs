use sf_results::*;

fn manifest(id: &str, timestamp: &str) -> RenderManifest {
    RenderManifest {
        render_id: id.to_string(),
        study_name: "Power-law pipe flow".to_string(),
        timestamp: timestamp.to_string(),
        frame_count: 2,
        fps: 10,
        dpi: 100,
        width_px: 1500,
        height_px: 600,
        renderer_version: "v1".to_string(),
    }
}

fn frames() -> Vec<FrameRecord> {
    vec![
        FrameRecord {
            index: 0,
            n: 1.0,
            title: "n = 1.000".to_string(),
            r: vec![0.0, 0.5, 1.0],
            v: vec![0.25, 0.1875, 0.0],
            v_norm: vec![1.0, 0.75, 0.0],
            y_max: 0.275,
            y_max_norm: 1.1,
        },
        FrameRecord {
            index: 1,
            n: 0.5,
            title: "n = 0.500".to_string(),
            r: vec![0.0, 0.5, 1.0],
            v: vec![0.0833, 0.0729, 0.0],
            v_norm: vec![1.0, 0.875, 0.0],
            y_max: 0.0917,
            y_max_norm: 1.1,
        },
    ]
}

#[test]
fn save_and_load_render() {
    let temp_dir = std::env::temp_dir().join("sf_results_test");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RenderStore::new(temp_dir.clone()).unwrap();
    let manifest = manifest("render_abc", "2026-10-18T12:00:00Z");

    assert!(!store.has_render("render_abc"));
    store.save_render(&manifest, &frames()).unwrap();
    assert!(store.has_render("render_abc"));

    let loaded_manifest = store.load_manifest("render_abc").unwrap();
    assert_eq!(loaded_manifest, manifest);

    let loaded_frames = store.load_frames("render_abc").unwrap();
    assert_eq!(loaded_frames, frames());
}

#[test]
fn list_renders_oldest_first() {
    let temp_dir = std::env::temp_dir().join("sf_results_test_list");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RenderStore::new(temp_dir).unwrap();
    store
        .save_render(&manifest("later", "2026-10-18T13:00:00Z"), &frames())
        .unwrap();
    store
        .save_render(&manifest("earlier", "2026-10-18T12:00:00Z"), &frames())
        .unwrap();

    let renders = store.list_renders().unwrap();
    let ids: Vec<&str> = renders.iter().map(|m| m.render_id.as_str()).collect();
    assert_eq!(ids, vec!["earlier", "later"]);
}

#[test]
fn missing_render_is_reported() {
    let temp_dir = std::env::temp_dir().join("sf_results_test_missing");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RenderStore::new(temp_dir).unwrap();
    assert!(matches!(
        store.load_manifest("nope"),
        Err(ResultsError::RenderNotFound { .. })
    ));
    assert!(matches!(
        store.load_frames("nope"),
        Err(ResultsError::RenderNotFound { .. })
    ));
}

#[test]
fn delete_render_removes_directory() {
    let temp_dir = std::env::temp_dir().join("sf_results_test_delete");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RenderStore::new(temp_dir).unwrap();
    store
        .save_render(&manifest("gone", "2026-10-18T12:00:00Z"), &frames())
        .unwrap();
    store.delete_render("gone").unwrap();
    assert!(!store.has_render("gone"));
    assert!(store.list_renders().unwrap().is_empty());
}

#[test]
fn store_for_study_lives_next_to_file() {
    let temp_dir = std::env::temp_dir().join("sf_results_test_study");
    let _ = std::fs::remove_dir_all(&temp_dir);
    std::fs::create_dir_all(&temp_dir).unwrap();

    let store = RenderStore::for_study(&temp_dir.join("study.yaml")).unwrap();
    assert_eq!(
        store.root_dir(),
        temp_dir.join(".shearflow").join("renders").as_path()
    );
}

#[test]
fn failed_rewrite_leaves_no_manifest() {
    let temp_dir = std::env::temp_dir().join("sf_results_test_rewrite");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RenderStore::new(temp_dir.clone()).unwrap();
    let manifest = manifest("rewrite", "2026-10-18T12:00:00Z");
    store.save_render(&manifest, &frames()).unwrap();

    // A directory in place of the frames file makes the frame write fail.
    let frames_path = temp_dir.join("rewrite").join("frames.jsonl");
    std::fs::remove_file(&frames_path).unwrap();
    std::fs::create_dir_all(&frames_path).unwrap();

    assert!(store.save_render(&manifest, &frames()).is_err());
    assert!(!store.has_render("rewrite"));
    assert!(store.list_renders().unwrap().is_empty());
}

#[test]
fn rewrite_replaces_frames() {
    let temp_dir = std::env::temp_dir().join("sf_results_test_replace");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RenderStore::new(temp_dir).unwrap();
    let manifest = manifest("replace", "2026-10-18T12:00:00Z");
    store.save_render(&manifest, &frames()).unwrap();

    let fewer = vec![frames().remove(0)];
    store.save_render(&manifest, &fewer).unwrap();
    assert!(store.has_render("replace"));
    assert_eq!(store.load_frames("replace").unwrap(), fewer);
}
