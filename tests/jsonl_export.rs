mod common;

use common::{build_world, read_lines};
use worldforge::flush::flush_to_jsonl;

#[test]
fn flush_produces_valid_jsonl_files() {
    let world = build_world("export");
    let dir = tempfile::tempdir().unwrap();

    flush_to_jsonl(&world, dir.path()).unwrap();

    let entities_path = dir.path().join("entities.jsonl");
    let events_path = dir.path().join("world_events.jsonl");
    let bosses_path = dir.path().join("bosses.jsonl");
    let summary_path = dir.path().join("world.json");

    assert!(entities_path.exists());
    assert!(events_path.exists());
    assert!(bosses_path.exists());
    assert!(summary_path.exists());

    let entities_lines = read_lines(&entities_path);
    let events_lines = read_lines(&events_path);
    let bosses_lines = read_lines(&bosses_path);

    assert_eq!(entities_lines.len(), world.entity_count());
    assert_eq!(events_lines.len(), world.world_events.len());
    assert_eq!(bosses_lines.len(), world.bosses().len());

    for line in &entities_lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("type").is_some());
        assert!(v.get("id").is_some());
        assert!(v.get("name").is_some());
        assert!(v.get("createdAt").is_some());
    }

    for line in &events_lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("id").is_some());
        assert!(v.get("entityIds").is_some());
    }

    for line in &bosses_lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("dungeonId").is_some());
        assert!(v.get("bossId").is_some());
        assert!(v.get("level").is_some());
    }

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(summary["seed"], "export");
    assert_eq!(summary["entityCount"], world.entity_count());
}

#[test]
fn flush_creates_missing_directories() {
    let world = build_world("nested");
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    flush_to_jsonl(&world, &nested).unwrap();
    assert!(nested.join("entities.jsonl").exists());
}
