//! Tests for `JsonFileStore` against a temporary directory.

use std::collections::BTreeSet;

use catalog_core::{
  record::{DocType, Record, Year},
  store::RecordStore,
};
use serde_json::json;
use tempfile::tempdir;

use crate::{Error, JsonFileStore};

fn record(id: &str, title: &str, doc_type: DocType, year: Year) -> Record {
  Record {
    id: id.into(),
    title: title.into(),
    institute: "서울교육연구정보원".into(),
    doc_type,
    year,
    tags: ["서울", "seoul", "AI"].into_iter().map(String::from).collect(),
    url: format!("https://example.org/view?id={id}"),
    extra: serde_json::Map::new(),
  }
}

// ─── Load ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_snapshot_loads_empty() {
  let dir = tempdir().unwrap();
  let store = JsonFileStore::new(dir.path().join("all_materials.json"));
  assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn corrupt_snapshot_is_malformed() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("all_materials.json");
  std::fs::write(&path, "[{\"id\": ").unwrap();

  let store = JsonFileStore::new(&path);
  assert!(matches!(store.load().await, Err(Error::Malformed(_))));
}

#[tokio::test]
async fn legacy_snapshot_loads() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("all_materials.json");
  let legacy = json!([{
    "id": "report001",
    "title": "2025 교육과정 개정 연구",
    "institute": "서울교육연구정보원",
    "type": "report",
    "year": 2025,
    "tags": ["교육과정", "개정", "연구"],
    "url": "https://serii.sen.go.kr"
  }]);
  std::fs::write(&path, serde_json::to_vec(&legacy).unwrap()).unwrap();

  let records = JsonFileStore::new(&path).load().await.unwrap();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].year, Year::Known(2025));
  assert_eq!(records[0].tags.len(), 3);
}

// ─── Save ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn save_then_load_roundtrips() {
  let dir = tempdir().unwrap();
  let store = JsonFileStore::new(dir.path().join("all_materials.json"));

  let mut curated = record("guide001", "과학 탐구 수업", DocType::Guide, Year::Known(2025));
  curated.extra.insert("grade".into(), json!("middle"));
  let records = vec![
    record("seoul_001", "2025 교육정책 연구보고서", DocType::Report, Year::Unknown),
    curated,
  ];

  store.save(&records).await.unwrap();
  let loaded = store.load().await.unwrap();
  assert_eq!(loaded, records);
}

#[tokio::test]
async fn save_of_load_is_stable() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("all_materials.json");
  let store = JsonFileStore::new(&path);

  store
    .save(&[record("a_001", "제목", DocType::Report, Year::Known(2024))])
    .await
    .unwrap();
  let first = std::fs::read(&path).unwrap();

  let loaded = store.load().await.unwrap();
  store.save(&loaded).await.unwrap();
  let second = std::fs::read(&path).unwrap();

  assert_eq!(first, second);
}

#[tokio::test]
async fn save_creates_missing_directory() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("data").join("nested").join("all_materials.json");
  let store = JsonFileStore::new(&path);

  store.save(&[]).await.unwrap();
  assert!(path.exists());
  assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_replaces_whole_snapshot_and_leaves_no_staging_file() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("all_materials.json");
  let store = JsonFileStore::new(&path);

  store
    .save(&[
      record("a_001", "하나", DocType::Report, Year::Unknown),
      record("a_002", "둘", DocType::Report, Year::Unknown),
    ])
    .await
    .unwrap();
  store
    .save(&[record("a_003", "셋", DocType::Guide, Year::Known(2023))])
    .await
    .unwrap();

  let loaded = store.load().await.unwrap();
  assert_eq!(loaded.len(), 1);
  assert_eq!(loaded[0].id, "a_003");

  let leftovers: Vec<_> = std::fs::read_dir(dir.path())
    .unwrap()
    .filter_map(|e| e.ok())
    .filter(|e| e.file_name() != "all_materials.json")
    .collect();
  assert!(leftovers.is_empty());
}

#[tokio::test]
async fn failed_rename_removes_staging_file() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("all_materials.json");
  // A directory in the snapshot's place makes the final rename fail.
  std::fs::create_dir(&path).unwrap();
  let store = JsonFileStore::new(&path);

  let r = store
    .save(&[record("a_001", "하나", DocType::Report, Year::Unknown)])
    .await;
  assert!(matches!(r, Err(Error::Io { .. })));
  assert!(!store.staging_path().exists());
  assert!(path.is_dir());
}

#[tokio::test]
async fn snapshot_is_readable_text() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("all_materials.json");
  let store = JsonFileStore::new(&path);

  store
    .save(&[record("a_001", "미래교육 지도안", DocType::Guide, Year::Known(2025))])
    .await
    .unwrap();

  let text = std::fs::read_to_string(&path).unwrap();
  assert!(text.contains("미래교육 지도안"));
  assert!(text.contains("\"type\": \"guide\""));
  assert!(text.contains("\"year\": \"2025\""));
  assert!(text.ends_with('\n'));

  let tags: BTreeSet<String> = serde_json::from_str::<serde_json::Value>(&text)
    .unwrap()[0]["tags"]
    .as_array()
    .unwrap()
    .iter()
    .map(|t| t.as_str().unwrap().to_owned())
    .collect();
  assert_eq!(tags.len(), 3);
}
