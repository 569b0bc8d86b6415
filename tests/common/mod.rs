//! Common test utilities and fixtures

#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for proposal documents in wire format
#[derive(Default)]
pub struct DocumentBuilder {
    entries: Vec<Value>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a proposal record
    pub fn proposal(mut self, id: &str, department: (&str, &str), stage: &str, data: Value) -> Self {
        self.entries.push(json!({
            "id": id,
            "department": {"id": department.0, "name": department.1},
            "stage": stage,
            "data": data,
        }));
        self
    }

    /// Add an arbitrary entry, such as `null`
    pub fn raw(mut self, entry: Value) -> Self {
        self.entries.push(entry);
        self
    }

    /// Top-level array form
    pub fn build(self) -> Value {
        Value::Array(self.entries)
    }

    /// `{"data": [...]}` envelope form
    pub fn build_enveloped(self) -> Value {
        json!({ "data": self.entries })
    }
}

/// A temporary directory holding a written document
pub struct DocumentFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl DocumentFile {
    pub fn write(document: &Value) -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join("proposals.json");
        fs::write(&path, serde_json::to_string_pretty(document)?)?;
        Ok(Self { dir, path })
    }
}

/// Disbursement payload: two tools rows (10000 accepted, 20000 not) and one
/// accepted incentive row of 5000
pub fn disbursement_data() -> Value {
    json!({
        "tableTools": [
            ["Laptop", "Core i7", "1", "unit", "10000", "1"],
            ["Printer", "Laser", "1", "unit", "20000", "0"]
        ],
        "tableIncentive": [
            ["Honorarium", "Ketua", "5000", "1"]
        ]
    })
}

/// Planning payload with one activity spanning January 2024 and one in March
pub fn planning_data() -> Value {
    json!({
        "activityList": [
            {
                "code": "A1",
                "title": "Workshop Kurikulum",
                "subActivityList": [
                    {"title": "Persiapan", "startedAt": "2024-01-02", "finishedAt": "2024-01-05"},
                    {"title": "Pelaksanaan", "startedAt": "2024-01-10", "finishedAt": "2024-01-20"}
                ],
                "funding": [
                    ["Konsumsi", "40", "box", "1000000"],
                    ["ATK", "1", "paket", "250000"]
                ]
            },
            {
                "code": "A2",
                "title": "Seminar Nasional",
                "subActivityList": [
                    {"title": "Seminar", "startedAt": "2024-03-01T08:00:00", "finishedAt": "2024-03-01T16:00:00"}
                ],
                "funding": [["Narasumber", "2", "orang", "3000000"]]
            }
        ]
    })
}
