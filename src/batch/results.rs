//! Item and batch result types

use serde::{Deserialize, Serialize};

use crate::error::FsOpError;

/// Caller-asserted kind of a batch item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Folder,
}

impl ItemKind {
    /// Label used in type-mismatch errors
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::File => "file",
            ItemKind::Folder => "folder",
        }
    }
}

/// A single target named relative to a base directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
}

/// Outcome of one item within a batch
#[derive(Debug)]
pub struct ItemReport {
    pub name: String,
    pub kind: ItemKind,
    pub outcome: Result<(), FsOpError>,
}

impl ItemReport {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Ordered per-item outcomes of a batch operation, one entry per requested
/// item in request order
#[derive(Debug, Default)]
pub struct BatchResult {
    pub reports: Vec<ItemReport>,
}

impl BatchResult {
    pub fn record(&mut self, item: &Item, outcome: Result<(), FsOpError>) {
        self.reports.push(ItemReport {
            name: item.name.clone(),
            kind: item.kind,
            outcome,
        });
    }

    pub fn all_succeeded(&self) -> bool {
        self.reports.iter().all(ItemReport::succeeded)
    }

    pub fn failed_count(&self) -> usize {
        self.reports.iter().filter(|r| !r.succeeded()).count()
    }
}
