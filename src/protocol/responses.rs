//! Wire response types
//!
//! One JSON object per line, tagged by `status`. Batch operations return a
//! `batch` response even when some items failed; only whole-call failures
//! (traversal, missing target of a single-target op) use `error`.

use serde::Serialize;

/// One subfolder in a `listing` response
#[derive(Debug, Serialize)]
pub struct FolderEntryWire {
    pub name: String,
    pub modified: u64,
    pub child_count: usize,
}

/// One file in a `listing` response
#[derive(Debug, Serialize)]
pub struct FileEntryWire {
    pub name: String,
    pub modified: u64,
    pub size: u64,
}

/// One hit in a `search_results` response
#[derive(Debug, Serialize)]
pub struct SearchHitWire {
    pub name: String,
    pub path: String,
    pub size: u64,
}

/// Per-item outcome in a `batch` response
#[derive(Debug, Serialize)]
pub struct ItemReportWire {
    pub name: String,
    pub kind: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorWire>,
}

/// Error kind plus human-readable detail
#[derive(Debug, Serialize)]
pub struct ErrorWire {
    pub kind: &'static str,
    pub message: String,
}

/// A server response, written as one line of output
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Ok,
    Listing {
        folders: Vec<FolderEntryWire>,
        files: Vec<FileEntryWire>,
    },
    SearchResults {
        hits: Vec<SearchHitWire>,
    },
    Batch {
        reports: Vec<ItemReportWire>,
    },
    /// Zip bytes, base64-encoded. Missing items produce no entry, not an
    /// error.
    Archive {
        content: String,
    },
    Error {
        kind: &'static str,
        message: String,
    },
    Bye,
}
