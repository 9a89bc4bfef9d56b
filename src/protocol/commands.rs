//! Wire request types
//!
//! One JSON object per line, tagged by `op`. Path fields are client-supplied
//! relative paths; they stay untrusted strings until the handler runs them
//! through the sandbox. File content crosses the wire base64-encoded.

use serde::Deserialize;

use crate::batch::{Item, ItemKind};

/// A client request, parsed from one line of input
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// List the immediate children of a directory
    List {
        #[serde(default)]
        path: String,
    },
    /// Recursive wildcard file search
    Search {
        #[serde(default)]
        path: String,
        pattern: String,
    },
    /// Batch delete of named items under `path`
    Delete {
        #[serde(default)]
        path: String,
        items: Vec<Item>,
    },
    /// Batch move of named items from `source` to `dest`
    Move {
        source: String,
        dest: String,
        items: Vec<Item>,
    },
    /// Batch copy of named items from `source` to `dest`
    Copy {
        source: String,
        dest: String,
        items: Vec<Item>,
    },
    /// Rename one item in place
    Rename {
        #[serde(default)]
        path: String,
        old_name: String,
        new_name: String,
        kind: ItemKind,
    },
    /// Create a new folder
    NewFolder {
        #[serde(default)]
        path: String,
        name: String,
    },
    /// Upload file content (base64) into a directory
    Upload {
        #[serde(default)]
        path: String,
        name: String,
        content: String,
    },
    /// Build a zip of the named items and return it (base64)
    Archive {
        #[serde(default)]
        path: String,
        items: Vec<Item>,
    },
    /// Close the connection
    Quit,
}

/// Result of dispatching one request: the response to write back, and
/// whether the connection should close afterwards
#[derive(Debug)]
pub struct RequestResult {
    pub response: crate::protocol::responses::Response,
    pub close: bool,
}
