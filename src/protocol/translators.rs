//! Protocol translators
//!
//! Converts engine results and errors into their wire representations.

use crate::batch::BatchResult;
use crate::error::FsOpError;
use crate::error::handlers::error_kind;
use crate::listing::DirListing;
use crate::protocol::responses::{
    ErrorWire, FileEntryWire, FolderEntryWire, ItemReportWire, Response, SearchHitWire,
};
use crate::search::SearchHit;

pub fn listing_response(listing: DirListing) -> Response {
    Response::Listing {
        folders: listing
            .folders
            .into_iter()
            .map(|f| FolderEntryWire {
                name: f.name,
                modified: f.modified,
                child_count: f.child_count,
            })
            .collect(),
        files: listing
            .files
            .into_iter()
            .map(|f| FileEntryWire {
                name: f.name,
                modified: f.modified,
                size: f.size,
            })
            .collect(),
    }
}

pub fn search_response(hits: Vec<SearchHit>) -> Response {
    Response::SearchResults {
        hits: hits
            .into_iter()
            .map(|h| SearchHitWire {
                name: h.name,
                path: h.path,
                size: h.size,
            })
            .collect(),
    }
}

pub fn batch_response(result: BatchResult) -> Response {
    Response::Batch {
        reports: result
            .reports
            .into_iter()
            .map(|report| {
                let error = report.outcome.as_ref().err().map(error_wire);
                ItemReportWire {
                    name: report.name,
                    kind: report.kind.label(),
                    ok: error.is_none(),
                    error,
                }
            })
            .collect(),
    }
}

pub fn error_response(error: &FsOpError) -> Response {
    Response::Error {
        kind: error_kind(error),
        message: error.to_string(),
    }
}

fn error_wire(error: &FsOpError) -> ErrorWire {
    ErrorWire {
        kind: error_kind(error),
        message: error.to_string(),
    }
}
