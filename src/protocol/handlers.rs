//! Request handlers
//!
//! Dispatches parsed requests to the engine. Every path string resolves
//! through the sandbox before any filesystem work; batch handlers resolve
//! the base (and for move/copy both bases) up front and fail the whole call
//! on a traversal error, then let the batch executor isolate per-item
//! failures.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::warn;

use crate::archive::build_archive;
use crate::batch::{self, Item, ItemKind};
use crate::config::ServerConfig;
use crate::error::FsOpError;
use crate::files;
use crate::listing::list_directory;
use crate::protocol::commands::{Request, RequestResult};
use crate::protocol::responses::Response;
use crate::protocol::translators::{
    batch_response, error_response, listing_response, search_response,
};
use crate::sandbox::{ResolvedPath, RootContext, resolve};
use crate::search::search_files;

/// Dispatches a parsed request to its handler.
pub fn handle_request(root: &RootContext, config: &ServerConfig, request: Request) -> RequestResult {
    let response = match request {
        Request::List { path } => handle_list(root, &path),
        Request::Search { path, pattern } => handle_search(root, &path, &pattern),
        Request::Delete { path, items } => handle_delete(root, &path, &items),
        Request::Move {
            source,
            dest,
            items,
        } => handle_move(root, &source, &dest, &items),
        Request::Copy {
            source,
            dest,
            items,
        } => handle_copy(root, &source, &dest, &items),
        Request::Rename {
            path,
            old_name,
            new_name,
            kind,
        } => handle_rename(root, &path, &old_name, &new_name, kind),
        Request::NewFolder { path, name } => handle_new_folder(root, &path, &name),
        Request::Upload {
            path,
            name,
            content,
        } => handle_upload(root, config, &path, &name, &content),
        Request::Archive { path, items } => handle_archive(root, &path, &items),
        Request::Quit => {
            return RequestResult {
                response: Response::Bye,
                close: true,
            };
        }
    };

    RequestResult {
        response,
        close: false,
    }
}

fn resolve_or_error(root: &RootContext, path: &str) -> Result<ResolvedPath, Response> {
    resolve(root, path).map_err(|e| error_response(&FsOpError::from(e)))
}

fn handle_list(root: &RootContext, path: &str) -> Response {
    let dir = match resolve_or_error(root, path) {
        Ok(dir) => dir,
        Err(response) => return response,
    };
    match list_directory(&dir) {
        Ok(listing) => listing_response(listing),
        Err(e) => error_response(&e),
    }
}

fn handle_search(root: &RootContext, path: &str, pattern: &str) -> Response {
    let dir = match resolve_or_error(root, path) {
        Ok(dir) => dir,
        Err(response) => return response,
    };
    match search_files(&dir, pattern) {
        Ok(hits) => search_response(hits),
        Err(e) => error_response(&e),
    }
}

fn handle_delete(root: &RootContext, path: &str, items: &[Item]) -> Response {
    let base = match resolve_or_error(root, path) {
        Ok(base) => base,
        Err(response) => return response,
    };
    batch_response(batch::delete_all(&base, items))
}

fn handle_move(root: &RootContext, source: &str, dest: &str, items: &[Item]) -> Response {
    let source_base = match resolve_or_error(root, source) {
        Ok(base) => base,
        Err(response) => return response,
    };
    let dest_base = match resolve_or_error(root, dest) {
        Ok(base) => base,
        Err(response) => return response,
    };
    batch_response(batch::move_all(&source_base, &dest_base, items))
}

fn handle_copy(root: &RootContext, source: &str, dest: &str, items: &[Item]) -> Response {
    let source_base = match resolve_or_error(root, source) {
        Ok(base) => base,
        Err(response) => return response,
    };
    let dest_base = match resolve_or_error(root, dest) {
        Ok(base) => base,
        Err(response) => return response,
    };
    batch_response(batch::copy_all(&source_base, &dest_base, items))
}

fn handle_rename(
    root: &RootContext,
    path: &str,
    old_name: &str,
    new_name: &str,
    kind: ItemKind,
) -> Response {
    let base = match resolve_or_error(root, path) {
        Ok(base) => base,
        Err(response) => return response,
    };
    match batch::rename_one(&base, old_name, new_name, kind) {
        Ok(()) => Response::Ok,
        Err(e) => error_response(&e),
    }
}

fn handle_new_folder(root: &RootContext, path: &str, name: &str) -> Response {
    let dir = match resolve_or_error(root, path) {
        Ok(dir) => dir,
        Err(response) => return response,
    };
    match files::create_folder(&dir, name) {
        Ok(()) => Response::Ok,
        Err(e) => error_response(&e),
    }
}

fn handle_upload(
    root: &RootContext,
    config: &ServerConfig,
    path: &str,
    name: &str,
    content: &str,
) -> Response {
    let dir = match resolve_or_error(root, path) {
        Ok(dir) => dir,
        Err(response) => return response,
    };

    let bytes = match BASE64.decode(content) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Rejected upload of {}: undecodable content: {}", name, e);
            return Response::Error {
                kind: "bad_request",
                message: format!("content is not valid base64: {}", e),
            };
        }
    };

    if bytes.len() as u64 > config.max_upload_bytes() {
        return Response::Error {
            kind: "too_large",
            message: format!(
                "upload of {} bytes exceeds limit of {} MB",
                bytes.len(),
                config.max_upload_mb
            ),
        };
    }

    match files::save_file(&dir, name, &bytes) {
        Ok(()) => Response::Ok,
        Err(e) => error_response(&e),
    }
}

fn handle_archive(root: &RootContext, path: &str, items: &[Item]) -> Response {
    let base = match resolve_or_error(root, path) {
        Ok(base) => base,
        Err(response) => return response,
    };
    match build_archive(&base, items) {
        Ok(buffer) => Response::Archive {
            content: BASE64.encode(buffer),
        },
        Err(e) => error_response(&e),
    }
}
