//! Document and raw-line input.
//!
//! Content arrives either from a file path or from piped stdin, read once
//! in full. Parsing happens at this boundary: the rest of the crate only
//! ever sees a validated [`Document`] or plain lines.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use tracing::debug;

use crate::model::{Document, InputError};

/// Read and parse a structured document from `path`, or from piped stdin
/// when no path is given.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` for a missing file,
/// `InputError::NoInput` when stdin is an interactive terminal,
/// `InputError::EmptyInput` for blank input, and
/// `InputError::InvalidDocument` when the JSON does not describe a
/// document.
pub fn read_document(path: Option<&Path>) -> Result<Document, InputError> {
    let text = read_input(path)?;
    parse_document(&text)
}

/// Read raw text lines from `path`, or from piped stdin when no path is
/// given. Used for chunked plain-text paging.
///
/// # Errors
///
/// Same input errors as [`read_document`], minus document validation.
pub fn read_lines(path: Option<&Path>) -> Result<Vec<String>, InputError> {
    let text = read_input(path)?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Parse document JSON, rejecting blank input.
///
/// # Errors
///
/// Returns `InputError::EmptyInput` for whitespace-only text and
/// `InputError::InvalidDocument` carrying the parser's message otherwise.
pub fn parse_document(text: &str) -> Result<Document, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::EmptyInput);
    }
    serde_json::from_str(text).map_err(|e| InputError::InvalidDocument {
        message: e.to_string(),
    })
}

fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(InputError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            let text = fs::read_to_string(path)?;
            debug!(path = %path.display(), bytes = text.len(), "read input file");
            Ok(text)
        }
        None => {
            let stdin = io::stdin();
            // A TTY here means nothing was piped in; bail out instead of
            // blocking on a read that will never finish.
            if stdin.is_terminal() {
                return Err(InputError::NoInput);
            }
            let mut text = String::new();
            stdin.lock().read_to_string(&mut text)?;
            debug!(bytes = text.len(), "read piped stdin");
            Ok(text)
        }
    }
}

// ===== Tests =====
