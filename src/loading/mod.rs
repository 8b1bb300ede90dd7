//! Loading of document trees handed over by a parser

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{Document, LoadingError};

/// Read a file (or standard input, if the filename is "-") and return an
/// owned String. We pass that ownership back to the main function so that
/// errors pointing into the content can borrow it.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                    position: None,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                    position: None,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                    position: None,
                }),
            }
        }
    }
}

/// Decode a serialized document tree. The tree is expected to have come from
/// a compatible parser; anything naming an element kind we do not know about
/// is refused here rather than being skipped later.
pub fn decode<'i>(filename: &'i Path, content: &str) -> Result<Document, LoadingError<'i>> {
    match serde_json::from_str::<Document>(content) {
        Ok(document) => {
            debug!(
                "Found {} top-level node{}",
                document
                    .nodes
                    .len(),
                if document
                    .nodes
                    .len()
                    == 1
                {
                    ""
                } else {
                    "s"
                }
            );
            debug!(
                "Found {} footnote definition{}",
                document
                    .footnotes
                    .definitions
                    .len(),
                if document
                    .footnotes
                    .definitions
                    .len()
                    == 1
                {
                    ""
                } else {
                    "s"
                }
            );
            Ok(document)
        }
        Err(error) => {
            debug!(?error);
            let problem = match error.classify() {
                serde_json::error::Category::Io => "Failed reading",
                serde_json::error::Category::Syntax => "Malformed document tree",
                serde_json::error::Category::Eof => "Truncated document tree",
                serde_json::error::Category::Data => "Unrecognized document tree",
            };
            Err(LoadingError {
                problem: problem.to_string(),
                details: strip_position(&error.to_string()),
                filename,
                position: Some((error.line(), error.column())),
            })
        }
    }
}

// serde_json appends " at line L column C" to its messages; we report the
// position separately.
fn strip_position(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(i) => message[..i].to_string(),
        None => message.to_string(),
    }
}
