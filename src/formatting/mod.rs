//! Writing Org documents back out as canonical source text

mod writer;

pub use writer::{borders, Writer, TAGS_COLUMN};

use crate::language::Document;

/// Render a document to its canonical Org source, aligning headline tags to
/// the given column.
pub fn render(document: &Document, tags_column: usize) -> String {
    let mut output = Writer::with_tags_column(tags_column);
    output.write_document(document);
    output.finish()
}
