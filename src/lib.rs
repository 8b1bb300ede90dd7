//! Canonical source writer for Org outline documents.

pub mod formatting;
pub mod language;
pub mod loading;
