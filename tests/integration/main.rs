//! Integration tests for filecrc

mod cli_contracts;
mod content_file;
