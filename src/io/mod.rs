pub mod output;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Report destination: the given file, or stdout when `None`.
pub fn open_destination(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(io::stdout().lock())),
    }
}
