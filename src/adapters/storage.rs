use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Report destination: a file (parent directories are created) or stdout.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    output_path: Option<String>,
}

impl LocalStorage {
    pub fn new(output_path: Option<String>) -> Self {
        Self { output_path }
    }

    pub fn stdout() -> Self {
        Self { output_path: None }
    }

    pub fn open(&self) -> Result<Box<dyn Write>> {
        match &self.output_path {
            Some(path) => {
                let full_path = Path::new(path);
                if let Some(parent) = full_path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                Ok(Box::new(BufWriter::new(File::create(full_path)?)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }

    pub fn describe(&self) -> String {
        self.output_path
            .clone()
            .unwrap_or_else(|| "stdout".to_string())
    }
}
