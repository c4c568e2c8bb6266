use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::CliError;

/// Shader text plus the name diagnostics are tagged with.
#[derive(Debug)]
pub struct LoadedSource {
    pub name: String,
    pub text: String,
}

pub fn load_source(
    source_path: Option<&Path>,
    source_text: Option<&str>,
) -> Result<LoadedSource, CliError> {
    let loaded = if let Some(text) = source_text {
        LoadedSource {
            name: "<inline>".to_string(),
            text: text.to_string(),
        }
    } else if let Some(path) = source_path {
        if path.as_os_str() == "-" {
            load_stdin()?
        } else {
            load_file(path)?
        }
    } else {
        return Err(CliError::MissingSource);
    };

    if loaded.text.is_empty() {
        return Err(CliError::EmptyInput);
    }
    log::debug!("loaded {} bytes from {}", loaded.text.len(), loaded.name);
    Ok(loaded)
}

/// Loads the source or exits with the error, like every command does.
pub fn load_or_exit(source_path: Option<&Path>, source_text: Option<&str>) -> LoadedSource {
    match load_source(source_path, source_text) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_stdin() -> Result<LoadedSource, CliError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(CliError::Stdin)?;
    Ok(LoadedSource {
        name: "<stdin>".to_string(),
        text,
    })
}

fn load_file(path: &Path) -> Result<LoadedSource, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedSource {
        name: path.to_string_lossy().into_owned(),
        text,
    })
}
