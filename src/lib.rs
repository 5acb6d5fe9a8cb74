pub mod case;
pub mod config;
pub mod error;
pub mod split;
pub mod trim;

pub use case::{to_lower_case, to_upper_case};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use split::{join, split, split_borrowed};
pub use trim::trim;

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Trim,
    Split(char),
    Upper,
    Lower,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Tokens(Vec<String>),
}

pub fn apply(text: &str, op: Op, config: &Config) -> Output {
    tracing::debug!(?op, bytes = text.len(), "applying op");
    match op {
        Op::Trim => Output::Text(trim(text)),
        Op::Upper => Output::Text(to_upper_case(text)),
        Op::Lower => Output::Text(to_lower_case(text)),
        Op::Split(delimiter) => {
            let tokens = split_borrowed(text, delimiter);
            let tokens = if config.trim_tokens {
                tokens.into_iter().map(trim).collect()
            } else {
                tokens.into_iter().map(String::from).collect()
            };
            Output::Tokens(tokens)
        }
    }
}

pub fn render(output: &Output, config: &Config) -> Result<String> {
    let mut result = match (output, config.output) {
        (Output::Text(text), OutputFormat::Lines) => text.clone(),
        (Output::Tokens(tokens), OutputFormat::Lines) => tokens.join("\n"),
        (Output::Text(text), OutputFormat::Json) => serde_json::to_string(text)?,
        (Output::Tokens(tokens), OutputFormat::Json) => serde_json::to_string(tokens)?,
    };
    result.push('\n');
    Ok(result)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Explicit file arguments are always kept; directory entries are filtered
/// by `config.extensions`.
pub fn list_files(inputs: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let mut out: Vec<PathBuf> = Vec::new();

    for p in inputs {
        if p.is_dir() {
            for entry in fs::read_dir(p).map_err(|e| Error::io(p, e))? {
                let sub_path = entry.map_err(|e| Error::io(p, e))?.path();
                if sub_path.is_dir() {
                    out.extend(list_files(&[sub_path], config)?);
                } else if sub_path.is_file() && has_extension(&sub_path, &config.extensions) {
                    out.push(sub_path);
                }
            }
        } else if p.is_file() {
            out.push(p.clone());
        } else {
            return Err(Error::io(
                p,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            ));
        }
    }

    out.sort();
    Ok(out)
}

/// Reads every file and joins the contents with `\n`.
pub fn read_inputs(files: &[PathBuf]) -> Result<String> {
    if files.is_empty() {
        return Err(Error::NoInput);
    }
    let mut all_text = String::new();
    for fp in files {
        tracing::debug!(path = %fp.display(), "reading input");
        if !all_text.is_empty() {
            all_text.push('\n');
        }
        let content = fs::read_to_string(fp).map_err(|e| Error::io(fp, e))?;
        all_text.push_str(&content);
    }
    Ok(all_text)
}
