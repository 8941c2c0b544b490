use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Report destination: a file when `--output` was given, stdout
/// otherwise.
#[derive(Debug)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> Self {
        match output_path {
            Some(path) => Output::File(path),
            None => Output::Stdout,
        }
    }

    /// Serializes `value` as pretty JSON with a trailing newline.
    pub fn save_json<T>(&self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        match self {
            Output::Stdout => {
                let mut writer = io::stdout().lock();
                write_json(&mut writer, value).context("Failed to write JSON to stdout")
            }
            Output::File(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                let mut writer = BufWriter::new(file);
                write_json(&mut writer, value)
                    .with_context(|| format!("Failed to write JSON to {}", path.display()))
            }
        }
    }
}

fn write_json<W, T>(writer: &mut W, value: &T) -> anyhow::Result<()>
where
    W: Write,
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;
    let reader = io::BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })
}
