use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::{self, File},
    path::Path,
};
use tracing::debug;

/// Read every row of a headered CSV into `T`.
///
/// Any unparseable row or missing column fails the whole load; there is
/// no partial result. Cells are taken verbatim, padding included; blank
/// cells are only accepted for `Option` fields.
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize::<T>().enumerate() {
        // +2: one for the header line, one for 1-based numbering
        let row = result.with_context(|| format!("parsing {} line {}", path.display(), idx + 2))?;
        rows.push(row);
    }

    debug!(path = %path.display(), rows = rows.len(), "loaded table");
    Ok(rows)
}

/// Write `rows` as a headered CSV, via a tmp file renamed over `path`.
pub fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("table.csv");
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

    {
        let file = File::create(&tmp_path)
            .with_context(|| format!("creating {}", tmp_path.display()))?;
        let mut wtr = WriterBuilder::new().has_headers(true).from_writer(file);
        for row in rows {
            wtr.serialize(row)
                .with_context(|| format!("serializing row into {}", tmp_path.display()))?;
        }
        wtr.flush()
            .with_context(|| format!("flushing {}", tmp_path.display()))?;
    }

    fs::rename(&tmp_path, path)
        .with_context(|| format!("renaming {} -> {}", tmp_path.display(), path.display()))?;
    Ok(())
}
