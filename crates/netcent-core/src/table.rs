//! Centrality table output.
//!
//! One comma-separated row per node under a fixed header:
//!
//! ```text
//! Name,Degree,Eigenvector,Betweenness
//! A,0.5,0.4472135954999579,0.0
//! ```
//!
//! Floats are written in shortest round-trip form, so reading a value back
//! yields exactly the computed `f64`.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::artifact;
use crate::error::Result;
use crate::metrics::CentralityRow;

/// Column names, in output order.
pub const TABLE_HEADER: [&str; 4] = ["Name", "Degree", "Eigenvector", "Betweenness"];

/// Write `rows` to `dest`, replacing any existing file.
///
/// The header is written even when `rows` is empty.
///
/// # Errors
///
/// Returns [`crate::NetcentError::Csv`] if serialization fails and
/// [`crate::NetcentError::Io`] if the file cannot be staged or moved into
/// place. On error nothing is left at `dest`.
pub fn write_table(rows: &[CentralityRow], dest: &Path) -> Result<()> {
    let mut staged = artifact::staging_file(dest, ".csv")?;
    write_rows(rows, staged.as_file_mut())?;
    staged.as_file_mut().sync_all()?;
    artifact::commit(staged, dest)?;
    debug!(rows = rows.len(), dest = %dest.display(), "wrote centrality table");
    Ok(())
}

fn write_rows(rows: &[CentralityRow], out: impl Write) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(TABLE_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
