use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use tracing::info;

use super::InvertedIndex;
use crate::error::Result;

impl InvertedIndex {
    /// Writes the index, documents included, as pretty JSON.
    pub fn write_index(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;

        info!(path = %path.display(), terms = self.term_count(), "Wrote index");

        Ok(())
    }

    pub fn read_index(path: &Path) -> Result<Self> {
        Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
    }
}
