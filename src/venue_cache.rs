use crate::error::Result;
use log::*;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::Path;

/// Read a venue document saved earlier (or hand-written) from disk.
pub fn load_venue_document(path: &Path) -> Result<String> {
    let mut file = OpenOptions::new().read(true).open(path)?;

    let mut data = String::new();
    file.read_to_string(&mut data)?;

    info!("Loaded venues from {}", path.display());

    Ok(data)
}

pub fn save_venue_document(path: &Path, data: &str) -> Result<()> {
    let mut writer = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    writer.write_all(data.as_bytes())?;

    info!("Saved venue document to {}", path.display());

    Ok(())
}
