use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// CSV download (pass-through of the fetched bytes)
// ---------------------------------------------------------------------------

/// Ask the user where to save, proposing `file_name`. `None` if cancelled.
pub fn choose_destination(file_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Télécharger les données")
        .set_file_name(file_name)
        .add_filter("CSV", &["csv"])
        .save_file()
}

/// Write `bytes` to `dest` unchanged.
pub fn save_bytes(bytes: &[u8], dest: &Path) -> Result<()> {
    std::fs::write(dest, bytes).with_context(|| format!("writing {}", dest.display()))?;
    log::info!("Saved {} bytes of CSV to {}", bytes.len(), dest.display());
    Ok(())
}

/// Copy the static resource at `source` to `dest` unchanged.
pub fn save_resource(source: &Path, dest: &Path) -> Result<()> {
    let bytes =
        std::fs::read(source).with_context(|| format!("reading {}", source.display()))?;
    save_bytes(&bytes, dest)
}
