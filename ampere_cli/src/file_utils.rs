use std::path::{Path, PathBuf};

const SCHEMATIC_EXTENSION: &str = "xml";

/// Every schematic file below `folder_path`, sorted.
pub fn read_schematic_folder(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            if path
                .extension()
                .map(|ext| ext == SCHEMATIC_EXTENSION)
                .unwrap_or(false)
            {
                files.push(path);
            }
        } else if path.is_dir() {
            files.extend(read_schematic_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}
