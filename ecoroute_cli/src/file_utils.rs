use std::path::{Path, PathBuf};

pub fn read_folder(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            files.extend(read_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}

/// The file itself, or every `.json` file below the folder in path order.
pub fn json_inputs(input: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = read_folder(input)?;
    files.retain(|path| path.extension().map(|ext| ext == "json").unwrap_or(false));
    Ok(files)
}
