//! Loading and saving the CSL-JSON data file.

use std::fs;
use std::path::Path;

use crate::error::CoreError;
use crate::reference::Bibliography;

/// Load a bibliography from a CSL-JSON data file.
///
/// The path is checked explicitly so a missing file is reported as
/// [`CoreError::MissingFile`] rather than a bare IO error.
pub fn load_bibliography(path: &Path) -> Result<Bibliography, CoreError> {
    if !path.exists() {
        return Err(CoreError::MissingFile(path.display().to_string()));
    }
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes).map_err(|e| CoreError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Write a bibliography as pretty-printed CSL-JSON.
///
/// serde_json leaves non-ASCII characters unescaped, so accented names and
/// CJK titles round-trip literally.
pub fn save_bibliography(path: &Path, bibliography: &Bibliography) -> Result<(), CoreError> {
    let mut json = serde_json::to_string_pretty(bibliography)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Reference;

    #[test]
    fn missing_file_is_reported_distinctly() {
        let result = load_bibliography(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(CoreError::MissingFile(_))));
    }

    #[test]
    fn non_ascii_survives_serialization() {
        let bibliography = vec![Reference {
            id: "munoz2021".to_string(),
            ref_type: "article-journal".to_string(),
            title: Some("Análisis de señales — 信号分析".to_string()),
            ..Default::default()
        }];
        let json = serde_json::to_string_pretty(&bibliography).unwrap();
        assert!(json.contains("Análisis de señales — 信号分析"));
        assert!(!json.contains("\\u"));
    }
}
