pub mod loaders;

use std::path::Path;

use glossa_core::dictionary::{Dictionary, DictionaryLoader, LoadError};

pub use loaders::json::JsonLoader;

/// Load the base dictionary and merge any additional ones into it.
///
/// The first path is required; additional paths that fail to load are
/// logged and skipped. Later files override earlier definitions.
pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Dictionary, LoadError> {
    let loader = JsonLoader;

    let Some((base, additional)) = paths.split_first() else {
        tracing::warn!("No dictionary paths configured, starting with empty dictionary");
        return Ok(Dictionary::new());
    };

    let mut dict = load_one(&loader, base.as_ref())?;

    for path in additional {
        let path = path.as_ref();
        match load_one(&loader, path) {
            Ok(extra) => {
                tracing::info!("Merging additional dictionary from: {}", path.display());
                dict = dict.merge(extra);
            }
            Err(e) => {
                tracing::warn!("Failed to load dictionary from {}: {}", path.display(), e);
            }
        }
    }

    Ok(dict)
}

fn load_one(loader: &impl DictionaryLoader, path: &Path) -> Result<Dictionary, LoadError> {
    if !loader.supports(path) {
        tracing::warn!(
            "{} does not have a supported extension ({}), trying anyway",
            path.display(),
            loader.supported_formats().join(", ")
        );
    }
    loader.load_from_file(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_json(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_all_merges_in_order() {
        let base = write_json(r#"{ "cat": "feline", "dog": "canine" }"#);
        let extra = write_json(r#"{ "Cat": "a small feline", "owl": "a bird" }"#);

        let dict = load_all(&[base.path(), extra.path()]).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get("cat"), Some("a small feline"));
        assert_eq!(dict.get("owl"), Some("a bird"));
    }

    #[test]
    fn test_missing_base_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("dictionary.json");
        assert!(matches!(
            load_all(&[missing]),
            Err(LoadError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_bad_additional_is_skipped() {
        let base = write_json(r#"{ "cat": "feline" }"#);
        let broken = write_json("{ not json");

        let dict = load_all(&[base.path(), broken.path()]).unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_no_paths_gives_empty_dictionary() {
        let paths: [&Path; 0] = [];
        assert!(load_all(&paths).unwrap().is_empty());
    }
}
