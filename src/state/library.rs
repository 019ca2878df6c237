use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;
use super::data::ImageRecord;

/// Category given to images that sit directly in a scanned root folder
pub const UNCATEGORIZED: &str = "uncategorized";

/// Image extensions picked up when scanning a folder (compared lowercase)
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to scan folder {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// The Library holds the catalog: the full, ordered sequence of image records.
/// It is loaded once, synchronously, and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Library {
    records: Vec<ImageRecord>,
    /// Directory that relative `src` values are resolved against
    base_dir: Option<PathBuf>,
}

impl Library {
    /// Create a library from records already in memory
    pub fn from_records(records: Vec<ImageRecord>) -> Self {
        Library { records, base_dir: None }
    }

    /// Load a catalog from disk.
    ///
    /// A directory is scanned for image files; anything else is read as a
    /// JSON manifest (an array of image records).
    pub fn load(path: &Path) -> Result<Self, LibraryError> {
        if path.is_dir() {
            Self::scan_folder(path)
        } else {
            Self::load_manifest(path)
        }
    }

    /// Read a JSON manifest
    pub fn load_manifest(path: &Path) -> Result<Self, LibraryError> {
        let json = fs::read_to_string(path).map_err(|source| LibraryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<ImageRecord> =
            serde_json::from_str(&json).map_err(|source| LibraryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!("📁 Loaded {} images from manifest {}", records.len(), path.display());

        Ok(Library {
            records,
            base_dir: path.parent().map(Path::to_path_buf),
        })
    }

    /// Build a catalog from a folder tree.
    ///
    /// Each image file becomes a record whose category is the name of its
    /// parent directory and whose description is derived from the file stem.
    pub fn scan_folder(root: &Path) -> Result<Self, LibraryError> {
        tracing::info!("🔍 Scanning folder: {}", root.display());

        let mut records = Vec::new();

        // Walk the directory tree recursively, in a stable order
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                // The root itself must be readable
                Err(err) if err.depth() == 0 => {
                    return Err(LibraryError::Walk {
                        path: root.to_path_buf(),
                        source: err,
                    });
                }
                Err(err) => {
                    tracing::warn!("⚠️  Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !is_image_file(path) {
                continue;
            }

            records.push(record_for_file(root, path));
        }

        tracing::info!("✅ Scan complete: {} images", records.len());

        Ok(Library {
            records,
            base_dir: None,
        })
    }

    /// All records, in catalog order
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for record in &self.records {
            if !categories.contains(&record.category) {
                categories.push(record.category.clone());
            }
        }
        categories
    }

    /// Resolve a record's `src` to a file path for display.
    /// Relative sources are taken relative to the manifest's directory.
    pub fn resolve(&self, src: &str) -> PathBuf {
        let path = Path::new(src);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Check if a path has one of the supported image extensions
fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Derive a record from a scanned file
fn record_for_file(root: &Path, path: &Path) -> ImageRecord {
    let category = path
        .parent()
        .filter(|parent| *parent != root)
        .and_then(|parent| parent.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| UNCATEGORIZED.to_string());

    let description = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().replace(['-', '_'], " "))
        .filter(|stem| !stem.trim().is_empty());

    ImageRecord {
        src: path.to_string_lossy().to_string(),
        category,
        description,
        keywords: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let library = Library::from_records(vec![
            ImageRecord::new("a.jpg", "nature"),
            ImageRecord::new("b.jpg", "city"),
            ImageRecord::new("c.jpg", "nature"),
            ImageRecord::new("d.jpg", "animals"),
        ]);

        assert_eq!(library.categories(), vec!["nature", "city", "animals"]);
        assert_eq!(library.len(), 4);
    }

    #[test]
    fn test_load_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("images.json");
        fs::write(
            &manifest,
            r#"[{"src": "img/a.jpg", "category": "nature", "keywords": ["tree"]},
                {"src": "/abs/b.jpg", "category": "city", "description": "Night skyline"}]"#,
        )
        .unwrap();

        let library = Library::load(&manifest).unwrap();

        assert_eq!(library.len(), 2);
        assert_eq!(library.records()[0].src, "img/a.jpg");
        assert_eq!(library.resolve("img/a.jpg"), dir.path().join("img/a.jpg"));
        assert_eq!(library.resolve("/abs/b.jpg"), PathBuf::from("/abs/b.jpg"));
    }

    #[test]
    fn test_malformed_manifest_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("images.json");
        fs::write(&manifest, r#"[{"src": "a.jpg"}]"#).unwrap();

        let err = Library::load(&manifest).unwrap_err();
        assert!(matches!(err, LibraryError::Parse { .. }));
    }

    #[test]
    fn test_missing_manifest_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = Library::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LibraryError::Io { .. }));
    }

    #[test]
    fn test_scan_folder() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("nature/mountain_lake.JPG"));
        touch(&dir.path().join("nature/notes.txt"));
        touch(&dir.path().join("city/night-skyline.png"));
        touch(&dir.path().join("loose.webp"));

        let library = Library::load(dir.path()).unwrap();
        let records = library.records();

        // Sorted by file name at every level: city/, loose.webp, nature/
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].category, "city");
        assert_eq!(records[0].description.as_deref(), Some("night skyline"));
        assert_eq!(records[1].category, UNCATEGORIZED);
        assert_eq!(records[2].category, "nature");
        assert_eq!(records[2].description.as_deref(), Some("mountain lake"));
        assert!(records.iter().all(|record| record.keywords.is_none()));
    }

    #[test]
    fn test_folder_without_images_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("docs/readme.txt"));

        let library = Library::load(dir.path()).unwrap();

        assert!(library.is_empty());
        assert!(library.categories().is_empty());
        assert!(!Library::from_records(vec![ImageRecord::new("a.jpg", "nature")]).is_empty());
    }
}
