use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A page document found under the pages root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPage {
    /// Path relative to the pages root, without `.json`, `/`-separated.
    pub route: String,
    pub path: PathBuf,
}

impl ContentPage {
    /// Where the built HTML for this page lives, relative to the output root.
    pub fn out_path(&self) -> PathBuf {
        output_path(&self.route)
    }

    pub fn url(&self) -> String {
        if self.route == "index" {
            "/".to_string()
        } else {
            format!("/{}", self.route)
        }
    }
}

pub fn output_path(route: &str) -> PathBuf {
    if route == "index" {
        PathBuf::from("index.html")
    } else {
        route
            .split('/')
            .fold(PathBuf::new(), |path, segment| path.join(segment))
            .join("index.html")
    }
}

/// Every `*.json` file under `root`, sorted by path.
///
/// A missing root yields no pages. Unreadable directory entries are skipped
/// with a warning.
pub fn discover_pages<P: AsRef<Path>>(root: P) -> Vec<ContentPage> {
    let root = root.as_ref();
    let mut pages = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping unreadable entry under {}: {}", root.display(), err);
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        if let Some(route) = route_for(root, path) {
            pages.push(ContentPage {
                route,
                path: path.to_path_buf(),
            });
        }
    }

    pages.sort_by(|a, b| a.path.cmp(&b.path));
    pages
}

fn route_for(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let segments: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{}").unwrap();
    }

    #[test]
    fn discovers_nested_json_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "vernazza.json");
        touch(dir.path(), "index.json");
        touch(dir.path(), "manarola/hotels.json");
        touch(dir.path(), "fr/manarola/weather.json");
        touch(dir.path(), "notes.txt");

        let routes: Vec<String> = discover_pages(dir.path())
            .into_iter()
            .map(|page| page.route)
            .collect();
        assert_eq!(
            routes,
            vec!["fr/manarola/weather", "index", "manarola/hotels", "vernazza"]
        );
    }

    #[test]
    fn missing_root_has_no_pages() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_pages(dir.path().join("nope")).is_empty());
    }

    #[test]
    fn output_paths() {
        assert_eq!(output_path("index"), PathBuf::from("index.html"));
        assert_eq!(
            output_path("manarola/hotels"),
            PathBuf::from("manarola").join("hotels").join("index.html")
        );
        assert_eq!(output_path("fr/index"), PathBuf::from("fr/index/index.html"));
    }

    #[test]
    fn page_urls() {
        let page = ContentPage {
            route: "index".into(),
            path: PathBuf::from("index.json"),
        };
        assert_eq!(page.url(), "/");
        let page = ContentPage {
            route: "vernazza/faq".into(),
            path: PathBuf::from("vernazza/faq.json"),
        };
        assert_eq!(page.url(), "/vernazza/faq");
    }
}
