use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::SiteConfig;
use crate::page::{PageDocument, PageError};
use crate::render::Renderer;
use crate::section::RenderMode;
use crate::site::{ContentPage, discover_pages};
use crate::template::TemplateError;
use crate::theme::Palette;

/// Failures that stop a build as a whole. Individual pages never do; see
/// [`BuildReport::failures`].
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Source directory not specified")]
    MissingSourceDir,
    #[error("Source directory {0} does not exist")]
    InvalidPath(PathBuf),
    #[error("Output directory {output} would delete the source directory {source_dir}")]
    OutputContainsSource { output: PathBuf, source_dir: PathBuf },
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("Could not prepare output directory {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single page was not written.
#[derive(Error, Debug)]
pub enum PageFailure {
    #[error(transparent)]
    Read(#[from] PageError),
    #[error(transparent)]
    Render(#[from] TemplateError),
    #[error("Could not write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Default)]
pub struct BuildReport {
    /// Routes written, in build order.
    pub built: Vec<String>,
    pub failures: Vec<(String, PageFailure)>,
    pub copied_cname: bool,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct SiteBuilder {
    source_dir: Option<PathBuf>,
    output_dir: PathBuf,
    palette: Palette,
    site: SiteConfig,
    cname: Option<PathBuf>,
}

impl Default for SiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteBuilder {
    pub fn new() -> Self {
        Self {
            source_dir: None,
            output_dir: PathBuf::from("./dist"),
            palette: Palette::default(),
            site: SiteConfig::default(),
            cname: None,
        }
    }

    // Required configuration
    pub fn source_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_dir = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = path.as_ref().to_path_buf();
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn site_config(mut self, config: SiteConfig) -> Self {
        self.site = config;
        self
    }

    /// Custom-domain marker copied into the output root when it exists.
    pub fn cname<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cname = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn build(self) -> Result<Site, BuildError> {
        let source_dir = self.source_dir.ok_or(BuildError::MissingSourceDir)?;
        if !source_dir.is_dir() {
            return Err(BuildError::InvalidPath(source_dir));
        }
        check_output_dir(&self.output_dir, &source_dir)?;

        let pages = discover_pages(&source_dir);
        log::info!("Found {} pages in {}", pages.len(), source_dir.display());

        Ok(Site {
            pages,
            renderer: Renderer::new(self.palette, self.site, RenderMode::Build)?,
            output_dir: self.output_dir,
            cname: self.cname,
        })
    }
}

// The output directory is wiped before every build, so it must not be the
// source directory or one of its ancestors. An output directory that doesn't
// exist yet can't contain anything.
fn check_output_dir(output: &Path, source: &Path) -> Result<(), BuildError> {
    if !output.exists() {
        return Ok(());
    }
    let canonical = |path: &Path| {
        path.canonicalize().map_err(|source| BuildError::Output {
            path: path.display().to_string(),
            source,
        })
    };
    let (output_abs, source_abs) = (canonical(output)?, canonical(source)?);
    if source_abs.starts_with(&output_abs) {
        return Err(BuildError::OutputContainsSource {
            output: output.to_path_buf(),
            source_dir: source.to_path_buf(),
        });
    }
    Ok(())
}

pub struct Site {
    pages: Vec<ContentPage>,
    renderer: Renderer,
    output_dir: PathBuf,
    cname: Option<PathBuf>,
}

impl Site {
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write every page. Stale output is removed first; a page that fails is
    /// logged and recorded and the rest are still written.
    pub fn render_all(&self) -> Result<BuildReport, BuildError> {
        self.reset_output_dir()?;

        let mut report = BuildReport::default();
        for page in &self.pages {
            match self.render_page(page) {
                Ok(()) => {
                    log::debug!("Built {}", page.route);
                    report.built.push(page.route.clone());
                }
                Err(err) => {
                    log::error!("Error building {}: {}", page.route, err);
                    report.failures.push((page.route.clone(), err));
                }
            }
        }

        report.copied_cname = self.copy_cname();
        Ok(report)
    }

    fn reset_output_dir(&self) -> Result<(), BuildError> {
        let output_error = |source| BuildError::Output {
            path: self.output_dir.display().to_string(),
            source,
        };
        if self.output_dir.exists() {
            std::fs::remove_dir_all(&self.output_dir).map_err(output_error)?;
        }
        std::fs::create_dir_all(&self.output_dir).map_err(output_error)
    }

    fn render_page(&self, page: &ContentPage) -> Result<(), PageFailure> {
        let document = PageDocument::load(&page.path)?;
        let html = self.renderer.render_page(&document, &page.route)?;

        let output_path = self.output_dir.join(page.out_path());
        let write_error = |source| PageFailure::Write {
            path: output_path.display().to_string(),
            source,
        };
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(&output_path, html).map_err(write_error)
    }

    fn copy_cname(&self) -> bool {
        let Some(cname) = self.cname.as_ref().filter(|path| path.is_file()) else {
            return false;
        };
        match std::fs::copy(cname, self.output_dir.join("CNAME")) {
            Ok(_) => {
                log::info!("Copied {}", cname.display());
                true
            }
            Err(err) => {
                log::warn!("Could not copy {}: {}", cname.display(), err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn builds_index_and_nested_routes() {
        let content = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let dist = out.path().join("dist");
        write(content.path(), "index.json", r#"{"title": "Home"}"#);
        write(
            content.path(),
            "manarola/hotels.json",
            r#"{"title": "Hotels", "body": [{"type": "hero-section", "title": "Stay"}]}"#,
        );

        let site = SiteBuilder::new()
            .source_dir(content.path())
            .output_dir(&dist)
            .build()
            .unwrap();
        let report = site.render_all().unwrap();

        assert!(report.is_clean());
        assert_eq!(report.built, vec!["index", "manarola/hotels"]);
        assert!(dist.join("index.html").is_file());
        let hotels = fs::read_to_string(dist.join("manarola/hotels/index.html")).unwrap();
        assert!(hotels.contains(">Stay</h1>"));
    }

    #[test]
    fn malformed_page_does_not_stop_the_build() {
        let content = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write(content.path(), "a.json", "{ broken");
        write(content.path(), "b.json", r#"{"title": "B"}"#);

        let site = SiteBuilder::new()
            .source_dir(content.path())
            .output_dir(out.path())
            .build()
            .unwrap();
        let report = site.render_all().unwrap();

        assert_eq!(report.built, vec!["b"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, "a");
        assert!(!out.path().join("a/index.html").exists());
        assert!(out.path().join("b/index.html").is_file());
    }

    #[test]
    fn stale_output_is_removed_and_cname_copied() {
        let content = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write(content.path(), "index.json", "{}");
        write(out.path(), "old/index.html", "stale");
        let cname_dir = tempfile::tempdir().unwrap();
        write(cname_dir.path(), "CNAME", "cinqueterre.travel\n");

        let report = SiteBuilder::new()
            .source_dir(content.path())
            .output_dir(out.path())
            .cname(cname_dir.path().join("CNAME"))
            .build()
            .unwrap()
            .render_all()
            .unwrap();

        assert!(report.copied_cname);
        assert!(!out.path().join("old").exists());
        assert_eq!(
            fs::read_to_string(out.path().join("CNAME")).unwrap(),
            "cinqueterre.travel\n"
        );
    }

    #[test]
    fn missing_cname_is_fine() {
        let content = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let report = SiteBuilder::new()
            .source_dir(content.path())
            .output_dir(out.path())
            .cname(content.path().join("CNAME"))
            .build()
            .unwrap()
            .render_all()
            .unwrap();
        assert!(!report.copied_cname);
        assert!(report.built.is_empty());
    }

    #[test]
    fn source_dir_is_required_and_must_exist() {
        assert!(matches!(
            SiteBuilder::new().build(),
            Err(BuildError::MissingSourceDir)
        ));
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SiteBuilder::new().source_dir(dir.path().join("nope")).build(),
            Err(BuildError::InvalidPath(_))
        ));
    }

    #[test]
    fn output_may_not_contain_the_source() {
        let root = tempfile::tempdir().unwrap();
        let pages = root.path().join("content/pages");
        write(&pages, "index.json", r#"{"title": "Home"}"#);
        write(root.path(), "notes.txt", "keep me");

        for output in [root.path().to_path_buf(), root.path().join("content"), pages.clone()] {
            let result = SiteBuilder::new()
                .source_dir(&pages)
                .output_dir(&output)
                .build();
            assert!(
                matches!(result, Err(BuildError::OutputContainsSource { .. })),
                "{}",
                output.display()
            );
        }

        assert!(pages.join("index.json").is_file());
        assert!(root.path().join("notes.txt").is_file());
    }

    #[test]
    fn output_next_to_the_source_is_fine() {
        let root = tempfile::tempdir().unwrap();
        let pages = root.path().join("content/pages");
        write(&pages, "index.json", "{}");
        fs::create_dir_all(root.path().join("dist")).unwrap();

        let report = SiteBuilder::new()
            .source_dir(&pages)
            .output_dir(root.path().join("dist"))
            .build()
            .unwrap()
            .render_all()
            .unwrap();
        assert_eq!(report.built, vec!["index"]);
        assert!(pages.join("index.json").is_file());
    }
}
