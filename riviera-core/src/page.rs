use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tera::Context;
use thiserror::Error;

use crate::layout;
use crate::localized::{Localized, lenient, lenient_vec};
use crate::render::Renderer;
use crate::section::RenderMode;
use crate::template::TemplateError;
use crate::villages::village_from_route;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} is not a JSON object")]
    NotAnObject { path: String },
}

/// One page of content as stored in `content/pages/**.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageDocument {
    pub title: Localized,
    #[serde(deserialize_with = "lenient")]
    pub seo: Seo,
    /// Raw sections, rendered in order.
    #[serde(deserialize_with = "lenient_vec")]
    pub body: Vec<Value>,
    #[serde(deserialize_with = "lenient")]
    pub metadata: Metadata,
    #[serde(deserialize_with = "lenient")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Seo {
    pub title: Localized,
    pub description: Localized,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub page_type: Option<String>,
}

impl PageDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PageError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&data, path)
    }

    /// Parse a document's text; `path` is only used in error messages.
    pub fn parse(data: &str, path: &Path) -> Result<Self, PageError> {
        let value: Value = serde_json::from_str(data).map_err(|source| PageError::Json {
            path: path.display().to_string(),
            source,
        })?;
        if !value.is_object() {
            return Err(PageError::NotAnObject {
                path: path.display().to_string(),
            });
        }
        serde_json::from_value(value).map_err(|source| PageError::Json {
            path: path.display().to_string(),
            source,
        })
    }
}

impl Renderer {
    /// Render a complete HTML document for `route` (e.g. `manarola/hotels`).
    pub fn render_page(
        &self,
        document: &PageDocument,
        route: &str,
    ) -> Result<String, TemplateError> {
        let site = self.site();
        let locale = self.locale();

        let title = [&document.seo.title, &document.title]
            .into_iter()
            .map(|value| value.resolve(locale))
            .find(|text| !text.is_empty())
            .unwrap_or_else(|| site.title.clone());
        let main = document
            .body
            .iter()
            .map(|section| self.render_section(section))
            .collect::<Vec<_>>()
            .join("\n");

        let mut context = Context::new();
        context.insert("lang", locale);
        context.insert("title", &title);
        context.insert("description", &document.seo.description.resolve(locale));
        context.insert("canonical", &site.canonical_url(route));
        context.insert("fonts_url", &layout::google_fonts_url(self.palette()));
        context.insert("palette", self.palette());
        context.insert("site", site);
        context.insert("route", route);
        context.insert("preview", &(self.mode() == RenderMode::Preview));
        context.insert("nav", &layout::primary_nav(village_from_route(route)));
        context.insert("subnav", &layout::subnav(route));
        context.insert("footer_columns", &layout::footer_columns());
        context.insert("main", &main);

        self.templates().render_with_context("page.html", &context)
    }
}
