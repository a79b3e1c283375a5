//! Embedded tera templates for the page shell and the preview server's own
//! pages.

use std::collections::HashMap;

use serde::Serialize;
use tera::{Context, Tera, Value};
use thiserror::Error;

use crate::html::escape;
use crate::render::Renderer;
use crate::site::ContentPage;

const TEMPLATES: [(&str, &str); 8] = [
    ("page.html", include_str!("../templates/page.html")),
    ("partials/head.html", include_str!("../templates/partials/head.html")),
    ("partials/header.html", include_str!("../templates/partials/header.html")),
    ("partials/subnav.html", include_str!("../templates/partials/subnav.html")),
    ("partials/footer.html", include_str!("../templates/partials/footer.html")),
    ("preview/pages.html", include_str!("../templates/preview/pages.html")),
    ("preview/not_found.html", include_str!("../templates/preview/not_found.html")),
    ("preview/error.html", include_str!("../templates/preview/error.html")),
];

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),
}

#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        // Text goes through `esc`; palette tokens and links are inserted as authored.
        tera.autoescape_on(vec![]);
        tera.register_filter("esc", escape_filter);

        Ok(Self { tera })
    }

    /// Render a template with an external context
    pub fn render_with_context(
        &self,
        template: &str,
        context: &Context,
    ) -> Result<String, TemplateError> {
        Ok(self.tera.render(template, context)?)
    }
}

#[derive(Serialize)]
struct PageLink<'a> {
    url: String,
    route: &'a str,
}

/// Pages the preview server shows instead of a rendered document.
impl Renderer {
    /// Listing of every discovered page, linked by URL.
    pub fn render_page_index(&self, pages: &[ContentPage]) -> Result<String, TemplateError> {
        let links: Vec<PageLink> = pages
            .iter()
            .map(|page| PageLink {
                url: page.url(),
                route: &page.route,
            })
            .collect();

        let mut context = Context::new();
        context.insert("site", self.site());
        context.insert("pages", &links);
        self.templates().render_with_context("preview/pages.html", &context)
    }

    pub fn render_not_found(&self, route: &str) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("route", route);
        self.templates().render_with_context("preview/not_found.html", &context)
    }

    pub fn render_error(&self, message: &str) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("message", message);
        self.templates().render_with_context("preview/error.html", &context)
    }
}

fn escape_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = match value {
        Value::String(text) => escape(text),
        Value::Null => String::new(),
        other => escape(&other.to_string()),
    };
    Ok(Value::String(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::section::RenderMode;
    use crate::theme::Palette;
    use std::path::PathBuf;

    fn preview() -> Renderer {
        Renderer::new(Palette::default(), SiteConfig::default(), RenderMode::Preview).unwrap()
    }

    #[test]
    fn embedded_templates_parse() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn esc_filter_escapes_four_characters() {
        let mut context = Context::new();
        context.insert("route", "a&b <c> \"d\" 'e'");
        let html = TemplateRenderer::new()
            .unwrap()
            .render_with_context("preview/not_found.html", &context)
            .unwrap();
        assert!(html.contains("a&amp;b &lt;c&gt; &quot;d&quot; 'e'"));
    }

    #[test]
    fn page_index_links_every_route() {
        let renderer = preview();
        let pages = [
            ContentPage {
                route: "index".to_string(),
                path: PathBuf::from("index.json"),
            },
            ContentPage {
                route: "vernazza/faq".to_string(),
                path: PathBuf::from("vernazza/faq.json"),
            },
        ];
        let html = renderer.render_page_index(&pages).unwrap();
        assert!(html.contains("<title>Local Preview - Cinqueterre.travel</title>"));
        assert!(html.contains("Available Pages (2)"));
        assert!(html.contains("<li><a href=\"/\">index</a></li>"));
        assert!(html.contains("<li><a href=\"/vernazza/faq\">vernazza/faq</a></li>"));

        assert!(renderer.render_page_index(&[]).unwrap().contains("Available Pages (0)"));
    }

    #[test]
    fn error_page_escapes_message() {
        let html = preview().render_error("expected `<` at line 1").unwrap();
        assert!(html.contains("<h1>Error rendering page</h1>"));
        assert!(html.contains("<pre>expected `&lt;` at line 1</pre>"));
    }
}
