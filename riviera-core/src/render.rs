//! Section renderers.
//!
//! One function per section kind, each turning a parsed section into a
//! self-contained HTML fragment styled from the [`Palette`]. Text fields are
//! resolved for the renderer's locale and escaped; URLs, images and icons are
//! inserted as authored.

use serde_json::Value;

use crate::config::SiteConfig;
use crate::html::escape;
use crate::localized::Localized;
use crate::rich_text::render_items;
use crate::section::{
    Button, ButtonVariant, CollectionEmbed, ContentSection, CtaSection, FaqSection,
    FeatureSection, HeroSection, RenderMode, Section, StatsSection, TestimonialSection,
};
use crate::template::{TemplateError, TemplateRenderer};
use crate::theme::Palette;

const DEBUG_DUMP_LIMIT: usize = 500;

const MAP_STUB: &str = "<section class=\"map-section\" style=\"padding:4rem 1.5rem;text-align:center\"><div style=\"max-width:72rem;margin:0 auto\"><p class=\"placeholder\">[Interactive Map]</p></div></section>";

/// Immutable rendering context shared by every page of a build or a server.
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Palette,
    site: SiteConfig,
    mode: RenderMode,
    templates: TemplateRenderer,
}

impl Renderer {
    pub fn new(
        palette: Palette,
        site: SiteConfig,
        mode: RenderMode,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            palette,
            site,
            mode,
            templates: TemplateRenderer::new()?,
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn locale(&self) -> &str {
        &self.site.locale
    }

    pub(crate) fn templates(&self) -> &TemplateRenderer {
        &self.templates
    }

    /// Parse and render one raw section from a page body.
    pub fn render_section(&self, value: &Value) -> String {
        self.render_parsed(&Section::parse(value, self.mode))
    }

    pub fn render_parsed(&self, section: &Section) -> String {
        match section {
            Section::Hero(hero) => self.hero(hero),
            Section::Stats(stats) => self.stats(stats),
            Section::Feature(features) => self.features(features),
            Section::Content(content) => self.content(content),
            Section::Faq(faq) => self.faq(faq),
            Section::Cta(cta) => self.cta(cta),
            Section::CollectionEmbed(embed) => self.collection(embed),
            Section::Testimonial(testimonial) => self.testimonial(testimonial),
            // The page shell already carries a footer.
            Section::Footer => String::new(),
            Section::Map => MAP_STUB.to_string(),
            Section::Unknown { type_name, raw } => self.placeholder(type_name, raw),
        }
    }

    fn text(&self, value: &Localized) -> String {
        value.resolve(self.locale())
    }

    /// Preview pages show a stand-in for empty required text so gaps are
    /// visible while editing.
    fn or_placeholder(&self, text: String, placeholder: &str) -> String {
        if text.is_empty() && self.mode == RenderMode::Preview {
            placeholder.to_string()
        } else {
            text
        }
    }

    fn buttons(&self, buttons: &[Button], on_gradient: bool) -> String {
        let p = &self.palette;
        buttons
            .iter()
            .map(|button| {
                let url = self.text(&button.url);
                let url = if url.is_empty() { "#".to_string() } else { url };
                let label = self.or_placeholder(escape(&self.text(&button.text)), "Button");
                let colors = match (button.variant, on_gradient) {
                    (ButtonVariant::Secondary, false) => format!(
                        "background:transparent;color:{};border:2px solid {}",
                        p.white, p.white
                    ),
                    (ButtonVariant::Secondary, true) => {
                        format!("background:transparent;border:2px solid {}", p.white)
                    }
                    (ButtonVariant::Primary, false) => {
                        format!("background:{};color:{}", p.brand, p.white)
                    }
                    (ButtonVariant::Primary, true) => {
                        format!("background:{};color:{}", p.white, p.brand)
                    }
                };
                format!(
                    "<a href=\"{url}\" class=\"btn {variant}\" style=\"display:inline-block;{colors};padding:0.75rem 2rem;border-radius:0.25rem;text-decoration:none;font-weight:600;transition:all 0.2s\">{label}</a>",
                    variant = match button.variant {
                        ButtonVariant::Primary => "primary",
                        ButtonVariant::Secondary => "secondary",
                    },
                )
            })
            .collect()
    }

    fn heading(&self, title: &str, margin_bottom: &str) -> String {
        if title.is_empty() {
            return String::new();
        }
        format!(
            "<h2 style=\"font-size:2rem;font-weight:600;color:{};margin-bottom:{};text-align:center;font-family:{}\">{}</h2>",
            self.palette.navy,
            margin_bottom,
            self.palette.font_serif,
            escape(title)
        )
    }

    fn eyebrow(&self, eyebrow: &str) -> String {
        if eyebrow.is_empty() {
            return String::new();
        }
        format!(
            "<p class=\"eyebrow\" style=\"color:{};font-weight:500;margin-bottom:0.5rem;text-transform:uppercase;letter-spacing:0.1em;font-size:0.875rem;text-align:center\">{}</p>",
            self.palette.brand,
            escape(eyebrow)
        )
    }

    fn hero(&self, hero: &HeroSection) -> String {
        let p = &self.palette;
        let eyebrow = self.text(&hero.eyebrow);
        let title = self.or_placeholder(escape(&self.text(&hero.title)), "Hero Title");
        let subtitle = self.text(&hero.subtitle);
        let image = match self.text(&hero.image) {
            image if image.is_empty() => self.text(&hero.background_image),
            image => image,
        };

        let mut html = format!(
            "\n<section class=\"hero-section\" style=\"position:relative;padding:6rem 1.5rem;background:{};overflow:hidden;min-height:60vh;display:flex;align-items:center\">",
            p.navy
        );
        if !image.is_empty() {
            html.push_str(&format!(
                "<div style=\"position:absolute;inset:0;background-image:url('{image}');background-size:cover;background-position:center;opacity:0.5\"></div>"
            ));
        }
        html.push_str(&format!(
            "<div style=\"position:absolute;inset:0;background:{}\"></div>",
            p.hero_gradient
        ));
        html.push_str("<div style=\"position:relative;max-width:56rem;margin:0 auto;text-align:center;width:100%\">");
        if !eyebrow.is_empty() {
            html.push_str(&format!(
                "<p style=\"color:{};font-weight:500;margin-bottom:1rem;text-transform:uppercase;letter-spacing:0.1em;font-size:0.875rem\">{}</p>",
                p.brand,
                escape(&eyebrow)
            ));
        }
        html.push_str(&format!(
            "<h1 style=\"font-size:3rem;font-weight:600;color:{};margin-bottom:1.5rem;line-height:1.2;font-family:{}\">{}</h1>",
            p.white, p.font_serif, title
        ));
        if !subtitle.is_empty() {
            html.push_str(&format!(
                "<p style=\"font-size:1.25rem;color:rgba(255,255,255,0.85);margin-bottom:2rem;max-width:42rem;margin-left:auto;margin-right:auto;line-height:1.75\">{}</p>",
                escape(&subtitle)
            ));
        }
        html.push_str(&format!(
            "<div style=\"display:flex;flex-wrap:wrap;justify-content:center;gap:1rem\">{}</div>",
            self.buttons(&hero.buttons, false)
        ));
        html.push_str("</div></section>");
        html
    }

    fn stats(&self, stats: &StatsSection) -> String {
        let p = &self.palette;
        let cells: String = stats
            .stats
            .iter()
            .map(|stat| {
                let locale = self.locale();
                let value = match stat.number.display(locale) {
                    number if number.is_empty() => stat.value.display(locale),
                    number => number,
                };
                let description = self.text(&stat.description);
                let description = if description.is_empty() {
                    String::new()
                } else {
                    format!(
                        "<div style=\"color:{};font-size:0.875rem;margin-top:0.25rem\">{}</div>",
                        p.gray,
                        escape(&description)
                    )
                };
                format!(
                    "<div class=\"stat\" style=\"text-align:center\"><div style=\"font-size:2.5rem;font-weight:600;color:{};margin-bottom:0.5rem;font-family:{}\">{}</div><div style=\"color:{};font-weight:500\">{}</div>{}</div>",
                    p.brand,
                    p.font_serif,
                    escape(&value),
                    p.navy,
                    escape(&self.text(&stat.label)),
                    description
                )
            })
            .collect();

        format!(
            "\n<section class=\"stats-section\" style=\"padding:4rem 1.5rem;background:{}\"><div style=\"max-width:72rem;margin:0 auto\">{}{}<div style=\"display:grid;grid-template-columns:repeat(4,1fr);gap:2rem\">{}</div></div></section>",
            p.cream,
            self.eyebrow(&self.text(&stats.eyebrow)),
            self.heading(&self.text(&stats.title), "3rem"),
            cells
        )
    }

    fn features(&self, section: &FeatureSection) -> String {
        let p = &self.palette;
        let subtitle = self.text(&section.subtitle);
        let subtitle = if subtitle.is_empty() {
            String::new()
        } else {
            format!(
                "<p style=\"color:{};text-align:center;margin-bottom:3rem;max-width:42rem;margin-left:auto;margin-right:auto\">{}</p>",
                p.gray,
                escape(&subtitle)
            )
        };
        let cards: String = section
            .features
            .iter()
            .map(|feature| {
                let icon = self.text(&feature.icon);
                let icon = if icon.is_empty() {
                    String::new()
                } else {
                    format!(
                        "<div style=\"font-size:2rem;margin-bottom:1rem;color:{}\">{}</div>",
                        p.brand, icon
                    )
                };
                format!(
                    "<div class=\"feature-card\" style=\"background:{};padding:1.5rem;border-radius:0.5rem;border:1px solid {}\">{}<h3 style=\"font-size:1.125rem;font-weight:600;color:{};margin-bottom:0.5rem\">{}</h3><p style=\"color:{};font-size:0.9375rem;line-height:1.6\">{}</p></div>",
                    p.cream,
                    p.border,
                    icon,
                    p.navy,
                    escape(&self.text(&feature.title)),
                    p.gray,
                    escape(&self.text(&feature.description))
                )
            })
            .collect();

        format!(
            "\n<section class=\"feature-section\" style=\"padding:4rem 1.5rem;background:{}\"><div style=\"max-width:72rem;margin:0 auto\">{}{}{}<div style=\"display:grid;grid-template-columns:repeat(3,1fr);gap:2rem\">{}</div></div></section>",
            p.background,
            self.eyebrow(&self.text(&section.eyebrow)),
            self.heading(&self.text(&section.title), "1rem"),
            subtitle,
            cards
        )
    }

    fn content(&self, section: &ContentSection) -> String {
        let p = &self.palette;
        let title = match self.text(&section.title) {
            title if title.is_empty() => self.text(&section.headline),
            title => title,
        };
        let subtitle = match self.text(&section.subtitle) {
            subtitle if subtitle.is_empty() => self.text(&section.eyebrow),
            subtitle => subtitle,
        };
        let image = self.text(&section.image);
        let body = render_items(&section.content, p, self.locale());

        let mut html = format!(
            "\n<section class=\"content-section\" style=\"padding:4rem 1.5rem;background:{}\"><div style=\"max-width:72rem;margin:0 auto;display:grid;grid-template-columns:{};gap:3rem;align-items:center\"><div>",
            p.cream,
            if image.is_empty() { "1fr" } else { "1fr 1fr" }
        );
        if !title.is_empty() {
            html.push_str(&format!(
                "<h2 style=\"font-size:2rem;font-weight:600;color:{};margin-bottom:1rem;font-family:{}\">{}</h2>",
                p.navy,
                p.font_serif,
                escape(&title)
            ));
        }
        if !subtitle.is_empty() {
            html.push_str(&format!(
                "<p style=\"color:{};margin-bottom:1rem\">{}</p>",
                p.brand,
                escape(&subtitle)
            ));
        }
        html.push_str(&format!(
            "<div class=\"prose\" style=\"color:{};line-height:1.75\">{}</div></div>",
            p.gray, body
        ));
        if !image.is_empty() {
            html.push_str(&format!(
                "<div><img src=\"{image}\" alt=\"\" style=\"border-radius:0.5rem;width:100%;aspect-ratio:4/3;object-fit:cover;box-shadow:0 4px 6px -1px rgba(0,0,0,0.1)\" /></div>"
            ));
        }
        html.push_str("</div></section>");
        html
    }

    fn faq(&self, section: &FaqSection) -> String {
        let p = &self.palette;
        let entries: String = section
            .entries()
            .iter()
            .map(|entry| {
                let question = escape(&entry.question(self.locale()));
                let answer = escape(&entry.answer(self.locale()));
                match self.mode {
                    RenderMode::Build => format!(
                        "<div class=\"faq-item\" style=\"background:{};padding:1.5rem;border-radius:0.5rem;border:1px solid {}\"><h3 style=\"font-size:1rem;font-weight:600;color:{};margin-bottom:0.75rem\">{}</h3><p style=\"color:{};line-height:1.6\">{}</p></div>",
                        p.cream, p.border, p.navy, question, p.gray, answer
                    ),
                    RenderMode::Preview => format!(
                        "<details class=\"faq-item\" style=\"background:{};border-radius:0.5rem;border:1px solid {}\"><summary style=\"padding:1rem 1.5rem;cursor:pointer;font-weight:500;color:{}\">{}</summary><div class=\"faq-answer\" style=\"padding:0 1.5rem 1rem;color:{}\">{}</div></details>",
                        p.cream, p.border, p.navy, question, p.gray, answer
                    ),
                }
            })
            .collect();

        format!(
            "\n<section class=\"faq-section\" style=\"padding:4rem 1.5rem;background:{}\"><div style=\"max-width:48rem;margin:0 auto\">{}<div style=\"display:flex;flex-direction:column;gap:1.5rem\">{}</div></div></section>",
            p.background,
            self.heading(&self.text(&section.title), "3rem"),
            entries
        )
    }

    fn cta(&self, section: &CtaSection) -> String {
        let p = &self.palette;
        let eyebrow = self.text(&section.eyebrow);
        let title = self.or_placeholder(escape(&self.text(&section.title)), "Call to Action");
        let subtitle = self.text(&section.subtitle);

        let mut html = format!(
            "\n<section class=\"cta-section\" style=\"padding:4rem 1.5rem;background:linear-gradient(135deg,{} 0%,{} 100%);color:{}\"><div style=\"max-width:48rem;margin:0 auto;text-align:center\">",
            p.brand, p.brand_hover, p.white
        );
        if !eyebrow.is_empty() {
            html.push_str(&format!(
                "<p style=\"font-weight:500;margin-bottom:0.5rem;text-transform:uppercase;letter-spacing:0.1em;font-size:0.875rem;opacity:0.9\">{}</p>",
                escape(&eyebrow)
            ));
        }
        html.push_str(&format!(
            "<h2 style=\"font-size:2rem;font-weight:600;margin-bottom:1rem;font-family:{}\">{}</h2>",
            p.font_serif, title
        ));
        if !subtitle.is_empty() {
            html.push_str(&format!(
                "<p style=\"font-size:1.125rem;margin-bottom:2rem;opacity:0.9\">{}</p>",
                escape(&subtitle)
            ));
        }
        html.push_str(&format!(
            "<div style=\"display:flex;flex-wrap:wrap;justify-content:center;gap:1rem\">{}</div></div></section>",
            self.buttons(&section.buttons, true)
        ));
        html
    }

    fn collection(&self, embed: &CollectionEmbed) -> String {
        let p = &self.palette;

        if embed.items.is_empty() {
            return format!(
                "\n<section class=\"collection-section\" style=\"padding:4rem 1.5rem;background:{}\"><div style=\"max-width:72rem;margin:0 auto;text-align:center\"><p style=\"color:{}\">Collection items will be displayed here.</p></div></section>",
                p.cream, p.gray
            );
        }

        let cards: String = embed
            .items
            .iter()
            .take(CollectionEmbed::MAX_ITEMS)
            .map(|item| {
                let url = match self.text(&item.url) {
                    url if url.is_empty() => "#".to_string(),
                    url => url,
                };
                let image = self.text(&item.image);
                let cover = if image.is_empty() {
                    format!("<div style=\"aspect-ratio:16/9;background:{}\"></div>", p.cream)
                } else {
                    format!(
                        "<div style=\"aspect-ratio:16/9;background-image:url('{image}');background-size:cover;background-position:center\"></div>"
                    )
                };
                let summary = self.text(&item.summary);
                let summary = if summary.is_empty() {
                    String::new()
                } else {
                    format!(
                        "<p style=\"color:{};font-size:0.875rem;line-height:1.5;display:-webkit-box;-webkit-line-clamp:2;-webkit-box-orient:vertical;overflow:hidden\">{}</p>",
                        p.gray,
                        escape(&summary)
                    )
                };
                let village = self.text(&item.village);
                let village = if village.is_empty() {
                    String::new()
                } else {
                    format!(
                        "<p style=\"color:{};font-size:0.75rem;text-transform:uppercase;letter-spacing:0.05em;margin-top:0.5rem\">{}</p>",
                        p.brand,
                        escape(&village)
                    )
                };
                format!(
                    "<a href=\"{url}\" class=\"collection-card\" style=\"display:block;background:{};border-radius:0.5rem;overflow:hidden;border:1px solid {};text-decoration:none;transition:border-color 0.2s;box-shadow:0 1px 3px rgba(0,0,0,0.1)\">{cover}<div style=\"padding:1rem\"><h3 style=\"font-size:1rem;font-weight:600;color:{};margin-bottom:0.5rem\">{}</h3>{summary}{village}</div></a>",
                    p.background,
                    p.border,
                    p.navy,
                    escape(&self.text(&item.title)),
                )
            })
            .collect();

        let view_all = if embed.show_view_all {
            let url = match self.text(&embed.view_all_url) {
                url if url.is_empty() => "#".to_string(),
                url => url,
            };
            format!(
                "<div style=\"text-align:center;margin-top:2rem\"><a href=\"{url}\" style=\"color:{};text-decoration:none;font-weight:500\">View All →</a></div>",
                p.brand
            )
        } else {
            String::new()
        };

        format!(
            "\n<section class=\"collection-section\" style=\"padding:4rem 1.5rem;background:{}\"><div style=\"max-width:72rem;margin:0 auto\">{}<div style=\"display:grid;grid-template-columns:repeat({},1fr);gap:1.5rem\">{}</div>{}</div></section>",
            p.cream,
            self.heading(&self.text(&embed.heading), "3rem"),
            embed.display.columns.max(1),
            cards,
            view_all
        )
    }

    fn testimonial(&self, section: &TestimonialSection) -> String {
        let p = &self.palette;
        let quote = self.or_placeholder(escape(&self.text(&section.quote)), "Quote text");
        let author = self.or_placeholder(escape(&self.text(&section.author)), "Author");
        let role = self.text(&section.role);
        let role = if role.is_empty() {
            String::new()
        } else {
            format!("<div class=\"role\" style=\"opacity:0.8\">{}</div>", escape(&role))
        };

        format!(
            "\n<section class=\"testimonial-section\" style=\"padding:4rem 1.5rem;background:{};color:{};text-align:center\"><div style=\"max-width:48rem;margin:0 auto\"><svg class=\"quote-icon\" viewBox=\"0 0 24 24\" fill=\"currentColor\" style=\"width:3rem;height:3rem;margin-bottom:1.5rem;opacity:0.5\"><path d=\"M14.017 21v-7.391c0-5.704 3.731-9.57 8.983-10.609l.995 2.151c-2.432.917-3.995 3.638-3.995 5.849h4v10h-9.983zm-14.017 0v-7.391c0-5.704 3.748-9.57 9-10.609l.996 2.151c-2.433.917-3.996 3.638-3.996 5.849h3.983v10h-9.983z\"/></svg><blockquote style=\"font-size:1.5rem;font-style:italic;margin-bottom:2rem;font-family:{}\">{}</blockquote><div class=\"author\" style=\"font-weight:600\">{}</div>{}</div></section>",
            p.brand, p.white, p.font_serif, quote, author, role
        )
    }

    fn placeholder(&self, type_name: &str, raw: &Value) -> String {
        let p = &self.palette;
        let dump = match self.mode {
            RenderMode::Build => String::new(),
            RenderMode::Preview => {
                let pretty = serde_json::to_string_pretty(raw).unwrap_or_default();
                let truncated: String = pretty.chars().take(DEBUG_DUMP_LIMIT).collect();
                format!(
                    "<pre style=\"font-size:0.75rem;background:{};padding:1rem;border-radius:0.5rem;overflow:auto;margin-top:0.5rem\">{}...</pre>",
                    p.white,
                    escape(&truncated)
                )
            }
        };

        format!(
            "\n<section class=\"placeholder-section\" style=\"padding:2rem 1.5rem;background:{};border-left:4px solid {}\"><div style=\"max-width:72rem;margin:0 auto\"><div style=\"font-size:0.875rem;font-family:monospace;color:{}\">[{}]</div>{}</div></section>",
            p.cream,
            p.brand,
            p.gray,
            escape(type_name),
            dump
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build() -> Renderer {
        Renderer::new(Palette::default(), SiteConfig::default(), RenderMode::Build).unwrap()
    }

    fn preview() -> Renderer {
        Renderer::new(Palette::default(), SiteConfig::default(), RenderMode::Preview).unwrap()
    }

    #[test]
    fn hero_with_secondary_button() {
        let html = build().render_section(&json!({
            "type": "hero-section",
            "title": "Welcome",
            "buttons": [{"text": "Go", "url": "/x", "variant": "secondary"}]
        }));
        assert!(html.contains("class=\"hero-section\""));
        assert!(html.contains(">Welcome</h1>"));
        assert!(html.contains("<a href=\"/x\" class=\"btn secondary\""));
        assert!(html.contains("background:transparent"));
        assert!(html.contains(">Go</a>"));
    }

    #[test]
    fn hero_escapes_text_and_keeps_image_url() {
        let html = build().render_section(&json!({
            "type": "split-hero",
            "title": "Fish & <Chips>",
            "image": "https://img.example/a.jpg?w=1&h=2"
        }));
        assert!(html.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(html.contains("url('https://img.example/a.jpg?w=1&h=2')"));
    }

    #[test]
    fn hero_button_without_url_links_to_hash() {
        let html = build().render_section(&json!({
            "type": "hero", "buttons": [{"text": "Soon"}]
        }));
        assert!(html.contains("<a href=\"#\" class=\"btn primary\""));
    }

    #[test]
    fn preview_fills_empty_hero_title() {
        let html = preview().render_section(&json!({"type": "hero", "buttons": [{}]}));
        assert!(html.contains(">Hero Title</h1>"));
        assert!(html.contains(">Button</a>"));

        let html = build().render_section(&json!({"type": "hero"}));
        assert!(!html.contains("Hero Title"));
    }

    #[test]
    fn faq_renders_one_entry_per_question() {
        let html = build().render_section(&json!({
            "type": "faq-section",
            "faqs": [{"question": "Q1", "answer": "A1"}]
        }));
        assert_eq!(html.matches("class=\"faq-item\"").count(), 1);
        assert!(html.contains(">Q1</h3>"));
        assert!(html.contains(">A1</p>"));
    }

    #[test]
    fn preview_faq_is_collapsible() {
        let html = preview().render_section(&json!({
            "type": "FAQ", "items": [{"q": "Q1", "a": "A1"}]
        }));
        assert!(html.contains("<details class=\"faq-item\""));
        assert!(html.contains(">Q1</summary>"));
        assert!(html.contains(">A1</div>"));
    }

    #[test]
    fn stats_use_number_then_value() {
        let html = build().render_section(&json!({
            "type": "stats-section",
            "title": "Numbers",
            "stats": [
                {"number": "5", "value": "ignored", "label": "Villages"},
                {"value": 120, "label": "km of trails", "description": "Marked paths"}
            ]
        }));
        assert!(html.contains("repeat(4,1fr)"));
        assert_eq!(html.matches("class=\"stat\"").count(), 2);
        assert!(html.contains(">5</div>"));
        assert!(!html.contains("ignored"));
        assert!(html.contains(">120</div>"));
        assert!(html.contains(">Marked paths</div>"));
    }

    #[test]
    fn features_render_three_columns_with_raw_icons() {
        let html = build().render_section(&json!({
            "type": "feature-section",
            "title": "Why visit",
            "features": [{"icon": "<b>★</b>", "title": "Views", "description": "Sea & hills"}]
        }));
        assert!(html.contains("repeat(3,1fr)"));
        assert!(html.contains("<b>★</b>"));
        assert!(html.contains("Sea &amp; hills"));
    }

    #[test]
    fn content_with_image_uses_two_columns() {
        let with_image = build().render_section(&json!({
            "type": "content-section", "headline": "About", "content": "Text", "image": "/a.jpg"
        }));
        assert!(with_image.contains("grid-template-columns:1fr 1fr"));
        assert!(with_image.contains("<img src=\"/a.jpg\""));
        assert!(with_image.contains(">About</h2>"));

        let without = build().render_section(&json!({"type": "content", "content": "Text"}));
        assert!(without.contains("grid-template-columns:1fr;"));
        assert!(!without.contains("<img"));
    }

    #[test]
    fn cta_uses_brand_gradient() {
        let html = build().render_section(&json!({
            "type": "cta-section",
            "title": "Plan your visit",
            "buttons": [{"text": "Hotels", "url": "/hotels"}]
        }));
        assert!(html.contains("linear-gradient(135deg,#0d9488 0%,#0f766e 100%)"));
        assert!(html.contains(">Plan your visit</h2>"));
        assert!(html.contains("background:#ffffff;color:#0d9488"));
    }

    #[test]
    fn collection_embed_caps_items_and_sets_columns() {
        let items: Vec<_> = (0..15)
            .map(|i| json!({"title": format!("Item {i}"), "url": format!("/i/{i}")}))
            .collect();
        let html = build().render_section(&json!({
            "type": "collection-embed",
            "heading": "Trails",
            "items": items,
            "display": {"columns": 4},
            "showViewAll": true,
            "viewAllUrl": "/trails"
        }));
        assert_eq!(html.matches("class=\"collection-card\"").count(), 12);
        assert!(html.contains("repeat(4,1fr)"));
        assert!(html.contains("<a href=\"/trails\""));
    }

    #[test]
    fn empty_collection_embed_says_so() {
        let html = build().render_section(&json!({"type": "collection-embed", "items": []}));
        assert!(html.contains("Collection items will be displayed here."));
    }

    #[test]
    fn testimonial_and_map_only_in_preview() {
        let section = json!({"type": "testimonial", "quote": "Magical", "author": "Ana"});
        let html = preview().render_section(&section);
        assert!(html.contains(">Magical</blockquote>"));
        assert!(html.contains(">Ana</div>"));

        let html = build().render_section(&section);
        assert!(html.contains("[testimonial]"));

        assert!(preview()
            .render_section(&json!({"type": "map"}))
            .contains("[Interactive Map]"));
    }

    #[test]
    fn footer_is_suppressed_in_preview_only() {
        let footer = json!({"type": "footer-section", "companyName": "X"});
        assert_eq!(preview().render_section(&footer), "");
        assert!(build().render_section(&footer).contains("[footer-section]"));
    }

    #[test]
    fn unknown_type_renders_placeholder_only() {
        let html = build().render_section(&json!({"type": "image-gallery", "title": "Nope"}));
        assert!(html.contains("[image-gallery]"));
        assert!(html.contains("placeholder-section"));
        for other in [
            "hero-section",
            "stats-section",
            "feature-section",
            "faq-section",
            "cta-section",
        ] {
            assert!(!html.contains(other));
        }
        assert!(!html.contains("Nope"));
    }

    #[test]
    fn preview_placeholder_includes_truncated_dump() {
        let long = "x".repeat(1000);
        let html = preview().render_section(&json!({"type": "gallery", "blob": long}));
        assert!(html.contains("[gallery]"));
        assert!(html.contains("<pre"));
        assert!(html.contains("...</pre>"));
        assert!(!html.contains(&"x".repeat(600)));
    }
}
