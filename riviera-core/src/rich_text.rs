use crate::html::{escape, expand_bold};
use crate::section::{ContentBlock, ContentItem, RichText};
use crate::theme::Palette;

/// Render the body of a content section.
pub fn render_items(content: &RichText, palette: &Palette, locale: &str) -> String {
    match content {
        RichText::Empty => String::new(),
        RichText::Text(text) => render_paragraphs(text, palette),
        RichText::Translated(text) => render_paragraphs(&text.resolve(locale), palette),
        RichText::Items(items) => items
            .iter()
            .map(|item| render_item(item, palette, locale))
            .collect(),
    }
}

fn render_paragraphs(text: &str, palette: &Palette) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.split("\n\n")
        .map(|paragraph| paragraph_html(paragraph, palette))
        .collect()
}

fn render_item(item: &ContentItem, palette: &Palette, locale: &str) -> String {
    match item {
        ContentItem::Bare(text) => paragraph_html(text, palette),
        ContentItem::Block(block) => render_block(block, palette, locale),
        ContentItem::Other(_) => String::new(),
    }
}

fn render_block(block: &ContentBlock, palette: &Palette, locale: &str) -> String {
    let text = block.text.resolve(locale);

    match block.kind.as_deref().unwrap_or("paragraph") {
        "subheading" => format!(
            "<h3 style=\"font-size:1.25rem;font-weight:600;color:{};margin:1.5rem 0 0.75rem\">{}</h3>",
            palette.navy,
            escape(&text)
        ),
        "callout" => format!(
            "<div style=\"background:{};border-left:4px solid {};padding:1rem 1.25rem;margin:1rem 0;border-radius:0 0.25rem 0.25rem 0\"><p style=\"color:{};font-style:italic\">{}</p></div>",
            palette.cream,
            palette.brand,
            palette.navy,
            expand_bold(&text, None)
        ),
        "list" => {
            let items: String = block
                .items
                .iter()
                .map(|item| {
                    format!(
                        "<li style=\"margin-bottom:0.5rem;color:{}\">{}</li>",
                        palette.gray,
                        strong(&item.resolve(locale), palette)
                    )
                })
                .collect();
            format!("<ul style=\"margin:1rem 0;padding-left:1.5rem;list-style:disc\">{items}</ul>")
        }
        _ => paragraph_html(&text, palette),
    }
}

fn paragraph_html(text: &str, palette: &Palette) -> String {
    format!(
        "<p style=\"margin-bottom:1rem\">{}</p>",
        strong(text, palette)
    )
}

fn strong(text: &str, palette: &Palette) -> String {
    expand_bold(text, Some(&format!("color:{}", palette.navy)))
}
