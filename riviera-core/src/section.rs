//! Typed page sections.
//!
//! A section arrives as a JSON object with a free-form `type` string. The
//! string is classified once against the known section kinds (first tag
//! contained in the type wins) and the object is parsed into the matching
//! struct. Every field is optional and every struct tolerates malformed
//! input, so parsing a section never fails: anything unrecognized ends up as
//! [`Section::Unknown`].

use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use crate::localized::{Localized, lenient, lenient_vec};

/// Which flavor of output is being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Static pages written by the batch build.
    Build,
    /// Pages rendered on request by the preview server.
    Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Stats,
    Feature,
    Content,
    Faq,
    Cta,
    CollectionEmbed,
    Testimonial,
    Footer,
    Map,
}

const BUILD_ORDER: &[SectionKind] = &[
    SectionKind::Hero,
    SectionKind::Stats,
    SectionKind::Feature,
    SectionKind::Content,
    SectionKind::Faq,
    SectionKind::Cta,
    SectionKind::CollectionEmbed,
];

const PREVIEW_ORDER: &[SectionKind] = &[
    SectionKind::Hero,
    SectionKind::Stats,
    SectionKind::Feature,
    SectionKind::Content,
    SectionKind::Testimonial,
    SectionKind::Cta,
    SectionKind::Faq,
    SectionKind::Footer,
    SectionKind::Map,
];

impl SectionKind {
    pub fn tag(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Stats => "stats",
            SectionKind::Feature => "feature",
            SectionKind::Content => "content",
            SectionKind::Faq => "faq",
            SectionKind::Cta => "cta",
            SectionKind::CollectionEmbed => "collection-embed",
            SectionKind::Testimonial => "testimonial",
            SectionKind::Footer => "footer",
            SectionKind::Map => "map",
        }
    }

    /// Find the first kind whose tag the type string contains.
    ///
    /// Preview matching ignores case; build matching does not.
    pub fn classify(type_name: &str, mode: RenderMode) -> Option<SectionKind> {
        let (order, normalized) = match mode {
            RenderMode::Build => (BUILD_ORDER, type_name.to_string()),
            RenderMode::Preview => (PREVIEW_ORDER, type_name.to_lowercase()),
        };
        order
            .iter()
            .copied()
            .find(|kind| normalized.contains(kind.tag()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl<'de> Deserialize<'de> for ButtonVariant {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some("secondary") => ButtonVariant::Secondary,
            _ => ButtonVariant::Primary,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Button {
    pub text: Localized,
    pub url: Localized,
    pub variant: ButtonVariant,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeroSection {
    pub eyebrow: Localized,
    pub title: Localized,
    pub subtitle: Localized,
    pub image: Localized,
    #[serde(rename = "backgroundImage")]
    pub background_image: Localized,
    #[serde(deserialize_with = "lenient_vec")]
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub number: Localized,
    pub value: Localized,
    pub label: Localized,
    pub description: Localized,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatsSection {
    pub eyebrow: Localized,
    pub title: Localized,
    #[serde(deserialize_with = "lenient_vec")]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub icon: Localized,
    pub title: Localized,
    pub description: Localized,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeatureSection {
    pub eyebrow: Localized,
    pub title: Localized,
    pub subtitle: Localized,
    #[serde(deserialize_with = "lenient_vec")]
    pub features: Vec<Feature>,
}

/// Body of a content section: one multi-paragraph string, or a list of items.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    #[default]
    Empty,
    Text(String),
    Items(Vec<ContentItem>),
    Translated(Localized),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentItem {
    Bare(String),
    Block(ContentBlock),
    /// Numbers, nested arrays and other shapes render nothing.
    Other(IgnoredAny),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub text: Localized,
    #[serde(deserialize_with = "lenient_vec")]
    pub items: Vec<Localized>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentSection {
    pub title: Localized,
    pub headline: Localized,
    pub subtitle: Localized,
    pub eyebrow: Localized,
    pub content: RichText,
    pub image: Localized,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    pub question: Localized,
    pub q: Localized,
    pub answer: Localized,
    pub a: Localized,
}

impl FaqEntry {
    pub fn question(&self, locale: &str) -> String {
        first_non_empty(&self.question, &self.q, locale)
    }

    pub fn answer(&self, locale: &str) -> String {
        first_non_empty(&self.answer, &self.a, locale)
    }
}

fn first_non_empty(primary: &Localized, alias: &Localized, locale: &str) -> String {
    let text = primary.resolve(locale);
    if text.is_empty() {
        alias.resolve(locale)
    } else {
        text
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FaqSection {
    pub title: Localized,
    #[serde(deserialize_with = "lenient_vec")]
    pub faqs: Vec<FaqEntry>,
    #[serde(deserialize_with = "lenient_vec")]
    pub items: Vec<FaqEntry>,
}

impl FaqSection {
    /// `faqs` when present, otherwise `items`.
    pub fn entries(&self) -> &[FaqEntry] {
        if self.faqs.is_empty() {
            &self.items
        } else {
            &self.faqs
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CtaSection {
    pub eyebrow: Localized,
    pub title: Localized,
    pub subtitle: Localized,
    #[serde(deserialize_with = "lenient_vec")]
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CollectionItem {
    pub title: Localized,
    pub image: Localized,
    pub summary: Localized,
    pub village: Localized,
    pub url: Localized,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollectionDisplay {
    pub columns: u32,
}

impl Default for CollectionDisplay {
    fn default() -> Self {
        Self { columns: 3 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollectionEmbed {
    pub heading: Localized,
    #[serde(deserialize_with = "lenient_vec")]
    pub items: Vec<CollectionItem>,
    #[serde(deserialize_with = "lenient")]
    pub display: CollectionDisplay,
    #[serde(deserialize_with = "lenient")]
    pub show_view_all: bool,
    pub view_all_url: Localized,
}

impl CollectionEmbed {
    pub const MAX_ITEMS: usize = 12;
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestimonialSection {
    pub quote: Localized,
    pub author: Localized,
    pub role: Localized,
}

#[derive(Debug, Clone)]
pub enum Section {
    Hero(HeroSection),
    Stats(StatsSection),
    Feature(FeatureSection),
    Content(ContentSection),
    Faq(FaqSection),
    Cta(CtaSection),
    CollectionEmbed(CollectionEmbed),
    Testimonial(TestimonialSection),
    Footer,
    Map,
    Unknown { type_name: String, raw: Value },
}

impl Section {
    pub fn parse(value: &Value, mode: RenderMode) -> Section {
        let type_name = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default();

        let Some(kind) = SectionKind::classify(type_name, mode) else {
            return Section::unknown(type_name, value);
        };

        let parsed = match kind {
            SectionKind::Hero => typed(value).map(Section::Hero),
            SectionKind::Stats => typed(value).map(Section::Stats),
            SectionKind::Feature => typed(value).map(Section::Feature),
            SectionKind::Content => typed(value).map(Section::Content),
            SectionKind::Faq => typed(value).map(Section::Faq),
            SectionKind::Cta => typed(value).map(Section::Cta),
            SectionKind::CollectionEmbed => typed(value).map(Section::CollectionEmbed),
            SectionKind::Testimonial => typed(value).map(Section::Testimonial),
            SectionKind::Footer => Some(Section::Footer),
            SectionKind::Map => Some(Section::Map),
        };

        parsed.unwrap_or_else(|| Section::unknown(type_name, value))
    }

    fn unknown(type_name: &str, value: &Value) -> Section {
        Section::Unknown {
            type_name: type_name.to_string(),
            raw: value.clone(),
        }
    }
}

fn typed<T: DeserializeOwned>(value: &Value) -> Option<T> {
    serde_json::from_value(value.clone()).ok()
}
