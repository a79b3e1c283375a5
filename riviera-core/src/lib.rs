pub mod builder;
pub mod config;
pub mod html;
mod layout;
pub mod localized;
pub mod page;
pub mod page_types;
pub mod populate;
pub mod render;
pub mod rich_text;
pub mod section;
pub mod site;
pub mod template;
pub mod theme;
pub mod villages;

// Re-export main types
pub use builder::{BuildError, BuildReport, SiteBuilder};
pub use localized::Localized;
pub use page::{PageDocument, PageError};
pub use populate::{PopulateError, PopulateReport, Populator};
pub use render::Renderer;
pub use section::{RenderMode, Section, SectionKind};
pub use site::{ContentPage, discover_pages};
pub use template::TemplateError;
pub use theme::{Palette, Theme, ThemeError};
