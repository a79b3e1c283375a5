//! Navigation state for the page shell templates: primary navigation, village
//! sub-navigation and the footer columns.

use serde::Serialize;
use url::form_urlencoded::byte_serialize;

use crate::theme::Palette;
use crate::villages::{VILLAGE_SUBPAGES, VILLAGES, display_name, subpage_of, village_from_route};

const FONT_WEIGHTS: &str = "wght@400;500;600;700";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct NavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

impl NavLink {
    fn new(href: impl Into<String>, label: impl Into<String>, active: bool) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            active,
        }
    }
}

/// Header links: the region and its villages, then the two region guides.
#[derive(Debug, Serialize)]
pub(crate) struct PrimaryNav {
    pub places: Vec<NavLink>,
    pub guides: Vec<NavLink>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FooterColumn {
    pub heading: &'static str,
    pub links: Vec<NavLink>,
}

/// Stylesheet link for the first family of the display and sans stacks.
pub(crate) fn google_fonts_url(palette: &Palette) -> String {
    let display: String = byte_serialize(palette.display_family().as_bytes()).collect();
    let sans: String = byte_serialize(palette.sans_family().as_bytes()).collect();
    format!(
        "https://fonts.googleapis.com/css2?family={display}:{FONT_WEIGHTS}\
         &family={sans}:{FONT_WEIGHTS}&display=swap"
    )
}

/// The current village's link is the only active one.
pub(crate) fn primary_nav(village: Option<&str>) -> PrimaryNav {
    let mut places = vec![NavLink::new("/cinque-terre", "Cinque Terre", false)];
    places.extend(VILLAGES.iter().map(|name| {
        NavLink::new(format!("/{name}"), display_name(name), village == Some(*name))
    }));

    PrimaryNav {
        places,
        guides: vec![
            NavLink::new("/cinque-terre/hiking", "Hiking", false),
            NavLink::new("/cinque-terre/restaurants", "Restaurants", false),
        ],
    }
}

/// Tabs for village pages; `None` for every other route.
pub(crate) fn subnav(route: &str) -> Option<Vec<NavLink>> {
    let village = village_from_route(route)?;
    let current = subpage_of(route);

    let mut tabs = vec![NavLink::new(
        format!("/{village}"),
        display_name(village),
        current.is_empty(),
    )];
    tabs.extend(VILLAGE_SUBPAGES.iter().map(|(slug, label)| {
        NavLink::new(format!("/{village}/{slug}"), *label, current == *slug)
    }));
    Some(tabs)
}

const FOOTER_COLUMNS: [(&str, &[(&str, &str)]); 4] = [
    (
        "Villages",
        &[
            ("/monterosso", "Monterosso"),
            ("/vernazza", "Vernazza"),
            ("/corniglia", "Corniglia"),
            ("/manarola", "Manarola"),
            ("/riomaggiore", "Riomaggiore"),
        ],
    ),
    (
        "Plan Your Trip",
        &[
            ("/cinque-terre/hotels", "Hotels"),
            ("/cinque-terre/restaurants", "Restaurants"),
            ("/cinque-terre/getting-here", "Getting Here"),
            ("/cinque-terre/weather", "Weather"),
            ("/transport", "Transport"),
        ],
    ),
    (
        "Explore",
        &[
            ("/cinque-terre/hiking", "Hiking Trails"),
            ("/cinque-terre/beaches", "Beaches"),
            ("/cinque-terre/boat-tours", "Boat Tours"),
            ("/cinque-terre/events", "Events"),
            ("/cinque-terre/sights", "Sights"),
        ],
    ),
    (
        "About",
        &[
            ("/cinque-terre", "About Cinque Terre"),
            ("/cinque-terre/overview", "Overview"),
            ("/cinque-terre/faq", "FAQ"),
            ("/cinque-terre/maps", "Maps"),
        ],
    ),
];

pub(crate) fn footer_columns() -> Vec<FooterColumn> {
    FOOTER_COLUMNS
        .iter()
        .map(|(heading, links)| FooterColumn {
            heading: *heading,
            links: links
                .iter()
                .map(|(href, label)| NavLink::new(*href, *label, false))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(links: &[NavLink]) -> Vec<&str> {
        links
            .iter()
            .filter(|link| link.active)
            .map(|link| link.href.as_str())
            .collect()
    }

    #[test]
    fn fonts_url_uses_first_families() {
        let url = google_fonts_url(&Palette::default());
        assert!(url.starts_with("https://fonts.googleapis.com/css2?family=Cormorant+Garamond:"));
        assert!(url.contains("&family=Inter:wght@400;500;600;700"));
    }

    #[test]
    fn primary_nav_highlights_current_village() {
        let nav = primary_nav(Some("vernazza"));
        assert_eq!(nav.places.len(), 6);
        assert_eq!(active(&nav.places), vec!["/vernazza"]);
        assert!(active(&nav.guides).is_empty());

        assert!(active(&primary_nav(None).places).is_empty());
    }

    #[test]
    fn subnav_only_for_village_routes() {
        assert_eq!(subnav("cinque-terre/hiking"), None);
        assert_eq!(subnav("index"), None);

        let tabs = subnav("manarola/hotels").unwrap();
        assert_eq!(tabs.len(), 11);
        assert_eq!(tabs[0].label, "Manarola");
        assert_eq!(active(&tabs), vec!["/manarola/hotels"]);
    }

    #[test]
    fn village_root_activates_first_tab() {
        let tabs = subnav("corniglia").unwrap();
        assert_eq!(active(&tabs), vec!["/corniglia"]);
    }

    #[test]
    fn footer_has_four_columns() {
        let columns = footer_columns();
        assert_eq!(columns.len(), 4);
        assert_eq!(columns[0].heading, "Villages");
        assert_eq!(columns[1].links.last().unwrap().href, "/transport");
    }
}
