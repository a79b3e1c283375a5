//! The fixed set of villages and the per-village sub-pages every one of them has.

pub const VILLAGES: [&str; 5] = ["monterosso", "vernazza", "corniglia", "manarola", "riomaggiore"];

/// Sub-page slugs with their tab labels, in navigation order.
pub const VILLAGE_SUBPAGES: [(&str, &str); 10] = [
    ("overview", "Overview"),
    ("restaurants", "Restaurants"),
    ("hotels", "Hotels"),
    ("hiking", "Hiking"),
    ("beaches", "Beaches"),
    ("sights", "Sights"),
    ("events", "Events"),
    ("getting-here", "Getting Here"),
    ("weather", "Weather"),
    ("faq", "FAQ"),
];

/// The village a route belongs to, when its first segment names one.
pub fn village_from_route(route: &str) -> Option<&'static str> {
    let first = route.split('/').next()?;
    VILLAGES.iter().copied().find(|village| *village == first)
}

/// The sub-page slug of a village route, `""` for the village root.
pub fn subpage_of(route: &str) -> &str {
    route.split('/').nth(1).unwrap_or_default()
}

/// Identifier with its first letter upper-cased ("monterosso" -> "Monterosso").
pub fn display_name(village: &str) -> String {
    let mut chars = village.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
