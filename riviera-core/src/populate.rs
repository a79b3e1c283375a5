//! Fill empty French page documents with generated sections.
//!
//! A page is empty when its `body` is missing, `null` or an empty array. Its
//! new body is picked from the page type in `metadata.page_type` (or a
//! top-level `page_type`) and phrased for the village in `metadata.city`.
//! Every other key of the document is kept as it was, in its original order.

use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::site::discover_pages;
use crate::page_types::{PageType, Place, REGION, template_for};
use crate::villages::display_name;

#[derive(Error, Debug)]
pub enum PopulateError {
    #[error("Directory {0} does not exist")]
    MissingDir(PathBuf),
    #[error("IO error on {path}: {source}")]
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Populated,
    /// The page already had content and was left untouched.
    Skipped,
}

#[derive(Debug, Default)]
pub struct PopulateReport {
    pub populated: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, PopulateError)>,
}

pub struct Populator {
    updated_at: String,
}

impl Populator {
    /// `updated_at` is stamped on every page this populator rewrites.
    pub fn new<S: Into<String>>(updated_at: S) -> Self {
        Self {
            updated_at: updated_at.into(),
        }
    }

    pub fn populate_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PopulateReport, PopulateError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(PopulateError::MissingDir(dir.to_path_buf()));
        }

        let mut report = PopulateReport::default();
        for page in discover_pages(dir) {
            match self.populate_file(&page.path) {
                Ok(Outcome::Populated) => {
                    log::info!("Populated {}", page.path.display());
                    report.populated.push(page.path);
                }
                Ok(Outcome::Skipped) => {
                    log::debug!("Skipping {}, already has content", page.path.display());
                    report.skipped.push(page.path);
                }
                Err(err) => {
                    log::error!("Error processing {}: {}", page.path.display(), err);
                    report.failed.push((page.path, err));
                }
            }
        }
        Ok(report)
    }

    pub fn populate_file<P: AsRef<Path>>(&self, path: P) -> Result<Outcome, PopulateError> {
        let path = path.as_ref();
        let io_error = |source| PopulateError::Io {
            path: path.display().to_string(),
            source,
        };

        let data = std::fs::read_to_string(path).map_err(io_error)?;
        let value: Value = serde_json::from_str(&data).map_err(|source| PopulateError::Json {
            path: path.display().to_string(),
            source,
        })?;
        let Value::Object(mut document) = value else {
            return Err(PopulateError::NotAnObject {
                path: path.display().to_string(),
            });
        };

        if !has_empty_body(&document) {
            return Ok(Outcome::Skipped);
        }

        let village = string_at(&document, &["metadata", "city"]).unwrap_or(REGION);
        let page_type = string_at(&document, &["metadata", "page_type"])
            .or_else(|| string_at(&document, &["page_type"]));
        let body = build_body(page_type, village);

        document.insert("body".to_string(), Value::Array(body));
        document.insert("updated_at".to_string(), Value::String(self.updated_at.clone()));

        let mut out = serde_json::to_string_pretty(&Value::Object(document)).map_err(|source| {
            PopulateError::Json {
                path: path.display().to_string(),
                source,
            }
        })?;
        out.push('\n');
        std::fs::write(path, out).map_err(io_error)?;

        Ok(Outcome::Populated)
    }
}

fn has_empty_body(document: &Map<String, Value>) -> bool {
    match document.get("body") {
        None | Some(Value::Null) => true,
        Some(Value::Array(sections)) => sections.is_empty(),
        Some(_) => false,
    }
}

fn string_at<'a>(document: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    let (last, parents) = keys.split_last()?;
    let mut map = document;
    for key in parents {
        map = map.get(*key)?.as_object()?;
    }
    map.get(*last)?.as_str().filter(|text| !text.is_empty())
}

/// Sections for a page of `page_type` about `village`.
///
/// Known types get hero, stats, features, call to action and footer; anything
/// else gets a generic hero, a highlights grid and the footer.
pub fn build_body(page_type: Option<&str>, village: &str) -> Vec<Value> {
    let Some(known) = page_type.and_then(PageType::from_slug) else {
        if let Some(page_type) = page_type {
            log::info!("No template for {page_type}, using generic template");
        }
        return generic_body(page_type, village);
    };

    let place = Place::new(village);
    let template = template_for(known, place);

    let stats: Vec<Value> = template
        .stats
        .iter()
        .map(|(value, label)| json!({"value": value, "label": label}))
        .collect();
    let features: Vec<Value> = template
        .features
        .iter()
        .map(|(icon, title, description)| {
            json!({"icon": icon, "title": title, "description": description})
        })
        .collect();

    vec![
        json!({
            "type": "hero-section",
            "variant": "split-with-image",
            "eyebrow": template.eyebrow,
            "title": template.title,
            "subtitle": template.subtitle,
            "buttons": [
                {"text": "En Savoir Plus", "url": "#details", "variant": "primary"},
                {"text": "Voir Tous les Villages", "url": "/fr/cinque-terre/overview", "variant": "secondary"}
            ],
            "image": template.image
        }),
        json!({
            "type": "stats-section",
            "variant": "simple-grid",
            "eyebrow": "En un coup d'œil",
            "title": "Informations Clés",
            "stats": stats
        }),
        json!({
            "type": "feature-section",
            "variant": "simple-3x2-grid",
            "eyebrow": "Détails",
            "title": "Ce Qu'il Faut Savoir",
            "features": features
        }),
        json!({
            "type": "cta-section",
            "variant": "simple-centered-with-gradient",
            "title": "Planifiez Votre Visite",
            "subtitle": format!(
                "Découvrez tout ce dont vous avez besoin pour visiter {}.",
                place.phrase("les Cinque Terre", "")
            ),
            "buttons": [
                {"text": "Hébergements", "url": format!("/fr/{village}/hotels"), "variant": "primary"},
                {"text": "Que Faire", "url": format!("/fr/{village}/things-to-do"), "variant": "secondary"}
            ]
        }),
        footer(),
    ]
}

fn generic_body(page_type: Option<&str>, village: &str) -> Vec<Value> {
    let name = display_name(village);
    let title = match page_type {
        Some(page_type) => format!("{name} - {}", title_case(&page_type.replace('-', " "))),
        None => name.clone(),
    };

    vec![
        json!({
            "type": "hero-section",
            "variant": "split-with-image",
            "eyebrow": "Découvrez",
            "title": title,
            "subtitle": format!(
                "Explorez {name} et découvrez tout ce que ce magnifique village a à offrir."
            ),
            "buttons": [
                {"text": "En Savoir Plus", "url": "#", "variant": "primary"},
                {"text": "Retour", "url": format!("/fr/{village}"), "variant": "secondary"}
            ],
            "image": "https://images.unsplash.com/photo-1516483638261-f4dbaf036963?w=1200&q=80"
        }),
        json!({
            "type": "feature-section",
            "variant": "simple-3x2-grid",
            "eyebrow": "À Découvrir",
            "title": "Points Forts",
            "features": [
                {"icon": "map-pin", "title": "Emplacement", "description": "Au cœur des Cinque Terre, facilement accessible."},
                {"icon": "compass", "title": "À Explorer", "description": "De nombreuses activités et sites à découvrir."},
                {"icon": "camera", "title": "Photographie", "description": "Paysages et vues à couper le souffle."},
                {"icon": "utensils", "title": "Gastronomie", "description": "Cuisine locale authentique et savoureuse."}
            ]
        }),
        footer(),
    ]
}

/// Upper-case the first character of every word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        let word_char = ch.is_alphanumeric() || ch == '_';
        if word_char && at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !word_char;
    }
    out
}

fn footer() -> Value {
    json!({
        "type": "footer-section",
        "variant": "4-column-simple",
        "companyName": "Cinqueterre.travel",
        "companyDescription": "Votre guide complet des plus beaux villages côtiers d'Italie.",
        "copyright": "© 2025 Cinqueterre.travel. Tous droits réservés.",
        "columns": [
            {
                "title": "Villages",
                "links": [
                    {"label": "Monterosso", "url": "/fr/monterosso"},
                    {"label": "Vernazza", "url": "/fr/vernazza"},
                    {"label": "Corniglia", "url": "/fr/corniglia"},
                    {"label": "Manarola", "url": "/fr/manarola"},
                    {"label": "Riomaggiore", "url": "/fr/riomaggiore"}
                ]
            },
            {
                "title": "Planifier",
                "links": [
                    {"label": "Comment S'y Rendre", "url": "/fr/cinque-terre/getting-here"},
                    {"label": "Où Dormir", "url": "/fr/cinque-terre/hotels"},
                    {"label": "Restaurants", "url": "/fr/cinque-terre/restaurants"},
                    {"label": "Carte", "url": "/fr/cinque-terre/maps"}
                ]
            },
            {
                "title": "Activités",
                "links": [
                    {"label": "Randonnées", "url": "/fr/cinque-terre/hiking"},
                    {"label": "Plages", "url": "/fr/cinque-terre/beaches"},
                    {"label": "Excursions Bateau", "url": "/fr/cinque-terre/boat-tours"},
                    {"label": "Événements", "url": "/fr/cinque-terre/events"}
                ]
            },
            {
                "title": "Infos",
                "links": [
                    {"label": "Météo", "url": "/fr/cinque-terre/weather"},
                    {"label": "FAQ", "url": "/fr/cinque-terre/faq"},
                    {"label": "Conseils", "url": "/fr/cinque-terre/insights"},
                    {"label": "Blog", "url": "/fr/cinque-terre/blog"}
                ]
            }
        ],
        "socialLinks": [
            {"platform": "instagram", "url": "https://instagram.com/cinqueterre"},
            {"platform": "facebook", "url": "https://facebook.com/cinqueterre"}
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const STAMP: &str = "2025-12-12T23:00:00.000Z";

    fn types(body: &[Value]) -> Vec<&str> {
        body.iter()
            .map(|section| section["type"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn weather_page_for_a_village() {
        let body = build_body(Some("weather"), "manarola");
        assert_eq!(
            types(&body),
            vec![
                "hero-section",
                "stats-section",
                "feature-section",
                "cta-section",
                "footer-section"
            ]
        );
        assert_eq!(body[0]["title"], "Météo de Manarola");
        assert_eq!(body[0]["buttons"][1]["url"], "/fr/cinque-terre/overview");
        assert_eq!(body[1]["stats"].as_array().unwrap().len(), 4);
        assert_eq!(body[2]["features"].as_array().unwrap().len(), 6);
        assert_eq!(body[3]["buttons"][0]["url"], "/fr/manarola/hotels");
        assert_eq!(body[3]["buttons"][1]["url"], "/fr/manarola/things-to-do");
        assert_eq!(
            body[3]["subtitle"],
            "Découvrez tout ce dont vous avez besoin pour visiter Manarola."
        );
    }

    #[test]
    fn region_page_phrasing() {
        let body = build_body(Some("things-to-do"), REGION);
        assert_eq!(body[0]["title"], "Que Faire aux Cinque Terre");
        assert_eq!(
            body[3]["subtitle"],
            "Découvrez tout ce dont vous avez besoin pour visiter les Cinque Terre."
        );
    }

    #[test]
    fn unknown_type_gets_generic_body() {
        let body = build_body(Some("wine-bars"), "vernazza");
        assert_eq!(
            types(&body),
            vec!["hero-section", "feature-section", "footer-section"]
        );
        assert_eq!(body[0]["title"], "Vernazza - Wine Bars");
        assert_eq!(body[0]["buttons"][1]["url"], "/fr/vernazza");
        assert_eq!(body[1]["features"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn missing_type_gets_generic_body_titled_with_village() {
        let body = build_body(None, "corniglia");
        assert_eq!(body.len(), 3);
        assert_eq!(body[0]["title"], "Corniglia");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("wine bars"), "Wine Bars");
        assert_eq!(title_case("day trips from genoa"), "Day Trips From Genoa");
    }

    #[test]
    fn populates_empty_page_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.json");
        fs::write(
            &path,
            r#"{"slug": "weather", "title": "Météo", "metadata": {"city": "manarola", "page_type": "weather"}, "body": [], "extra": {"keep": true}}"#,
        )
        .unwrap();

        let outcome = Populator::new(STAMP).populate_file(&path).unwrap();
        assert_eq!(outcome, Outcome::Populated);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("}\n"));
        assert!(written.contains("\n  \"slug\": \"weather\""));
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["body"].as_array().unwrap().len(), 5);
        assert_eq!(value["updated_at"], STAMP);
        assert_eq!(value["extra"]["keep"], true);

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec!["slug", "title", "metadata", "body", "extra", "updated_at"]
        );
    }

    #[test]
    fn top_level_page_type_and_default_village() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faq.json");
        fs::write(&path, r#"{"page_type": "faq"}"#).unwrap();

        Populator::new(STAMP).populate_file(&path).unwrap();
        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["body"][0]["title"], "FAQ Cinque Terre");
    }

    #[test]
    fn pages_with_content_are_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full.json");
        let original = r#"{"body":[{"type":"hero-section"}]}"#;
        fs::write(&path, original).unwrap();

        let outcome = Populator::new(STAMP).populate_file(&path).unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn second_run_leaves_populated_page_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maps.json");
        fs::write(&path, r#"{"metadata": {"city": "vernazza", "page_type": "maps"}}"#).unwrap();

        let first = Populator::new(STAMP).populate_file(&path).unwrap();
        assert_eq!(first, Outcome::Populated);
        let after_first = fs::read_to_string(&path).unwrap();

        let second = Populator::new("2026-01-01T00:00:00.000Z")
            .populate_file(&path)
            .unwrap();
        assert_eq!(second, Outcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    }

    #[test]
    fn directory_run_reports_each_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("manarola")).unwrap();
        fs::write(
            dir.path().join("manarola/weather.json"),
            r#"{"metadata": {"city": "manarola", "page_type": "weather"}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("full.json"), r#"{"body": [{}]}"#).unwrap();
        fs::write(dir.path().join("broken.json"), "{ nope").unwrap();

        let report = Populator::new(STAMP).populate_dir(dir.path()).unwrap();
        assert_eq!(report.populated, vec![dir.path().join("manarola/weather.json")]);
        assert_eq!(report.skipped, vec![dir.path().join("full.json")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, dir.path().join("broken.json"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Populator::new(STAMP).populate_dir(dir.path().join("fr")),
            Err(PopulateError::MissingDir(_))
        ));
    }
}
