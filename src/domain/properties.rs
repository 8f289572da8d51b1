//! Mapping from an `Extraction` onto the sessions database properties.
//!
//! Property names must match the Notion database exactly (note the lowercase
//! `date`). Pure: the only external input is `today`, which the caller supplies.

use super::Extraction;
use chrono::NaiveDate;
use serde_json::{Map, Value, json};

/// Max characters in a single Notion rich-text unit.
pub const RICH_TEXT_LIMIT: usize = 2000;

pub const NAME: &str = "Name";
pub const DATE: &str = "date";
pub const DOMAIN: &str = "Domain";
pub const THESIS: &str = "Thesis";
pub const ANTITHESIS: &str = "Antithesis";
pub const SYNTHESIS: &str = "Synthesis";
pub const OPEN_TENSIONS: &str = "Open Tensions";
pub const BEHAVIORAL_COMMITMENT: &str = "Behavioral Commitment";
pub const FOLLOW_UP_DATE: &str = "Follow-up Date";

/// Notion `properties` object for page creation.
pub type PropertyMap = Map<String, Value>;

/// Single-unit rich-text array, truncated to `RICH_TEXT_LIMIT` characters.
pub fn rich_text(text: &str) -> Value {
    let content: String = text.chars().take(RICH_TEXT_LIMIT).collect();
    json!([{ "type": "text", "text": { "content": content } }])
}

fn date(start: &str) -> Value {
    json!({ "date": { "start": start } })
}

/// Build the property map for one extraction.
///
/// - Long-form fields are sent whenever supplied, `""` included.
/// - `domain` and `follow_up_date` are sent only when non-empty.
/// - `date` falls back to `today` when not supplied or empty.
pub fn build_properties(x: &Extraction, today: NaiveDate) -> PropertyMap {
    let mut props = PropertyMap::new();

    props.insert(NAME.into(), json!({ "title": rich_text(&x.session_title) }));

    let start = match x.date.truthy() {
        Some(d) => d.to_string(),
        None => today.format("%Y-%m-%d").to_string(),
    };
    props.insert(DATE.into(), date(&start));

    if let Some(domain) = x.domain.truthy() {
        props.insert(DOMAIN.into(), json!({ "select": { "name": domain } }));
    }

    let long_form = [
        (THESIS, &x.thesis),
        (ANTITHESIS, &x.antithesis),
        (SYNTHESIS, &x.synthesis),
        (OPEN_TENSIONS, &x.open_tensions),
        (BEHAVIORAL_COMMITMENT, &x.behavioral_commitment),
    ];
    for (name, field) in long_form {
        if let Some(text) = field.present() {
            props.insert(name.into(), json!({ "rich_text": rich_text(text) }));
        }
    }

    if let Some(follow_up) = x.follow_up_date.truthy() {
        props.insert(FOLLOW_UP_DATE.into(), date(follow_up));
    }

    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn extraction(title: &str) -> Extraction {
        Extraction {
            session_title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_extraction_with_empty_thesis() {
        let x = Extraction {
            thesis: Field::Empty,
            ..extraction("S")
        };
        let props = build_properties(&x, today());

        let mut keys: Vec<&str> = props.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![NAME, THESIS, DATE]);

        assert_eq!(props[NAME]["title"][0]["text"]["content"], "S");
        assert_eq!(props[DATE]["date"]["start"], "2024-03-09");
        assert_eq!(props[THESIS]["rich_text"][0]["text"]["content"], "");
        for absent in [
            DOMAIN,
            ANTITHESIS,
            SYNTHESIS,
            OPEN_TENSIONS,
            BEHAVIORAL_COMMITMENT,
            FOLLOW_UP_DATE,
        ] {
            assert!(!props.contains_key(absent), "{absent} should be omitted");
        }
    }

    #[test]
    fn test_thesis_is_truncated_to_rich_text_limit() {
        let x = Extraction {
            thesis: Field::from("x".repeat(5000)),
            ..extraction("S")
        };
        let props = build_properties(&x, today());
        let content = props[THESIS]["rich_text"][0]["text"]["content"]
            .as_str()
            .unwrap();
        assert_eq!(content.chars().count(), RICH_TEXT_LIMIT);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let value = rich_text(&"é".repeat(2500));
        let content = value[0]["text"]["content"].as_str().unwrap();
        assert_eq!(content.chars().count(), RICH_TEXT_LIMIT);
        assert_eq!(content.len(), RICH_TEXT_LIMIT * 2);
    }

    #[test]
    fn test_explicit_date_wins_over_today() {
        let x = Extraction {
            date: Field::from("2023-12-31"),
            ..extraction("S")
        };
        let props = build_properties(&x, today());
        assert_eq!(props[DATE]["date"]["start"], "2023-12-31");
    }

    #[test]
    fn test_empty_date_falls_back_to_today() {
        let x = Extraction {
            date: Field::Empty,
            ..extraction("S")
        };
        let props = build_properties(&x, today());
        assert_eq!(props[DATE]["date"]["start"], "2024-03-09");
    }

    #[test]
    fn test_empty_domain_and_follow_up_are_omitted() {
        let x = Extraction {
            domain: Field::Empty,
            follow_up_date: Field::Empty,
            ..extraction("S")
        };
        let props = build_properties(&x, today());
        assert!(!props.contains_key(DOMAIN));
        assert!(!props.contains_key(FOLLOW_UP_DATE));
    }

    #[test]
    fn test_full_extraction_maps_every_property() {
        let x = Extraction {
            session_title: "Evening reflection".into(),
            date: Field::from("2024-03-08"),
            domain: Field::from("Work"),
            thesis: Field::from("t"),
            antithesis: Field::from("a"),
            synthesis: Field::from("s"),
            open_tensions: Field::from("o"),
            behavioral_commitment: Field::from("b"),
            follow_up_date: Field::from("2024-03-15"),
        };
        let props = build_properties(&x, today());

        assert_eq!(props.len(), 9);
        assert_eq!(props[DOMAIN], json!({ "select": { "name": "Work" } }));
        assert_eq!(props[FOLLOW_UP_DATE], json!({ "date": { "start": "2024-03-15" } }));
        assert_eq!(
            props[BEHAVIORAL_COMMITMENT],
            json!({ "rich_text": [{ "type": "text", "text": { "content": "b" } }] })
        );
        assert_eq!(props[OPEN_TENSIONS]["rich_text"][0]["text"]["content"], "o");
    }
}
