#![allow(bindings_with_variant_name)]
use rce_rs::details::DetailView;
use rce_rs::models::{Country, Currency, Demonym, Flags, Maps, Name};
use rce_rs::render;

fn france() -> Country {
    Country {
        name: Name {
            common: "France".into(),
            official: "French Republic".into(),
        },
        region: "Europe".into(),
        subregion: Some("Western Europe".into()),
        population: 67_391_582,
        area: Some(551_695.0),
        capital: vec!["Paris".into()],
        currencies: [(
            "EUR".to_string(),
            Currency {
                name: "Euro".into(),
                symbol: Some("€".into()),
            },
        )]
        .into(),
        languages: [("fra".to_string(), "French".to_string())].into(),
        timezones: vec!["UTC+01:00".into()],
        latlng: vec![46.0, 2.0],
        flags: Flags {
            png: "https://flagcdn.com/w320/fr.png".into(),
            svg: None,
            alt: None,
        },
        maps: Maps {
            google_maps: "https://goo.gl/maps/g7QxxSFsWyTPKuzd7".into(),
            open_street_maps: String::new(),
        },
        demonyms: [(
            "eng".to_string(),
            Demonym {
                f: "French".into(),
                m: "French".into(),
            },
        )]
        .into(),
    }
}

#[test]
fn region_card_formats_population_per_locale() {
    let c = france();

    let (en, _) = render::map_locale("en");
    let card = render::region_card(&c, en);
    assert!(card.contains("France"));
    assert!(card.contains("Region:     Europe"));
    assert!(card.contains("67,391,582"));

    let (de, _) = render::map_locale("de");
    let card = render::region_card(&c, de);
    assert!(card.contains("67.391.582"));
}

#[test]
fn demonym_card_shows_pair() {
    let (en, _) = render::map_locale("en");
    let card = render::demonym_card(&france(), en);
    assert!(card.contains("Demonym:    French / French"));

    let mut nameless = france();
    nameless.demonyms.clear();
    let card = render::demonym_card(&nameless, en);
    assert!(card.contains("Demonym:    N/A / N/A"));
}

#[test]
fn search_card_skips_missing_lines() {
    let (en, _) = render::map_locale("en");
    let partial = Country {
        name: Name {
            common: "Iceland".into(),
            official: String::new(),
        },
        ..Default::default()
    };

    let card = render::search_card(&partial, en);
    assert!(card.contains("Iceland"));
    assert!(!card.contains("Capital:"));
    assert!(!card.contains("Population:"));
    assert!(!card.contains("Region:"));
}

#[test]
fn detail_panel_renders_all_sections() {
    let view = DetailView {
        country: france(),
        shared_currency: Some(3),
        shared_language: Some(5),
        shared_capital: Some(1),
    };

    let (en, dec) = render::map_locale("en");
    let panel = render::detail_panel(&view, en, dec);

    assert!(panel.contains("France (French Republic)"));
    assert!(panel.contains("Basic Information"));
    assert!(panel.contains("Capital:    Paris"));
    assert!(panel.contains("Population: 67,391,582"));
    assert!(panel.contains("Area:       551,695 km²"));
    assert!(panel.contains("- French"));
    assert!(panel.contains("Other countries speaking French: 5 countries"));
    assert!(panel.contains("- Euro (€)"));
    assert!(panel.contains("Other countries using EUR: 3 countries"));
    assert!(panel.contains("- UTC+01:00"));
    assert!(panel.contains("Coordinates: 46, 2"));
    assert!(panel.contains("Map: https://goo.gl/maps/"));
    assert!(panel.contains("Other countries with capital \"Paris\": 1"));
}

#[test]
fn detail_panel_omits_empty_enrichments() {
    // Zero or absent counts render nothing, indistinguishable from "no
    // related records exist".
    let view = DetailView {
        country: france(),
        shared_currency: Some(0),
        shared_language: None,
        shared_capital: Some(0),
    };

    let (en, dec) = render::map_locale("en");
    let panel = render::detail_panel(&view, en, dec);

    assert!(!panel.contains("Other countries using"));
    assert!(!panel.contains("Other countries speaking"));
    assert!(!panel.contains("About the Capital"));
}

#[test]
fn detail_panel_handles_bare_record() {
    let view = DetailView {
        country: Country {
            name: Name {
                common: "Atlantis".into(),
                official: String::new(),
            },
            ..Default::default()
        },
        shared_currency: None,
        shared_language: None,
        shared_capital: None,
    };

    let (en, dec) = render::map_locale("en");
    let panel = render::detail_panel(&view, en, dec);

    assert!(panel.contains("Atlantis (N/A)"));
    assert!(panel.contains("Capital:    N/A"));
    assert!(panel.contains("Subregion:  N/A"));
    assert!(panel.contains("Area:       N/A"));
    assert!(panel.contains("Coordinates: N/A"));
    assert!(panel.contains("- N/A"));
}
