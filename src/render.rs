//! Text rendering for country listings and the detail panel.
//!
//! This is the display sink of the crate: listings become one "card" per
//! country, a [`DetailView`] becomes a multi-section panel. Numbers are
//! formatted with locale-aware grouping separators (`67,390,000` vs
//! `67.390.000`).

use crate::details::{DetailView, SecondaryKeys};
use crate::models::Country;
use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Format an area value with grouping separators; up to two decimals,
/// trailing zeros trimmed.
fn fmt_area(area: f64, locale: &Locale, dec: char) -> String {
    let rounded = (area * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let mut out = whole.to_formatted_string(locale);
    let frac = ((rounded - rounded.trunc()) * 100.0).round() as u64;
    if frac > 0 {
        out.push(dec);
        let two = format!("{frac:02}");
        out.push_str(two.trim_end_matches('0'));
    }
    out
}

fn or_na(s: &str) -> &str {
    if s.is_empty() { "N/A" } else { s }
}

/// Card for a region listing: name, region, population.
pub fn region_card(c: &Country, locale: &Locale) -> String {
    format!(
        "{}\n  Region:     {}\n  Population: {}\n",
        or_na(&c.name.common),
        or_na(&c.region),
        c.population.to_formatted_string(locale)
    )
}

/// Card for a demonym listing: adds the English demonym pair (m / f).
pub fn demonym_card(c: &Country, locale: &Locale) -> String {
    let (m, f) = match c.demonym_eng() {
        Some(d) => (or_na(&d.m).to_string(), or_na(&d.f).to_string()),
        None => ("N/A".into(), "N/A".into()),
    };
    format!(
        "{}\n  Demonym:    {} / {}\n  Region:     {}\n  Population: {}\n",
        or_na(&c.name.common),
        m,
        f,
        or_na(&c.region),
        c.population.to_formatted_string(locale)
    )
}

/// Card for a field-filtered search result. Every line except the name is
/// optional because the records may be partial projections.
pub fn search_card(c: &Country, locale: &Locale) -> String {
    let mut out = format!("{}\n", or_na(&c.name.common));
    if let Some(capital) = c.capital.first() {
        out.push_str(&format!("  Capital:    {capital}\n"));
    }
    if c.population > 0 {
        out.push_str(&format!(
            "  Population: {}\n",
            c.population.to_formatted_string(locale)
        ));
    }
    if !c.region.is_empty() {
        out.push_str(&format!("  Region:     {}\n", c.region));
    }
    out
}

/// Render a [`DetailView`] as the full detail panel.
///
/// Section order and conditional lines mirror the card/detail UI: basic
/// facts, languages, currencies, timezones, location, and (only when the
/// related lookup matched something) a closing capital section.
pub fn detail_panel(view: &DetailView, locale: &Locale, dec: char) -> String {
    let c = &view.country;
    let keys = SecondaryKeys::derive(c);
    let mut out = String::new();

    out.push_str(&format!("{} ({})\n", c.name.common, or_na(&c.name.official)));
    if !c.flags.png.is_empty() {
        out.push_str(&format!("Flag: {}\n", c.flags.png));
    }

    out.push_str("\nBasic Information\n");
    out.push_str(&format!(
        "  Capital:    {}\n",
        c.capital.first().map(String::as_str).unwrap_or("N/A")
    ));
    out.push_str(&format!("  Region:     {}\n", or_na(&c.region)));
    out.push_str(&format!(
        "  Subregion:  {}\n",
        c.subregion.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "  Population: {}\n",
        c.population.to_formatted_string(locale)
    ));
    match c.area {
        Some(area) => out.push_str(&format!("  Area:       {} km²\n", fmt_area(area, locale, dec))),
        None => out.push_str("  Area:       N/A\n"),
    }

    out.push_str("\nLanguages\n");
    if c.languages.is_empty() {
        out.push_str("  - N/A\n");
    } else {
        for lang in c.languages.values() {
            out.push_str(&format!("  - {lang}\n"));
        }
    }
    if let (Some(n), Some(lang)) = (view.shared_language, keys.language.as_deref()) {
        if n > 0 {
            out.push_str(&format!("  Other countries speaking {lang}: {n} countries\n"));
        }
    }

    out.push_str("\nCurrencies\n");
    if c.currencies.is_empty() {
        out.push_str("  - N/A\n");
    } else {
        for cur in c.currencies.values() {
            out.push_str(&format!(
                "  - {} ({})\n",
                cur.name,
                cur.symbol.as_deref().unwrap_or("N/A")
            ));
        }
    }
    if let (Some(n), Some(code)) = (view.shared_currency, keys.currency.as_deref()) {
        if n > 0 {
            out.push_str(&format!("  Other countries using {code}: {n} countries\n"));
        }
    }

    out.push_str("\nTimezones\n");
    for tz in &c.timezones {
        out.push_str(&format!("  - {tz}\n"));
    }

    out.push_str("\nLocation\n");
    if c.latlng.is_empty() {
        out.push_str("  Coordinates: N/A\n");
    } else {
        let coords = c
            .latlng
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("  Coordinates: {coords}\n"));
    }
    if !c.maps.google_maps.is_empty() {
        out.push_str(&format!("  Map: {}\n", c.maps.google_maps));
    }

    if let (Some(n), Some(city)) = (view.shared_capital, keys.capital.as_deref()) {
        if n > 0 {
            out.push_str(&format!(
                "\nAbout the Capital\n  Other countries with capital \"{city}\": {n}\n"
            ));
        }
    }

    out
}
