use crate::models::Country;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a country listing as CSV with header. Multi-valued fields
/// (capitals, currency codes, languages, timezones) are joined with `;`.
pub fn save_csv<P: AsRef<Path>>(countries: &[Country], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("name","official_name","region","subregion","population","area","capitals","currencies","languages","timezones"))?;
    for c in countries {
        wtr.serialize((
            &c.name.common,
            &c.name.official,
            &c.region,
            &c.subregion,
            c.population,
            c.area,
            c.capital.join(";"),
            c.currencies.keys().cloned().collect::<Vec<_>>().join(";"),
            c.languages.values().cloned().collect::<Vec<_>>().join(";"),
            c.timezones.join(";"),
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a country listing as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(countries: &[Country], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(countries)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Country, Currency, Name};
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let countries = vec![Country {
            name: Name {
                common: "Germany".into(),
                official: "Federal Republic of Germany".into(),
            },
            region: "Europe".into(),
            subregion: Some("Western Europe".into()),
            population: 83_000_000,
            area: Some(357_114.0),
            capital: vec!["Berlin".into()],
            currencies: [(
                "EUR".to_string(),
                Currency {
                    name: "Euro".into(),
                    symbol: Some("€".into()),
                },
            )]
            .into(),
            languages: [("deu".to_string(), "German".to_string())].into(),
            timezones: vec!["UTC+01:00".into()],
            ..Default::default()
        }];
        save_csv(&countries, &csvp).unwrap();
        save_json(&countries, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());

        let csv_text = std::fs::read_to_string(&csvp).unwrap();
        assert!(csv_text.contains("Germany"));
        assert!(csv_text.contains("EUR"));
    }
}
