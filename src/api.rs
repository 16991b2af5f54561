/// Synchronous client for the **REST Countries API (v3.1)**.
///
/// Thin adapter over the public endpoints this crate uses: exact-name,
/// region, currency, language, capital, demonym, and the generic
/// field-filtered search. Every endpoint returns a JSON array of country
/// objects; a 404 means "no match" and is mapped to an empty list rather
/// than an error.
///
/// ### Notes
/// - Responses from `?fields=...` queries are partial objects; the models
///   tolerate any missing field.
/// - Network timeouts use a sane default (30s) and can be adjusted by
///   editing the client builder. There is no retry: every user action is
///   a one-shot request/render cycle.
///
/// Typical usage:
/// ```no_run
/// # use rce_rs::Client;
/// let client = Client::default();
/// let countries = client.by_region("europe")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
use crate::details::LookupProvider;
use crate::models::Country;
use anyhow::{Context, Result, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("rce_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://restcountries.com/v3.1".into(),
            http,
        }
    }
}

// Allow -, _, . unescaped; spaces in names like "Costa Rica" get encoded.
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(part: &str) -> String {
    percent_encoding::utf8_percent_encode(part.trim(), SAFE).to_string()
}

fn enc_join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(enc)
        .collect::<Vec<_>>()
        .join(",")
}

impl Client {
    /// GET a country array from `url`.
    ///
    /// The API signals "no match" with HTTP 404 and a small status object;
    /// that becomes `Ok(vec![])`. Any other non-success status is an error.
    fn get_countries(&self, url: &str) -> Result<Vec<Country>> {
        let resp = self
            .http
            .get(url)
            .send()
            .with_context(|| format!("GET {url}"))?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !resp.status().is_success() {
            bail!("request failed with HTTP {}", resp.status());
        }
        resp.json().context("decode json")
    }

    /// Exact-match lookup by common name (`/name/{name}?fullText=true`).
    pub fn by_name_exact(&self, name: &str) -> Result<Vec<Country>> {
        let url = format!("{}/name/{}?fullText=true", self.base_url, enc(name));
        self.get_countries(&url)
    }

    /// All countries of a region (`/region/{region}`), e.g. `europe`.
    pub fn by_region(&self, region: &str) -> Result<Vec<Country>> {
        let url = format!("{}/region/{}", self.base_url, enc(region));
        self.get_countries(&url)
    }

    /// All countries using a currency code (`/currency/{code}`), e.g. `EUR`.
    pub fn by_currency(&self, code: &str) -> Result<Vec<Country>> {
        let url = format!("{}/currency/{}", self.base_url, enc(code));
        self.get_countries(&url)
    }

    /// All countries speaking a language (`/lang/{language}`); the API
    /// accepts both display names (`French`) and codes (`fra`).
    pub fn by_language(&self, language: &str) -> Result<Vec<Country>> {
        let url = format!("{}/lang/{}", self.base_url, enc(language));
        self.get_countries(&url)
    }

    /// All countries with a matching capital city (`/capital/{name}`).
    pub fn by_capital(&self, name: &str) -> Result<Vec<Country>> {
        let url = format!("{}/capital/{}", self.base_url, enc(name));
        self.get_countries(&url)
    }

    /// All countries with a matching demonym (`/demonym/{demonym}`).
    pub fn by_demonym(&self, demonym: &str) -> Result<Vec<Country>> {
        let url = format!("{}/demonym/{}", self.base_url, enc(demonym));
        self.get_countries(&url)
    }

    /// Generic field-filtered query: `/{service}?fields={fields}`.
    ///
    /// ### Arguments
    /// - `service`: endpoint path, possibly multi-segment
    ///   (`"all"`, `"region/europe"`, `"subregion/Northern Europe"`).
    /// - `fields`: field names to project (`["name", "capital", ...]`).
    ///
    /// ### Example
    /// ```no_run
    /// # use rce_rs::Client;
    /// let client = Client::default();
    /// let partial = client.search("region/europe", &["name".into(), "capital".into()])?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn search(&self, service: &str, fields: &[String]) -> Result<Vec<Country>> {
        if fields.is_empty() {
            bail!("at least one field required");
        }
        let path = service
            .trim_matches('/')
            .split('/')
            .map(enc)
            .collect::<Vec<_>>()
            .join("/");
        let url = format!(
            "{}/{}?fields={}",
            self.base_url,
            path,
            enc_join(fields.iter().map(|s| s.as_str()))
        );
        self.get_countries(&url)
    }

    /// Run an attribute lookup and absorb any failure into an empty list,
    /// keeping a warn-level trace of what was lost.
    fn lookup_or_empty(&self, what: &str, key: &str, res: Result<Vec<Country>>) -> Vec<Country> {
        res.unwrap_or_else(|e| {
            log::warn!("{what} lookup for {key:?} degraded to empty: {e:#}");
            Vec::new()
        })
    }
}

impl LookupProvider for Client {
    fn lookup_exact(&self, name: &str) -> Result<Vec<Country>> {
        self.by_name_exact(name)
    }

    fn lookup_by_currency(&self, code: &str) -> Vec<Country> {
        self.lookup_or_empty("currency", code, self.by_currency(code))
    }

    fn lookup_by_language(&self, language: &str) -> Vec<Country> {
        self.lookup_or_empty("language", language, self.by_language(language))
    }

    fn lookup_by_capital(&self, name: &str) -> Vec<Country> {
        self.lookup_or_empty("capital", name, self.by_capital(name))
    }
}
