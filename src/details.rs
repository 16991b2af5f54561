/// Detail aggregation for a single country.
///
/// Resolves a country by exact name, derives up to three related-lookup
/// keys from the record (a currency code, a language name, a capital
/// name), runs the related lookups concurrently, and merges everything
/// into a [`DetailView`].
///
/// The related lookups are best-effort: any of them failing, returning a
/// malformed payload, or matching nothing degrades to an empty result and
/// never fails the view. Only the primary exact-name lookup can error.
///
/// Typical usage:
/// ```no_run
/// # use rce_rs::{Client, details};
/// let client = Client::default();
/// let view = details::get_details(&client, "France")?;
/// # Ok::<(), rce_rs::details::DetailError>(())
/// ```
use crate::models::Country;
use anyhow::Result;
use thiserror::Error;

/// Display cap for the shared-currency and shared-language counts.
/// The shared-capital count is deliberately uncapped.
pub const SHARED_DISPLAY_CAP: usize = 5;

/// The lookups the aggregator needs from a data source.
///
/// `lookup_exact` is the only fallible method: its transport failure is
/// the one error this module propagates. The three attribute lookups are
/// infallible by signature; an implementation must translate transport
/// failure or an undecodable payload into an empty list.
pub trait LookupProvider {
    /// Exact-match lookup by canonical common name. Returns an empty list
    /// when no country matches.
    fn lookup_exact(&self, name: &str) -> Result<Vec<Country>>;
    /// All countries using the given currency code.
    fn lookup_by_currency(&self, code: &str) -> Vec<Country>;
    /// All countries speaking the given language (display name or code).
    fn lookup_by_language(&self, language: &str) -> Vec<Country>;
    /// All countries whose capital matches the given city name.
    fn lookup_by_capital(&self, name: &str) -> Vec<Country>;
}

/// Error from [`get_details`].
#[derive(Debug, Error)]
pub enum DetailError {
    /// The exact-name lookup matched nothing.
    #[error("Country not found")]
    NotFound,
    /// The exact-name lookup itself failed (network, HTTP, decode).
    #[error(transparent)]
    Lookup(#[from] anyhow::Error),
}

/// Keys for the three related lookups, each present only when the source
/// record carries usable data for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondaryKeys {
    /// First currency code of the record.
    pub currency: Option<String>,
    /// Display name of the record's first language.
    pub language: Option<String>,
    /// First capital city of the record.
    pub capital: Option<String>,
}

impl SecondaryKeys {
    /// Derive the related-lookup keys from a country record.
    ///
    /// Tie-break rule: the record's mappings iterate in ascending code
    /// order (see [`Country`]), so "first" means the lexicographically
    /// smallest currency/language code; the capital is the first entry of
    /// the capital list. Empty strings count as absent.
    pub fn derive(country: &Country) -> Self {
        Self {
            currency: country.currencies.keys().find(|c| !c.is_empty()).cloned(),
            language: country.languages.values().find(|l| !l.is_empty()).cloned(),
            capital: country.capital.iter().find(|c| !c.is_empty()).cloned(),
        }
    }
}

/// The merged detail view: the resolved record plus one related-country
/// count per key that was present on it.
///
/// A count of `None` means the record had no source data for that key;
/// `Some(0)` means the key existed but the related lookup matched nothing
/// (or degraded). Currency and language counts are capped at
/// [`SHARED_DISPLAY_CAP`]; the capital count is not.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub country: Country,
    pub shared_currency: Option<usize>,
    pub shared_language: Option<usize>,
    pub shared_capital: Option<usize>,
}

/// Resolve `name` and enrich it with related-country counts.
///
/// ### Algorithm
/// 1. Exact-match lookup for `name`. Zero matches →
///    [`DetailError::NotFound`]; a transport failure propagates. More
///    than one match is a provider contract violation: logged, first
///    record taken.
/// 2. Derive [`SecondaryKeys`]; absent source data means no lookup and no
///    network call for that key.
/// 3. Run the present related lookups concurrently on scoped threads and
///    join all of them. One slow lookup only costs its own latency, not
///    the sum.
/// 4. Assemble the [`DetailView`] counts.
///
/// ### Errors
/// Only from step 1. Related lookups never error (see [`LookupProvider`]).
pub fn get_details<P>(provider: &P, name: &str) -> Result<DetailView, DetailError>
where
    P: LookupProvider + Sync,
{
    let matches = provider.lookup_exact(name)?;
    if matches.len() > 1 {
        log::warn!(
            "exact-name lookup for {:?} returned {} records, using the first",
            name,
            matches.len()
        );
    }
    let country = matches.into_iter().next().ok_or(DetailError::NotFound)?;

    let keys = SecondaryKeys::derive(&country);

    // Fan out the present lookups, then join all three. A panicking
    // provider degrades that branch to "absent" like any other failure.
    let (currency, language, capital) = std::thread::scope(|s| {
        let currency = s.spawn(|| {
            keys.currency
                .as_deref()
                .map(|code| provider.lookup_by_currency(code))
        });
        let language = s.spawn(|| {
            keys.language
                .as_deref()
                .map(|lang| provider.lookup_by_language(lang))
        });
        let capital = s.spawn(|| {
            keys.capital
                .as_deref()
                .map(|city| provider.lookup_by_capital(city))
        });
        (
            currency.join().unwrap_or_default(),
            language.join().unwrap_or_default(),
            capital.join().unwrap_or_default(),
        )
    });

    Ok(DetailView {
        country,
        shared_currency: currency.map(|c| c.len().min(SHARED_DISPLAY_CAP)),
        shared_language: language.map(|c| c.len().min(SHARED_DISPLAY_CAP)),
        shared_capital: capital.map(|c| c.len()),
    })
}
