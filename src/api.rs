//! Synchronous client for the **World Bank Indicators API (v2)**.
//!
//! This module queries the `country/all/indicator/{code}` endpoint and returns
//! results as tidy [`Observation`] rows. Pagination is handled automatically.
//! Aggregates (World, regions, income groups) are part of `country/all` and
//! are returned alongside individual countries, which is exactly what the
//! downstream table expects.
//!
//! ### Notes
//! - The API sometimes serializes `per_page` as a **string**; we accept both
//!   string/number (see `models::Meta`).
//! - There is no retry policy: a transport or decode failure propagates to the
//!   caller and terminates the run. Timeouts are configured on the client.

use crate::models::{Entry, IndicatorMeta, Meta, Observation};
use anyhow::{Context, Result, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
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
            .user_agent(concat!("sanitation_viz/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://api.worldbank.org/v2".into(),
            http,
        }
    }
}

// Allow -, _, . unescaped in codes (common for indicator ids)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(code: &str) -> String {
    percent_encoding::utf8_percent_encode(code.trim(), SAFE).to_string()
}

impl Client {
    fn get_json(&self, url: &str) -> Result<Value> {
        let resp = self
            .http
            .get(url)
            .send()
            .with_context(|| format!("GET {}", url))?;
        if !resp.status().is_success() {
            bail!("request failed with HTTP {}", resp.status());
        }
        resp.json().context("decode json")
    }

    /// Split a response into its `[Meta, payload]` halves, surfacing API-level
    /// error payloads (a `message` object in position 0) as errors.
    fn split_response(v: &Value) -> Result<(&Value, Option<&Value>)> {
        let arr = v
            .as_array()
            .ok_or_else(|| anyhow::anyhow!("unexpected response shape: not a top-level array"))?;
        if arr.is_empty() {
            bail!("unexpected response: empty array");
        }
        if arr[0].get("message").is_some() {
            bail!("world bank api error: {}", arr[0]);
        }
        Ok((&arr[0], arr.get(1)))
    }

    /// Fetch the descriptive metadata for one indicator (name, source note).
    pub fn fetch_indicator_meta(&self, indicator: &str) -> Result<IndicatorMeta> {
        let url = format!(
            "{}/indicator/{}?format=json&per_page=50",
            self.base_url,
            enc(indicator)
        );
        let v = self.get_json(&url)?;
        let (_, payload) = Self::split_response(&v)?;
        let metas: Vec<IndicatorMeta> = match payload {
            Some(p) => serde_json::from_value(p.clone()).context("parse indicator metadata")?,
            None => vec![],
        };
        metas
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("no metadata returned for indicator {}", indicator))
    }

    /// Fetch the full country/time table for one indicator.
    ///
    /// Returns one [`Observation`] per (entity, year), for every entity the
    /// API knows (countries and aggregates). Rows arrive in API order, which
    /// the caller relies on when pivoting into a table.
    ///
    /// ### Errors
    /// - Network/HTTP error
    /// - JSON decoding error
    /// - API-level error payload (surfaced as an error)
    pub fn fetch_indicator(&self, indicator: &str) -> Result<Vec<Observation>> {
        if indicator.trim().is_empty() {
            bail!("indicator code required");
        }

        let url = format!(
            "{}/country/all/indicator/{}?format=json&per_page=1000",
            self.base_url,
            enc(indicator)
        );

        // Safety cap to avoid pathological jobs
        let max_pages = 1000u32;

        let mut page = 1u32;
        let mut out: Vec<Observation> = Vec::new();
        loop {
            if page > max_pages {
                bail!("page limit exceeded ({})", max_pages);
            }
            let page_url = format!("{}&page={}", url, page);
            let v = self.get_json(&page_url)?;

            let (meta_v, payload) = Self::split_response(&v)?;
            let meta: Meta = serde_json::from_value(meta_v.clone()).context("parse meta")?;
            let entries: Vec<Entry> = match payload {
                Some(p) => serde_json::from_value(p.clone()).context("parse entries")?,
                None => vec![],
            };

            out.extend(entries.into_iter().map(Observation::from));

            if page >= meta.pages {
                break;
            }
            page += 1;
        }

        if out.is_empty() {
            bail!("indicator {} returned no observations", indicator);
        }
        Ok(out)
    }
}
