/*!
Commands that wait on the network: `weather`, `neofetch`, `curl`.

Failure handling differs per command:
  - neofetch: non-2xx and transport errors become `Error: ...` text
  - curl:     any failure becomes `curl: could not fetch URL ...` text
  - weather:  fetch errors propagate to the caller as a handler fault

No timeout or retry here; `HttpFetcher` applies `http_timeout_secs` if set.
*/

use anyhow::Context;
use url::Url;

use super::dispatcher::{CommandFuture, Dispatcher};
use crate::host::resolve_url;

pub const WEATHER_USAGE: &str = "Usage: weather [city]. Example: weather Brussels";
pub const NEOFETCH_UNAVAILABLE: &str = "Error: Unable to fetch neofetch output.";
pub const CURL_NO_URL: &str = "curl: no URL provided";

/// `{endpoint}/{city}?ATm` (ANSI off, terminal-narrow, metric).
pub fn weather_url(endpoint: &str, city: &str) -> anyhow::Result<Url> {
    let raw = format!("{}/{city}?ATm", endpoint.trim_end_matches('/'));
    Url::parse(&raw).with_context(|| format!("invalid weather URL: {raw}"))
}

pub fn weather<'a>(d: &'a Dispatcher, args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(async move {
        let city = args.join("+");
        if city.is_empty() {
            return Ok(WEATHER_USAGE.to_string());
        }
        let url = weather_url(&d.services().config.weather_endpoint, &city)?;
        let response = d.services().fetcher.get(&url).await?;
        Ok(response.body)
    })
}

pub fn neofetch<'a>(d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(async move {
        let services = d.services();
        let url = match resolve_url(&services.origin, &services.config.neofetch_path) {
            Ok(url) => url,
            Err(e) => return Ok(format!("Error: {e}")),
        };
        match services.fetcher.get(&url).await {
            Ok(r) if r.is_success() => Ok(r.body),
            Ok(r) => {
                tracing::warn!(%url, status = r.status, "neofetch endpoint refused");
                Ok(NEOFETCH_UNAVAILABLE.to_string())
            }
            Err(e) => Ok(format!("Error: {e}")),
        }
    })
}

pub fn curl<'a>(d: &'a Dispatcher, args: &'a [String]) -> CommandFuture<'a> {
    Box::pin(async move {
        let Some(target) = args.first() else {
            return Ok(CURL_NO_URL.to_string());
        };
        let services = d.services();
        let fetched = async {
            let url = resolve_url(&services.origin, target)?;
            let response = services.fetcher.get(&url).await?;
            anyhow::Ok(response.body)
        }
        .await;

        Ok(fetched.unwrap_or_else(|e| {
            format!("curl: could not fetch URL {target}. Details: {e:#}")
        }))
    })
}
