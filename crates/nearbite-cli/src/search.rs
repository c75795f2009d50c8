//! Command handlers for `search` and `normalize`.

use anyhow::Context;
use nearbite_core::AppConfig;
use nearbite_places::types::PlacesResponse;
use nearbite_places::{normalize_places, GeoapifyClient, NominatimClient, SearchOrchestrator};

use crate::output::{render_json, render_table};
use crate::{NormalizeArgs, SearchArgs};

/// Run a live search against the configured place provider.
///
/// # Errors
///
/// Returns an error if the API key is missing, a client cannot be built, the
/// city cannot be geocoded, or the provider call fails.
pub(crate) async fn run_search(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let api_key = config
        .require_geoapify_api_key()
        .context("live search needs an API key; add it to the environment or .env")?;
    let radius_miles = args.radius.unwrap_or(config.default_radius_miles);

    let places = GeoapifyClient::with_base_url(
        api_key,
        config.request_timeout_secs,
        &config.user_agent,
        config.result_limit,
        &config.places_base_url,
    )
    .context("building place search client")?;
    let orchestrator = SearchOrchestrator::new(places);

    let (center, restaurants) = match (args.near, args.city) {
        (Some(near), _) => (near, orchestrator.search(near, radius_miles).await?),
        (None, Some(city)) => {
            let geocoder = NominatimClient::with_base_url(
                config.request_timeout_secs,
                &config.user_agent,
                &config.geocoder_base_url,
            )
            .context("building geocoder client")?;
            let found = orchestrator
                .search_city(&geocoder, &city, radius_miles)
                .await?;
            (found.center, found.restaurants)
        }
        (None, None) => anyhow::bail!("either --near or --city is required"),
    };

    if args.json {
        println!("{}", render_json(&restaurants)?);
    } else {
        print!("{}", render_table(center, Some(radius_miles), &restaurants));
    }
    Ok(())
}

/// Normalize a saved provider response from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a places response.
pub(crate) fn run_normalize(args: &NormalizeArgs) -> anyhow::Result<()> {
    let body = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let response: PlacesResponse = serde_json::from_str(&body)
        .with_context(|| format!("parsing {} as a places response", args.file.display()))?;

    let restaurants = normalize_places(response.into_raw_places(), args.near);

    if args.json {
        println!("{}", render_json(&restaurants)?);
    } else {
        print!("{}", render_table(args.near, None, &restaurants));
    }
    Ok(())
}
