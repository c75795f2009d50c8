//! Normalization from raw provider places to [`nearbite_core::Restaurant`].
//!
//! Distance, classification, and address cleaning are delegated to
//! [`crate::geo`], [`crate::classify`], and [`crate::address`]; this module
//! validates records, deduplicates, and orders the result.

use std::cmp::Ordering;
use std::collections::HashSet;

use nearbite_core::{Coordinate, Restaurant};

use crate::address::clean_address;
use crate::classify::classify;
use crate::error::PlacesError;
use crate::geo::haversine_miles;
use crate::types::RawPlace;

/// Normalizes a single [`RawPlace`] relative to `reference`.
///
/// # Errors
///
/// Returns [`PlacesError::MalformedRecord`] if the place has no usable name
/// or address.
pub fn normalize_place(raw: RawPlace, reference: Coordinate) -> Result<Restaurant, PlacesError> {
    let record_id = raw.id.clone().unwrap_or_else(|| "<no id>".to_string());

    // Treat blank strings as absent.
    let Some(name) = raw.name.filter(|s| !s.trim().is_empty()) else {
        return Err(PlacesError::MalformedRecord {
            id: record_id,
            reason: "missing name".into(),
        });
    };
    let Some(address) = raw.address.filter(|s| !s.trim().is_empty()) else {
        return Err(PlacesError::MalformedRecord {
            id: record_id,
            reason: "missing address".into(),
        });
    };

    // A lone latitude or longitude cannot place the venue, so keep the pair
    // only when both halves are usable.
    let position = match (raw.latitude, raw.longitude) {
        (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
            Some(Coordinate::new(lat, lon))
        }
        _ => None,
    };
    let distance_miles = position.map(|p| haversine_miles(reference, p));

    let classification = classify(&raw.categories);
    let cleaned_address = clean_address(&address, &name);

    let id = raw
        .id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| derived_id(&name, &cleaned_address));

    Ok(Restaurant {
        id,
        name,
        address,
        cleaned_address,
        distance_miles,
        latitude: position.map(|p| p.latitude),
        longitude: position.map(|p| p.longitude),
        categories: classification.labels,
        icon: classification.icon.to_string(),
        phone: raw.phone.filter(|s| !s.trim().is_empty()),
        website: raw.website.filter(|s| !s.trim().is_empty()),
    })
}

/// Normalizes a provider response into a deduplicated, distance-ordered list.
///
/// Records without a name or address are dropped. Of several records
/// sharing the same `(name, cleaned_address)`, the first in input order is
/// kept. The result is sorted by ascending distance with unknown distances
/// last; equal distances keep input order.
#[must_use]
pub fn normalize_places(raw_places: Vec<RawPlace>, reference: Coordinate) -> Vec<Restaurant> {
    let total = raw_places.len();
    let mut malformed = 0usize;
    let mut duplicates = 0usize;

    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(total);
    let mut ids: HashSet<String> = HashSet::with_capacity(total);
    let mut restaurants = Vec::with_capacity(total);

    for raw in raw_places {
        let mut restaurant = match normalize_place(raw, reference) {
            Ok(r) => r,
            Err(err) => {
                malformed += 1;
                tracing::debug!(error = %err, "dropping malformed place");
                continue;
            }
        };

        let key = (restaurant.name.clone(), restaurant.cleaned_address.clone());
        if !seen.insert(key) {
            duplicates += 1;
            tracing::debug!(
                id = %restaurant.id,
                name = %restaurant.name,
                cleaned_address = %restaurant.cleaned_address,
                "dropping duplicate place"
            );
            continue;
        }

        // Providers occasionally repeat a place_id across distinct venues.
        if ids.contains(&restaurant.id) {
            let replacement = derived_id(&restaurant.name, &restaurant.cleaned_address);
            tracing::debug!(
                id = %restaurant.id,
                replacement = %replacement,
                "provider id already used in this result set"
            );
            restaurant.id = replacement;
        }
        ids.insert(restaurant.id.clone());

        restaurants.push(restaurant);
    }

    // `sort_by` is stable, which keeps ties in input order.
    restaurants.sort_by(|a, b| compare_distance(a.distance_miles, b.distance_miles));

    tracing::debug!(
        total,
        kept = restaurants.len(),
        malformed,
        duplicates,
        "normalized place results"
    );

    restaurants
}

/// Orders known distances ascending, with unknown distances after all known ones.
fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable ID for places the provider sent without one, or sent with an id
/// already taken in the same result set. Distinct per kept record because
/// the inputs are the dedup key.
fn derived_id(name: &str, cleaned_address: &str) -> String {
    use sha2::{Digest, Sha256};
    let input = format!("{name}\x00{cleaned_address}");
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
