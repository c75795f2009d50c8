use std::fmt::Write as _;

use nearbite_core::{Coordinate, Restaurant};

/// Render results as a numbered list, nearest first.
///
/// `radius_miles` is `None` when the results did not come from a bounded
/// search, e.g. a saved payload, and the header then omits it.
pub(crate) fn render_table(
    center: Coordinate,
    radius_miles: Option<f64>,
    restaurants: &[Restaurant],
) -> String {
    let mut out = String::new();
    let scope = match radius_miles {
        Some(radius) => format!("within {radius:.1} miles of {center}"),
        None => format!("near {center}"),
    };

    if restaurants.is_empty() {
        let _ = writeln!(out, "No restaurants found {scope}.");
        return out;
    }

    let _ = writeln!(out, "{} restaurants {scope}:", restaurants.len());
    for (idx, r) in restaurants.iter().enumerate() {
        let _ = write!(out, "{:>3}. {} ({})", idx + 1, r.name, r.distance_label());
        if !r.categories.is_empty() {
            let _ = write!(out, " [{}]", r.categories.join(", "));
        }
        out.push('\n');
        let _ = writeln!(out, "     {}", r.address);
        if let Some(phone) = &r.phone {
            let _ = writeln!(out, "     tel: {phone}");
        }
        if let Some(website) = &r.website {
            let _ = writeln!(out, "     web: {website}");
        }
    }
    out
}

/// Render results as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub(crate) fn render_json(restaurants: &[Restaurant]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(restaurants)
}
