/// Strip a leading venue name from a formatted address.
///
/// `"Joe's Pizza, 1 Main St"` with name `"Joe's Pizza"` becomes `"1 Main St"`.
/// The name comparison ignores case. After the name, one comma directly
/// following it is dropped and the remainder is trimmed. When the name is not
/// a prefix the trimmed address is returned unchanged.
///
/// Matching is a plain prefix test with no word boundary, so the name
/// `"Joe's Pizza"` also strips from `"Joe's Pizzeria, ..."`.
///
/// The result is a dedup key and is never shown to users.
#[must_use]
pub fn clean_address(full_address: &str, venue_name: &str) -> String {
    let address = full_address.trim();
    let name = venue_name.trim();
    if name.is_empty() {
        return address.to_owned();
    }

    let Some(rest) = strip_prefix_ignore_case(address, name) else {
        return address.to_owned();
    };

    rest.strip_prefix(',').unwrap_or(rest).trim().to_owned()
}

/// Returns the remainder of `haystack` after `prefix`, comparing chars by
/// their lowercase forms.
fn strip_prefix_ignore_case<'a>(haystack: &'a str, prefix: &str) -> Option<&'a str> {
    let mut hay = haystack.char_indices();
    for p in prefix.chars() {
        let (_, h) = hay.next()?;
        if !h.to_lowercase().eq(p.to_lowercase()) {
            return None;
        }
    }
    let consumed = hay.next().map_or(haystack.len(), |(idx, _)| idx);
    Some(&haystack[consumed..])
}
