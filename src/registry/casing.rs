//! Name conversions between Rust-style identifiers and the remote API.
//!
//! The Rakuten APIs use camel-cased names everywhere: `IchibaItem` path
//! segments, `Search` method segments and `itemCode` query parameters.
//! Callers use snake-case names and these helpers translate them.

/// Converts a snake-case name to camel case.
///
/// With `upper_first` the first letter is upper-cased (`ichiba_item` ->
/// `IchibaItem`), otherwise it is lower-cased (`item_code` -> `itemCode`).
/// Letters after the first one keep their case, so names that are already
/// camel-cased pass through (`getRequestId` stays `getRequestId`). A name
/// starting with two upper-case letters keeps its first letter too, so
/// `NGKeyword` is sent unchanged.
///
/// # Example
///
/// ```rust
/// use rakuten_ws::registry::camelize;
///
/// assert_eq!(camelize("item_code", false), "itemCode");
/// assert_eq!(camelize("ichiba_item", true), "IchibaItem");
/// assert_eq!(camelize("SimpleHotelSearch", true), "SimpleHotelSearch");
/// ```
#[must_use]
pub fn camelize(name: &str, upper_first: bool) -> String {
    let mut result = String::with_capacity(name.len());
    let mut upper_next = upper_first;
    let mut at_start = true;

    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' || c == '-' {
            // Separators only capitalize once something has been emitted
            upper_next = !at_start || upper_first;
            continue;
        }

        if at_start {
            if upper_first {
                result.extend(c.to_uppercase());
            } else if chars.peek().is_some_and(|next| next.is_uppercase()) {
                // Leading acronym such as `NGKeyword`
                result.push(c);
            } else {
                result.extend(c.to_lowercase());
            }
            at_start = false;
        } else if upper_next {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        upper_next = false;
    }

    result
}

/// Normalizes an operation name for lookup.
///
/// Names are lower-cased and every run of non-alphanumeric characters
/// becomes a single `_`, so `simple-search`, `Simple Search` and
/// `simple_search` all resolve to the same descriptor. Camel-case humps are
/// split as well: `getRequestId` becomes `get_request_id`.
///
/// ```rust
/// use rakuten_ws::registry::clean_name;
///
/// assert_eq!(clean_name("Simple Search"), "simple_search");
/// assert_eq!(clean_name("getRequestId"), "get_request_id");
/// ```
#[must_use]
pub fn clean_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;

    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            if c.is_uppercase() && prev_lower_or_digit {
                result.push('_');
            }
            result.extend(c.to_lowercase());
            prev_lower_or_digit = c.is_lowercase() || c.is_ascii_digit();
        } else {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            prev_lower_or_digit = false;
        }
    }

    while result.ends_with('_') {
        result.pop();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_lower_first() {
        assert_eq!(camelize("item_code", false), "itemCode");
        assert_eq!(camelize("sort", false), "sort");
        assert_eq!(camelize("min_price", false), "minPrice");
        assert_eq!(camelize("NGKeyword", false), "NGKeyword");
        assert_eq!(camelize("NGKeyword", true), "NGKeyword");
        assert_eq!(camelize("Keyword", false), "keyword");
    }

    #[test]
    fn test_camelize_upper_first() {
        assert_eq!(camelize("ichiba_item", true), "IchibaItem");
        assert_eq!(camelize("search", true), "Search");
        assert_eq!(camelize("books_foreign_book", true), "BooksForeignBook");
    }

    #[test]
    fn test_camelize_keeps_existing_humps() {
        assert_eq!(camelize("applicationId", false), "applicationId");
        assert_eq!(camelize("GetAreaClass", true), "GetAreaClass");
    }

    #[test]
    fn test_camelize_ignores_leading_and_repeated_separators() {
        assert_eq!(camelize("_item__code", false), "itemCode");
        assert_eq!(camelize("", true), "");
    }

    #[test]
    fn test_clean_name_normalizes_spelling_variants() {
        assert_eq!(clean_name("simple_search"), "simple_search");
        assert_eq!(clean_name("simple-search"), "simple_search");
        assert_eq!(clean_name("SimpleSearch"), "simple_search");
        assert_eq!(clean_name("  search  "), "search");
        assert_eq!(clean_name("get_hotel_chain_list!"), "get_hotel_chain_list");
    }
}
