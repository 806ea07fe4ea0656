//! Coercion of request strings (query parameters, path segments) into numbers.
//!
//! Clients have always been allowed to send anything as `page` or as a ride
//! id. Instead of rejecting malformed values, they are coerced the way a
//! JavaScript `Number(..)` call would: surrounding whitespace is ignored, an
//! empty string is `0`, and anything else that is not a decimal number is NaN.
//! NaN then flows into the page arithmetic, where it means "no paging".

/// Rows per page for the list endpoint. `lastPage` is always computed with
/// this value, whatever page size the store was queried with.
pub const PAGE_SIZE: i64 = 10;

/// Page assumed when the client does not send one.
pub const DEFAULT_PAGE: f64 = 1.0;

/// Coerce a string to a number with JavaScript `Number()` rules.
///
/// Hexadecimal/octal/binary literals are not recognised and yield NaN.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust's float parser also accepts "inf" and "nan", which JS does not.
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

/// Row offset for `page`, or `None` when the store should return every row.
///
/// Only pages above 0 are paged (NaN never is). The offset is computed on the
/// unrounded page, truncated, and never negative: page `0.5` starts at row 0,
/// page `2.5` at row 15.
pub fn page_offset(page: f64, page_size: i64) -> Option<i64> {
    if page.is_nan() || page <= 0.0 {
        return None;
    }
    let offset = (page_size as f64 * (page - 1.0)).trunc().max(0.0);
    Some(offset as i64)
}

/// The page the client asked for, read from raw query pairs.
///
/// `page` sent more than once, or in bracket form (`page[]=1`), is a list
/// rather than a number and coerces to NaN.
pub fn page_from_query(pairs: &[(String, String)]) -> f64 {
    let mut values = pairs
        .iter()
        .filter(|(key, _)| key == "page" || key.starts_with("page["));
    match (values.next(), values.next()) {
        (None, _) => DEFAULT_PAGE,
        (Some((key, value)), None) if key == "page" => parse_number(value),
        _ => f64::NAN,
    }
}

/// Number of the last page for `items_count` rows.
pub fn last_page(items_count: i64) -> i64 {
    if items_count <= 0 {
        return 0;
    }
    (items_count + PAGE_SIZE - 1) / PAGE_SIZE
}

/// A ride id from a path segment. Only integral values can match a row.
pub fn ride_id(raw: &str) -> Option<i64> {
    let n = parse_number(raw);
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}
