//! Helpers for turning raw query-string values into typed filters.

use time::{macros::format_description, Date};

use crate::common::error::{AppError, AppResult};

/// Parses a comma-separated list of integer ids, e.g. `"1,2,3"`.
///
/// Tokens are trimmed; any token that is not an integer (including an empty
/// one, as in `"1,,2"`) rejects the whole parameter.
pub fn parse_id_list(param: &str, raw: &str) -> AppResult<Vec<i64>> {
    raw.split(',')
        .map(|token| {
            token.trim().parse::<i64>().map_err(|_| {
                AppError::BadRequest(format!(
                    "Invalid value for '{}': '{}' is not an integer id",
                    param,
                    token.trim()
                ))
            })
        })
        .collect()
}

/// Empty parameters (`?actors=`) mean "no filter".
pub fn optional_id_list(param: &str, raw: Option<&str>) -> AppResult<Option<Vec<i64>>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_id_list(param, value).map(Some),
    }
}

pub fn optional_date(param: &str, raw: Option<&str>) -> AppResult<Option<Date>> {
    let format = format_description!("[year]-[month]-[day]");

    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Date::parse(value, format).map(Some).map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid value for '{}': expected YYYY-MM-DD, got '{}'",
                param, value
            ))
        }),
    }
}

pub fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.filter(|value| !value.is_empty()).map(str::to_string)
}

/// Builds an `ILIKE` pattern that matches `needle` anywhere, treating `%`, `_`
/// and `\` in the input literally.
pub fn contains_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn parses_ids_in_order() {
        assert_eq!(parse_id_list("actors", "1,2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_id_list("actors", "3,1,2").unwrap(), vec![3, 1, 2]);
        assert_eq!(parse_id_list("actors", "42").unwrap(), vec![42]);
    }

    #[test]
    fn parsing_is_stable_across_calls() {
        let first = parse_id_list("genres", "1,2,3").unwrap();
        let joined = first.iter().map(i64::to_string).collect::<Vec<_>>().join(",");
        assert_eq!(parse_id_list("genres", &joined).unwrap(), first);
    }

    #[test]
    fn tolerates_whitespace_around_tokens() {
        assert_eq!(parse_id_list("movie", " 1, 2 ,3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        for raw in ["1,a", "x", "1,,2", "1.5", "1,2,"] {
            let err = parse_id_list("actors", raw).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("actors")), "{raw:?}");
        }
    }

    #[test]
    fn empty_parameter_means_no_filter() {
        assert_eq!(optional_id_list("actors", None).unwrap(), None);
        assert_eq!(optional_id_list("actors", Some("")).unwrap(), None);
        assert_eq!(optional_id_list("actors", Some("7")).unwrap(), Some(vec![7]));
    }

    #[test]
    fn parses_calendar_dates() {
        let date = optional_date("date", Some("2024-05-01")).unwrap().unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), Month::May);
        assert_eq!(date.day(), 1);

        assert!(optional_date("date", Some("tomorrow")).is_err());
        assert!(optional_date("date", Some("2024-13-01")).is_err());
        assert_eq!(optional_date("date", None).unwrap(), None);
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("inter"), "%inter%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn empty_text_is_ignored() {
        assert_eq!(optional_text(Some("")), None);
        assert_eq!(optional_text(None), None);
        assert_eq!(optional_text(Some("inter")), Some("inter".to_string()));
    }
}
