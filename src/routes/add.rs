use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, ValidationDetail};

#[derive(Debug, Serialize)]
pub struct SumResponse {
    pub sum: i128,
}

/// Query pairs are taken raw so a repeated key resolves to its last value
/// and integer parsing can report every bad parameter at once.
pub async fn add(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SumResponse>, AppError> {
    let Query(pairs) = query?;

    let a = parse_int("a", last_value(&pairs, "a"));
    let b = parse_int("b", last_value(&pairs, "b"));

    match (a, b) {
        (Ok(a), Ok(b)) => Ok(Json(SumResponse {
            sum: i128::from(a) + i128::from(b),
        })),
        (a, b) => {
            let detail: Vec<ValidationDetail> =
                [a.err(), b.err()].into_iter().flatten().collect();
            debug!(?detail, "rejected add request");
            Err(AppError::Validation(detail))
        }
    }
}

fn last_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn parse_int(name: &str, raw: Option<&str>) -> Result<i64, ValidationDetail> {
    let raw = raw.ok_or_else(|| ValidationDetail::missing(name))?;
    normalize_int(raw.trim())
        .and_then(|digits| digits.parse::<i64>().ok())
        .ok_or_else(|| ValidationDetail::not_an_integer(name, raw))
}

/// Accepts `1_000` style digit grouping and a zero-only fraction (`2.0`),
/// returning a string `i64::from_str` understands.
fn normalize_int(s: &str) -> Option<String> {
    let s = match s.split_once('.') {
        Some((whole, frac)) if !frac.is_empty() && frac.bytes().all(|b| b == b'0') => whole,
        Some(_) => return None,
        None => s,
    };

    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let grouped_ok = unsigned
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if unsigned.contains('_') && !grouped_ok {
        return None;
    }

    Some(s.replace('_', ""))
}
