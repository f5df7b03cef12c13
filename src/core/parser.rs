//! Recovers the day's tariff periods from the HDO bar markup.
//!
//! The markup renders each period as two sibling elements: a tariff marker
//! (`class="hdont"` or `class="hdovt"`) and a tooltip (`title="HH:MM - HH:MM"`).
//! Both sequences are collected independently and then zipped by position.

use chrono::NaiveTime;
use itertools::Itertools;
use thiserror::Error;

use crate::{
    core::{period::Period, tariff::TariffKind},
    prelude::*,
};

const MARKER_PREFIX: &str = r#"class="hdo"#;
const TITLE_PREFIX: &str = r#"title=""#;

/// Length of `HH:MM - HH:MM"` including the closing quote.
const TIME_RANGE_LENGTH: usize = 14;

#[derive(Debug, Error, Eq, PartialEq)]
#[error("invalid wall-clock time `{0}`")]
pub struct ParseError(pub String);

/// Parse the markup into periods in document order.
///
/// Unrecognized markup, or markup where the marker and time range counts differ,
/// yields an empty list. A time range that looks like `HH:MM` but does not denote
/// a valid time fails the whole document.
#[instrument(skip_all, fields(len = markup.len()))]
pub fn parse(markup: &str) -> Result<Vec<Period>, ParseError> {
    let tariffs = tariff_markers(markup).collect_vec();
    let time_ranges = time_ranges(markup).collect_vec();
    debug!(n_markers = tariffs.len(), n_time_ranges = time_ranges.len(), "scanned");

    if tariffs.is_empty() || time_ranges.is_empty() {
        return Ok(Vec::new());
    }
    if tariffs.len() != time_ranges.len() {
        warn!(
            n_markers = tariffs.len(),
            n_time_ranges = time_ranges.len(),
            "tariff markers and time ranges are misaligned, ignoring the markup",
        );
        return Ok(Vec::new());
    }

    let periods: Vec<Period> = tariffs
        .into_iter()
        .zip(time_ranges)
        .map(|(tariff, (start, end))| -> Result<Period, ParseError> {
            Ok(Period::new(tariff, parse_wall_time(start)?, parse_wall_time(end)?))
        })
        .collect::<Result<_, _>>()?;

    if !periods.is_sorted_by_key(|period| period.start) {
        warn!(?periods, "periods are not ordered by the start time");
    }
    Ok(periods)
}

/// Parse strict 24-hour `HH:MM`.
pub fn parse_wall_time(text: &str) -> Result<NaiveTime, ParseError> {
    if !is_wall_time_shaped(text) {
        return Err(ParseError(text.to_owned()));
    }
    NaiveTime::parse_from_str(text, "%H:%M").map_err(|_| ParseError(text.to_owned()))
}

fn tariff_markers(markup: &str) -> impl Iterator<Item = TariffKind> {
    markup.match_indices(MARKER_PREFIX).filter_map(|(index, _)| {
        match markup.get(index + MARKER_PREFIX.len()..)?.as_bytes() {
            [b'n', b't', b'"', ..] => Some(TariffKind::Low),
            [b'v', b't', b'"', ..] => Some(TariffKind::High),
            _ => None,
        }
    })
}

fn time_ranges(markup: &str) -> impl Iterator<Item = (&str, &str)> {
    markup.match_indices(TITLE_PREFIX).filter_map(|(index, _)| {
        let candidate = markup.get(index + TITLE_PREFIX.len()..)?.get(..TIME_RANGE_LENGTH)?;
        if !candidate.is_ascii() {
            return None;
        }
        let (start, rest) = candidate.split_at(5);
        let (separator, rest) = rest.split_at(3);
        let (end, quote) = rest.split_at(5);
        let is_time_range = is_wall_time_shaped(start)
            && (separator == " - ")
            && is_wall_time_shaped(end)
            && (quote == "\"");
        is_time_range.then_some((start, end))
    })
}

fn is_wall_time_shaped(text: &str) -> bool {
    matches!(
        text.as_bytes(),
        [h1, h2, b':', m1, m2] if [h1, h2, m1, m2].iter().all(|digit| digit.is_ascii_digit())
    )
}
