//! Timestamp parsing and formatting for `[hh:]mm:ss[.SSS]`-style strings.

use regex::Regex;
use std::sync::LazyLock;

static RE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d+):)?(\d+):(\d+)(?:\.(\d{1,3}))?$").unwrap());

static RE_HOUR_FLAG: LazyLock<Regex> = LazyLock::new(|| Regex::new("h+").unwrap());
static RE_MINUTE_FLAG: LazyLock<Regex> = LazyLock::new(|| Regex::new("m+").unwrap());
static RE_SECOND_FLAG: LazyLock<Regex> = LazyLock::new(|| Regex::new("s+").unwrap());
static RE_MILLI_FLAG: LazyLock<Regex> = LazyLock::new(|| Regex::new("S+").unwrap());

/// Parses a timestamp into milliseconds.
///
/// Supported forms: `hh:mm:ss`, `hh:mm:ss.SSS`, `mm:ss`, `mm:ss.SSS`.
/// The fraction is right-padded, so `.5` means 500 milliseconds. Returns
/// `None` when the total does not fit in milliseconds as `u64`.
///
/// # Example
///
/// ```
/// use respace::parse_time;
///
/// assert_eq!(parse_time("1:14:51.4"), Some(4_491_400));
/// assert_eq!(parse_time("05:30"), Some(330_000));
/// assert_eq!(parse_time("oops"), None);
/// ```
pub fn parse_time(content: &str) -> Option<u64> {
    let caps = RE_TIME.captures(content.trim())?;

    let field = |i: usize| -> u64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    let hour = field(1);
    let minute = field(2);
    let second = field(3);
    let milli: u64 = {
        let raw = caps.get(4).map(|m| m.as_str()).unwrap_or("0");
        let padded = format!("{raw:0<3}");
        padded[..3].parse().unwrap_or(0)
    };

    hour.checked_mul(60)?
        .checked_add(minute)?
        .checked_mul(60)?
        .checked_add(second)?
        .checked_mul(1000)?
        .checked_add(milli)
}

/// Checks whether the content is a parseable timestamp.
pub fn check_time(content: &str) -> bool {
    if content.trim().is_empty() {
        return false;
    }
    RE_TIME.is_match(content)
}

/// Formats a millisecond timestamp according to `format`.
///
/// Recognized flags: `hh`/`h`, `mm`/`m`, `ss`/`s`, `SSS`/`SS`/`S`. Doubled
/// flags are zero-padded. When the format carries no hour flag, hours fold
/// into the minutes field. Millisecond fields truncate (`SS` is ms/10, `S`
/// is ms/100). Negative input renders every field as `0`.
///
/// # Example
///
/// ```
/// use respace::format_time;
///
/// assert_eq!(format_time(330_000, "mm:ss.SSS"), "05:30.000");
/// assert_eq!(format_time(3_661_000, "mm:ss"), "61:01");
/// assert_eq!(format_time(3_661_000, "hh:mm:ss"), "01:01:01");
/// ```
pub fn format_time(time: i64, format: &str) -> String {
    if time < 0 {
        let result = RE_HOUR_FLAG.replace_all(format, "0");
        let result = RE_MINUTE_FLAG.replace_all(&result, "0");
        let result = RE_SECOND_FLAG.replace_all(&result, "0");
        return RE_MILLI_FLAG.replace_all(&result, "0").into_owned();
    }

    let total_seconds = time / 1000;
    let milli_seconds = time % 1000;

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut result = format.to_string();

    if result.contains("hh") {
        result = result.replace("hh", &format!("{hours:02}"));
    } else if result.contains('h') {
        result = result.replace('h', &hours.to_string());
    }

    // When no hour flag is present, hours fold into the minutes field
    let total_minutes = if !format.contains('h') {
        hours * 60 + minutes
    } else {
        minutes
    };
    if result.contains("mm") {
        result = result.replace("mm", &format!("{total_minutes:02}"));
    } else if result.contains('m') {
        result = result.replace('m', &total_minutes.to_string());
    }

    if result.contains("ss") {
        result = result.replace("ss", &format!("{seconds:02}"));
    } else if result.contains('s') {
        result = result.replace('s', &seconds.to_string());
    }

    if result.contains("SSS") {
        result = result.replace("SSS", &format!("{milli_seconds:03}"));
    } else if result.contains("SS") {
        result = result.replace("SS", &format!("{:02}", milli_seconds / 10));
    } else if result.contains('S') {
        result = result.replace('S', &(milli_seconds / 100).to_string());
    }

    result
}
