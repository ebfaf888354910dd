//! Timestamp converter
//!
//! Resolves heterogeneous input to a [`NaiveDateTime`]:
//!
//! - `null` stays `null`
//! - numbers are seconds since the Unix epoch, rendered in local time
//! - strings are parsed with an explicit format, or else with each of the
//!   known [`TimeFormat`]s in priority order
//! - datetimes are already converted and pass through

use crate::foundation::{CoerceOptions, ConversionError, Convert};
use crate::value::{Value, ValueKind};
use chrono::format::{ParseErrorKind, ParseResult, Parsed, StrftimeItems};
use chrono::{Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use std::borrow::Cow;

// ============================================================================
// KNOWN FORMATS
// ============================================================================

/// The formats tried, in this order, when no explicit format is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeFormat {
    /// `2024/01/31 13:45:00`
    DateAndTime,
    /// `2024-01-31T13:45:00`
    Iso8601,
    /// `Wed, 31 Jan 2024 13:45:00 GMT`
    Http,
}

impl TimeFormat {
    /// Every known format, in priority order.
    pub const ALL: [TimeFormat; 3] = [TimeFormat::DateAndTime, TimeFormat::Iso8601, TimeFormat::Http];

    /// Returns the strftime-style pattern of this format.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            TimeFormat::DateAndTime => "%Y/%m/%d %H:%M:%S",
            TimeFormat::Iso8601 => "%Y-%m-%dT%H:%M:%S",
            TimeFormat::Http => "%a, %d %b %Y %H:%M:%S GMT",
        }
    }

    pub fn iter() -> impl Iterator<Item = TimeFormat> {
        Self::ALL.into_iter()
    }
}

// ============================================================================
// PARSER
// ============================================================================

/// How a string is matched against several candidate formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disambiguation {
    /// Stop at the first candidate that parses.
    #[default]
    FirstMatch,
    /// Try every candidate; fail if two of them disagree.
    Strict,
}

/// Multi-format timestamp parser.
///
/// # Examples
///
/// ```
/// use strata_validator::converters::TimestampParser;
/// use strata_validator::value::Value;
///
/// let parser = TimestampParser::new();
/// let parsed = parser.parse(&Value::from("1994/11/06 08:49:37"), None).unwrap();
/// assert!(parsed.as_datetime().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct TimestampParser {
    formats: Vec<Cow<'static, str>>,
    mode: Disambiguation,
}

impl Default for TimestampParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampParser {
    /// Creates a first-match parser over the known [`TimeFormat`]s.
    #[must_use]
    pub fn new() -> Self {
        Self::with_formats(TimeFormat::iter().map(TimeFormat::pattern))
    }

    /// Creates a parser over a custom list of candidate formats.
    pub fn with_formats<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
            mode: Disambiguation::FirstMatch,
        }
    }

    /// Appends a candidate format with the lowest priority.
    #[must_use = "builder methods must be chained or built"]
    pub fn push_format(mut self, format: impl Into<Cow<'static, str>>) -> Self {
        self.formats.push(format.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn disambiguation(mut self, mode: Disambiguation) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for [`Disambiguation::Strict`].
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(self) -> Self {
        self.disambiguation(Disambiguation::Strict)
    }

    #[must_use]
    pub fn mode(&self) -> Disambiguation {
        self.mode
    }

    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.formats.iter().map(AsRef::as_ref)
    }

    /// Converts a value to a datetime.
    ///
    /// Inputs the parser has no rule for (booleans, lists, maps) are returned
    /// unchanged; they fail type validation downstream.
    pub fn parse(&self, value: &Value, format: Option<&str>) -> Result<Value, ConversionError> {
        match value {
            Value::Null | Value::DateTime(_) => Ok(value.clone()),
            Value::Int(secs) => from_epoch_parts(*secs, 0, *secs as f64).map(Value::DateTime),
            Value::Float(secs) => from_epoch_seconds(*secs).map(Value::DateTime),
            Value::String(s) => match format {
                Some(format) => parse_with_format(s, format).map(Value::DateTime),
                None => self.parse_str(s).map(Value::DateTime),
            },
            _ if format.is_some() => Err(ConversionError::Unsupported {
                converter: "timestamp",
                found: value.kind(),
            }),
            _ => Ok(value.clone()),
        }
    }

    /// Parses a string against the candidate formats.
    pub fn parse_str(&self, input: &str) -> Result<NaiveDateTime, ConversionError> {
        let mut previous: Option<NaiveDateTime> = None;

        for format in &self.formats {
            match parse_with_format(input, format) {
                Ok(current) => match (self.mode, previous) {
                    (Disambiguation::FirstMatch, _) => return Ok(current),
                    (Disambiguation::Strict, Some(prev)) if prev != current => {
                        return Err(ConversionError::Conflict {
                            previous: prev,
                            current,
                        });
                    }
                    (Disambiguation::Strict, _) => previous = Some(current),
                },
                Err(error) => {
                    tracing::debug!(input, format = %format, %error, "candidate format did not match");
                }
            }
        }

        previous.ok_or_else(|| ConversionError::NoMatchingFormat {
            input: input.to_owned(),
        })
    }
}

/// Parses `input` with exactly `format`.
///
/// Fields the format does not mention take strptime's defaults: the date
/// falls back to 1900-01-01 and the time to 00:00:00. A weekday that
/// disagrees with the parsed date is ignored.
pub fn parse_with_format(input: &str, format: &str) -> Result<NaiveDateTime, ConversionError> {
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, input, StrftimeItems::new(format))
        .and_then(|()| fill_missing_fields(&mut parsed))
        .and_then(|()| resolve(&parsed))
        .map_err(|source| ConversionError::Format {
            input: input.to_owned(),
            format: format.to_owned(),
            source,
        })
}

fn fill_missing_fields(parsed: &mut Parsed) -> ParseResult<()> {
    let week_based = parsed.isoweek().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some();
    let ordinal = parsed.ordinal().is_some();

    if parsed.year().is_none()
        && parsed.year_div_100().is_none()
        && parsed.year_mod_100().is_none()
        && parsed.isoyear().is_none()
    {
        parsed.set_year(1900)?;
    }
    if parsed.month().is_none() && !ordinal && !week_based {
        parsed.set_month(1)?;
    }
    if parsed.day().is_none() && !ordinal && !week_based {
        parsed.set_day(1)?;
    }
    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0)?,
        // AM/PM without an hour
        (Some(_), None) => parsed.set_hour12(12)?,
        _ => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    Ok(())
}

fn resolve(parsed: &Parsed) -> ParseResult<NaiveDateTime> {
    let time = parsed.to_naive_time()?;
    let date = match parsed.to_naive_date() {
        Ok(date) => date,
        Err(err) if err.kind() == ParseErrorKind::Impossible && parsed.weekday().is_some() => {
            match (parsed.year(), parsed.month(), parsed.day()) {
                (Some(year), Some(month), Some(day)) => {
                    NaiveDate::from_ymd_opt(year, month, day).ok_or(err)?
                }
                _ => return Err(err),
            }
        }
        Err(err) => return Err(err),
    };
    Ok(date.and_time(time))
}

/// Converts seconds since the Unix epoch to local wall-clock time.
///
/// Fractional seconds are kept with nanosecond precision.
pub fn from_epoch_seconds(seconds: f64) -> Result<NaiveDateTime, ConversionError> {
    let out_of_range = ConversionError::EpochOutOfRange { seconds };
    if !seconds.is_finite() {
        return Err(out_of_range);
    }

    let mut whole = seconds.floor();
    let mut nanos = ((seconds - whole) * 1e9).round();
    if nanos >= 1e9 {
        whole += 1.0;
        nanos = 0.0;
    }
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return Err(out_of_range);
    }

    from_epoch_parts(whole as i64, nanos as u32, seconds)
}

fn from_epoch_parts(secs: i64, nanos: u32, seconds: f64) -> Result<NaiveDateTime, ConversionError> {
    match Local.timestamp_opt(secs, nanos) {
        LocalResult::Single(dt) => Ok(dt.naive_local()),
        LocalResult::Ambiguous(..) => Err(ConversionError::AmbiguousLocalTime { seconds }),
        LocalResult::None => Err(ConversionError::EpochOutOfRange { seconds }),
    }
}

// ============================================================================
// CONVERTER
// ============================================================================

/// [`Convert`] adaptor over a [`TimestampParser`].
///
/// Reads [`CoerceOptions::format`] as the explicit format.
#[derive(Debug, Clone, Default)]
pub struct TimestampConverter {
    parser: TimestampParser,
}

impl TimestampConverter {
    #[must_use]
    pub fn new(parser: TimestampParser) -> Self {
        Self { parser }
    }

    #[must_use]
    pub fn parser(&self) -> &TimestampParser {
        &self.parser
    }
}

impl Convert for TimestampConverter {
    fn convert(
        &self,
        value: &Value,
        _expected: Option<ValueKind>,
        options: &CoerceOptions,
    ) -> Result<Value, ConversionError> {
        self.parser.parse(value, options.format())
    }

    fn name(&self) -> &str {
        "timestamp"
    }
}

/// Resolves `value` to a datetime, or returns it unchanged.
///
/// Failures are logged; the original value comes back so that it fails a
/// datetime type check downstream.
///
/// # Examples
///
/// ```
/// use strata_validator::converters::convert_to_timestamp;
/// use strata_validator::value::{Value, ValueKind};
///
/// let dt = convert_to_timestamp(&Value::from("Sun, 06 Nov 1994 08:49:37 GMT"), None);
/// assert_eq!(dt.kind(), ValueKind::DateTime);
///
/// let raw = convert_to_timestamp(&Value::from("yesterday"), None);
/// assert_eq!(raw, Value::from("yesterday"));
/// ```
pub fn convert_to_timestamp(value: &Value, format: Option<&str>) -> Value {
    match TimestampParser::new().parse(value, format) {
        Ok(converted) => converted,
        Err(error) => {
            tracing::warn!(%value, %error, "failed to parse value as timestamp");
            value.clone()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
