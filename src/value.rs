use chrono::{DateTime, Duration, Utc};

/// A coordinate or bin edge as the caller supplies it: a plain number, a UTC
/// timestamp, or text destined for pattern bins.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Time(DateTime<Utc>),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Time,
    Text,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Time(_) => ValueKind::Time,
            Value::Text(_) => ValueKind::Text,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            ValueKind::Number => "a number",
            ValueKind::Time => "a time",
            ValueKind::Text => "text",
        })
    }
}

impl From<f64> for Value { fn from(x: f64) -> Self { Value::Number(x) } }
impl From<f32> for Value { fn from(x: f32) -> Self { Value::Number(x as f64) } }
impl From<i32> for Value { fn from(x: i32) -> Self { Value::Number(x as f64) } }
impl From<i64> for Value { fn from(x: i64) -> Self { Value::Number(x as f64) } }
impl From<&str> for Value { fn from(s: &str) -> Self { Value::Text(s.to_owned()) } }
impl From<String> for Value { fn from(s: String) -> Self { Value::Text(s) } }
impl From<DateTime<Utc>> for Value { fn from(t: DateTime<Utc>) -> Self { Value::Time(t) } }

// --------------------------------------------------------------------------------
// Time axes share the numeric lookup: timestamps are normalized to seconds
// since the Unix epoch on the way in, and converted back on the way out.

pub(crate) fn seconds_since_epoch(t: &DateTime<Utc>) -> f64 {
    t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) * 1e-9
}

pub(crate) fn datetime_from_seconds(s: f64) -> DateTime<Utc> {
    let whole = s.floor();
    let mut secs = whole as i64;
    let mut nanos = ((s - whole) * 1e9).round() as i64;
    if nanos >= 1_000_000_000 {
        secs += 1;
        nanos = 0;
    }
    DateTime::from_timestamp(secs, nanos as u32).expect("bin edge within the representable time range")
}

pub(crate) fn duration_from_seconds(s: f64) -> Duration {
    Duration::nanoseconds((s * 1e9).round() as i64)
}
