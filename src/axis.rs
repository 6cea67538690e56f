//! One dimension's binning: numeric or time edges, or text patterns, plus
//! the lookup from a raw value to the 1-indexed bin containing it.

use chrono::{DateTime, Duration, Utc};
use regex::{Regex, RegexBuilder};

use crate::error::{ConfigError, ResolveError};
use crate::value::{
    datetime_from_seconds, duration_from_seconds, seconds_since_epoch, Value, ValueKind,
};

/// How one dimension is specified when building a histogram: explicit edges
/// (or patterns), or a range divided into equally wide bins.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisSpec {
    Edges(Vec<Value>),
    Range { bins: usize, lower: Value, upper: Value },
}

impl AxisSpec {
    pub fn edges<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        AxisSpec::Edges(edges.into_iter().map(Into::into).collect())
    }

    pub fn range(bins: usize, lower: impl Into<Value>, upper: impl Into<Value>) -> Self {
        AxisSpec::Range { bins, lower: lower.into(), upper: upper.into() }
    }

    /// One pattern per bin; `resolve` tries them in this order.
    pub fn patterns<I>(patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        AxisSpec::Edges(patterns.into_iter().map(|p| Value::Text(p.as_ref().to_owned())).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    Numeric,
    Time,
    Pattern,
}

impl AxisKind {
    pub(crate) fn accepts(self, v: ValueKind) -> bool {
        matches!(
            (self, v),
            (AxisKind::Numeric, ValueKind::Number)
                | (AxisKind::Time, ValueKind::Time)
                | (AxisKind::Pattern, ValueKind::Text)
        )
    }
}

impl std::fmt::Display for AxisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            AxisKind::Numeric => "numeric",
            AxisKind::Time => "time",
            AxisKind::Pattern => "pattern",
        })
    }
}

/// The geometry of one bin along one axis, as handed out by views. Which
/// variant applies was fixed when the axis was built.
#[derive(Debug, Clone, PartialEq)]
pub enum BinInfo<'a> {
    Interval { low: f64, center: f64, high: f64, width: f64 },
    TimeInterval { low: DateTime<Utc>, center: DateTime<Utc>, high: DateTime<Utc>, width: Duration },
    Pattern { pattern: &'a str },
}

impl<'a> BinInfo<'a> {
    pub fn pattern(&self) -> Option<&'a str> {
        match self {
            BinInfo::Pattern { pattern } => Some(pattern),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
enum Binning {
    /// Strictly increasing bin edges.
    Numeric(Vec<f64>),
    /// Edges in seconds since the epoch; converted back to `DateTime<Utc>`
    /// on the way out.
    Time(Vec<f64>),
    /// One compiled case-insensitive pattern per bin, tried in order.
    Pattern(Vec<Regex>),
}

/// One axis of a histogram. Immutable once constructed; bin numbers are
/// 1-indexed throughout.
#[derive(Debug, Clone)]
pub struct Axis {
    bins: Binning,
}

impl Axis {
    pub fn from_spec(spec: AxisSpec) -> Result<Self, ConfigError> {
        match spec {
            AxisSpec::Edges(edges) => Self::from_edges(edges),
            AxisSpec::Range { bins, lower, upper } => Self::with_range(bins, lower, upper),
        }
    }

    /// Build from explicit edges or patterns, inferring the axis kind from
    /// the (single) kind of the elements.
    pub fn from_edges(edges: Vec<Value>) -> Result<Self, ConfigError> {
        let Some(first) = edges.first() else { return Err(ConfigError::TooFewEdges(0)) };
        if edges.iter().any(|e| e.kind() != first.kind()) {
            return Err(ConfigError::MixedEdgeKinds);
        }
        match first.kind() {
            ValueKind::Number => {
                let edges = edges
                    .iter()
                    .filter_map(|e| if let Value::Number(x) = e { Some(*x) } else { None })
                    .collect();
                Ok(Self { bins: Binning::Numeric(checked_edges(edges)?) })
            }
            ValueKind::Time => {
                let edges = edges
                    .iter()
                    .filter_map(|e| if let Value::Time(t) = e { Some(seconds_since_epoch(t)) } else { None })
                    .collect();
                Ok(Self { bins: Binning::Time(checked_edges(edges)?) })
            }
            ValueKind::Text => {
                let patterns = edges
                    .iter()
                    .filter_map(|e| if let Value::Text(s) = e { Some(compile(s)) } else { None })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self { bins: Binning::Pattern(patterns) })
            }
        }
    }

    /// `bins` equally wide bins between `lower` and `upper`:
    /// edge n = lower + n * (upper - lower) / bins.
    pub fn with_range(bins: usize, lower: Value, upper: Value) -> Result<Self, ConfigError> {
        if bins == 0 {
            return Err(ConfigError::EmptyRange);
        }
        match (&lower, &upper) {
            (Value::Text(_), _) | (_, Value::Text(_)) => Err(ConfigError::RangeWithPatterns),
            (Value::Number(lo), Value::Number(hi)) => {
                Ok(Self { bins: Binning::Numeric(spread_edges(*lo, *hi, bins)?) })
            }
            (Value::Time(lo), Value::Time(hi)) => {
                let (lo, hi) = (seconds_since_epoch(lo), seconds_since_epoch(hi));
                Ok(Self { bins: Binning::Time(spread_edges(lo, hi, bins)?) })
            }
            _ => Err(ConfigError::BoundKindMismatch { lower: lower.kind(), upper: upper.kind() }),
        }
    }

    pub fn kind(&self) -> AxisKind {
        match &self.bins {
            Binning::Numeric(_) => AxisKind::Numeric,
            Binning::Time(_) => AxisKind::Time,
            Binning::Pattern(_) => AxisKind::Pattern,
        }
    }

    pub fn bin_count(&self) -> usize {
        match &self.bins {
            Binning::Numeric(edges) | Binning::Time(edges) => edges.len() - 1,
            Binning::Pattern(patterns) => patterns.len(),
        }
    }

    /// 1-indexed bin containing `v`. The lookup strategy was fixed at
    /// construction: edge scan for numeric and time axes, first matching
    /// pattern for pattern axes (which have no underflow side).
    pub fn resolve(&self, v: &Value) -> Result<usize, ResolveError> {
        match (&self.bins, v) {
            (Binning::Numeric(edges), Value::Number(x)) => find_edge_bin(edges, *x),
            (Binning::Time(edges), Value::Time(t)) => find_edge_bin(edges, seconds_since_epoch(t)),
            (Binning::Pattern(patterns), Value::Text(s)) => patterns
                .iter()
                .position(|re| re.is_match(s))
                .map(|n| n + 1)
                .ok_or(ResolveError::Overflow),
            _ => Err(ResolveError::KindMismatch { expected: self.kind(), got: v.kind() }),
        }
    }

    /// Lower edge of bin `i`; `None` on pattern axes or out of range.
    pub fn low_edge(&self, i: usize) -> Option<Value> {
        self.edge_pair(i).map(|(low, _)| self.typed(low))
    }

    pub fn high_edge(&self, i: usize) -> Option<Value> {
        self.edge_pair(i).map(|(_, high)| self.typed(high))
    }

    pub fn center(&self, i: usize) -> Option<Value> {
        self.edge_pair(i).map(|(low, high)| self.typed(low + (high - low) / 2.0))
    }

    /// Width of bin `i`, in seconds for time axes.
    pub fn width(&self, i: usize) -> Option<f64> {
        self.edge_pair(i).map(|(low, high)| high - low)
    }

    /// Source text of bin `i`'s pattern; `None` on numeric and time axes.
    pub fn pattern(&self, i: usize) -> Option<&str> {
        match &self.bins {
            Binning::Pattern(patterns) if (1..=patterns.len()).contains(&i) => {
                Some(patterns[i - 1].as_str())
            }
            _ => None,
        }
    }

    /// The full geometry of bin `i`, in the axis's own representation.
    pub fn bin_info(&self, i: usize) -> Option<BinInfo<'_>> {
        match &self.bins {
            Binning::Numeric(_) => self.edge_pair(i).map(|(low, high)| BinInfo::Interval {
                low,
                center: low + (high - low) / 2.0,
                high,
                width: high - low,
            }),
            Binning::Time(_) => self.edge_pair(i).map(|(low, high)| BinInfo::TimeInterval {
                low: datetime_from_seconds(low),
                center: datetime_from_seconds(low + (high - low) / 2.0),
                high: datetime_from_seconds(high),
                width: duration_from_seconds(high - low),
            }),
            Binning::Pattern(_) => self.pattern(i).map(|pattern| BinInfo::Pattern { pattern }),
        }
    }

    /// All edges, converted back to the construction representation.
    /// Empty for pattern axes.
    pub fn bin_edges(&self) -> Vec<Value> {
        match &self.bins {
            Binning::Numeric(edges) => edges.iter().copied().map(Value::Number).collect(),
            Binning::Time(edges) => {
                edges.iter().map(|s| Value::Time(datetime_from_seconds(*s))).collect()
            }
            Binning::Pattern(_) => Vec::new(),
        }
    }

    /// Midpoint of every bin, in order. Empty for pattern axes.
    pub fn bin_centers(&self) -> Vec<Value> {
        match &self.bins {
            Binning::Numeric(edges) | Binning::Time(edges) => edges
                .windows(2)
                .map(|w| self.typed(w[0] + (w[1] - w[0]) / 2.0))
                .collect(),
            Binning::Pattern(_) => Vec::new(),
        }
    }

    /// Source text of every pattern, in order. Empty for numeric and time axes.
    pub fn patterns(&self) -> Vec<&str> {
        match &self.bins {
            Binning::Pattern(patterns) => patterns.iter().map(|re| re.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    pub(crate) fn numeric_edges(&self) -> Option<&[f64]> {
        match &self.bins {
            Binning::Numeric(edges) | Binning::Time(edges) => Some(edges),
            Binning::Pattern(_) => None,
        }
    }

    fn edge_pair(&self, i: usize) -> Option<(f64, f64)> {
        let edges = self.numeric_edges()?;
        if (1..edges.len()).contains(&i) {
            Some((edges[i - 1], edges[i]))
        } else {
            None
        }
    }

    fn typed(&self, x: f64) -> Value {
        match self.kind() {
            AxisKind::Time => Value::Time(datetime_from_seconds(x)),
            _ => Value::Number(x),
        }
    }
}

fn spread_edges(lo: f64, hi: f64, bins: usize) -> Result<Vec<f64>, ConfigError> {
    let width = (hi - lo) / bins as f64;
    checked_edges((0..=bins).map(|n| lo + n as f64 * width).collect())
}

fn checked_edges(edges: Vec<f64>) -> Result<Vec<f64>, ConfigError> {
    if edges.len() < 2 {
        return Err(ConfigError::TooFewEdges(edges.len()));
    }
    if !strictly_increasing(&edges) {
        return Err(ConfigError::EdgesNotIncreasing);
    }
    Ok(edges)
}

fn strictly_increasing(edges: &[f64]) -> bool {
    edges.windows(2).all(|w| w[0] < w[1])
}

fn find_edge_bin(edges: &[f64], x: f64) -> Result<usize, ResolveError> {
    if x < edges[0] {
        return Err(ResolveError::Underflow);
    }
    edges
        .windows(2)
        .position(|b| b[0] <= x && x < b[1])
        .map(|n| n + 1)
        .ok_or(ResolveError::Overflow)
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ConfigError::BadPattern(e.to_string()))
}

// --------------------------------------------------------------------------------


#[cfg(test)]
mod test_axis_lookup {
    use super::*;
    use rstest::rstest;

    fn unit_edges() -> Axis {
        Axis::from_edges(vec![1.0.into(), 2.0.into(), 3.0.into()]).unwrap()
    }

    #[rstest(/**/ value, expected,
             case(1.0, 1),
             case(1.5, 1),
             case(2.0, 2),
             case(2.9, 2),
    )]
    fn values_land_in_their_bin(value: f64, expected: usize) {
        assert_eq!(unit_edges().resolve(&value.into()), Ok(expected));
    }

    #[test]
    fn below_first_edge_underflows() {
        assert_eq!(unit_edges().resolve(&0.0.into()), Err(ResolveError::Underflow));
    }

    #[test]
    fn beyond_last_edge_overflows() {
        assert_eq!(unit_edges().resolve(&5.0.into()), Err(ResolveError::Overflow));
    }

    #[test]
    fn wrong_coordinate_kind_is_reported() {
        assert_eq!(
            unit_edges().resolve(&"three".into()),
            Err(ResolveError::KindMismatch { expected: AxisKind::Numeric, got: ValueKind::Text })
        );
    }

    #[rstest(/**/ word    , expected,
             case("My"    , Ok(1)),
             case("name"  , Ok(2)),
             case("NAME"  , Ok(2)),      // case-insensitive
             case("Bond"  , Ok(4)),
             case("bond"  , Ok(4)),
             case("James" , Err(ResolveError::Overflow)),
    )]
    fn first_matching_pattern_wins(word: &str, expected: Result<usize, ResolveError>) {
        let axis = Axis::from_spec(AxisSpec::patterns(["My", "name", "is", "Bond"])).unwrap();
        assert_eq!(axis.resolve(&word.into()), expected);
    }

    #[test]
    fn patterns_match_anywhere_in_the_text() {
        let axis = Axis::from_spec(AxisSpec::patterns(["be", "or"])).unwrap();
        assert_eq!(axis.resolve(&"maybe".into()), Ok(1));
        assert_eq!(axis.resolve(&"WORD".into()), Ok(2));
    }

    #[test]
    fn time_lookup_uses_the_same_edge_scan() {
        use chrono::{TimeZone, Utc};
        let start = Utc.with_ymd_and_hms(2014, 1, 1, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2014, 1, 1, 16, 0, 0).unwrap();
        let axis = Axis::with_range(4, start.into(), end.into()).unwrap();
        let at = |h, m| Utc.with_ymd_and_hms(2014, 1, 1, h, m, 0).unwrap();
        assert_eq!(axis.resolve(&at(12, 0).into()), Ok(1));
        assert_eq!(axis.resolve(&at(13, 30).into()), Ok(2));
        assert_eq!(axis.resolve(&at(15, 59).into()), Ok(4));
        assert_eq!(axis.resolve(&at(16, 0).into()), Err(ResolveError::Overflow));
        assert_eq!(axis.resolve(&at(11, 59).into()), Err(ResolveError::Underflow));
    }
}

#[cfg(test)]
mod test_bin_geometry {
    use super::*;
    use rstest::rstest;

    #[rstest(/**/ bin, low , center, high, width,
             case(1, 1.0,  1.5  , 2.0 , 1.0),
             case(2, 2.0,  2.5  , 3.0 , 1.0),
    )]
    fn interval_accessors(bin: usize, low: f64, center: f64, high: f64, width: f64) {
        let axis = Axis::from_edges(vec![1.0.into(), 2.0.into(), 3.0.into()]).unwrap();
        assert_eq!(axis.low_edge(bin), Some(Value::Number(low)));
        assert_eq!(axis.center(bin), Some(Value::Number(center)));
        assert_eq!(axis.high_edge(bin), Some(Value::Number(high)));
        assert_eq!(axis.width(bin), Some(width));
        assert_eq!(
            axis.bin_info(bin),
            Some(BinInfo::Interval { low, center, high, width })
        );
    }

    #[test]
    fn out_of_range_bins_have_no_geometry() {
        let axis = Axis::from_edges(vec![1.0.into(), 2.0.into(), 3.0.into()]).unwrap();
        assert_eq!(axis.bin_info(0), None);
        assert_eq!(axis.bin_info(3), None);
    }

    #[test]
    fn pattern_bins_expose_their_pattern_only() {
        let axis = Axis::from_spec(AxisSpec::patterns(["str1", "str2"])).unwrap();
        assert_eq!(axis.pattern(2), Some("str2"));
        assert_eq!(axis.low_edge(1), None);
        assert_eq!(axis.width(1), None);
        assert_eq!(axis.bin_info(1), Some(BinInfo::Pattern { pattern: "str1" }));
        assert_eq!(axis.patterns(), vec!["str1", "str2"]);
    }
}
