//! The user-facing histogram: one axis per dimension, one dense bin
//! container, and a single counter for fills that missed every bin.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use chrono::{DateTime, Duration, Utc};
use float_eq::float_eq;
use itertools::izip;
use ndarray::{ArrayD, Dimension, IxDyn, ShapeBuilder};

use crate::axis::{Axis, AxisKind, AxisSpec, BinInfo};
use crate::bins::BinContainer;
use crate::error::{ConfigError, Incompatibility, ResolveError};
use crate::index::{ijk_from_global, Ijk};
use crate::value::Value;
use crate::view::{BinView, BinViewMut};

/// Default tolerance when comparing the bin edges of two histograms.
pub const EDGE_TOLERANCE: f64 = 1e-7;

/// The coordinates of one fill call, one per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Coords(Vec<Value>);

impl From<Value> for Coords { fn from(v: Value) -> Self { Coords(vec![v]) } }
impl From<Vec<Value>> for Coords { fn from(v: Vec<Value>) -> Self { Coords(v) } }
impl From<f64> for Coords { fn from(x: f64) -> Self { Coords(vec![x.into()]) } }
impl From<f32> for Coords { fn from(x: f32) -> Self { Coords(vec![x.into()]) } }
impl From<i32> for Coords { fn from(x: i32) -> Self { Coords(vec![x.into()]) } }
impl From<i64> for Coords { fn from(x: i64) -> Self { Coords(vec![x.into()]) } }
impl From<&str> for Coords { fn from(s: &str) -> Self { Coords(vec![s.into()]) } }
impl From<String> for Coords { fn from(s: String) -> Self { Coords(vec![s.into()]) } }
impl From<DateTime<Utc>> for Coords { fn from(t: DateTime<Utc>) -> Self { Coords(vec![t.into()]) } }

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Coords {
    fn from((x, y): (A, B)) -> Self {
        Coords(vec![x.into(), y.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for Coords {
    fn from((x, y, z): (A, B, C)) -> Self {
        Coords(vec![x.into(), y.into(), z.into()])
    }
}

#[derive(Clone, Copy)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// A 1-D histogram's data, shaped for plotting front-ends. The core never
/// renders anything itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// (center, width, value) per bin.
    Bars(Vec<(f64, f64, f64)>),
    /// (center, width, value) per bin of a time axis.
    TimeBars(Vec<(DateTime<Utc>, Duration, f64)>),
    /// (pattern, value) per bin of a pattern axis.
    Labels(Vec<(String, f64)>),
}

/// A dense histogram over 1 to 3 axes of any mix of kinds. Filling is not
/// thread-safe; callers wanting concurrent fills must add their own
/// synchronisation.
#[derive(Debug, Clone)]
pub struct Histogram {
    axes: Vec<Axis>,
    container: BinContainer,
    overflow: u64,
}

impl Histogram {
    /// One axis per spec, consumed left to right.
    pub fn new(specs: Vec<AxisSpec>) -> Result<Self, ConfigError> {
        let axes = specs.into_iter().map(Axis::from_spec).collect::<Result<Vec<_>, _>>()?;
        Self::from_axes(axes)
    }

    pub(crate) fn from_axes(axes: Vec<Axis>) -> Result<Self, ConfigError> {
        if axes.is_empty() || axes.len() > 3 {
            return Err(ConfigError::DimensionCount(axes.len()));
        }
        let counts = axes.iter().map(Axis::bin_count).collect::<Vec<_>>();
        let container = BinContainer::from_counts(&counts)?;
        Ok(Self { axes, container, overflow: 0 })
    }

    pub fn dimensions(&self) -> usize {
        self.axes.len()
    }

    pub fn axis(&self, d: usize) -> Option<&Axis> {
        self.axes.get(d)
    }

    pub fn x_axis(&self) -> &Axis {
        &self.axes[0]
    }

    pub fn y_axis(&self) -> Option<&Axis> {
        self.axes.get(1)
    }

    pub fn z_axis(&self) -> Option<&Axis> {
        self.axes.get(2)
    }

    /// Bin counts of the active axes, x first.
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(Axis::bin_count).collect()
    }

    /// Total number of bins across all dimensions.
    pub fn bin_count(&self) -> usize {
        self.container.bin_count()
    }

    pub(crate) fn container(&self) -> &BinContainer {
        &self.container
    }

    /// How many fill calls landed outside the binning. Underflow and
    /// overflow are not told apart, nor are individual axes.
    pub fn overflow(&self) -> u64 {
        self.overflow
    }

    /// Sum of every bin's content.
    pub fn integral(&self) -> f64 {
        self.container.values().iter().sum()
    }

    /// Add 1 to the bin containing `coords`.
    pub fn fill(&mut self, coords: impl Into<Coords>) -> Result<(), ConfigError> {
        self.fill_weighted(coords, 1.0)
    }

    /// Resolve each coordinate on its axis and add `weight` to the
    /// addressed bin. A coordinate outside its axis bumps the overflow
    /// counter and leaves the storage untouched; a call whose shape does
    /// not match the histogram is an error.
    pub fn fill_weighted(&mut self, coords: impl Into<Coords>, weight: f64) -> Result<(), ConfigError> {
        let Coords(coords) = coords.into();
        if coords.len() != self.axes.len() {
            return Err(ConfigError::WrongArity { expected: self.axes.len(), got: coords.len() });
        }
        for (d, (axis, v)) in self.axes.iter().zip(&coords).enumerate() {
            if !axis.kind().accepts(v.kind()) {
                return Err(ConfigError::CoordinateKind {
                    axis: d,
                    expected: axis.kind(),
                    got: v.kind(),
                });
            }
        }
        let mut ijk: Ijk = [1, 1, 1];
        for (d, (axis, v)) in self.axes.iter().zip(&coords).enumerate() {
            match axis.resolve(v) {
                Ok(bin) => ijk[d] = bin,
                Err(ResolveError::Underflow | ResolveError::Overflow) => {
                    self.overflow += 1;
                    return Ok(());
                }
                Err(ResolveError::KindMismatch { expected, got }) => {
                    return Err(ConfigError::CoordinateKind { axis: d, expected, got })
                }
            }
        }
        self.container.fill(ijk, weight);
        Ok(())
    }

    /// One read-only view per bin, in ascending order of the flattened
    /// (x fastest-varying) index. The sequence is recreated on every call,
    /// so it always restarts from the first bin.
    pub fn bins(&self) -> impl Iterator<Item = BinView<'_>> + '_ {
        (1..=self.container.bin_count()).map(move |g| BinView::new(self, g))
    }

    /// The writable counterpart of `bins`, in the same order.
    pub fn bins_mut(&mut self) -> impl Iterator<Item = BinViewMut<'_>> + '_ {
        let Histogram { axes, container, .. } = self;
        let axes = axes.as_slice();
        let dims = container.dims();
        container
            .slots_mut()
            .enumerate()
            .map(move |(n, (value, sum_w2))| {
                BinViewMut::new(axes, value, sum_w2, n + 1, ijk_from_global(n + 1, dims))
            })
    }

    /// Accumulated contents as a dense array shaped to the active
    /// dimensions, x axis first. The flat storage is x fastest-varying,
    /// hence the Fortran-order shape.
    pub fn content(&self) -> ArrayD<f64> {
        shaped(&self.shape(), self.container.values().to_vec())
    }

    fn content_sum_w2(&self) -> ArrayD<f64> {
        shaped(&self.shape(), self.container.sum_w2_slice().to_vec())
    }

    /// Sum away axis `d`, producing a histogram over the remaining axes.
    pub fn projection(&self, d: usize) -> Result<Histogram, ConfigError> {
        if d >= self.axes.len() {
            return Err(ConfigError::AxisOutOfRange(d));
        }
        if self.axes.len() == 1 {
            return Err(ConfigError::ProjectionToNothing);
        }
        let kept = self
            .axes
            .iter()
            .enumerate()
            .filter(|(n, _)| *n != d)
            .map(|(_, a)| a.clone())
            .collect();
        let mut out = Histogram::from_axes(kept)?;
        let values = self.content().sum_axis(ndarray::Axis(d));
        let sum_w2 = self.content_sum_w2().sum_axis(ndarray::Axis(d));
        for ((idx, v), w2) in values.indexed_iter().zip(sum_w2.iter()) {
            let mut ijk: Ijk = [1, 1, 1];
            for (n, i) in idx.slice().iter().enumerate() {
                ijk[n] = i + 1;
            }
            let g = out.container.global_from_ijk(ijk);
            out.container.set_value(g, *v);
            out.container.set_sum_w2(g, *w2);
        }
        Ok(out)
    }

    /// Fail unless `other` has the same shape and axis definitions, with
    /// the default edge tolerance.
    pub fn check_compatibility(&self, other: &Histogram) -> Result<(), Incompatibility> {
        self.check_compatibility_within(other, EDGE_TOLERANCE)
    }

    /// Structural equality of two histograms: dimension count, per-axis bin
    /// count, axis kind, and edges (within `tolerance`) or pattern texts
    /// (exactly).
    pub fn check_compatibility_within(
        &self,
        other: &Histogram,
        tolerance: f64,
    ) -> Result<(), Incompatibility> {
        if self.axes.len() != other.axes.len() {
            return Err(Incompatibility::DimensionMismatch {
                left: self.axes.len(),
                right: other.axes.len(),
            });
        }
        for (d, (a, b)) in self.axes.iter().zip(&other.axes).enumerate() {
            if a.bin_count() != b.bin_count() {
                return Err(Incompatibility::BinCountMismatch {
                    axis: d,
                    left: a.bin_count(),
                    right: b.bin_count(),
                });
            }
            if a.kind() != b.kind() {
                return Err(Incompatibility::KindMismatch { axis: d, left: a.kind(), right: b.kind() });
            }
            match (a.numeric_edges(), b.numeric_edges()) {
                (Some(ea), Some(eb)) => {
                    for (n, (x, y)) in ea.iter().zip(eb).enumerate() {
                        if !float_eq!(*x, *y, abs <= tolerance) {
                            return Err(Incompatibility::EdgeMismatch { axis: d, edge: n + 1 });
                        }
                    }
                }
                _ => {
                    for (n, (p, q)) in a.patterns().iter().zip(b.patterns()).enumerate() {
                        if *p != q {
                            return Err(Incompatibility::PatternMismatch { axis: d, bin: n + 1 });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// The non-failing form of `check_compatibility`.
    pub fn compatible(&self, other: &Histogram) -> bool {
        self.check_compatibility(other).is_ok()
    }

    // ------------------------- histogram arithmetic -------------------------

    /// Element-wise `self += other`, after a compatibility check.
    pub fn add_in_place(&mut self, other: &Histogram) -> Result<(), Incompatibility> {
        self.combine(other, BinOp::Add)
    }

    pub fn sub_in_place(&mut self, other: &Histogram) -> Result<(), Incompatibility> {
        self.combine(other, BinOp::Sub)
    }

    pub fn mul_in_place(&mut self, other: &Histogram) -> Result<(), Incompatibility> {
        self.combine(other, BinOp::Mul)
    }

    pub fn div_in_place(&mut self, other: &Histogram) -> Result<(), Incompatibility> {
        self.combine(other, BinOp::Div)
    }

    fn combine(&mut self, other: &Histogram, op: BinOp) -> Result<(), Incompatibility> {
        self.check_compatibility(other)?;
        for (mut b, o) in self.bins_mut().zip(other.bins()) {
            match op {
                BinOp::Add => b += &o,
                BinOp::Sub => b -= &o,
                BinOp::Mul => b *= &o,
                BinOp::Div => b /= &o,
            }
        }
        Ok(())
    }

    /// A 1-D histogram's (center, width, value) bars, or (pattern, value)
    /// labels for pattern axes.
    pub fn series(&self) -> Result<Series, ConfigError> {
        if self.axes.len() != 1 {
            return Err(ConfigError::SeriesNeedsOneDimension(self.axes.len()));
        }
        let axis = self.x_axis();
        let values = self.container.values();
        Ok(match axis.kind() {
            AxisKind::Pattern => Series::Labels(
                izip!(axis.patterns(), values).map(|(p, v)| (p.to_owned(), *v)).collect(),
            ),
            AxisKind::Numeric => {
                let mut bars = Vec::with_capacity(axis.bin_count());
                for (i, v) in izip!(1..=axis.bin_count(), values) {
                    if let Some(BinInfo::Interval { center, width, .. }) = axis.bin_info(i) {
                        bars.push((center, width, *v));
                    }
                }
                Series::Bars(bars)
            }
            AxisKind::Time => {
                let mut bars = Vec::with_capacity(axis.bin_count());
                for (i, v) in izip!(1..=axis.bin_count(), values) {
                    if let Some(BinInfo::TimeInterval { center, width, .. }) = axis.bin_info(i) {
                        bars.push((center, width, *v));
                    }
                }
                Series::TimeBars(bars)
            }
        })
    }
}

fn shaped(shape: &[usize], flat: Vec<f64>) -> ArrayD<f64> {
    ArrayD::from_shape_vec(IxDyn(shape).f(), flat)
        .expect("slot count equals the product of the axis bin counts")
}

// Copying operators between compatible histograms. The receiver is deep
// copied before the element-wise combination, so operands never alias.

impl Add<&Histogram> for &Histogram {
    type Output = Result<Histogram, Incompatibility>;
    fn add(self, rhs: &Histogram) -> Self::Output {
        let mut out = self.clone();
        out.add_in_place(rhs)?;
        Ok(out)
    }
}

impl Sub<&Histogram> for &Histogram {
    type Output = Result<Histogram, Incompatibility>;
    fn sub(self, rhs: &Histogram) -> Self::Output {
        let mut out = self.clone();
        out.sub_in_place(rhs)?;
        Ok(out)
    }
}

impl Mul<&Histogram> for &Histogram {
    type Output = Result<Histogram, Incompatibility>;
    fn mul(self, rhs: &Histogram) -> Self::Output {
        let mut out = self.clone();
        out.mul_in_place(rhs)?;
        Ok(out)
    }
}

impl Div<&Histogram> for &Histogram {
    type Output = Result<Histogram, Incompatibility>;
    fn div(self, rhs: &Histogram) -> Self::Output {
        let mut out = self.clone();
        out.div_in_place(rhs)?;
        Ok(out)
    }
}

// Scalar operands combine every bin with the same number. Adding or
// subtracting zero skips the traversal (the additive identity); scaling by
// zero or one is still applied.

impl AddAssign<f64> for Histogram {
    fn add_assign(&mut self, c: f64) {
        if c == 0.0 {
            return;
        }
        for (value, _) in self.container.slots_mut() {
            *value += c;
        }
    }
}

impl SubAssign<f64> for Histogram {
    fn sub_assign(&mut self, c: f64) {
        *self += -c;
    }
}

impl MulAssign<f64> for Histogram {
    fn mul_assign(&mut self, c: f64) {
        for (value, sum_w2) in self.container.slots_mut() {
            *value *= c;
            *sum_w2 *= c * c;
        }
    }
}

impl DivAssign<f64> for Histogram {
    fn div_assign(&mut self, c: f64) {
        for (value, sum_w2) in self.container.slots_mut() {
            *value /= c;
            *sum_w2 /= c * c;
        }
    }
}

impl Add<f64> for &Histogram {
    type Output = Histogram;
    fn add(self, c: f64) -> Histogram {
        let mut out = self.clone();
        out += c;
        out
    }
}

impl Sub<f64> for &Histogram {
    type Output = Histogram;
    fn sub(self, c: f64) -> Histogram {
        let mut out = self.clone();
        out -= c;
        out
    }
}

impl Mul<f64> for &Histogram {
    type Output = Histogram;
    fn mul(self, c: f64) -> Histogram {
        let mut out = self.clone();
        out *= c;
        out
    }
}

impl Div<f64> for &Histogram {
    type Output = Histogram;
    fn div(self, c: f64) -> Histogram {
        let mut out = self.clone();
        out /= c;
        out
    }
}

// --------------------------------------------------------------------------------

#[cfg(test)]
fn values_of(h: &Histogram) -> Vec<f64> {
    h.bins().map(|b| b.value()).collect()
}

#[cfg(test)]
mod test_construction {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixed_width_1d() {
        let h = Histogram::new(vec![AxisSpec::range(4, 0.0, 4.0)]).unwrap();
        assert_eq!(h.x_axis().bin_edges(), numbers([0.0, 1.0, 2.0, 3.0, 4.0]));
        assert_eq!(h.x_axis().bin_centers(), numbers([0.5, 1.5, 2.5, 3.5]));
        assert_eq!(h.x_axis().bin_count(), 4);
        assert_eq!(h.shape(), vec![4]);
    }

    #[test]
    fn variable_width_1d() {
        let h = Histogram::new(vec![AxisSpec::edges([0.0, 1.0, 3.0, 4.0])]).unwrap();
        assert_eq!(h.x_axis().bin_edges(), numbers([0.0, 1.0, 3.0, 4.0]));
        assert_eq!(h.x_axis().bin_centers(), numbers([0.5, 2.0, 3.5]));
        assert_eq!(h.x_axis().bin_count(), 3);
    }

    #[test]
    fn two_dimensions() {
        let h = Histogram::new(vec![
            AxisSpec::range(4, 0.0, 4.0),
            AxisSpec::range(4, 0.0, 1.0),
        ])
        .unwrap();
        assert_eq!(h.x_axis().bin_centers(), numbers([0.5, 1.5, 2.5, 3.5]));
        assert_eq!(h.y_axis().unwrap().bin_centers(), numbers([0.125, 0.375, 0.625, 0.875]));
        assert!(h.z_axis().is_none());
        assert_eq!(h.bin_count(), 16);
    }

    #[test]
    fn mixed_fixed_and_variable_widths_3d() {
        let h = Histogram::new(vec![
            AxisSpec::range(4, 0.0, 4.0),
            AxisSpec::edges([0.0, 0.25, 0.5, 0.75, 1.0]),
            AxisSpec::range(4, 0.0, 1.0),
        ])
        .unwrap();
        assert_eq!(h.x_axis().bin_centers(), numbers([0.5, 1.5, 2.5, 3.5]));
        assert_eq!(h.y_axis().unwrap().bin_centers(), numbers([0.125, 0.375, 0.625, 0.875]));
        assert_eq!(h.z_axis().unwrap().bin_centers(), numbers([0.125, 0.375, 0.625, 0.875]));
    }

    #[test]
    fn mixed_axis_kinds_3d() {
        let h = Histogram::new(vec![
            AxisSpec::range(
                2,
                Utc.with_ymd_and_hms(2014, 1, 1, 12, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2014, 1, 1, 14, 0, 0).unwrap(),
            ),
            AxisSpec::patterns(["str1", "str2", "str3", "str4"]),
            AxisSpec::range(4, 0.0, 1.0),
        ])
        .unwrap();
        assert_eq!(h.x_axis().kind(), AxisKind::Time);
        assert_eq!(h.y_axis().unwrap().patterns(), vec!["str1", "str2", "str3", "str4"]);
        assert_eq!(h.z_axis().unwrap().bin_centers(), numbers([0.125, 0.375, 0.625, 0.875]));
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(Histogram::new(vec![]), Err(ConfigError::DimensionCount(0))));
    }

    fn numbers(xs: impl IntoIterator<Item = f64>) -> Vec<Value> {
        xs.into_iter().map(Value::Number).collect()
    }
}






#[cfg(test)]
mod test_histogram_arithmetic {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_bins() -> Histogram {
        Histogram::new(vec![AxisSpec::range(2, 0.0, 1.0)]).unwrap()
    }

    fn three_d() -> Histogram {
        Histogram::new(vec![
            AxisSpec::range(2, 0.0, 1.0),
            AxisSpec::range(2, 0.0, 1.0),
            AxisSpec::range(2, 0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn add_1d() {
        let mut h1 = two_bins();
        let mut h2 = two_bins();
        h1.fill(0.3).unwrap();
        h2.fill(0.6).unwrap();
        let h3 = (&h1 + &h2).unwrap();
        assert_eq!(values_of(&h1), vec![1.0, 0.0]);
        assert_eq!(values_of(&h2), vec![0.0, 1.0]);
        assert_eq!(values_of(&h3), vec![1.0, 1.0]);
        h1.add_in_place(&h2).unwrap();
        assert_eq!(values_of(&h1), vec![1.0, 1.0]);
    }

    #[test]
    fn sub_1d() {
        let mut h1 = two_bins();
        let mut h2 = two_bins();
        h1.fill(0.3).unwrap();
        h2.fill(0.6).unwrap();
        let h3 = (&h1 - &h2).unwrap();
        assert_eq!(values_of(&h3), vec![1.0, -1.0]);
        h1.sub_in_place(&h2).unwrap();
        assert_eq!(values_of(&h1), vec![1.0, -1.0]);
    }

    #[test]
    fn mul_1d() {
        let mut h1 = two_bins();
        let mut h2 = two_bins();
        h1.fill_weighted(0.3, 0.5).unwrap();
        h1.fill_weighted(0.6, 0.5).unwrap();
        h2.fill_weighted(0.6, 0.5).unwrap();
        let h3 = (&h1 * &h2).unwrap();
        assert_eq!(values_of(&h1), vec![0.5, 0.5]);
        assert_eq!(values_of(&h2), vec![0.0, 0.5]);
        assert_eq!(values_of(&h3), vec![0.0, 0.25]);
        h1.mul_in_place(&h2).unwrap();
        assert_eq!(values_of(&h1), vec![0.0, 0.25]);
    }

    #[test]
    fn div_1d() {
        let mut h1 = two_bins();
        let mut h2 = two_bins();
        for x in [0.3, 0.6] {
            h1.fill_weighted(x, 0.5).unwrap();
            h2.fill_weighted(x, 0.5).unwrap();
        }
        let h3 = (&h1 / &h2).unwrap();
        assert_eq!(values_of(&h3), vec![1.0, 1.0]);
        h1.div_in_place(&h2).unwrap();
        assert_eq!(values_of(&h1), vec![1.0, 1.0]);
    }

    #[test]
    fn in_place_and_copying_forms_agree_3d() {
        let mut h1 = three_d();
        let mut h2 = three_d();
        h1.fill((0.0, 0.0, 0.0)).unwrap();
        h2.fill((0.9, 0.9, 0.9)).unwrap();
        let h3 = (&h1 + &h2).unwrap();
        h1.add_in_place(&h2).unwrap();
        assert_eq!(values_of(&h1), values_of(&h3));
    }

    #[test]
    fn incompatible_operands_are_rejected() {
        let h1 = two_bins();
        let h2 = Histogram::new(vec![AxisSpec::range(3, 0.0, 1.0)]).unwrap();
        assert!((&h1 + &h2).is_err());
        let mut h1 = h1;
        assert!(h1.add_in_place(&h2).is_err());
    }
}


#[cfg(test)]
mod test_series {
    use super::*;

    #[test]
    fn numeric_bars() {
        let mut h = Histogram::new(vec![AxisSpec::range(4, 0.0, 4.0)]).unwrap();
        h.fill(2.1).unwrap();
        assert_eq!(
            h.series().unwrap(),
            Series::Bars(vec![
                (0.5, 1.0, 0.0),
                (1.5, 1.0, 0.0),
                (2.5, 1.0, 1.0),
                (3.5, 1.0, 0.0),
            ])
        );
    }

    #[test]
    fn pattern_labels() {
        let mut h = Histogram::new(vec![AxisSpec::patterns(["To", "be", "or", "not"])]).unwrap();
        h.fill("be").unwrap();
        h.fill("be").unwrap();
        assert_eq!(
            h.series().unwrap(),
            Series::Labels(vec![
                ("To".to_owned(), 0.0),
                ("be".to_owned(), 2.0),
                ("or".to_owned(), 0.0),
                ("not".to_owned(), 0.0),
            ])
        );
    }

    #[test]
    fn time_bars_convert_back_to_datetimes() {
        use chrono::TimeZone;
        let start = Utc.with_ymd_and_hms(2014, 1, 1, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2014, 1, 1, 14, 0, 0).unwrap();
        let h = Histogram::new(vec![AxisSpec::range(2, start, end)]).unwrap();
        match h.series().unwrap() {
            Series::TimeBars(bars) => {
                assert_eq!(bars.len(), 2);
                assert_eq!(bars[0].0, Utc.with_ymd_and_hms(2014, 1, 1, 12, 30, 0).unwrap());
                assert_eq!(bars[0].1, Duration::hours(1));
            }
            other => panic!("expected time bars, got {other:?}"),
        }
    }

    #[test]
    fn series_needs_one_dimension() {
        let h = Histogram::new(vec![AxisSpec::range(2, 0.0, 1.0), AxisSpec::range(2, 0.0, 1.0)])
            .unwrap();
        assert!(matches!(h.series(), Err(ConfigError::SeriesNeedsOneDimension(2))));
    }
}
