//! Transient per-bin accessors: one storage slot bundled with the geometry
//! of the per-axis bins addressing it. Views are created on demand during
//! iteration and discarded afterwards; nothing stores them.

use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use crate::axis::{Axis, BinInfo};
use crate::hist::Histogram;
use crate::index::Ijk;

/// Read access to one bin of a histogram.
#[derive(Clone, Copy)]
pub struct BinView<'a> {
    hist: &'a Histogram,
    gidx: usize,
    ijk: Ijk,
}

impl<'a> BinView<'a> {
    pub(crate) fn new(hist: &'a Histogram, gidx: usize) -> Self {
        let ijk = hist.container().ijk_from_global(gidx);
        Self { hist, gidx, ijk }
    }

    /// 1-based position in the flat storage.
    pub fn global_index(&self) -> usize {
        self.gidx
    }

    /// 1-based bin numbers along x, y, z; unused axes report 1.
    pub fn axial_indices(&self) -> Ijk {
        self.ijk
    }

    pub fn value(&self) -> f64 {
        self.hist.container().value(self.gidx)
    }

    pub fn sum_w2(&self) -> f64 {
        self.hist.container().sum_w2(self.gidx)
    }

    pub fn error(&self) -> f64 {
        self.hist.container().error(self.gidx)
    }

    /// Number of unweighted entries with the same statistical power as this
    /// bin's (possibly weighted) content: value² / Σw².
    pub fn effective_entries(&self) -> f64 {
        let w2 = self.sum_w2();
        if w2 == 0.0 {
            self.value().abs()
        } else {
            self.value().powi(2) / w2
        }
    }

    /// Geometry of this bin along axis `d`; `None` if the axis is unused.
    pub fn info(&self, d: usize) -> Option<BinInfo<'a>> {
        self.hist.axis(d).and_then(|a| a.bin_info(self.ijk[d]))
    }

    pub fn x(&self) -> BinInfo<'a> {
        self.info(0).expect("histograms always have an x axis")
    }

    pub fn y(&self) -> Option<BinInfo<'a>> {
        self.info(1)
    }

    pub fn z(&self) -> Option<BinInfo<'a>> {
        self.info(2)
    }
}

/// Write access to one bin, handed out by `Histogram::bins_mut`.
pub struct BinViewMut<'a> {
    axes: &'a [Axis],
    value: &'a mut f64,
    sum_w2: &'a mut f64,
    gidx: usize,
    ijk: Ijk,
}

impl<'a> BinViewMut<'a> {
    pub(crate) fn new(
        axes: &'a [Axis],
        value: &'a mut f64,
        sum_w2: &'a mut f64,
        gidx: usize,
        ijk: Ijk,
    ) -> Self {
        Self { axes, value, sum_w2, gidx, ijk }
    }

    pub fn global_index(&self) -> usize {
        self.gidx
    }

    pub fn axial_indices(&self) -> Ijk {
        self.ijk
    }

    pub fn value(&self) -> f64 {
        *self.value
    }

    pub fn set_value(&mut self, v: f64) {
        *self.value = v;
    }

    pub fn sum_w2(&self) -> f64 {
        *self.sum_w2
    }

    pub fn set_sum_w2(&mut self, w2: f64) {
        *self.sum_w2 = w2;
    }

    pub fn error(&self) -> f64 {
        self.sum_w2.sqrt()
    }

    pub fn info(&self, d: usize) -> Option<BinInfo<'a>> {
        self.axes.get(d).and_then(|a| a.bin_info(self.ijk[d]))
    }

    pub fn x(&self) -> BinInfo<'a> {
        self.info(0).expect("histograms always have an x axis")
    }

    pub fn y(&self) -> Option<BinInfo<'a>> {
        self.info(1)
    }

    pub fn z(&self) -> Option<BinInfo<'a>> {
        self.info(2)
    }
}

// Compound assignment between views of corresponding slots in two compatible
// histograms. Only content and the squared-weight accumulator are combined;
// geometry is never touched.

impl AddAssign<&BinView<'_>> for BinViewMut<'_> {
    fn add_assign(&mut self, other: &BinView) {
        *self.value += other.value();
        *self.sum_w2 += other.sum_w2();
    }
}

impl SubAssign<&BinView<'_>> for BinViewMut<'_> {
    fn sub_assign(&mut self, other: &BinView) {
        *self.value -= other.value();
        // errors accumulate even when contents are subtracted
        *self.sum_w2 += other.sum_w2();
    }
}

impl MulAssign<&BinView<'_>> for BinViewMut<'_> {
    fn mul_assign(&mut self, other: &BinView) {
        *self.value *= other.value();
        *self.sum_w2 *= other.sum_w2();
    }
}

impl DivAssign<&BinView<'_>> for BinViewMut<'_> {
    fn div_assign(&mut self, other: &BinView) {
        *self.value /= other.value();
        *self.sum_w2 /= other.sum_w2();
    }
}
