//! Dense storage for every bin combination. Each slot carries the
//! accumulated content and the sum of squared fill weights; slots are
//! addressed either by the 1-based global bin number or by per-axis bin
//! numbers. Bounds are the caller's responsibility, as the owning histogram
//! has already resolved every coordinate to a valid bin.

use crate::error::ConfigError;
use crate::index::{global_from_ijk, ijk_from_global, Dims, Ijk};

#[derive(Debug, Clone, PartialEq)]
pub struct BinContainer {
    dims: Dims,
    values: Vec<f64>,
    sum_w2: Vec<f64>,
}

impl BinContainer {
    /// `dims` are the per-axis bin counts; trailing extents of 1 mean
    /// "dimension unused". A used dimension may not follow an unused one.
    pub fn new(dims: Dims) -> Result<Self, ConfigError> {
        let [nx, ny, nz] = dims;
        if nx < 1 || ny < 1 || nz < 1 || (ny == 1 && nz > 1) {
            return Err(ConfigError::InvalidBinCounts(dims));
        }
        let n = nx * ny * nz;
        Ok(Self { dims, values: vec![0.0; n], sum_w2: vec![0.0; n] })
    }

    /// Build from 1 to 3 per-axis counts, padding the trailing dimensions.
    pub fn from_counts(counts: &[usize]) -> Result<Self, ConfigError> {
        match *counts {
            [nx] => Self::new([nx, 1, 1]),
            [nx, ny] => Self::new([nx, ny, 1]),
            [nx, ny, nz] => Self::new([nx, ny, nz]),
            _ => Err(ConfigError::DimensionCount(counts.len())),
        }
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Total number of slots: the product of the per-axis counts.
    pub fn bin_count(&self) -> usize {
        self.values.len()
    }

    pub fn global_from_ijk(&self, ijk: Ijk) -> usize {
        global_from_ijk(ijk, self.dims)
    }

    pub fn ijk_from_global(&self, g: usize) -> Ijk {
        ijk_from_global(g, self.dims)
    }

    /// Add `weight` to the slot holding per-axis bins `ijk`.
    pub fn fill(&mut self, ijk: Ijk, weight: f64) {
        let n = self.global_from_ijk(ijk) - 1;
        self.values[n] += weight;
        self.sum_w2[n] += weight * weight;
    }

    pub fn value(&self, g: usize) -> f64 {
        self.values[g - 1]
    }

    pub fn set_value(&mut self, g: usize, v: f64) {
        self.values[g - 1] = v;
    }

    pub fn value_at(&self, ijk: Ijk) -> f64 {
        self.value(self.global_from_ijk(ijk))
    }

    pub fn set_value_at(&mut self, ijk: Ijk, v: f64) {
        self.set_value(self.global_from_ijk(ijk), v)
    }

    pub fn sum_w2(&self, g: usize) -> f64 {
        self.sum_w2[g - 1]
    }

    pub fn set_sum_w2(&mut self, g: usize, w2: f64) {
        self.sum_w2[g - 1] = w2;
    }

    /// Poisson-style bin error: the square root of the summed squared weights.
    pub fn error(&self, g: usize) -> f64 {
        self.sum_w2[g - 1].sqrt()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn sum_w2_slice(&self) -> &[f64] {
        &self.sum_w2
    }

    pub(crate) fn slots_mut(&mut self) -> impl Iterator<Item = (&mut f64, &mut f64)> {
        self.values.iter_mut().zip(self.sum_w2.iter_mut())
    }
}
