//! Conversion between per-axis bin numbers and the flat global bin number.
//!
//! With I bins along x, J along y and K along z, the 1-based bin numbers
//! (i, j, k) map to the global bin b = ((k-1)*J + (j-1))*I + i, so x varies
//! fastest along the flat storage.

/// 1-based bin numbers along x, y, z. Unused dimensions sit at 1.
pub type Ijk = [usize; 3];
/// Number of bins along x, y, z. Unused dimensions have extent 1.
pub type Dims = [usize; 3];

pub fn global_from_ijk([i, j, k]: Ijk, [nx, ny, _nz]: Dims) -> usize {
    ((k - 1) * ny + (j - 1)) * nx + i
}

#[allow(clippy::many_single_char_names)]
pub fn ijk_from_global(g: usize, [nx, ny, _nz]: Dims) -> Ijk {
    let k = (g - 1) / (nx * ny) + 1;
    let r = g - (k - 1) * nx * ny;
    let j = (r - 1) / nx + 1;
    let i = r - (j - 1) * nx;
    [i, j, k]
}
