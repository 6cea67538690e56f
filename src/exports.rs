pub use crate::axis::{Axis, AxisKind, AxisSpec, BinInfo};
pub use crate::bins::BinContainer;
pub use crate::error::{ConfigError, Incompatibility, ResolveError};
pub use crate::hist::{Coords, Histogram, Series, EDGE_TOLERANCE};
pub use crate::index::{global_from_ijk, ijk_from_global, Dims, Ijk};
pub use crate::value::{Value, ValueKind};
pub use crate::view::{BinView, BinViewMut};
