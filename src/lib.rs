//! Grid-argument binding and materialization for N-dimensional kernel
//! dispatch.
//!
//! When a kernel is launched over an N-dimensional grid, some of its
//! parameters are not backed by memory at all: their value is derived from
//! the invocation's grid coordinate through per-dimension strided
//! addressing, `offset[i] + t[i] * stride[i]`. This crate is the pure
//! computation core behind such bindings.
//!
//! # Core Types
//!
//! - [`Grid`]: Immutable per-dimension offset/stride descriptor, dimension
//!   count fixed at compile time
//! - [`Materialize`] / [`materialize`]: Derive the value for one
//!   invocation, laid out as a scalar, an ordered array `[E; N]`, or a
//!   [`Vector<E, N>`] whose lane order is the reverse of the array order
//! - [`Vectorize`] with [`Dim`] / [`Natural`] requests: Compile-time rules
//!   selecting the representation type for a parameter type and requested
//!   dimension count
//! - [`bind`] over [`TypeDescriptor`] / [`DimRequest`]: The same rules at
//!   the data level, for binding layers driven by type reflection
//!
//! # Example
//!
//! ```rust
//! use gridarg::{bind, materialize, DimRequest, Grid, Shape, TypeDescriptor, Vector};
//!
//! // Once per kernel parameter: resolve the representation to bind as.
//! let param = TypeDescriptor::vector::<i32>(2);
//! let resolved = bind(param, DimRequest::Natural).unwrap();
//! assert_eq!(resolved.shape(), Shape::Vector { len: 2 });
//!
//! // Once per binding: fix the addressing parameters.
//! let grid = Grid::new([10, 20], [2, 3]);
//!
//! // Once per invocation: materialize the argument value.
//! let value: Vector<i32, 2> = materialize(&grid, [0, 1]);
//! // Vector lanes are in reverse dimension order.
//! assert_eq!(value, Vector::new([23, 10]));
//! ```
//!
//! # Error Model
//!
//! Everything that can fail does so while a binding is being established:
//! descriptor construction with the wrong arity
//! ([`BindError::ArityMismatch`]) or a parameter type with no resolution
//! rule ([`BindError::UnsupportedVectorization`]). Once a binding exists,
//! [`materialize`] is total: pure arithmetic with no error path, safe to
//! call from any number of dispatch lanes concurrently.

mod bind;
mod element;
mod grid;
mod materialize;
mod vector;
mod vectorize;

// ============================================================================
// Grid descriptor
// ============================================================================
pub use grid::Grid;

// ============================================================================
// Elements and representations
// ============================================================================
pub use element::{Element, ScalarKind};
pub use vector::Vector;

// ============================================================================
// Materialization
// ============================================================================
pub use materialize::{materialize, Materialize};

// ============================================================================
// Shape resolution (compile-time and bind-time)
// ============================================================================
pub use bind::{bind, DimRequest, TypeDescriptor};
pub use vectorize::{Dim, Natural, Request, Vectorize};

/// Layout of a materialized argument value.
///
/// `Array` preserves ascending dimension order; `Vector` lays the same
/// components out in reverse dimension order, matching the lane
/// convention of the vector types this crate binds against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A single component; only one-dimensional grids have this layout.
    Scalar,
    /// `len` components in ascending dimension order.
    Array { len: usize },
    /// `len` lanes in reverse dimension order.
    Vector { len: usize },
}

impl Shape {
    /// The dimension count this layout carries.
    pub fn natural_dim(&self) -> usize {
        match *self {
            Shape::Scalar => 1,
            Shape::Array { len } | Shape::Vector { len } => len,
        }
    }
}

// ============================================================================
// Error types
// ============================================================================

/// Errors raised while establishing a grid-argument binding.
///
/// Both variants are diagnosed before any invocation runs; materialization
/// itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// Offset and stride sequences do not both hold one value per grid
    /// dimension.
    #[error("arity mismatch: got {offsets} offsets and {strides} strides for a {expected}-dimensional grid")]
    ArityMismatch {
        expected: usize,
        offsets: usize,
        strides: usize,
    },

    /// No resolution rule matches the parameter type and requested
    /// dimension.
    #[error("no vectorization rule for parameter type `{param}` with requested dimension {dim}")]
    UnsupportedVectorization {
        param: TypeDescriptor,
        dim: DimRequest,
    },
}

/// Result type for binding operations.
pub type Result<T> = std::result::Result<T, BindError>;
