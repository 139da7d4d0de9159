//! Bind-time shape resolution for reflected parameter types.
//!
//! The compile-time rules in [`vectorize`](crate::vectorize) have a
//! data-level twin here for binding layers that work from type reflection:
//! a [`TypeDescriptor`] names a kernel parameter's type, a [`DimRequest`]
//! names the caller's dimension count, and [`bind`] applies the same rule
//! set once per kernel-parameter binding. No resolution happens after a
//! binding is established; `bind` failures abort the launch setup before
//! any invocation runs.

use crate::element::{Element, ScalarKind};
use crate::{BindError, Result, Shape};
use std::fmt;

/// A kernel parameter type as reported by reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A scalar numeric type.
    Scalar(ScalarKind),
    /// An ordered array of `len` elements.
    Array(ScalarKind, usize),
    /// A vector of `len` lanes.
    Vector(ScalarKind, usize),
}

impl TypeDescriptor {
    /// Descriptor for the scalar type `E`.
    pub fn scalar<E: Element>() -> Self {
        TypeDescriptor::Scalar(E::KIND)
    }

    /// Descriptor for `[E; len]`.
    pub fn array<E: Element>(len: usize) -> Self {
        TypeDescriptor::Array(E::KIND, len)
    }

    /// Descriptor for a `len`-lane vector of `E`.
    pub fn vector<E: Element>(len: usize) -> Self {
        TypeDescriptor::Vector(E::KIND, len)
    }

    /// The element kind of this type.
    pub fn element(&self) -> ScalarKind {
        match *self {
            TypeDescriptor::Scalar(kind)
            | TypeDescriptor::Array(kind, _)
            | TypeDescriptor::Vector(kind, _) => kind,
        }
    }

    /// The type's own dimension count: 1 for scalars, the length for
    /// arrays and vectors.
    pub fn natural_dim(&self) -> usize {
        match *self {
            TypeDescriptor::Scalar(_) => 1,
            TypeDescriptor::Array(_, len) | TypeDescriptor::Vector(_, len) => len,
        }
    }

    /// The layout this type materializes with.
    pub fn shape(&self) -> Shape {
        match *self {
            TypeDescriptor::Scalar(_) => Shape::Scalar,
            TypeDescriptor::Array(_, len) => Shape::Array { len },
            TypeDescriptor::Vector(_, len) => Shape::Vector { len },
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TypeDescriptor::Scalar(kind) => write!(f, "{kind}"),
            TypeDescriptor::Array(kind, len) => write!(f, "[{kind}; {len}]"),
            TypeDescriptor::Vector(kind, len) => write!(f, "{kind}x{len}"),
        }
    }
}

/// A caller's requested dimension count for one kernel parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DimRequest {
    /// Wildcard: use the parameter type's natural dimension.
    #[default]
    Natural,
    /// An exact dimension count, at least 1.
    Exact(usize),
}

impl DimRequest {
    /// Whether this request accepts a type whose natural dimension is
    /// `natural`.
    #[inline]
    pub fn accepts(&self, natural: usize) -> bool {
        match *self {
            DimRequest::Natural => true,
            DimRequest::Exact(dim) => dim == natural,
        }
    }
}

impl fmt::Display for DimRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DimRequest::Natural => f.write_str("natural"),
            DimRequest::Exact(dim) => write!(f, "{dim}"),
        }
    }
}

/// Resolve the representation type for one kernel parameter.
///
/// Rules are checked in priority order and the first match wins; in every
/// declared rule the representation is the parameter type itself, so a
/// successful bind returns `param` unchanged and the caller reads the
/// materializer operation from [`TypeDescriptor::shape`]. Dimension counts
/// start at 1: zero-length arrays and vectors match no rule, and neither
/// does an `Exact(0)` request.
///
/// # Errors
/// [`BindError::UnsupportedVectorization`] naming the parameter type and
/// the requested dimension when no rule matches. The failure is
/// diagnosed before any invocation runs; no partial binding is exposed.
///
/// # Example
/// ```
/// use gridarg::{bind, DimRequest, Shape, TypeDescriptor};
///
/// let param = TypeDescriptor::vector::<f32>(3);
/// let resolved = bind(param, DimRequest::Natural).unwrap();
/// assert_eq!(resolved, param);
/// assert_eq!(resolved.shape(), Shape::Vector { len: 3 });
///
/// assert!(bind(param, DimRequest::Exact(2)).is_err());
/// ```
pub fn bind(param: TypeDescriptor, dim: DimRequest) -> Result<TypeDescriptor> {
    match param {
        TypeDescriptor::Array(_, len) if len >= 1 && dim.accepts(len) => Ok(param),
        TypeDescriptor::Vector(_, len) if len >= 1 && dim.accepts(len) => Ok(param),
        TypeDescriptor::Scalar(_) if dim.accepts(1) => Ok(param),
        _ => Err(BindError::UnsupportedVectorization { param, dim }),
    }
}
