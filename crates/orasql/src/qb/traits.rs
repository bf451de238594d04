//! Common behavior over the statement builders.

use crate::params::Params;

/// The surface a fully built statement exposes to its execution layer.
///
/// Rendering is a pure projection of the accumulated state: repeated calls
/// return byte-identical text and never mutate the builder.
pub trait SqlStatement {
    /// Render the statement text.
    fn to_sql(&self) -> String;

    /// The bound parameters, in insertion order.
    fn params(&self) -> &Params;
}
