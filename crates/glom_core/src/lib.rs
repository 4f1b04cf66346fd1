//! Public library API for dotted-path traversal over dynamic values.

/// Value model, traversal engine, typed accessors, and boundary adapters.
pub mod traverse;
