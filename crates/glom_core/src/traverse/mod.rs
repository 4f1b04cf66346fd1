mod convert;
mod error;
mod path;
mod shape;
mod step;
mod value;
mod walk;

/// Typed accessor entry points for scalar leaves.
pub use convert::{as_float, as_integer, as_string};
/// Error and result aliases.
pub use error::{GlomError, Result};
/// Dotted path parser types and the wildcard-stop marker.
pub use path::{DottedPath, PathSegment, WILDCARD_STOP};
/// Legal-selector enumeration.
pub use shape::possible_selectors;
/// Single-step selector resolution.
pub use step::descend;
/// Runtime value model and record builder types.
pub use value::{FieldValue, RecordValue, Value, ValueKind};
/// Path walk entry points.
pub use walk::{walk, walk_path};
