/// Path lookup command.
pub mod get;
/// Selector listing command.
pub mod options;

pub(crate) mod util;
