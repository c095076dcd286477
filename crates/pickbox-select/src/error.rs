/// Errors reported by [`Select`](crate::Select) construction and selection.
///
/// Every operation validates before it mutates anything, so when one of
/// these comes back the option records, the native control, and the surface
/// are exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// The native control reported no options to mirror.
    #[error("native control has no options")]
    NoOptions,
    /// No option carries the requested value.
    #[error("no option with value {0:?}")]
    NoSuchOption(String),
    /// An index past the end of the option list.
    #[error("option index {index} out of range for {len} options")]
    IndexOutOfRange { index: usize, len: usize },
}
