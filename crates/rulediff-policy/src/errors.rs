use thiserror::Error;

/// Errors that can occur while walking an export document.
///
/// All of these indicate malformed input; the caller is expected to abort
/// before any output file is written.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// A value expected to be a JSON object is not one.
    #[error("expected a JSON object at {0}")]
    NotAnObject(String),
    /// A required field is absent.
    #[error("missing field `{field}` in {context}")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
        /// Location within the document.
        context: String,
    },
    /// A field expected to hold an array holds something else.
    #[error("field `{field}` in {context} is not an array")]
    NotAnArray {
        /// Name of the offending field.
        field: &'static str,
        /// Location within the document.
        context: String,
    },
    /// A container's `friendlyName` is absent or not a string.
    #[error("container at {0} has no string `friendlyName`")]
    UnnamedContainer(String),
    /// A rule document has no string `name` field.
    #[error("rule without a string `name` in {0}")]
    UnnamedRule(String),
}
