use serde::Serialize;

pub mod decode_failure;

pub use decode_failure::DecodeFailure;

/// Serializes any error as its display string.
pub struct SerializableError<'a>(&'a dyn std::error::Error);

impl Serialize for SerializableError<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self.0)
    }
}

impl<'a, E: std::error::Error> From<&'a E> for SerializableError<'a> {
    fn from(value: &'a E) -> Self {
        SerializableError(value)
    }
}

#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub error: SerializableError<'a>,
}

impl<'a> ErrorBody<'a> {
    pub fn new<E: std::error::Error>(e: &'a E) -> Self {
        Self { error: e.into() }
    }
}
