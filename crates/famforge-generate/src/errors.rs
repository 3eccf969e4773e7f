use thiserror::Error;

/// Errors emitted by the record generator.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid range for {field}: {min} must be <= {max}")]
    InvalidRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
    #[error("empty vocabulary: {0}")]
    EmptyVocabulary(&'static str),
    #[error("invalid date for {field}: {year}-{month:02}-{day:02}")]
    InvalidDate {
        field: &'static str,
        year: i32,
        month: u32,
        day: u32,
    },
}
