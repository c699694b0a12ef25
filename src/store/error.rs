use thiserror::Error;

/// Failures reaching the observation store.
///
/// Both variants mean the store cannot answer; callers surface them as a
/// server error rather than returning partial data.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    #[error("store is missing the `{0}` table")]
    MissingTable(&'static str),
}
