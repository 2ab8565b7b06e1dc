/// Domain-level errors shared by the store and the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity has no matching row.
    ///
    /// `id` is kept as received from the caller, which may not be a valid
    /// integer key.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },
}
