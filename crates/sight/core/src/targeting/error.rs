use crate::env::OracleError;
use crate::error::{ErrorSeverity, SpatialError};
use crate::geometry::GeometryError;

/// Errors surfaced by targeting queries.
///
/// An absent world is not an error: queries anchored there return no targets.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TargetingError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl SpatialError for TargetingError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TargetingError::Oracle(err) => err.severity(),
            TargetingError::Geometry(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TargetingError::Oracle(err) => err.error_code(),
            TargetingError::Geometry(err) => err.error_code(),
        }
    }
}
