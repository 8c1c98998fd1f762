//! Common error infrastructure for sight-core.
//!
//! This module provides the shared severity classification used across all
//! error types in the crate. Domain-specific errors (`GeometryError`,
//! `TargetingError`, `VolumeError`, ...) live next to the operations that
//! raise them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each component has its own error enum with specific variants
//! - **Fail-soft queries**: An absent world is an empty result, never an error
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The host may succeed if the call is repeated later
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected inconsistencies that require investigation
/// - **Fatal**: Missing collaborators; the query layer is wired incorrectly
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the host world rejected a request it may accept later.
    ///
    /// Examples: voxel write refused outside the current build limits
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: zero-length direction vector
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - required oracle missing from the environment.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a wiring bug or corrupted state.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all sight-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait SpatialError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
