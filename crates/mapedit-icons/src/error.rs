//! Error types for icon resolution.

use crate::icon::IconKind;
use crate::vehicle_class::VehicleClass;

/// Result type alias for icon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or registering icons.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A POI carried a classification tag with no icon mapping.
    ///
    /// This is a caller/configuration defect: an unvalidated or unsupported
    /// category reached the resolver. There is no fallback icon.
    #[error("Invalid POI category '{class}'")]
    InvalidCategory { class: VehicleClass },

    /// Registry construction left an icon kind without data.
    #[error("No icon data registered for kind '{kind}'")]
    MissingIcon { kind: IconKind },

    /// Registry construction saw the same icon kind twice.
    #[error("Icon data for kind '{kind}' registered more than once")]
    DuplicateIcon { kind: IconKind },
}

impl Error {
    /// Create an invalid-category error.
    pub fn invalid_category(class: VehicleClass) -> Self {
        Self::InvalidCategory { class }
    }

    /// Create a missing-icon error.
    pub fn missing_icon(kind: IconKind) -> Self {
        Self::MissingIcon { kind }
    }

    /// Create a duplicate-icon error.
    pub fn duplicate_icon(kind: IconKind) -> Self {
        Self::DuplicateIcon { kind }
    }
}
