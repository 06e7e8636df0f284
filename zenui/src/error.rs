//! Error types.

use thiserror::Error;

/// Caller bugs detected while building a view.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    /// A size descriptor contains NaN or infinity.
    #[error("{view}: {field} is not a finite size")]
    NonFinite {
        /// The view being built.
        view: &'static str,
        /// The offending property.
        field: String,
    },
}

/// Caller bugs detected by a controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// The selected page does not exist.
    #[error("page {index} is out of range ({count} pages)")]
    PageOutOfRange {
        /// The requested page.
        index: usize,
        /// How many pages the controller has.
        count: usize,
    },
}

/// Any error raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Controller(#[from] ControllerError),
}
