//! Component errors.

use gesso_graft::GraftError;
use gesso_relief::AttrError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AtelierError {
    /// A variant axis or option the component's table does not define.
    #[error("unknown variant for {component}: {axis}={option}")]
    UnknownVariant {
        component: &'static str,
        axis: String,
        option: String,
    },

    #[error(transparent)]
    Graft(#[from] GraftError),

    #[error(transparent)]
    Merge(#[from] AttrError),

    /// The current page is outside `1..=total`.
    #[error("invalid pagination: page {current} of {total}")]
    InvalidPagination { current: usize, total: usize },
}
