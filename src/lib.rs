#![doc = include_str!("../README.md")]
pub mod linear_set;
pub mod order;
pub mod sorted_set;


pub use linear_set::LinearSet;
pub use order::{Natural, Order};
pub use sorted_set::SortedSet;

use std::error;
use std::fmt::{Display, Formatter};

/// Error returned by operations that are not defined for a container
/// variant.
///
/// [`LinearSet`] stores its elements in arrival order, so the boundary
/// queries (`lower_bound`, `upper_bound`, `equal_range`) have no meaningful
/// answer there. They surface this error instead of a position that merely
/// looks valid.
#[derive(Debug, PartialEq, Eq)]
pub struct Unsupported {
    operation: &'static str,
    variant: &'static str,
}

impl Unsupported {
    pub(crate) fn new(operation: &'static str, variant: &'static str) -> Self {
        Self { operation, variant }
    }

    /// The name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl Display for Unsupported {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is not supported by {}: elements are not stored in sorted order",
            self.operation, self.variant
        )
    }
}

impl error::Error for Unsupported {}
