//! Concrete setting policies.
//!
//! Generic select policies cover most kinds; the slice-range and sensitivity
//! policies carry type-specific fixup and composite validity.

pub mod number;
pub mod select;
pub mod sensitivity;
pub mod slice;
pub mod toggle;

pub use number::NumberSelectPolicy;
pub use select::{MultiSelectPolicy, SingleSelectPolicy};
pub use sensitivity::SensitivityPolicy;
pub use slice::SliceRangePolicy;
pub use toggle::TogglePolicy;
