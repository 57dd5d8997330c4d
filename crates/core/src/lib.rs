pub mod ensemble;
pub mod sensitivity;
pub mod slice;

pub use ensemble::EnsembleIdent;
pub use sensitivity::{Sensitivity, SensitivityCasePair};
pub use slice::SliceAxis;
