pub mod envelope;
pub mod verification;

pub use envelope::*;
pub use verification::*;
