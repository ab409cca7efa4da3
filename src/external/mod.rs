pub mod mailgun;

pub use mailgun::*;
