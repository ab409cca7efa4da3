pub mod push;

pub use push::push_config;
