pub mod markers;
pub mod validate;
