pub mod pipeline;

pub use pipeline::{BatchRunner, JdSource};
