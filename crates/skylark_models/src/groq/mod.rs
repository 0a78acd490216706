//! Groq LPU Inference API driver.

mod driver;

pub use driver::{GroqConfig, GroqConfigBuilder, GroqConfigBuilderError, GroqDriver};
