//! Cloudflare Workers AI driver.

mod driver;

pub use driver::{
    CloudflareConfig, CloudflareConfigBuilder, CloudflareConfigBuilderError, CloudflareDriver,
};
