pub mod bootstrap;
pub mod config;
pub mod forge;
pub mod git;
pub mod logging;
pub mod paths;
pub mod prompt;

// Re-export commonly used types
pub use bootstrap::{Bootstrap, Outcome};
pub use config::{Settings, TemplateContext};
