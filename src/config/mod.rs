//! Configuration module

mod export;

pub use export::ExportConfig;
pub use export::OnError;
pub use export::CONFIG_FILE;
