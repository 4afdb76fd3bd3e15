pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use config::AppConfig;
pub use error::TasklaneError;
pub use result::TasklaneResult;
