//! Configuration module

mod site;

pub use site::BlogConfig;
pub use site::CmsBackend;
pub use site::CmsConfig;
pub use site::ServerConfig;
pub use site::SiteConfig;
pub use site::API_KEY_ENV;
