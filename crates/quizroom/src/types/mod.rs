//! Validated domain types.

mod base_url;
mod resource_id;

pub use base_url::BaseUrl;
pub use resource_id::ResourceId;
