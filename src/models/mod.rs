mod about_us;
mod banner;
mod blog;
mod category;
mod contact;
mod contact_info;
mod media;
mod partner;
mod privacy_policy;
mod seo_tag;
mod service;
mod slider;

pub use about_us::*;
pub use banner::*;
pub use blog::*;
pub use category::*;
pub use contact::*;
pub use contact_info::*;
pub use media::*;
pub use partner::*;
pub use privacy_policy::*;
pub use seo_tag::*;
pub use service::*;
pub use slider::*;
