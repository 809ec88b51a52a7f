pub mod about_us;
pub mod assets;
pub mod banners;
pub mod blogs;
pub mod categories;
pub mod contact_info;
pub mod contacts;
pub mod media;
pub mod partners;
pub mod privacy_policy;
pub mod seo_tags;
pub mod service;
pub mod sliders;
pub mod slug;
