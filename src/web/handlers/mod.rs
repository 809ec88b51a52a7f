pub mod dashboard;
pub mod website;

use crate::models::{AboutUs, Banner, Blog, MediaItem, Partner, Service, Slider};
use crate::services::assets::AssetStore;
use crate::services::media::bucket_for;
use axum::response::Json;
use serde::Serialize;
use serde_json::{json, Value};

pub const ABOUT_US_BUCKET: &str = "about-us";
pub const PARTNERS_BUCKET: &str = "partners";
pub const BANNERS_BUCKET: &str = "banners";
pub const BLOGS_BUCKET: &str = "blogs";
pub const SLIDERS_BUCKET: &str = "sliders";
pub const SERVICE_MAIN_IMAGE_BUCKET: &str = "services/main_image";
pub const SERVICE_HEADER_IMAGE_BUCKET: &str = "services/header_image";
pub const SERVICE_SUPPLIES_IMAGE_BUCKET: &str = "services/supplies_image";

pub fn ok(data: impl Serialize) -> Json<Value> {
    Json(json!({ "status": true, "data": data }))
}

pub fn ok_message(message: &str, data: impl Serialize) -> Json<Value> {
    Json(json!({ "status": true, "message": message, "data": data }))
}

/// Serialize a record and append `<field>_url` keys resolved by the asset store.
fn attach_urls(value: impl Serialize, urls: Vec<(&str, Option<String>)>) -> Value {
    let mut v = serde_json::to_value(value).unwrap_or_default();
    if let Value::Object(map) = &mut v {
        for (field, url) in urls {
            map.insert(
                format!("{}_url", field),
                url.map(Value::String).unwrap_or(Value::Null),
            );
        }
    }
    v
}

pub fn service_json(assets: &AssetStore, service: &Service) -> Value {
    attach_urls(
        service,
        vec![
            (
                "main_image",
                assets.url_opt(service.main_image.as_deref(), SERVICE_MAIN_IMAGE_BUCKET),
            ),
            (
                "header_image",
                assets.url_opt(service.header_image.as_deref(), SERVICE_HEADER_IMAGE_BUCKET),
            ),
            (
                "supplies_image",
                assets.url_opt(
                    service.supplies_image.as_deref(),
                    SERVICE_SUPPLIES_IMAGE_BUCKET,
                ),
            ),
        ],
    )
}

pub fn blog_json(assets: &AssetStore, blog: &Blog) -> Value {
    attach_urls(
        blog,
        vec![
            (
                "external_image",
                assets.url_opt(blog.external_image.as_deref(), BLOGS_BUCKET),
            ),
            (
                "internal_image",
                assets.url_opt(blog.internal_image.as_deref(), BLOGS_BUCKET),
            ),
            (
                "header_image",
                assets.url_opt(blog.header_image.as_deref(), BLOGS_BUCKET),
            ),
        ],
    )
}

pub fn partner_json(assets: &AssetStore, partner: &Partner) -> Value {
    attach_urls(
        partner,
        vec![("image", Some(assets.url_for(&partner.image, PARTNERS_BUCKET)))],
    )
}

pub fn banner_json(assets: &AssetStore, banner: &Banner) -> Value {
    attach_urls(
        banner,
        vec![(
            "image",
            assets.url_opt(banner.image.as_deref(), BANNERS_BUCKET),
        )],
    )
}

pub fn slider_json(assets: &AssetStore, slider: &Slider) -> Value {
    attach_urls(
        slider,
        vec![
            (
                "image",
                assets.url_opt(slider.image.as_deref(), SLIDERS_BUCKET),
            ),
            (
                "video",
                assets.url_opt(slider.video.as_deref(), SLIDERS_BUCKET),
            ),
        ],
    )
}

pub fn about_us_json(assets: &AssetStore, about: &AboutUs) -> Value {
    attach_urls(
        about,
        vec![(
            "image",
            assets.url_opt(about.image.as_deref(), ABOUT_US_BUCKET),
        )],
    )
}

/// Media rows expose `file_url` for the uploaded asset; the `video_url`
/// column is an external link and passes through untouched.
pub fn media_json(assets: &AssetStore, item: &MediaItem) -> Value {
    let mut v = serde_json::to_value(item).unwrap_or_default();
    if let Value::Object(map) = &mut v {
        map.insert(
            "file_url".to_string(),
            Value::String(assets.url_for(&item.file_name, bucket_for(item.kind))),
        );
    }
    v
}
