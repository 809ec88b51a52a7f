use super::handlers;
use super::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Read-only surface consumed by the public website, plus the contact form.
pub fn website_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/home", get(handlers::website::home))
        .route("/services", get(handlers::website::services))
        .route("/services/:slug", get(handlers::website::service_by_slug))
        .route("/blogs", get(handlers::website::blogs))
        .route("/blogs/:slug", get(handlers::website::blog_by_slug))
        .route(
            "/partners/category/:id/active",
            get(handlers::website::partners_by_category),
        )
        .route("/images", get(handlers::website::images))
        .route("/videos", get(handlers::website::videos))
        .route("/contact", post(handlers::website::submit_contact))
        .route("/about-us", get(handlers::website::about_us))
        .route("/privacy-policy", get(handlers::website::privacy_policy))
}

/// Admin CRUD surface. Authentication gating sits in front of this router
/// at the deployment layer and is out of scope here.
pub fn dashboard_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Services
        .route("/services", get(handlers::dashboard::list_services))
        .route("/services", post(handlers::dashboard::create_service))
        .route("/services/:id", get(handlers::dashboard::show_service))
        .route(
            "/services/:id/update",
            post(handlers::dashboard::update_service),
        )
        .route(
            "/services/:id/toggle",
            post(handlers::dashboard::toggle_service),
        )
        // Blogs
        .route("/blogs", get(handlers::dashboard::list_blogs))
        .route("/blogs", post(handlers::dashboard::create_blog))
        .route("/blogs/show/:id", get(handlers::dashboard::show_blog))
        .route("/blogs/:id/update", post(handlers::dashboard::update_blog))
        .route("/blogs/:id/toggle", post(handlers::dashboard::toggle_blog))
        // Categories
        .route("/categories", get(handlers::dashboard::list_categories))
        .route("/categories", post(handlers::dashboard::create_category))
        .route("/categories/:id", get(handlers::dashboard::show_category))
        .route(
            "/categories/:id/update",
            post(handlers::dashboard::update_category),
        )
        .route(
            "/categories/:id/toggle",
            post(handlers::dashboard::toggle_category),
        )
        // Partners
        .route("/partners", post(handlers::dashboard::create_partner))
        .route(
            "/partners/:id/update",
            post(handlers::dashboard::update_partner),
        )
        .route(
            "/partners/:id/toggle",
            post(handlers::dashboard::toggle_partner),
        )
        .route(
            "/partners/category/:category_id",
            get(handlers::dashboard::partners_by_category),
        )
        // Contact messages
        .route("/contact", get(handlers::dashboard::list_contacts))
        .route("/contact/:id", get(handlers::dashboard::show_contact))
        .route(
            "/contact/:id/seen",
            post(handlers::dashboard::mark_contact_seen),
        )
        // Media gallery
        .route("/media", get(handlers::dashboard::list_media))
        .route("/media", post(handlers::dashboard::create_media))
        .route("/media/:id/update", post(handlers::dashboard::update_media))
        .route("/media/:id/toggle", post(handlers::dashboard::toggle_media))
        // Sliders
        .route("/sliders", get(handlers::dashboard::list_sliders))
        .route("/sliders", post(handlers::dashboard::create_slider))
        .route(
            "/sliders/:id/update",
            post(handlers::dashboard::update_slider),
        )
        .route(
            "/sliders/:id/toggle",
            post(handlers::dashboard::toggle_slider),
        )
        // SEO tags
        .route("/seo-tag", get(handlers::dashboard::list_seo_tags))
        .route("/seo-tag", post(handlers::dashboard::create_seo_tag))
        .route("/seo-tag/:id", get(handlers::dashboard::show_seo_tag))
        .route("/seo-tag/:id", post(handlers::dashboard::update_seo_tag))
        // Banners
        .route("/banners", get(handlers::dashboard::list_banners))
        .route("/banners", post(handlers::dashboard::create_banner))
        .route("/banners/:page", get(handlers::dashboard::show_banner))
        .route("/banners/:page", post(handlers::dashboard::update_banner))
        // Contact info
        .route("/contact-info", get(handlers::dashboard::show_contact_info))
        .route(
            "/contact-info",
            post(handlers::dashboard::update_contact_info),
        )
        // Privacy policy
        .route(
            "/privacy-policy",
            post(handlers::dashboard::update_privacy_policy),
        )
        // About us
        .route("/about-us", get(handlers::dashboard::show_about_us))
        .route(
            "/about-us/update",
            post(handlers::dashboard::update_about_us),
        )
        // Video-capable uploads need headroom over the 10MB field ceiling.
        .layer(DefaultBodyLimit::max(12 * 1024 * 1024))
}
