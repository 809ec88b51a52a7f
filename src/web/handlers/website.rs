use super::{
    about_us_json, banner_json, blog_json, media_json, ok, ok_message, partner_json, service_json,
    slider_json, BANNERS_BUCKET, PARTNERS_BUCKET,
};
use crate::models::MediaKind;
use crate::services as svc;
use crate::web::error::{ApiError, ApiResult};
use crate::web::state::AppState;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// GET /api/website/home
pub async fn home(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let services = svc::service::list_services(&state.db, true)?;
    let media = svc::media::list_media(&state.db, true)?;
    let sliders = svc::sliders::list_sliders(&state.db, true)?;
    let categories = svc::categories::list_active_with_partners(&state.db)?;
    let about = svc::about_us::get_about_us(&state.db)?;

    let categories_json: Vec<Value> = categories
        .iter()
        .map(|c| {
            let mut v = serde_json::to_value(&c.category).unwrap_or_default();
            if let Value::Object(map) = &mut v {
                map.insert(
                    "partners".to_string(),
                    Value::Array(
                        c.partners
                            .iter()
                            .map(|p| partner_json(&state.assets, p))
                            .collect(),
                    ),
                );
            }
            v
        })
        .collect();

    Ok(ok(json!({
        "services": services.iter().map(|s| service_json(&state.assets, s)).collect::<Vec<_>>(),
        "media": media.iter().map(|m| media_json(&state.assets, m)).collect::<Vec<_>>(),
        "sliders": sliders.iter().map(|s| slider_json(&state.assets, s)).collect::<Vec<_>>(),
        "categories": categories_json,
        "about_us": about.map(|a| about_us_json(&state.assets, &a)),
    })))
}

/// GET /api/website/services
pub async fn services(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let services = svc::service::list_services(&state.db, true)?;
    let banner = svc::banners::get_by_page(&state.db, "services")?;

    Ok(Json(json!({
        "status": true,
        "services": services.iter().map(|s| service_json(&state.assets, s)).collect::<Vec<_>>(),
        "banner": banner.map(|b| banner_json(&state.assets, &b)),
    })))
}

/// GET /api/website/services/:slug
pub async fn service_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Value>> {
    let service = svc::service::get_active_by_slug(&state.db, &slug)?
        .ok_or_else(|| ApiError::NotFound("Active service not found".to_string()))?;
    Ok(ok(service_json(&state.assets, &service)))
}

/// GET /api/website/blogs
pub async fn blogs(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let blogs = svc::blogs::list_blogs(&state.db, true)?;
    let banner = svc::banners::get_by_page(&state.db, "blog")?;

    Ok(Json(json!({
        "status": true,
        "blogs": blogs.iter().map(|b| blog_json(&state.assets, b)).collect::<Vec<_>>(),
        "banner": banner.map(|b| banner_json(&state.assets, &b)),
    })))
}

/// GET /api/website/blogs/:slug
pub async fn blog_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Value>> {
    let blog = svc::blogs::get_active_by_slug(&state.db, &slug)?
        .ok_or_else(|| ApiError::NotFound("Blog not found or inactive".to_string()))?;
    Ok(ok(blog_json(&state.assets, &blog)))
}

#[derive(Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

/// GET /api/website/partners/category/:id/active
///
/// Projects partner names and alt texts into the requested language.
pub async fn partners_by_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i64>,
    Query(query): Query<LangQuery>,
) -> ApiResult<Json<Value>> {
    let lang = query.lang.as_deref().unwrap_or("en");
    let partners = svc::partners::list_by_category(&state.db, category_id, true)?;
    let banner = svc::banners::get_by_page(&state.db, "partner")?;

    let partners_json: Vec<Value> = partners
        .iter()
        .map(|p| {
            json!({
                "name": if lang == "ar" { &p.name_ar } else { &p.name_en },
                "image_url": state.assets.url_for(&p.image, PARTNERS_BUCKET),
                "category_id": p.category_id,
                "alt": if lang == "ar" { &p.ar_alt_image } else { &p.en_alt_image },
            })
        })
        .collect();

    Ok(ok(json!({
        "banner": {
            "image_url": banner
                .and_then(|b| state.assets.url_opt(b.image.as_deref(), BANNERS_BUCKET)),
        },
        "partners": partners_json,
    })))
}

/// GET /api/website/images
pub async fn images(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let items = svc::media::list_active_by_kind(&state.db, MediaKind::Image)?;
    Ok(ok(items
        .iter()
        .map(|m| media_json(&state.assets, m))
        .collect::<Vec<_>>()))
}

/// GET /api/website/videos
pub async fn videos(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let items = svc::media::list_active_by_kind(&state.db, MediaKind::Video)?;
    Ok(ok(items
        .iter()
        .map(|m| media_json(&state.assets, m))
        .collect::<Vec<_>>()))
}

#[derive(Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// POST /api/website/contact
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> ApiResult<Json<Value>> {
    let mut errors = BTreeMap::new();

    let name = form.name.unwrap_or_default().trim().to_string();
    if name.is_empty() {
        errors.insert("name".to_string(), "The name field is required.".to_string());
    } else if name.len() > 255 {
        errors.insert(
            "name".to_string(),
            "The name may not be greater than 255 characters.".to_string(),
        );
    }

    let message = form.message.unwrap_or_default().trim().to_string();
    if message.is_empty() {
        errors.insert(
            "message".to_string(),
            "The message field is required.".to_string(),
        );
    } else if message.len() > 2000 {
        errors.insert(
            "message".to_string(),
            "The message may not be greater than 2000 characters.".to_string(),
        );
    }

    if let Some(ref email) = form.email {
        if !email.trim().is_empty() && !email.contains('@') {
            errors.insert(
                "email".to_string(),
                "The email must be a valid email address.".to_string(),
            );
        }
    }

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let input = svc::contacts::ContactInput {
        name,
        email: form.email.filter(|e| !e.trim().is_empty()),
        phone: form.phone.filter(|p| !p.trim().is_empty()),
        message,
    };
    let contact = svc::contacts::create_contact(&state.db, &input)?;
    Ok(ok_message("Message sent successfully", contact))
}

/// GET /api/website/about-us
pub async fn about_us(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let about = svc::about_us::get_about_us(&state.db)?;
    let services = svc::service::list_services(&state.db, true)?;

    Ok(ok(json!({
        "about_us": about.map(|a| about_us_json(&state.assets, &a)),
        "services": services.iter().map(|s| service_json(&state.assets, s)).collect::<Vec<_>>(),
    })))
}

/// GET /api/website/privacy-policy
pub async fn privacy_policy(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let policy = svc::privacy_policy::get_policy(&state.db)?;
    Ok(ok(policy))
}
