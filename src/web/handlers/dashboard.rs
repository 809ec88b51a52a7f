use super::{
    about_us_json, banner_json, blog_json, media_json, ok, ok_message, partner_json, service_json,
    slider_json, ABOUT_US_BUCKET, BANNERS_BUCKET, BLOGS_BUCKET, PARTNERS_BUCKET,
    SERVICE_HEADER_IMAGE_BUCKET, SERVICE_MAIN_IMAGE_BUCKET, SERVICE_SUPPLIES_IMAGE_BUCKET,
    SLIDERS_BUCKET,
};
use crate::models::MediaKind;
use crate::services as svc;
use crate::services::assets::AssetKind;
use crate::services::media::bucket_for;
use crate::services::slug::{unique_slug, validate_slug};
use crate::web::error::{ApiError, ApiResult};
use crate::web::forms::{FormData, Validator};
use crate::web::state::AppState;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Services

pub async fn list_services(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let services = svc::service::list_services(&state.db, false)?;
    Ok(ok(services
        .iter()
        .map(|s| service_json(&state.assets, s))
        .collect::<Vec<_>>()))
}

pub async fn show_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let service = svc::service::get_service(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Service not found".to_string()))?;
    Ok(ok(service_json(&state.assets, &service)))
}

pub async fn create_service(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> ApiResult<Response> {
    let form = FormData::read(multipart).await?;
    let mut v = Validator::new(&form);

    let title_en = v.required("title_en");
    let title_ar = v.required("title_ar");
    let short_description_en = v.required("short_description_en");
    let short_description_ar = v.required("short_description_ar");
    let full_description_en = v.required("full_description_en");
    let full_description_ar = v.required("full_description_ar");
    let supplies_text_en = v.required("supplies_text_en");
    let supplies_text_ar = v.required("supplies_text_ar");
    let main_image_alt_en = v.required("main_image_alt_en");
    let main_image_alt_ar = v.required("main_image_alt_ar");
    let header_image_alt_en = v.required("header_image_alt_en");
    let header_image_alt_ar = v.required("header_image_alt_ar");
    let supplies_image_alt_en = v.required("supplies_image_alt_en");
    let supplies_image_alt_ar = v.required("supplies_image_alt_ar");
    let main_file = v.required_image("main_image");
    let header_file = v.required_image("header_image");
    let supplies_file = v.required_image("supplies_image");
    v.finish()?;

    // Assets are written before the row is inserted; an encoding or I/O
    // failure aborts the request with no half-written record.
    let main_image = main_file
        .map(|f| state.assets.store(f, SERVICE_MAIN_IMAGE_BUCKET, AssetKind::Image))
        .transpose()?;
    let header_image = header_file
        .map(|f| state.assets.store(f, SERVICE_HEADER_IMAGE_BUCKET, AssetKind::Image))
        .transpose()?;
    let supplies_image = supplies_file
        .map(|f| state.assets.store(f, SERVICE_SUPPLIES_IMAGE_BUCKET, AssetKind::Image))
        .transpose()?;

    let db = state.db.clone();
    let slug_en = unique_slug(&title_en, |s| {
        svc::service::slug_exists(&db, s).unwrap_or(false)
    });
    // An all-Arabic English title would slugify to nothing.
    if !validate_slug(&slug_en) {
        let mut errors = BTreeMap::new();
        errors.insert(
            "title_en".to_string(),
            "The title_en must contain latin letters or digits.".to_string(),
        );
        return Err(ApiError::Validation(errors));
    }

    let input = svc::service::ServiceInput {
        title_en,
        slug_ar: title_ar.clone(),
        title_ar,
        short_description_en: Some(short_description_en),
        short_description_ar: Some(short_description_ar),
        full_description_en: Some(full_description_en),
        full_description_ar: Some(full_description_ar),
        en_meta_title: form.text("en_meta_title"),
        en_meta_description: form.text("en_meta_description"),
        ar_meta_title: form.text("ar_meta_title"),
        ar_meta_description: form.text("ar_meta_description"),
        slug_en,
        main_image,
        header_image,
        supplies_image,
        main_image_alt_en: Some(main_image_alt_en),
        main_image_alt_ar: Some(main_image_alt_ar),
        header_image_alt_en: Some(header_image_alt_en),
        header_image_alt_ar: Some(header_image_alt_ar),
        supplies_image_alt_en: Some(supplies_image_alt_en),
        supplies_image_alt_ar: Some(supplies_image_alt_ar),
        supplies_text_en: Some(supplies_text_en),
        supplies_text_ar: Some(supplies_text_ar),
        is_active: form.bool_flag("is_active", true),
    };
    let service = svc::service::create_service(&state.db, &input)?;

    Ok((
        StatusCode::CREATED,
        ok_message(
            "Service created successfully",
            service_json(&state.assets, &service),
        ),
    )
        .into_response())
}

pub async fn update_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> ApiResult<Json<Value>> {
    let existing = svc::service::get_service(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Service not found".to_string()))?;

    let form = FormData::read(multipart).await?;
    let mut v = Validator::new(&form);

    let title_en = v.required("title_en");
    let title_ar = v.required("title_ar");
    let main_file = v.optional_image("main_image");
    let header_file = v.optional_image("header_image");
    let supplies_file = v.optional_image("supplies_image");
    v.finish()?;

    let main_image = match main_file {
        Some(f) => Some(state.assets.replace(
            existing.main_image.as_deref(),
            f,
            SERVICE_MAIN_IMAGE_BUCKET,
            AssetKind::Image,
        )?),
        None => existing.main_image.clone(),
    };
    let header_image = match header_file {
        Some(f) => Some(state.assets.replace(
            existing.header_image.as_deref(),
            f,
            SERVICE_HEADER_IMAGE_BUCKET,
            AssetKind::Image,
        )?),
        None => existing.header_image.clone(),
    };
    let supplies_image = match supplies_file {
        Some(f) => Some(state.assets.replace(
            existing.supplies_image.as_deref(),
            f,
            SERVICE_SUPPLIES_IMAGE_BUCKET,
            AssetKind::Image,
        )?),
        None => existing.supplies_image.clone(),
    };

    let input = svc::service::ServiceInput {
        title_en,
        title_ar,
        short_description_en: form.text("short_description_en").or(existing.short_description_en),
        short_description_ar: form.text("short_description_ar").or(existing.short_description_ar),
        full_description_en: form.text("full_description_en").or(existing.full_description_en),
        full_description_ar: form.text("full_description_ar").or(existing.full_description_ar),
        en_meta_title: form.text("en_meta_title").or(existing.en_meta_title),
        en_meta_description: form.text("en_meta_description").or(existing.en_meta_description),
        ar_meta_title: form.text("ar_meta_title").or(existing.ar_meta_title),
        ar_meta_description: form.text("ar_meta_description").or(existing.ar_meta_description),
        slug_en: existing.slug_en,
        slug_ar: existing.slug_ar,
        main_image,
        header_image,
        supplies_image,
        main_image_alt_en: form.text("main_image_alt_en").or(existing.main_image_alt_en),
        main_image_alt_ar: form.text("main_image_alt_ar").or(existing.main_image_alt_ar),
        header_image_alt_en: form.text("header_image_alt_en").or(existing.header_image_alt_en),
        header_image_alt_ar: form.text("header_image_alt_ar").or(existing.header_image_alt_ar),
        supplies_image_alt_en: form
            .text("supplies_image_alt_en")
            .or(existing.supplies_image_alt_en),
        supplies_image_alt_ar: form
            .text("supplies_image_alt_ar")
            .or(existing.supplies_image_alt_ar),
        supplies_text_en: form.text("supplies_text_en").or(existing.supplies_text_en),
        supplies_text_ar: form.text("supplies_text_ar").or(existing.supplies_text_ar),
        is_active: form.bool_flag("is_active", existing.is_active),
    };
    let service = svc::service::update_service(&state.db, id, &input)?
        .ok_or_else(|| ApiError::NotFound("Service not found".to_string()))?;

    Ok(ok_message(
        "Service updated successfully",
        service_json(&state.assets, &service),
    ))
}

pub async fn toggle_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let active = svc::service::toggle_service(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Service not found".to_string()))?;
    Ok(Json(
        json!({ "status": true, "message": "Status updated", "is_active": active }),
    ))
}

// ---------------------------------------------------------------------------
// Blogs

pub async fn list_blogs(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let blogs = svc::blogs::list_blogs(&state.db, false)?;
    Ok(ok(blogs
        .iter()
        .map(|b| blog_json(&state.assets, b))
        .collect::<Vec<_>>()))
}

pub async fn show_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let blog = svc::blogs::get_blog(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Blog not found".to_string()))?;
    Ok(ok(blog_json(&state.assets, &blog)))
}

pub async fn create_blog(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> ApiResult<Response> {
    let form = FormData::read(multipart).await?;
    let mut v = Validator::new(&form);

    let title_en = v.required("title_en");
    let title_ar = v.required("title_ar");
    let short_description_en = v.required("short_description_en");
    let short_description_ar = v.required("short_description_ar");
    let full_description_en = v.required("full_description_en");
    let full_description_ar = v.required("full_description_ar");
    let external_image_alt_en = v.required("external_image_alt_en");
    let external_image_alt_ar = v.required("external_image_alt_ar");
    let internal_image_alt_en = v.required("internal_image_alt_en");
    let internal_image_alt_ar = v.required("internal_image_alt_ar");
    let header_image_alt_en = v.required("header_image_alt_en");
    let header_image_alt_ar = v.required("header_image_alt_ar");
    let external_file = v.required_image("external_image");
    let internal_file = v.required_image("internal_image");
    let header_file = v.required_image("header_image");
    v.finish()?;

    let external_image = external_file
        .map(|f| state.assets.store(f, BLOGS_BUCKET, AssetKind::Image))
        .transpose()?;
    let internal_image = internal_file
        .map(|f| state.assets.store(f, BLOGS_BUCKET, AssetKind::Image))
        .transpose()?;
    let header_image = header_file
        .map(|f| state.assets.store(f, BLOGS_BUCKET, AssetKind::Image))
        .transpose()?;

    let db = state.db.clone();
    let slug_en = unique_slug(&title_en, |s| {
        svc::blogs::slug_exists(&db, s).unwrap_or(false)
    });
    if !validate_slug(&slug_en) {
        let mut errors = BTreeMap::new();
        errors.insert(
            "title_en".to_string(),
            "The title_en must contain latin letters or digits.".to_string(),
        );
        return Err(ApiError::Validation(errors));
    }

    let input = svc::blogs::BlogInput {
        title_en,
        slug_ar: title_ar.clone(),
        title_ar,
        short_description_en: Some(short_description_en),
        short_description_ar: Some(short_description_ar),
        full_description_en: Some(full_description_en),
        full_description_ar: Some(full_description_ar),
        en_meta_title: form.text("en_meta_title"),
        en_meta_description: form.text("en_meta_description"),
        ar_meta_title: form.text("ar_meta_title"),
        ar_meta_description: form.text("ar_meta_description"),
        external_image,
        external_image_alt_en: Some(external_image_alt_en),
        external_image_alt_ar: Some(external_image_alt_ar),
        internal_image,
        internal_image_alt_en: Some(internal_image_alt_en),
        internal_image_alt_ar: Some(internal_image_alt_ar),
        header_image,
        header_image_alt_en: Some(header_image_alt_en),
        header_image_alt_ar: Some(header_image_alt_ar),
        slug_en,
        is_active: form.bool_flag("is_active", true),
    };
    let blog = svc::blogs::create_blog(&state.db, &input)?;

    Ok((
        StatusCode::CREATED,
        ok_message(
            "Blog created successfully",
            blog_json(&state.assets, &blog),
        ),
    )
        .into_response())
}

pub async fn update_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> ApiResult<Json<Value>> {
    let existing = svc::blogs::get_blog(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Blog not found".to_string()))?;

    let form = FormData::read(multipart).await?;
    let mut v = Validator::new(&form);

    let title_en = v.required("title_en");
    let title_ar = v.required("title_ar");
    let external_file = v.optional_image("external_image");
    let internal_file = v.optional_image("internal_image");
    let header_file = v.optional_image("header_image");
    v.finish()?;

    let external_image = match external_file {
        Some(f) => Some(state.assets.replace(
            existing.external_image.as_deref(),
            f,
            BLOGS_BUCKET,
            AssetKind::Image,
        )?),
        None => existing.external_image.clone(),
    };
    let internal_image = match internal_file {
        Some(f) => Some(state.assets.replace(
            existing.internal_image.as_deref(),
            f,
            BLOGS_BUCKET,
            AssetKind::Image,
        )?),
        None => existing.internal_image.clone(),
    };
    let header_image = match header_file {
        Some(f) => Some(state.assets.replace(
            existing.header_image.as_deref(),
            f,
            BLOGS_BUCKET,
            AssetKind::Image,
        )?),
        None => existing.header_image.clone(),
    };

    let input = svc::blogs::BlogInput {
        title_en,
        title_ar,
        short_description_en: form.text("short_description_en").or(existing.short_description_en),
        short_description_ar: form.text("short_description_ar").or(existing.short_description_ar),
        full_description_en: form.text("full_description_en").or(existing.full_description_en),
        full_description_ar: form.text("full_description_ar").or(existing.full_description_ar),
        en_meta_title: form.text("en_meta_title").or(existing.en_meta_title),
        en_meta_description: form.text("en_meta_description").or(existing.en_meta_description),
        ar_meta_title: form.text("ar_meta_title").or(existing.ar_meta_title),
        ar_meta_description: form.text("ar_meta_description").or(existing.ar_meta_description),
        external_image,
        external_image_alt_en: form
            .text("external_image_alt_en")
            .or(existing.external_image_alt_en),
        external_image_alt_ar: form
            .text("external_image_alt_ar")
            .or(existing.external_image_alt_ar),
        internal_image,
        internal_image_alt_en: form
            .text("internal_image_alt_en")
            .or(existing.internal_image_alt_en),
        internal_image_alt_ar: form
            .text("internal_image_alt_ar")
            .or(existing.internal_image_alt_ar),
        header_image,
        header_image_alt_en: form.text("header_image_alt_en").or(existing.header_image_alt_en),
        header_image_alt_ar: form.text("header_image_alt_ar").or(existing.header_image_alt_ar),
        slug_en: existing.slug_en,
        slug_ar: existing.slug_ar,
        is_active: form.bool_flag("is_active", existing.is_active),
    };
    let blog = svc::blogs::update_blog(&state.db, id, &input)?
        .ok_or_else(|| ApiError::NotFound("Blog not found".to_string()))?;

    Ok(ok_message(
        "Blog updated successfully",
        blog_json(&state.assets, &blog),
    ))
}

pub async fn toggle_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let active = svc::blogs::toggle_blog(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Blog not found".to_string()))?;
    Ok(Json(
        json!({ "status": true, "message": "Status updated", "is_active": active }),
    ))
}

// ---------------------------------------------------------------------------
// Categories

#[derive(Deserialize)]
pub struct CategoryForm {
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub is_active: Option<bool>,
}

fn category_input(form: &CategoryForm, default_active: bool) -> Result<svc::categories::CategoryInput, ApiError> {
    let mut errors = BTreeMap::new();
    let name_en = form.name_en.clone().unwrap_or_default().trim().to_string();
    let name_ar = form.name_ar.clone().unwrap_or_default().trim().to_string();
    if name_en.is_empty() {
        errors.insert(
            "name_en".to_string(),
            "The name_en field is required.".to_string(),
        );
    }
    if name_ar.is_empty() {
        errors.insert(
            "name_ar".to_string(),
            "The name_ar field is required.".to_string(),
        );
    }
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    Ok(svc::categories::CategoryInput {
        name_en,
        name_ar,
        is_active: form.is_active.unwrap_or(default_active),
    })
}

pub async fn list_categories(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let categories = svc::categories::list_categories(&state.db)?;
    Ok(ok(categories))
}

pub async fn show_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let category = svc::categories::get_category(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;
    Ok(ok(category))
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(form): Json<CategoryForm>,
) -> ApiResult<Response> {
    let input = category_input(&form, false)?;
    let category = svc::categories::create_category(&state.db, &input)?;
    Ok((
        StatusCode::CREATED,
        ok_message("Category created successfully", category),
    )
        .into_response())
}

pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(form): Json<CategoryForm>,
) -> ApiResult<Json<Value>> {
    let existing = svc::categories::get_category(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;
    let input = category_input(&form, existing.is_active)?;
    let category = svc::categories::update_category(&state.db, id, &input)?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;
    Ok(ok_message("Category updated successfully", category))
}

pub async fn toggle_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let active = svc::categories::toggle_category(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;
    Ok(Json(
        json!({ "status": true, "message": "Status updated", "is_active": active }),
    ))
}

// ---------------------------------------------------------------------------
// Partners

pub async fn create_partner(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> ApiResult<Response> {
    let form = FormData::read(multipart).await?;
    let mut v = Validator::new(&form);

    let name_en = v.required("name_en");
    let name_ar = v.required("name_ar");
    let en_alt_image = v.required("en_alt_image");
    let ar_alt_image = v.required("ar_alt_image");
    let category_raw = v.required("category_id");
    let image_file = v.required_image("image");

    let category_id = match category_raw.parse::<i64>() {
        Ok(id) => {
            if svc::categories::get_category(&state.db, id)?.is_none() {
                v.fail("category_id", "The selected category_id is invalid.");
            }
            id
        }
        Err(_) => {
            v.fail("category_id", "The category_id must be an integer.");
            0
        }
    };
    v.finish()?;

    let image = image_file
        .map(|f| state.assets.store(f, PARTNERS_BUCKET, AssetKind::Image))
        .transpose()?
        .unwrap_or_default();

    let input = svc::partners::PartnerInput {
        name_en,
        name_ar,
        image,
        en_alt_image: Some(en_alt_image),
        ar_alt_image: Some(ar_alt_image),
        category_id,
        is_active: form.bool_flag("is_active", true),
    };
    let partner = svc::partners::create_partner(&state.db, &input)?;

    Ok((
        StatusCode::CREATED,
        ok_message(
            "Partner created successfully",
            partner_json(&state.assets, &partner),
        ),
    )
        .into_response())
}

pub async fn update_partner(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> ApiResult<Json<Value>> {
    let existing = svc::partners::get_partner(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Partner not found".to_string()))?;

    let form = FormData::read(multipart).await?;
    let mut v = Validator::new(&form);

    let name_en = v.required("name_en");
    let name_ar = v.required("name_ar");
    let category_raw = v.required("category_id");
    let image_file = v.optional_image("image");

    let category_id = match category_raw.parse::<i64>() {
        Ok(id) => {
            if svc::categories::get_category(&state.db, id)?.is_none() {
                v.fail("category_id", "The selected category_id is invalid.");
            }
            id
        }
        Err(_) => {
            v.fail("category_id", "The category_id must be an integer.");
            0
        }
    };
    v.finish()?;

    let image = match image_file {
        Some(f) => {
            state
                .assets
                .replace(Some(&existing.image), f, PARTNERS_BUCKET, AssetKind::Image)?
        }
        None => existing.image.clone(),
    };

    let input = svc::partners::PartnerInput {
        name_en,
        name_ar,
        image,
        en_alt_image: form.text("en_alt_image").or(existing.en_alt_image),
        ar_alt_image: form.text("ar_alt_image").or(existing.ar_alt_image),
        category_id,
        is_active: form.bool_flag("is_active", existing.is_active),
    };
    let partner = svc::partners::update_partner(&state.db, id, &input)?
        .ok_or_else(|| ApiError::NotFound("Partner not found".to_string()))?;

    Ok(ok_message(
        "Partner updated successfully",
        partner_json(&state.assets, &partner),
    ))
}

pub async fn toggle_partner(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let active = svc::partners::toggle_partner(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Partner not found".to_string()))?;
    Ok(Json(
        json!({ "status": true, "message": "Status updated", "is_active": active }),
    ))
}

pub async fn partners_by_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let partners = svc::partners::list_by_category(&state.db, category_id, false)?;
    Ok(ok(partners
        .iter()
        .map(|p| partner_json(&state.assets, p))
        .collect::<Vec<_>>()))
}

// ---------------------------------------------------------------------------
// Contact messages

pub async fn list_contacts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let contacts = svc::contacts::list_contacts(&state.db)?;
    Ok(ok(contacts))
}

pub async fn show_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let contact = svc::contacts::get_and_mark_read(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Contact message not found".to_string()))?;
    Ok(ok(contact))
}

pub async fn mark_contact_seen(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    if !svc::contacts::mark_seen(&state.db, id)? {
        return Err(ApiError::NotFound("Contact message not found".to_string()));
    }
    Ok(Json(json!({ "status": true, "message": "Marked as seen" })))
}

// ---------------------------------------------------------------------------
// Media gallery

pub async fn list_media(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let items = svc::media::list_media(&state.db, false)?;
    Ok(ok(items
        .iter()
        .map(|m| media_json(&state.assets, m))
        .collect::<Vec<_>>()))
}

pub async fn create_media(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> ApiResult<Response> {
    let form = FormData::read(multipart).await?;
    let mut v = Validator::new(&form);

    let kind_raw = v.required("kind");
    let kind = MediaKind::from_str(&kind_raw).unwrap_or_else(|_| {
        v.fail("kind", "The kind must be image or video.");
        MediaKind::Image
    });

    let file = match kind {
        MediaKind::Image => v.required_image("file"),
        MediaKind::Video => v.required_video("file"),
    };
    let video_url = form.text("video_url");
    if kind == MediaKind::Video && video_url.is_none() {
        v.fail("video_url", "The video_url field is required for videos.");
    }
    v.finish()?;

    let asset_kind = match kind {
        MediaKind::Image => AssetKind::Image,
        MediaKind::Video => AssetKind::Video,
    };
    let file_name = file
        .map(|f| state.assets.store(f, bucket_for(kind), asset_kind))
        .transpose()?
        .unwrap_or_default();

    let input = svc::media::MediaInput {
        kind,
        file_name,
        video_url,
        alt_text: form.text("alt_text"),
        is_active: form.bool_flag("is_active", true),
    };
    let item = svc::media::create_media(&state.db, &input)?;

    Ok((
        StatusCode::CREATED,
        ok_message(
            "Media created successfully",
            media_json(&state.assets, &item),
        ),
    )
        .into_response())
}

pub async fn update_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> ApiResult<Json<Value>> {
    let existing = svc::media::get_media(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Media not found".to_string()))?;

    let form = FormData::read(multipart).await?;
    let mut v = Validator::new(&form);

    // The item keeps its kind; only the file, link and alt text may change.
    let file = match existing.kind {
        MediaKind::Image => v.optional_image("file"),
        MediaKind::Video => v.optional_video("file"),
    };
    v.finish()?;

    let asset_kind = match existing.kind {
        MediaKind::Image => AssetKind::Image,
        MediaKind::Video => AssetKind::Video,
    };
    let file_name = match file {
        Some(f) => state.assets.replace(
            Some(&existing.file_name),
            f,
            bucket_for(existing.kind),
            asset_kind,
        )?,
        None => existing.file_name.clone(),
    };

    let input = svc::media::MediaInput {
        kind: existing.kind,
        file_name,
        video_url: form.text("video_url").or(existing.video_url),
        alt_text: form.text("alt_text").or(existing.alt_text),
        is_active: form.bool_flag("is_active", existing.is_active),
    };
    let item = svc::media::update_media(&state.db, id, &input)?
        .ok_or_else(|| ApiError::NotFound("Media not found".to_string()))?;

    Ok(ok_message(
        "Media updated successfully",
        media_json(&state.assets, &item),
    ))
}

pub async fn toggle_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let active = svc::media::toggle_media(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Media not found".to_string()))?;
    Ok(Json(
        json!({ "status": true, "message": "Status updated", "is_active": active }),
    ))
}

// ---------------------------------------------------------------------------
// Sliders

pub async fn list_sliders(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let sliders = svc::sliders::list_sliders(&state.db, false)?;
    Ok(ok(sliders
        .iter()
        .map(|s| slider_json(&state.assets, s))
        .collect::<Vec<_>>()))
}

pub async fn create_slider(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> ApiResult<Response> {
    let form = FormData::read(multipart).await?;
    let mut v = Validator::new(&form);

    let title_en = v.required("title_en");
    let title_ar = v.required("title_ar");
    let description_en = v.required("description_en");
    let description_ar = v.required("description_ar");
    let image_file = v.optional_image("image");
    let video_file = v.optional_video("video");
    if form.file("image").is_none() && form.file("video").is_none() {
        v.fail("media", "You must upload either an image or a video.");
    }
    v.finish()?;

    let image = image_file
        .map(|f| state.assets.store(f, SLIDERS_BUCKET, AssetKind::Image))
        .transpose()?;
    let video = video_file
        .map(|f| state.assets.store(f, SLIDERS_BUCKET, AssetKind::Video))
        .transpose()?;

    let input = svc::sliders::SliderInput {
        title_en: Some(title_en),
        title_ar: Some(title_ar),
        description_en: Some(description_en),
        description_ar: Some(description_ar),
        image,
        video,
        en_image_alt: form.text("en_image_alt"),
        ar_image_alt: form.text("ar_image_alt"),
        en_video_alt: form.text("en_video_alt"),
        ar_video_alt: form.text("ar_video_alt"),
        is_active: form.bool_flag("is_active", true),
    };
    let slider = svc::sliders::create_slider(&state.db, &input)?;

    Ok((
        StatusCode::CREATED,
        ok_message(
            "Slider created successfully",
            slider_json(&state.assets, &slider),
        ),
    )
        .into_response())
}

pub async fn update_slider(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> ApiResult<Json<Value>> {
    let existing = svc::sliders::get_slider(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Slider not found".to_string()))?;

    let form = FormData::read(multipart).await?;
    let mut v = Validator::new(&form);
    let image_file = v.optional_image("image");
    let video_file = v.optional_video("video");
    v.finish()?;

    let image = match image_file {
        Some(f) => Some(state.assets.replace(
            existing.image.as_deref(),
            f,
            SLIDERS_BUCKET,
            AssetKind::Image,
        )?),
        None => existing.image.clone(),
    };
    let video = match video_file {
        Some(f) => Some(state.assets.replace(
            existing.video.as_deref(),
            f,
            SLIDERS_BUCKET,
            AssetKind::Video,
        )?),
        None => existing.video.clone(),
    };

    let input = svc::sliders::SliderInput {
        title_en: form.text("title_en").or(existing.title_en),
        title_ar: form.text("title_ar").or(existing.title_ar),
        description_en: form.text("description_en").or(existing.description_en),
        description_ar: form.text("description_ar").or(existing.description_ar),
        image,
        video,
        en_image_alt: form.text("en_image_alt").or(existing.en_image_alt),
        ar_image_alt: form.text("ar_image_alt").or(existing.ar_image_alt),
        en_video_alt: form.text("en_video_alt").or(existing.en_video_alt),
        ar_video_alt: form.text("ar_video_alt").or(existing.ar_video_alt),
        is_active: form.bool_flag("is_active", existing.is_active),
    };
    let slider = svc::sliders::update_slider(&state.db, id, &input)?
        .ok_or_else(|| ApiError::NotFound("Slider not found".to_string()))?;

    Ok(ok_message(
        "Slider updated successfully",
        slider_json(&state.assets, &slider),
    ))
}

pub async fn toggle_slider(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let active = svc::sliders::toggle_slider(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Slider not found".to_string()))?;
    Ok(Json(
        json!({ "status": true, "message": "Status updated", "is_active": active }),
    ))
}

// ---------------------------------------------------------------------------
// SEO tags

#[derive(Deserialize)]
pub struct SeoTagForm {
    pub en_meta_title: Option<String>,
    pub en_meta_description: Option<String>,
    pub ar_meta_title: Option<String>,
    pub ar_meta_description: Option<String>,
    pub page_name: Option<String>,
}

fn seo_tag_input(form: &SeoTagForm) -> Result<svc::seo_tags::SeoTagInput, ApiError> {
    let input = svc::seo_tags::SeoTagInput {
        en_meta_title: form.en_meta_title.clone().filter(|s| !s.trim().is_empty()),
        en_meta_description: form
            .en_meta_description
            .clone()
            .filter(|s| !s.trim().is_empty()),
        ar_meta_title: form.ar_meta_title.clone().filter(|s| !s.trim().is_empty()),
        ar_meta_description: form
            .ar_meta_description
            .clone()
            .filter(|s| !s.trim().is_empty()),
        page_name: form.page_name.clone().filter(|s| !s.trim().is_empty()),
    };
    if input.en_meta_title.is_none()
        && input.en_meta_description.is_none()
        && input.ar_meta_title.is_none()
        && input.ar_meta_description.is_none()
        && input.page_name.is_none()
    {
        return Err(ApiError::bad_request("At least one field is required."));
    }
    Ok(input)
}

pub async fn list_seo_tags(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let tags = svc::seo_tags::list_seo_tags(&state.db)?;
    Ok(ok(tags))
}

pub async fn show_seo_tag(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let tag = svc::seo_tags::get_seo_tag(&state.db, id)?
        .ok_or_else(|| ApiError::NotFound("Seo tag not found".to_string()))?;
    Ok(ok(tag))
}

pub async fn create_seo_tag(
    State(state): State<Arc<AppState>>,
    Json(form): Json<SeoTagForm>,
) -> ApiResult<Response> {
    let input = seo_tag_input(&form)?;
    let tag = svc::seo_tags::create_seo_tag(&state.db, &input)?;
    Ok((
        StatusCode::CREATED,
        ok_message("Seo tag created successfully", tag),
    )
        .into_response())
}

pub async fn update_seo_tag(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(form): Json<SeoTagForm>,
) -> ApiResult<Json<Value>> {
    let input = seo_tag_input(&form)?;
    let tag = svc::seo_tags::update_seo_tag(&state.db, id, &input)?
        .ok_or_else(|| ApiError::NotFound("Seo tag not found".to_string()))?;
    Ok(ok_message("Seo tag updated successfully", tag))
}

// ---------------------------------------------------------------------------
// Banners

pub async fn list_banners(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let banners = svc::banners::list_banners(&state.db)?;
    Ok(ok(banners
        .iter()
        .map(|b| banner_json(&state.assets, b))
        .collect::<Vec<_>>()))
}

pub async fn show_banner(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
) -> ApiResult<Json<Value>> {
    let banner = svc::banners::get_by_page(&state.db, &page)?
        .ok_or_else(|| ApiError::NotFound("Banner not found".to_string()))?;
    Ok(ok(json!({
        "image_url": state.assets.url_opt(banner.image.as_deref(), BANNERS_BUCKET),
    })))
}

pub async fn create_banner(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> ApiResult<Response> {
    let form = FormData::read(multipart).await?;
    let mut v = Validator::new(&form);

    let page = v.required("page");
    let image_file = v.required_image("image");
    if !page.is_empty() && svc::banners::page_exists(&state.db, &page)? {
        v.fail("page", "The page has already been taken.");
    }
    v.finish()?;

    let image = image_file
        .map(|f| state.assets.store(f, BANNERS_BUCKET, AssetKind::Image))
        .transpose()?;

    let banner = svc::banners::create_banner(&state.db, &page, image.as_deref())?;
    Ok((
        StatusCode::CREATED,
        ok_message(
            "Banner created successfully",
            banner_json(&state.assets, &banner),
        ),
    )
        .into_response())
}

pub async fn update_banner(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
    multipart: Multipart,
) -> ApiResult<Json<Value>> {
    let existing = svc::banners::get_by_page(&state.db, &page)?
        .ok_or_else(|| ApiError::NotFound("Banner not found".to_string()))?;

    let form = FormData::read(multipart).await?;
    let mut v = Validator::new(&form);
    let image_file = v.optional_image("image");
    v.finish()?;

    let banner = match image_file {
        Some(f) => {
            let image = state.assets.replace(
                existing.image.as_deref(),
                f,
                BANNERS_BUCKET,
                AssetKind::Image,
            )?;
            svc::banners::set_banner_image(&state.db, &page, &image)?
                .ok_or_else(|| ApiError::NotFound("Banner not found".to_string()))?
        }
        None => existing,
    };

    Ok(ok_message(
        "Banner updated successfully",
        banner_json(&state.assets, &banner),
    ))
}

// ---------------------------------------------------------------------------
// Contact info

#[derive(Deserialize)]
pub struct ContactInfoForm {
    pub phone_one: Option<String>,
    pub phone_two: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    pub map_link: Option<String>,
    pub working_hours: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub snapchat: Option<String>,
    pub youtube: Option<String>,
    pub tiktok: Option<String>,
}

pub async fn show_contact_info(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let info = svc::contact_info::get_contact_info(&state.db)?;
    Ok(ok(info))
}

pub async fn update_contact_info(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactInfoForm>,
) -> ApiResult<Json<Value>> {
    let mut errors = BTreeMap::new();
    let phone_one = form.phone_one.clone().unwrap_or_default().trim().to_string();
    let whatsapp = form.whatsapp.clone().unwrap_or_default().trim().to_string();
    let address = form.address.clone().unwrap_or_default().trim().to_string();
    if phone_one.is_empty() {
        errors.insert(
            "phone_one".to_string(),
            "The phone_one field is required.".to_string(),
        );
    }
    if whatsapp.is_empty() {
        errors.insert(
            "whatsapp".to_string(),
            "The whatsapp field is required.".to_string(),
        );
    }
    if address.is_empty() {
        errors.insert(
            "address".to_string(),
            "The address field is required.".to_string(),
        );
    }
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let input = svc::contact_info::ContactInfoInput {
        phone_one,
        phone_two: form.phone_two.filter(|s| !s.trim().is_empty()),
        whatsapp,
        address,
        map_link: form.map_link.filter(|s| !s.trim().is_empty()),
        working_hours: form.working_hours.filter(|s| !s.trim().is_empty()),
        facebook: form.facebook.filter(|s| !s.trim().is_empty()),
        instagram: form.instagram.filter(|s| !s.trim().is_empty()),
        twitter: form.twitter.filter(|s| !s.trim().is_empty()),
        snapchat: form.snapchat.filter(|s| !s.trim().is_empty()),
        youtube: form.youtube.filter(|s| !s.trim().is_empty()),
        tiktok: form.tiktok.filter(|s| !s.trim().is_empty()),
    };
    let info = svc::contact_info::upsert_contact_info(&state.db, &input)?;
    Ok(ok_message("Contact info saved successfully", info))
}

// ---------------------------------------------------------------------------
// Privacy policy

#[derive(Deserialize)]
pub struct PrivacyPolicyForm {
    pub en_title: Option<String>,
    pub en_description: Option<String>,
    pub ar_title: Option<String>,
    pub ar_description: Option<String>,
}

pub async fn update_privacy_policy(
    State(state): State<Arc<AppState>>,
    Json(form): Json<PrivacyPolicyForm>,
) -> ApiResult<Json<Value>> {
    let mut errors = BTreeMap::new();
    let en_title = form.en_title.clone().unwrap_or_default().trim().to_string();
    let en_description = form
        .en_description
        .clone()
        .unwrap_or_default()
        .trim()
        .to_string();
    let ar_title = form.ar_title.clone().unwrap_or_default().trim().to_string();
    let ar_description = form
        .ar_description
        .clone()
        .unwrap_or_default()
        .trim()
        .to_string();
    for (name, value) in [
        ("en_title", &en_title),
        ("en_description", &en_description),
        ("ar_title", &ar_title),
        ("ar_description", &ar_description),
    ] {
        if value.is_empty() {
            errors.insert(
                name.to_string(),
                format!("The {} field is required.", name),
            );
        }
    }
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let input = svc::privacy_policy::PrivacyPolicyInput {
        en_title,
        en_description,
        ar_title,
        ar_description,
    };
    let policy = svc::privacy_policy::upsert_policy(&state.db, &input)?;
    Ok(ok_message("Privacy Policy saved successfully", policy))
}

// ---------------------------------------------------------------------------
// About us

pub async fn show_about_us(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let about = svc::about_us::get_about_us(&state.db)?;
    Ok(ok(about.map(|a| about_us_json(&state.assets, &a))))
}

pub async fn update_about_us(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> ApiResult<Json<Value>> {
    let existing = svc::about_us::get_about_us(&state.db)?;

    let form = FormData::read(multipart).await?;
    let mut v = Validator::new(&form);

    let title_en = v.required("title_en");
    let title_ar = v.required("title_ar");
    let home_description_en = v.required("home_description_en");
    let home_description_ar = v.required("home_description_ar");
    let about_description_en = v.required("about_description_en");
    let about_description_ar = v.required("about_description_ar");
    let en_alt_image = v.required("en_alt_image");
    let ar_alt_image = v.required("ar_alt_image");
    let image_file = v.optional_image("image");
    v.finish()?;

    let old_image = existing.as_ref().and_then(|a| a.image.clone());
    let image = match image_file {
        Some(f) => Some(state.assets.replace(
            old_image.as_deref(),
            f,
            ABOUT_US_BUCKET,
            AssetKind::Image,
        )?),
        None => old_image,
    };

    let input = svc::about_us::AboutUsInput {
        title_en,
        title_ar,
        home_description_en,
        home_description_ar,
        about_description_en,
        about_description_ar,
        mission_en: form.text("mission_en"),
        mission_ar: form.text("mission_ar"),
        vision_en: form.text("vision_en"),
        vision_ar: form.text("vision_ar"),
        investments_en: form.text("investments_en"),
        investments_ar: form.text("investments_ar"),
        why_us_en: form.text("why_us_en"),
        why_us_ar: form.text("why_us_ar"),
        image,
        en_alt_image: Some(en_alt_image),
        ar_alt_image: Some(ar_alt_image),
    };
    let about = svc::about_us::upsert_about_us(&state.db, &input)?;

    Ok(ok_message(
        "About us saved successfully",
        about_us_json(&state.assets, &about),
    ))
}
