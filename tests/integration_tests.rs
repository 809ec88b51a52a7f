use vitrine::models::MediaKind;
use vitrine::services::{
    about_us, banners, blogs, categories, contact_info, contacts, media, partners, privacy_policy,
    seo_tags, service, sliders,
};
use vitrine::services::slug::unique_slug;
use vitrine::Database;

fn create_test_db() -> Database {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let id: u32 = rng.gen();
    let name = format!("test_db_{}", id);

    let db = Database::open_memory(&name).expect("Failed to create test database");
    db.migrate().expect("Failed to run migrations");
    db
}

fn category_input(name: &str) -> categories::CategoryInput {
    categories::CategoryInput {
        name_en: name.to_string(),
        name_ar: format!("{}-ar", name),
        is_active: true,
    }
}

fn service_input(title: &str, slug: &str) -> service::ServiceInput {
    service::ServiceInput {
        title_en: title.to_string(),
        title_ar: format!("{}-ar", title),
        short_description_en: Some("Short".to_string()),
        short_description_ar: Some("Short ar".to_string()),
        full_description_en: Some("Full".to_string()),
        full_description_ar: Some("Full ar".to_string()),
        en_meta_title: None,
        en_meta_description: None,
        ar_meta_title: None,
        ar_meta_description: None,
        slug_en: slug.to_string(),
        slug_ar: format!("{}-ar", title),
        main_image: Some("main.webp".to_string()),
        header_image: Some("header.webp".to_string()),
        supplies_image: None,
        main_image_alt_en: Some("alt".to_string()),
        main_image_alt_ar: Some("alt ar".to_string()),
        header_image_alt_en: None,
        header_image_alt_ar: None,
        supplies_image_alt_en: None,
        supplies_image_alt_ar: None,
        supplies_text_en: None,
        supplies_text_ar: None,
        is_active: true,
    }
}

fn blog_input(title: &str, slug: &str) -> blogs::BlogInput {
    blogs::BlogInput {
        title_en: title.to_string(),
        title_ar: format!("{}-ar", title),
        short_description_en: Some("Short".to_string()),
        short_description_ar: None,
        full_description_en: Some("Full".to_string()),
        full_description_ar: None,
        en_meta_title: None,
        en_meta_description: None,
        ar_meta_title: None,
        ar_meta_description: None,
        external_image: Some("ext.webp".to_string()),
        external_image_alt_en: Some("alt".to_string()),
        external_image_alt_ar: None,
        internal_image: Some("int.webp".to_string()),
        internal_image_alt_en: None,
        internal_image_alt_ar: None,
        header_image: None,
        header_image_alt_en: None,
        header_image_alt_ar: None,
        slug_en: slug.to_string(),
        slug_ar: format!("{}-ar", title),
        is_active: true,
    }
}

mod category_tests {
    use super::*;

    #[test]
    fn test_create_and_get_category() {
        let db = create_test_db();
        let created = categories::create_category(&db, &category_input("Suppliers"))
            .expect("create category");
        assert!(created.id > 0);
        assert!(created.is_active);

        let fetched = categories::get_category(&db, created.id)
            .expect("get category")
            .expect("category exists");
        assert_eq!(fetched.name_en, "Suppliers");
        assert_eq!(fetched.name_ar, "Suppliers-ar");
    }

    #[test]
    fn test_update_category() {
        let db = create_test_db();
        let created =
            categories::create_category(&db, &category_input("Old")).expect("create category");

        let updated = categories::update_category(&db, created.id, &category_input("New"))
            .expect("update category")
            .expect("category exists");
        assert_eq!(updated.name_en, "New");
    }

    #[test]
    fn test_update_missing_category_returns_none() {
        let db = create_test_db();
        let result =
            categories::update_category(&db, 999, &category_input("Ghost")).expect("update");
        assert!(result.is_none());
    }

    #[test]
    fn test_toggle_category_flips_and_reports_new_state() {
        let db = create_test_db();
        let created =
            categories::create_category(&db, &category_input("Toggle")).expect("create category");
        assert!(created.is_active);

        let state = categories::toggle_category(&db, created.id)
            .expect("toggle")
            .expect("category exists");
        assert!(!state);

        let state = categories::toggle_category(&db, created.id)
            .expect("toggle")
            .expect("category exists");
        assert!(state);

        assert!(categories::toggle_category(&db, 999).expect("toggle").is_none());
    }

    #[test]
    fn test_list_categories_newest_first() {
        let db = create_test_db();
        categories::create_category(&db, &category_input("First")).expect("create");
        categories::create_category(&db, &category_input("Second")).expect("create");

        let list = categories::list_categories(&db).expect("list");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name_en, "Second");
        assert_eq!(list[1].name_en, "First");
    }

    #[test]
    fn test_active_categories_with_partners() {
        let db = create_test_db();
        let active =
            categories::create_category(&db, &category_input("Active")).expect("create");
        let hidden = categories::create_category(
            &db,
            &categories::CategoryInput {
                name_en: "Hidden".to_string(),
                name_ar: "Hidden-ar".to_string(),
                is_active: false,
            },
        )
        .expect("create");

        partners::create_partner(
            &db,
            &partners::PartnerInput {
                name_en: "Acme".to_string(),
                name_ar: "Acme-ar".to_string(),
                image: "acme.webp".to_string(),
                en_alt_image: None,
                ar_alt_image: None,
                category_id: active.id,
                is_active: true,
            },
        )
        .expect("create partner");

        let list = categories::list_active_with_partners(&db).expect("list");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].category.id, active.id);
        assert_eq!(list[0].partners.len(), 1);
        assert_ne!(list[0].category.id, hidden.id);
    }
}

mod partner_tests {
    use super::*;

    fn setup_category(db: &Database) -> i64 {
        categories::create_category(db, &category_input("Partners"))
            .expect("create category")
            .id
    }

    fn partner_input(name: &str, category_id: i64, active: bool) -> partners::PartnerInput {
        partners::PartnerInput {
            name_en: name.to_string(),
            name_ar: format!("{}-ar", name),
            image: "logo.webp".to_string(),
            en_alt_image: Some("logo".to_string()),
            ar_alt_image: None,
            category_id,
            is_active: active,
        }
    }

    #[test]
    fn test_create_update_toggle_partner() {
        let db = create_test_db();
        let category_id = setup_category(&db);

        let created = partners::create_partner(&db, &partner_input("Acme", category_id, true))
            .expect("create partner");
        assert_eq!(created.category_id, category_id);

        let updated = partners::update_partner(
            &db,
            created.id,
            &partner_input("Acme Corp", category_id, true),
        )
        .expect("update")
        .expect("partner exists");
        assert_eq!(updated.name_en, "Acme Corp");

        let state = partners::toggle_partner(&db, created.id)
            .expect("toggle")
            .expect("partner exists");
        assert!(!state);
    }

    #[test]
    fn test_list_by_category_active_filter() {
        let db = create_test_db();
        let category_id = setup_category(&db);

        partners::create_partner(&db, &partner_input("Visible", category_id, true))
            .expect("create");
        partners::create_partner(&db, &partner_input("Hidden", category_id, false))
            .expect("create");

        let all = partners::list_by_category(&db, category_id, false).expect("list all");
        assert_eq!(all.len(), 2);

        let active = partners::list_by_category(&db, category_id, true).expect("list active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name_en, "Visible");
    }
}

mod service_tests {
    use super::*;

    #[test]
    fn test_create_and_fetch_by_slug() {
        let db = create_test_db();
        let created = service::create_service(&db, &service_input("Logistics", "logistics"))
            .expect("create service");

        let by_en = service::get_active_by_slug(&db, "logistics")
            .expect("lookup")
            .expect("found");
        assert_eq!(by_en.id, created.id);

        // The Arabic slug resolves the same record.
        let by_ar = service::get_active_by_slug(&db, "Logistics-ar")
            .expect("lookup")
            .expect("found");
        assert_eq!(by_ar.id, created.id);
    }

    #[test]
    fn test_inactive_service_hidden_from_slug_lookup() {
        let db = create_test_db();
        let created = service::create_service(&db, &service_input("Hidden", "hidden"))
            .expect("create service");
        service::toggle_service(&db, created.id).expect("toggle");

        assert!(service::get_active_by_slug(&db, "hidden")
            .expect("lookup")
            .is_none());
    }

    #[test]
    fn test_unique_slug_against_database() {
        let db = create_test_db();
        service::create_service(&db, &service_input("Logistics", "logistics"))
            .expect("create service");

        let slug = unique_slug("Logistics", |s| {
            service::slug_exists(&db, s).unwrap_or(false)
        });
        assert_eq!(slug, "logistics-1");
    }

    #[test]
    fn test_update_service_full_replace() {
        let db = create_test_db();
        let created = service::create_service(&db, &service_input("Old", "old"))
            .expect("create service");

        let mut input = service_input("New", "old");
        input.main_image = Some("replacement.webp".to_string());
        let updated = service::update_service(&db, created.id, &input)
            .expect("update")
            .expect("service exists");
        assert_eq!(updated.title_en, "New");
        assert_eq!(updated.main_image.as_deref(), Some("replacement.webp"));
    }

    #[test]
    fn test_list_services_active_filter_and_order() {
        let db = create_test_db();
        service::create_service(&db, &service_input("First", "first")).expect("create");
        let second =
            service::create_service(&db, &service_input("Second", "second")).expect("create");
        service::toggle_service(&db, second.id).expect("toggle");

        let all = service::list_services(&db, false).expect("list");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title_en, "Second");

        let active = service::list_services(&db, true).expect("list active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title_en, "First");
    }
}

mod blog_tests {
    use super::*;

    #[test]
    fn test_create_and_fetch_blog() {
        let db = create_test_db();
        let created =
            blogs::create_blog(&db, &blog_input("Launch", "launch")).expect("create blog");

        let fetched = blogs::get_blog(&db, created.id)
            .expect("get")
            .expect("blog exists");
        assert_eq!(fetched.slug_en, "launch");

        let by_slug = blogs::get_active_by_slug(&db, "launch")
            .expect("lookup")
            .expect("found");
        assert_eq!(by_slug.id, created.id);
    }

    #[test]
    fn test_blog_slug_exists() {
        let db = create_test_db();
        blogs::create_blog(&db, &blog_input("Launch", "launch")).expect("create blog");

        assert!(blogs::slug_exists(&db, "launch").expect("check"));
        assert!(!blogs::slug_exists(&db, "other").expect("check"));
    }

    #[test]
    fn test_toggled_blog_hidden_from_active_list() {
        let db = create_test_db();
        let created =
            blogs::create_blog(&db, &blog_input("Launch", "launch")).expect("create blog");
        blogs::toggle_blog(&db, created.id).expect("toggle");

        assert!(blogs::list_blogs(&db, true).expect("list").is_empty());
        assert_eq!(blogs::list_blogs(&db, false).expect("list").len(), 1);
    }
}

mod banner_tests {
    use super::*;

    #[test]
    fn test_create_banner_and_page_uniqueness() {
        let db = create_test_db();
        let banner = banners::create_banner(&db, "services", Some("hero.webp"))
            .expect("create banner");
        assert_eq!(banner.page, "services");

        assert!(banners::page_exists(&db, "services").expect("check"));
        assert!(!banners::page_exists(&db, "blog").expect("check"));
    }

    #[test]
    fn test_set_banner_image() {
        let db = create_test_db();
        banners::create_banner(&db, "blog", Some("old.webp")).expect("create banner");

        let updated = banners::set_banner_image(&db, "blog", "new.webp")
            .expect("set image")
            .expect("banner exists");
        assert_eq!(updated.image.as_deref(), Some("new.webp"));

        assert!(banners::set_banner_image(&db, "missing", "x.webp")
            .expect("set image")
            .is_none());
    }

    #[test]
    fn test_get_by_page() {
        let db = create_test_db();
        banners::create_banner(&db, "partner", None).expect("create banner");

        let banner = banners::get_by_page(&db, "partner")
            .expect("get")
            .expect("banner exists");
        assert!(banner.image.is_none());
        assert!(banners::get_by_page(&db, "nope").expect("get").is_none());
    }
}

mod media_tests {
    use super::*;

    fn media_input(kind: MediaKind, file: &str) -> media::MediaInput {
        media::MediaInput {
            kind,
            file_name: file.to_string(),
            video_url: match kind {
                MediaKind::Video => Some("https://youtube.com/watch?v=x".to_string()),
                MediaKind::Image => None,
            },
            alt_text: Some("alt".to_string()),
            is_active: true,
        }
    }

    #[test]
    fn test_create_and_list_by_kind() {
        let db = create_test_db();
        media::create_media(&db, &media_input(MediaKind::Image, "a.webp")).expect("create");
        media::create_media(&db, &media_input(MediaKind::Video, "b.mp4")).expect("create");

        let images = media::list_active_by_kind(&db, MediaKind::Image).expect("images");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].file_name, "a.webp");

        let videos = media::list_active_by_kind(&db, MediaKind::Video).expect("videos");
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].video_url.as_deref(), Some("https://youtube.com/watch?v=x"));
    }

    #[test]
    fn test_toggle_hides_from_active_list() {
        let db = create_test_db();
        let item =
            media::create_media(&db, &media_input(MediaKind::Image, "a.webp")).expect("create");

        let state = media::toggle_media(&db, item.id)
            .expect("toggle")
            .expect("item exists");
        assert!(!state);
        assert!(media::list_active_by_kind(&db, MediaKind::Image)
            .expect("images")
            .is_empty());
    }

    #[test]
    fn test_update_media_keeps_kind() {
        let db = create_test_db();
        let item =
            media::create_media(&db, &media_input(MediaKind::Image, "a.webp")).expect("create");

        let mut input = media_input(MediaKind::Image, "b.webp");
        input.alt_text = Some("updated".to_string());
        let updated = media::update_media(&db, item.id, &input)
            .expect("update")
            .expect("item exists");
        assert_eq!(updated.file_name, "b.webp");
        assert_eq!(updated.alt_text.as_deref(), Some("updated"));
        assert_eq!(updated.kind, MediaKind::Image);
    }
}

mod slider_tests {
    use super::*;

    fn slider_input(title: &str) -> sliders::SliderInput {
        sliders::SliderInput {
            title_en: Some(title.to_string()),
            title_ar: Some(format!("{}-ar", title)),
            description_en: Some("Desc".to_string()),
            description_ar: Some("Desc ar".to_string()),
            image: Some("slide.webp".to_string()),
            video: None,
            en_image_alt: Some("alt".to_string()),
            ar_image_alt: None,
            en_video_alt: None,
            ar_video_alt: None,
            is_active: true,
        }
    }

    #[test]
    fn test_create_update_toggle_slider() {
        let db = create_test_db();
        let created = sliders::create_slider(&db, &slider_input("Hero")).expect("create");
        assert_eq!(created.title_en.as_deref(), Some("Hero"));

        let mut input = slider_input("Hero");
        input.video = Some("promo.mp4".to_string());
        let updated = sliders::update_slider(&db, created.id, &input)
            .expect("update")
            .expect("slider exists");
        assert_eq!(updated.video.as_deref(), Some("promo.mp4"));

        let state = sliders::toggle_slider(&db, created.id)
            .expect("toggle")
            .expect("slider exists");
        assert!(!state);
        assert!(sliders::list_sliders(&db, true).expect("list").is_empty());
    }
}

mod contact_tests {
    use super::*;

    fn contact_input(name: &str) -> contacts::ContactInput {
        contacts::ContactInput {
            name: name.to_string(),
            email: Some("visitor@example.com".to_string()),
            phone: None,
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_create_and_list_contacts() {
        let db = create_test_db();
        let created = contacts::create_contact(&db, &contact_input("Visitor")).expect("create");
        assert!(!created.is_read);

        let list = contacts::list_contacts(&db).expect("list");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Visitor");
    }

    #[test]
    fn test_show_marks_as_read() {
        let db = create_test_db();
        let created = contacts::create_contact(&db, &contact_input("Visitor")).expect("create");

        let shown = contacts::get_and_mark_read(&db, created.id)
            .expect("show")
            .expect("contact exists");
        assert!(shown.is_read);

        assert!(contacts::get_and_mark_read(&db, 999).expect("show").is_none());
    }

    #[test]
    fn test_mark_seen() {
        let db = create_test_db();
        let created = contacts::create_contact(&db, &contact_input("Visitor")).expect("create");

        assert!(contacts::mark_seen(&db, created.id).expect("mark"));
        assert!(!contacts::mark_seen(&db, 999).expect("mark"));
    }
}

mod seo_tag_tests {
    use super::*;

    fn seo_input(page: &str) -> seo_tags::SeoTagInput {
        seo_tags::SeoTagInput {
            en_meta_title: Some("Title".to_string()),
            en_meta_description: None,
            ar_meta_title: None,
            ar_meta_description: None,
            page_name: Some(page.to_string()),
        }
    }

    #[test]
    fn test_create_get_update_seo_tag() {
        let db = create_test_db();
        let created = seo_tags::create_seo_tag(&db, &seo_input("home")).expect("create");

        let fetched = seo_tags::get_seo_tag(&db, created.id)
            .expect("get")
            .expect("tag exists");
        assert_eq!(fetched.page_name.as_deref(), Some("home"));

        let updated = seo_tags::update_seo_tag(&db, created.id, &seo_input("about"))
            .expect("update")
            .expect("tag exists");
        assert_eq!(updated.page_name.as_deref(), Some("about"));

        assert_eq!(seo_tags::list_seo_tags(&db).expect("list").len(), 1);
    }
}

mod home_aggregate_tests {
    use super::*;
    use axum::extract::State;
    use std::sync::Arc;
    use vitrine::web::handlers::website;
    use vitrine::web::state::AppState;
    use vitrine::Config;

    #[tokio::test]
    async fn test_home_includes_about_us_and_active_content() {
        let db = create_test_db();

        about_us::upsert_about_us(
            &db,
            &about_us::AboutUsInput {
                title_en: "About".to_string(),
                title_ar: "About-ar".to_string(),
                home_description_en: "Home".to_string(),
                home_description_ar: "Home-ar".to_string(),
                about_description_en: "Full".to_string(),
                about_description_ar: "Full-ar".to_string(),
                mission_en: None,
                mission_ar: None,
                vision_en: None,
                vision_ar: None,
                investments_en: None,
                investments_ar: None,
                why_us_en: None,
                why_us_ar: None,
                image: Some("about.webp".to_string()),
                en_alt_image: None,
                ar_alt_image: None,
            },
        )
        .expect("upsert about us");
        service::create_service(&db, &service_input("Logistics", "logistics"))
            .expect("create service");

        let state = Arc::new(AppState::new(Config::default_with_title("Test Site"), db));
        let axum::Json(body) = website::home(State(state)).await.expect("home response");

        assert_eq!(body["status"], true);
        let data = &body["data"];
        assert!(data["about_us"].is_object());
        assert_eq!(data["about_us"]["title_en"], "About");
        assert!(data["about_us"]["image_url"].is_string());
        assert_eq!(data["services"].as_array().map(Vec::len), Some(1));
        assert!(data["sliders"].as_array().is_some());
        assert!(data["categories"].as_array().is_some());
    }
}

mod singleton_tests {
    use super::*;

    #[test]
    fn test_contact_info_upsert_keeps_single_row() {
        let db = create_test_db();
        assert!(contact_info::get_contact_info(&db).expect("get").is_none());

        let input = contact_info::ContactInfoInput {
            phone_one: "123".to_string(),
            phone_two: None,
            whatsapp: "123".to_string(),
            address: "Main St".to_string(),
            map_link: None,
            working_hours: None,
            facebook: None,
            instagram: None,
            twitter: None,
            snapchat: None,
            youtube: None,
            tiktok: None,
        };
        let first = contact_info::upsert_contact_info(&db, &input).expect("insert");

        let mut changed = input;
        changed.address = "Second St".to_string();
        let second = contact_info::upsert_contact_info(&db, &changed).expect("update");

        assert_eq!(first.id, second.id);
        assert_eq!(second.address, "Second St");
    }

    #[test]
    fn test_privacy_policy_upsert() {
        let db = create_test_db();
        assert!(privacy_policy::get_policy(&db).expect("get").is_none());

        let input = privacy_policy::PrivacyPolicyInput {
            en_title: "Privacy".to_string(),
            en_description: "We collect nothing".to_string(),
            ar_title: "Privacy-ar".to_string(),
            ar_description: "Desc-ar".to_string(),
        };
        let first = privacy_policy::upsert_policy(&db, &input).expect("insert");

        let mut changed = input;
        changed.en_title = "Privacy v2".to_string();
        let second = privacy_policy::upsert_policy(&db, &changed).expect("update");

        assert_eq!(first.id, second.id);
        assert_eq!(second.en_title.as_deref(), Some("Privacy v2"));
    }

    #[test]
    fn test_about_us_upsert() {
        let db = create_test_db();
        assert!(about_us::get_about_us(&db).expect("get").is_none());

        let input = about_us::AboutUsInput {
            title_en: "About".to_string(),
            title_ar: "About-ar".to_string(),
            home_description_en: "Home".to_string(),
            home_description_ar: "Home-ar".to_string(),
            about_description_en: "Full".to_string(),
            about_description_ar: "Full-ar".to_string(),
            mission_en: None,
            mission_ar: None,
            vision_en: None,
            vision_ar: None,
            investments_en: None,
            investments_ar: None,
            why_us_en: None,
            why_us_ar: None,
            image: Some("about.webp".to_string()),
            en_alt_image: Some("alt".to_string()),
            ar_alt_image: None,
        };
        let first = about_us::upsert_about_us(&db, &input).expect("insert");

        let mut changed = input;
        changed.image = Some("about-v2.webp".to_string());
        let second = about_us::upsert_about_us(&db, &changed).expect("update");

        assert_eq!(first.id, second.id);
        assert_eq!(second.image.as_deref(), Some("about-v2.webp"));
    }
}
