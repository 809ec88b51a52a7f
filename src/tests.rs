#[cfg(test)]
mod tests {

    mod slug_tests {
        use crate::services::slug::{generate_slug, unique_slug, validate_slug};
        use std::collections::HashSet;

        #[test]
        fn test_generate_slug_basic() {
            assert_eq!(generate_slug("Hello World"), "hello-world");
        }

        #[test]
        fn test_generate_slug_special_characters() {
            assert_eq!(generate_slug("Steel & Glass!"), "steel-glass");
        }

        #[test]
        fn test_generate_slug_unicode() {
            assert_eq!(generate_slug("Café au lait"), "cafe-au-lait");
        }

        #[test]
        fn test_generate_slug_multiple_spaces() {
            assert_eq!(generate_slug("Hello   World"), "hello-world");
        }

        #[test]
        fn test_unique_slug_no_collision() {
            assert_eq!(unique_slug("Our Services", |_| false), "our-services");
        }

        #[test]
        fn test_unique_slug_probes_suffixes() {
            let taken: HashSet<&str> = ["our-services", "our-services-1"].into_iter().collect();
            assert_eq!(
                unique_slug("Our Services", |s| taken.contains(s)),
                "our-services-2"
            );
        }

        #[test]
        fn test_unique_slug_first_suffix() {
            assert_eq!(
                unique_slug("Hello", |s| s == "hello"),
                "hello-1"
            );
        }

        #[test]
        fn test_validate_slug_valid() {
            assert!(validate_slug("hello-world"));
            assert!(validate_slug("press-release-2024"));
            assert!(validate_slug("a"));
        }

        #[test]
        fn test_validate_slug_invalid() {
            assert!(!validate_slug(""));
            assert!(!validate_slug("Hello-World"));
            assert!(!validate_slug("hello world"));
            assert!(!validate_slug("hello_world"));
        }

        #[test]
        fn test_arabic_only_title_yields_invalid_slug() {
            // Slugification strips Arabic entirely; the result must be
            // rejected before it can become a stored slug.
            assert!(!validate_slug(&generate_slug("خدماتنا")));
        }
    }

    mod asset_store_tests {
        use crate::services::assets::{AssetKind, AssetStore, UploadFile};
        use std::io::Cursor;

        fn png_upload() -> UploadFile {
            let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([120, 40, 200, 255]));
            let mut buf = Cursor::new(Vec::new());
            image::DynamicImage::ImageRgba8(img)
                .write_to(&mut buf, image::ImageFormat::Png)
                .expect("encode test png");
            UploadFile {
                original_name: "photo.png".to_string(),
                content_type: "image/png".to_string(),
                data: buf.into_inner(),
            }
        }

        fn video_upload() -> UploadFile {
            UploadFile {
                original_name: "clip.mp4".to_string(),
                content_type: "video/mp4".to_string(),
                data: b"not really a video".to_vec(),
            }
        }

        fn test_store() -> (tempfile::TempDir, AssetStore) {
            let dir = tempfile::tempdir().expect("tempdir");
            let store = AssetStore::new(dir.path(), "http://localhost:3000/uploads");
            (dir, store)
        }

        #[test]
        fn test_store_image_normalizes_to_webp() {
            let (_dir, store) = test_store();
            let name = store
                .store(&png_upload(), "partners", AssetKind::Image)
                .expect("store image");

            assert!(name.ends_with(".webp"));
            let bytes = std::fs::read(store.root().join("partners").join(&name))
                .expect("stored file readable");
            assert_eq!(&bytes[0..4], b"RIFF");
            assert_eq!(&bytes[8..12], b"WEBP");
        }

        #[test]
        fn test_store_generates_unique_names() {
            let (_dir, store) = test_store();
            let upload = png_upload();
            let first = store.store(&upload, "partners", AssetKind::Image).expect("first");
            let second = store.store(&upload, "partners", AssetKind::Image).expect("second");

            assert_ne!(first, second);
            assert!(store.root().join("partners").join(&first).exists());
            assert!(store.root().join("partners").join(&second).exists());
        }

        #[test]
        fn test_store_rejects_non_image_bytes() {
            let (_dir, store) = test_store();
            let upload = UploadFile {
                original_name: "fake.png".to_string(),
                content_type: "image/png".to_string(),
                data: b"this is not an image".to_vec(),
            };
            assert!(store.store(&upload, "partners", AssetKind::Image).is_err());
        }

        #[test]
        fn test_store_video_keeps_extension_and_bytes() {
            let (_dir, store) = test_store();
            let upload = video_upload();
            let name = store
                .store(&upload, "media/videos", AssetKind::Video)
                .expect("store video");

            assert!(name.ends_with(".mp4"));
            let bytes = std::fs::read(store.root().join("media/videos").join(&name))
                .expect("stored file readable");
            assert_eq!(bytes, upload.data);
        }

        #[test]
        fn test_delete_is_idempotent() {
            let (_dir, store) = test_store();
            let name = store
                .store(&png_upload(), "banners", AssetKind::Image)
                .expect("store");
            let path = store.root().join("banners").join(&name);
            assert!(path.exists());

            store.delete(&name, "banners");
            assert!(!path.exists());
            // Second delete of a missing file is a no-op.
            store.delete(&name, "banners");
        }

        #[test]
        fn test_delete_refuses_path_traversal() {
            let (_dir, store) = test_store();
            std::fs::create_dir_all(store.root().join("banners")).expect("mkdir");
            let outside = store.root().join("secret.txt");
            std::fs::write(&outside, b"keep me").expect("write");

            store.delete("../secret.txt", "banners");
            assert!(outside.exists());
        }

        #[test]
        fn test_replace_removes_old_asset() {
            let (_dir, store) = test_store();
            let old = store
                .store(&png_upload(), "blogs", AssetKind::Image)
                .expect("store old");
            let new = store
                .replace(Some(&old), &png_upload(), "blogs", AssetKind::Image)
                .expect("replace");

            assert_ne!(old, new);
            assert!(!store.root().join("blogs").join(&old).exists());
            assert!(store.root().join("blogs").join(&new).exists());
        }

        #[test]
        fn test_replace_with_missing_old_file_still_succeeds() {
            let (_dir, store) = test_store();
            // The old name points at a file that was already removed; the
            // failed deletion is swallowed and the new name is returned.
            let name = store
                .replace(Some("ghost.webp"), &png_upload(), "blogs", AssetKind::Image)
                .expect("replace");
            assert!(name.ends_with(".webp"));
            assert!(store.root().join("blogs").join(&name).exists());
        }

        #[test]
        fn test_replace_without_old_asset() {
            let (_dir, store) = test_store();
            let name = store
                .replace(None, &png_upload(), "blogs", AssetKind::Image)
                .expect("replace");
            assert!(store.root().join("blogs").join(&name).exists());
        }

        #[test]
        fn test_url_for_joins_base_bucket_and_name() {
            let store = AssetStore::new("/tmp/unused", "http://cdn.example.com/uploads");
            assert_eq!(
                store.url_for("abc.webp", "partners"),
                "http://cdn.example.com/uploads/partners/abc.webp"
            );
        }

        #[test]
        fn test_url_for_trims_trailing_slash() {
            let store = AssetStore::new("/tmp/unused", "http://cdn.example.com/uploads/");
            assert_eq!(
                store.url_for("abc.webp", "banners"),
                "http://cdn.example.com/uploads/banners/abc.webp"
            );
        }

        #[test]
        fn test_url_opt() {
            let store = AssetStore::new("/tmp/unused", "http://cdn.example.com/uploads");
            assert_eq!(store.url_opt(None, "banners"), None);
            assert_eq!(
                store.url_opt(Some("a.webp"), "banners"),
                Some("http://cdn.example.com/uploads/banners/a.webp".to_string())
            );
        }
    }

    mod config_tests {
        use crate::Config;

        #[test]
        fn test_default_config_is_valid() {
            let config = Config::default_with_title("Test Site");
            assert!(config.validate().is_ok());
            assert_eq!(config.site.title, "Test Site");
        }

        #[test]
        fn test_validate_rejects_empty_upload_dir() {
            let mut config = Config::default_with_title("Test Site");
            config.media.upload_dir = String::new();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_empty_base_url() {
            let mut config = Config::default_with_title("Test Site");
            config.media.public_base_url = String::new();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_config_round_trips_through_toml() {
            let config = Config::default_with_title("Test Site");
            let text = toml::to_string_pretty(&config).expect("serialize");
            let parsed: Config = toml::from_str(&text).expect("parse");
            assert_eq!(parsed.server.port, config.server.port);
            assert_eq!(parsed.media.upload_dir, config.media.upload_dir);
        }
    }

    mod media_kind_tests {
        use crate::models::MediaKind;
        use crate::services::media::bucket_for;
        use std::str::FromStr;

        #[test]
        fn test_parse_and_display() {
            assert_eq!(MediaKind::from_str("image").unwrap(), MediaKind::Image);
            assert_eq!(MediaKind::from_str("video").unwrap(), MediaKind::Video);
            assert!(MediaKind::from_str("audio").is_err());
            assert_eq!(MediaKind::Image.to_string(), "image");
            assert_eq!(MediaKind::Video.to_string(), "video");
        }

        #[test]
        fn test_bucket_for_kind() {
            assert_eq!(bucket_for(MediaKind::Image), "media/images");
            assert_eq!(bucket_for(MediaKind::Video), "media/videos");
        }
    }
}
