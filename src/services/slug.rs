use slug::slugify;

pub fn generate_slug(title: &str) -> String {
    slugify(title)
}

/// Slugify `title`, then probe the `exists` predicate until a free slug is
/// found, appending `-1`, `-2`, ... Decoupled from persistence so the loop
/// is testable with a plain closure.
pub fn unique_slug(title: &str, mut exists: impl FnMut(&str) -> bool) -> String {
    let base = slugify(title);
    let mut candidate = base.clone();
    let mut counter = 1;
    while exists(&candidate) {
        candidate = format!("{}-{}", base, counter);
        counter += 1;
    }
    candidate
}

pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > 200 {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
