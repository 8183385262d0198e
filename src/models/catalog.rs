use serde::{Deserialize, Serialize};

/// Object key extensions recognized as catalog images. Everything else is
/// skipped while listing, not treated as an error.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

/// One listable product image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name derived from the object key.
    pub name: String,
    /// Presigned preview URL, valid for one hour.
    pub image_url: String,
    /// Underlying object key.
    pub key: String,
}

/// True when the key names an image by extension, case-insensitively.
pub fn is_image_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Derive a display name from an object key: strip the path and extension,
/// turn separators into spaces, and title-case each word.
///
/// `products/food/cold_brew.jpg` becomes `Cold Brew`.
pub fn display_name_for_key(key: &str) -> String {
    let file_name = key.rsplit('/').next().unwrap_or(key);
    let stem = file_name.split('.').next().unwrap_or(file_name);

    stem.replace(['_', '-'], " ")
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
