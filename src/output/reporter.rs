use std::path::Path;

use crate::enrich::json_shape::JsonShape;

/// Characters of raw body kept when a 200 response fails to decode as JSON.
pub const PREVIEW_CHARS: usize = 200;

pub fn print_banner() {
    println!("🔍 Checking for API endpoints...");
}

pub fn print_found(url: &str, status: u16, content_type: Option<&str>) {
    println!("✅ FOUND: {}", url);
    println!("   Status: {}", status);
    println!("   Content-Type: {}", content_type.unwrap_or("unknown"));
}

pub fn print_shape(shape: &JsonShape) {
    match shape {
        JsonShape::Object(keys) => println!("   JSON Keys: {:?}", keys),
        JsonShape::Array(len) => println!("   JSON Keys: List with {} items", len),
        JsonShape::Scalar(kind) => println!("   JSON Keys: {} value", kind),
    }
}

pub fn print_saved(path: &Path) {
    println!("   💾 Saved to {}", path.display());
}

pub fn print_preview(raw: &str) {
    println!("   Preview: {}...", preview(raw));
}

pub fn print_status_miss(url: &str, status: u16) {
    println!("❌ {} - Status {}", url, status);
}

pub fn print_error(url: &str, message: &str) {
    println!("❌ {} - Error: {}", url, message);
}

/// First `PREVIEW_CHARS` characters of the body. Character-based so the cut
/// never lands inside a multi-byte sequence.
pub fn preview(raw: &str) -> String {
    raw.chars().take(PREVIEW_CHARS).collect()
}
