//! Binary file heuristic

use std::path::Path;

/// Extensions that are never read as text
const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "avif", "tiff", "psd", "woff", "woff2",
    "ttf", "otf", "eot", "zip", "gz", "tgz", "bz2", "xz", "7z", "tar", "rar", "pdf", "wasm",
    "node", "so", "dylib", "dll", "exe", "bin", "class", "jar", "mp3", "mp4", "wav", "ogg",
    "webm", "mov", "avi", "flac", "sqlite", "db", "pyc",
];

/// True if the path looks like a binary asset, judged by its extension
pub fn is_binary_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            BINARY_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
