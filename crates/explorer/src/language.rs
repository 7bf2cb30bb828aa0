//! File-extension to language-id mapping for opened scratch files.

/// Language id for a file name, by extension.
///
/// Intentionally minimal; extend the table as needed.
pub fn language_id(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("py") => "python",
        Some("js") => "javascript",
        Some("ts") => "typescript",
        _ => "plaintext",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map() {
        assert_eq!(language_id("script.py"), "python");
        assert_eq!(language_id("app.ts"), "typescript");
        assert_eq!(language_id("index.js"), "javascript");
    }

    #[test]
    fn unknown_and_missing_extensions_are_plaintext() {
        assert_eq!(language_id("notes.txt"), "plaintext");
        assert_eq!(language_id("README"), "plaintext");
        assert_eq!(language_id("model.ipynb"), "plaintext");
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(language_id("SCRIPT.PY"), "python");
    }
}
