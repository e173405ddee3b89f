//! Utilitaires de manipulation de texte Unicode-safe.

/// Tronque une chaîne de manière safe pour Unicode.
///
/// # Arguments
/// * `s` - Chaîne à tronquer
/// * `max_len` - Longueur maximale en caractères
/// * `ellipsis` - Ajouter "…" si tronqué
pub fn truncate(s: &str, max_len: usize, ellipsis: bool) -> String {
    let char_count = s.chars().count();

    if char_count <= max_len {
        s.to_string()
    } else if ellipsis && max_len > 1 {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Complète une chaîne par des espaces à droite jusqu'à `width` caractères.
pub fn pad_right(s: &str, width: usize) -> String {
    let char_count = s.chars().count();
    if char_count >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - char_count))
    }
}
