use crate::error::PickerError;

/// Formate une erreur pour l'affichage utilisateur
pub fn format_error_message(err: &PickerError) -> String {
    match err {
        PickerError::Http(e) if e.is_timeout() => "❌ Réseau: délai dépassé".to_string(),
        PickerError::Http(e) => match e.status() {
            Some(status) => format!("❌ Réseau: statut {}", status.as_u16()),
            None => format!("❌ Réseau: {}", e),
        },
        PickerError::Io(e) => format!("❌ I/O: {}", e),
        PickerError::Json(e) => format!("❌ Données invalides: {}", e),
        PickerError::Config { path, message } => {
            format!("❌ Config {}: {}", path.display(), message)
        }
        PickerError::Terminal(msg) => format!("❌ Terminal: {}", msg),
        PickerError::Clipboard(msg) => format!("❌ Presse-papier: {}", msg),
        PickerError::Other(msg) => format!("❌ {}", msg),
    }
}

/// Formate un message de succès
pub fn format_success_message(operation: &str) -> String {
    format!("{} ✓", operation)
}

/// Formate un message d'information
pub fn format_info_message(msg: &str) -> String {
    format!("ℹ {}", msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_config_error() {
        let err = PickerError::Config {
            path: "/tmp/config.toml".into(),
            message: "clé inconnue".to_string(),
        };
        assert_eq!(
            format_error_message(&err),
            "❌ Config /tmp/config.toml: clé inconnue"
        );
    }

    #[test]
    fn test_format_other_and_success() {
        assert_eq!(
            format_error_message(&PickerError::Other("boum".into())),
            "❌ boum"
        );
        assert_eq!(format_success_message("Copie"), "Copie ✓");
        assert_eq!(format_info_message("3 utilisateurs"), "ℹ 3 utilisateurs");
    }
}
