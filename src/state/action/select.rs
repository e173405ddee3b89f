//! Actions sur le widget qui a le focus.

#[derive(Debug, Clone, PartialEq)]
pub enum SelectAction {
    /// Ouvrir la liste, ou choisir l'option sous le curseur si elle est ouverte
    Confirm,
    /// Basculer l'ouverture (clic sur le déclencheur)
    ToggleOpen,
    /// Fermer comme un clic extérieur
    Close,
    /// Monter le curseur d'options
    CursorUp,
    /// Descendre le curseur d'options
    CursorDown,
    /// Première option
    CursorFirst,
    /// Dernière option
    CursorLast,
    /// Insérer un caractère dans le filtre
    InsertChar(char),
    /// Effacer le dernier caractère du filtre (ou la dernière puce)
    DeleteChar,
    /// Retirer la dernière puce
    RemoveLast,
}
