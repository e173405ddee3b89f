//! Actions de l'application.

mod select;

pub use select::SelectAction;

/// Action principale de l'application.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Quitter l'application
    Quit,

    /// Relancer la récupération des listes
    Refresh,

    /// Afficher/masquer l'aide
    ToggleHelp,

    /// Passer au widget suivant
    FocusNext,

    /// Revenir au widget précédent
    FocusPrevious,

    /// Copier la sélection du widget courant dans le presse-papier
    CopySelection,

    /// Actions sur le widget courant
    Select(SelectAction),

    /// Appui souris, en cellules du terminal
    PointerDown { column: u16, row: u16 },
}
