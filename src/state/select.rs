//! Machine d'état d'un widget de sélection.
//!
//! `SelectState` tient tout ce qui change pendant la vie du widget : le
//! drapeau d'ouverture, le texte de filtre, l'ensemble choisi et la vue
//! dérivée. Toutes les opérations sont totales ; un appel refusé (widget
//! désactivé, option désactivée) laisse l'état intact.
//!
//! ```text
//!  Fermé ──déclencheur──▶ Ouvert
//!    ▲                      │
//!    └──clic extérieur / choix en mode simple
//! ```

use std::rc::Rc;

use log::{debug, info};

use crate::icons::IconCatalog;
use crate::model::{Entity, EntityId};
use crate::source::QuerySnapshot;

use super::config::SelectConfig;
use super::filter::derive_view;
use super::selected::SelectionSet;
use super::selection::ListSelection;

/// Effet d'une activation d'option.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    /// Widget ou option désactivé, ou rien sous le curseur.
    Ignored,
    /// L'entité a rejoint la sélection (ou l'a remplacée en mode simple).
    Added(Entity),
    /// L'entité a quitté la sélection.
    Removed(Entity),
}

/// État de la liste d'options, pour le rendu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// Pas encore de données, récupération en cours.
    Loading,
    /// Pas de données, la récupération a échoué.
    Failed,
    /// Aucune option à afficher.
    Empty,
    /// Au moins une option.
    Ready,
}

/// État d'un widget de sélection.
#[derive(Debug)]
pub struct SelectState {
    config: SelectConfig,
    icons: Rc<IconCatalog>,
    is_open: bool,
    filter: String,
    selected: SelectionSet,
    view: ListSelection<Entity>,
    source: QuerySnapshot,
}

impl SelectState {
    pub fn new(config: SelectConfig, icons: Rc<IconCatalog>) -> Self {
        Self {
            config,
            icons,
            is_open: false,
            filter: String::new(),
            selected: SelectionSet::new(),
            view: ListSelection::new(),
            source: QuerySnapshot::default(),
        }
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn icons(&self) -> &IconCatalog {
        &self.icons
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn selected(&self) -> &SelectionSet {
        &self.selected
    }

    pub fn is_selected(&self, id: EntityId) -> bool {
        self.selected.contains(id)
    }

    /// Vue dérivée courante.
    pub fn view(&self) -> &ListSelection<Entity> {
        &self.view
    }

    pub fn source(&self) -> &QuerySnapshot {
        &self.source
    }

    /// Le widget accepte-t-il la saisie de filtre en ce moment ?
    pub fn accepts_text(&self) -> bool {
        self.is_open && self.config.is_filterable() && !self.config.is_disabled()
    }

    /// Une option est-elle inactivable (widget ou option désactivé) ?
    pub fn is_option_inert(&self, id: EntityId) -> bool {
        self.config.is_disabled() || self.config.is_option_disabled(id)
    }

    pub fn list_status(&self) -> ListStatus {
        if !self.view.is_empty() {
            ListStatus::Ready
        } else if self.source.data.is_none() && self.source.error.is_some() {
            ListStatus::Failed
        } else if self.source.data.is_none() && self.source.is_loading {
            ListStatus::Loading
        } else {
            ListStatus::Empty
        }
    }

    /// Prend en compte un nouvel instantané de la source.
    pub fn sync_source(&mut self, snapshot: &QuerySnapshot) {
        if *snapshot == self.source {
            return;
        }
        self.source = snapshot.clone();
        self.refresh_view();
    }

    /// Ouvre ou ferme la liste (sans effet si le widget est désactivé).
    ///
    /// Le filtre est conservé : seuls un appui extérieur ou un choix
    /// l'effacent.
    pub fn toggle_open(&mut self) {
        if self.config.is_disabled() {
            return;
        }
        self.is_open = !self.is_open;
        debug!(
            "'{}' {}",
            self.config.label(),
            if self.is_open { "ouvert" } else { "fermé" }
        );
    }

    /// Activation du champ de filtre : ouvre la liste.
    pub fn activate_input(&mut self) {
        if self.config.is_disabled() || !self.config.is_filterable() {
            return;
        }
        self.is_open = true;
    }

    /// Appui hors du widget : ferme et efface le filtre, quel que soit le mode.
    pub fn outside_interaction(&mut self) {
        self.is_open = false;
        self.reset_filter();
    }

    /// Active une option : ajout, remplacement ou retrait selon le mode.
    ///
    /// Si la sélection résultante n'est pas vide, le propriétaire est notifié
    /// une fois : avec l'entité ajoutée, ou avec l'entité principale après un
    /// retrait en mode multiple. Un retrait qui vide la sélection ne notifie
    /// pas.
    pub fn select_option(&mut self, entity: &Entity) -> SelectOutcome {
        if self.is_option_inert(entity.id) {
            debug!(
                "'{}' : option {} ignorée (désactivée)",
                self.config.label(),
                entity.id
            );
            return SelectOutcome::Ignored;
        }

        let was_selected = self.selected.contains(entity.id);
        let outcome = if self.config.is_multiple() {
            if was_selected {
                self.selected.remove(entity.id);
                SelectOutcome::Removed(entity.clone())
            } else {
                self.selected.push(entity.clone());
                SelectOutcome::Added(entity.clone())
            }
        } else {
            self.is_open = false;
            if was_selected {
                self.selected.clear();
                SelectOutcome::Removed(entity.clone())
            } else {
                self.selected.replace(entity.clone());
                SelectOutcome::Added(entity.clone())
            }
        };

        let notified = match &outcome {
            SelectOutcome::Added(added) => Some(added.clone()),
            SelectOutcome::Removed(_) => self.selected.first().cloned(),
            SelectOutcome::Ignored => None,
        };

        if let Some(primary) = notified {
            info!(
                "'{}' : sélection de {} (#{})",
                self.config.label(),
                primary.name,
                primary.id
            );
            self.config.notify(&primary);
            if self.config.is_filterable() {
                self.reset_filter();
            }
        }

        outcome
    }

    /// Active l'option d'index `index` dans la vue dérivée.
    pub fn select_view_index(&mut self, index: usize) -> SelectOutcome {
        match self.view.get(index).cloned() {
            Some(entity) => {
                self.view.move_to(index);
                self.select_option(&entity)
            }
            None => SelectOutcome::Ignored,
        }
    }

    /// Active l'option sous le curseur.
    pub fn select_at_cursor(&mut self) -> SelectOutcome {
        self.select_view_index(self.view.cursor())
    }

    /// Retire une puce (mode multiple seulement, sans notification).
    pub fn remove_selected(&mut self, id: EntityId) -> Option<Entity> {
        if self.config.is_disabled() || !self.config.is_multiple() {
            return None;
        }
        let removed = self.selected.remove(id)?;
        debug!("'{}' : puce {} retirée", self.config.label(), id);
        Some(removed)
    }

    /// Retire la dernière puce ajoutée.
    pub fn remove_last(&mut self) -> Option<Entity> {
        let id = self.selected.iter().last()?.id;
        self.remove_selected(id)
    }

    /// Remplace le texte de filtre tel quel.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        self.refresh_view();
    }

    /// Frappe d'un caractère dans le champ de filtre.
    pub fn push_filter_char(&mut self, c: char) -> bool {
        if !self.config.is_filterable() || self.config.is_disabled() {
            return false;
        }
        self.filter.push(c);
        self.refresh_view();
        true
    }

    /// Effacement du dernier caractère du filtre.
    pub fn pop_filter_char(&mut self) -> bool {
        if !self.config.is_filterable() || self.config.is_disabled() {
            return false;
        }
        if self.filter.pop().is_none() {
            return false;
        }
        self.refresh_view();
        true
    }

    pub fn cursor_up(&mut self) {
        self.view.move_up();
    }

    pub fn cursor_down(&mut self) {
        self.view.move_down();
    }

    pub fn cursor_first(&mut self) {
        self.view.move_first();
    }

    pub fn cursor_last(&mut self) {
        self.view.move_last();
    }

    /// Hauteur de la fenêtre d'options, connue au rendu.
    pub fn set_visible_rows(&mut self, rows: usize) {
        self.view.set_visible_height(rows);
    }

    fn reset_filter(&mut self) {
        if !self.filter.is_empty() {
            self.filter.clear();
            self.refresh_view();
        }
    }

    fn refresh_view(&mut self) {
        let items = derive_view(
            self.source.entities(),
            &self.filter,
            self.config.is_filterable(),
            self.config.is_sortable(),
        );
        self.view.set_items(items);
    }
}
