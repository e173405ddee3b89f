//! Widget monté : état de sélection, abonnement pointeur et zones cliquables.

use log::debug;
use ratatui::layout::{Position, Rect};

use crate::pointer::{PointerBus, PointerSubscription};

use super::select::{SelectOutcome, SelectState};

/// Zones cliquables relevées au dernier rendu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitMap {
    /// Cadre du widget (libellé compris).
    pub root: Rect,
    /// Ligne du déclencheur.
    pub trigger: Rect,
    /// Champ de filtre intégré, si affiché.
    pub input: Option<Rect>,
    /// Contrôles de retrait des puces.
    pub chips: Vec<(Rect, u64)>,
    /// Lignes d'options visibles, avec leur index dans la vue dérivée.
    pub options: Vec<(Rect, usize)>,
    /// Liste déroulante, si ouverte.
    pub dropdown: Option<Rect>,
}

impl HitMap {
    /// La position tombe-t-elle dans le widget (liste ouverte comprise) ?
    pub fn contains(&self, position: Position) -> bool {
        self.root.contains(position)
            || self
                .dropdown
                .is_some_and(|dropdown| dropdown.contains(position))
    }
}

/// Cible d'un clic dans un widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    RemoveChip(u64),
    FilterInput,
    Trigger,
    Option(usize),
    /// Dans le widget, hors de toute zone active.
    Inside,
    Outside,
}

/// Widget de sélection monté dans l'application.
///
/// Le montage inscrit un écouteur sur le [`PointerBus`] ; le démontage
/// (`Drop`) le relâche et jette l'état.
#[derive(Debug)]
pub struct SelectWidget {
    state: SelectState,
    query_key: String,
    subscription: PointerSubscription,
    hits: HitMap,
}

impl SelectWidget {
    pub fn mount(state: SelectState, query_key: impl Into<String>, bus: &PointerBus) -> Self {
        let subscription = bus.subscribe();
        debug!(
            "widget '{}' monté (écouteur {})",
            state.config().label(),
            subscription.id()
        );
        Self {
            state,
            query_key: query_key.into(),
            subscription,
            hits: HitMap::default(),
        }
    }

    pub fn state(&self) -> &SelectState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SelectState {
        &mut self.state
    }

    /// Clé de la requête qui alimente la liste.
    pub fn query_key(&self) -> &str {
        &self.query_key
    }

    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    pub fn set_hits(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    /// Résout une position en cible, du plus précis au plus large.
    pub fn hit_test(&self, position: Position) -> Hit {
        let hits = &self.hits;
        if let Some((_, id)) = hits.chips.iter().find(|(rect, _)| rect.contains(position)) {
            return Hit::RemoveChip(*id);
        }
        if self.state.is_open() {
            if let Some((_, index)) = hits
                .options
                .iter()
                .find(|(rect, _)| rect.contains(position))
            {
                return Hit::Option(*index);
            }
        }
        if hits.input.is_some_and(|input| input.contains(position)) {
            return Hit::FilterInput;
        }
        if hits.trigger.contains(position) {
            return Hit::Trigger;
        }
        if hits.contains(position) {
            Hit::Inside
        } else {
            Hit::Outside
        }
    }

    /// Applique un clic reçu par ce widget.
    ///
    /// Le retrait d'une puce s'arrête là : il n'ouvre ni ne ferme la liste.
    pub fn click(&mut self, position: Position) -> Hit {
        let hit = self.hit_test(position);
        match hit {
            Hit::RemoveChip(id) => {
                self.state.remove_selected(id);
            }
            Hit::FilterInput => self.state.activate_input(),
            Hit::Trigger => self.state.toggle_open(),
            Hit::Option(index) => {
                if let SelectOutcome::Ignored = self.state.select_view_index(index) {
                    debug!("clic ignoré sur l'option {}", index);
                }
            }
            Hit::Inside | Hit::Outside => {}
        }
        hit
    }

    /// Traite les appuis diffusés sur le bus ; un appui hors du widget le
    /// referme.
    pub fn process_pointer_events(&mut self) {
        for position in self.subscription.drain() {
            if !self.hits.contains(position) {
                self.state.outside_interaction();
            }
        }
    }

    /// Perte du focus clavier, traitée comme une interaction extérieure.
    pub fn blur(&mut self) {
        if self.state.is_open() {
            self.state.outside_interaction();
        }
    }
}

impl Drop for SelectWidget {
    fn drop(&mut self) {
        debug!(
            "widget '{}' démonté (écouteur {})",
            self.state.config().label(),
            self.subscription.id()
        );
    }
}
