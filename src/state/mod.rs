//! État global de l'application.

pub mod action;
pub mod config;
pub mod filter;
pub mod select;
pub mod selected;
pub mod selection;
pub mod widget;

pub use action::{AppAction, SelectAction};
pub use config::SelectConfig;
pub use filter::{compare_names, derive_view};
pub use select::{ListStatus, SelectOutcome, SelectState};
pub use selected::SelectionSet;
pub use selection::ListSelection;
pub use widget::{Hit, HitMap, SelectWidget};

use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error_display::format_success_message;
use crate::icons::IconCatalog;
use crate::model::Entity;
use crate::pointer::PointerBus;
use crate::source::{EntitySource, QueryClient};

/// Nombre d'entrées gardées dans le journal des sélections.
pub const JOURNAL_CAPACITY: usize = 50;

/// Durée de vie d'un message flash.
const FLASH_DURATION: Duration = Duration::from_secs(3);

/// Notification émise par un widget après une sélection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    /// Libellé du widget émetteur.
    pub widget: String,
    pub entity: Entity,
}

/// État principal de l'application.
pub struct AppState {
    // ═══════════════════════════════════════════════════
    // Widgets
    // ═══════════════════════════════════════════════════
    /// Widgets montés, dans l'ordre de focus.
    pub widgets: Vec<SelectWidget>,

    /// Index du widget qui a le focus clavier.
    pub focus: usize,

    /// Catalogue d'icônes partagé.
    pub icons: Rc<IconCatalog>,

    /// Bus des appuis pointeur.
    pub pointer_bus: PointerBus,

    // ═══════════════════════════════════════════════════
    // Données
    // ═══════════════════════════════════════════════════
    /// Requêtes de listes de candidats.
    pub queries: QueryClient,

    /// Description de la source principale (barre d'état).
    pub source_label: String,

    /// Dernières sélections reçues, la plus récente en tête.
    pub journal: VecDeque<SelectionEvent>,

    events_tx: Sender<SelectionEvent>,
    events_rx: Receiver<SelectionEvent>,

    // ═══════════════════════════════════════════════════
    // UI transient
    // ═══════════════════════════════════════════════════
    /// Overlay d'aide affiché.
    pub show_help: bool,

    /// Spinner des listes en cours de chargement.
    pub loading_spinner: crate::ui::loading::LoadingSpinner,

    /// Message flash à afficher.
    pub flash_message: Option<(String, Instant)>,

    /// Flag pour quitter l'application.
    pub should_quit: bool,
}

impl AppState {
    /// Crée un état vide ; les widgets sont montés ensuite avec [`AppState::mount`].
    pub fn new(queries: QueryClient, source_label: impl Into<String>) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            widgets: Vec::new(),
            focus: 0,
            icons: Rc::new(IconCatalog::default()),
            pointer_bus: PointerBus::new(),
            queries,
            source_label: source_label.into(),
            journal: VecDeque::with_capacity(JOURNAL_CAPACITY),
            events_tx,
            events_rx,
            show_help: false,
            loading_spinner: crate::ui::loading::LoadingSpinner::new(),
            flash_message: None,
            should_quit: false,
        }
    }

    /// Callback de sélection qui remonte dans le journal de l'application.
    pub fn notifier(&self, widget: impl Into<String>) -> impl FnMut(&Entity) + 'static {
        let tx = self.events_tx.clone();
        let widget = widget.into();
        move |entity: &Entity| {
            // Le récepteur vit aussi longtemps que l'état.
            let _ = tx.send(SelectionEvent {
                widget: widget.clone(),
                entity: entity.clone(),
            });
        }
    }

    /// Monte un widget alimenté par `source`.
    pub fn mount(&mut self, config: SelectConfig, source: Arc<dyn EntitySource>) -> usize {
        let key = self.queries.ensure(source);
        let mut state = SelectState::new(config, Rc::clone(&self.icons));
        state.sync_source(&self.queries.snapshot(&key));
        self.widgets.push(SelectWidget::mount(state, key, &self.pointer_bus));
        self.widgets.len() - 1
    }

    /// Démonte un widget ; son écouteur pointeur est relâché.
    pub fn unmount(&mut self, index: usize) -> bool {
        if index >= self.widgets.len() {
            return false;
        }
        self.widgets.remove(index);
        if index < self.focus {
            self.focus -= 1;
        } else if self.focus >= self.widgets.len() {
            self.focus = self.widgets.len().saturating_sub(1);
        }
        true
    }

    pub fn focused_widget(&self) -> Option<&SelectWidget> {
        self.widgets.get(self.focus)
    }

    pub fn focused_widget_mut(&mut self) -> Option<&mut SelectWidget> {
        self.widgets.get_mut(self.focus)
    }

    /// Donne le focus à un widget ; l'ancien est refermé.
    pub fn set_focus(&mut self, index: usize) {
        if index >= self.widgets.len() || index == self.focus {
            return;
        }
        if let Some(previous) = self.widgets.get_mut(self.focus) {
            previous.blur();
        }
        self.focus = index;
    }

    pub fn focus_next(&mut self) {
        if self.widgets.is_empty() {
            return;
        }
        self.set_focus((self.focus + 1) % self.widgets.len());
    }

    pub fn focus_prev(&mut self) {
        if self.widgets.is_empty() {
            return;
        }
        let len = self.widgets.len();
        self.set_focus((self.focus + len - 1) % len);
    }

    /// Relève les requêtes terminées et propage les instantanés aux widgets.
    pub fn sync_sources(&mut self) -> bool {
        let changed = self.queries.poll();
        for widget in &mut self.widgets {
            let snapshot = self.queries.snapshot(widget.query_key());
            widget.state_mut().sync_source(&snapshot);
        }
        changed
    }

    /// Traite les appuis pointeur en attente pour chaque widget.
    pub fn process_pointer_events(&mut self) {
        for widget in &mut self.widgets {
            widget.process_pointer_events();
        }
    }

    /// Vide la file des sélections vers le journal.
    pub fn drain_selection_events(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.set_flash_message(format_success_message(&format!(
                "{} : {}",
                event.widget, event.entity.name
            )));
            if self.journal.len() == JOURNAL_CAPACITY {
                self.journal.pop_back();
            }
            self.journal.push_front(event);
            count += 1;
        }
        count
    }

    /// Définit un message flash.
    pub fn set_flash_message(&mut self, message: impl Into<String>) {
        self.flash_message = Some((message.into(), Instant::now()));
    }

    /// Vérifie si le message flash a expiré et le supprime le cas échéant.
    pub fn check_flash_expired(&mut self) {
        if let Some((_, timestamp)) = &self.flash_message {
            if timestamp.elapsed() > FLASH_DURATION {
                self.flash_message = None;
            }
        }
    }

    /// Retourne le message flash actuel s'il n'a pas expiré.
    pub fn current_flash_message(&self) -> Option<&str> {
        self.flash_message.as_ref().map(|(msg, _)| msg.as_str())
    }
}
