//! Diffusion des appuis pointeur à l'échelle de l'application.
//!
//! Chaque widget monté s'abonne une fois au [`PointerBus`] et reçoit tous
//! les appuis, y compris ceux qui tombent hors de sa zone : c'est ce qui
//! lui permet de se refermer sur un clic extérieur. L'abonnement est un
//! garde RAII ; le relâcher (ou démonter le widget) désinscrit l'écouteur.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::{Rc, Weak};

use log::trace;
use ratatui::layout::Position;

/// Identifiant d'un écouteur.
pub type ListenerId = u64;

#[derive(Debug, Default)]
struct BusInner {
    next_id: ListenerId,
    queues: HashMap<ListenerId, VecDeque<Position>>,
}

/// Bus des appuis pointeur (un par application, mono-thread).
#[derive(Debug, Clone, Default)]
pub struct PointerBus {
    inner: Rc<RefCell<BusInner>>,
}

impl PointerBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inscrit un écouteur ; il le reste tant que le garde est vivant.
    pub fn subscribe(&self) -> PointerSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.queues.insert(id, VecDeque::new());
        trace!("pointeur : écouteur {} inscrit", id);

        PointerSubscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Diffuse un appui à tous les écouteurs inscrits.
    pub fn pointer_down(&self, position: Position) {
        for queue in self.inner.borrow_mut().queues.values_mut() {
            queue.push_back(position);
        }
    }

    /// Nombre d'écouteurs inscrits.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().queues.len()
    }
}

/// Garde d'inscription au bus.
#[derive(Debug)]
pub struct PointerSubscription {
    id: ListenerId,
    bus: Weak<RefCell<BusInner>>,
}

impl PointerSubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Retire les appuis reçus depuis le dernier appel.
    pub fn drain(&self) -> Vec<Position> {
        let Some(bus) = self.bus.upgrade() else {
            return Vec::new();
        };
        let mut inner = bus.borrow_mut();
        inner
            .queues
            .get_mut(&self.id)
            .map(|queue| queue.drain(..).collect())
            .unwrap_or_default()
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.borrow_mut().queues.remove(&self.id);
            trace!("pointeur : écouteur {} relâché", self.id);
        }
    }
}
