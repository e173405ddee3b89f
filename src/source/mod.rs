//! Sources de la liste des entités candidates.
//!
//! Le widget ne connaît jamais la source directement : il n'observe qu'un
//! [`QuerySnapshot`] (données ou absence, indicateur de chargement, erreur)
//! produit par le [`QueryClient`], qui exécute les récupérations en
//! arrière-plan.

pub mod file;
pub mod http;
pub mod memory;
pub mod query;

pub use file::FileSource;
pub use http::{HttpSource, DEFAULT_USERS_URL};
pub use memory::StaticSource;
pub use query::{fetch_with_retry, QueryClient, QueryOptions, QuerySnapshot};

use crate::error::Result;
use crate::model::Entity;

/// Capacité de récupération de la liste des candidats.
///
/// `fetch` est bloquant ; il est appelé hors du thread de l'interface.
pub trait EntitySource: Send + Sync {
    /// Clé de requête : deux sources de même clé partagent le même résultat.
    fn key(&self) -> String;

    /// Description courte pour la barre de statut.
    fn describe(&self) -> String {
        self.key()
    }

    /// Récupère la liste brute (les entrées `None` sont permises).
    fn fetch(&self) -> Result<Vec<Option<Entity>>>;
}
