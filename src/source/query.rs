//! Exécution des requêtes en arrière-plan, avec cache et relances.
//!
//! Chaque requête est identifiée par la clé de sa source. Le client garde
//! le dernier résultat de chaque clé dans un cache LRU : un widget monté
//! plus tard sur une clé déjà connue voit immédiatement les données, et
//! plusieurs widgets sur la même clé partagent une seule récupération.
//!
//! La récupération tourne dans un thread dédié et rend compte par un canal
//! `mpsc` ; le thread de l'interface n'observe le résultat qu'au moment où
//! il appelle [`QueryClient::poll`].

use std::num::NonZeroUsize;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};
use lru::LruCache;

use crate::error::Result;
use crate::model::Entity;

use super::EntitySource;

/// Nombre de clés gardées en cache.
const DEFAULT_CAPACITY: usize = 16;

/// Politique de relance des récupérations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Relances après le premier échec.
    pub retries: u32,
    /// Délai de base ; la n-ième relance attend `n × retry_delay`.
    pub retry_delay: Duration,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            retries: 3,
            retry_delay: Duration::from_millis(250),
        }
    }
}

/// Ce que le widget voit d'une requête.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySnapshot {
    /// Liste brute, absente tant que rien n'a été chargé.
    pub data: Option<Arc<Vec<Option<Entity>>>>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl QuerySnapshot {
    /// Requête en cours, sans données.
    pub fn loading() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }

    /// Requête terminée avec succès.
    pub fn ready(items: Vec<Option<Entity>>) -> Self {
        Self {
            data: Some(Arc::new(items)),
            is_loading: false,
            error: None,
        }
    }

    /// Requête terminée en échec.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            data: None,
            is_loading: false,
            error: Some(message.into()),
        }
    }

    /// Liste brute, si disponible.
    pub fn entities(&self) -> Option<&[Option<Entity>]> {
        self.data.as_deref().map(Vec::as_slice)
    }

    /// Nombre d'entités réellement présentes.
    pub fn len(&self) -> usize {
        self.entities()
            .map(|items| items.iter().flatten().count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Message du thread de récupération.
enum FetchMessage {
    Loaded(Vec<Option<Entity>>),
    Failed(String),
}

struct QueryEntry {
    source: Arc<dyn EntitySource>,
    snapshot: QuerySnapshot,
    inbox: Option<Receiver<FetchMessage>>,
}

/// Client de requêtes partagé par tous les widgets de l'application.
pub struct QueryClient {
    entries: LruCache<String, QueryEntry>,
    options: QueryOptions,
}

impl QueryClient {
    pub fn new(capacity: NonZeroUsize, options: QueryOptions) -> Self {
        Self {
            entries: LruCache::new(capacity),
            options,
        }
    }

    /// Client avec la capacité par défaut.
    pub fn with_options(options: QueryOptions) -> Self {
        let capacity = NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::new(capacity, options)
    }

    /// Enregistre une source et lance sa récupération si la clé est inconnue.
    ///
    /// Retourne la clé à interroger ensuite avec [`QueryClient::snapshot`].
    pub fn ensure(&mut self, source: Arc<dyn EntitySource>) -> String {
        let key = source.key();
        if self.entries.get(&key).is_some() {
            debug!("requête '{}' déjà connue, réutilisation du cache", key);
            return key;
        }

        info!("lancement de la requête '{}'", key);
        let inbox = spawn_fetch(Arc::clone(&source), self.options);
        self.entries.put(
            key.clone(),
            QueryEntry {
                source,
                snapshot: QuerySnapshot::loading(),
                inbox: Some(inbox),
            },
        );
        key
    }

    /// Relance une requête ; les données précédentes restent visibles.
    pub fn refetch(&mut self, key: &str) -> bool {
        let options = self.options;
        let Some(entry) = self.entries.get_mut(key) else {
            return false;
        };
        if entry.inbox.is_some() {
            return false;
        }

        info!("relance de la requête '{}'", key);
        entry.snapshot.is_loading = true;
        entry.snapshot.error = None;
        entry.inbox = Some(spawn_fetch(Arc::clone(&entry.source), options));
        true
    }

    /// Relance toutes les requêtes connues.
    pub fn refetch_all(&mut self) {
        let keys: Vec<String> = self.entries.iter().map(|(key, _)| key.clone()).collect();
        for key in keys {
            self.refetch(&key);
        }
    }

    /// Relève les résultats arrivés. Retourne `true` si un instantané a changé.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        for (key, entry) in self.entries.iter_mut() {
            let Some(inbox) = &entry.inbox else {
                continue;
            };

            match inbox.try_recv() {
                Ok(FetchMessage::Loaded(items)) => {
                    info!("requête '{}' : {} entrées reçues", key, items.len());
                    entry.snapshot = QuerySnapshot::ready(items);
                    entry.inbox = None;
                    changed = true;
                }
                Ok(FetchMessage::Failed(message)) => {
                    warn!("requête '{}' en échec : {}", key, message);
                    // Les données précédentes restent affichées.
                    entry.snapshot.is_loading = false;
                    entry.snapshot.error = Some(message);
                    entry.inbox = None;
                    changed = true;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    warn!("requête '{}' : thread de récupération interrompu", key);
                    entry.snapshot.is_loading = false;
                    entry.snapshot.error = Some("récupération interrompue".to_string());
                    entry.inbox = None;
                    changed = true;
                }
            }
        }

        changed
    }

    /// Instantané courant d'une clé (vide si la clé est inconnue ou évincée).
    pub fn snapshot(&self, key: &str) -> QuerySnapshot {
        self.entries
            .peek(key)
            .map(|entry| entry.snapshot.clone())
            .unwrap_or_default()
    }

    /// Description de la source d'une clé.
    pub fn describe(&self, key: &str) -> Option<String> {
        self.entries.peek(key).map(|entry| entry.source.describe())
    }

    /// Une requête au moins est-elle en cours ?
    pub fn is_loading(&self) -> bool {
        self.entries.iter().any(|(_, entry)| entry.snapshot.is_loading)
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::with_options(QueryOptions::default())
    }
}

/// Récupère la liste en relançant après chaque échec selon `options`.
pub fn fetch_with_retry(
    source: &dyn EntitySource,
    options: &QueryOptions,
) -> Result<Vec<Option<Entity>>> {
    let mut attempt = 0;
    loop {
        match source.fetch() {
            Ok(items) => return Ok(items),
            Err(e) if attempt < options.retries => {
                attempt += 1;
                warn!(
                    "échec de '{}' ({}), relance {}/{}",
                    source.key(),
                    e,
                    attempt,
                    options.retries
                );
                thread::sleep(options.retry_delay * attempt);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Lance la récupération dans un thread dédié.
fn spawn_fetch(source: Arc<dyn EntitySource>, options: QueryOptions) -> Receiver<FetchMessage> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let message = match fetch_with_retry(source.as_ref(), &options) {
            Ok(items) => FetchMessage::Loaded(items),
            Err(e) => FetchMessage::Failed(e.to_string()),
        };
        // Le destinataire a pu être évincé du cache entre-temps.
        let _ = tx.send(message);
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PickerError;
    use crate::source::StaticSource;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Instant;

    /// Source qui échoue un nombre donné de fois avant de réussir.
    struct FlakySource {
        failures_left: AtomicU32,
        calls: AtomicU32,
    }

    impl FlakySource {
        fn new(failures: u32) -> Self {
            Self {
                failures_left: AtomicU32::new(failures),
                calls: AtomicU32::new(0),
            }
        }
    }

    impl EntitySource for FlakySource {
        fn key(&self) -> String {
            "flaky".to_string()
        }

        fn fetch(&self) -> Result<Vec<Option<Entity>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let left = self.failures_left.load(Ordering::SeqCst);
            if left > 0 {
                self.failures_left.store(left - 1, Ordering::SeqCst);
                Err(PickerError::Other("indisponible".to_string()))
            } else {
                Ok(vec![Some(Entity::new(1, "Ann", "ann"))])
            }
        }
    }

    fn no_delay(retries: u32) -> QueryOptions {
        QueryOptions {
            retries,
            retry_delay: Duration::ZERO,
        }
    }

    /// Attend que la requête `key` ne soit plus en cours.
    fn wait_settled(client: &mut QueryClient, key: &str) -> QuerySnapshot {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            client.poll();
            let snapshot = client.snapshot(key);
            if !snapshot.is_loading || Instant::now() > deadline {
                return snapshot;
            }
            thread::sleep(Duration::from_millis(5));
        }
    }

    fn users() -> Vec<Entity> {
        vec![Entity::new(1, "Ann", "ann"), Entity::new(2, "Bo", "bo")]
    }

    #[test]
    fn test_retry_until_success() {
        let source = FlakySource::new(2);
        let items = fetch_with_retry(&source, &no_delay(3)).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_retry_gives_up() {
        let source = FlakySource::new(5);
        assert!(fetch_with_retry(&source, &no_delay(1)).is_err());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_client_loads_in_background() {
        let mut client = QueryClient::with_options(no_delay(0));
        let key = client.ensure(Arc::new(StaticSource::new("users", users())));

        assert!(client.snapshot(&key).is_loading);

        let snapshot = wait_settled(&mut client, &key);
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn test_client_surfaces_error_without_data() {
        let mut client = QueryClient::with_options(no_delay(0));
        let key = client.ensure(Arc::new(StaticSource::failing("users", "hors ligne")));

        let snapshot = wait_settled(&mut client, &key);
        assert!(snapshot.data.is_none());
        assert_eq!(snapshot.error.as_deref(), Some("hors ligne"));
    }

    #[test]
    fn test_same_key_is_shared() {
        let mut client = QueryClient::with_options(no_delay(0));
        let first = client.ensure(Arc::new(StaticSource::new("users", users())));
        wait_settled(&mut client, &first);

        // Une seconde source de même clé ne relance rien : le cache répond.
        let second = client.ensure(Arc::new(StaticSource::new("users", Vec::new())));
        assert_eq!(first, second);
        let snapshot = client.snapshot(&second);
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_refetch_keeps_stale_data() {
        let mut client = QueryClient::with_options(no_delay(0));
        let key = client.ensure(Arc::new(StaticSource::new("users", users())));
        wait_settled(&mut client, &key);

        assert!(client.refetch(&key));
        let during = client.snapshot(&key);
        assert!(during.is_loading);
        assert_eq!(during.len(), 2);

        let after = wait_settled(&mut client, &key);
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn test_unknown_key_gives_empty_snapshot() {
        let client = QueryClient::default();
        assert_eq!(client.snapshot("inconnue"), QuerySnapshot::default());
        assert!(!client.is_loading());
    }

    #[test]
    fn test_snapshot_len_ignores_gaps() {
        let snapshot = QuerySnapshot::ready(vec![None, Some(Entity::new(1, "Ann", "ann")), None]);
        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot.is_empty());
    }
}
