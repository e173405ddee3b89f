//! Entité sélectionnable (un membre d'équipe) et son format JSON.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::utils::text::{pad_right, truncate};

/// Identifiant stable d'une entité.
pub type EntityId = u64;

/// Largeur de la colonne du nom dans l'affichage non-interactif.
const NAME_COLUMN: usize = 24;

/// Un élément sélectionnable fourni par la source de données.
///
/// Le widget ne modifie jamais une entité : il en conserve des copies dans
/// sa sélection. Les champs inconnus du JSON sont gardés dans `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    /// Étiquette secondaire (le handle, affiché avec un `@`).
    #[serde(default)]
    pub username: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity {
    /// Crée une entité sans champs additionnels.
    pub fn new(id: EntityId, name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            extra: Map::new(),
        }
    }

    /// Ajoute un champ additionnel.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Retourne un champ additionnel.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Handle préfixé par `@`.
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = pad_right(&truncate(&self.name, NAME_COLUMN - 1, true), NAME_COLUMN);
        write!(f, "#{:<4}{}@{}", self.id, name, self.username)
    }
}

/// Parse une liste JSON d'entités.
///
/// Les entrées `null` sont conservées comme `None` : c'est la vue dérivée
/// qui les écarte, la liste brute reste telle que la source l'a livrée.
pub fn parse_entity_list(json: &str) -> Result<Vec<Option<Entity>>> {
    Ok(serde_json::from_str(json)?)
}
