//! Modèle de données des éléments sélectionnables.

pub mod entity;

pub use entity::{parse_entity_list, Entity, EntityId};
