//! Ensemble ordonné des entités choisies.

use crate::model::{Entity, EntityId};

/// Entités choisies, dans l'ordre d'ajout et sans doublon d'identifiant.
///
/// La limite à un élément du mode simple est tenue par le widget, qui
/// n'utilise alors que [`SelectionSet::replace`] et [`SelectionSet::clear`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    items: Vec<Entity>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.items.iter().any(|e| e.id == id)
    }

    /// Ajoute en fin ; refuse un identifiant déjà présent.
    pub fn push(&mut self, entity: Entity) -> bool {
        if self.contains(entity.id) {
            return false;
        }
        self.items.push(entity);
        true
    }

    /// Remplace tout le contenu par une seule entité.
    pub fn replace(&mut self, entity: Entity) {
        self.items.clear();
        self.items.push(entity);
    }

    /// Retire l'entité d'identifiant `id`.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.items.iter().position(|e| e.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Entité principale (la plus ancienne).
    pub fn first(&self) -> Option<&Entity> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.items.iter()
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.items.iter().map(|e| e.id).collect()
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order_and_rejects_duplicates() {
        let mut set = SelectionSet::new();
        assert!(set.push(Entity::new(2, "Bo", "bo")));
        assert!(set.push(Entity::new(1, "Ann", "ann")));
        assert!(!set.push(Entity::new(2, "Bo", "bo")));
        assert_eq!(set.ids(), vec![2, 1]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut set = SelectionSet::new();
        set.push(Entity::new(1, "Ann", "ann"));
        set.push(Entity::new(2, "Bo", "bo"));
        set.push(Entity::new(3, "Cy", "cy"));

        assert_eq!(set.remove(2).map(|e| e.id), Some(2));
        assert!(set.remove(2).is_none());
        assert_eq!(set.ids(), vec![1, 3]);
        assert_eq!(set.first().map(|e| e.id), Some(1));
    }

    #[test]
    fn test_replace() {
        let mut set = SelectionSet::new();
        set.push(Entity::new(1, "Ann", "ann"));
        set.push(Entity::new(2, "Bo", "bo"));
        set.replace(Entity::new(3, "Cy", "cy"));
        assert_eq!(set.ids(), vec![3]);
    }
}
