//! Curseur et fenêtre de défilement sur la liste des options.

/// Liste d'éléments avec un curseur et une fenêtre visible.
///
/// Le curseur sert à la navigation clavier ; il n'a rien à voir avec les
/// éléments *choisis*, tenus à part dans [`super::SelectionSet`].
#[derive(Debug, Clone)]
pub struct ListSelection<T> {
    items: Vec<T>,
    cursor: usize,
    scroll_offset: usize,
    visible_height: usize,
}

impl<T> Default for ListSelection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListSelection<T> {
    /// Crée une liste vide.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Crée une liste avec des éléments, curseur en tête.
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 8,
        }
    }

    /// Définit la hauteur visible (pour le scroll).
    pub fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height.max(1);
        self.adjust_scroll();
    }

    /// Remplace les éléments en gardant le curseur dans les bornes.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.cursor);
        self.adjust_scroll();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Index du curseur.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Élément sous le curseur.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    /// Offset de scroll actuel.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    pub fn move_first(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn move_last(&mut self) {
        if !self.items.is_empty() {
            self.cursor = self.items.len() - 1;
            self.adjust_scroll();
        }
    }

    /// Place le curseur sur un index (ignoré hors bornes).
    pub fn move_to(&mut self, index: usize) {
        if index < self.items.len() {
            self.cursor = index;
            self.adjust_scroll();
        }
    }

    /// Garde le curseur dans la fenêtre visible.
    fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }
        if self.cursor >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.cursor + 1 - self.visible_height;
        }
    }

    /// Éléments de la fenêtre visible, avec leur index dans la liste.
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(self.visible_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_down_stops_at_end() {
        let mut list = ListSelection::with_items(vec![1, 2, 3]);
        list.move_down();
        list.move_down();
        list.move_down();
        assert_eq!(list.cursor(), 2);
        assert_eq!(list.current(), Some(&3));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut list = ListSelection::with_items((0..10).collect());
        list.set_visible_height(3);
        list.move_to(5);
        assert_eq!(list.scroll_offset(), 3);
        let visible: Vec<usize> = list.visible_items().map(|(i, _)| i).collect();
        assert_eq!(visible, vec![3, 4, 5]);

        list.move_first();
        assert_eq!(list.scroll_offset(), 0);
    }

    #[test]
    fn test_set_items_clamps_cursor() {
        let mut list = ListSelection::with_items(vec!['a', 'b', 'c', 'd']);
        list.move_last();
        list.set_items(vec!['a']);
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.current(), Some(&'a'));
    }

    #[test]
    fn test_empty_list() {
        let mut list: ListSelection<i32> = ListSelection::new();
        list.move_down();
        list.move_up();
        list.move_last();
        assert_eq!(list.cursor(), 0);
        assert!(list.current().is_none());
        assert_eq!(list.visible_items().count(), 0);
    }
}
