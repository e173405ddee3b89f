//! Vue dérivée : filtrage et tri de la liste des candidats.
//!
//! Fonctions pures ; la liste brute n'est jamais modifiée.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::model::Entity;

/// Calcule la vue affichée à partir de la liste brute.
///
/// Étapes, dans l'ordre :
/// 1. les entrées absentes sont écartées (une liste absente donne une vue vide) ;
/// 2. si `filterable` et que `filter` n'est pas vide, seuls restent les noms
///    qui contiennent `filter` sans tenir compte de la casse ;
/// 3. si `sortable`, tri stable par nom selon [`compare_names`].
pub fn derive_view(
    raw: Option<&[Option<Entity>]>,
    filter: &str,
    filterable: bool,
    sortable: bool,
) -> Vec<Entity> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let needle = filter.to_lowercase();
    let apply_filter = filterable && !needle.is_empty();

    let mut view: Vec<Entity> = raw
        .iter()
        .flatten()
        .filter(|entity| !apply_filter || entity.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if sortable {
        view.sort_by(|a, b| compare_names(&a.name, &b.name));
    }

    view
}

/// Comparaison de noms proche de l'ordre alphabétique usuel.
///
/// Les accents et la casse n'interviennent qu'en dernier recours : « Émile »
/// se range entre « Ann » et « Fred », et deux noms qui ne diffèrent que par
/// la casse gardent un ordre déterministe.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Clé de tri : décomposition NFD, marques combinantes retirées, minuscules.
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: u64, name: &str) -> Entity {
        Entity::new(id, name, name.to_lowercase())
    }

    fn names(view: &[Entity]) -> Vec<&str> {
        view.iter().map(|e| e.name.as_str()).collect()
    }

    fn sample() -> Vec<Option<Entity>> {
        vec![
            Some(entity(1, "Leanne Graham")),
            None,
            Some(entity(2, "Ervin Howell")),
            Some(entity(3, "Clementine Bauch")),
            Some(entity(4, "Patricia Lebsack")),
        ]
    }

    #[test]
    fn test_absent_list_gives_empty_view() {
        assert!(derive_view(None, "", true, true).is_empty());
    }

    #[test]
    fn test_gaps_are_dropped() {
        let raw = sample();
        let view = derive_view(Some(&raw), "", false, false);
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let raw = sample();
        let view = derive_view(Some(&raw), "LE", true, false);
        assert_eq!(
            names(&view),
            vec!["Leanne Graham", "Clementine Bauch", "Patricia Lebsack"]
        );
    }

    #[test]
    fn test_filter_ignored_when_not_filterable() {
        let raw = sample();
        let view = derive_view(Some(&raw), "zzz", false, false);
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_filter_without_match() {
        let raw = sample();
        assert!(derive_view(Some(&raw), "zzz", true, false).is_empty());
    }

    #[test]
    fn test_unsorted_keeps_source_order() {
        let raw = sample();
        let view = derive_view(Some(&raw), "", false, false);
        assert_eq!(
            names(&view),
            vec![
                "Leanne Graham",
                "Ervin Howell",
                "Clementine Bauch",
                "Patricia Lebsack"
            ]
        );
    }

    #[test]
    fn test_sorted_is_non_decreasing() {
        let raw = sample();
        let view = derive_view(Some(&raw), "", false, true);
        assert_eq!(
            names(&view),
            vec![
                "Clementine Bauch",
                "Ervin Howell",
                "Leanne Graham",
                "Patricia Lebsack"
            ]
        );
        assert!(view
            .windows(2)
            .all(|w| compare_names(&w[0].name, &w[1].name) != Ordering::Greater));
    }

    #[test]
    fn test_sort_ignores_accents_and_case() {
        let raw = vec![
            Some(entity(1, "fred")),
            Some(entity(2, "Émile")),
            Some(entity(3, "Ann")),
        ];
        let view = derive_view(Some(&raw), "", false, true);
        assert_eq!(names(&view), vec!["Ann", "Émile", "fred"]);
    }

    #[test]
    fn test_filter_then_sort() {
        let raw = sample();
        let view = derive_view(Some(&raw), "a", true, true);
        assert_eq!(
            names(&view),
            vec!["Clementine Bauch", "Leanne Graham", "Patricia Lebsack"]
        );
    }

    #[test]
    fn test_raw_list_untouched() {
        let raw = sample();
        let before = raw.clone();
        let _ = derive_view(Some(&raw), "e", true, true);
        assert_eq!(raw, before);
    }

    #[test]
    fn test_collation_key() {
        assert_eq!(collation_key("Émilie"), "emilie");
        assert_eq!(compare_names("Bo", "bo"), Ordering::Less);
    }
}
