//! Configuration d'un widget de sélection, fixée à la construction.

use std::collections::HashSet;
use std::fmt;

use ratatui::text::Line;

use crate::icons::IconType;
use crate::model::{Entity, EntityId};

/// Rendu complet du corps d'une option.
pub type CustomRender = Box<dyn Fn(&Entity) -> Line<'static>>;
/// Texte affiché pour une entité choisie.
pub type DisplayValue = Box<dyn Fn(&Entity) -> String>;
/// Notification du propriétaire après une sélection.
pub type OnOptionSelect = Box<dyn FnMut(&Entity)>;

/// Options d'un widget de sélection.
///
/// ```rust,ignore
/// let config = SelectConfig::new("Membre", "Choisir un membre", |e| println!("{}", e.name))
///     .icon_type(IconType::UserImage)
///     .multiple(true)
///     .filterable(true);
/// ```
pub struct SelectConfig {
    label: String,
    placeholder: String,
    icon_type: Option<IconType>,
    placeholder_icon: bool,
    custom_render: Option<CustomRender>,
    display_value: Option<DisplayValue>,
    on_option_select: OnOptionSelect,
    disabled_options: HashSet<EntityId>,
    filterable: bool,
    sortable: bool,
    multiple: bool,
    disabled: bool,
}

impl SelectConfig {
    pub fn new(
        label: impl Into<String>,
        placeholder: impl Into<String>,
        on_option_select: impl FnMut(&Entity) + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            icon_type: None,
            placeholder_icon: false,
            custom_render: None,
            display_value: None,
            on_option_select: Box::new(on_option_select),
            disabled_options: HashSet::new(),
            filterable: false,
            sortable: false,
            multiple: false,
            disabled: false,
        }
    }

    pub fn icon_type(mut self, icon: IconType) -> Self {
        self.icon_type = Some(icon);
        self
    }

    pub fn placeholder_icon(mut self, enabled: bool) -> Self {
        self.placeholder_icon = enabled;
        self
    }

    pub fn custom_render(mut self, render: impl Fn(&Entity) -> Line<'static> + 'static) -> Self {
        self.custom_render = Some(Box::new(render));
        self
    }

    pub fn display_value(mut self, display: impl Fn(&Entity) -> String + 'static) -> Self {
        self.display_value = Some(Box::new(display));
        self
    }

    pub fn disabled_options(mut self, ids: impl IntoIterator<Item = EntityId>) -> Self {
        self.disabled_options = ids.into_iter().collect();
        self
    }

    pub fn filterable(mut self, enabled: bool) -> Self {
        self.filterable = enabled;
        self
    }

    pub fn sortable(mut self, enabled: bool) -> Self {
        self.sortable = enabled;
        self
    }

    pub fn multiple(mut self, enabled: bool) -> Self {
        self.multiple = enabled;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn icon(&self) -> Option<IconType> {
        self.icon_type
    }

    pub fn has_placeholder_icon(&self) -> bool {
        self.placeholder_icon
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_option_disabled(&self, id: EntityId) -> bool {
        self.disabled_options.contains(&id)
    }

    /// Corps personnalisé d'une option, si `custom_render` est fourni.
    pub fn render_custom(&self, entity: &Entity) -> Option<Line<'static>> {
        self.custom_render.as_ref().map(|render| render(entity))
    }

    /// Texte personnalisé d'une entité, si `display_value` est fourni.
    pub fn render_display_value(&self, entity: &Entity) -> Option<String> {
        self.display_value.as_ref().map(|display| display(entity))
    }

    pub(crate) fn notify(&mut self, entity: &Entity) {
        (self.on_option_select)(entity);
    }
}

impl fmt::Debug for SelectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectConfig")
            .field("label", &self.label)
            .field("placeholder", &self.placeholder)
            .field("icon_type", &self.icon_type)
            .field("placeholder_icon", &self.placeholder_icon)
            .field("custom_render", &self.custom_render.is_some())
            .field("display_value", &self.display_value.is_some())
            .field("disabled_options", &self.disabled_options)
            .field("filterable", &self.filterable)
            .field("sortable", &self.sortable)
            .field("multiple", &self.multiple)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
