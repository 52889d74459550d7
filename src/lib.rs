pub mod attrs;
pub mod combo_box;
pub mod element;
pub mod events;
pub mod filter;
pub mod item;
pub mod keys;
pub mod search_autocomplete;
pub mod search_field;
pub mod selection;
pub mod validation;

pub use search_autocomplete::search_autocomplete_behavior;

pub mod prelude {
    pub use crate::attrs::{Attrs, AttrValue, merge_attrs, names};
    pub use crate::combo_box::{
        ComboBoxAttrs, ComboBoxConfig, ComboBoxState, KeyboardDelegate, ListKeyboardDelegate,
        MenuTrigger, combo_box_behavior,
    };
    pub use crate::element::{ElementId, item_element_id};
    pub use crate::events::{Event, EventHandler, EventResult};
    pub use crate::filter::{FilterMatch, fuzzy_filter};
    pub use crate::item::{Item, ItemKey, SuggestionItem};
    pub use crate::keys::{Key, KeyCombo, Modifiers, convert_key_event};
    pub use crate::search_autocomplete::{
        SearchAutocompleteAttrs, SearchAutocompleteConfig, search_autocomplete_behavior,
    };
    pub use crate::search_field::{
        SearchFieldAttrs, SearchFieldConfig, ValueBinding, search_field_behavior,
    };
    pub use crate::selection::SelectionManager;
    pub use crate::validation::{ErrorDisplay, Validator};
}
