//! Element ids and selectors the server-rendered markup provides.
use crate::{filter::FilterKind, registry::ListId};

pub static LIST_MARKER_PREFIX: &str = "filter-all-";
pub static CATEGORY_MENU: &str = "[id^=\"category-dropdown-menu-\"], .dropdown-menu";
pub static CATEGORY_CHECKBOX: &str = ".category-checkbox";
pub static CATEGORY_SHORTCUT: &str = ".category-label-shortcut";
pub static CATEGORY_SELECT_ALL: &str = ".category-select-all-btn";
pub static CATEGORY_SECTION: &str = ".register-category";
pub static CATEGORY_NAME_ATTR: &str = "data-category-name";
pub static ENTRY: &str = ".alert";
pub static USER_ENTRY: &str = ".alert[data-user-id]";
pub static USER_ID_ATTR: &str = "data-user-id";
pub static FILL_ENTRY: &str = ".fill-entry";

pub static HIDDEN: &str = "d-none";
pub static HIGHLIGHTED: &str = "alert-info";
pub static CLICKABLE: &str = "pointer";

pub fn filter_control(kind: FilterKind, list: &ListId) -> String {
	format!("filter-{}-{list}", kind.name())
}

pub fn container(list: &ListId) -> String {
	format!("mucke-{list}")
}

pub fn category_menu(list: &ListId) -> String {
	format!("category-dropdown-menu-{list}")
}

pub fn category_dropdown(list: &ListId) -> String {
	format!("categoryDropdown-{list}")
}
