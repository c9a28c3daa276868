use crate::storage::{Backend, Store};
use std::str::FromStr;

pub static PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// What the user picked in the theme switcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeChoice {
	Light,
	Dark,
	Auto,
}
impl ToString for ThemeChoice {
	fn to_string(&self) -> String {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
			Self::Auto => "auto",
		}
		.to_owned()
	}
}
impl FromStr for ThemeChoice {
	type Err = InvalidTheme;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			"auto" => Ok(Self::Auto),
			_ => Err(InvalidTheme(s.to_owned())),
		}
	}
}
impl ThemeChoice {
	pub fn resolve(self, prefers_dark: bool) -> Theme {
		match (self, prefers_dark) {
			(Self::Light, _) => Theme::Light,
			(Self::Dark, _) => Theme::Dark,
			(Self::Auto, true) => Theme::Dark,
			(Self::Auto, false) => Theme::Light,
		}
	}

	pub fn is_explicit(&self) -> bool {
		!matches!(self, Self::Auto)
	}

	pub fn icon_class(&self) -> &'static str {
		match self {
			Self::Light => "bi-sun-fill",
			Self::Dark => "bi-moon-stars-fill",
			Self::Auto => "bi-circle-half",
		}
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{0:?} is not a theme")]
pub struct InvalidTheme(pub String);

/// The theme actually applied to the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
	Light,
	Dark,
}
impl Theme {
	pub fn attribute(&self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeUpdate {
	pub choice: ThemeChoice,
	pub theme: Theme,
}

pub fn active_choice<B: Backend>(store: &Store<B>) -> ThemeChoice {
	store.theme().unwrap_or(ThemeChoice::Auto)
}

pub fn current<B: Backend>(store: &Store<B>, prefers_dark: bool) -> ThemeUpdate {
	let choice = active_choice(store);
	ThemeUpdate {
		choice,
		theme: choice.resolve(prefers_dark),
	}
}

/// Persists the user's pick; the resolved theme is never stored.
pub fn choose<B: Backend>(store: &Store<B>, choice: ThemeChoice, prefers_dark: bool) -> ThemeUpdate {
	store.set_theme(choice);
	ThemeUpdate {
		choice,
		theme: choice.resolve(prefers_dark),
	}
}

/// A system preference change only matters while no explicit theme is stored.
pub fn on_system_change<B: Backend>(store: &Store<B>, prefers_dark: bool) -> Option<ThemeUpdate> {
	let update = current(store, prefers_dark);
	match update.choice.is_explicit() {
		true => None,
		false => Some(update),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::memory::MemoryBackend;

	fn store() -> Store<MemoryBackend> {
		Store::new("test_", MemoryBackend::default())
	}

	#[test]
	fn follows_system_without_a_choice() {
		let store = store();
		assert_eq!(current(&store, true).theme, Theme::Dark);
		assert_eq!(current(&store, false).theme, Theme::Light);
		assert_eq!(on_system_change(&store, true).map(|update| update.theme), Some(Theme::Dark));
	}

	#[test]
	fn explicit_choice_ignores_system() {
		let store = store();
		let update = choose(&store, ThemeChoice::Light, true);
		assert_eq!(update.theme, Theme::Light);
		assert_eq!(current(&store, true).theme, Theme::Light);
		assert_eq!(on_system_change(&store, true), None);
	}

	#[test]
	fn auto_is_stored_as_choice() {
		let store = store();
		choose(&store, ThemeChoice::Dark, false);
		let update = choose(&store, ThemeChoice::Auto, false);
		assert_eq!(update.theme, Theme::Light);
		assert_eq!(store.theme(), Some(ThemeChoice::Auto));
		assert_eq!(
			on_system_change(&store, true),
			Some(ThemeUpdate {
				choice: ThemeChoice::Auto,
				theme: Theme::Dark,
			})
		);
	}
}
