use enumset::{EnumSet, EnumSetType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Attendance response buckets a list renders as columns.
#[derive(EnumSetType, Debug, PartialOrd, Ord)]
pub enum Column {
	Yes,
	No,
	Maybe,
	Pending,
}
impl Column {
	pub fn class(&self) -> &'static str {
		match self {
			Self::Yes => "yes",
			Self::No => "no",
			Self::Maybe => "maybe",
			Self::Pending => "pending",
		}
	}
}
impl FromStr for Column {
	type Err = InvalidFilter;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"yes" => Ok(Self::Yes),
			"no" => Ok(Self::No),
			"maybe" => Ok(Self::Maybe),
			"pending" => Ok(Self::Pending),
			_ => Err(InvalidFilter(s.to_owned())),
		}
	}
}

/// A filter checkbox: the `all` meta-filter or one attendance column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
	All,
	Column(Column),
}
impl FilterKind {
	pub fn iter() -> impl Iterator<Item = Self> {
		std::iter::once(Self::All).chain(EnumSet::<Column>::all().iter().map(Self::Column))
	}

	pub fn name(&self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Column(column) => column.class(),
		}
	}
}
impl FromStr for FilterKind {
	type Err = InvalidFilter;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"all" => Ok(Self::All),
			_ => Ok(Self::Column(s.parse()?)),
		}
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{0:?} is not an attendance filter")]
pub struct InvalidFilter(pub String);

/// Which attendance columns are shown. Persisted as `{all, yes, no, maybe, pending}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
	pub all: bool,
	pub yes: bool,
	pub no: bool,
	pub maybe: bool,
	pub pending: bool,
}

impl Default for FilterState {
	fn default() -> Self {
		Self {
			all: true,
			yes: false,
			no: false,
			maybe: false,
			pending: false,
		}
	}
}

impl FilterState {
	/// The state exactly as a set of checkboxes shows it, without normalizing.
	pub fn from_controls(is_checked: impl Fn(FilterKind) -> bool) -> Self {
		let mut state = Self {
			all: is_checked(FilterKind::All),
			..Self::default()
		};
		for column in EnumSet::<Column>::all() {
			*state.flag_mut(column) = is_checked(FilterKind::Column(column));
		}
		state
	}

	pub fn get(&self, kind: FilterKind) -> bool {
		match kind {
			FilterKind::All => self.all,
			FilterKind::Column(column) => *self.flag(column),
		}
	}

	fn flag(&self, column: Column) -> &bool {
		match column {
			Column::Yes => &self.yes,
			Column::No => &self.no,
			Column::Maybe => &self.maybe,
			Column::Pending => &self.pending,
		}
	}

	fn flag_mut(&mut self, column: Column) -> &mut bool {
		match column {
			Column::Yes => &mut self.yes,
			Column::No => &mut self.no,
			Column::Maybe => &mut self.maybe,
			Column::Pending => &mut self.pending,
		}
	}

	/// The columns whose own flag is set, ignoring `all`.
	pub fn columns(&self) -> EnumSet<Column> {
		EnumSet::<Column>::all().iter().filter(|column| *self.flag(*column)).collect()
	}

	/// Applies one checkbox change, then normalizes.
	pub fn with(mut self, kind: FilterKind, checked: bool) -> Self {
		match kind {
			FilterKind::All => {
				self.all = checked;
				if checked {
					self.clear_columns();
				}
			}
			FilterKind::Column(column) => {
				*self.flag_mut(column) = checked;
				self.all = false;
			}
		}
		self.normalized()
	}

	#[cfg(test)]
	pub fn with_column(self, column: Column, checked: bool) -> Self {
		self.with(FilterKind::Column(column), checked)
	}

	fn clear_columns(&mut self) {
		for column in EnumSet::<Column>::all() {
			*self.flag_mut(column) = false;
		}
	}

	/// Canonical form: every column selected collapses into `all`,
	/// and a state with nothing selected falls back to `all`.
	pub fn normalized(mut self) -> Self {
		let columns = self.columns();
		if self.all || columns.is_empty() || columns == EnumSet::all() {
			self.all = true;
			self.clear_columns();
		}
		self
	}

	pub fn visible_columns(&self) -> EnumSet<Column> {
		match self.all {
			true => EnumSet::all(),
			false => self.columns(),
		}
	}

	/// Fill entries pad out rows when several columns sit side by side;
	/// with a single visible column they are hidden.
	pub fn hides_fill(&self) -> bool {
		self.visible_columns().len() == 1
	}
}
