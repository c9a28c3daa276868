/// Something that can re-run its layout, i.e. a masonry grid instance.
pub trait Layout {
	fn layout(&self);
}

/// Layout instances keyed by the grid element they were created for.
#[derive(Debug)]
pub struct Grids<K, L> {
	instances: Vec<(K, L)>,
}

impl<K, L> Default for Grids<K, L> {
	fn default() -> Self {
		Self { instances: Vec::new() }
	}
}

impl<K: PartialEq, L: Layout> Grids<K, L> {
	pub fn contains(&self, grid: &K) -> bool {
		self.instances.iter().any(|(key, _)| key == grid)
	}

	/// Registers a grid once; later registrations of the same grid are ignored.
	pub fn insert_with(&mut self, grid: K, make_instance: impl FnOnce(&K) -> Option<L>) {
		if self.contains(&grid) {
			return;
		}
		if let Some(instance) = make_instance(&grid) {
			self.instances.push((grid, instance));
		}
	}

	/// Lays out only the given grid. Returns false for unknown grids.
	pub fn relayout(&self, grid: &K) -> bool {
		let Some((_, instance)) = self.instances.iter().find(|(key, _)| key == grid) else {
			return false;
		};
		instance.layout();
		true
	}

	pub fn len(&self) -> usize {
		self.instances.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::Cell;

	#[derive(Default)]
	struct Counter(Cell<usize>);
	impl Layout for Counter {
		fn layout(&self) {
			self.0.set(self.0.get() + 1);
		}
	}

	#[test]
	fn relayout_touches_one_grid() {
		let mut grids = Grids::default();
		grids.insert_with("a", |_| Some(Counter::default()));
		grids.insert_with("b", |_| Some(Counter::default()));
		grids.insert_with("a", |_| panic!("grid registered twice"));
		grids.insert_with("no-library", |_| None);
		assert_eq!(grids.len(), 2);

		assert!(grids.relayout(&"b"));
		assert!(!grids.relayout(&"c"));
		let counts = grids.instances.iter().map(|(key, counter)| (*key, counter.0.get())).collect::<Vec<_>>();
		assert_eq!(counts, [("a", 0), ("b", 1)]);
	}
}
