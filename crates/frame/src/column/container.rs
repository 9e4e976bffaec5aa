// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Values of one column plus a validity bitmap; `bitvec[i] == false` marks an
/// undefined slot whose entry in `data` is a placeholder.
#[derive(Clone, Debug, PartialEq)]
pub struct Container<T> {
	data: Vec<T>,
	bitvec: Vec<bool>,
}

impl<T: Clone + Default> Container<T> {
	pub fn new(data: Vec<T>, bitvec: Vec<bool>) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data,
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
			bitvec: Vec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<T>) -> Self {
		let bitvec = vec![true; data.len()];
		Self {
			data,
			bitvec,
		}
	}

	pub fn undefined(len: usize) -> Self {
		Self {
			data: vec![T::default(); len],
			bitvec: vec![false; len],
		}
	}

	pub fn len(&self) -> usize {
		self.bitvec.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bitvec.is_empty()
	}

	pub fn is_defined(&self, index: usize) -> bool {
		self.bitvec.get(index).copied().unwrap_or(false)
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		if self.is_defined(index) {
			self.data.get(index)
		} else {
			None
		}
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(T::default());
		self.bitvec.push(false);
	}

	pub fn extend(&mut self, other: &Container<T>) {
		self.data.extend(other.data.iter().cloned());
		self.bitvec.extend(other.bitvec.iter().copied());
	}

	pub fn extend_undefined(&mut self, len: usize) {
		self.data.extend(std::iter::repeat_n(T::default(), len));
		self.bitvec.extend(std::iter::repeat_n(false, len));
	}

	/// Gathers the rows at `indices`, in that order; repeats are allowed.
	pub fn take(&self, indices: &[usize]) -> Self {
		let mut result = Self::with_capacity(indices.len());
		for &index in indices {
			match self.get(index) {
				Some(value) => result.push(value.clone()),
				None => result.push_undefined(),
			}
		}
		result
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&T>> + '_ {
		self.data.iter().zip(self.bitvec.iter()).map(|(v, &defined)| defined.then_some(v))
	}
}

#[cfg(test)]
mod tests {
	use super::Container;

	#[test]
	fn test_push_and_get() {
		let mut container = Container::with_capacity(2);
		container.push(1i64);
		container.push_undefined();
		assert_eq!(container.len(), 2);
		assert_eq!(container.get(0), Some(&1));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get(2), None);
	}

	#[test]
	fn test_take_repeats() {
		let container = Container::new(vec![10i64, 0, 30], vec![true, false, true]);
		let taken = container.take(&[2, 2, 1, 0]);
		assert_eq!(taken, Container::new(vec![30, 30, 0, 10], vec![true, true, false, true]));
	}

	#[test]
	fn test_extend_undefined() {
		let mut container = Container::from_vec(vec![true]);
		container.extend_undefined(2);
		assert_eq!(container.iter().collect::<Vec<_>>(), vec![Some(&true), None, None]);
	}
}
