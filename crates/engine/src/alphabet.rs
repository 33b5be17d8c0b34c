//! Label digits and the mixed-radix label encoding.
//!
//! A label is the base-`n` representation of an ordinal, where `n` is the
//! alphabet size, written least significant digit first. Ordinal 0 with the
//! default alphabet is `s`, ordinal 27 at width 2 is `ff`. Since the first
//! typed label character is the lowest digit, typing it keeps every
//! `base`-th candidate, and the next character picks among those.

use leap_config::{DEFAULT_LABELS, Settings};


/// Ordered, duplicate-free set of label characters. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelAlphabet {
	chars: Vec<char>,
}

impl Default for LabelAlphabet {
	fn default() -> Self {
		Self {
			chars: DEFAULT_LABELS.to_vec(),
		}
	}
}

impl LabelAlphabet {
	/// Builds an alphabet, dropping repeated characters after their first occurrence.
	///
	/// An empty input yields the default alphabet.
	pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
		let mut unique = Vec::new();
		let mut dropped = 0usize;
		for c in chars {
			if unique.contains(&c) {
				dropped += 1;
			} else {
				unique.push(c);
			}
		}

		if dropped > 0 {
			tracing::debug!(dropped, kept = unique.len(), "Dropped duplicate label characters");
		}
		if unique.is_empty() {
			return Self::default();
		}
		Self { chars: unique }
	}

	/// Builds the alphabet configured in `settings`.
	pub fn from_settings(settings: &Settings) -> Self {
		Self::new(settings.labels().iter().copied())
	}

	/// Number of digits, the radix of the label encoding.
	#[inline]
	pub fn base(&self) -> usize {
		self.chars.len()
	}

	/// Label characters in digit order.
	pub fn chars(&self) -> &[char] {
		&self.chars
	}

	/// Returns the character for digit `i`.
	pub fn digit(&self, i: usize) -> Option<char> {
		self.chars.get(i).copied()
	}

	/// Returns the digit value of `c`.
	pub fn index_of(&self, c: char) -> Option<usize> {
		self.chars.iter().position(|&d| d == c)
	}

	/// Iterates the `width` digits of `ordinal`, least significant first.
	pub fn digits(&self, ordinal: usize, width: usize) -> impl Iterator<Item = char> + '_ {
		let base = self.base();
		let mut value = ordinal;
		(0..width).map(move |_| {
			let d = self.chars[value % base];
			value /= base;
			d
		})
	}

	/// Label of `ordinal` using exactly `width` digits.
	///
	/// Digits above `width` are discarded, so ordinals congruent modulo
	/// `base^width` share a label.
	pub fn label(&self, ordinal: usize, width: usize) -> String {
		self.digits(ordinal, width).collect()
	}

	/// Single-character label shown next to a match.
	#[inline]
	pub fn first_label(&self, ordinal: usize) -> char {
		self.chars[ordinal % self.base()]
	}

	/// Returns true if `label` is the `label.chars().count()`-digit label of `ordinal`.
	pub fn matches(&self, ordinal: usize, label: &str) -> bool {
		let width = label.chars().count();
		self.digits(ordinal, width).eq(label.chars())
	}

	/// Inverse of [`Self::label`]: the smallest ordinal whose label is `label`.
	///
	/// Returns `None` if `label` contains a character outside the alphabet or
	/// the value overflows.
	pub fn decode(&self, label: &str) -> Option<usize> {
		let base = self.base();
		let mut value = 0usize;
		let mut place = 1usize;
		let mut overflowed = false;
		for c in label.chars() {
			let digit = self.index_of(c)?;
			if digit > 0 {
				if overflowed {
					return None;
				}
				value = value.checked_add(digit.checked_mul(place)?)?;
			}
			match place.checked_mul(base) {
				Some(p) => place = p,
				None => overflowed = true,
			}
		}
		Some(value)
	}

	/// Digits needed to give each of `count` candidates a distinct label.
	///
	/// Returns `None` when labels cannot separate them: a single-character
	/// alphabet with more than one candidate.
	pub fn label_width(&self, count: usize) -> Option<usize> {
		if count <= 1 {
			return Some(0);
		}
		let base = self.base();
		if base == 1 {
			return None;
		}
		let mut width = 0;
		let mut capacity = 1usize;
		while capacity < count {
			capacity = capacity.saturating_mul(base);
			width += 1;
		}
		Some(width)
	}
}
