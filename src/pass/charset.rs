//! Character categories and the pooled alphabet built from them.

use std::fmt;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// A named class of characters with a fixed alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl Category {
    /// Every category, in iteration order.
    pub const ALL: [Category; 4] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Numbers,
        Category::Symbols,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            Category::Uppercase => UPPERCASE,
            Category::Lowercase => LOWERCASE,
            Category::Numbers => NUMBERS,
            Category::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Uppercase => "uppercase",
            Category::Lowercase => "lowercase",
            Category::Numbers => "numbers",
            Category::Symbols => "symbols",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Whether `c` belongs to this category's alphabet.
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of enabled categories. Iterates in [`Category::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const fn empty() -> Self {
        CategorySet(0)
    }

    pub const fn all() -> Self {
        CategorySet(0b1111)
    }

    pub fn with(mut self, category: Category) -> Self {
        self.insert(category);
        self
    }

    pub fn insert(&mut self, category: Category) {
        self.0 |= category.bit();
    }

    pub fn remove(&mut self, category: Category) {
        self.0 &= !category.bit();
    }

    /// Flip a category, returning whether it is now enabled.
    pub fn toggle(&mut self, category: Category) -> bool {
        self.0 ^= category.bit();
        self.contains(category)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// Concatenation of the enabled alphabets.
    pub fn pool(&self) -> Vec<u8> {
        let mut chars = Vec::with_capacity(self.pool_size());
        for category in self.iter() {
            chars.extend_from_slice(category.alphabet());
        }
        chars
    }

    /// Size of the pooled alphabet (for entropy calculation).
    pub fn pool_size(&self) -> usize {
        self.iter().map(|c| c.alphabet().len()).sum()
    }

    /// Labels joined with `+`, the settings file representation.
    pub fn to_labels(&self) -> String {
        self.iter().map(Category::label).collect::<Vec<_>>().join("+")
    }

    /// Parse a list of labels separated by `+` or `,`.
    /// Returns the first unknown label on failure.
    pub fn from_labels(s: &str) -> Result<Self, String> {
        let mut set = CategorySet::empty();
        for part in s.split(['+', ',']).filter(|p| !p.trim().is_empty()) {
            match Category::from_label(part) {
                Some(category) => set.insert(category),
                None => return Err(part.trim().to_string()),
            }
        }
        Ok(set)
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_are_disjoint_and_non_empty() {
        for (i, a) in Category::ALL.iter().enumerate() {
            assert!(!a.alphabet().is_empty());
            for b in &Category::ALL[i + 1..] {
                assert!(a.alphabet().iter().all(|c| !b.alphabet().contains(c)));
            }
        }
    }

    #[test]
    fn iteration_follows_fixed_order() {
        let set = CategorySet::empty()
            .with(Category::Symbols)
            .with(Category::Uppercase)
            .with(Category::Numbers);
        let order: Vec<_> = set.iter().collect();
        assert_eq!(
            order,
            vec![Category::Uppercase, Category::Numbers, Category::Symbols]
        );
    }

    #[test]
    fn pool_is_concatenation_of_enabled_alphabets() {
        let set = CategorySet::empty()
            .with(Category::Numbers)
            .with(Category::Lowercase);
        assert_eq!(set.pool(), b"abcdefghijklmnopqrstuvwxyz0123456789".to_vec());
        assert_eq!(set.pool_size(), 36);
        assert!(CategorySet::empty().pool().is_empty());
    }

    #[test]
    fn toggle_flips_membership() {
        let mut set = CategorySet::all();
        assert!(!set.toggle(Category::Symbols));
        assert_eq!(set.len(), 3);
        assert!(set.toggle(Category::Symbols));
        assert_eq!(set, CategorySet::all());
    }

    #[test]
    fn labels_parse_and_print() {
        let set = CategorySet::from_labels("Numbers, symbols").unwrap();
        assert_eq!(set.to_labels(), "numbers+symbols");
        assert_eq!(CategorySet::from_labels("").unwrap(), CategorySet::empty());
        assert_eq!(CategorySet::from_labels("digits"), Err("digits".to_string()));
        assert_eq!(
            CategorySet::from_labels(&CategorySet::all().to_labels()).unwrap(),
            CategorySet::all()
        );
    }

    #[test]
    fn contains_rejects_non_ascii() {
        assert!(Category::Symbols.contains('='));
        assert!(!Category::Symbols.contains('é'));
        assert!(!Category::Lowercase.contains('A'));
    }
}
