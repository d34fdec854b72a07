use crate::pass::CategorySet;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub strength: bool,
    pub strict: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
    /// Categories switched off with `--no-*`.
    pub disabled: CategorySet,
    /// Exact selection from `--only`.
    pub only: Option<CategorySet>,
    /// Password to score with `--check`; `-` means stdin.
    pub check: Option<String>,
}

impl CliFlags {
    /// Whether the flags change the category selection at all.
    pub fn touches_categories(&self) -> bool {
        self.only.is_some() || !self.disabled.is_empty()
    }

    /// Apply `--only` then `--no-*` to a starting selection.
    pub fn categories(&self, base: CategorySet) -> CategorySet {
        let mut set = self.only.unwrap_or(base);
        for category in self.disabled.iter() {
            set.remove(category);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::Category;

    #[test]
    fn only_then_disabled() {
        let flags = CliFlags {
            only: Some(
                CategorySet::empty()
                    .with(Category::Numbers)
                    .with(Category::Symbols),
            ),
            disabled: CategorySet::empty().with(Category::Symbols),
            ..Default::default()
        };
        assert!(flags.touches_categories());
        assert_eq!(
            flags.categories(CategorySet::all()),
            CategorySet::empty().with(Category::Numbers)
        );
    }

    #[test]
    fn untouched_selection_passes_through() {
        let flags = CliFlags::default();
        assert!(!flags.touches_categories());
        assert_eq!(flags.categories(CategorySet::all()), CategorySet::all());
    }
}
