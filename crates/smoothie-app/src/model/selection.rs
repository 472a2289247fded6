//! The multi-select widget's state.

/// Maximum number of ingredients the widget accepts.
pub const MAX_INGREDIENTS: usize = 5;

/// An ordered set of at most [`MAX_INGREDIENTS`] catalog names.
///
/// The only way to build one is [`IngredientSelection::normalize`], which is
/// what makes an over-long or out-of-catalog selection unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSelection {
    names: Vec<String>,
}

impl IngredientSelection {
    /// Builds the selection the widget would hold for `requested`.
    ///
    /// Keeps request order. Names missing from `catalog`, repeats, and
    /// everything after the fifth accepted name are dropped.
    pub fn normalize<S: AsRef<str>>(catalog: &[String], requested: &[S]) -> Self {
        let mut names: Vec<String> = Vec::with_capacity(MAX_INGREDIENTS);
        for name in requested.iter().map(AsRef::as_ref) {
            if names.len() == MAX_INGREDIENTS {
                break;
            }
            if catalog.iter().any(|c| c == name) && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The value stored in the `INGREDIENTS` column.
    pub fn ingredients_string(&self) -> String {
        self.names.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<String> {
        ["Apple", "Banana", "Kiwi", "Mango", "Lime", "Peach", "Plum"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn keeps_selection_order() {
        let selection = IngredientSelection::normalize(&catalog(), &["Mango", "Apple"]);
        assert_eq!(selection.names(), ["Mango", "Apple"]);
        assert_eq!(selection.ingredients_string(), "Mango Apple");
    }

    #[test]
    fn never_holds_more_than_five() {
        let selection = IngredientSelection::normalize(
            &catalog(),
            &["Apple", "Banana", "Kiwi", "Mango", "Lime", "Peach", "Plum"],
        );
        assert_eq!(selection.names().len(), MAX_INGREDIENTS);
        assert_eq!(selection.names(), ["Apple", "Banana", "Kiwi", "Mango", "Lime"]);
    }

    #[test]
    fn drops_unknown_and_repeated_names() {
        let selection =
            IngredientSelection::normalize(&catalog(), &["Kiwi", "Durian", "Kiwi", "", "Lime"]);
        assert_eq!(selection.names(), ["Kiwi", "Lime"]);
    }

    #[test]
    fn repeats_do_not_use_up_slots() {
        let selection = IngredientSelection::normalize(
            &catalog(),
            &["Apple", "Apple", "Banana", "Kiwi", "Mango", "Lime"],
        );
        assert_eq!(selection.names(), ["Apple", "Banana", "Kiwi", "Mango", "Lime"]);
    }

    #[test]
    fn empty_catalog_yields_empty_selection() {
        let selection = IngredientSelection::normalize(&[], &["Apple"]);
        assert!(selection.is_empty());
        assert_eq!(selection.ingredients_string(), "");
    }
}
