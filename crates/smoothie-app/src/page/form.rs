//! Widget state sent back by the browser on each interaction.

use super::{INGREDIENTS_FIELD, NAME_FIELD, REMOVE_FIELD, SUBMIT_FIELD};

/// The request-scoped widget values for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Text input value, untouched.
    pub name: String,
    /// Requested ingredients in the order they were chosen. Not yet checked
    /// against the catalog.
    pub ingredients: Vec<String>,
    /// `true` only on the pass triggered by the submit button.
    pub submitted: bool,
}

impl FormState {
    /// Parses `application/x-www-form-urlencoded` input (query string or body).
    ///
    /// The first `name` wins. Empty `ingredients` values (the add dropdown's
    /// placeholder) are skipped, and every `remove` value is taken out of the
    /// list.
    pub fn from_urlencoded(input: &str) -> Self {
        let mut state = FormState::default();
        let mut name: Option<String> = None;
        let mut removed: Vec<String> = Vec::new();

        for (key, value) in url::form_urlencoded::parse(input.as_bytes()) {
            match key.as_ref() {
                NAME_FIELD => {
                    if name.is_none() {
                        name = Some(value.into_owned());
                    }
                }
                INGREDIENTS_FIELD if !value.is_empty() => state.ingredients.push(value.into_owned()),
                REMOVE_FIELD => removed.push(value.into_owned()),
                SUBMIT_FIELD => state.submitted = !value.is_empty(),
                _ => {}
            }
        }

        state.name = name.unwrap_or_default();
        state.ingredients.retain(|i| !removed.contains(i));
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_the_initial_state() {
        assert_eq!(FormState::from_urlencoded(""), FormState::default());
    }

    #[test]
    fn keeps_ingredient_order_and_raw_name() {
        let state = FormState::from_urlencoded(
            "name=+Alice+&ingredients=Banana&ingredients=Mango&ingredients=&submit=1",
        );
        assert_eq!(state.name, " Alice ");
        assert_eq!(state.ingredients, ["Banana", "Mango"]);
        assert!(state.submitted);
    }

    #[test]
    fn decodes_percent_escapes() {
        let state = FormState::from_urlencoded("name=Zo%C3%AB%20%26%20co&ingredients=Dragon%20Fruit");
        assert_eq!(state.name, "Zoë & co");
        assert_eq!(state.ingredients, ["Dragon Fruit"]);
        assert!(!state.submitted);
    }

    #[test]
    fn remove_drops_a_chosen_ingredient() {
        let state =
            FormState::from_urlencoded("ingredients=Kiwi&ingredients=Lime&remove=Kiwi");
        assert_eq!(state.ingredients, ["Lime"]);
    }
}
