use std::collections::BTreeMap;

use crate::category::CategoryDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Description,
}

/// Field-scoped validation messages. Empty means valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validation {
    pub field_errors: BTreeMap<Field, String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    fn require(&mut self, field: Field, value: &str, message: &str) {
        if value.is_empty() {
            self.field_errors.insert(field, message.to_string());
        }
    }
}

pub fn validate(draft: &CategoryDraft) -> Validation {
    let mut validation = Validation::default();
    validation.require(Field::Name, &draft.name, "Name is required");
    validation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, description: &str) -> CategoryDraft {
        CategoryDraft {
            name: name.into(),
            description: description.into(),
        }
    }

    #[test]
    fn empty_name_is_required() {
        let validation = validate(&draft("", "anything"));

        assert!(!validation.is_valid());
        assert_eq!(validation.error(Field::Name), Some("Name is required"));
        assert_eq!(validation.error(Field::Description), None);
    }

    #[test]
    fn single_character_name_is_enough() {
        assert!(validate(&draft("x", "")).is_valid());
    }

    #[test]
    fn whitespace_name_passes_minimum_length() {
        // Only length is checked; the backend owns any further rules.
        assert!(validate(&draft(" ", "")).is_valid());
    }
}
