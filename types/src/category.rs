use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Backend-assigned category identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// An inventory category as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<Timestamp>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<Timestamp>,
}

/// Payload of a create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFields {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The form's uncommitted copy of a category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl CategoryDraft {
    pub fn to_fields(&self) -> CategoryFields {
        CategoryFields {
            name: self.name.clone(),
            description: Some(self.description.clone()),
        }
    }
}

impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_json_parses_with_optional_fields() {
        let category: Category =
            serde_json::from_str(r#"{"id":"42","name":"Tools"}"#).unwrap();

        assert_eq!(category.id.as_str(), "42");
        assert_eq!(category.description, None);
        assert_eq!(category.created_at, None);
    }

    #[test]
    fn draft_from_category_fills_missing_description() {
        let category = Category {
            id: "1".into(),
            name: "Books".into(),
            description: None,
            created_at: None,
            updated_at: None,
        };

        let draft = CategoryDraft::from(&category);
        assert_eq!(draft.name, "Books");
        assert_eq!(draft.description, "");
    }

    #[test]
    fn empty_description_is_sent_as_typed() {
        let draft = CategoryDraft {
            name: "Electronics".into(),
            description: String::new(),
        };

        let json = serde_json::to_value(draft.to_fields()).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Electronics", "description": ""}));
    }

    #[test]
    fn absent_description_is_omitted() {
        let fields = CategoryFields {
            name: "Garden".into(),
            description: None,
        };

        let json = serde_json::to_value(fields).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Garden"}));
    }
}
