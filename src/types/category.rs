use std::fmt;

/// Identifier of a category record.
///
/// Ids are compared by their string form: two ids are equal iff their string
/// forms are equal. Numeric ids from the data source coerce to the same
/// representation as their decimal string, so `CategoryId::from(7)` and
/// `CategoryId::from("7")` are the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(String);

impl CategoryId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(v: &str) -> Self {
        CategoryId(v.to_owned())
    }
}

impl From<String> for CategoryId {
    fn from(v: String) -> Self {
        CategoryId(v)
    }
}

impl From<i64> for CategoryId {
    fn from(v: i64) -> Self {
        CategoryId(v.to_string())
    }
}

impl From<u64> for CategoryId {
    fn from(v: u64) -> Self {
        CategoryId(v.to_string())
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CategoryId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Server payloads carry ids as either JSON strings or numbers;
        // both collapse to the string form here.
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => CategoryId(s),
            Raw::Number(n) => CategoryId(n.to_string()),
        })
    }
}

/// One category as supplied by the server, immutable for the duration of a
/// page view. `parent_id` is `None` for top-level categories.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub parent_id: Option<CategoryId>,
}

impl CategoryRecord {
    /// A top-level category.
    pub fn root(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
        }
    }

    /// A category nested under `parent`.
    pub fn child(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        parent: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: Some(parent.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_coerce_equal() {
        assert_eq!(CategoryId::from(7_i64), CategoryId::from("7"));
        assert_eq!(CategoryId::from(7_u64), CategoryId::from("7".to_owned()));
    }

    #[test]
    fn distinct_string_forms_are_distinct_ids() {
        assert_ne!(CategoryId::from("07"), CategoryId::from(7_i64));
    }

    #[test]
    fn display_prints_raw_id() {
        assert_eq!(CategoryId::from(42_i64).to_string(), "42");
        assert_eq!(CategoryId::from("abc").to_string(), "abc");
    }

    #[test]
    fn root_has_no_parent() {
        let record = CategoryRecord::root(1_i64, "Books");
        assert_eq!(record.id, CategoryId::from("1"));
        assert_eq!(record.name, "Books");
        assert!(record.parent_id.is_none());
    }

    #[test]
    fn child_links_to_parent() {
        let record = CategoryRecord::child(2_i64, "Fiction", 1_i64);
        assert_eq!(record.parent_id, Some(CategoryId::from("1")));
    }
}
