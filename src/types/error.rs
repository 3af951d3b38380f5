use thiserror::Error;

use super::category::CategoryId;

#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error("duplicate category id '{id}'")]
    DuplicateId { id: CategoryId },

    #[error("malformed hierarchy: cycle detected: {}", path.iter().map(ToString::to_string).collect::<Vec<_>>().join(" -> "))]
    Cycle { path: Vec<CategoryId> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_id_message() {
        let err = HierarchyError::DuplicateId {
            id: CategoryId::from("9"),
        };
        assert_eq!(err.to_string(), "duplicate category id '9'");
    }

    #[test]
    fn cycle_message() {
        let err = HierarchyError::Cycle {
            path: vec![
                CategoryId::from("1"),
                CategoryId::from("2"),
                CategoryId::from("1"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "malformed hierarchy: cycle detected: 1 -> 2 -> 1"
        );
    }
}
