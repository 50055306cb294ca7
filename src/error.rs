use std::path::PathBuf;

use thiserror::Error;

use crate::models::CollectionType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Lists every offending field, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", join_field_errors(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|e| e.field)
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("failed to read seed file at '{path}': {message}")]
    Io { path: PathBuf, message: String },

    #[error("invalid seed JSON: {message}")]
    Parse { message: String },

    #[error("invalid alumni CSV at row {row}: {message}")]
    Csv { row: usize, message: String },

    #[error("duplicate id {id} in {collection} seed")]
    DuplicateId { collection: CollectionType, id: u32 },

    #[error("campaign {id} has a non-positive goal")]
    NonPositiveGoal { id: u32 },

    #[error("{collection} record {id} has {field} {value}, expected 0-100")]
    OutOfRange {
        collection: CollectionType,
        id: u32,
        field: &'static str,
        value: u8,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortalError {
    /// A collection name that is not alumni, jobs, events or campaigns.
    #[error("unknown collection '{0}', expected one of alumni, jobs, events, campaigns")]
    UnknownCollection(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("no job id left after {last}")]
    JobIdsExhausted { last: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_field() {
        let err = ValidationError {
            errors: vec![
                FieldError {
                    field: "title",
                    message: "Title is required".to_string(),
                },
                FieldError {
                    field: "company",
                    message: "Company is required".to_string(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "validation failed: title: Title is required; company: Company is required"
        );
        assert_eq!(err.message_for("company"), Some("Company is required"));
        assert_eq!(err.message_for("location"), None);
    }

    #[test]
    fn seed_errors_name_the_collection() {
        let err = SeedError::DuplicateId {
            collection: CollectionType::Events,
            id: 7,
        };
        assert_eq!(err.to_string(), "duplicate id 7 in events seed");
    }

    #[test]
    fn out_of_range_names_field_and_value() {
        let err = SeedError::OutOfRange {
            collection: CollectionType::Campaigns,
            id: 2,
            field: "progress",
            value: 250,
        };
        assert_eq!(
            err.to_string(),
            "campaigns record 2 has progress 250, expected 0-100"
        );
    }
}
