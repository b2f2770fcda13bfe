//! Command implementations

pub mod export;
pub mod init;
pub mod validate;

use crate::config::CollectionConfig;
use crate::core::Collection;
use crate::domain::Result;

/// Build a core [`Collection`] from its configuration entry
pub(crate) fn build_collection(config: &CollectionConfig) -> Result<Collection> {
    let mut builder = Collection::builder(&config.record_type)
        .fields(config.fields.iter().cloned())
        .content_field(&config.content_field);

    if let Some(name) = &config.filename_field {
        builder = builder.filename_field(name);
    }
    if let Some(label) = &config.label {
        builder = builder.label(label);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_collection_from_config() {
        let config = CollectionConfig {
            record_type: "ClientGoal".to_string(),
            data: "goals.json".to_string(),
            fields: vec!["name".to_string(), "summary".to_string()],
            content_field: "summary".to_string(),
            filename_field: Some("name".to_string()),
            label: None,
        };

        let collection = build_collection(&config).unwrap();
        assert_eq!(collection.label(), "client_goal");
        assert_eq!(collection.content_field(), "summary");
    }

    #[test]
    fn test_build_collection_explicit_label() {
        let config = CollectionConfig {
            record_type: "Post".to_string(),
            data: "posts.json".to_string(),
            fields: vec!["body".to_string()],
            content_field: "body".to_string(),
            filename_field: None,
            label: Some("articles".to_string()),
        };

        let collection = build_collection(&config).unwrap();
        assert_eq!(collection.label(), "articles");
    }
}
