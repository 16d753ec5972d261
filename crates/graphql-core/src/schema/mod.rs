mod introspection_types;
mod schema;
mod schema_builder;
mod type_validation_error;

pub(crate) use introspection_types::INTROSPECTION_TYPES_SDL;
pub(crate) use introspection_types::INTROSPECTION_TYPES_PATH;
pub(crate) use introspection_types::is_introspection_types_path;
pub use schema::Schema;
pub use schema_builder::NamedTypeDefLocation;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
