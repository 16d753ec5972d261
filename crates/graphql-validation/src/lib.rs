//! Semantic validation of GraphQL executable documents.
//!
//! A document that parses is not necessarily a document that can be executed
//! against a given [`Schema`](graphql_core::schema::Schema): it may select
//! fields that don't exist, declare variables of output types, pass the same
//! argument twice, and so on. [`validate()`] runs a list of
//! [`ValidationRule`]s over a parsed document and collects every
//! [`GraphQLError`] they report.
//!
//! ```
//! use graphql_core::ast;
//! use graphql_core::schema::SchemaBuilder;
//!
//! let schema = SchemaBuilder::from_str("type Query { hello: String }")
//!     .unwrap();
//! let doc = ast::query::parse("query($x: Query) { hello }").unwrap();
//!
//! let errors = graphql_validation::validate(&schema, &doc);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(
//!     errors[0].message(),
//!     "Variable \"$x\" cannot be non-input type \"Query\".",
//! );
//! ```

mod graphql_error;
pub mod introspection;
pub mod rules;
mod type_info;
mod validate;
mod validation_context;
mod visitor;

pub use graphql_error::GraphQLError;
pub use type_info::TypeInfo;
pub use validate::validate;
pub use validate::validate_with_rules;
pub use validation_context::ValidationContext;
pub use visitor::ValidationRule;
pub use visitor::VisitFlow;
pub use visitor::Visitor;

#[cfg(test)]
mod tests;
