mod fields_on_correct_type_tests;
mod known_fragment_names_tests;
mod known_type_names_tests;
mod no_undefined_variables_tests;
mod unique_argument_names_tests;

use crate::ValidationRule;
use crate::tests::pets_schema;
use crate::validate_with_rules;
use graphql_core::ast;

/// Validates `query` against the pets schema with only `rule`, returning
/// the error messages.
fn messages(rule: &dyn ValidationRule, query: &str) -> Vec<String> {
    let schema = pets_schema();
    let doc = ast::query::parse(query).unwrap();
    validate_with_rules(&schema, &doc, &[rule])
        .iter()
        .map(|error| error.message().to_string())
        .collect()
}
