use crate::introspection::INTROSPECTION_QUERY;
use crate::tests::pets_schema;
use crate::validate;
use graphql_core::ast;
use graphql_core::schema::SchemaBuilder;

#[test]
fn introspection_query_parses() {
    let doc = ast::query::parse(INTROSPECTION_QUERY).unwrap();
    let op_names: Vec<_> = doc.definitions.iter()
        .filter_map(|def| match def {
            ast::query::Definition::Operation(op) => ast::query::operation_name(op),
            ast::query::Definition::Fragment(_) => None,
        })
        .collect();
    assert_eq!(op_names, vec!["IntrospectionQuery"]);
}

#[test]
fn introspection_query_is_valid_against_any_schema() {
    let doc = ast::query::parse(INTROSPECTION_QUERY).unwrap();

    let minimal_schema = SchemaBuilder::from_str("type Query { ok: Boolean }").unwrap();
    assert_eq!(validate(&minimal_schema, &doc), vec![]);

    let pets_schema = pets_schema();
    assert_eq!(validate(&pets_schema, &doc), vec![]);
}
