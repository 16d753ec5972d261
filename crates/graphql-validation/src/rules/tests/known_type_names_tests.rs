use crate::rules::KnownTypeNames;
use crate::rules::tests::messages;
use crate::rules::unknown_type_message;
use crate::tests::pets_schema;
use crate::validate_with_rules;
use graphql_core::ast;
use graphql_core::ast::AstNode;

#[test]
fn known_type_names_are_valid() {
    let errors = messages(&KnownTypeNames, concat!(
        "query($a: Int, $b: [String!]!, $c: DogFilter) {\n",
        "  pet { ... on Dog { name } ...CatFields }\n",
        "}\n",
        "fragment CatFields on Cat { meows }\n",
    ));
    assert_eq!(errors, Vec::<String>::new());
}

#[test]
fn unknown_variable_type() {
    let schema = pets_schema();
    let doc = ast::query::parse("query($x: Foo) { dog { name } }").unwrap();

    let errors = validate_with_rules(&schema, &doc, &[&KnownTypeNames]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "Unknown type \"Foo\".");
    assert_eq!(errors[0].nodes(), &[AstNode::NamedType("Foo")]);
}

#[test]
fn unknown_types_in_wrapped_types_and_type_conditions() {
    let errors = messages(&KnownTypeNames, concat!(
        "query($a: [Foo!]!, $b: Int) {\n",
        "  pet { ... on Badger { name } ...BirdFields }\n",
        "}\n",
        "fragment BirdFields on Bird { name }\n",
    ));
    assert_eq!(errors, vec![
        unknown_type_message("Foo"),
        unknown_type_message("Badger"),
        unknown_type_message("Bird"),
    ]);
}

#[test]
fn introspection_and_builtin_types_are_known() {
    let errors = messages(
        &KnownTypeNames,
        "query($id: ID, $f: Float, $b: Boolean) { __type(name: \"Dog\") { ... on __Type { name } } }",
    );
    assert_eq!(errors, Vec::<String>::new());
}
