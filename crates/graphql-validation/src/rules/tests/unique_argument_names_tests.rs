use crate::rules::UniqueArgumentNames;
use crate::rules::duplicate_arg_message;
use crate::rules::tests::messages;
use crate::tests::pets_schema;
use crate::validate_with_rules;
use graphql_core::ast;
use graphql_core::ast::AstNode;

#[test]
fn distinct_arguments_are_valid() {
    let errors = messages(
        &UniqueArgumentNames,
        "{ dog { name(surname: true) @tag(name: \"a\") doesKnowCommand(dogCommand: SIT) } }",
    );
    assert_eq!(errors, Vec::<String>::new());
}

#[test]
fn same_argument_on_different_fields_is_valid() {
    let errors = messages(
        &UniqueArgumentNames,
        "{ dog { name(surname: true) } pet { name(surname: false) } }",
    );
    assert_eq!(errors, Vec::<String>::new());
}

#[test]
fn field_and_directive_arguments_are_separate_scopes() {
    let errors = messages(
        &UniqueArgumentNames,
        "{ dog { name(name: true) @tag(name: \"a\") } }",
    );
    assert_eq!(errors, Vec::<String>::new());
}

#[test]
fn duplicate_field_argument() {
    let schema = pets_schema();
    let doc = ast::query::parse("{ f(a: 1, b: 2, a: 3) }").unwrap();

    let errors = validate_with_rules(&schema, &doc, &[&UniqueArgumentNames]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "There can be only one argument named \"a\".");

    let nodes = errors[0].nodes();
    assert_eq!(nodes.len(), 2);
    assert!(matches!(nodes[0], AstNode::Argument((name, _)) if name == "a"));
    assert!(matches!(nodes[1], AstNode::Argument((name, _)) if name == "a"));
    assert_ne!(nodes[0], nodes[1]);
}

#[test]
fn duplicate_directive_argument() {
    let errors = messages(
        &UniqueArgumentNames,
        "{ dog @tag(name: \"a\", name: \"b\") { name } }",
    );
    assert_eq!(errors, vec![duplicate_arg_message("name")]);
}

#[test]
fn each_repeat_is_reported() {
    let errors = messages(
        &UniqueArgumentNames,
        "{ dog { name(surname: true, surname: false, surname: true) } }",
    );
    assert_eq!(errors, vec![
        duplicate_arg_message("surname"),
        duplicate_arg_message("surname"),
    ]);
}
