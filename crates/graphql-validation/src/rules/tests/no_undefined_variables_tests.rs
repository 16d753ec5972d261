use crate::rules::NoUndefinedVariables;
use crate::rules::tests::messages;
use crate::rules::undefined_var_by_op_message;
use crate::rules::undefined_var_message;
use crate::tests::pets_schema;
use crate::validate_with_rules;
use graphql_core::ast;
use graphql_core::ast::AstNode;

#[test]
fn defined_variables_are_valid() {
    let errors = messages(&NoUndefinedVariables, concat!(
        "query Q($id: ID!, $surname: Boolean, $f: DogFilter) {\n",
        "  human(id: $id) { name }\n",
        "  findDog(filter: $f) { ...DogFields }\n",
        "}\n",
        "fragment DogFields on Dog { name(surname: $surname) }\n",
    ));
    assert_eq!(errors, Vec::<String>::new());
}

#[test]
fn undefined_variable_in_operation() {
    let errors = messages(
        &NoUndefinedVariables,
        "query Q($a: ID) { human(id: $b) { name(surname: $c) } }",
    );
    assert_eq!(errors, vec![
        undefined_var_message("b"),
        undefined_var_message("c"),
    ]);
}

#[test]
fn variables_nested_in_values() {
    let errors = messages(
        &NoUndefinedVariables,
        "query($name: String) { findDog(filter: {name: $name, commands: [$cmd]}) { name } }",
    );
    assert_eq!(errors, vec![undefined_var_message("cmd")]);
}

#[test]
fn undefined_variable_in_fragment_names_operation() {
    let schema = pets_schema();
    let doc = ast::query::parse(concat!(
        "query Q { dog { ...DogFields } }\n",
        "fragment DogFields on Dog { name(surname: $s) }\n",
    )).unwrap();

    let errors = validate_with_rules(&schema, &doc, &[&NoUndefinedVariables]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "Variable \"$s\" is not defined by operation \"Q\".");
    assert!(matches!(errors[0].nodes(), [
        AstNode::Variable("s"),
        AstNode::OperationDefinition(_),
    ]));
}

#[test]
fn anonymous_operation_through_fragment() {
    let errors = messages(&NoUndefinedVariables, concat!(
        "{ dog { ...DogFields } }\n",
        "fragment DogFields on Dog { name(surname: $s) }\n",
    ));
    assert_eq!(errors, vec![undefined_var_message("s")]);
}

#[test]
fn fragment_checked_against_each_operation() {
    let errors = messages(&NoUndefinedVariables, concat!(
        "query WithVar($s: Boolean) { dog { ...DogFields } }\n",
        "query WithoutVar { dog { ...DogFields } }\n",
        "fragment DogFields on Dog { name(surname: $s) }\n",
    ));
    assert_eq!(errors, vec![undefined_var_by_op_message("s", "WithoutVar")]);
}

#[test]
fn fragment_visited_once_per_operation() {
    let errors = messages(&NoUndefinedVariables, concat!(
        "query Q { dog { ...DogFields } pet { ...DogFields } }\n",
        "fragment DogFields on Pet { name(surname: $s) }\n",
    ));
    assert_eq!(errors, vec![undefined_var_by_op_message("s", "Q")]);
}

#[test]
fn unused_fragments_are_not_checked() {
    let errors = messages(&NoUndefinedVariables, concat!(
        "query Q { dog { name } }\n",
        "fragment Unused on Dog { name(surname: $s) }\n",
    ));
    assert_eq!(errors, Vec::<String>::new());
}

#[test]
fn repeated_spread_directives_are_checked() {
    let errors = messages(&NoUndefinedVariables, concat!(
        "query Q { dog { ...DogFields ...DogFields @tag(name: $u) } }\n",
        "fragment DogFields on Dog { name }\n",
    ));
    assert_eq!(errors, vec![undefined_var_message("u")]);
}

#[test]
fn repeated_spread_does_not_recheck_fragment_body() {
    let errors = messages(&NoUndefinedVariables, concat!(
        "query Q { dog { ...DogFields @tag(name: $a) ...DogFields @tag(name: $b) } }\n",
        "fragment DogFields on Dog { name(surname: $s) }\n",
    ));
    assert_eq!(errors, vec![
        undefined_var_by_op_message("s", "Q"),
        undefined_var_message("a"),
        undefined_var_message("b"),
    ]);
}
