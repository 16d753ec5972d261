use crate::rules::FieldsOnCorrectType;
use crate::rules::tests::messages;
use crate::rules::undefined_field_message;

#[test]
fn defined_fields_are_valid() {
    let errors = messages(&FieldsOnCorrectType, concat!(
        "{ dog { name barks owner { name pets { name } } } pet { name } }\n",
        "fragment CatFields on Cat { meows name }\n",
    ));
    assert_eq!(errors, Vec::<String>::new());
}

#[test]
fn undefined_fields() {
    let errors = messages(
        &FieldsOnCorrectType,
        "{ dog { meows name } pet { barks } cat }",
    );
    assert_eq!(errors, vec![
        undefined_field_message("meows", "Dog"),
        undefined_field_message("barks", "Pet"),
        undefined_field_message("cat", "Query"),
    ]);
}

#[test]
fn only_typename_on_unions() {
    let errors = messages(
        &FieldsOnCorrectType,
        "{ animals { __typename name ... on Dog { name } } }",
    );
    assert_eq!(errors, vec![undefined_field_message("name", "Animal")]);
}

#[test]
fn meta_fields() {
    let errors = messages(
        &FieldsOnCorrectType,
        "{ __typename __schema { queryType { name } } __type(name: \"Dog\") { kind } dog { __typename } }",
    );
    assert_eq!(errors, Vec::<String>::new());

    let errors = messages(&FieldsOnCorrectType, "{ dog { __schema { types { name } } } }");
    assert_eq!(errors, vec![undefined_field_message("__schema", "Dog")]);
}

#[test]
fn errors_skip_the_field_selection_set() {
    let errors = messages(&FieldsOnCorrectType, "{ unknown { alsoUnknown } }");
    assert_eq!(errors, vec![undefined_field_message("unknown", "Query")]);
}

#[test]
fn fields_under_unknown_types_are_not_checked() {
    let errors = messages(
        &FieldsOnCorrectType,
        "fragment F on Nope { anything } { pet { ... on Nope { anything } } }",
    );
    assert_eq!(errors, Vec::<String>::new());
}
