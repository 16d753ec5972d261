use crate::rules::KnownFragmentNames;
use crate::rules::tests::messages;
use crate::rules::unknown_fragment_message;

#[test]
fn defined_fragments_are_valid() {
    let errors = messages(&KnownFragmentNames, concat!(
        "{ dog { ...DogFields } }\n",
        "fragment DogFields on Dog { name ...OwnerFields }\n",
        "fragment OwnerFields on Dog { owner { name } }\n",
    ));
    assert_eq!(errors, Vec::<String>::new());
}

#[test]
fn undefined_fragments() {
    let errors = messages(&KnownFragmentNames, concat!(
        "{ dog { ...Missing ...DogFields } }\n",
        "fragment DogFields on Dog { name ...AlsoMissing }\n",
    ));
    assert_eq!(errors, vec![
        unknown_fragment_message("Missing"),
        unknown_fragment_message("AlsoMissing"),
    ]);
}

#[test]
fn operation_names_are_not_fragments() {
    let errors = messages(
        &KnownFragmentNames,
        "query DogQuery { dog { ...DogQuery } }",
    );
    assert_eq!(errors, vec!["Unknown fragment \"DogQuery\".".to_string()]);
}
