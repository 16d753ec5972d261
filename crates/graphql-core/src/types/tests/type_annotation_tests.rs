use crate::loc;
use crate::types::TypeAnnotation;

#[test]
fn builtin_annotations_parse_wrappers() {
    let annot = TypeAnnotation::builtin("[__Type!]!");
    assert!(!annot.nullable());

    let list_annot = annot.as_list_annotation().unwrap();
    let inner = list_annot.inner_type_annotation();
    assert!(!inner.nullable());
    assert_eq!(inner.as_named_annotation().unwrap().graphql_type_name(), "__Type");
    assert_eq!(annot.innermost_named_type_annotation().graphql_type_name(), "__Type");
    assert_eq!(annot.def_location(), &loc::SourceLocation::GraphQLBuiltIn);
}

#[test]
fn display_matches_sdl_syntax() {
    assert_eq!(TypeAnnotation::builtin("String").to_string(), "String");
    assert_eq!(TypeAnnotation::builtin("Boolean!").to_string(), "Boolean!");
    assert_eq!(TypeAnnotation::builtin("[[Int]!]").to_string(), "[[Int]!]");
}
