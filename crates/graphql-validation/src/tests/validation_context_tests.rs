use crate::ValidationContext;
use crate::tests::pets_schema;
use graphql_core::ast;

#[test]
fn fragment_lookup_by_name() {
    let schema = pets_schema();
    let doc = ast::query::parse(concat!(
        "{ dog { ...DogName } }\n",
        "fragment DogName on Dog { name }\n",
        "fragment CatName on Cat { name }\n",
    )).unwrap();
    let ctx = ValidationContext::new(&schema, &doc);

    let dog_name = ctx.fragment("DogName").unwrap();
    assert_eq!(dog_name.name, "DogName");
    assert_eq!(ctx.fragment("CatName").unwrap().name, "CatName");
    assert!(ctx.fragment("Unknown").is_none());

    // Repeated lookups return the same definition.
    assert!(std::ptr::eq(dog_name, ctx.fragment("DogName").unwrap()));
}

#[test]
fn last_fragment_definition_wins() {
    let schema = pets_schema();
    let doc = ast::query::parse(concat!(
        "fragment F on Dog { name }\n",
        "fragment F on Cat { meows }\n",
    )).unwrap();
    let ctx = ValidationContext::new(&schema, &doc);

    let ast::query::TypeCondition::On(type_name) = &ctx.fragment("F").unwrap().type_condition;
    assert_eq!(type_name, "Cat");
}

#[test]
fn operations_are_not_fragments() {
    let schema = pets_schema();
    let doc = ast::query::parse("query F { dog { name } }").unwrap();
    let ctx = ValidationContext::new(&schema, &doc);

    assert!(ctx.fragment("F").is_none());
}

#[test]
fn fresh_context_has_no_type_information() {
    let schema = pets_schema();
    let doc = ast::query::parse("{ dog { name } }").unwrap();
    let ctx = ValidationContext::new(&schema, &doc);

    assert!(std::ptr::eq(ctx.schema(), &schema));
    assert!(std::ptr::eq(ctx.document(), &doc));
    assert!(ctx.type_info().is_balanced());
    assert!(ctx.argument().is_none());
    assert!(ctx.directive().is_none());
    assert!(ctx.field_def().is_none());
    assert!(ctx.input_type().is_none());
    assert!(ctx.parent_type().is_none());
    assert!(ctx.type_().is_none());
}
