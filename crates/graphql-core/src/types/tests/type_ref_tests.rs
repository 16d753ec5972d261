use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::TypeRef;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn wrappers_and_display() -> Result<()> {
    let schema = SchemaBuilder::from_str("type Query { dog: Dog } type Dog { name: String }")?;
    let dog = schema.get_type("Dog").unwrap();

    let type_ref = TypeRef::list(TypeRef::named(dog).into_non_null()).into_non_null();
    assert_eq!(type_ref.to_string(), "[Dog!]!");
    assert!(!type_ref.nullable());
    assert!(!type_ref.list_item().unwrap().nullable());
    assert_eq!(type_ref.named_type().name(), "Dog");
    assert!(type_ref.is_output_type());
    assert!(!type_ref.is_input_type());

    Ok(())
}

#[test]
fn input_and_output_classification() -> Result<()> {
    let schema = SchemaBuilder::from_str(concat!(
        "type Query { f(arg: In): Color }\n",
        "input In { x: Int }\n",
        "enum Color { RED }\n",
    ))?;

    let input_obj = TypeRef::named(schema.get_type("In").unwrap());
    assert!(input_obj.is_input_type());
    assert!(!input_obj.is_output_type());

    let color = TypeRef::named(schema.get_type("Color").unwrap());
    assert!(color.is_input_type());
    assert!(color.is_output_type());

    let int_type = GraphQLType::Int;
    let int = TypeRef::named(&int_type);
    assert!(int.is_input_type());
    assert!(int.named_type().is_leaf_type());

    Ok(())
}
