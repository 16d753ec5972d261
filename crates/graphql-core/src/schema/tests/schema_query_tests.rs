use crate::ast;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn pets_schema() -> Result<Schema> {
    SchemaBuilder::from_str(concat!(
        "type Query { dog: Dog pet: Pet animals: [Animal] }\n",
        "interface Pet { name: String }\n",
        "type Dog implements Pet { name: String barks: Boolean }\n",
        "type Cat implements Pet { name: String }\n",
        "union Animal = Dog | Cat\n",
        "input Filter { name: String }\n",
    ))
}

fn first_var_type(query: &str) -> ast::query::Type {
    let doc = ast::query::parse(query).unwrap();
    match &doc.definitions[0] {
        ast::query::Definition::Operation(ast::query::OperationDefinition::Query(q)) =>
            q.variable_definitions[0].var_type.clone(),
        _ => panic!("expected a query"),
    }
}

#[test]
fn field_def_on_object_and_interface() -> Result<()> {
    let schema = pets_schema()?;
    let dog = schema.get_type("Dog").unwrap();
    let pet = schema.get_type("Pet").unwrap();

    assert_eq!(schema.field_def(dog, "barks").unwrap().name(), "barks");
    assert_eq!(schema.field_def(pet, "name").unwrap().name(), "name");
    assert!(schema.field_def(pet, "barks").is_none());

    Ok(())
}

#[test]
fn typename_meta_field_on_every_composite_type() -> Result<()> {
    let schema = pets_schema()?;

    for type_name in ["Query", "Dog", "Pet", "Animal"] {
        let type_ = schema.get_type(type_name).unwrap();
        let field = schema.field_def(type_, "__typename").unwrap();
        assert_eq!(field.type_annotation().to_string(), "String!");
    }

    let filter = schema.get_type("Filter").unwrap();
    assert!(schema.field_def(filter, "__typename").is_none());

    // Unions have no fields of their own.
    let animal = schema.get_type("Animal").unwrap();
    assert!(schema.field_def(animal, "name").is_none());

    Ok(())
}

#[test]
fn schema_and_type_meta_fields_only_on_query_root() -> Result<()> {
    let schema = pets_schema()?;
    let query = schema.query_type();
    let dog = schema.get_type("Dog").unwrap();

    let schema_field = schema.field_def(query, "__schema").unwrap();
    assert_eq!(schema_field.type_annotation().to_string(), "__Schema!");

    let type_field = schema.field_def(query, "__type").unwrap();
    assert_eq!(type_field.type_annotation().to_string(), "__Type");
    assert!(type_field.parameter("name").unwrap().is_required());

    assert!(schema.field_def(dog, "__schema").is_none());
    assert!(schema.field_def(dog, "__type").is_none());

    Ok(())
}

#[test]
fn type_from_ast_resolves_wrappers() -> Result<()> {
    let schema = pets_schema()?;

    let type_ref = schema.type_from_ast(&first_var_type("query($f: [Filter!]!) { dog { name } }")).unwrap();
    assert_eq!(type_ref.to_string(), "[Filter!]!");
    assert!(type_ref.is_input_type());

    assert!(schema.type_from_ast(&first_var_type("query($f: [Nope]) { dog { name } }")).is_none());

    Ok(())
}

#[test]
fn introspection_field_types_resolve() -> Result<()> {
    let schema = pets_schema()?;
    let type_type = schema.get_type("__Type").unwrap();
    let fields_field = schema.field_def(type_type, "fields").unwrap();

    let type_ref = schema.resolve_type_annotation(fields_field.type_annotation()).unwrap();
    assert_eq!(type_ref.to_string(), "[__Field!]");
    assert_eq!(type_ref.named_type().name(), "__Field");
    assert!(fields_field.parameter("includeDeprecated").is_some());

    Ok(())
}
