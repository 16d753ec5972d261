use crate::ast;
use crate::loc;
use crate::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::types::TypeRef;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Represents a fully typechecked and immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: HashMap<String, Directive>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Returns a [`HashMap<String, Directive>`] containing all directives
    /// defined within this [`Schema`].
    ///
    /// [^note] This map includes both directives defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in directives like
    /// `@deprecated`.
    pub fn all_directives(&self) -> &HashMap<String, Directive> {
        &self.directive_defs
    }

    /// Returns a [`HashMap<String, GraphQLType>`] containing all types defined
    /// within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`] and the introspection types (`__Schema`,
    /// `__Type`, ...).
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    /// Looks up the definition of the field named `field_name` on
    /// `parent_type`.
    ///
    /// This includes the introspection meta-fields, which are not part of any
    /// type's own field list: `__typename` is available on every object,
    /// interface, and union type, while `__schema` and `__type` are only
    /// available on the Query root type.
    pub fn field_def<'s>(
        &'s self,
        parent_type: &'s GraphQLType,
        field_name: &str,
    ) -> Option<&'s Field> {
        match field_name {
            "__typename" if parent_type.is_composite_type() =>
                return Some(typename_meta_field()),
            "__schema" if std::ptr::eq(parent_type, self.query_type()) =>
                return Some(schema_meta_field()),
            "__type" if std::ptr::eq(parent_type, self.query_type()) =>
                return Some(type_meta_field()),
            _ => (),
        }
        parent_type.fields()?.get(field_name)
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Returns this [`Schema`]'s Mutation[^note] root operation type (if one was
    /// defined).
    ///
    /// [^note] It is ***strongly*** recommended that you use
    /// [`Schema::mutation_type()`] in favor of looking for an
    /// [`ObjectType`](crate::types::ObjectType) whose name is `"Mutation"`.
    /// GraphQL [defines an object type named "Mutation" as the _default_
    /// Mutation type ](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but it is also [possible to override this default
    /// ](https://spec.graphql.org/October2021/#RootOperationTypeDefinition) and
    /// use a differently-named [`ObjectType`](crate::types::ObjectType)
    /// instead.
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().map(|named_ref| {
            named_ref.deref(self)
                .expect("type is present in schema")
        })
    }

    /// Returns this [`Schema`]'s Query root operation type. See
    /// [`Schema::mutation_type()`] regarding root type names.
    pub fn query_type(&self) -> &GraphQLType {
        self.query_type.deref(self)
            .expect("type is present in schema")
    }

    /// Resolves a schema-side [`TypeAnnotation`] to a [`TypeRef`]. Returns
    /// `None` if the annotation names a type this schema doesn't define.
    pub fn resolve_type_annotation(
        &self,
        annotation: &TypeAnnotation,
    ) -> Option<TypeRef<'_>> {
        let type_ref = match annotation {
            TypeAnnotation::List(list_annot) => TypeRef::list(
                self.resolve_type_annotation(list_annot.inner_type_annotation())?,
            ),
            TypeAnnotation::Named(named_annot) =>
                TypeRef::named(named_annot.graphql_type(self)?),
        };
        Some(if annotation.nullable() {
            type_ref
        } else {
            type_ref.into_non_null()
        })
    }

    /// The root operation type for operations of the given kind, if this
    /// schema defines one.
    pub fn root_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => Some(self.query_type()),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined). See [`Schema::mutation_type()`] regarding root type names.
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().map(|named_ref| {
            named_ref.deref(self)
                .expect("type is present in schema")
        })
    }

    /// Resolves a type reference written in an executable document (e.g. a
    /// variable's declared type). Returns `None` if the innermost named type
    /// isn't defined in this schema.
    pub fn type_from_ast(&self, ast_type: &ast::query::Type) -> Option<TypeRef<'_>> {
        Some(match ast_type {
            ast::query::Type::ListType(inner) =>
                TypeRef::list(self.type_from_ast(inner)?),
            ast::query::Type::NamedType(name) =>
                TypeRef::named(self.get_type(name)?),
            ast::query::Type::NonNullType(inner) =>
                self.type_from_ast(inner)?.into_non_null(),
        })
    }
}

fn meta_field(
    name: &str,
    type_str: &str,
    params: &[(&str, &str)],
) -> Field {
    Field {
        def_location: loc::SourceLocation::GraphQLBuiltIn,
        description: None,
        name: name.to_string(),
        parameters: params.iter().map(|(param_name, param_type)| (
            param_name.to_string(),
            Parameter::builtin(param_name, TypeAnnotation::builtin(param_type)),
        )).collect::<IndexMap<_, _>>(),
        type_annotation: TypeAnnotation::builtin(type_str),
    }
}

fn schema_meta_field() -> &'static Field {
    static FIELD: OnceLock<Field> = OnceLock::new();
    FIELD.get_or_init(|| meta_field("__schema", "__Schema!", &[]))
}

fn type_meta_field() -> &'static Field {
    static FIELD: OnceLock<Field> = OnceLock::new();
    FIELD.get_or_init(|| meta_field("__type", "__Type", &[("name", "String!")]))
}

fn typename_meta_field() -> &'static Field {
    static FIELD: OnceLock<Field> = OnceLock::new();
    FIELD.get_or_init(|| meta_field("__typename", "String!", &[]))
}
