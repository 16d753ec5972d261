use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::OperationKind;
use crate::schema::INTROSPECTION_TYPES_PATH;
use crate::schema::INTROSPECTION_TYPES_SDL;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::Directive;
use crate::types::EnumTypeBuilder;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeBuilder;
use crate::types::InterfaceTypeBuilder;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectTypeBuilder;
use crate::types::Parameter;
use crate::types::ScalarTypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::UnionTypeBuilder;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn builtin_directive_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| {
        HashSet::from([
            "skip",
            "include",
            "deprecated",
            "specifiedBy",
        ])
    })
}

/// Utility for building a [`Schema`] from one or more SDL sources.
///
/// ```
/// use graphql_core::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { hello: String }")?
///     .build()?;
///
/// assert_eq!(schema.query_type().name(), "Query");
/// # Ok::<(), graphql_core::schema::SchemaBuildError>(())
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: HashMap<String, Directive>,
    enum_builder: EnumTypeBuilder,
    inputobject_builder: InputObjectTypeBuilder,
    interface_builder: InterfaceTypeBuilder,
    query_type: Option<NamedTypeDefLocation>,
    mutation_type: Option<NamedTypeDefLocation>,
    object_builder: ObjectTypeBuilder,
    scalar_builder: ScalarTypeBuilder,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types_map_builder: TypesMapBuilder,
    union_builder: UnionTypeBuilder,
}
impl SchemaBuilder {
    pub fn build(self) -> Result<Schema> {
        let mut builder = self.load_str(
            Some(PathBuf::from(INTROSPECTION_TYPES_PATH)),
            INTROSPECTION_TYPES_SDL,
        )?;
        builder.inject_missing_builtin_directives();

        builder.enum_builder.finalize(&mut builder.types_map_builder)?;
        builder.inputobject_builder.finalize(&mut builder.types_map_builder)?;
        builder.interface_builder.finalize(&mut builder.types_map_builder)?;
        builder.object_builder.finalize(&mut builder.types_map_builder)?;
        builder.scalar_builder.finalize(&mut builder.types_map_builder)?;
        builder.union_builder.finalize(&mut builder.types_map_builder)?;

        let types = builder.types_map_builder.into_types_map()?;

        let query_type = Self::resolve_root_type(
            &types,
            OperationKind::Query,
            builder.query_type,
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = Self::resolve_root_type(
            &types,
            OperationKind::Mutation,
            builder.mutation_type,
        )?;
        let subscription_type = Self::resolve_root_type(
            &types,
            OperationKind::Subscription,
            builder.subscription_type,
        )?;

        Ok(Schema {
            directive_defs: builder.directive_defs,
            query_type,
            mutation_type,
            subscription_type,
            types,
        })
    }

    /// Parses and builds a [`Schema`] from a single SDL string.
    pub fn from_str(content: &str) -> Result<Schema> {
        Self::new().load_str(None, content)?.build()
    }

    pub fn new() -> Self {
        Self {
            directive_defs: HashMap::new(),
            enum_builder: EnumTypeBuilder::new(),
            inputobject_builder: InputObjectTypeBuilder::new(),
            interface_builder: InterfaceTypeBuilder::new(),
            query_type: None,
            mutation_type: None,
            object_builder: ObjectTypeBuilder::new(),
            scalar_builder: ScalarTypeBuilder::new(),
            str_load_counter: 0,
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
            union_builder: UnionTypeBuilder::new(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    /// Parses `content` as SDL and adds its definitions to the schema being
    /// built. Content that didn't come from a file is attributed to a
    /// `str://<n>` pseudo-path, numbered in load order.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn inject_missing_builtin_directives(&mut self) {
        for directive in [
            Directive::Deprecated,
            Directive::Include,
            Directive::Skip,
            Directive::SpecifiedBy,
        ] {
            self.directive_defs
                .entry(directive.name().to_string())
                .or_insert(directive);
        }
    }

    /// Picks the root operation type for `kind`: the type named in a `schema`
    /// block if there was one, otherwise an object type with the default name
    /// (`Query`, `Mutation`, or `Subscription`) if one is defined.
    fn resolve_root_type(
        types: &HashMap<String, GraphQLType>,
        kind: OperationKind,
        declared: Option<NamedTypeDefLocation>,
    ) -> Result<Option<NamedGraphQLTypeRef>> {
        if let Some(declared) = declared {
            return match types.get(declared.type_name.as_str()) {
                Some(GraphQLType::Object(_)) => Ok(Some(NamedGraphQLTypeRef::new(
                    declared.type_name,
                    declared.def_location,
                ))),
                _ => Err(SchemaBuildError::InvalidRootOperationType {
                    location: declared.def_location,
                    operation: kind,
                    type_name: declared.type_name,
                }),
            };
        }

        let default_name = match kind {
            OperationKind::Mutation => "Mutation",
            OperationKind::Query => "Query",
            OperationKind::Subscription => "Subscription",
        };
        Ok(match types.get(default_name) {
            Some(GraphQLType::Object(obj_type)) => Some(NamedGraphQLTypeRef::new(
                default_name,
                obj_type.def_location().clone(),
            )),
            _ => None,
        })
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(file_path, type_ext),
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_location: loc::SourceLocation = loc::FilePosition::from_pos(
            Some(file_path),
            def.position,
        ).into();

        if builtin_directive_names().contains(def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
                location: def_location,
            });
        }

        if def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location,
                directive_name: def.name.to_string(),
            });
        }

        if let Some(existing_directive) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.clone(),
                location1: existing_directive.def_location().clone(),
                location2: def_location,
            });
        }

        self.directive_defs.insert(def.name.to_string(), Directive::Custom {
            def_location,
            description: def.description.to_owned(),
            locations: def.locations.clone(),
            name: def.name.to_string(),
            params: def.arguments.iter().map(|input_val| (
                input_val.name.to_string(),
                Parameter::from_ast(
                    file_path,
                    input_val,
                ),
            )).collect()
        });

        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        for (kind, type_name) in [
            (OperationKind::Query, &schema_def.query),
            (OperationKind::Mutation, &schema_def.mutation),
            (OperationKind::Subscription, &schema_def.subscription),
        ] {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name.to_string(),
                file_path,
                schema_def.position,
            );
            let root_slot = match kind {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = root_slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: kind,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *root_slot = Some(typedef_loc);
        }

        // From the October 2021 GraphQL release:
        //
        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let root_types = [
            (OperationKind::Query, &self.query_type),
            (OperationKind::Mutation, &self.mutation_type),
            (OperationKind::Subscription, &self.subscription_type),
        ];
        for (i, (kind1, type1)) in root_types.iter().enumerate() {
            for (kind2, type2) in &root_types[i + 1..] {
                let (Some(type1), Some(type2)) = (type1, type2) else {
                    continue;
                };
                if type1.type_name == type2.type_name {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        reused_type_name: type1.type_name.to_owned(),
                        operation1: *kind1,
                        operation1_loc: type1.def_location.to_owned(),
                        operation2: *kind2,
                        operation2_loc: type2.def_location.to_owned(),
                    });
                }
            }
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) =>
                self.enum_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    enum_def,
                ),

            TypeDefinition::InputObject(inputobj_def) =>
                self.inputobject_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    inputobj_def,
                ),

            TypeDefinition::Interface(iface_def) =>
                self.interface_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    iface_def,
                ),

            TypeDefinition::Scalar(scalar_def) =>
                self.scalar_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    scalar_def,
                ),

            TypeDefinition::Object(obj_def) =>
                self.object_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    obj_def,
                ),

            TypeDefinition::Union(union_def) =>
                self.union_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    union_def,
                ),
        }
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        match ext {
            TypeExtension::Enum(enum_ext) =>
                self.enum_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    enum_ext,
                ),

            TypeExtension::InputObject(inputobj_ext) =>
                self.inputobject_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    inputobj_ext,
                ),

            TypeExtension::Interface(iface_ext) =>
                self.interface_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    iface_ext,
                ),

            TypeExtension::Object(obj_ext) =>
                self.object_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    obj_ext,
                ),

            TypeExtension::Scalar(scalar_ext) =>
                self.scalar_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    scalar_ext,
                ),

            TypeExtension::Union(union_ext) =>
                self.union_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    union_ext,
                ),
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("The `@{directive_name}` directive is defined more than once")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("The `{enum_name}` enum defines the `{value_name}` value more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_def1: loc::SourceLocation,
        value_def2: loc::SourceLocation,
        value_name: String,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SourceLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("The {} root operation type is declared more than once", operation.name())]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` union lists `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        member_name: String,
        member1: loc::SourceLocation,
        member2: loc::SourceLocation,
        type_name: String,
    },

    #[error("The built-in `{type_name}` scalar can not be extended")]
    ExtensionOfBuiltinType {
        extension_loc: loc::SourceLocation,
        type_name: String,
    },

    #[error("Attempted to extend `{type_name}`, but no type with that name is defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::SourceLocation,
    },

    #[error(
        "Attempted to extend `{type_name}` with {extension_kind} extension, \
        but `{type_name}` is {type_kind} type"
    )]
    InvalidExtensionType {
        extension_kind: &'static str,
        extension_loc: loc::SourceLocation,
        type_kind: &'static str,
        type_name: String,
    },

    #[error("Custom directive names must not start with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SourceLocation,
        directive_name: String,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error(
        "Parameter names must not start with `__`: `{param_name}` on \
        `{type_name}.{field_name}`"
    )]
    InvalidDunderPrefixedParamName {
        def_location: loc::SourceLocation,
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The {} root operation type is declared as `{type_name}`, but \
        `{type_name}` is not a defined object type",
        operation.name(),
    )]
    InvalidRootOperationType {
        location: loc::SourceLocation,
        operation: OperationKind,
        type_name: String,
    },

    #[error(
        "Types may not declare that they implement themselves: The \
        `{type_name}` type does just that"
    )]
    InvalidSelfImplementingType {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {} and {} root operations are both defined with the \
        `{reused_type_name}` type, but this is not allowed in GraphQL. All \
        root operations must be defined with different types.",
        operation1.name(),
        operation2.name(),
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationKind,
        operation1_loc: loc::SourceLocation,
        operation2: OperationKind,
        operation2_loc: loc::SourceLocation,
    },

    #[error("Error parsing schema source `{}`: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Attempted to redefine the built-in `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}

/// Represents the file location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: &Path,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(Some(file), pos).into(),
            type_name,
        }
    }
}
