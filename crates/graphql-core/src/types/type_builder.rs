use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::schema::is_introspection_types_path;
use crate::types::Field;
use crate::types::InputField;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Each kind of schema type has a builder that turns type definitions into
/// [`GraphQLType`](crate::types::GraphQLType)s and merges type extensions
/// into them.
///
/// Extensions may appear before the type they extend (even in a different
/// file), so extensions of not-yet-defined types are queued and merged in
/// [`TypeBuilder::finalize()`].
pub trait TypeBuilder: Sized {
    type AstTypeDef;
    type AstTypeExtension;

    fn finalize(self, types_map_builder: &mut TypesMapBuilder) -> Result<()>;

    fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        file_path: &Path,
        def: Self::AstTypeDef,
    ) -> Result<()>;

    fn visit_type_extension(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: Self::AstTypeExtension,
    ) -> Result<()>;
}

pub struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    /// Adds `fields` to `target`, rejecting duplicate and `__`-prefixed field
    /// or parameter names.
    pub fn add_fielddefs_from_ast(
        target: &mut IndexMap<String, Field>,
        file_path: &Path,
        type_name: &str,
        fields: &[ast::schema::Field],
    ) -> Result<()> {
        for field in fields {
            let field_loc = Self::def_location(file_path, field.position);

            if field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    def_location: field_loc,
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if let Some(existing_field) = target.get(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name.to_string(),
                    field_def1: existing_field.def_location.clone(),
                    field_def2: field_loc,
                });
            }

            let mut parameters = IndexMap::new();
            for input_val in &field.arguments {
                let param = Parameter::from_ast(file_path, input_val);
                if param.name.starts_with("__") {
                    return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                        def_location: param.def_location,
                        field_name: field.name.to_string(),
                        param_name: param.name,
                        type_name: type_name.to_string(),
                    });
                }
                parameters.insert(param.name.to_string(), param);
            }

            target.insert(field.name.to_string(), Field {
                description: field.description.clone(),
                name: field.name.to_string(),
                parameters,
                // graphql_parser doesn't record a position for the field's
                // type annotation itself.
                type_annotation: TypeAnnotation::from_ast_type(
                    &field_loc,
                    &field.field_type,
                ),
                def_location: field_loc,
            });
        }
        Ok(())
    }

    /// Adds `input_fields` to `target`, rejecting duplicate and
    /// `__`-prefixed names.
    pub fn add_input_fields_from_ast(
        target: &mut IndexMap<String, InputField>,
        file_path: &Path,
        type_name: &str,
        input_fields: &[ast::schema::InputValue],
    ) -> Result<()> {
        for input_field in input_fields {
            let field_loc = Self::def_location(file_path, input_field.position);

            if input_field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    def_location: field_loc,
                    field_name: input_field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if let Some(existing_field) = target.get(input_field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: input_field.name.to_string(),
                    field_def1: existing_field.def_location.clone(),
                    field_def2: field_loc,
                });
            }

            target.insert(input_field.name.to_string(), InputField {
                default_value: input_field.default_value.clone(),
                description: input_field.description.clone(),
                name: input_field.name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(
                    &field_loc,
                    &input_field.value_type,
                ),
                def_location: field_loc,
            });
        }
        Ok(())
    }

    /// Adds each of `interface_names` to `target`. Object and interface types
    /// must declare a unique list of interfaces they implement.
    ///
    /// https://spec.graphql.org/October2021/#sel-HAHZhCFFABABsCqgY
    pub fn add_interface_refs_from_ast(
        target: &mut Vec<NamedGraphQLTypeRef>,
        def_location: &loc::SourceLocation,
        type_name: &str,
        interface_names: &[String],
    ) -> Result<()> {
        for iface_name in interface_names {
            if iface_name == type_name {
                return Err(SchemaBuildError::InvalidSelfImplementingType {
                    def_location: def_location.to_owned(),
                    type_name: type_name.to_string(),
                });
            }

            if target.iter().any(|iface_ref| iface_ref.name() == iface_name) {
                return Err(
                    SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                        def_location: def_location.to_owned(),
                        duplicated_interface_name: iface_name.to_string(),
                        type_name: type_name.to_string(),
                    }
                );
            }

            target.push(NamedGraphQLTypeRef::new(
                iface_name,
                def_location.to_owned(),
            ));
        }
        Ok(())
    }

    /// Rejects user-defined type names that start with `__`. Those names are
    /// reserved for the introspection types.
    pub fn check_type_name(
        file_path: &Path,
        type_name: &str,
        def_location: &loc::SourceLocation,
    ) -> Result<()> {
        if type_name.starts_with("__") && !is_introspection_types_path(file_path) {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: def_location.to_owned(),
                type_name: type_name.to_string(),
            });
        }
        Ok(())
    }

    pub fn def_location(
        file_path: &Path,
        pos: graphql_parser::Pos,
    ) -> loc::SourceLocation {
        loc::FilePosition::from_pos(Some(file_path), pos).into()
    }
}
