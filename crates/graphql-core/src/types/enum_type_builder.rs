use crate::ast;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::GraphQLType;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct EnumTypeBuilder {
    extensions: Vec<(PathBuf, ast::schema::EnumTypeExtension)>,
}
impl EnumTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn add_values(
        values: &mut IndexMap<String, EnumValue>,
        enum_name: &str,
        file_path: &Path,
        ast_values: &[ast::schema::EnumValue],
    ) -> Result<()> {
        for ast_value in ast_values {
            let value_loc = TypeBuilderHelpers::def_location(
                file_path,
                ast_value.position,
            );
            if let Some(existing_value) = values.get(ast_value.name.as_str()) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: enum_name.to_string(),
                    value_def1: existing_value.def_location.clone(),
                    value_def2: value_loc,
                    value_name: ast_value.name.to_string(),
                });
            }
            values.insert(ast_value.name.to_string(), EnumValue {
                def_location: value_loc,
                description: ast_value.description.clone(),
                name: ast_value.name.to_string(),
            });
        }
        Ok(())
    }
}

#[inherent]
impl TypeBuilder for EnumTypeBuilder {
    type AstTypeDef = ast::schema::EnumType;
    type AstTypeExtension = ast::schema::EnumTypeExtension;

    pub(crate) fn finalize(self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions {
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(GraphQLType::Enum(enum_type)) => Self::add_values(
                    &mut enum_type.values,
                    ext.name.as_str(),
                    ext_path.as_path(),
                    &ext.values,
                )?,

                Some(other_type) =>
                    return Err(SchemaBuildError::InvalidExtensionType {
                        extension_kind: "enum",
                        extension_loc: TypeBuilderHelpers::def_location(
                            &ext_path,
                            ext.position,
                        ),
                        type_kind: other_type.kind_name(),
                        type_name: ext.name.to_string(),
                    }),

                None =>
                    return Err(SchemaBuildError::ExtensionOfUndefinedType {
                        type_name: ext.name.to_string(),
                        extension_type_loc: TypeBuilderHelpers::def_location(
                            &ext_path,
                            ext.position,
                        ),
                    }),
            }
        }
        Ok(())
    }

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        def: ast::schema::EnumType,
    ) -> Result<()> {
        let def_location = TypeBuilderHelpers::def_location(file_path, def.position);
        TypeBuilderHelpers::check_type_name(file_path, def.name.as_str(), &def_location)?;

        let mut values = IndexMap::new();
        Self::add_values(&mut values, def.name.as_str(), file_path, &def.values)?;

        types_builder.add_new_type(
            def_location.clone(),
            def.name.as_str(),
            GraphQLType::Enum(EnumType {
                def_location,
                description: def.description.clone(),
                name: def.name.to_string(),
                values,
            }),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::EnumTypeExtension,
    ) -> Result<()> {
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Enum(enum_type)) => Self::add_values(
                &mut enum_type.values,
                ext.name.as_str(),
                file_path,
                &ext.values,
            ),

            Some(other_type) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    extension_kind: "enum",
                    extension_loc: TypeBuilderHelpers::def_location(
                        file_path,
                        ext.position,
                    ),
                    type_kind: other_type.kind_name(),
                    type_name: ext.name.to_string(),
                }),

            None => {
                self.extensions.push((file_path.to_path_buf(), ext));
                Ok(())
            },
        }
    }
}
