use crate::ast;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct InputObjectTypeBuilder {
    extensions: Vec<(PathBuf, ast::schema::InputObjectTypeExtension)>,
}
impl InputObjectTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }
}

#[inherent]
impl TypeBuilder for InputObjectTypeBuilder {
    type AstTypeDef = ast::schema::InputObjectType;
    type AstTypeExtension = ast::schema::InputObjectTypeExtension;

    pub(crate) fn finalize(self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions {
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(GraphQLType::InputObject(inputobj_type)) =>
                    TypeBuilderHelpers::add_input_fields_from_ast(
                        &mut inputobj_type.fields,
                        ext_path.as_path(),
                        ext.name.as_str(),
                        &ext.fields,
                    )?,

                Some(other_type) =>
                    return Err(SchemaBuildError::InvalidExtensionType {
                        extension_kind: "input object",
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
        def: ast::schema::InputObjectType,
    ) -> Result<()> {
        let def_location = TypeBuilderHelpers::def_location(file_path, def.position);
        TypeBuilderHelpers::check_type_name(file_path, def.name.as_str(), &def_location)?;

        let mut fields = IndexMap::new();
        TypeBuilderHelpers::add_input_fields_from_ast(
            &mut fields,
            file_path,
            def.name.as_str(),
            &def.fields,
        )?;

        types_builder.add_new_type(
            def_location.clone(),
            def.name.as_str(),
            GraphQLType::InputObject(InputObjectType {
                def_location,
                description: def.description.clone(),
                fields,
                name: def.name.to_string(),
            }),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::InputObjectTypeExtension,
    ) -> Result<()> {
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::InputObject(inputobj_type)) =>
                TypeBuilderHelpers::add_input_fields_from_ast(
                    &mut inputobj_type.fields,
                    file_path,
                    ext.name.as_str(),
                    &ext.fields,
                ),

            Some(other_type) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    extension_kind: "input object",
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
