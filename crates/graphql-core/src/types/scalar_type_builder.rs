use crate::ast;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ScalarType;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Scalar extensions can only add directives, which the schema model doesn't
/// retain. They are still checked against the type they extend.
#[derive(Debug)]
pub(crate) struct ScalarTypeBuilder {
    extensions: Vec<(PathBuf, ast::schema::ScalarTypeExtension)>,
}
impl ScalarTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn check_extension(
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: &ast::schema::ScalarTypeExtension,
    ) -> Option<Result<()>> {
        let ext_loc = TypeBuilderHelpers::def_location(file_path, ext.position);
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Bool)
                | Some(GraphQLType::Float)
                | Some(GraphQLType::ID)
                | Some(GraphQLType::Int)
                | Some(GraphQLType::String) =>
                Some(Err(SchemaBuildError::ExtensionOfBuiltinType {
                    extension_loc: ext_loc,
                    type_name: ext.name.to_string(),
                })),

            Some(GraphQLType::Scalar(_)) => Some(Ok(())),

            Some(other_type) =>
                Some(Err(SchemaBuildError::InvalidExtensionType {
                    extension_kind: "scalar",
                    extension_loc: ext_loc,
                    type_kind: other_type.kind_name(),
                    type_name: ext.name.to_string(),
                })),

            None => None,
        }
    }
}

#[inherent]
impl TypeBuilder for ScalarTypeBuilder {
    type AstTypeDef = ast::schema::ScalarType;
    type AstTypeExtension = ast::schema::ScalarTypeExtension;

    pub(crate) fn finalize(self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions {
            match Self::check_extension(types_builder, &ext_path, &ext) {
                Some(result) => result?,
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
        def: ast::schema::ScalarType,
    ) -> Result<()> {
        let def_location = TypeBuilderHelpers::def_location(file_path, def.position);
        TypeBuilderHelpers::check_type_name(file_path, def.name.as_str(), &def_location)?;

        types_builder.add_new_type(
            def_location.clone(),
            def.name.as_str(),
            GraphQLType::Scalar(ScalarType {
                def_location,
                description: def.description.clone(),
                name: def.name.to_string(),
            }),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::ScalarTypeExtension,
    ) -> Result<()> {
        match Self::check_extension(types_builder, file_path, &ext) {
            Some(result) => result,
            None => {
                self.extensions.push((file_path.to_path_buf(), ext));
                Ok(())
            },
        }
    }
}
