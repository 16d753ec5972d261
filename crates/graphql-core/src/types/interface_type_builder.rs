use crate::ast;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct InterfaceTypeBuilder {
    extensions: Vec<(PathBuf, ast::schema::InterfaceTypeExtension)>,
}
impl InterfaceTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn merge_type_extension(
        interface_type: &mut InterfaceType,
        ext_file_path: &Path,
        ext: ast::schema::InterfaceTypeExtension,
    ) -> Result<()> {
        let ext_loc = TypeBuilderHelpers::def_location(ext_file_path, ext.position);
        TypeBuilderHelpers::add_interface_refs_from_ast(
            &mut interface_type.0.interfaces,
            &ext_loc,
            ext.name.as_str(),
            &ext.implements_interfaces,
        )?;
        TypeBuilderHelpers::add_fielddefs_from_ast(
            &mut interface_type.0.fields,
            ext_file_path,
            ext.name.as_str(),
            &ext.fields,
        )
    }
}

#[inherent]
impl TypeBuilder for InterfaceTypeBuilder {
    type AstTypeDef = ast::schema::InterfaceType;
    type AstTypeExtension = ast::schema::InterfaceTypeExtension;

    pub(crate) fn finalize(self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions {
            let ext_loc = TypeBuilderHelpers::def_location(&ext_path, ext.position);
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(GraphQLType::Interface(interface_type)) =>
                    Self::merge_type_extension(interface_type, ext_path.as_path(), ext)?,

                Some(other_type) =>
                    return Err(SchemaBuildError::InvalidExtensionType {
                        extension_kind: "interface",
                        extension_loc: ext_loc,
                        type_kind: other_type.kind_name(),
                        type_name: ext.name.to_string(),
                    }),

                None =>
                    return Err(SchemaBuildError::ExtensionOfUndefinedType {
                        type_name: ext.name.to_string(),
                        extension_type_loc: ext_loc,
                    }),
            }
        }
        Ok(())
    }

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        def: ast::schema::InterfaceType,
    ) -> Result<()> {
        let def_location = TypeBuilderHelpers::def_location(file_path, def.position);
        TypeBuilderHelpers::check_type_name(file_path, def.name.as_str(), &def_location)?;

        let mut fields = IndexMap::new();
        TypeBuilderHelpers::add_fielddefs_from_ast(
            &mut fields,
            file_path,
            def.name.as_str(),
            &def.fields,
        )?;

        let mut interfaces = vec![];
        TypeBuilderHelpers::add_interface_refs_from_ast(
            &mut interfaces,
            &def_location,
            def.name.as_str(),
            &def.implements_interfaces,
        )?;

        types_builder.add_new_type(
            def_location.clone(),
            def.name.as_str(),
            GraphQLType::Interface(InterfaceType(ObjectOrInterfaceTypeData {
                def_location,
                description: def.description.clone(),
                fields,
                interfaces,
                name: def.name.to_string(),
            })),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::InterfaceTypeExtension,
    ) -> Result<()> {
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Interface(interface_type)) =>
                Self::merge_type_extension(interface_type, file_path, ext),

            Some(other_type) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    extension_kind: "interface",
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
