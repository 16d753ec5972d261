use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct UnionTypeBuilder {
    extensions: Vec<(PathBuf, ast::schema::UnionTypeExtension)>,
}
impl UnionTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn add_members(
        members: &mut IndexMap<String, NamedGraphQLTypeRef>,
        union_name: &str,
        member_loc: &loc::SourceLocation,
        member_names: &[String],
    ) -> Result<()> {
        for member_name in member_names {
            if let Some(existing_member) = members.get(member_name.as_str()) {
                return Err(SchemaBuildError::DuplicatedUnionMember {
                    member_name: member_name.to_string(),
                    member1: existing_member.ref_location().clone(),
                    member2: member_loc.to_owned(),
                    type_name: union_name.to_string(),
                });
            }
            members.insert(
                member_name.to_string(),
                NamedGraphQLTypeRef::new(member_name, member_loc.to_owned()),
            );
        }
        Ok(())
    }
}

#[inherent]
impl TypeBuilder for UnionTypeBuilder {
    type AstTypeDef = ast::schema::UnionType;
    type AstTypeExtension = ast::schema::UnionTypeExtension;

    pub(crate) fn finalize(self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions {
            let ext_loc = TypeBuilderHelpers::def_location(&ext_path, ext.position);
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(GraphQLType::Union(union_type)) => Self::add_members(
                    &mut union_type.members,
                    ext.name.as_str(),
                    &ext_loc,
                    &ext.types,
                )?,

                Some(other_type) =>
                    return Err(SchemaBuildError::InvalidExtensionType {
                        extension_kind: "union",
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
        def: ast::schema::UnionType,
    ) -> Result<()> {
        let def_location = TypeBuilderHelpers::def_location(file_path, def.position);
        TypeBuilderHelpers::check_type_name(file_path, def.name.as_str(), &def_location)?;

        let mut members = IndexMap::new();
        Self::add_members(&mut members, def.name.as_str(), &def_location, &def.types)?;

        types_builder.add_new_type(
            def_location.clone(),
            def.name.as_str(),
            GraphQLType::Union(UnionType {
                def_location,
                description: def.description.clone(),
                members,
                name: def.name.to_string(),
            }),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::UnionTypeExtension,
    ) -> Result<()> {
        let ext_loc = TypeBuilderHelpers::def_location(file_path, ext.position);
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Union(union_type)) => Self::add_members(
                &mut union_type.members,
                ext.name.as_str(),
                &ext_loc,
                &ext.types,
            ),

            Some(other_type) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    extension_kind: "union",
                    extension_loc: ext_loc,
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
