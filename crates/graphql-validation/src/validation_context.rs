use crate::TypeInfo;
use graphql_core::ast;
use graphql_core::schema::Schema;
use graphql_core::types::Directive;
use graphql_core::types::Field;
use graphql_core::types::GraphQLType;
use graphql_core::types::Parameter;
use graphql_core::types::TypeRef;
use std::cell::OnceCell;
use std::collections::HashMap;

/// Everything a [`Visitor`](crate::Visitor) can look at while validating a
/// document: the schema, the document itself, its fragment definitions, and
/// the [`TypeInfo`] for the node currently being visited.
///
/// One context is created per [`validate()`](crate::validate()) call and is
/// shared by every rule run during that call.
#[derive(Debug)]
pub struct ValidationContext<'a> {
    document: &'a ast::query::Document,
    fragments: OnceCell<HashMap<&'a str, &'a ast::query::FragmentDefinition>>,
    schema: &'a Schema,
    pub(crate) type_info: TypeInfo<'a>,
}
impl<'a> ValidationContext<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::query::Document) -> Self {
        Self {
            document,
            fragments: OnceCell::new(),
            schema,
            type_info: TypeInfo::new(schema),
        }
    }

    pub fn argument(&self) -> Option<&'a Parameter> {
        self.type_info.argument()
    }

    pub fn directive(&self) -> Option<&'a Directive> {
        self.type_info.directive()
    }

    pub fn document(&self) -> &'a ast::query::Document {
        self.document
    }

    pub fn field_def(&self) -> Option<&'a Field> {
        self.type_info.field_def()
    }

    /// Looks up a fragment definition in the document by name.
    ///
    /// The name index is built on first use. If the document defines more
    /// than one fragment with the same name, the last one wins.
    pub fn fragment(&self, name: &str) -> Option<&'a ast::query::FragmentDefinition> {
        self.fragments
            .get_or_init(|| {
                self.document.definitions.iter()
                    .filter_map(|def| match def {
                        ast::query::Definition::Fragment(frag_def) =>
                            Some((frag_def.name.as_str(), frag_def)),
                        ast::query::Definition::Operation(_) => None,
                    })
                    .collect()
            })
            .get(name)
            .copied()
    }

    pub fn input_type(&self) -> Option<&TypeRef<'a>> {
        self.type_info.input_type()
    }

    pub fn parent_type(&self) -> Option<&'a GraphQLType> {
        self.type_info.parent_type()
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn type_(&self) -> Option<&TypeRef<'a>> {
        self.type_info.type_()
    }

    pub fn type_info(&self) -> &TypeInfo<'a> {
        &self.type_info
    }
}
