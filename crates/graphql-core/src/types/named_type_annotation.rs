use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(super) nullable: bool,
    pub(super) type_ref: NamedGraphQLTypeRef,
}
impl NamedTypeAnnotation {
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.type_ref.ref_location()
    }

    /// Resolves the annotated type within `schema`. Only `None` when the
    /// annotation names a type that `schema` does not define.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.type_ref.deref(schema).ok()
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
