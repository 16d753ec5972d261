use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`].
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(super) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The names of this union's member types, in declaration order.
    pub fn member_names(&self) -> Vec<&str> {
        self.members.keys().map(|name| name.as_str()).collect()
    }

    pub fn members<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema GraphQLType> {
        self.members
            .values()
            .filter_map(|member_ref| member_ref.deref(schema).ok())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
