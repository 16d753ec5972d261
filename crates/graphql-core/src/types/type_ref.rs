use crate::types::GraphQLType;

/// A type reference that has been resolved against a
/// [`Schema`](crate::schema::Schema): a [`GraphQLType`], possibly wrapped in
/// any number of list and non-null modifiers.
///
/// Produced by [`Schema::type_from_ast()`](crate::schema::Schema::type_from_ast)
/// and [`Schema::resolve_type_annotation()`](crate::schema::Schema::resolve_type_annotation).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef<'schema> {
    List {
        item: Box<TypeRef<'schema>>,
        nullable: bool,
    },
    Named {
        graphql_type: &'schema GraphQLType,
        nullable: bool,
    },
}
impl<'schema> TypeRef<'schema> {
    /// A nullable reference to `graphql_type`.
    pub fn named(graphql_type: &'schema GraphQLType) -> Self {
        Self::Named {
            graphql_type,
            nullable: true,
        }
    }

    /// A nullable list of `item`.
    pub fn list(item: TypeRef<'schema>) -> Self {
        Self::List {
            item: Box::new(item),
            nullable: true,
        }
    }

    pub fn into_non_null(self) -> Self {
        match self {
            Self::List { item, .. } => Self::List { item, nullable: false },
            Self::Named { graphql_type, .. } => Self::Named {
                graphql_type,
                nullable: false,
            },
        }
    }

    /// An input type is a reference whose named type is a scalar, enum, or
    /// input object type.
    pub fn is_input_type(&self) -> bool {
        self.named_type().is_input_type()
    }

    pub fn is_output_type(&self) -> bool {
        self.named_type().is_output_type()
    }

    /// The item type of a list reference (regardless of nullability).
    pub fn list_item(&self) -> Option<&TypeRef<'schema>> {
        match self {
            Self::List { item, .. } => Some(item),
            Self::Named { .. } => None,
        }
    }

    /// The [`GraphQLType`] at the core of this reference, with all list and
    /// non-null wrappers removed.
    pub fn named_type(&self) -> &'schema GraphQLType {
        match self {
            Self::List { item, .. } => item.named_type(),
            Self::Named { graphql_type, .. } => graphql_type,
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } => *nullable,
            Self::Named { nullable, .. } => *nullable,
        }
    }
}
impl std::fmt::Display for TypeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { item, .. } => write!(f, "[{item}]")?,
            Self::Named { graphql_type, .. } => f.write_str(graphql_type.name())?,
        }
        if !self.nullable() {
            f.write_str("!")?;
        }
        Ok(())
    }
}
