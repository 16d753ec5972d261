use crate::ast;
use crate::loc;
use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`InputField`](crate::types::InputField), or
/// [`Parameter`](crate::types::Parameter) as written in the schema.
///
/// Use [`Schema::resolve_type_annotation()`](crate::schema::Schema::resolve_type_annotation)
/// to obtain a [`TypeRef`](crate::types::TypeRef) that points at the
/// annotated [`GraphQLType`](crate::types::GraphQLType).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::List(annot) => annot.def_location(),
            Self::Named(annot) => annot.def_location(),
        }
    }

    pub(crate) fn from_ast_type(
        def_location: &loc::SourceLocation,
        ast_type: &ast::query::Type,
    ) -> Self {
        Self::from_ast_type_impl(def_location, ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        def_location: &loc::SourceLocation,
        ast_type: &ast::query::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::query::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    def_location: def_location.clone(),
                    inner_type_annotation: Box::new(Self::from_ast_type_impl(
                        def_location,
                        inner,
                        true,
                    )),
                    nullable,
                }),

            ast::query::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_ref: NamedGraphQLTypeRef::new(
                        name,
                        def_location.clone(),
                    ),
                }),

            ast::query::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(def_location, inner, false),
        }
    }

    /// Parses a type reference written in GraphQL syntax (e.g. `"[String!]"`).
    /// Used for the annotations of built-in definitions, which are known to be
    /// well-formed.
    pub(crate) fn builtin(type_str: &str) -> Self {
        Self::from_ast_type(
            loc::SourceLocation::builtin(),
            &parse_builtin_type(type_str),
        )
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(list_annot) =>
                list_annot.inner_type_annotation.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot) =>
                named_annot,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeAnnotation::List(list_annot) =>
                write!(f, "[{}]", list_annot.inner_type_annotation)?,
            TypeAnnotation::Named(named_annot) =>
                f.write_str(named_annot.graphql_type_name())?,
        }
        if !self.nullable() {
            f.write_str("!")?;
        }
        Ok(())
    }
}

/// Builds an AST type from `[`, `]`, `!`, and a type name. Only intended for
/// the small, fixed set of annotations used by built-in definitions.
fn parse_builtin_type(type_str: &str) -> ast::query::Type {
    if let Some(inner) = type_str.strip_suffix('!') {
        ast::query::Type::NonNullType(Box::new(parse_builtin_type(inner)))
    } else if let Some(inner) = type_str
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']')) {
        ast::query::Type::ListType(Box::new(parse_builtin_type(inner)))
    } else {
        ast::query::Type::NamedType(type_str.to_string())
    }
}
