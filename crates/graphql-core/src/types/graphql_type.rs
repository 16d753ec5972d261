use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a defined GraphQL type
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String =>
                loc::SourceLocation::builtin(),
            GraphQLType::Enum(t) => t.def_location(),
            GraphQLType::InputObject(t) => t.def_location(),
            GraphQLType::Interface(t) => t.def_location(),
            GraphQLType::Object(t) => t.def_location(),
            GraphQLType::Scalar(t) => t.def_location(),
            GraphQLType::Union(t) => t.def_location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String => None,
            GraphQLType::Enum(t) => t.description(),
            GraphQLType::InputObject(t) => t.description(),
            GraphQLType::Interface(t) => t.description(),
            GraphQLType::Object(t) => t.description(),
            GraphQLType::Scalar(t) => t.description(),
            GraphQLType::Union(t) => t.description(),
        }
    }

    /// The output fields defined on this type. Only object and interface
    /// types define output fields.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            GraphQLType::Interface(t) => Some(t.fields()),
            GraphQLType::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    /// Object, interface, and union types.
    pub fn is_composite_type(&self) -> bool {
        matches!(
            self,
            GraphQLType::Interface(_)
                | GraphQLType::Object(_)
                | GraphQLType::Union(_)
        )
    }

    /// Scalar, enum, and input-object types.
    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::InputObject(_)
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
        )
    }

    /// Scalar and enum types.
    pub fn is_leaf_type(&self) -> bool {
        matches!(
            self,
            GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
        )
    }

    /// Every type except input-object types.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, GraphQLType::InputObject(_))
    }

    /// A human-readable description of what kind of type this is (e.g.
    /// `"input object"`), for use in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String => "scalar",
            GraphQLType::Enum(_) => "enum",
            GraphQLType::InputObject(_) => "input object",
            GraphQLType::Interface(_) => "interface",
            GraphQLType::Object(_) => "object",
            GraphQLType::Union(_) => "union",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Bool => "Boolean",
            GraphQLType::Enum(t) => t.name(),
            GraphQLType::Float => "Float",
            GraphQLType::ID => "ID",
            GraphQLType::InputObject(t) => t.name(),
            GraphQLType::Int => "Int",
            GraphQLType::Interface(t) => t.name(),
            GraphQLType::Object(t) => t.name(),
            GraphQLType::Scalar(t) => t.name(),
            GraphQLType::String => "String",
            GraphQLType::Union(t) => t.name(),
        }
    }
}
impl DerefByName for GraphQLType {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
