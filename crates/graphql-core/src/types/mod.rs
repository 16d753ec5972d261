mod directive;
mod enum_type;
mod enum_type_builder;
mod field;
mod graphql_type;
mod input_object_type;
mod input_object_type_builder;
mod interface_type;
mod interface_type_builder;
mod list_type_annotation;
mod named_type_annotation;
mod object_or_interface_type;
mod object_or_interface_type_data;
mod object_type;
mod object_type_builder;
mod parameter;
mod scalar_type;
mod scalar_type_builder;
mod type_annotation;
mod type_builder;
mod type_ref;
mod types_map_builder;
mod union_type;
mod union_type_builder;

pub use directive::Directive;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub(crate) use enum_type_builder::EnumTypeBuilder;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use input_object_type::InputField;
pub use input_object_type::InputObjectType;
pub(crate) use input_object_type_builder::InputObjectTypeBuilder;
pub use interface_type::InterfaceType;
pub(crate) use interface_type_builder::InterfaceTypeBuilder;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use object_or_interface_type::ObjectOrInterfaceType;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_type::ObjectType;
pub(crate) use object_type_builder::ObjectTypeBuilder;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub(crate) use scalar_type_builder::ScalarTypeBuilder;
pub use type_annotation::TypeAnnotation;
use type_builder::TypeBuilder;
use type_builder::TypeBuilderHelpers;
pub use type_ref::TypeRef;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;
pub(crate) use union_type_builder::UnionTypeBuilder;

/// A by-name reference to a type owned by a [`Schema`](crate::schema::Schema).
pub type NamedGraphQLTypeRef = crate::NamedRef<crate::schema::Schema, GraphQLType>;

#[cfg(test)]
mod tests;
