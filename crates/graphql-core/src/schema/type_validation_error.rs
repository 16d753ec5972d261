use crate::loc;
use thiserror::Error;

/// A type definition that refers to another type in a way the type system
/// forbids. These are only detectable once every definition has been loaded,
/// so [`SchemaBuilder::build()`](crate::schema::SchemaBuilder::build) reports
/// all of them together.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error("Enum `{type_name}` has no values")]
    EmptyEnum {
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("`{type_name}` implements `{interface_name}`, which is not an interface")]
    ImplementsNonInterface {
        interface_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("`{type_name}` implements `{interface_name}`, which is not defined")]
    ImplementsUndefinedInterface {
        interface_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Input field `{type_name}.{field_name}` has output-only type `{field_type}`")]
    InputFieldOfOutputType {
        field_name: String,
        field_type: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Union `{union_name}` lists `{member_name}` as a member, but its kind \
        is {member_kind} rather than object"
    )]
    NonObjectUnionMember {
        location: loc::SourceLocation,
        member_kind: &'static str,
        member_name: String,
        union_name: String,
    },

    #[error("Field `{type_name}.{field_name}` has input object type `{field_type}`")]
    OutputFieldOfInputType {
        field_name: String,
        field_type: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Argument `{param_name}` has output-only type `{param_type}`")]
    ParameterOfOutputType {
        location: loc::SourceLocation,
        param_name: String,
        param_type: String,
    },

    #[error("Type `{type_name}` is not defined")]
    UndefinedType {
        location: loc::SourceLocation,
        type_name: String,
    },
}
