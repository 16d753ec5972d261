use crate::loc;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceType;
use crate::types::TypeAnnotation;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub struct TypesMapBuilder {
    types: HashMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: HashMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn add_new_type(
        &mut self,
        def_location: loc::SourceLocation,
        type_name: &str,
        type_: GraphQLType,
    ) -> Result<()> {
        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location().clone(),
                def2: def_location,
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn get_type_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    /// Checks every reference between types once all definitions and
    /// extensions have been merged, and yields the final types map.
    pub fn into_types_map(self) -> Result<HashMap<String, GraphQLType>> {
        let mut type_names: Vec<&String> = self.types.keys().collect();
        type_names.sort();

        let mut errors = vec![];
        for type_name in type_names {
            match &self.types[type_name] {
                GraphQLType::Bool
                    | GraphQLType::Float
                    | GraphQLType::ID
                    | GraphQLType::Int
                    | GraphQLType::Scalar(_)
                    | GraphQLType::String => (),

                GraphQLType::Enum(enum_type) => {
                    if enum_type.values().is_empty() {
                        errors.push(TypeValidationError::EmptyEnum {
                            location: enum_type.def_location().clone(),
                            type_name: type_name.to_string(),
                        });
                    }
                },

                GraphQLType::InputObject(inputobj_type) => {
                    for (field_name, field) in inputobj_type.fields() {
                        self.check_annotation(
                            &mut errors,
                            field.type_annotation(),
                            |field_type| field_type.is_input_type(),
                            |field_type| TypeValidationError::InputFieldOfOutputType {
                                field_name: field_name.to_string(),
                                field_type,
                                location: field.def_location().clone(),
                                type_name: type_name.to_string(),
                            },
                        );
                    }
                },

                GraphQLType::Interface(iface_type) =>
                    self.check_object_or_interface(&mut errors, iface_type),

                GraphQLType::Object(obj_type) =>
                    self.check_object_or_interface(&mut errors, obj_type),

                GraphQLType::Union(union_type) => {
                    for (member_name, member_ref) in &union_type.members {
                        match self.types.get(member_name.as_str()) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(member_type) => errors.push(
                                TypeValidationError::NonObjectUnionMember {
                                    location: member_ref.ref_location().clone(),
                                    member_kind: member_type.kind_name(),
                                    member_name: member_name.to_string(),
                                    union_name: type_name.to_string(),
                                }
                            ),
                            None => errors.push(TypeValidationError::UndefinedType {
                                location: member_ref.ref_location().clone(),
                                type_name: member_name.to_string(),
                            }),
                        }
                    }
                },
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(self.types)
    }

    /// Records an error if `annotation` names an undefined type, or a type
    /// that `is_allowed` rejects.
    fn check_annotation(
        &self,
        errors: &mut Vec<TypeValidationError>,
        annotation: &TypeAnnotation,
        is_allowed: impl Fn(&GraphQLType) -> bool,
        make_error: impl FnOnce(String) -> TypeValidationError,
    ) {
        let named_annot = annotation.innermost_named_type_annotation();
        let type_name = named_annot.graphql_type_name();
        match self.types.get(type_name) {
            Some(type_) if !is_allowed(type_) =>
                errors.push(make_error(type_name.to_string())),
            Some(_) => (),
            None => errors.push(TypeValidationError::UndefinedType {
                location: named_annot.def_location().clone(),
                type_name: type_name.to_string(),
            }),
        }
    }

    fn check_object_or_interface(
        &self,
        errors: &mut Vec<TypeValidationError>,
        type_: &impl ObjectOrInterfaceType,
    ) {
        let type_name = type_.name();
        for iface_name in type_.interface_names() {
            match self.types.get(iface_name) {
                Some(GraphQLType::Interface(_)) => (),
                Some(_) => errors.push(TypeValidationError::ImplementsNonInterface {
                    interface_name: iface_name.to_string(),
                    location: type_.def_location().clone(),
                    type_name: type_name.to_string(),
                }),
                None => errors.push(TypeValidationError::ImplementsUndefinedInterface {
                    interface_name: iface_name.to_string(),
                    location: type_.def_location().clone(),
                    type_name: type_name.to_string(),
                }),
            }
        }

        for (field_name, field) in type_.fields() {
            self.check_annotation(
                errors,
                field.type_annotation(),
                |field_type| field_type.is_output_type(),
                |field_type| TypeValidationError::OutputFieldOfInputType {
                    field_name: field_name.to_string(),
                    field_type,
                    location: field.def_location().clone(),
                    type_name: type_name.to_string(),
                },
            );

            for param in field.parameters().values() {
                self.check_annotation(
                    errors,
                    param.type_annotation(),
                    |arg_type| arg_type.is_input_type(),
                    |param_type| TypeValidationError::ParameterOfOutputType {
                        location: param.def_location().clone(),
                        param_name: param.name().to_string(),
                        param_type,
                    },
                );
            }
        }
    }
}
