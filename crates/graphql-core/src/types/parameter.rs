use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use std::path::Path;

/// An argument declared on a [`Field`](crate::types::Field) or a
/// [`Directive`](crate::types::Directive).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<ast::query::Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&ast::query::Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        let def_location: loc::SourceLocation = loc::FilePosition::from_pos(
            Some(file_path),
            input_val.position,
        ).into();

        Parameter {
            default_value: input_val.default_value.clone(),
            description: input_val.description.clone(),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(
                &def_location,
                &input_val.value_type,
            ),
            def_location,
        }
    }

    /// A parameter of a built-in directive or meta-field.
    pub(crate) fn builtin(name: &str, type_annotation: TypeAnnotation) -> Self {
        Parameter {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            default_value: None,
            description: None,
            name: name.to_string(),
            type_annotation,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether a value must be supplied for this parameter: it is non-null
    /// and has no default.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
