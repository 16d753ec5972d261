use crate::ast;
use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::Schema;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::sync::OnceLock;

/// Represents a defined directive.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    Custom {
        def_location: loc::SourceLocation,
        description: Option<String>,
        locations: Vec<ast::schema::DirectiveLocation>,
        name: String,
        params: IndexMap<String, Parameter>,
    },
    Deprecated,
    Include,
    Skip,
    SpecifiedBy,
}
impl Directive {
    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Directive::Custom { def_location, .. } => def_location,
            Directive::Deprecated
                | Directive::Include
                | Directive::Skip
                | Directive::SpecifiedBy => loc::SourceLocation::builtin(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Directive::Custom { description, .. } => description.as_deref(),
            _ => None,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Directive::Custom { .. })
    }

    /// The locations this directive may be applied at.
    pub fn locations(&self) -> Vec<ast::schema::DirectiveLocation> {
        use ast::schema::DirectiveLocation;
        match self {
            Directive::Custom { locations, .. } => locations.clone(),
            Directive::Deprecated => vec![
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::InputFieldDefinition,
                DirectiveLocation::EnumValue,
            ],
            Directive::Include | Directive::Skip => vec![
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            Directive::SpecifiedBy => vec![DirectiveLocation::Scalar],
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Directive::Custom { name, .. } => name.as_str(),
            Directive::Deprecated => "deprecated",
            Directive::Include => "include",
            Directive::Skip => "skip",
            Directive::SpecifiedBy => "specifiedBy",
        }
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters().get(name)
    }

    /// The arguments this directive accepts.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        static DEPRECATED_PARAMS: OnceLock<IndexMap<String, Parameter>> = OnceLock::new();
        static IF_PARAMS: OnceLock<IndexMap<String, Parameter>> = OnceLock::new();
        static SPECIFIED_BY_PARAMS: OnceLock<IndexMap<String, Parameter>> = OnceLock::new();

        match self {
            Directive::Custom { params, .. } => params,
            Directive::Deprecated => DEPRECATED_PARAMS.get_or_init(|| {
                let mut params = builtin_params(&[("reason", "String")]);
                if let Some(reason) = params.get_mut("reason") {
                    reason.default_value = Some(ast::query::Value::String(
                        "No longer supported".to_string(),
                    ));
                }
                params
            }),
            Directive::Include | Directive::Skip => IF_PARAMS.get_or_init(|| {
                builtin_params(&[("if", "Boolean!")])
            }),
            Directive::SpecifiedBy => SPECIFIED_BY_PARAMS.get_or_init(|| {
                builtin_params(&[("url", "String!")])
            }),
        }
    }
}
impl DerefByName for Directive {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.directive_defs.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string())
        )
    }
}

fn builtin_params(params: &[(&str, &str)]) -> IndexMap<String, Parameter> {
    params.iter().map(|(name, type_str)| (
        name.to_string(),
        Parameter::builtin(name, TypeAnnotation::builtin(type_str)),
    )).collect()
}
