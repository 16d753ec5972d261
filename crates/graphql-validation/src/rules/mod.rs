//! The validation rule catalog.
//!
//! [`specified_rules()`] is the list [`validate()`](crate::validate()) runs
//! by default. Every rule is also exported on its own so callers can run any
//! subset through [`validate_with_rules()`](crate::validate_with_rules()).

mod fields_on_correct_type;
mod known_argument_names;
mod known_fragment_names;
mod known_type_names;
mod no_undefined_variables;
mod unique_argument_names;
mod variables_are_input_types;

pub use fields_on_correct_type::FieldsOnCorrectType;
pub use fields_on_correct_type::undefined_field_message;
pub use known_argument_names::KnownArgumentNames;
pub use known_argument_names::unknown_arg_message;
pub use known_argument_names::unknown_directive_arg_message;
pub use known_fragment_names::KnownFragmentNames;
pub use known_fragment_names::unknown_fragment_message;
pub use known_type_names::KnownTypeNames;
pub use known_type_names::unknown_type_message;
pub use no_undefined_variables::NoUndefinedVariables;
pub use no_undefined_variables::undefined_var_by_op_message;
pub use no_undefined_variables::undefined_var_message;
pub use unique_argument_names::UniqueArgumentNames;
pub use unique_argument_names::duplicate_arg_message;
pub use variables_are_input_types::VariablesAreInputTypes;
pub use variables_are_input_types::non_input_type_on_var_message;

use crate::ValidationRule;

/// The rules [`validate()`](crate::validate()) runs when no rule list is
/// given, in the order they run.
pub fn specified_rules() -> &'static [&'static dyn ValidationRule] {
    static RULES: [&dyn ValidationRule; 7] = [
        &KnownTypeNames,
        &VariablesAreInputTypes,
        &FieldsOnCorrectType,
        &KnownFragmentNames,
        &NoUndefinedVariables,
        &KnownArgumentNames,
        &UniqueArgumentNames,
    ];
    &RULES
}

#[cfg(test)]
mod tests;
