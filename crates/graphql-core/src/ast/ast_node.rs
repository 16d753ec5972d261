use crate::ast::Kind;
use crate::ast::Pos;
use crate::ast::query;
use std::collections::BTreeMap;

/// A borrowed, kind-tagged view of a single node within an executable
/// document.
///
/// `graphql_parser` models several node kinds as plain strings or tuples
/// (arguments, type conditions, variables, values). [`AstNode`] gives every
/// visitable position in the tree a uniform shape so it can be walked (see
/// [`walk`](crate::ast::walk())), dispatched on by [`Kind`], and referenced
/// from diagnostics.
///
/// Variable-valued positions (`$foo`) are always [`AstNode::Variable`], and
/// both fragment type conditions and named type references are
/// [`AstNode::NamedType`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AstNode<'a> {
    Argument(&'a (String, query::Value)),
    BooleanValue(bool),
    Directive(&'a query::Directive),
    Document(&'a query::Document),
    EnumValue(&'a str),
    Field(&'a query::Field),
    FloatValue(f64),
    FragmentDefinition(&'a query::FragmentDefinition),
    FragmentSpread(&'a query::FragmentSpread),
    InlineFragment(&'a query::InlineFragment),
    IntValue(&'a query::Number),
    ListType(&'a query::Type),
    ListValue(&'a [query::Value]),
    NamedType(&'a str),
    NonNullType(&'a query::Type),
    NullValue,
    ObjectField(&'a str, &'a query::Value),
    ObjectValue(&'a BTreeMap<String, query::Value>),
    OperationDefinition(&'a query::OperationDefinition),
    SelectionSet(&'a query::SelectionSet),
    StringValue(&'a str),
    Variable(&'a str),
    VariableDefinition(&'a query::VariableDefinition),
}
impl<'a> AstNode<'a> {
    /// The child nodes of this node, in visitation order.
    ///
    /// A [`query::Field`] without a sub-selection is parsed with an empty
    /// [`query::SelectionSet`]; that empty set is not considered a child.
    /// Object value fields come out sorted by name, since `graphql_parser`
    /// stores them in a `BTreeMap` and drops their source order.
    pub fn children(&self) -> Vec<AstNode<'a>> {
        let mut children = vec![];
        match *self {
            AstNode::Argument((_, value)) =>
                children.push(AstNode::from_value(value)),

            AstNode::Directive(directive) =>
                children.extend(directive.arguments.iter().map(AstNode::Argument)),

            AstNode::Document(doc) =>
                children.extend(doc.definitions.iter().map(AstNode::from_definition)),

            AstNode::Field(field) => {
                children.extend(field.arguments.iter().map(AstNode::Argument));
                children.extend(field.directives.iter().map(AstNode::Directive));
                if !field.selection_set.items.is_empty() {
                    children.push(AstNode::SelectionSet(&field.selection_set));
                }
            },

            AstNode::FragmentDefinition(frag_def) => {
                let query::TypeCondition::On(type_name) = &frag_def.type_condition;
                children.push(AstNode::NamedType(type_name.as_str()));
                children.extend(frag_def.directives.iter().map(AstNode::Directive));
                children.push(AstNode::SelectionSet(&frag_def.selection_set));
            },

            AstNode::FragmentSpread(spread) =>
                children.extend(spread.directives.iter().map(AstNode::Directive)),

            AstNode::InlineFragment(inline_frag) => {
                if let Some(query::TypeCondition::On(type_name)) = &inline_frag.type_condition {
                    children.push(AstNode::NamedType(type_name.as_str()));
                }
                children.extend(inline_frag.directives.iter().map(AstNode::Directive));
                children.push(AstNode::SelectionSet(&inline_frag.selection_set));
            },

            AstNode::ListType(type_) | AstNode::NonNullType(type_) => match type_ {
                query::Type::ListType(inner) | query::Type::NonNullType(inner) =>
                    children.push(AstNode::from_type(inner)),
                query::Type::NamedType(_) => (),
            },

            AstNode::ListValue(items) =>
                children.extend(items.iter().map(AstNode::from_value)),

            AstNode::ObjectField(_, value) =>
                children.push(AstNode::from_value(value)),

            AstNode::ObjectValue(fields) =>
                children.extend(fields.iter().map(|(name, value)| {
                    AstNode::ObjectField(name.as_str(), value)
                })),

            AstNode::OperationDefinition(op) => {
                let (var_defs, directives, selection_set) =
                    query::operation_parts(op);
                children.extend(var_defs.iter().map(AstNode::VariableDefinition));
                children.extend(directives.iter().map(AstNode::Directive));
                children.push(AstNode::SelectionSet(selection_set));
            },

            AstNode::SelectionSet(selection_set) =>
                children.extend(selection_set.items.iter().map(AstNode::from_selection)),

            AstNode::VariableDefinition(var_def) => {
                children.push(AstNode::Variable(var_def.name.as_str()));
                children.push(AstNode::from_type(&var_def.var_type));
                if let Some(default_value) = &var_def.default_value {
                    children.push(AstNode::from_value(default_value));
                }
            },

            AstNode::BooleanValue(_)
                | AstNode::EnumValue(_)
                | AstNode::FloatValue(_)
                | AstNode::IntValue(_)
                | AstNode::NamedType(_)
                | AstNode::NullValue
                | AstNode::StringValue(_)
                | AstNode::Variable(_) => (),
        }
        children
    }

    pub fn from_definition(def: &'a query::Definition) -> Self {
        match def {
            query::Definition::Fragment(frag_def) =>
                AstNode::FragmentDefinition(frag_def),
            query::Definition::Operation(op) =>
                AstNode::OperationDefinition(op),
        }
    }

    pub fn from_selection(selection: &'a query::Selection) -> Self {
        match selection {
            query::Selection::Field(field) =>
                AstNode::Field(field),
            query::Selection::FragmentSpread(spread) =>
                AstNode::FragmentSpread(spread),
            query::Selection::InlineFragment(inline_frag) =>
                AstNode::InlineFragment(inline_frag),
        }
    }

    pub fn from_type(type_: &'a query::Type) -> Self {
        match type_ {
            query::Type::ListType(_) => AstNode::ListType(type_),
            query::Type::NamedType(name) => AstNode::NamedType(name.as_str()),
            query::Type::NonNullType(_) => AstNode::NonNullType(type_),
        }
    }

    pub fn from_value(value: &'a query::Value) -> Self {
        match value {
            query::Value::Boolean(b) => AstNode::BooleanValue(*b),
            query::Value::Enum(name) => AstNode::EnumValue(name.as_str()),
            query::Value::Float(f) => AstNode::FloatValue(*f),
            query::Value::Int(num) => AstNode::IntValue(num),
            query::Value::List(items) => AstNode::ListValue(items.as_slice()),
            query::Value::Null => AstNode::NullValue,
            query::Value::Object(fields) => AstNode::ObjectValue(fields),
            query::Value::String(s) => AstNode::StringValue(s.as_str()),
            query::Value::Variable(name) => AstNode::Variable(name.as_str()),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            AstNode::Argument(_) => Kind::Argument,
            AstNode::BooleanValue(_) => Kind::BooleanValue,
            AstNode::Directive(_) => Kind::Directive,
            AstNode::Document(_) => Kind::Document,
            AstNode::EnumValue(_) => Kind::EnumValue,
            AstNode::Field(_) => Kind::Field,
            AstNode::FloatValue(_) => Kind::FloatValue,
            AstNode::FragmentDefinition(_) => Kind::FragmentDefinition,
            AstNode::FragmentSpread(_) => Kind::FragmentSpread,
            AstNode::InlineFragment(_) => Kind::InlineFragment,
            AstNode::IntValue(_) => Kind::IntValue,
            AstNode::ListType(_) => Kind::ListType,
            AstNode::ListValue(_) => Kind::ListValue,
            AstNode::NamedType(_) => Kind::NamedType,
            AstNode::NonNullType(_) => Kind::NonNullType,
            AstNode::NullValue => Kind::NullValue,
            AstNode::ObjectField(_, _) => Kind::ObjectField,
            AstNode::ObjectValue(_) => Kind::ObjectValue,
            AstNode::OperationDefinition(_) => Kind::OperationDefinition,
            AstNode::SelectionSet(_) => Kind::SelectionSet,
            AstNode::StringValue(_) => Kind::StringValue,
            AstNode::Variable(_) => Kind::Variable,
            AstNode::VariableDefinition(_) => Kind::VariableDefinition,
        }
    }

    /// The name carried by this node, for node kinds that have one (fields,
    /// arguments, directives, fragments, named operations, variables, and
    /// named types).
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            AstNode::Argument((name, _)) => Some(name.as_str()),
            AstNode::Directive(directive) => Some(directive.name.as_str()),
            AstNode::Field(field) => Some(field.name.as_str()),
            AstNode::FragmentDefinition(frag_def) => Some(frag_def.name.as_str()),
            AstNode::FragmentSpread(spread) => Some(spread.fragment_name.as_str()),
            AstNode::NamedType(name)
                | AstNode::ObjectField(name, _)
                | AstNode::Variable(name) => Some(name),
            AstNode::OperationDefinition(op) => query::operation_name(op),
            AstNode::VariableDefinition(var_def) => Some(var_def.name.as_str()),
            _ => None,
        }
    }

    /// The source position of this node, for node kinds that `graphql_parser`
    /// records one for.
    pub fn position(&self) -> Option<Pos> {
        match self {
            AstNode::Directive(directive) => Some(directive.position),
            AstNode::Field(field) => Some(field.position),
            AstNode::FragmentDefinition(frag_def) => Some(frag_def.position),
            AstNode::FragmentSpread(spread) => Some(spread.position),
            AstNode::InlineFragment(inline_frag) => Some(inline_frag.position),
            AstNode::OperationDefinition(op) => Some(query::operation_position(op)),
            AstNode::SelectionSet(selection_set) => Some(selection_set.span.0),
            AstNode::VariableDefinition(var_def) => Some(var_def.position),
            _ => None,
        }
    }
}
