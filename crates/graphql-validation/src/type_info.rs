use graphql_core::OperationKind;
use graphql_core::ast;
use graphql_core::ast::AstNode;
use graphql_core::schema::Schema;
use graphql_core::types::Directive;
use graphql_core::types::Field;
use graphql_core::types::GraphQLType;
use graphql_core::types::Parameter;
use graphql_core::types::TypeRef;

/// Tracks the schema types in effect at the current position of a walk over
/// an executable document.
///
/// [`TypeInfo::enter`] and [`TypeInfo::leave`] must be called in mirrored
/// pairs for every node the walk touches, including nodes whose children end
/// up being skipped. Every stack is pushed on the enter of its node kind and
/// popped on the matching leave, even when the schema lookup fails (an
/// absent entry is pushed in that case), so after any node's subtree is done
/// each stack is back to the depth it had before that node.
///
/// | Node                                   | Stacks pushed                       |
/// |----------------------------------------|-------------------------------------|
/// | `OperationDefinition`                  | type, parent type (the root type)   |
/// | `SelectionSet`                         | parent type                         |
/// | `Field`                                | field definition, type              |
/// | `InlineFragment`, `FragmentDefinition` | type (the type condition)           |
/// | `Directive`                            | directive                           |
/// | `Argument`                             | argument definition, input type     |
/// | `VariableDefinition`                   | input type                          |
/// | `ListValue`, `ObjectField`             | input type                          |
#[derive(Clone, Debug)]
pub struct TypeInfo<'a> {
    argument_stack: Vec<Option<&'a Parameter>>,
    directive_stack: Vec<Option<&'a Directive>>,
    field_def_stack: Vec<Option<&'a Field>>,
    input_type_stack: Vec<Option<TypeRef<'a>>>,
    parent_type_stack: Vec<Option<&'a GraphQLType>>,
    schema: &'a Schema,
    type_stack: Vec<Option<TypeRef<'a>>>,
}
impl<'a> TypeInfo<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            argument_stack: vec![],
            directive_stack: vec![],
            field_def_stack: vec![],
            input_type_stack: vec![],
            parent_type_stack: vec![],
            schema,
            type_stack: vec![],
        }
    }

    /// The definition of the argument currently being visited.
    pub fn argument(&self) -> Option<&'a Parameter> {
        self.argument_stack.last().copied().flatten()
    }

    /// The definition of the directive currently being visited.
    pub fn directive(&self) -> Option<&'a Directive> {
        self.directive_stack.last().copied().flatten()
    }

    pub fn enter(&mut self, node: AstNode<'a>) {
        let schema = self.schema;
        match node {
            AstNode::Argument((arg_name, _)) => {
                // Inside a directive, arguments belong to the directive even
                // when it isn't defined in the schema.
                let arg_def = match self.directive_stack.last() {
                    Some(directive) => directive
                        .and_then(|directive| directive.parameter(arg_name)),
                    None => self.field_def()
                        .and_then(|field_def| field_def.parameter(arg_name)),
                };
                let arg_type = arg_def.and_then(|arg_def| {
                    schema.resolve_type_annotation(arg_def.type_annotation())
                });
                self.argument_stack.push(arg_def);
                self.input_type_stack.push(arg_type);
            },

            AstNode::Directive(directive) =>
                self.directive_stack.push(schema.directive(directive.name.as_str())),

            AstNode::Field(field) => {
                let field_def = self.parent_type().and_then(|parent_type| {
                    schema.field_def(parent_type, field.name.as_str())
                });
                let field_type = field_def.and_then(|field_def| {
                    schema.resolve_type_annotation(field_def.type_annotation())
                });
                self.field_def_stack.push(field_def);
                self.type_stack.push(field_type);
            },

            AstNode::FragmentDefinition(frag_def) => {
                let ast::query::TypeCondition::On(type_name) = &frag_def.type_condition;
                self.type_stack.push(output_type(schema.get_type(type_name)));
            },

            AstNode::InlineFragment(inline_frag) => {
                let condition_type = match &inline_frag.type_condition {
                    Some(ast::query::TypeCondition::On(type_name)) =>
                        schema.get_type(type_name),
                    None => self.current_named_type(),
                };
                self.type_stack.push(output_type(condition_type));
            },

            AstNode::ListValue(_) => {
                let item_type = self.input_type().map(|list_type| {
                    list_type.list_item().unwrap_or(list_type).clone()
                });
                self.input_type_stack.push(item_type);
            },

            AstNode::ObjectField(field_name, _) => {
                let field_type = self.input_type()
                    .and_then(|input_type| input_type.named_type().as_input_object())
                    .and_then(|input_obj| input_obj.field(field_name))
                    .and_then(|input_field| {
                        schema.resolve_type_annotation(input_field.type_annotation())
                    });
                self.input_type_stack.push(field_type);
            },

            AstNode::OperationDefinition(op) => {
                let root_type = schema.root_type(OperationKind::from_ast(op));
                self.type_stack.push(root_type.map(TypeRef::named));
                self.parent_type_stack.push(root_type);
            },

            AstNode::SelectionSet(_) => {
                let parent_type = self.current_named_type()
                    .filter(|named_type| named_type.is_composite_type());
                self.parent_type_stack.push(parent_type);
            },

            AstNode::VariableDefinition(var_def) => {
                let var_type = schema.type_from_ast(&var_def.var_type)
                    .filter(|var_type| var_type.is_input_type());
                self.input_type_stack.push(var_type);
            },

            _ => (),
        }
    }

    /// The definition of the field currently being visited.
    pub fn field_def(&self) -> Option<&'a Field> {
        self.field_def_stack.last().copied().flatten()
    }

    /// The expected input type at the current argument, variable definition,
    /// or value position.
    pub fn input_type(&self) -> Option<&TypeRef<'a>> {
        self.input_type_stack.last().and_then(Option::as_ref)
    }

    /// True when every stack is empty, which holds before a walk starts and
    /// after it ends.
    pub fn is_balanced(&self) -> bool {
        self.stack_depths() == [0; 6]
    }

    pub fn leave(&mut self, node: AstNode<'a>) {
        match node {
            AstNode::Argument(_) => {
                self.argument_stack.pop();
                self.input_type_stack.pop();
            },

            AstNode::Directive(_) => {
                self.directive_stack.pop();
            },

            AstNode::Field(_) => {
                self.field_def_stack.pop();
                self.type_stack.pop();
            },

            AstNode::FragmentDefinition(_)
                | AstNode::InlineFragment(_) => {
                self.type_stack.pop();
            },

            AstNode::ListValue(_)
                | AstNode::ObjectField(_, _)
                | AstNode::VariableDefinition(_) => {
                self.input_type_stack.pop();
            },

            AstNode::OperationDefinition(_) => {
                self.type_stack.pop();
                self.parent_type_stack.pop();
            },

            AstNode::SelectionSet(_) => {
                self.parent_type_stack.pop();
            },

            _ => (),
        }
    }

    /// The composite type whose fields are being selected at the current
    /// position.
    pub fn parent_type(&self) -> Option<&'a GraphQLType> {
        self.parent_type_stack.last().copied().flatten()
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Depths of the argument, directive, field definition, input type,
    /// parent type, and type stacks, in that order.
    pub fn stack_depths(&self) -> [usize; 6] {
        [
            self.argument_stack.len(),
            self.directive_stack.len(),
            self.field_def_stack.len(),
            self.input_type_stack.len(),
            self.parent_type_stack.len(),
            self.type_stack.len(),
        ]
    }

    /// The output type of the field, fragment, or operation currently being
    /// visited.
    pub fn type_(&self) -> Option<&TypeRef<'a>> {
        self.type_stack.last().and_then(Option::as_ref)
    }

    fn current_named_type(&self) -> Option<&'a GraphQLType> {
        self.type_().map(|type_ref| type_ref.named_type())
    }
}

fn output_type(graphql_type: Option<&GraphQLType>) -> Option<TypeRef<'_>> {
    graphql_type
        .filter(|graphql_type| graphql_type.is_output_type())
        .map(TypeRef::named)
}
