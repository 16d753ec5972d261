mod introspection_query;
mod validate;

use crate::Cli;
use crate::CommandResult;
use introspection_query::IntrospectionQueryCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Print the standard introspection query.
    IntrospectionQuery(IntrospectionQueryCmd),

    /// Validate GraphQL operation documents against a schema.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::IntrospectionQuery(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
