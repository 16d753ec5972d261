use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_validation::introspection::INTROSPECTION_QUERY;

#[derive(Debug, clap::Args)]
pub(crate) struct IntrospectionQueryCmd {}

#[inherent::inherent]
impl RunnableCommand for IntrospectionQueryCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::stdout(format_args!("{}", INTROSPECTION_QUERY.trim()))
    }
}
