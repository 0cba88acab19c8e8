mod parse;
mod validate;

use crate::Cli;
use crate::CommandResult;
use parse::ParseCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Parse schema or query documents and report syntax errors.
    Parse(Box<ParseCmd>),

    /// Validate query documents against a schema.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
