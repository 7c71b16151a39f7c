mod coordinates;

use crate::Cli;
use crate::CommandResult;
use coordinates::CoordinatesCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Print the schema coordinate of every type, field, argument, enum
    /// value, input field and directive defined in the given files.
    Coordinates(Box<CoordinatesCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Coordinates(cmd) => cmd.run(cli).await
        }
    }
}
