use clap::{Arg, ArgAction};

use crate::cli_resolve;
use crate::logging::default_logging;

pub struct Cli {
    cmd: clap::Command,
}

impl Cli {
    pub fn new() -> eyre::Result<Self> {
        Ok(Self {
            cmd: clap::Command::new("dmmf-bootstrap")
                .subcommand_required(true)
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .global(true)
                        .action(ArgAction::SetTrue),
                )
                .subcommand(cli_resolve::ResolveCommand::new_cmd()),
        })
    }

    pub fn execute(self, args: &[&str]) -> eyre::Result<()> {
        let matches = self.cmd.get_matches_from(args);

        let verbose = matches.get_flag("verbose")
            || matches
                .subcommand()
                .map(|(_, args)| args.get_flag("verbose"))
                .unwrap_or(false);
        default_logging(verbose)?;

        match matches.subcommand() {
            Some(("resolve", args)) => cli_resolve::ResolveCommand::exec(args)?,
            _ => eyre::bail!("command missing"),
        }

        Ok(())
    }
}
