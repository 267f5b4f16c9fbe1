//! CLI parse tests, split by command group.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}


#[test]
fn cli_parse_global_timeout() {
    let cli = Cli::try_parse_from(["zd", "jobs", "list", "--timeout", "30"]).unwrap();
    assert_eq!(cli.timeout, Some(30));
    let cli = Cli::try_parse_from(["zd", "jobs", "list"]).unwrap();
    assert_eq!(cli.timeout, None);
}

#[test]
fn cli_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["zd"]).is_err());
    assert!(Cli::try_parse_from(["zd", "jobs"]).is_err());
}

#[test]
fn call_context_from_timeout() {
    assert!(super::call_context(None).deadline().is_none());
    assert!(super::call_context(Some(5)).deadline().is_some());
}
