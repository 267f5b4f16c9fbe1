//! CLI command handlers, one file per command group.

mod import;
mod jobs;
mod output;

#[cfg(test)]
pub(crate) mod fakes;

pub use import::{run_import_batch, run_import_ticket, BatchSettings};
pub use jobs::{run_list, run_show, run_show_many, run_wait, WaitSettings};
