//! Command line interface. Every command returns an [`Output`] which `main`
//! prints to stdout.

mod cmds;
mod output;
mod sharedopts;
mod util;

#[cfg(test)]
mod testing;

pub use cmds::root::Root;
use output::Output;
