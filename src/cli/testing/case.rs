use crate::cli;

/// Parses `args` into a [`cli::Root`], panicking with clap's message on
/// failure. The first arg is the binary name and may be empty.
pub fn parse(args: &[&str]) -> cli::Root {
    match <cli::Root as clap::Parser>::try_parse_from(args) {
        Ok(cmd) => cmd,
        Err(e) => panic!("{}", e),
    }
}

/// A single command invocation.
pub struct Invocation<'a> {
    pub args: &'a [&'a str],
    pub res: cli::testing::ResultMatcher<'a>,
}

/// Test case encapsulating expectations for the given command invocations.
/// Commands may write to the working directory.
pub struct MutCase<'a> {
    pub invocations: &'a [Invocation<'a>],

    /// Working directory contents before the first invocation.
    pub initial_state: cli::testing::StrState<'a>,

    /// Desired working directory contents after the last invocation.
    pub final_state: cli::testing::State,
}

impl MutCase<'_> {
    /// Runs every invocation in order against a fresh temporary directory
    /// seeded from `initial_state`, then compares the directory with
    /// `final_state`.
    pub fn run(self) {
        let (fs, _td) = cli::testing::tempfs();
        self.initial_state.to_fs(&fs);

        for inv in self.invocations {
            let res = parse(inv.args).run(&fs);
            inv.res.assert_matches(res);
        }

        assert_eq!(cli::testing::State::from_fs(&fs), self.final_state);
    }
}

/// Test case encapsulating expectations for the given command invocations.
/// Commands are expected to leave the working directory unchanged.
pub struct Case<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: cli::testing::StrState<'a>,
}

impl Case<'_> {
    pub fn run(self) {
        MutCase {
            invocations: self.invocations,
            final_state: self.initial_state.to_state(),
            initial_state: self.initial_state,
        }
        .run()
    }
}

/// Generates test functions from test cases.
///
/// Accepts one or more tuples of the form `(testcase_name: ident, testcase:
/// Case|MutCase)` and emits a `cmd_testcases` submodule with one `#[test]`
/// function per tuple.
macro_rules! generate_testcases {
    ($(($name:ident, $testcase:expr)),+ $(,)?) => {
        mod cmd_testcases {
            use super::*;

            $(
                #[test]
                fn $name() {
                    $testcase.run()
                }
            )+
        }
    };
}

pub(crate) use generate_testcases;
