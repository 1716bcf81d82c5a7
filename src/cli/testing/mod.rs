mod case;
mod resultmatcher;
mod state;

pub use case::Case;
pub use case::Invocation;
pub use case::MutCase;
pub(crate) use case::generate_testcases;
pub use case::parse;
pub use resultmatcher::ResultMatcher;
pub use state::State;
pub use state::StrState;
pub use state::tempfs;
