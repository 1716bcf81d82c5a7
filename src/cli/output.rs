use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Str(String),
    Table(base::table::Config),
    Tree(base::tree::forcolumns::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Table(config) => {
                if config.result.row_values.is_empty() {
                    writeln!(f, "No transactions.")
                } else {
                    write!(f, "{}", config.to_table())
                }
            }
            Output::Tree(config) => {
                if config.result.selection.cols().is_empty() {
                    writeln!(f, "No column fields.")
                } else if config.result.column_tree.is_empty() {
                    writeln!(f, "No transactions.")
                } else {
                    write!(f, "{}", config.to_tree())
                }
            }
        }
    }
}
