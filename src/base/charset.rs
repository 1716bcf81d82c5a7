#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub tree_sideways_t: &'static str,
    pub tree_corner: &'static str,
    pub tree_pipe_gap: &'static str,
    pub tree_space: &'static str,
    pub table_pipe: char,
    pub table_cross: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            tree_sideways_t: "|-- ",
            tree_corner: "`-- ",
            tree_pipe_gap: "|   ",
            tree_space: "    ",
            table_pipe: '|',
            table_cross: '+',
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            tree_sideways_t: "\u{251c}\u{2500}\u{2500} ",
            tree_corner: "\u{2514}\u{2500}\u{2500} ",
            tree_pipe_gap: "\u{2502}   ",
            tree_space: "    ",
            table_pipe: '\u{2502}',
            table_cross: '\u{253c}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }
}
