use std::sync::Arc;

use crate::base;
use crate::base::util;

/// Draws a pivot as a text table: one header line per column field, one line
/// per row value, and a closing grand total line.
#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub result: Arc<base::PivotResult>,
}

pub struct Table<'a> {
    charset: &'a base::Charset,
    /// Header lines, outermost column field first. Each entry is a header
    /// label and the number of data columns it spans.
    headers: Vec<Vec<(String, usize)>>,
    /// Heading of the row label column.
    title: String,
    rows: Vec<(String, Vec<base::Amount>)>,
    totals: Vec<base::Amount>,
    label_width: usize,
    widths: Vec<usize>,
}

impl Config {
    const TOTAL: &str = "Total";

    pub fn to_table(&self) -> Table<'_> {
        let result = &*self.result;
        let headers = if result.selection.cols().is_empty() {
            vec![vec![(Self::TOTAL.to_string(), 1)]]
        } else {
            (0..result.header_depth())
                .map(|depth| {
                    base::pivot::header_nodes_at_depth(&result.column_tree, depth)
                        .into_iter()
                        .map(|node| (node.value.label(), node.col_span))
                        .collect()
                })
                .collect()
        };
        let rows = result
            .row_values
            .iter()
            .map(|row| {
                let cells = result
                    .leaves
                    .iter()
                    .map(|leaf| base::Amount(result.cell(row, leaf)))
                    .collect::<Vec<_>>();
                (row.label(), cells)
            })
            .collect::<Vec<_>>();
        let totals = result
            .leaves
            .iter()
            .map(|leaf| base::Amount(result.total_cell(leaf)))
            .collect::<Vec<_>>();
        let title = result.selection.row().label();

        let label_width = rows
            .iter()
            .map(|(label, _)| util::charlen(label))
            .chain([util::charlen(&title), util::charlen(Self::TOTAL)])
            .max()
            .unwrap_or_default();
        let mut widths = (0..result.leaves.len())
            .map(|i| {
                rows.iter()
                    .map(|(_, cells)| cells[i])
                    .chain([totals[i]])
                    .map(|amount| util::charlen(&amount_text(amount)))
                    .max()
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>();
        // Widen the last column under any header that does not fit, deepest
        // header line first so that ancestors see their final widths.
        for line in headers.iter().rev() {
            let mut offset = 0;
            for (label, span) in line {
                let range = offset..offset + span;
                let width = widths[range.clone()].iter().sum::<usize>()
                    + util::COLUMN_GAP * (span - 1);
                let want = util::charlen(label);
                if want > width {
                    widths[range.end - 1] += want - width;
                }
                offset = range.end;
            }
        }

        Table {
            charset: &self.charset,
            headers,
            title,
            rows,
            totals,
            label_width,
            widths,
        }
    }
}

/// Returns an amount's text. Non-negative amounts get a trailing space so that
/// decimal points line up with parenthesized negatives.
fn amount_text(amount: base::Amount) -> String {
    if amount.is_negative() {
        amount.to_string()
    } else {
        format!("{} ", amount)
    }
}

impl Table<'_> {
    fn gap(&self) -> String {
        format!(" {} ", self.charset.table_pipe)
    }

    fn write_line(&self, f: &mut std::fmt::Formatter<'_>, line: &str) -> std::fmt::Result {
        writeln!(f, "{}", line.trim_end())
    }

    fn write_rule(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dash = self.charset.dash.to_string();
        let mut line = dash.repeat(self.label_width);
        for &width in &self.widths {
            line.push(self.charset.dash);
            line.push(self.charset.table_cross);
            line.push_str(&dash.repeat(width + 1));
        }
        self.write_line(f, &line)
    }

    fn write_amounts(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        label: &str,
        amounts: &[base::Amount],
        bold: bool,
    ) -> std::fmt::Result {
        let mut line = format!("{:<width$}", label, width = self.label_width);
        for (&amount, &width) in amounts.iter().zip(&self.widths) {
            line.push_str(&self.gap());
            let mut cell = format!("{:>width$}", amount_text(amount), width = width);
            if self.charset.color && amount.is_negative() {
                cell = colored::Colorize::red(cell.as_str()).to_string();
            }
            line.push_str(&cell);
        }
        if self.charset.color && bold {
            line = colored::Colorize::bold(line.trim_end()).to_string();
        }
        self.write_line(f, &line)
    }
}

impl std::fmt::Display for Table<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (depth, headers) in self.headers.iter().enumerate() {
            let first = if depth + 1 == self.headers.len() {
                self.title.as_str()
            } else {
                ""
            };
            let mut line = format!("{:<width$}", first, width = self.label_width);
            let mut offset = 0;
            for (label, span) in headers {
                let width = self.widths[offset..offset + span].iter().sum::<usize>()
                    + util::COLUMN_GAP * (span - 1);
                line.push_str(&self.gap());
                line.push_str(&util::center(label, width));
                offset += span;
            }
            self.write_line(f, &line)?;
        }
        self.write_rule(f)?;
        for (label, amounts) in &self.rows {
            self.write_amounts(f, label, amounts, false)?;
        }
        self.write_rule(f)?;
        self.write_amounts(f, Config::TOTAL, &self.totals, true)
    }
}
