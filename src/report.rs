//! Console tables of quarks and hadrons

use std::sync::Arc;

use hadron_physics::{CompositeState, QuantumNumbers, QuantumState, Quark};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Bordered table with centred headers
struct Table {
    headers: Vec<&'static str>,
    align: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn render(&self, heading: &str) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(column, header)| {
                self.rows
                    .iter()
                    .map(|row| row[column].chars().count())
                    .chain([header.chars().count()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut border: String = widths
            .iter()
            .map(|width| format!("+{}", "-".repeat(width + 2)))
            .collect();
        border.push_str("+\n");

        let mut out = format!("{heading}\n{border}");
        out.push_str(&format_row(
            self.headers.iter().map(|header| header.to_string()),
            &widths,
            |_| None,
        ));
        out.push_str(&border);
        for row in &self.rows {
            let align = |column: usize| Some(self.align[column]);
            out.push_str(&format_row(row.iter().cloned(), &widths, align));
        }
        out.push_str(&border);
        out
    }
}

/// `None` centres the cell
fn format_row(
    cells: impl Iterator<Item = String>,
    widths: &[usize],
    align: impl Fn(usize) -> Option<Align>,
) -> String {
    let mut line = String::new();
    for (column, (cell, width)) in cells.zip(widths).enumerate() {
        let padded = match align(column) {
            Some(Align::Left) => format!("{cell:<width$}"),
            Some(Align::Right) => format!("{cell:>width$}"),
            None => format!("{cell:^width$}"),
        };
        line.push_str("| ");
        line.push_str(&padded);
        line.push(' ');
    }
    line.push_str("|\n");
    line
}

fn numbers_columns(numbers: &QuantumNumbers) -> [String; 8] {
    [
        numbers.charge,
        numbers.baryon_number,
        numbers.isospin_z,
        numbers.hypercharge(),
        numbers.strangeness,
        numbers.charm,
        numbers.bottomness,
        numbers.topness,
    ]
    .map(|value| value.to_string())
}

const NUMBER_HEADERS: [&str; 8] = ["Q", "B", "Iz", "Y", "S", "C", "B'", "T"];

pub fn quark_table(quarks: &[Arc<Quark>]) -> String {
    let mut headers = vec!["Name"];
    headers.extend(NUMBER_HEADERS);
    let mut align = vec![Align::Left];
    align.extend([Align::Right; 8]);

    let rows = quarks
        .iter()
        .map(|quark| {
            let mut row = vec![quark.name().to_string()];
            row.extend(numbers_columns(quark.numbers()));
            row
        })
        .collect();

    Table {
        headers,
        align,
        rows,
    }
    .render("Quarks")
}

pub fn state_table(heading: &str, states: &[CompositeState]) -> String {
    let mut headers = vec!["Name", "Quarks"];
    headers.extend(NUMBER_HEADERS);
    let mut align = vec![Align::Left, Align::Left];
    align.extend([Align::Right; 8]);

    let rows = states
        .iter()
        .map(|state| {
            let names: Vec<&str> = state.constituent_names().collect();
            let content = format!("({})", names.join(","));
            let mut row = vec![state.name().to_string(), content];
            row.extend(numbers_columns(state.numbers()));
            row
        })
        .collect();

    Table {
        headers,
        align,
        rows,
    }
    .render(heading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hadron_physics::Catalog;

    #[test]
    fn quark_rows_use_fractions() {
        let catalog = Catalog::standard().unwrap();
        let table = quark_table(&catalog.quarks()[..2]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Quarks");
        assert_eq!(
            lines[2],
            "| Name |  Q   |  B  |  Iz  |  Y  | S | C | B' | T |"
        );
        assert_eq!(
            lines[4],
            "| u    |  2/3 | 1/3 |  1/2 | 1/3 | 0 | 0 |  0 | 0 |"
        );
        assert_eq!(
            lines[5],
            "| d    | -1/3 | 1/3 | -1/2 | 1/3 | 0 | 0 |  0 | 0 |"
        );
        assert_eq!(lines.len(), 7);
        assert!(lines[1..].iter().all(|line| line.len() == lines[1].len()));
    }

    #[test]
    fn state_rows_list_constituents() {
        let catalog = Catalog::standard().unwrap();
        let table = state_table("Baryons", catalog.baryons());
        assert!(table.starts_with("Baryons\n"));

        let row = |name: &str| {
            table
                .lines()
                .find(|line| line.starts_with(&format!("| {name} ")))
                .unwrap()
        };
        assert!(row("p").contains("| (u,u,d) "));

        let omega = row("Omega");
        let cells: Vec<&str> = omega.split('|').map(str::trim).collect();
        assert_eq!(cells[3..11], ["-1", "1", "0", "-2", "-3", "0", "0", "0"]);
    }
}
