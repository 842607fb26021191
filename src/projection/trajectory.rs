//! Projection output table

use std::io::Write;

use chrono::{Datelike, NaiveDate};

use super::state::ProjectionState;
use super::variable::Variable;
use crate::error::Result;

/// One projected quarter; `values` follow [`Trajectory::columns`]
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryRow {
    pub quarter: usize,
    pub values: Vec<f64>,
}

/// Every tracked variable for every projected quarter
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    columns: Vec<Variable>,
    rows: Vec<TrajectoryRow>,
    start_quarter: Option<NaiveDate>,
}

impl Trajectory {
    /// Transpose the finished per-variable series into quarter rows
    pub(crate) fn from_state(state: ProjectionState, start_quarter: Option<NaiveDate>) -> Self {
        let series: Vec<Vec<f64>> = state
            .into_series()
            .into_iter()
            .map(|s| s.into_values())
            .collect();
        let horizon = series.first().map(Vec::len).unwrap_or(0);

        let rows = (0..horizon)
            .map(|quarter| TrajectoryRow {
                quarter,
                values: series.iter().map(|values| values[quarter]).collect(),
            })
            .collect();

        Self {
            columns: Variable::ALL.to_vec(),
            rows,
            start_quarter,
        }
    }

    /// Number of quarters
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[Variable] {
        &self.columns
    }

    pub fn rows(&self) -> &[TrajectoryRow] {
        &self.rows
    }

    pub fn get(&self, quarter: usize, variable: Variable) -> Option<f64> {
        let col = self.column_index(variable)?;
        self.rows.get(quarter).map(|row| row.values[col])
    }

    /// Full path of one variable
    pub fn column(&self, variable: Variable) -> Vec<f64> {
        match self.column_index(variable) {
            Some(col) => self.rows.iter().map(|row| row.values[col]).collect(),
            None => Vec::new(),
        }
    }

    fn column_index(&self, variable: Variable) -> Option<usize> {
        self.columns.iter().position(|&c| c == variable)
    }

    /// Calendar label such as `2025Q3`, when a start quarter was configured
    pub fn quarter_label(&self, quarter: usize) -> Option<String> {
        let start = self.start_quarter?;
        let first = start.year() as i64 * 4 + start.month0() as i64 / 3;
        let absolute = first + quarter as i64;
        Some(format!("{}Q{}", absolute.div_euclid(4), absolute.rem_euclid(4) + 1))
    }

    /// Write the table as CSV: a header row, then one line per quarter
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header = vec!["quarter".to_string()];
        if self.start_quarter.is_some() {
            header.push("date".to_string());
        }
        header.extend(self.columns.iter().map(|c| c.name().to_string()));
        wtr.write_record(&header)?;

        for row in &self.rows {
            let mut record = vec![row.quarter.to_string()];
            if let Some(label) = self.quarter_label(row.quarter) {
                record.push(label);
            }
            record.extend(row.values.iter().map(|v| v.to_string()));
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::fixtures::baseline_inputs;
    use crate::projection::ProjectionEngine;

    fn trajectory(horizon: usize, start: Option<NaiveDate>) -> Trajectory {
        let mut inputs = baseline_inputs(horizon);
        inputs.start_quarter = start;
        ProjectionEngine::from_config(&inputs).unwrap().project().unwrap()
    }

    #[test]
    fn test_shape() {
        let t = trajectory(8, None);
        assert_eq!(t.len(), 8);
        assert_eq!(t.columns().len(), Variable::COUNT);
        for (idx, row) in t.rows().iter().enumerate() {
            assert_eq!(row.quarter, idx);
            assert_eq!(row.values.len(), Variable::COUNT);
        }
        assert_eq!(t.get(8, Variable::RealGdp), None);
        assert_eq!(t.column(Variable::Vix).len(), 8);
    }

    #[test]
    fn test_quarter_labels() {
        let t = trajectory(6, NaiveDate::from_ymd_opt(2025, 10, 1));
        assert_eq!(t.quarter_label(0).as_deref(), Some("2025Q4"));
        assert_eq!(t.quarter_label(1).as_deref(), Some("2026Q1"));
        assert_eq!(t.quarter_label(5).as_deref(), Some("2027Q1"));

        assert_eq!(trajectory(2, None).quarter_label(0), None);
    }

    #[test]
    fn test_write_csv() {
        let t = trajectory(5, NaiveDate::from_ymd_opt(2025, 1, 1));
        let mut buf = Vec::new();
        t.write_csv(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("quarter,date,natural_unemployment,unemployment_rate"));
        assert!(lines[1].starts_with("0,2025Q1,4,3.7,"));
        assert_eq!(lines[3].split(',').count(), Variable::COUNT + 2);
    }
}
