#[derive(Debug, Clone, PartialEq)]
pub struct TableData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub summary: Option<Vec<(String, ColumnSummary)>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl TableData {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let summary = summarize_numeric_columns(&columns, &rows);
        Self {
            columns,
            rows,
            summary,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }
}

impl ColumnSummary {
    fn from_values(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
                / (count - 1) as f64;
            Some(variance.sqrt())
        } else {
            None
        };

        Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.5),
            q75: percentile(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }
}

// Linear interpolation between closest ranks.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let weight = rank - lo as f64;
        sorted[lo] * (1.0 - weight) + sorted[hi] * weight
    }
}

fn summarize_numeric_columns(
    columns: &[String],
    rows: &[Vec<String>],
) -> Option<Vec<(String, ColumnSummary)>> {
    let mut summaries = Vec::new();

    for (idx, name) in columns.iter().enumerate() {
        if let Some(values) = numeric_values(rows, idx) {
            summaries.push((name.clone(), ColumnSummary::from_values(&values)));
        }
    }

    if summaries.is_empty() {
        None
    } else {
        Some(summaries)
    }
}

// A column is numeric when at least one cell holds a value and every
// non-empty cell parses as a float. "NaN" cells count as missing.
fn numeric_values(rows: &[Vec<String>], idx: usize) -> Option<Vec<f64>> {
    let mut values = Vec::new();

    for row in rows {
        let cell = row.get(idx).map(String::as_str).unwrap_or("").trim();
        if cell.is_empty() {
            continue;
        }
        match cell.parse::<f64>() {
            Ok(value) if value.is_nan() => continue,
            Ok(value) => values.push(value),
            Err(_) => return None,
        }
    }

    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
