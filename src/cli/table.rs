use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl TableColumn {
    pub fn left(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
            align: Align::Left,
        }
    }

    pub fn right(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
            align: Align::Right,
        }
    }

    fn pad(&self, text: &str) -> String {
        match self.align {
            Align::Left => format!("{:<width$}", text, width = self.width),
            Align::Right => format!("{:>width$}", text, width = self.width),
        }
    }
}

/// Colour applied to a whole rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Positive,
    Negative,
    Section,
    Total,
}

#[derive(Debug, Clone)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub tone: Tone,
}

/// Simple table model used for rendering read-only overviews.
#[derive(Debug, Clone)]
pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new<T: Into<String>>(title: Option<T>, columns: Vec<TableColumn>) -> Self {
        Self {
            title: title.map(|value| value.into()),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>, tone: Tone) {
        self.rows.push(TableRow {
            cells: cells.into_iter().map(|value| value.into()).collect(),
            tone,
        });
    }

    /// A label spanning the row with every other cell left blank.
    pub fn add_section(&mut self, label: impl Into<String>) {
        self.add_row(vec![label.into()], Tone::Section);
    }

    fn total_width(&self) -> usize {
        self.columns.iter().map(|col| col.width + 1).sum::<usize>().max(1)
    }

    fn render_cells(&self, cells: &[String]) -> String {
        let line = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| column.pad(cells.get(idx).map(String::as_str).unwrap_or("")))
            .collect::<Vec<_>>()
            .join(" ");
        line.trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let mut out = Vec::new();
        if let Some(title) = &self.title {
            out.push(title.bold().to_string());
        }
        let rule = "-".repeat(self.total_width());
        let headers: Vec<String> = self.columns.iter().map(|col| col.header.clone()).collect();
        out.push(rule.clone());
        out.push(self.render_cells(&headers).bold().to_string());
        out.push(rule);
        for row in &self.rows {
            let line = match row.tone {
                Tone::Section => row.cells.first().cloned().unwrap_or_default(),
                _ => self.render_cells(&row.cells),
            };
            let styled = match row.tone {
                Tone::Plain => line,
                Tone::Positive => line.green().to_string(),
                Tone::Negative => line.red().to_string(),
                Tone::Section => line.bold().underline().to_string(),
                Tone::Total => line.bold().to_string(),
            };
            out.push(styled);
        }
        out.join("\n")
    }
}
