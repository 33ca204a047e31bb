use crate::comparison::{build_rows, ComparisonData, ComparisonRow, Winner};
use crate::facility::{Facility, RouteLookup};
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Everything a writer needs to render one comparison.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub facility_a: String,
    pub facility_b: String,
    #[serde(flatten)]
    pub data: ComparisonData,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonReport {
    pub fn new(
        facility_a: &Facility,
        facility_b: &Facility,
        data: ComparisonData,
        directions_a: &RouteLookup,
        directions_b: &RouteLookup,
    ) -> Self {
        let rows = build_rows(&data, directions_a, directions_b);
        Self {
            facility_a: facility_a.display_name().to_string(),
            facility_b: facility_b.display_name().to_string(),
            data,
            rows,
        }
    }

    fn name_of(&self, side: Winner) -> &str {
        match side {
            Winner::A => &self.facility_a,
            Winner::B => &self.facility_b,
            Winner::Tie => "Tie",
        }
    }
}

pub trait OutputWriter {
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_table(report)?;
        self.write_reasons(&report.facility_a, &report.data.reasons_a)?;
        self.write_reasons(&report.facility_b, &report.data.reasons_b)?;
        self.write_scores(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "# {} vs {}",
            report.facility_a, report.facility_b
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_table(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "| Field | {} | {} | Winner |",
            report.facility_a, report.facility_b
        )?;
        writeln!(self.writer, "|-------|---|---|--------|")?;
        for row in &report.rows {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                row.label,
                emphasize(row.cell_a.text(), row.highlights(Winner::A)),
                emphasize(row.cell_b.text(), row.highlights(Winner::B)),
                report.name_of(row.winner)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_reasons(&mut self, name: &str, reasons: &[String]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Why {name}")?;
        writeln!(self.writer)?;
        if reasons.is_empty() {
            writeln!(self.writer, "_No advantages found._")?;
        }
        for reason in reasons {
            writeln!(self.writer, "- {reason}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "**Score:** {} {} / {} {}",
            report.facility_a, report.data.score_a, report.facility_b, report.data.score_b
        )?;
        Ok(())
    }
}

fn emphasize(text: &str, bold: bool) -> String {
    if bold {
        format!("**{text}**")
    } else {
        text.to_string()
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    config: FormattingConfig,
    formatter: ColoredFormatter,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            config,
            formatter: ColoredFormatter::new(config),
        }
    }

    fn build_table(&self, report: &ComparisonReport) -> Table {
        let styled = self.config.color.should_use_color();
        let mut table = Table::new();
        table
            .load_preset(if styled {
                presets::UTF8_FULL
            } else {
                presets::ASCII_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Field",
                report.facility_a.as_str(),
                report.facility_b.as_str(),
            ]);
        if styled {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }

        for row in &report.rows {
            table.add_row(vec![
                Cell::new(&row.label),
                value_cell(row.cell_a.text(), row.highlights(Winner::A), styled),
                value_cell(row.cell_b.text(), row.highlights(Winner::B), styled),
            ]);
        }
        table
    }

    fn write_reasons(&mut self, name: &str, reasons: &[String]) -> anyhow::Result<()> {
        let heading = self.formatter.header(&format!("Why {name}"));
        writeln!(self.writer, "{heading}")?;
        if reasons.is_empty() {
            writeln!(self.writer, "  {}", self.formatter.dim("No advantages found"))?;
        }
        for reason in reasons {
            writeln!(self.writer, "  • {}", reason)?;
        }
        Ok(())
    }
}

fn value_cell(text: &str, winner: bool, styled: bool) -> Cell {
    let cell = Cell::new(text);
    if winner && styled {
        cell.fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        let title = format!("{} vs {}", report.facility_a, report.facility_b);
        let table = self.build_table(report);
        writeln!(self.writer, "{}", self.formatter.bold(&title))?;
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;

        self.write_reasons(&report.facility_a, &report.data.reasons_a)?;
        self.write_reasons(&report.facility_b, &report.data.reasons_b)?;
        writeln!(self.writer)?;

        let overall = report.data.overall_winner();
        let summary = match overall {
            Winner::Tie => format!(
                "Overall: even match ({} - {})",
                report.data.score_a, report.data.score_b
            ),
            side => format!(
                "Overall: {} ({} - {})",
                report.name_of(side),
                report.data.score_a,
                report.data.score_b
            ),
        };
        let summary = if overall.is_tie() {
            self.formatter.warning(&summary)
        } else {
            self.formatter.success(&summary)
        };
        writeln!(self.writer, "{summary}")?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
