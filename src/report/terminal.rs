use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use super::{AssessmentReport, FactorReport};
use crate::models::{OverallVerdict, RiskLevel};

/// Inner width of the summary box.
const BOX_WIDTH: usize = 60;
/// Room left for factor names after the count columns.
const NAMES_WIDTH: usize = BOX_WIDTH - 28;

/// Render a colored terminal report.
pub fn render(report: &AssessmentReport, verbose: bool, quiet: bool) -> Result<()> {
    let verdict = colored_verdict(report.verdict);

    if quiet {
        println!(
            "Overall: {}  High: {}  Moderate: {}",
            verdict,
            report.counts.high.to_string().red(),
            report.counts.moderate.to_string().yellow(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "perio-risk".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Periodontal Risk Assessment (PRA)\n");

    // Summary box
    let border = "─".repeat(BOX_WIDTH + 3);
    println!(" ┌{}┐", border);
    println!(" │  {}{} │", "SUMMARY".bold(), " ".repeat(BOX_WIDTH - "SUMMARY".len()));
    println!(
        " │  {:<w$} │",
        format!("Overall risk        : {}", report.verdict),
        w = BOX_WIDTH
    );
    println!(
        " │  {} {:<w$} │",
        "▲".red(),
        count_row("High factors", report.counts.high, &factor_names(report, RiskLevel::High)),
        w = BOX_WIDTH - 2
    );
    println!(
        " │  {} {:<w$} │",
        "●".yellow(),
        count_row(
            "Moderate factors",
            report.counts.moderate,
            &factor_names(report, RiskLevel::Moderate)
        ),
        w = BOX_WIDTH - 2
    );
    println!(" └{}┘\n", border);

    let contributors: Vec<&FactorReport> = report
        .factors
        .iter()
        .filter(|f| verbose || f.level > RiskLevel::Low)
        .collect();

    if verbose {
        println!(" {} All factors:\n", "[FACTORS]".cyan().bold());
        render_table(&contributors);
        println!();
    } else if !contributors.is_empty() {
        println!(" {} Factors contributing to risk:\n", "[RISK]".yellow().bold());
        render_table(&contributors);
        println!();
    }

    println!(" Overall Risk Category: {}\n", verdict);

    Ok(())
}

fn render_table(rows: &[&FactorReport]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Factor").add_attribute(Attribute::Bold),
            Cell::new("Input").add_attribute(Attribute::Bold),
            Cell::new("Thresholds").add_attribute(Attribute::Bold),
            Cell::new("Risk").add_attribute(Attribute::Bold),
        ]);

    for row in rows {
        let thresholds = row
            .thresholds
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(row.label),
            Cell::new(&row.input),
            Cell::new(thresholds),
            Cell::new(format!("{} ({})", row.level, row.score))
                .fg(level_color(row.level))
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}

fn level_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Moderate => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

fn colored_verdict(verdict: OverallVerdict) -> ColoredString {
    let text = verdict.to_string();
    match verdict {
        OverallVerdict::LowRisk => text.green().bold(),
        OverallVerdict::ModerateRisk => text.yellow().bold(),
        OverallVerdict::HighRisk => text.red().bold(),
    }
}

fn count_row(label: &str, count: usize, names: &str) -> String {
    format!(" {:<17}: {:>4}  {}", label, count, names)
}

/// Bracketed factor labels, shortened with `+N more` to fit [`NAMES_WIDTH`].
fn factor_names(report: &AssessmentReport, level: RiskLevel) -> String {
    let names: Vec<&str> = report
        .factors
        .iter()
        .filter(|f| f.level == level)
        .map(|f| f.label)
        .collect();

    if names.is_empty() {
        return String::new();
    }

    let full = format!("[{}]", names.join(", "));
    if full.chars().count() <= NAMES_WIDTH {
        return full;
    }

    // Leave room for ", +N more"
    let budget = NAMES_WIDTH - ", +9 more".len();
    let mut shown: Vec<&str> = Vec::new();
    let mut width = "[]".len();
    for name in &names {
        let extra = name.chars().count() + if shown.is_empty() { 0 } else { 2 };
        if width + extra > budget {
            break;
        }
        width += extra;
        shown.push(name);
    }

    let hidden = names.len() - shown.len();
    if shown.is_empty() {
        format!("[+{} more]", hidden)
    } else {
        format!("[{}, +{} more]", shown.join(", "), hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assessment, SmokingCategory, SystemicRisk};
    use crate::risk::assess;

    #[test]
    fn test_factor_names() {
        let inputs = Assessment {
            systemic: SystemicRisk::Present,
            smoking: SmokingCategory::TwentyPlusPerDay,
            ..Assessment::default()
        };
        let report = AssessmentReport::new(&inputs, &assess(&inputs));

        assert_eq!(
            factor_names(&report, RiskLevel::High),
            "[Systemic Risk, Smoking]"
        );
        assert_eq!(factor_names(&report, RiskLevel::Low), "[Tooth Loss]");
    }

    fn all_high_report() -> AssessmentReport {
        let inputs = Assessment {
            bop: 30.0,
            residual_pockets: 9.0,
            teeth_lost: 9.0,
            bone_loss_age: 1.2,
            systemic: SystemicRisk::Present,
            smoking: SmokingCategory::TwentyPlusPerDay,
        };
        AssessmentReport::new(&inputs, &assess(&inputs))
    }

    #[test]
    fn test_long_factor_list_fits_box() {
        let report = all_high_report();
        assert_eq!(report.counts.high, 6);

        let names = factor_names(&report, RiskLevel::High);
        assert_eq!(names, "[BOP, Residual Pockets, +4 more]");
        assert!(names.chars().count() <= NAMES_WIDTH);

        let row = count_row("High factors", report.counts.high, &names);
        assert!(row.chars().count() <= BOX_WIDTH - 2, "row overflows: {row}");
    }

    #[test]
    fn test_render_modes() {
        let report = all_high_report();
        assert!(render(&report, false, false).is_ok());
        assert!(render(&report, true, false).is_ok());
        assert!(render(&report, false, true).is_ok());

        let inputs = Assessment::default();
        let low = AssessmentReport::new(&inputs, &assess(&inputs));
        assert!(render(&low, true, false).is_ok());
    }
}
