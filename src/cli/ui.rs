use crate::core::fund::{FundRecord, RiskLevel};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Label,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Label => style(text).bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Colors a risk label by tier. Unrecognized labels are greyed out.
pub fn risk_cell(fund: &FundRecord) -> Cell {
    let color = match fund.risk_level() {
        Some(RiskLevel::Low) => Color::Green,
        Some(RiskLevel::Medium) => Color::Yellow,
        Some(RiskLevel::High) => Color::Red,
        None => Color::DarkGrey,
    };
    Cell::new(&fund.risk).fg(color)
}

/// Creates a cell for a return figure, green when non-negative and red otherwise.
pub fn return_cell(value: f64) -> Cell {
    let color = if value >= 0.0 { Color::Green } else { Color::Red };
    Cell::new(format!("{value:.2}"))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

/// Right aligned numeric cell.
pub fn number_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.2}")).set_alignment(CellAlignment::Right)
}

/// Builds the standard fund table: Fund, Category, Risk, Return_3Y, Volatility.
pub fn fund_table<'a>(funds: impl IntoIterator<Item = &'a FundRecord>) -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell("Fund"),
        header_cell("Category"),
        header_cell("Risk"),
        header_cell("Return_3Y"),
        header_cell("Volatility"),
    ]);

    for fund in funds {
        table.add_row(vec![
            Cell::new(&fund.name),
            Cell::new(&fund.category),
            risk_cell(fund),
            return_cell(fund.return_3y),
            number_cell(fund.volatility),
        ]);
    }
    table
}
