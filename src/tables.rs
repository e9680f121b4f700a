use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    calculator::{PriceTableRow, Volume},
    quote::PriceQuote,
};

#[must_use]
pub fn build_price_table(rows: &[PriceTableRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["總價 (元)", "公升數 (L)"]);
    for row in rows {
        let volume = Cell::new(row.volume).set_alignment(CellAlignment::Right);
        table.add_row(vec![
            Cell::new(row.total_spend).set_alignment(CellAlignment::Right),
            match row.volume {
                Volume::Liters(_) => volume,
                Volume::NonPositiveUnitPrice | Volume::Overflow => volume.fg(Color::Red),
            },
        ]);
    }
    table
}

#[must_use]
pub fn build_quote_table(quote: &PriceQuote) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["油品", "單價"]);
    for (grade, price) in quote.prices() {
        table.add_row(vec![
            Cell::new(grade.header_label()),
            Cell::new(price).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("生效日期").add_attribute(Attribute::Dim),
        Cell::new(quote.effective_date()).add_attribute(Attribute::Dim),
    ]);
    table
}
