//! Price table extraction from the historical price page.
//!
//! The page has no stable identifiers, so the table is located by its header text
//! and the latest prices are read from the row right after the header.

use enumset::EnumSet;
use itertools::Itertools;
use rust_decimal::Decimal;
use scraper::{ElementRef, Html};
use thiserror::Error;

use crate::{
    prelude::*,
    quantity::UnitPrice,
    quote::{Grade, PriceQuote},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("no matching table found, the page layout may have changed")]
    NoMatchingTable,

    #[error("the price table has no data rows")]
    MissingDataRow,

    #[error("expected at least {expected} cells in the first data row, found {actual}")]
    InsufficientCells { expected: usize, actual: usize },

    #[error("{grade} price `{text}` is not a number")]
    InvalidPrice { grade: Grade, text: String },

    #[error("{grade} price {price:?} is not positive")]
    NonPositivePrice { grade: Grade, price: UnitPrice },
}

/// Decides whether a table is the price table, given its header cell texts.
pub trait TableMatcher {
    fn matches(&self, headers: &[String]) -> bool;
}

impl<F: Fn(&[String]) -> bool> TableMatcher for F {
    fn matches(&self, headers: &[String]) -> bool {
        self(headers)
    }
}

/// Matches a table when each of the grades is mentioned in one of the header cells.
#[derive(Copy, Clone)]
pub struct GradeHeaders(pub EnumSet<Grade>);

impl TableMatcher for GradeHeaders {
    fn matches(&self, headers: &[String]) -> bool {
        self.0
            .iter()
            .all(|grade| headers.iter().any(|header| header.contains(grade.header_label())))
    }
}

#[must_use]
pub struct Extractor<M = GradeHeaders> {
    grades: EnumSet<Grade>,
    matcher: M,
}

impl Extractor {
    pub const fn new(grades: EnumSet<Grade>) -> Self {
        Self { grades, matcher: GradeHeaders(grades) }
    }
}

impl<M: TableMatcher> Extractor<M> {
    pub fn with_matcher<N: TableMatcher>(self, matcher: N) -> Extractor<N> {
        Extractor { grades: self.grades, matcher }
    }

    /// Minimal cell count of the first data row.
    pub fn required_cells(&self) -> usize {
        self.grades.iter().map(Grade::column).max().unwrap_or(0) + 1
    }

    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn extract_str(&self, html: &str) -> Result<PriceQuote, ExtractionError> {
        self.extract(&Html::parse_document(html))
    }

    /// Extract the latest quote. The first matching table wins.
    #[instrument(skip_all, fields(grades = ?self.grades))]
    pub fn extract(&self, document: &Html) -> Result<PriceQuote, ExtractionError> {
        let table = descendants_named(document.root_element(), "table")
            .find(|table| {
                let headers = descendants_named(*table, "th").map(trimmed_text).collect_vec();
                self.matcher.matches(&headers)
            })
            .ok_or(ExtractionError::NoMatchingTable)?;
        let row = descendants_named(table, "tr").nth(1).ok_or(ExtractionError::MissingDataRow)?;
        let cells = descendants_named(row, "td").map(trimmed_text).collect_vec();

        let expected = self.required_cells();
        if cells.len() < expected {
            return Err(ExtractionError::InsufficientCells { expected, actual: cells.len() });
        }

        let prices = self
            .grades
            .iter()
            .map(|grade| parse_price(grade, &cells[grade.column()]).map(|price| (grade, price)))
            .collect::<Result<Vec<_>, ExtractionError>>()?;
        let effective_date = cells[0].clone();
        info!(%effective_date, n_prices = prices.len(), "extracted");
        Ok(PriceQuote::new(effective_date, prices))
    }
}

fn parse_price(grade: Grade, text: &str) -> Result<UnitPrice, ExtractionError> {
    let price = text
        .parse::<Decimal>()
        .map(UnitPrice)
        .map_err(|_| ExtractionError::InvalidPrice { grade, text: text.to_string() })?;
    if price.is_positive() {
        Ok(price)
    } else {
        Err(ExtractionError::NonPositivePrice { grade, price })
    }
}

/// All descendant elements with the tag name, in document order, excluding the parent itself.
fn descendants_named<'a>(
    parent: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |element| element.value().name() == name)
}

fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // language=html
    const PAGE: &str = r#"
        <html><body>
            <table class="nav"><tr><th>公告</th></tr><tr><td>油價資訊</td></tr></table>
            <table id="MyGridView">
                <tr>
                    <th>調價日期</th>
                    <th>92 無鉛汽油</th>
                    <th>95 無鉛汽油</th>
                    <th>98 無鉛汽油</th>
                </tr>
                <tr>
                    <td> 2026/10/13 </td>
                    <td>28.0</td>
                    <td>29.5</td>
                    <td>31.5</td>
                </tr>
                <tr>
                    <td>2026/10/06</td>
                    <td>27.8</td>
                    <td>29.3</td>
                    <td>31.3</td>
                </tr>
            </table>
        </body></html>
    "#;

    fn price(mantissa: i64, scale: u32) -> UnitPrice {
        UnitPrice(Decimal::new(mantissa, scale))
    }

    #[test]
    fn test_extract_single_grade_ok() -> Result {
        let quote = Extractor::new(Grade::Unleaded92.into()).extract_str(PAGE)?;
        assert_eq!(quote.effective_date(), "2026/10/13");
        assert_eq!(quote.prices().collect_vec(), [(Grade::Unleaded92, price(280, 1))]);
        Ok(())
    }

    #[test]
    fn test_extract_all_grades_ok() -> Result {
        let quote = Extractor::new(Grade::all()).extract_str(PAGE)?;
        assert_eq!(quote.price(Grade::Unleaded92), Some(price(280, 1)));
        assert_eq!(quote.price(Grade::Unleaded95), Some(price(295, 1)));
        Ok(())
    }

    #[test]
    fn test_no_tables() {
        let html = "<html><body><p>維護中</p></body></html>";
        let result = Extractor::new(Grade::all()).extract_str(html);
        assert_eq!(result, Err(ExtractionError::NoMatchingTable));
    }

    #[test]
    fn test_no_matching_header() {
        let html = "
            <table><tr><th>日期</th><th>超級柴油</th></tr><tr><td>1</td><td>2</td></tr></table>
        ";
        let result = Extractor::new(Grade::Unleaded92.into()).extract_str(html);
        assert_eq!(result, Err(ExtractionError::NoMatchingTable));
    }

    #[test]
    fn test_first_matching_table_wins() -> Result {
        let html = "
            <table><tr><th>92 無鉛汽油</th></tr><tr><td>a</td><td>26.1</td></tr></table>
            <table><tr><th>92 無鉛汽油</th></tr><tr><td>b</td><td>27.2</td></tr></table>
        ";
        let quote = Extractor::new(Grade::Unleaded92.into()).extract_str(html)?;
        assert_eq!(quote.effective_date(), "a");
        assert_eq!(quote.price(Grade::Unleaded92), Some(price(261, 1)));
        Ok(())
    }

    #[test]
    fn test_header_only() {
        let html = "<table><tr><th>日期</th><th>92 無鉛汽油</th></tr></table>";
        let result = Extractor::new(Grade::Unleaded92.into()).extract_str(html);
        assert_eq!(result, Err(ExtractionError::MissingDataRow));
    }

    #[test]
    fn test_insufficient_cells() {
        let html = "
            <table>
                <tr><th>日期</th><th>92 無鉛汽油</th><th>95 無鉛汽油</th></tr>
                <tr><td>2026/10/13</td><td>28.0</td></tr>
            </table>
        ";
        assert!(Extractor::new(Grade::Unleaded92.into()).extract_str(html).is_ok());
        assert_eq!(
            Extractor::new(Grade::all()).extract_str(html),
            Err(ExtractionError::InsufficientCells { expected: 3, actual: 2 }),
        );
    }

    #[test]
    fn test_invalid_price() {
        let html = "
            <table>
                <tr><th>日期</th><th>92 無鉛汽油</th></tr>
                <tr><td>2026/10/13</td><td>暫停供應</td></tr>
            </table>
        ";
        assert_eq!(
            Extractor::new(Grade::Unleaded92.into()).extract_str(html),
            Err(ExtractionError::InvalidPrice {
                grade: Grade::Unleaded92,
                text: "暫停供應".to_string()
            }),
        );
    }

    #[test]
    fn test_zero_price() {
        let html = "
            <table>
                <tr><th>日期</th><th>92 無鉛汽油</th></tr>
                <tr><td>2026/10/13</td><td>0</td></tr>
            </table>
        ";
        assert!(matches!(
            Extractor::new(Grade::Unleaded92.into()).extract_str(html),
            Err(ExtractionError::NonPositivePrice { grade: Grade::Unleaded92, .. }),
        ));
    }

    #[test]
    fn test_custom_matcher() -> Result {
        let extractor = Extractor::new(Grade::Unleaded92.into())
            .with_matcher(|headers: &[String]| headers.iter().any(|header| header == "公告"));
        let quote = extractor.extract_str(
            "<table><tr><th>公告</th></tr><tr><td>x</td><td>30</td></tr></table>",
        )?;
        assert_eq!(quote.price(Grade::Unleaded92), Some(price(30, 0)));
        Ok(())
    }

    #[test]
    fn test_required_cells() {
        assert_eq!(Extractor::new(Grade::Unleaded92.into()).required_cells(), 2);
        assert_eq!(Extractor::new(Grade::all()).required_cells(), 3);
    }
}
