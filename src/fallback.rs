use std::io::{BufRead, Write};

use crate::{
    console::Console,
    extract::{Extractor, TableMatcher},
    prelude::*,
    provider::{QuoteError, fetch_quote},
    quantity::UnitPrice,
    quote::Grade,
    source::{FetchError, PriceSource},
};

/// Fetch the grade's price, falling back to manual input on any failure.
///
/// Errors only come from the console itself, never from validation.
#[instrument(skip_all, fields(grade = %grade))]
pub fn resolve_unit_price<S, M, R, W>(
    source: &S,
    extractor: &Extractor<M>,
    grade: Grade,
    console: &mut Console<R, W>,
) -> Result<UnitPrice>
where
    S: PriceSource + ?Sized,
    M: TableMatcher,
    R: BufRead,
    W: Write,
{
    match fetch_quote(source, extractor) {
        Ok(quote) => {
            if let Some(price) = quote.price(grade) {
                let effective_date = quote.effective_date();
                console.say(format!("已成功抓取中油官網資料 (生效日期: {effective_date})"))?;
                return Ok(price);
            }
            warn!("the quote does not include the grade");
            console.say("警告：網頁結構改變，找不到價格資料。")?;
        }
        Err(QuoteError::Fetch(FetchError::Status { url, status })) => {
            warn!(%url, status, "unexpected status");
            console.say(format!("網頁連線異常 (狀態碼：{status})"))?;
        }
        Err(QuoteError::Extraction(error)) => {
            warn!("failed to extract the price: {error}");
            console.say("警告：網頁結構改變，找不到價格資料。")?;
        }
        Err(error) => {
            let error = Error::from(error);
            warn!("failed to fetch the price: {error:#}");
            console.say(format!("自動抓取失敗：{error:#}"))?;
        }
    }
    console.say("無法取得線上價格，轉為手動輸入模式。")?;
    console.read_unit_price(grade)
}
