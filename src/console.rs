use std::{
    fmt::Display,
    io::{BufRead, StdinLock, Stdout, Write, stdin, stdout},
};

use clap::ValueEnum;
use enumset::EnumSet;
use itertools::Itertools;

use crate::{prelude::*, quantity::UnitPrice, quote::Grade};

/// Line-oriented user dialogue.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(stdin().lock(), stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl Display) -> Result {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Ask for a line, `None` when the input is closed.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line).context("failed to read the input")? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Keep asking until the input is a positive price.
    #[instrument(skip_all, fields(grade = %grade))]
    pub fn read_unit_price(&mut self, grade: Grade) -> Result<UnitPrice> {
        loop {
            let Some(input) = self.prompt(&format!(">> 請手動輸入今日 '{grade}無鉛汽油' 單價："))?
            else {
                bail!("the input was closed before a valid price was entered");
            };
            match input.parse::<UnitPrice>() {
                Ok(price) if price.is_positive() => return Ok(price),
                Ok(_) => self.say("油價必須大於 0，請重新輸入。")?,
                Err(_) => self.say("格式錯誤，請輸入數字 (例如: 26.8)。")?,
            }
        }
    }

    /// Keep asking until the input is a non-negative discount, empty input means no discount.
    pub fn read_discount(&mut self) -> Result<UnitPrice> {
        loop {
            let Some(input) =
                self.prompt("請輸入每公升折扣金額 (預設為0，直接按 Enter 跳過): ")?
            else {
                return Ok(UnitPrice::ZERO);
            };
            if input.is_empty() {
                return Ok(UnitPrice::ZERO);
            }
            match input.parse::<UnitPrice>() {
                Ok(discount) if !discount.is_negative() => return Ok(discount),
                Ok(_) => self.say("折扣不可為負數，請重新輸入。")?,
                Err(_) => self.say("折扣輸入錯誤，請輸入數字 (例如: 1.5)。")?,
            }
        }
    }

    /// Ask for one of the grades, `None` on empty or closed input.
    pub fn read_grade(&mut self, grades: EnumSet<Grade>) -> Result<Option<Grade>> {
        let choices = grades.iter().join("/");
        loop {
            let Some(input) = self.prompt(&format!("請選擇油品 ({choices}，直接按 Enter 結束): "))?
            else {
                return Ok(None);
            };
            if input.is_empty() {
                return Ok(None);
            }
            match Grade::from_str(&input, true) {
                Ok(grade) if grades.contains(grade) => return Ok(Some(grade)),
                _ => self.say(format!("請輸入 {choices} 其中之一。"))?,
            }
        }
    }
}
