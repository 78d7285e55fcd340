use super::formatter::display_pattern;
use crate::engine::password::Password;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn passwords(passwords: &[Password]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "PASSWORD", "UPPER", "DIGITS", "LOWER"]);
        for (i, password) in passwords.iter().enumerate() {
            table.add_row(row![i + 1, password, password.upper(), password.digits(), password.lower()]);
        }
        table.printstd();

        Ok(())
    }

    pub fn patterns(strings: &[String]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "STRING"]);
        for (i, s) in strings.iter().enumerate() {
            table.add_row(row![i + 1, display_pattern(s)]);
        }
        table.printstd();

        Ok(())
    }
}
