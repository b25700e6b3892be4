//! Indonesian-locale formatting shared by the on-screen projection and the
//! exported workbook, so the two surfaces never drift.

use chrono::{Datelike, NaiveDate};

/// Currency prefix used on every rendered money cell.
pub const CURRENCY_PREFIX: &str = "Rp. ";

/// Indonesian month name, 1-based. Out-of-range months render empty; periods
/// are validated before any formatting happens.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Januari",
        2 => "Februari",
        3 => "Maret",
        4 => "April",
        5 => "Mei",
        6 => "Juni",
        7 => "Juli",
        8 => "Agustus",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        12 => "Desember",
        _ => "",
    }
}

/// Formats a date as `5 Maret 2025` (day without leading zero).
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// Formats whole Rupiah as `Rp. 1.000` with `.` as the grouping separator.
pub fn format_rupiah(amount: i64) -> String {
    format!("{}{}", CURRENCY_PREFIX, group_thousands(amount))
}

/// Groups an integer amount into thousands, keeping a leading sign.
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, '.');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    if amount < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(950), "950");
        assert_eq!(group_thousands(1_000), "1.000");
        assert_eq!(group_thousands(2_500_000), "2.500.000");
        assert_eq!(group_thousands(-1_234_567), "-1.234.567");
    }

    #[test]
    fn formats_rupiah_with_prefix() {
        assert_eq!(format_rupiah(150_000), "Rp. 150.000");
    }

    #[test]
    fn formats_indonesian_dates_without_leading_zero() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_date(date), "5 Maret 2025");
    }
}
