//! Locale-dependent date, time and number formatting

use chrono::{
    Datelike,
    Timelike,
};

/// Order of day, month and year in a short date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
}

/// Short date, medium time and decimal formatting rules of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    pub date_order: DateOrder,
    pub date_separator: &'static str,
    /// Zero-pad day and month.
    pub pad_date: bool,
    /// 12-hour clock with `AM`/`PM` suffix.
    pub hour12: bool,
    pub decimal_separator: char,
    pub group_separator: &'static str,
}

/// Fraction digit bounds for [`LocaleFormat::format_number_with`].
///
/// Trailing zeros are removed down to `minimum_fraction_digits`. A maximum
/// below the minimum is raised to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberOptions {
    pub minimum_fraction_digits: usize,
    pub maximum_fraction_digits: usize,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self { minimum_fraction_digits: 0, maximum_fraction_digits: 3 }
    }
}

/// German
const DE: LocaleFormat = LocaleFormat {
    date_order: DateOrder::DayMonthYear,
    date_separator: ".",
    pad_date: false,
    hour12: false,
    decimal_separator: ',',
    group_separator: ".",
};

/// US English
const EN: LocaleFormat = LocaleFormat {
    date_order: DateOrder::MonthDayYear,
    date_separator: "/",
    pad_date: false,
    hour12: true,
    decimal_separator: '.',
    group_separator: ",",
};

/// British English
const EN_GB: LocaleFormat = LocaleFormat {
    date_order: DateOrder::DayMonthYear,
    date_separator: "/",
    pad_date: true,
    hour12: false,
    decimal_separator: '.',
    group_separator: ",",
};

/// French
const FR: LocaleFormat = LocaleFormat {
    date_order: DateOrder::DayMonthYear,
    date_separator: "/",
    pad_date: true,
    hour12: false,
    decimal_separator: ',',
    group_separator: "\u{202f}",
};

/// Spanish and Italian
const ES: LocaleFormat = LocaleFormat {
    date_order: DateOrder::DayMonthYear,
    date_separator: "/",
    pad_date: false,
    hour12: false,
    decimal_separator: ',',
    group_separator: ".",
};

/// Dutch
const NL: LocaleFormat = LocaleFormat {
    date_order: DateOrder::DayMonthYear,
    date_separator: "-",
    pad_date: false,
    hour12: false,
    decimal_separator: ',',
    group_separator: ".",
};

/// Japanese and Chinese
const JA: LocaleFormat = LocaleFormat {
    date_order: DateOrder::YearMonthDay,
    date_separator: "/",
    pad_date: false,
    hour12: false,
    decimal_separator: '.',
    group_separator: ",",
};

/// Known locales. Exact identifiers are matched before base languages.
const FORMATS: &[(&str, LocaleFormat)] = &[
    ("de", DE),
    ("en", EN),
    ("en-GB", EN_GB),
    ("es", ES),
    ("fr", FR),
    ("it", ES),
    ("ja", JA),
    ("nl", NL),
    ("zh", JA),
];

impl LocaleFormat {
    /// Formatting rules for `locale`, looked up by exact identifier, then by
    /// the part before the first `-`.
    #[must_use]
    pub fn resolve(locale: &str) -> Option<Self> {
        let lookup = |id: &str| FORMATS.iter().find(|(known, _)| *known == id).map(|(_, format)| *format);
        lookup(locale).or_else(|| locale.split_once('-').and_then(|(base, _)| lookup(base)))
    }

    /// Like [`LocaleFormat::resolve`], falling back to German rules for
    /// unknown identifiers (the reference locale `meta` included).
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        Self::resolve(locale).unwrap_or(DE)
    }

    /// Numeric short date such as `20.12.2022` or `12/20/2022`.
    #[must_use]
    pub fn format_date(&self, date: &impl Datelike) -> String {
        let (day, month) = if self.pad_date {
            (format!("{:02}", date.day()), format!("{:02}", date.month()))
        } else {
            (date.day().to_string(), date.month().to_string())
        };
        let year = date.year().to_string();
        let parts = match self.date_order {
            DateOrder::DayMonthYear => [day, month, year],
            DateOrder::MonthDayYear => [month, day, year],
            DateOrder::YearMonthDay => [year, month, day],
        };
        parts.join(self.date_separator)
    }

    /// Time with seconds such as `19:15:30` or `7:15:30 PM`.
    #[must_use]
    pub fn format_time(&self, time: &impl Timelike) -> String {
        if self.hour12 {
            let (pm, hour) = time.hour12();
            let suffix = if pm { "PM" } else { "AM" };
            format!("{hour}:{:02}:{:02} {suffix}", time.minute(), time.second())
        } else {
            format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
        }
    }

    /// Grouped decimal with at most three fraction digits, trailing zeros
    /// removed.
    #[must_use]
    pub fn format_number(&self, number: f64) -> String {
        self.format_number_with(number, NumberOptions::default())
    }

    /// Grouped decimal rounded to `options.maximum_fraction_digits`.
    #[must_use]
    pub fn format_number_with(&self, number: f64, options: NumberOptions) -> String {
        if number.is_nan() {
            return "NaN".to_string();
        }
        if number.is_infinite() {
            return if number.is_sign_negative() { "-∞" } else { "∞" }.to_string();
        }

        let minimum = options.minimum_fraction_digits;
        let maximum = options.maximum_fraction_digits.max(minimum);
        let fixed = format!("{:.*}", maximum, number.abs());
        let (integer, digits) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let trimmed = digits.trim_end_matches('0');
        let fraction = if trimmed.len() < minimum { digits.get(..minimum).unwrap_or(digits) } else { trimmed };

        let mut out = String::new();
        if number.is_sign_negative() && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
            out.push('-');
        }
        out.push_str(&group_digits(integer, self.group_separator));
        if !fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

/// Inserts `separator` between every group of three digits from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{
        NaiveDate,
        NaiveTime,
        TimeZone,
        Utc,
    };
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("en", "12/20/2022")]
    #[case("en-US", "12/20/2022")]
    #[case("en-GB", "20/12/2022")]
    #[case("de", "20.12.2022")]
    #[case("de-AT", "20.12.2022")]
    #[case("fr", "20/12/2022")]
    #[case("ja", "2022/12/20")]
    #[case("meta", "20.12.2022")]
    #[case("", "20.12.2022")]
    fn test_format_date(#[case] locale: &str, #[case] expected: &str) {
        let date = NaiveDate::from_ymd_opt(2022, 12, 20).unwrap();

        assert_eq!(LocaleFormat::for_locale(locale).format_date(&date), expected);
    }

    #[rstest]
    #[case("en-GB", "07/02/2022")]
    #[case("en", "2/7/2022")]
    #[case("de", "7.2.2022")]
    fn test_format_date_padding(#[case] locale: &str, #[case] expected: &str) {
        let date = Utc.with_ymd_and_hms(2022, 2, 7, 19, 15, 30).unwrap();

        assert_eq!(LocaleFormat::for_locale(locale).format_date(&date), expected);
    }

    #[rstest]
    #[case("en", 19, "7:15:30 PM")]
    #[case("en", 0, "12:15:30 AM")]
    #[case("en", 12, "12:15:30 PM")]
    #[case("de", 19, "19:15:30")]
    #[case("de", 7, "07:15:30")]
    #[case("meta", 19, "19:15:30")]
    fn test_format_time(#[case] locale: &str, #[case] hour: u32, #[case] expected: &str) {
        let time = NaiveTime::from_hms_opt(hour, 15, 30).unwrap();

        assert_eq!(LocaleFormat::for_locale(locale).format_time(&time), expected);
    }

    #[rstest]
    #[case("en", 1234.5, "1,234.5")]
    #[case("de", 1234.5, "1.234,5")]
    #[case("en", 1_234_567.891_2, "1,234,567.891")]
    #[case("de", 0.0, "0")]
    #[case("en", 12.0, "12")]
    #[case("en", 999.999_9, "1,000")]
    #[case("en", -1234.5, "-1,234.5")]
    #[case("en", -0.000_1, "0")]
    #[case("fr", 1234.5, "1\u{202f}234,5")]
    #[case("en", f64::NAN, "NaN")]
    #[case("en", f64::NEG_INFINITY, "-∞")]
    fn test_format_number(#[case] locale: &str, #[case] number: f64, #[case] expected: &str) {
        assert_eq!(LocaleFormat::for_locale(locale).format_number(number), expected);
    }

    #[rstest]
    #[case("en", 1234.567_8, 0, 2, "1,234.57")]
    #[case("en", 12.0, 2, 2, "12.00")]
    #[case("de", 12.5, 2, 4, "12,50")]
    #[case("de", 1234.4, 0, 0, "1.234")]
    #[case("en", 0.123_456, 0, 5, "0.12346")]
    #[case("en", 1.5, 3, 1, "1.500")]
    fn test_format_number_with_options(
        #[case] locale: &str,
        #[case] number: f64,
        #[case] minimum_fraction_digits: usize,
        #[case] maximum_fraction_digits: usize,
        #[case] expected: &str,
    ) {
        let options = NumberOptions { minimum_fraction_digits, maximum_fraction_digits };

        assert_eq!(LocaleFormat::for_locale(locale).format_number_with(number, options), expected);
    }

    #[rstest]
    #[case("de-DE", Some(DE))]
    #[case("en-GB", Some(EN_GB))]
    #[case("en-AU", Some(EN))]
    #[case("zz", None)]
    #[case("meta", None)]
    fn test_resolve(#[case] locale: &str, #[case] expected: Option<LocaleFormat>) {
        assert_eq!(LocaleFormat::resolve(locale), expected);
    }

    #[rstest]
    #[case("1", "1")]
    #[case("123", "123")]
    #[case("1234", "1,234")]
    #[case("123456", "123,456")]
    #[case("1234567", "1,234,567")]
    fn test_group_digits(#[case] digits: &str, #[case] expected: &str) {
        assert_eq!(group_digits(digits, ","), expected);
    }
}
