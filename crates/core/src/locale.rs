use chrono::Weekday;

/// Provides the localized short weekday name used in display dates, e.g. the
/// `土` in `11/15(土)`.
///
/// Keeping this behind a trait isolates the locale from the sort/assembly
/// logic in [`crate::schedule`], which only needs *a* name per weekday.
pub trait WeekdayNames: Send + Sync {
    fn short_name(&self, weekday: Weekday) -> &'static str;
}

/// Japanese single-character weekday names (the service's default locale).
pub struct JapaneseWeekdays;

impl WeekdayNames for JapaneseWeekdays {
    fn short_name(&self, weekday: Weekday) -> &'static str {
        match weekday {
            Weekday::Mon => "月",
            Weekday::Tue => "火",
            Weekday::Wed => "水",
            Weekday::Thu => "木",
            Weekday::Fri => "金",
            Weekday::Sat => "土",
            Weekday::Sun => "日",
        }
    }
}

/// English three-letter weekday names.
pub struct EnglishWeekdays;

impl WeekdayNames for EnglishWeekdays {
    fn short_name(&self, weekday: Weekday) -> &'static str {
        match weekday {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

/// Resolves a locale tag to a weekday-name provider. Unrecognized tags fall
/// back to Japanese.
pub fn from_tag(tag: &str) -> Box<dyn WeekdayNames> {
    match tag {
        "en" => Box::new(EnglishWeekdays),
        _ => Box::new(JapaneseWeekdays),
    }
}
