use chrono::{DateTime, TimeZone};

/// Renders a date the way the prompt states it, e.g. `Monday, March 03, 2025`.
pub fn format_today<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format("%A, %B %d, %Y").to_string()
}

pub fn build_menu_prompt(pdf_text: &str, today: &str) -> String {
    format!(
        r#"Today is {today}.
Based on the following menu, what is in today's menu?

Menu Contents is:
{pdf_text}

Give me output in Dictionary format like this:

{{
    "Date": "",
    "Breakfast": "",
    "Lunch": "",
    "Dinner": ""
}}
"#
    )
}
