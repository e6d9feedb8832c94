/// Small rendering helpers shared by list screens
use contracts::shared::table::{includes_value, SortDirection};
use leptos::prelude::*;

/// Highlight the filter match inside a cell (case-insensitive, first match)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let needle = filter.trim();
    if needle.is_empty() || !includes_value(text, needle) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let lower = text.to_lowercase();
    let needle_lower = needle.to_lowercase();
    // byte offsets from the lowercased copy are only valid for ASCII text
    match lower.find(&needle_lower) {
        Some(start) if text.is_ascii() => {
            let end = start + needle_lower.len();
            let (before, rest) = text.split_at(start);
            let (matched, after) = rest.split_at(end - start);
            view! {
                <span>
                    {before.to_string()}
                    <mark class="table__match">{matched.to_string()}</mark>
                    {after.to_string()}
                </span>
            }
            .into_any()
        }
        _ => view! { <span>{text.to_string()}</span> }.into_any(),
    }
}

/// Sort indicator for a header
pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    direction.map(SortDirection::indicator).unwrap_or(" ⇅")
}

pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// `1234567.5` -> `1,234,567.50`
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234567.5), "1,234,567.50");
        assert_eq!(format_amount(-950.0), "-950.00");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(None), " ⇅");
        assert_eq!(get_sort_indicator(Some(SortDirection::Desc)), " ▼");
    }
}
