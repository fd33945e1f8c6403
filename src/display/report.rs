//! Report formatting utilities for terminal output
//!
//! Renders the monthly expense breakdown.

use crate::reports::MonthGroup;

use super::truncate;

/// Format one month: a header line followed by its categories
pub fn format_month_group(group: &MonthGroup, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", group.month_name, group.year()));
    output.push_str(&format!(
        "{} categories | {} transactions | {}\n",
        group.category_count(),
        group.transaction_count,
        group.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&separator(48));
    output.push('\n');

    for category in &group.categories {
        output.push_str(&format!(
            "  {}  {:>5}  {:>14}\n",
            truncate(&category.display_name(), 22),
            format!("{}x", category.count),
            category.total.format_with_symbol(symbol)
        ));
    }

    output
}

/// Format the full monthly analysis
pub fn format_analysis(groups: &[MonthGroup], symbol: &str) -> String {
    if groups.is_empty() {
        return "No expenses found to analyse.\n".to_string();
    }

    groups
        .iter()
        .map(|group| format_month_group(group, symbol))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionId};
    use crate::reports::aggregate;

    #[test]
    fn test_format_analysis() {
        let transactions = vec![
            Transaction::new(
                TransactionId::from_raw(1),
                Money::from_cents(-1000),
                "coffee",
                "03/01/2024 08:00",
            ),
            Transaction::new(
                TransactionId::from_raw(2),
                Money::from_cents(-500),
                "Coffee",
                "04/01/2024 08:00",
            ),
        ];

        let formatted = format_analysis(&aggregate(&transactions), "R$");
        assert!(formatted.contains("January 2024"));
        assert!(formatted.contains("1 categories | 2 transactions | R$ 15.00"));
        assert!(formatted.contains("Coffee"));
        assert!(formatted.contains("2x"));
    }

    #[test]
    fn test_format_empty_analysis() {
        assert!(format_analysis(&[], "R$").contains("No expenses"));
    }
}
