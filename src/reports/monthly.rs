//! Monthly Expense Report
//!
//! Groups expenses by calendar month and by category key (the trimmed,
//! lowercased description). Categories are ranked by how often they occur,
//! not by how much was spent, so small habitual expenses surface.

use std::collections::HashMap;

use chrono::Month;
use tracing::debug;

use crate::models::{Money, Transaction};

/// Shown in place of a month name when the stored month is outside 1-12
pub const INVALID_MONTH: &str = "Invalid month";

/// Expenses of one category within a month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    /// Trimmed, lowercased description
    pub category_key: String,
    /// Number of expenses
    pub count: usize,
    /// Sum of absolute amounts
    pub total: Money,
}

impl CategorySummary {
    /// Category key in title case, for display
    ///
    /// A letter is capitalized when it does not follow another letter, so
    /// `pão-de-queijo` becomes `Pão-De-Queijo`.
    pub fn display_name(&self) -> String {
        let mut name = String::with_capacity(self.category_key.len());
        let mut after_letter = false;
        for c in self.category_key.chars() {
            if after_letter {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            after_letter = c.is_alphabetic();
        }
        name
    }
}

/// Expense breakdown of one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    /// `YYYY-MM`
    pub year_month: String,
    /// Calendar month name, or [`INVALID_MONTH`]
    pub month_name: String,
    /// Sum of category totals
    pub total_spent: Money,
    /// Sum of category counts
    pub transaction_count: usize,
    /// Most frequent first
    pub categories: Vec<CategorySummary>,
}

impl MonthGroup {
    /// Number of distinct categories
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Year portion of `year_month`
    pub fn year(&self) -> &str {
        self.year_month
            .split_once('-')
            .map(|(year, _)| year)
            .unwrap_or(&self.year_month)
    }
}

/// English name of a 1-based month number
pub fn month_name(month: u32) -> Option<&'static str> {
    let month = Month::try_from(u8::try_from(month).ok()?).ok()?;
    Some(month.name())
}

/// Build the monthly breakdown of all expenses in `transactions`
///
/// Entries whose creation date cannot be read are skipped. Months come out
/// most recent first; within a month categories are ordered by count,
/// ties keeping the order in which they were first seen.
pub fn aggregate(transactions: &[Transaction]) -> Vec<MonthGroup> {
    // (year_month, category_key) -> index into `buckets`
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut buckets: Vec<(String, u32, CategorySummary)> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let Some((year, month)) = parse_year_month(txn.created_date()) else {
            debug!(
                id = %txn.id,
                created_at = %txn.created_at,
                "skipping expense with unreadable date"
            );
            continue;
        };

        let year_month = format!("{:04}-{:02}", year, month);
        let key = (year_month.clone(), txn.category_key());

        let slot = *index.entry(key).or_insert_with_key(|(_, category_key)| {
            buckets.push((
                year_month,
                month,
                CategorySummary {
                    category_key: category_key.clone(),
                    count: 0,
                    total: Money::zero(),
                },
            ));
            buckets.len() - 1
        });

        let summary = &mut buckets[slot].2;
        summary.count += 1;
        summary.total += txn.amount.abs();
    }

    let mut groups: Vec<MonthGroup> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();

    for (year_month, month, summary) in buckets {
        let slot = *group_index.entry(year_month.clone()).or_insert_with(|| {
            groups.push(MonthGroup {
                month_name: month_name(month).unwrap_or(INVALID_MONTH).to_string(),
                year_month,
                total_spent: Money::zero(),
                transaction_count: 0,
                categories: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.total_spent += summary.total;
        group.transaction_count += summary.count;
        group.categories.push(summary);
    }

    // Vec::sort_by is stable, which keeps first-seen order among equal counts
    for group in &mut groups {
        group.categories.sort_by(|a, b| b.count.cmp(&a.count));
    }
    groups.sort_by(|a, b| b.year_month.cmp(&a.year_month));

    groups
}

/// Read `(year, month)` out of a `DD/MM/YYYY` date
fn parse_year_month(date: &str) -> Option<(u32, u32)> {
    let mut parts = date.split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let number = |part: &str| -> Option<u32> {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    };

    number(day)?;
    Some((number(year)?, number(month)?))
}
