use super::{Content, UserRole};
use time::{Date, Month};

///
/// Conjunctive predicate selecting accounts that should receive
/// an alert about the content.
///
#[derive(Debug, Clone, PartialEq)]
pub struct RecipientsFilter {
    pub role: UserRole,
    pub vip_only: bool,
    /// Only accounts born on this day or earlier match
    pub born_on_or_before: Option<Date>,
}

impl RecipientsFilter {
    ///
    /// Derives filter from content restrictions.
    /// Age cutoff is counted back from `today`.
    ///
    pub fn for_content(content: &Content, today: Date) -> Self {
        let born_on_or_before = match content.min_age {
            0 => None,
            min_age => Some(years_before(today, min_age)),
        };

        Self {
            role: UserRole::RegularUser,
            vip_only: content.vip_only,
            born_on_or_before,
        }
    }
}

/// 29 February falls back to 28 February in non-leap years
fn years_before(date: Date, years: u32) -> Date {
    let years = i32::try_from(years).unwrap_or(i32::MAX);
    let year = date.year().saturating_sub(years);

    date.replace_year(year)
        .or_else(|_| Date::from_calendar_date(year, Month::February, 28))
        .unwrap_or(Date::MIN)
}
