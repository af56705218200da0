//! Overdue monthly fees.
//!
//! A month is due once it is over: in June, March through May must be paid. Only the
//! current season is checked, past seasons are considered settled.

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::config::DuesConfig;
use crate::models::{Player, PlayerId};

/// Paid calendar months (1-12) per player for one season.
pub type PaymentLedger = BTreeMap<PlayerId, BTreeSet<u32>>;

/// Months already over on `today` that carry a fee; empty outside the season year.
pub fn billed_months(season_year: i32, today: NaiveDate, dues: &DuesConfig) -> Vec<u32> {
    if season_year != today.year() {
        return Vec::new();
    }
    let last_closed = today.month() - 1;
    let last = dues.last_billed_month.min(last_closed);
    (dues.first_billed_month..=last).collect()
}

/// Unpaid months for every non-exempt player who owes anything.
pub fn overdue_months(
    players: &[Player],
    payments: &PaymentLedger,
    season_year: i32,
    today: NaiveDate,
    dues: &DuesConfig,
) -> BTreeMap<PlayerId, Vec<u32>> {
    let months = billed_months(season_year, today, dues);
    if months.is_empty() {
        return BTreeMap::new();
    }

    let nothing_paid = BTreeSet::new();
    let overdue: BTreeMap<PlayerId, Vec<u32>> = players
        .iter()
        .filter(|p| !p.is_fee_exempt)
        .filter_map(|p| {
            let paid = payments.get(&p.id).unwrap_or(&nothing_paid);
            let unpaid: Vec<u32> = months.iter().copied().filter(|m| !paid.contains(m)).collect();
            (!unpaid.is_empty()).then(|| (p.id.clone(), unpaid))
        })
        .collect();

    debug!(%today, billed = ?months, overdue = overdue.len(), "dues checked");
    overdue
}

pub fn overdue_players(
    players: &[Player],
    payments: &PaymentLedger,
    season_year: i32,
    today: NaiveDate,
    dues: &DuesConfig,
) -> BTreeSet<PlayerId> {
    overdue_months(players, payments, season_year, today, dues)
        .into_keys()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger(entries: &[(&str, &[u32])]) -> PaymentLedger {
        entries
            .iter()
            .map(|(id, months)| (PlayerId::from(*id), months.iter().copied().collect()))
            .collect()
    }

    #[test]
    fn test_billed_months() {
        let dues = DuesConfig::default();
        assert!(billed_months(2024, date(2024, 1, 15), &dues).is_empty());
        assert!(billed_months(2024, date(2024, 3, 31), &dues).is_empty());
        assert_eq!(billed_months(2024, date(2024, 4, 1), &dues), vec![3]);
        assert_eq!(billed_months(2024, date(2024, 6, 10), &dues), vec![3, 4, 5]);
        assert!(billed_months(2023, date(2024, 6, 10), &dues).is_empty());
    }

    #[test]
    fn test_overdue_detection() {
        let players = vec![
            Player::new("paid", "Paid", Position::Forward, 5),
            Player::new("late", "Late", Position::Forward, 5),
            Player::new("none", "None", Position::Forward, 5),
            Player::new("free", "Free", Position::Forward, 5).fee_exempt(),
        ];
        let payments = ledger(&[("paid", &[3, 4, 5]), ("late", &[3, 5])]);

        let months = overdue_months(&players, &payments, 2024, date(2024, 6, 10), &DuesConfig::default());
        assert_eq!(months.get(&PlayerId::from("late")), Some(&vec![4]));
        assert_eq!(months.get(&PlayerId::from("none")), Some(&vec![3, 4, 5]));
        assert!(!months.contains_key(&PlayerId::from("paid")));
        assert!(!months.contains_key(&PlayerId::from("free")));

        let ids = overdue_players(&players, &payments, 2024, date(2024, 6, 10), &DuesConfig::default());
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_december_caps_at_last_billed_month() {
        let dues = DuesConfig { first_billed_month: 3, last_billed_month: 11 };
        assert_eq!(billed_months(2024, date(2024, 12, 20), &dues).last(), Some(&11));
    }
}
