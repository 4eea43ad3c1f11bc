//! # Renderers
//!
//! Each region has a pure display-model function (state slice in, plain
//! strings out) and an `apply_*` function writing that model into the
//! [`Page`]. A `None` slice leaves the page untouched, so the render path
//! can be called at any point of the load.

use chrono::{DateTime, Datelike, Utc};

use crate::api::{DashboardStats, Holder, PoolId, StakingSnapshot, Transaction};
use crate::format::{self, beans, format_number, format_percent_plain, short, time_ago_at, usd};
use crate::page::{ids, pool_element, Page, TableCell, TableRow};
use crate::simulator::SimulatorView;

pub const NO_TRANSACTIONS: &str = "No recent transactions found.";
pub const NO_HOLDERS: &str = "No holder data available.";
pub const NOT_CONNECTED: &str = "Not connected";

/// Class marking the hash column of the transactions table
pub const HASH_CELL: &str = "hash-cell";

/// `(element id, text)` pairs for the header stat cards
pub fn dashboard_view(stats: &DashboardStats) -> Vec<(&'static str, String)> {
    vec![
        (ids::TOTAL_SUPPLY, format_number(stats.total_supply, 0)),
        (ids::CIRCULATING_SUPPLY, format_number(stats.circulating_supply, 0)),
        (ids::TOTAL_BURNED, format_number(stats.total_burned, 0)),
        (ids::TOTAL_REFLECTIONS, format_number(stats.total_reflections, 0)),
        (ids::WALLET_COUNT, format_number(stats.holder_count as f64, 0)),
        (ids::TX_COUNT, format_number(stats.tx_count as f64, 0)),
        (ids::MARKET_CAP, usd(stats.market_cap_usd)),
        (ids::TOKEN_PRICE, format!("${}", format_number(stats.token_price_usd, 4))),
        (ids::VOL_24H, format!("{} / 24h", usd(stats.volume_24h_usd))),
        (ids::BURN_24H, beans(stats.burned_24h)),
        (ids::REFL_24H, beans(stats.reflections_24h)),
    ]
}

pub fn apply_dashboard_stats(page: &mut Page, stats: Option<&DashboardStats>) {
    let Some(stats) = stats else { return };
    for (id, text) in dashboard_view(stats) {
        page.set_text(id, text);
    }
}

pub fn transaction_rows(txs: &[Transaction], now: DateTime<Utc>) -> Vec<TableRow> {
    if txs.is_empty() {
        return vec![TableRow::Placeholder {
            message: NO_TRANSACTIONS.to_string(),
            col_span: ids::TX_COLUMNS,
        }];
    }

    txs.iter()
        .map(|tx| {
            TableRow::Cells(vec![
                TableCell::with_class(short(&tx.hash), HASH_CELL),
                TableCell::new(short(&tx.from)),
                TableCell::new(short(&tx.to)),
                TableCell::new(beans(tx.amount)),
                TableCell::new(time_ago_at(tx.timestamp, now)),
            ])
        })
        .collect()
}

pub fn apply_latest_tx(page: &mut Page, txs: Option<&[Transaction]>, now: DateTime<Utc>) {
    let Some(txs) = txs else { return };
    page.replace_rows(ids::LATEST_TX_BODY, transaction_rows(txs, now));
}

pub fn holder_rows(holders: &[Holder]) -> Vec<TableRow> {
    if holders.is_empty() {
        return vec![TableRow::Placeholder {
            message: NO_HOLDERS.to_string(),
            col_span: ids::HOLDER_COLUMNS,
        }];
    }

    holders
        .iter()
        .enumerate()
        .map(|(i, holder)| {
            let share = if holder.share.is_finite() {
                format!("{:.2}%", holder.share)
            } else {
                format!("{}%", format::PLACEHOLDER)
            };
            TableRow::Cells(vec![
                TableCell::new((i + 1).to_string()),
                TableCell::new(short(&holder.address)),
                TableCell::new(beans(holder.balance)),
                TableCell::new(share),
            ])
        })
        .collect()
}

pub fn apply_top_holders(page: &mut Page, holders: Option<&[Holder]>) {
    let Some(holders) = holders else { return };
    page.replace_rows(ids::HOLDERS_BODY, holder_rows(holders));
}

/// Staking overview text. The wallet shown is the one attached to the
/// snapshot, falling back to the session's connected address.
pub fn staking_overview_view(snapshot: &StakingSnapshot, connected: Option<&str>) -> Vec<(&'static str, String)> {
    let wallet = snapshot
        .wallet
        .address
        .as_deref()
        .or(connected)
        .map(short)
        .unwrap_or_else(|| NOT_CONNECTED.to_string());

    vec![
        (ids::CONNECTED_WALLET, wallet),
        (ids::WALLET_BALANCE, beans(snapshot.wallet.balance)),
        (ids::TOTAL_STAKED, beans(snapshot.overview.total_staked)),
        (ids::TOTAL_PENDING_REWARDS, beans(snapshot.overview.total_pending_rewards)),
    ]
}

pub fn apply_staking_overview(page: &mut Page, snapshot: Option<&StakingSnapshot>, connected: Option<&str>) {
    let Some(snapshot) = snapshot else { return };
    for (id, text) in staking_overview_view(snapshot, connected) {
        page.set_text(id, text);
    }
}

/// Per-pool stat text. Pools absent from the snapshot produce nothing.
pub fn pools_view(snapshot: &StakingSnapshot) -> Vec<(String, String)> {
    PoolId::ALL
        .into_iter()
        .filter_map(|id| snapshot.pool(id).map(|pool| (id, pool)))
        .flat_map(|(id, pool)| {
            [
                (pool_element(id, "apr"), format_percent_plain(pool.apr)),
                (pool_element(id, "tvl"), beans(pool.tvl)),
                (pool_element(id, "staked"), beans(pool.user_staked)),
                (pool_element(id, "rewards"), beans(pool.user_rewards)),
            ]
        })
        .collect()
}

pub fn apply_pools(page: &mut Page, snapshot: Option<&StakingSnapshot>) {
    let Some(snapshot) = snapshot else { return };
    for (id, text) in pools_view(snapshot) {
        page.set_text(&id, text);
    }
}

pub fn apply_simulator(page: &mut Page, view: &SimulatorView) {
    page.set_text(ids::SIM_APR, view.apr.as_str());
    page.set_text(ids::SIM_REWARDS, view.rewards.as_str());
    page.set_text(ids::SIM_TOTAL, view.total.as_str());
    page.set_text(ids::SIM_DAILY_YIELD, view.daily_yield.as_str());
}

pub fn apply_current_year(page: &mut Page, now: DateTime<Utc>) {
    page.set_text(ids::CURRENT_YEAR, now.year().to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DemoApi;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap()
    }

    fn tx(i: i64) -> Transaction {
        Transaction {
            hash: format!("0x{:013x}", 0xabc_0000_0000u64 + i as u64),
            from: format!("0xCoffeeFrom{}", 1000 + i),
            to: format!("0xCoffeeTo{}", 2000 + i),
            amount: 1000.0 + i as f64 * 10.0,
            timestamp: now() - Duration::minutes(10 * i),
        }
    }

    #[test]
    fn test_dashboard_fields() {
        let mut page = Page::standard();
        apply_dashboard_stats(&mut page, Some(&DemoApi::stats()));

        assert_eq!(page.text(ids::TOTAL_SUPPLY), Some("100,000,000"));
        assert_eq!(page.text(ids::CIRCULATING_SUPPLY), Some("92,500,000"));
        assert_eq!(page.text(ids::WALLET_COUNT), Some("1,842"));
        assert_eq!(page.text(ids::TX_COUNT), Some("25,137"));
        assert_eq!(page.text(ids::MARKET_CAP), Some("$1,250,000.00"));
        assert_eq!(page.text(ids::TOKEN_PRICE), Some("$0.0135"));
        assert_eq!(page.text(ids::VOL_24H), Some("$32,000.00 / 24h"));
        assert_eq!(page.text(ids::BURN_24H), Some("42,000.00 BEANS"));
        assert_eq!(page.text(ids::REFL_24H), Some("18,500.00 BEANS"));
        assert!(!page.element(ids::TOTAL_BURNED).unwrap().skeleton);
    }

    #[test]
    fn test_none_slices_leave_page_untouched() {
        let mut page = Page::standard();
        apply_dashboard_stats(&mut page, None);
        apply_latest_tx(&mut page, None, now());
        apply_top_holders(&mut page, None);
        apply_staking_overview(&mut page, None, Some("0xCoffeeHolics1234567890beef"));
        apply_pools(&mut page, None);

        assert!(page.element(ids::TOTAL_SUPPLY).unwrap().skeleton);
        assert!(page.element(ids::CONNECTED_WALLET).unwrap().skeleton);
        assert_eq!(page.rows(ids::LATEST_TX_BODY).map(|r| r.len()), Some(0));
        assert_eq!(page.rows(ids::HOLDERS_BODY).map(|r| r.len()), Some(0));
    }

    #[test]
    fn test_empty_lists_render_placeholder_row() {
        assert_eq!(
            transaction_rows(&[], now()),
            vec![TableRow::Placeholder { message: NO_TRANSACTIONS.to_string(), col_span: 5 }]
        );
        assert_eq!(
            holder_rows(&[]),
            vec![TableRow::Placeholder { message: NO_HOLDERS.to_string(), col_span: 4 }]
        );
    }

    #[test]
    fn test_transaction_rows_follow_input_order() {
        let txs: Vec<_> = (0..3).map(tx).collect();
        let rows = transaction_rows(&txs, now());
        assert_eq!(rows.len(), 3);

        let TableRow::Cells(cells) = &rows[1] else {
            panic!("expected cells");
        };
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0].class, Some(HASH_CELL));
        assert_eq!(cells[0].text, short(&txs[1].hash));
        assert_eq!(cells[1].text, "0xCoff...1001");
        assert_eq!(cells[2].text, "0xCoff...2001");
        assert_eq!(cells[3].text, "1,010.00 BEANS");
        assert_eq!(cells[4].text, "10 min ago");
    }

    #[test]
    fn test_rerender_replaces_rows() {
        let mut page = Page::standard();
        let txs: Vec<_> = (0..4).map(tx).collect();
        apply_latest_tx(&mut page, Some(&txs), now());
        apply_latest_tx(&mut page, Some(&txs[..2]), now());
        assert_eq!(page.rows(ids::LATEST_TX_BODY).map(|r| r.len()), Some(2));

        apply_latest_tx(&mut page, Some(&[]), now());
        assert_eq!(page.rows(ids::LATEST_TX_BODY).map(|r| r.len()), Some(1));
    }

    #[test]
    fn test_holder_rows_rank_and_share() {
        let rows = holder_rows(&DemoApi::holders());
        assert_eq!(rows.len(), 5);
        let TableRow::Cells(cells) = &rows[0] else {
            panic!("expected cells");
        };
        assert_eq!(cells[0].text, "1");
        assert_eq!(cells[1].text, "0xCafe...1111");
        assert_eq!(cells[2].text, "12,000,000.00 BEANS");
        assert_eq!(cells[3].text, "12.00%");

        let TableRow::Cells(cells) = &rows[4] else {
            panic!("expected cells");
        };
        assert_eq!(cells[0].text, "5");
        assert_eq!(cells[3].text, "2.25%");
    }

    #[test]
    fn test_staking_overview_connection_states() {
        let snapshot = DemoApi::staking();
        let view = staking_overview_view(&snapshot, None);
        assert_eq!(view[0], (ids::CONNECTED_WALLET, NOT_CONNECTED.to_string()));
        assert_eq!(view[1].1, "15,000.00 BEANS");
        assert_eq!(view[2].1, "8,000.00 BEANS");
        assert_eq!(view[3].1, "420.00 BEANS");

        let view = staking_overview_view(&snapshot, Some("0xCoffeeHolics1234567890beef"));
        assert_eq!(view[0].1, "0xCoff...beef");
    }

    #[test]
    fn test_pools_render_apr_plainly_and_skip_missing() {
        let mut page = Page::standard();
        let mut snapshot = DemoApi::staking();
        snapshot.pools.remove(&PoolId::NinetyDays);
        apply_pools(&mut page, Some(&snapshot));

        assert_eq!(page.text("pool-flexible-apr"), Some("12%"));
        assert_eq!(page.text("pool-30-apr"), Some("24%"));
        assert_eq!(page.text("pool-30-tvl"), Some("25,000.00 BEANS"));
        assert_eq!(page.text("pool-30-staked"), Some("3,000.00 BEANS"));
        assert_eq!(page.text("pool-30-rewards"), Some("150.00 BEANS"));
        assert!(page.element("pool-90-apr").unwrap().skeleton);
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let txs: Vec<_> = (0..5).map(tx).collect();
        assert_eq!(transaction_rows(&txs, now()), transaction_rows(&txs, now()));
        let snapshot = DemoApi::staking();
        assert_eq!(pools_view(&snapshot), pools_view(&snapshot));
    }

    #[test]
    fn test_current_year() {
        let mut page = Page::standard();
        apply_current_year(&mut page, now());
        assert_eq!(page.text(ids::CURRENT_YEAR), Some("2026"));
    }
}
