//! Bounded top-N selection of bazaar products by estimated profit.
use hypixel::MarketRecord;

const SECONDS_PER_WEEK: f64 = 7.0 * 24.0 * 60.0 * 60.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RankedItem {
    pub name: String,
    pub amount: i64,
    pub investment: i64,
    pub margin: i64,
    pub profit: i64,
}

/// Products ordered by descending profit, never longer than its bound.
#[derive(Debug)]
pub struct TopList {
    items: Vec<RankedItem>,
    bound: usize,
}

/// Rounds half up, so -2.5 becomes -2.
fn round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

impl RankedItem {
    /// Derives the cycle-scale trade for one product.
    ///
    /// The bid price comes from `sell_summary` and the listing price from
    /// `buy_summary`: the API names each summary after the side that fills it
    /// instantly, so `sell_summary` holds the standing buy orders.
    pub fn from_record(record: &MarketRecord, refresh_interval_secs: f64) -> Self {
        let time_fraction = (1.0 / SECONDS_PER_WEEK) * refresh_interval_secs;
        let buy_price = record.sell_summary_top;
        let sell_price = record.buy_summary_top;

        let amount = round(record.buy_moving_week * time_fraction);
        let investment = round(amount as f64 * buy_price);

        Self {
            name: record.product_id.clone(),
            amount,
            investment,
            margin: round(sell_price - buy_price),
            profit: round(amount as f64 * sell_price - investment as f64),
        }
    }
}

impl TopList {
    pub fn new(bound: usize) -> Self {
        Self {
            items: Vec::new(),
            bound,
        }
    }

    /// Inserts before the first item with a strictly lower profit, so earlier
    /// items win ties, then drops whatever falls past the bound.
    pub fn insert(&mut self, item: RankedItem) {
        let position = self
            .items
            .iter()
            .position(|ranked| ranked.profit < item.profit)
            .unwrap_or(self.items.len());

        if position >= self.bound {
            return;
        }

        self.items.insert(position, item);
        self.items.truncate(self.bound);
    }

    pub fn items(&self) -> &[RankedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn rank(records: &[MarketRecord], refresh_interval_secs: f64, top_n: usize) -> TopList {
    let mut top = TopList::new(top_n);
    for record in records {
        top.insert(RankedItem::from_record(record, refresh_interval_secs));
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(id: &str, sell_top: f64, buy_top: f64, volume: f64) -> MarketRecord {
        MarketRecord {
            product_id: id.to_string(),
            sell_summary_top: sell_top,
            buy_summary_top: buy_top,
            buy_moving_week: volume,
        }
    }

    fn item(name: &str, profit: i64) -> RankedItem {
        RankedItem {
            name: name.to_string(),
            amount: 0,
            investment: 0,
            margin: 0,
            profit,
        }
    }

    #[test]
    fn formula_matches_worked_example() {
        let ranked = RankedItem::from_record(&record("X", 10.0, 15.0, 7000.0), 60.0);
        assert_eq!(ranked.amount, 1);
        assert_eq!(ranked.investment, 10);
        assert_eq!(ranked.margin, 5);
        assert_eq!(ranked.profit, 5);
    }

    #[test]
    fn empty_order_book_yields_zeroes() {
        let ranked = RankedItem::from_record(&record("EMPTY", 0.0, 0.0, 50_000.0), 60.0);
        assert_eq!(ranked.margin, 0);
        assert_eq!(ranked.investment, 0);
        assert_eq!(ranked.profit, 0);
    }

    #[test]
    fn negative_halves_round_up() {
        assert_eq!(round(-2.5), -2);
        assert_eq!(round(2.5), 3);
        assert_eq!(round(0.81), 1);
        let ranked = RankedItem::from_record(&record("NEG", 10.5, 8.0, 0.0), 60.0);
        assert_eq!(ranked.margin, -2);
    }

    #[test]
    fn empty_input_gives_empty_list() {
        assert!(rank(&[], 60.0, 10).is_empty());
    }

    #[test]
    fn zero_bound_keeps_nothing() {
        let records = [record("A", 1.0, 2.0, 1_000_000.0)];
        assert!(rank(&records, 60.0, 0).is_empty());
    }

    #[test]
    fn zero_profit_items_fill_a_short_list() {
        let records = [record("A", 0.0, 0.0, 0.0), record("B", 0.0, 0.0, 0.0)];
        let top = rank(&records, 60.0, 10);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn ties_keep_first_seen_ahead() {
        let mut top = TopList::new(2);
        top.insert(item("first", 5));
        top.insert(item("second", 5));
        top.insert(item("third", 5));
        let names: Vec<_> = top.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn higher_profit_pushes_out_the_last() {
        let mut top = TopList::new(3);
        for (name, profit) in [("a", 10), ("b", 30), ("c", 20), ("d", 25), ("e", 5)] {
            top.insert(item(name, profit));
        }
        let names: Vec<_> = top.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["b", "d", "c"]);
    }

    proptest! {
        #[test]
        fn list_is_bounded_sorted_and_holds_the_best(
            profits in proptest::collection::vec(-1000i64..1000, 0..60),
            bound in 0usize..15,
        ) {
            let mut top = TopList::new(bound);
            for (index, profit) in profits.iter().enumerate() {
                top.insert(item(&index.to_string(), *profit));
            }

            prop_assert!(top.len() <= bound);
            prop_assert_eq!(top.len(), bound.min(profits.len()));
            prop_assert!(top.items().windows(2).all(|w| w[0].profit >= w[1].profit));

            // Stable sort by descending profit gives first-seen-wins on ties.
            let mut expected: Vec<(usize, i64)> = profits.iter().copied().enumerate().collect();
            expected.sort_by(|a, b| b.1.cmp(&a.1));
            expected.truncate(bound);
            let expected: Vec<String> = expected.iter().map(|(i, _)| i.to_string()).collect();
            let actual: Vec<String> = top.items().iter().map(|i| i.name.clone()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
