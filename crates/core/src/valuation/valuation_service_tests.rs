//! Tests for summary and allocation math over in-memory repositories.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::NaiveDateTime;
    use rust_decimal_macros::dec;

    use crate::errors::{DatabaseError, Error, Result};
    use crate::fx::{Currency, FxConverter};
    use crate::holdings::{
        AssetType, Holding, HoldingRepositoryTrait, HoldingUpdate, NewHolding,
    };
    use crate::portfolios::{
        NewPortfolio, Portfolio, PortfolioRepositoryTrait, PortfolioUpdate,
    };
    use crate::valuation::{ValuationService, ValuationServiceTrait};

    // --- Mock PortfolioRepository ---

    struct MockPortfolioRepository {
        portfolios: Arc<Mutex<Vec<Portfolio>>>,
    }

    #[async_trait]
    impl PortfolioRepositoryTrait for MockPortfolioRepository {
        async fn create(&self, _new_portfolio: NewPortfolio) -> Result<Portfolio> {
            unimplemented!()
        }

        async fn update(&self, _update: PortfolioUpdate) -> Result<Portfolio> {
            unimplemented!()
        }

        async fn delete(&self, _portfolio_id: &str) -> Result<usize> {
            unimplemented!()
        }

        fn get_by_id(&self, portfolio_id: &str) -> Result<Portfolio> {
            self.portfolios
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == portfolio_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(portfolio_id.to_string()))
                })
        }

        fn list(&self) -> Result<Vec<Portfolio>> {
            Ok(self.portfolios.lock().unwrap().clone())
        }
    }

    // --- Mock HoldingRepository ---

    struct MockHoldingRepository {
        holdings: Arc<Mutex<Vec<Holding>>>,
    }

    #[async_trait]
    impl HoldingRepositoryTrait for MockHoldingRepository {
        async fn create(&self, _new_holding: NewHolding) -> Result<Holding> {
            unimplemented!()
        }

        async fn update(&self, _update: HoldingUpdate) -> Result<Holding> {
            unimplemented!()
        }

        async fn delete(&self, _holding_id: &str) -> Result<usize> {
            unimplemented!()
        }

        async fn delete_by_portfolio(&self, _portfolio_id: &str) -> Result<usize> {
            unimplemented!()
        }

        fn get_by_id(&self, _holding_id: &str) -> Result<Holding> {
            unimplemented!()
        }

        fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Holding>> {
            Ok(self
                .holdings
                .lock()
                .unwrap()
                .iter()
                .filter(|h| h.portfolio_id == portfolio_id)
                .cloned()
                .collect())
        }

        fn list_all(&self) -> Result<Vec<Holding>> {
            Ok(self.holdings.lock().unwrap().clone())
        }
    }

    fn ts() -> NaiveDateTime {
        NaiveDateTime::default()
    }

    fn portfolio(id: &str) -> Portfolio {
        Portfolio {
            id: id.to_string(),
            name: format!("Portfolio {}", id),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn holding(
        id: &str,
        portfolio_id: &str,
        asset_type: AssetType,
        shares: rust_decimal::Decimal,
        cost: rust_decimal::Decimal,
        cost_currency: Currency,
        price: rust_decimal::Decimal,
        price_currency: Currency,
    ) -> Holding {
        Holding {
            id: id.to_string(),
            portfolio_id: portfolio_id.to_string(),
            name: format!("Holding {}", id),
            ticker: None,
            asset_type,
            shares,
            average_cost: cost,
            average_cost_currency: cost_currency,
            current_price: price,
            current_price_currency: price_currency,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn service(
        portfolios: Vec<Portfolio>,
        holdings: Vec<Holding>,
        thb_per_usd: rust_decimal::Decimal,
    ) -> ValuationService {
        ValuationService::new(
            Arc::new(MockPortfolioRepository {
                portfolios: Arc::new(Mutex::new(portfolios)),
            }),
            Arc::new(MockHoldingRepository {
                holdings: Arc::new(Mutex::new(holdings)),
            }),
            Arc::new(FxConverter::new(thb_per_usd).unwrap()),
        )
    }

    #[test]
    fn test_summary_single_currency() {
        let svc = service(
            vec![portfolio("p1")],
            vec![
                holding("h1", "p1", AssetType::Stock, dec!(100), dec!(130), Currency::Thb, dec!(140), Currency::Thb),
                holding("h2", "p1", AssetType::Etf, dec!(10), dec!(500), Currency::Thb, dec!(450), Currency::Thb),
            ],
            dec!(36.5),
        );

        let summary = svc.summarize("p1").unwrap();
        assert_eq!(summary.holdings_count, 2);
        assert_eq!(summary.market_value, dec!(18500)); // 100*140 + 10*450
        assert_eq!(summary.cost_basis, dec!(18000)); // 100*130 + 10*500
        assert_eq!(summary.gain_loss, dec!(500));
        assert_eq!(summary.gain_loss_pct.round_dp(6), dec!(0.027778));
        assert_eq!(summary.currency, Currency::Thb);
    }

    #[test]
    fn test_summary_converts_usd_at_fixed_rate() {
        // 5 shares, cost 100 USD, price 110 USD, rate 30
        let svc = service(
            vec![portfolio("p1")],
            vec![holding("h1", "p1", AssetType::Stock, dec!(5), dec!(100), Currency::Usd, dec!(110), Currency::Usd)],
            dec!(30),
        );

        let summary = svc.summarize("p1").unwrap();
        assert_eq!(summary.market_value, dec!(16500)); // 5*110*30
        assert_eq!(summary.cost_basis, dec!(15000)); // 5*100*30
        assert_eq!(summary.gain_loss, dec!(1500));
        assert_eq!(summary.gain_loss_pct, dec!(0.1));
    }

    #[test]
    fn test_summary_mixed_cost_and_price_currencies() {
        // Cost in THB, price in USD on the same holding
        let svc = service(
            vec![portfolio("p1")],
            vec![holding("h1", "p1", AssetType::Stock, dec!(2), dec!(1000), Currency::Thb, dec!(40), Currency::Usd)],
            dec!(25),
        );

        let summary = svc.summarize("p1").unwrap();
        assert_eq!(summary.cost_basis, dec!(2000));
        assert_eq!(summary.market_value, dec!(2000)); // 2*40*25
        assert_eq!(summary.gain_loss, dec!(0));
        assert_eq!(summary.gain_loss_pct, dec!(0));
    }

    #[test]
    fn test_summary_empty_portfolio_is_all_zeros() {
        let svc = service(vec![portfolio("p1")], vec![], dec!(36.5));
        let summary = svc.summarize("p1").unwrap();
        assert_eq!(summary.holdings_count, 0);
        assert_eq!(summary.market_value, dec!(0));
        assert_eq!(summary.cost_basis, dec!(0));
        assert_eq!(summary.gain_loss_pct, dec!(0));
    }

    #[test]
    fn test_summary_zero_cost_guards_division() {
        // Free shares: no cost basis, gain percentage stays zero
        let svc = service(
            vec![portfolio("p1")],
            vec![holding("h1", "p1", AssetType::Stock, dec!(10), dec!(0), Currency::Thb, dec!(5), Currency::Thb)],
            dec!(36.5),
        );
        let summary = svc.summarize("p1").unwrap();
        assert_eq!(summary.market_value, dec!(50));
        assert_eq!(summary.cost_basis, dec!(0));
        assert_eq!(summary.gain_loss, dec!(50));
        assert_eq!(summary.gain_loss_pct, dec!(0));
    }

    #[test]
    fn test_summary_unknown_portfolio_is_not_found() {
        let svc = service(vec![], vec![], dec!(36.5));
        assert!(matches!(
            svc.summarize("ghost"),
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    #[test]
    fn test_summarize_all_groups_by_portfolio() {
        let svc = service(
            vec![portfolio("p1"), portfolio("p2"), portfolio("p3")],
            vec![
                holding("h1", "p1", AssetType::Stock, dec!(1), dec!(100), Currency::Thb, dec!(150), Currency::Thb),
                holding("h2", "p2", AssetType::Bond, dec!(3), dec!(1000), Currency::Thb, dec!(990), Currency::Thb),
                holding("h3", "p2", AssetType::Stock, dec!(1), dec!(10), Currency::Usd, dec!(20), Currency::Usd),
            ],
            dec!(30),
        );

        let summaries = svc.summarize_all().unwrap();
        assert_eq!(summaries.len(), 3);

        assert_eq!(summaries[0].portfolio_id, "p1");
        assert_eq!(summaries[0].market_value, dec!(150));

        assert_eq!(summaries[1].portfolio_id, "p2");
        assert_eq!(summaries[1].holdings_count, 2);
        assert_eq!(summaries[1].market_value, dec!(3570)); // 3*990 + 1*20*30
        assert_eq!(summaries[1].cost_basis, dec!(3300)); // 3*1000 + 1*10*30

        // Empty portfolio still gets a summary row
        assert_eq!(summaries[2].portfolio_id, "p3");
        assert_eq!(summaries[2].holdings_count, 0);
        assert_eq!(summaries[2].market_value, dec!(0));
    }

    #[test]
    fn test_allocation_groups_and_sorts_by_value() {
        let svc = service(
            vec![portfolio("p1")],
            vec![
                holding("h1", "p1", AssetType::Stock, dec!(10), dec!(1), Currency::Thb, dec!(30), Currency::Thb),
                holding("h2", "p1", AssetType::Etf, dec!(10), dec!(1), Currency::Thb, dec!(60), Currency::Thb),
                holding("h3", "p1", AssetType::Stock, dec!(10), dec!(1), Currency::Thb, dec!(10), Currency::Thb),
            ],
            dec!(36.5),
        );

        let allocation = svc.allocation("p1").unwrap();
        assert_eq!(allocation.total_value, dec!(1000));
        assert_eq!(allocation.slices.len(), 2);

        // ETF slice (600) ahead of the stock slice (400)
        assert_eq!(allocation.slices[0].asset_type, AssetType::Etf);
        assert_eq!(allocation.slices[0].market_value, dec!(600));
        assert_eq!(allocation.slices[0].weight_pct, dec!(60.00));

        assert_eq!(allocation.slices[1].asset_type, AssetType::Stock);
        assert_eq!(allocation.slices[1].market_value, dec!(400));
        assert_eq!(allocation.slices[1].weight_pct, dec!(40.00));
    }

    #[test]
    fn test_allocation_weight_rounds_to_two_decimals() {
        let svc = service(
            vec![portfolio("p1")],
            vec![
                holding("h1", "p1", AssetType::Stock, dec!(1), dec!(0), Currency::Thb, dec!(1), Currency::Thb),
                holding("h2", "p1", AssetType::Etf, dec!(1), dec!(0), Currency::Thb, dec!(1), Currency::Thb),
                holding("h3", "p1", AssetType::Bond, dec!(1), dec!(0), Currency::Thb, dec!(1), Currency::Thb),
            ],
            dec!(36.5),
        );

        let allocation = svc.allocation("p1").unwrap();
        for slice in &allocation.slices {
            assert_eq!(slice.weight_pct, dec!(33.33));
        }
    }

    #[test]
    fn test_allocation_empty_portfolio() {
        let svc = service(vec![portfolio("p1")], vec![], dec!(36.5));
        let allocation = svc.allocation("p1").unwrap();
        assert_eq!(allocation.total_value, dec!(0));
        assert!(allocation.slices.is_empty());
    }
}
