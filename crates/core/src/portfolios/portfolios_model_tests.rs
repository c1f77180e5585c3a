//! Tests for portfolio domain models.

#[cfg(test)]
mod tests {
    use crate::portfolios::{NewPortfolio, PortfolioUpdate};

    #[test]
    fn test_new_portfolio_valid() {
        let p = NewPortfolio {
            id: None,
            name: "Retirement".to_string(),
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_new_portfolio_blank_name_rejected() {
        for name in ["", "   ", "\t\n"] {
            let p = NewPortfolio {
                id: None,
                name: name.to_string(),
            };
            assert!(p.validate().is_err(), "name {:?} should be rejected", name);
        }
    }

    #[test]
    fn test_new_portfolio_oversized_name_rejected() {
        let p = NewPortfolio {
            id: None,
            name: "x".repeat(101),
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_update_requires_id() {
        let u = PortfolioUpdate {
            id: "".to_string(),
            name: "Renamed".to_string(),
        };
        assert!(u.validate().is_err());

        let u = PortfolioUpdate {
            id: "p-1".to_string(),
            name: "Renamed".to_string(),
        };
        assert!(u.validate().is_ok());
    }

    #[test]
    fn test_new_portfolio_deserializes_without_id() {
        let p: NewPortfolio = serde_json::from_str(r#"{"name":"Stocks"}"#).unwrap();
        assert_eq!(p.id, None);
        assert_eq!(p.name, "Stocks");
    }
}
