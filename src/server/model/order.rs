//! Order domain models: the views a read batch can be driven by, the fetch strategy, and
//! the pending-orders outcome.

use std::{str::FromStr, time::Duration};

use chrono::NaiveDateTime;

use crate::{
    model::order::{DeliverySessionDto, OrderDto, PendingOrdersDto},
    server::error::config::ConfigError,
};

/// Application a request comes from. Restricts which pending orders are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Reception sees every order.
    Reception,
    /// Delivery drivers see restaurant-delivered orders only.
    Delivery,
    /// Waiters see dine-in orders only.
    Waiter,
}

impl Channel {
    /// Parses the `app` hint sent by the clients.
    ///
    /// Both the numeric codes and the `WR_*` names are accepted. Anything else yields
    /// `None`, which callers treat as "no channel restriction".
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint {
            "0" | "WR_RECEPTION" => Some(Self::Reception),
            "1" | "WR_DELIVERY" => Some(Self::Delivery),
            "2" | "WR_WAITER" => Some(Self::Waiter),
            _ => None,
        }
    }
}

/// Which orders a read batch covers.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderView {
    /// Open orders plus orders attached to an active delivery session.
    Pending,
    /// A single order.
    ById(i32),
    /// Orders created within `[from, to]`.
    History {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
    /// Orders attached to any of the given delivery sessions.
    SessionScoped(Vec<i32>),
}

/// How the batch applies the view's predicate to its queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStrategy {
    /// Every query evaluates the full predicate.
    Direct,
    /// One query resolves the predicate to order ids, every later query filters on them.
    Narrowed,
}

impl FromStr for FetchStrategy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "narrowed" => Ok(Self::Narrowed),
            _ => Err(ConfigError::InvalidEnvVar {
                name: "AGGREGATION_STRATEGY".to_string(),
                value: value.to_string(),
                reason: "expected 'direct' or 'narrowed'".to_string(),
            }),
        }
    }
}

/// Per-deployment settings of the read batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationOptions {
    pub strategy: FetchStrategy,
    /// Upper bound of every single query of a batch.
    pub step_timeout: Duration,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            strategy: FetchStrategy::Narrowed,
            step_timeout: Duration::from_secs(5),
        }
    }
}

/// Decoded `orders.responsible` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsibleRef {
    /// `NULL`, empty, `"0"` or anything that is not a user id.
    Unassigned,
    /// `"-1"`: the order was placed through scan-and-order.
    ScanAndOrder,
    /// A `users.user_id`.
    User(i32),
}

impl ResponsibleRef {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("0") => Self::Unassigned,
            Some("-1") => Self::ScanAndOrder,
            Some(value) => match value.parse::<i32>() {
                Ok(id) if id > 0 => Self::User(id),
                _ => Self::Unassigned,
            },
        }
    }

    pub fn user_id(self) -> Option<i32> {
        match self {
            Self::User(id) => Some(id),
            _ => None,
        }
    }
}

/// Pending orders and the active delivery sessions, read from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOrders {
    pub orders: Vec<OrderDto>,
    pub delivery_sessions: Vec<DeliverySessionDto>,
}

impl PendingOrders {
    pub fn empty() -> Self {
        Self {
            orders: Vec::new(),
            delivery_sessions: Vec::new(),
        }
    }

    pub fn into_dto(self) -> PendingOrdersDto {
        PendingOrdersDto {
            orders: self.orders,
            delivery_sessions: self.delivery_sessions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_channel_hints() {
        assert_eq!(Channel::from_hint("1"), Some(Channel::Delivery));
        assert_eq!(Channel::from_hint("WR_DELIVERY"), Some(Channel::Delivery));
        assert_eq!(Channel::from_hint("2"), Some(Channel::Waiter));
        assert_eq!(Channel::from_hint("WR_WAITER"), Some(Channel::Waiter));
        assert_eq!(Channel::from_hint("WR_RECEPTION"), Some(Channel::Reception));
        assert_eq!(Channel::from_hint("WR_KIOSK"), None);
        assert_eq!(Channel::from_hint(""), None);
    }

    #[test]
    fn decodes_responsible_column() {
        assert_eq!(ResponsibleRef::parse(None), ResponsibleRef::Unassigned);
        assert_eq!(ResponsibleRef::parse(Some("")), ResponsibleRef::Unassigned);
        assert_eq!(ResponsibleRef::parse(Some("0")), ResponsibleRef::Unassigned);
        assert_eq!(ResponsibleRef::parse(Some("-1")), ResponsibleRef::ScanAndOrder);
        assert_eq!(ResponsibleRef::parse(Some("42")), ResponsibleRef::User(42));
        assert_eq!(ResponsibleRef::parse(Some("abc")), ResponsibleRef::Unassigned);
    }

    #[test]
    fn strategy_from_env_value() {
        assert_eq!("narrowed".parse::<FetchStrategy>().unwrap(), FetchStrategy::Narrowed);
        assert_eq!("DIRECT".parse::<FetchStrategy>().unwrap(), FetchStrategy::Direct);
        assert!("fast".parse::<FetchStrategy>().is_err());
    }
}
