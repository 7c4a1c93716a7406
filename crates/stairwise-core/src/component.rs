//! # Price Components
//!
//! The unit of computation in a pricing chain.
//!
//! ## Chain Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pricing Chain (one lane)                           │
//! │                                                                         │
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐    ┌────────────┐  │
//! │   │ Base (root)│◄───│ Decorator 1│◄───│ Decorator 2│◄───│ Decorator n│  │
//! │   │ no pred.   │owns│ owns pred. │owns│ owns pred. │owns│ (terminal) │  │
//! │   └────────────┘    └────────────┘    └────────────┘    └────────────┘  │
//! │                                                                         │
//! │   price()           = predecessor.price() + own                         │
//! │   price_breakdown() = predecessor.price_breakdown() ++ [own, if any]    │
//! │                                                                         │
//! │   Callers only ever hold the terminal node.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A [`PricingRule`] decides a single contribution from configuration; a
//! [`Node`] wraps that rule with its predecessor and memoizes the
//! contribution, so every node computes its own price exactly once however
//! many times the chain is read.

use std::cell::OnceCell;

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::types::{Breakdown, BreakdownEntry};

// =============================================================================
// Contract
// =============================================================================

/// A node of a pricing chain.
pub trait PriceComponent {
    /// The label this node's breakdown entry carries.
    fn label(&self) -> &'static str;

    /// This node's own contribution.
    ///
    /// `None` means the rule has nothing to price for this configuration: it
    /// adds zero and is left out of the breakdown.
    fn own_price(&self) -> PricingResult<Option<Money>>;

    /// Cumulative price: the predecessor's cumulative price plus our own.
    fn price(&self) -> PricingResult<Money>;

    /// The predecessor's breakdown with our own entry appended, if visible.
    fn price_breakdown(&self) -> PricingResult<Breakdown>;
}

/// A single pricing rule over a lane configuration `C`.
///
/// Rules derive their contribution from configuration only. A rule defined as
/// a percentage of the running total may read `predecessor.price()`.
pub trait PricingRule<C: ?Sized> {
    /// Stable, user-facing breakdown label.
    fn label(&self) -> &'static str;

    /// Computes this rule's own contribution.
    ///
    /// ## Contract
    /// - `Ok(None)`: inapplicable (optional part absent); adds zero, no entry
    /// - `Ok(Some(amount))`: visible contribution, may be zero or negative
    /// - `Err(_)`: configuration is missing or malformed; aborts the chain
    fn contribution(
        &self,
        config: &C,
        predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>>;
}

// =============================================================================
// Node
// =============================================================================

/// A rule bound to its lane configuration and (optionally) its predecessor.
pub struct Node<'a, C: ?Sized, R> {
    rule: R,
    config: &'a C,
    predecessor: Option<Box<dyn PriceComponent + 'a>>,
    own: OnceCell<Option<Money>>,
}

impl<'a, C: ?Sized, R: PricingRule<C>> Node<'a, C, R> {
    /// Creates a root node (a lane's base calculator).
    pub fn root(rule: R, config: &'a C) -> Self {
        Node {
            rule,
            config,
            predecessor: None,
            own: OnceCell::new(),
        }
    }

    /// Creates a decorator node that exclusively owns `predecessor`.
    pub fn wrap(rule: R, predecessor: Box<dyn PriceComponent + 'a>, config: &'a C) -> Self {
        Node {
            rule,
            config,
            predecessor: Some(predecessor),
            own: OnceCell::new(),
        }
    }
}

impl<'a, C: ?Sized, R: PricingRule<C>> PriceComponent for Node<'a, C, R> {
    fn label(&self) -> &'static str {
        self.rule.label()
    }

    fn own_price(&self) -> PricingResult<Option<Money>> {
        if let Some(own) = self.own.get() {
            return Ok(*own);
        }

        let own = self
            .rule
            .contribution(self.config, self.predecessor.as_deref())?;
        // Errors are not memoized; a failed node fails again on the next read.
        let _ = self.own.set(own);
        Ok(own)
    }

    fn price(&self) -> PricingResult<Money> {
        let running = match &self.predecessor {
            Some(predecessor) => predecessor.price()?,
            None => Money::zero(),
        };
        let own = self.own_price()?.unwrap_or_default();

        running
            .checked_add(own)
            .ok_or(PricingError::Overflow { rule: self.label() })
    }

    fn price_breakdown(&self) -> PricingResult<Breakdown> {
        let mut breakdown = match &self.predecessor {
            Some(predecessor) => predecessor.price_breakdown()?,
            None => Breakdown::new(),
        };

        if let Some(amount) = self.own_price()? {
            breakdown.push(BreakdownEntry::new(self.label(), amount));
        }

        Ok(breakdown)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
