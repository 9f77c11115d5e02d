use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, ProductId};

use crate::price::{self, Price, Prices};

/// Currency every product must carry a price for.
pub const DEFAULT_CURRENCY: &str = "USD";

/// A catalog product.
///
/// `id` is owned by the store: it is [`ProductId::UNASSIGNED`] until the first
/// save and immutable afterwards. `Clone` is a deep copy (the tags and prices
/// are freshly allocated), which is what the store relies on to keep its own
/// copies detached from the ones callers hold.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub prices: Prices,
}

impl Product {
    /// A not-yet-persisted product with no tags or prices.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ProductId::UNASSIGNED,
            name: name.into(),
            description: description.into(),
            tags: Vec::new(),
            prices: Prices::new(),
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price(mut self, currency: impl Into<String>, price: Price) -> Self {
        self.prices.insert(currency.into(), price);
        self
    }

    /// Checks the mandatory fields. The `id` is not checked.
    ///
    /// Rules are evaluated in order and the first violation is reported:
    /// name, description, non-empty prices, each price, default currency.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.is_empty() {
            return Err(DomainError::validation("Name must be specified!"));
        }
        if self.description.is_empty() {
            return Err(DomainError::validation("Desc must be specified!"));
        }
        if self.prices.is_empty() {
            return Err(DomainError::validation("Prices must be specified!"));
        }
        price::validate_all(&self.prices)?;
        if !self.prices.contains_key(DEFAULT_CURRENCY) {
            return Err(DomainError::validation(format!(
                "Price for \"{DEFAULT_CURRENCY}\" currency must be specified!"
            )));
        }
        Ok(())
    }

    /// Overlay `prices` onto this product's price points.
    ///
    /// Currencies present in `prices` are inserted or overwritten; all other
    /// currencies are left as they are. Nothing is ever removed.
    pub fn merge_prices(&mut self, prices: &Prices) {
        for (currency, price) in prices {
            self.prices.insert(currency.clone(), *price);
        }
    }

    pub fn price(&self, currency: &str) -> Option<&Price> {
        self.prices.get(currency)
    }
}
