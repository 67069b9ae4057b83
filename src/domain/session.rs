use {
    super::error::PipelineError,
    super::id::OrderId,
    super::money::{CurrencyCode, MoneyAmount},
    serde::{Deserialize, Serialize},
};

/// Cart-like body accepted by the session initiator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSessionRequest {
    pub currency: String,
    pub items: Vec<PaymentSessionItem>,
    pub order_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentSessionItem {
    pub name: String,
    /// Unit price in major units.
    pub price: f64,
    pub quantity: i64,
}

impl PaymentSessionRequest {
    pub fn validate(&self) -> Result<NewCheckoutSession, PipelineError> {
        let currency = CurrencyCode::new(&self.currency)?;
        let order_id = OrderId::new(self.order_id.clone())?;

        if self.items.is_empty() {
            return Err(PipelineError::Validation(
                "at least one item is required".into(),
            ));
        }

        let line_items = self
            .items
            .iter()
            .map(LineItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewCheckoutSession {
            currency,
            line_items,
            order_id,
        })
    }
}

/// Provider-bound line item, amount already in minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub unit_amount: MoneyAmount,
    pub quantity: u64,
}

impl TryFrom<&PaymentSessionItem> for LineItem {
    type Error = PipelineError;

    fn try_from(item: &PaymentSessionItem) -> Result<Self, Self::Error> {
        if item.name.trim().is_empty() {
            return Err(PipelineError::Validation("item name must not be empty".into()));
        }
        let quantity = u64::try_from(item.quantity)
            .ok()
            .filter(|&q| q >= 1)
            .ok_or_else(|| {
                PipelineError::Validation(format!(
                    "quantity must be at least 1, got: {} for {:?}",
                    item.quantity, item.name
                ))
            })?;

        Ok(Self {
            name: item.name.clone(),
            unit_amount: MoneyAmount::from_major_units(item.price)?,
            quantity,
        })
    }
}

/// A validated request, ready to hand to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheckoutSession {
    pub currency: CurrencyCode,
    pub line_items: Vec<LineItem>,
    pub order_id: OrderId,
}

/// What the provider hands back. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub id: String,
    pub success_url: Option<String>,
    pub cancel_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSessionResponse {
    pub cancel_url: Option<String>,
    pub success_url: Option<String>,
    pub url: Option<String>,
}

impl From<CheckoutSession> for PaymentSessionResponse {
    fn from(session: CheckoutSession) -> Self {
        Self {
            cancel_url: session.cancel_url,
            success_url: session.success_url,
            url: session.url,
        }
    }
}
