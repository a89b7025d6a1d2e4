use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::order::application::domain::entities::RecipientInfo;
use crate::order::application::ports::incoming::use_cases::{
    PlaceOrderError, PlaceOrderInput, PlaceOrderUseCase,
};
use crate::order::application::ports::outgoing::{
    CheckoutError, OrderDetails, OrderTransaction, PlaceOrderCommand,
};
use crate::shared::money::check_money;

impl From<CheckoutError> for PlaceOrderError {
    fn from(e: CheckoutError) -> Self {
        match e {
            CheckoutError::UserNotFound => PlaceOrderError::UserNotFound,
            CheckoutError::EmptyCart => PlaceOrderError::EmptyCart,
            CheckoutError::ProductUnavailable(ids) => PlaceOrderError::ProductUnavailable(ids),
            CheckoutError::DatabaseError(msg) => PlaceOrderError::RepositoryError(msg),
        }
    }
}

fn required(field: &str, value: &str) -> Result<String, PlaceOrderError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PlaceOrderError::InvalidInput(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

fn normalize(input: PlaceOrderInput) -> Result<PlaceOrderInput, PlaceOrderError> {
    let recipient = RecipientInfo {
        name: required("recipient_name", &input.recipient.name)?,
        phone: required("recipient_phone", &input.recipient.phone)?,
        email: required("recipient_email", &input.recipient.email)?,
        address: required("recipient_address", &input.recipient.address)?,
    };

    if !EmailAddress::is_valid(&recipient.email) {
        return Err(PlaceOrderError::InvalidInput(
            "recipient_email is not a valid address".to_string(),
        ));
    }
    check_money(input.total_amount)
        .map_err(|e| PlaceOrderError::InvalidInput(format!("total_amount {}", e)))?;

    Ok(PlaceOrderInput {
        recipient,
        total_amount: input.total_amount,
        payment_method: required("payment_method", &input.payment_method)?,
    })
}

pub struct PlaceOrderService<T>
where
    T: OrderTransaction,
{
    transaction: T,
    allow_empty_cart: bool,
}

impl<T> PlaceOrderService<T>
where
    T: OrderTransaction,
{
    pub fn new(transaction: T, allow_empty_cart: bool) -> Self {
        Self {
            transaction,
            allow_empty_cart,
        }
    }
}

#[async_trait]
impl<T> PlaceOrderUseCase for PlaceOrderService<T>
where
    T: OrderTransaction + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        input: PlaceOrderInput,
    ) -> Result<OrderDetails, PlaceOrderError> {
        let input = normalize(input)?;

        let details = self
            .transaction
            .place_order(PlaceOrderCommand {
                user_id,
                recipient: input.recipient,
                total_amount: input.total_amount,
                payment_method: input.payment_method,
                allow_empty_cart: self.allow_empty_cart,
            })
            .await?;

        match details.items_total() {
            Some(items_total) if items_total != details.order.total_amount => warn!(
                order_id = %details.order.id,
                user_id = %user_id,
                submitted = %details.order.total_amount,
                computed = %items_total,
                "order total does not match its items"
            ),
            Some(_) => {}
            None => warn!(
                order_id = %details.order.id,
                user_id = %user_id,
                submitted = %details.order.total_amount,
                "order items total overflows; skipped total check"
            ),
        }

        info!(
            order_id = %details.order.id,
            user_id = %user_id,
            items = details.items.len(),
            "order placed"
        );
        Ok(details)
    }
}
