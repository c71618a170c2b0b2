use crate::models::{Enrichment, LoyaltyAccount, OrderSummary};
use crate::services::providers::{LoyaltyProvider, OrderProvider};

/// Look up an order record and normalize the outcome. A transport or decode
/// failure is logged here and never retried; a 2xx body whose business
/// status is negative maps to `NotFound`, never `Found`.
pub async fn order_details(
    provider: &dyn OrderProvider,
    order_id: &str,
) -> Enrichment<OrderSummary> {
    match provider.order_summary(order_id).await {
        Ok(summary) if summary.data_found() => Enrichment::Found(summary),
        Ok(summary) => {
            tracing::info!(
                order_id = %order_id,
                code = summary.code,
                message = %summary.message,
                "order provider reported no data"
            );
            Enrichment::NotFound
        }
        Err(e) => {
            tracing::error!(order_id = %order_id, error = %e, "order summary lookup failed");
            Enrichment::Failed
        }
    }
}

/// Look up a loyalty account: customer profile plus transaction history.
/// Both calls must succeed for `Found`; either transport failure alone is
/// `Failed`, while a negative `Success` flag on either is `NotFound`.
pub async fn loyalty_account(
    provider: &dyn LoyaltyProvider,
    mobile: &str,
) -> Enrichment<LoyaltyAccount> {
    let profile = match provider.customer_profile(mobile).await {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::error!(mobile = %mobile, error = %e, "customer profile lookup failed");
            return Enrichment::Failed;
        }
    };
    if !profile.success {
        tracing::info!(mobile = %mobile, "loyalty provider reported no customer");
        return Enrichment::NotFound;
    }
    let Some(customer) = profile.customer_data else {
        tracing::error!(mobile = %mobile, "profile marked successful but carried no customer data");
        return Enrichment::Failed;
    };

    let history = match provider.transaction_history(mobile).await {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::error!(mobile = %mobile, error = %e, "transaction history lookup failed");
            return Enrichment::Failed;
        }
    };
    if !history.success {
        tracing::info!(mobile = %mobile, "loyalty provider reported no transactions record");
        return Enrichment::NotFound;
    }

    Enrichment::Found(LoyaltyAccount {
        customer,
        transactions: history.transaction_data,
    })
}
