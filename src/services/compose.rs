use std::fmt::Write;

use crate::models::{
    Enrichment, EnrichedData, ExtractedIdentifier, Intent, LoyaltyAccount, OrderSummary,
};

pub const CAPABILITY_MENU: &str = "Hi! I can help you with:\n\
• Order summaries — include your order ID, e.g. \"summary for order 1234567\"\n\
• Why an order was cancelled — ask for the cancellation reason with your order ID\n\
• Health credits balance, transaction history, tier status and profile details — include your registered mobile number\n\
Ask me anything else and I'll do my best to help.";

const SUPPORT_PREAMBLE: &str = "You are a customer support agent for a pharmacy and wellness platform. \
Provide ACCURATE and CONCISE information directly relevant to the user's query.\n\n\
Instructions:\n\
* Do not introduce yourself.\n\
* Answer based solely on the provided order and account information.\n\
* If the cancellation reason is 'None', state explicitly that the order is NOT cancelled. Do not invent a reason.\n\
* Be extremely concise. Avoid unnecessary phrases.\n\
* Do not include any additional information other than requested.";

pub const PROVIDER_FAILURE_MESSAGE: &str =
    "Sorry, we couldn't retrieve your details right now. Please try again in a moment.";

/// What the support handler should do for a query. Pure data: the handler
/// executes `Generate` against the generation provider and maps the rest
/// straight to response payloads.
#[derive(Debug)]
pub enum Composition {
    CapabilityMenu,
    OrderRecord(OrderSummary),
    CancellationAnswer {
        order_id: String,
        reason: Option<String>,
    },
    Rendered(String),
    Generate(String),
    NotFound(String),
    ProviderFailure,
}

/// Branch table from query intent and enrichment outcome to an action.
/// Identifier-absent queries always fall through to a plain generation
/// prompt; found data either answers directly or becomes prompt context.
pub fn compose(
    query: &str,
    intent: Intent,
    identifier: Option<&ExtractedIdentifier>,
    enrichment: Option<Enrichment<EnrichedData>>,
) -> Composition {
    if intent == Intent::Greeting {
        return Composition::CapabilityMenu;
    }

    let Some(identifier) = identifier else {
        return Composition::Generate(general_prompt(query));
    };

    match enrichment {
        Some(Enrichment::Found(EnrichedData::Order(order))) => match intent {
            Intent::OrderSummary => Composition::OrderRecord(order),
            Intent::CancellationReason => Composition::CancellationAnswer {
                order_id: identifier.as_str().to_string(),
                reason: order.cancellation_reason,
            },
            _ => Composition::Generate(contextual_prompt(
                query,
                &order_context(&order, identifier.as_str()),
            )),
        },
        Some(Enrichment::Found(EnrichedData::Loyalty(account))) => match intent {
            Intent::CreditsBalance | Intent::TransactionHistory | Intent::TierStatus
            | Intent::ProfileInfo => Composition::Rendered(render_loyalty(intent, &account)),
            _ => Composition::Generate(contextual_prompt(
                query,
                &loyalty_context(&account, identifier.as_str()),
            )),
        },
        Some(Enrichment::NotFound) => Composition::NotFound(format!(
            "I couldn't find details for {}. Please double-check it.",
            describe(identifier)
        )),
        Some(Enrichment::Failed) => Composition::ProviderFailure,
        // Identifier present but no lookup was possible: answer from the
        // query alone.
        None => Composition::Generate(general_prompt(query)),
    }
}

fn describe(identifier: &ExtractedIdentifier) -> String {
    match identifier {
        ExtractedIdentifier::OrderId(id) => format!("order ID {id}"),
        ExtractedIdentifier::Phone(number) => format!("mobile number {number}"),
    }
}

fn general_prompt(query: &str) -> String {
    format!("{SUPPORT_PREAMBLE}\n\nCustomer query: {query}")
}

fn contextual_prompt(query: &str, context: &str) -> String {
    format!("{SUPPORT_PREAMBLE}\n\nCustomer query: {query}\n\nAccount information:\n{context}")
}

pub fn calculation_prompt(expression: &str) -> String {
    format!("Calculate this mathematical expression: {expression}")
}

/// Order record serialized as labeled fields for a generation prompt. The
/// cancellation reason renders as the literal `None` when absent so the
/// model can state the order is not cancelled.
fn order_context(order: &OrderSummary, order_id: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Order ID: {order_id}");
    let _ = writeln!(
        out,
        "Cancellation Reason: {}",
        order.cancellation_reason.as_deref().unwrap_or("None")
    );
    let _ = writeln!(out, "Items:");
    if order.order_item_details.is_empty() {
        let _ = writeln!(out, "- No items found for this order.");
    }
    for item in &order.order_item_details {
        let _ = writeln!(
            out,
            "- {} (SKU: {}): requested {}, approved {}",
            item.name,
            item.sku,
            quantity(item.requested_quantity),
            quantity(item.approved_quantity),
        );
    }
    out
}

fn loyalty_context(account: &LoyaltyAccount, mobile: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Mobile number: {mobile}");
    let _ = writeln!(out, "Name: {}", account.customer.name);
    let _ = writeln!(out, "Tier: {}", account.customer.tier);
    let _ = writeln!(out, "Available credits: ₹{}", account.customer.available_credits);
    let _ = writeln!(out, "Earned credits: ₹{}", account.customer.earned_credits);
    let _ = writeln!(out, "Expired credits: ₹{}", account.customer.expired_credits);
    let _ = writeln!(out, "Transactions:");
    if account.transactions.is_empty() {
        let _ = writeln!(out, "- No transactions on record.");
    }
    for tx in &account.transactions {
        let _ = writeln!(
            out,
            "- {}: earned ₹{} ({}), available ₹{}",
            tx.transaction_date, tx.credits_earned, tx.business_unit, tx.available_credits,
        );
    }
    out
}

fn quantity(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}

/// Fixed per-category prose templates for loyalty intents. Numbers render
/// unformatted; credit amounts get the currency prefix.
fn render_loyalty(intent: Intent, account: &LoyaltyAccount) -> String {
    let customer = &account.customer;
    match intent {
        Intent::CreditsBalance => format!(
            "Hi {}, you have ₹{} health credits available. You've earned ₹{} in total and ₹{} have expired.",
            customer.name,
            customer.available_credits,
            customer.earned_credits,
            customer.expired_credits,
        ),
        Intent::TransactionHistory => {
            if account.transactions.is_empty() {
                return format!("Hi {}, there are no transactions on your account yet.", customer.name);
            }
            let mut out = format!("Hi {}, here are your recent transactions:\n", customer.name);
            for tx in &account.transactions {
                let _ = writeln!(
                    out,
                    "- {}: earned ₹{} ({}), available ₹{}",
                    tx.transaction_date, tx.credits_earned, tx.business_unit, tx.available_credits,
                );
            }
            out.trim_end().to_string()
        }
        Intent::TierStatus => format!(
            "Hi {}, you are currently a {} tier member.",
            customer.name, customer.tier,
        ),
        Intent::ProfileInfo => format!(
            "Name: {}\nTier: {}\nAvailable credits: ₹{}",
            customer.name, customer.tier, customer.available_credits,
        ),
        // Remaining intents never reach this renderer
        _ => String::new(),
    }
}
