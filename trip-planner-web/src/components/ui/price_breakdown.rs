use crate::planner::{PriceBreakdown, format_currency, format_price};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub pricing: PriceBreakdown,
    pub currency: AttrValue,
}

#[function_component(PriceBreakdownPanel)]
pub fn price_breakdown_panel(p: &Props) -> Html {
    let amount = |value: f64| format_currency(&p.currency, value);
    let base = (p.pricing.base_budget > 0).then(|| {
        html! {
            <div class="price-row">
                <dt>{ "Plan budget" }</dt>
                <dd>{ format_price(&p.currency, p.pricing.base_budget) }</dd>
            </div>
        }
    });
    html! {
        <section class="price-breakdown" aria-label="Price breakdown">
            <h3>{ "💰 Price Breakdown" }</h3>
            <dl>
                { base.unwrap_or_default() }
                <div class="price-row">
                    <dt>{ "Subtotal" }</dt>
                    <dd>{ amount(p.pricing.subtotal) }</dd>
                </div>
                <div class="price-row">
                    <dt>{ "Commission (10%)" }</dt>
                    <dd>{ amount(p.pricing.commission) }</dd>
                </div>
                <div class="price-row price-row--total">
                    <dt>{ "Total" }</dt>
                    <dd data-testid="price-total">{ amount(p.pricing.total) }</dd>
                </div>
            </dl>
        </section>
    }
}
