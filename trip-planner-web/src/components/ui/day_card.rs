use crate::components::ui::sidebar_section::price_label;
use crate::planner::{
    Bounds, Catalog, Category, DayCustomization, DragPayload, DropTarget, day_total, format_price,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct Props {
    pub day: DayCustomization,
    pub catalog: Rc<Catalog>,
    pub currency: AttrValue,
    /// Category of this day currently under the dragged item
    #[prop_or_default]
    pub highlight: Option<Category>,
    #[prop_or(false)]
    pub collapsed: bool,
    pub on_toggle: Callback<u32>,
    pub on_drag_over: Callback<DropTarget>,
    pub on_drag_leave: Callback<((f64, f64), Bounds)>,
    pub on_drop: Callback<(DropTarget, Option<DragPayload>)>,
    pub on_remove: Callback<DropTarget>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        self.day == other.day
            && Rc::ptr_eq(&self.catalog, &other.catalog)
            && self.currency == other.currency
            && self.highlight == other.highlight
            && self.collapsed == other.collapsed
    }
}

/// Hint shown on a collapsed card.
#[must_use]
pub fn pending_hint(day: &DayCustomization) -> Option<&'static str> {
    let filled = Category::ALL
        .iter()
        .filter(|category| day.slot(**category).is_some())
        .count();
    match filled {
        0 => Some("No customizations yet - click to expand"),
        n if n < Category::ALL.len() => Some("Some options pending - click to customize"),
        _ => None,
    }
}

fn element_bounds(e: &DragEvent) -> Option<Bounds> {
    let element = e.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    Some(Bounds::new(rect.left(), rect.top(), rect.right(), rect.bottom()))
}

fn drop_zone(p: &Props, category: Category) -> Html {
    let target = DropTarget::new(p.day.day, category);
    let selected = p.catalog.resolve(category, p.day.slot(category));
    let active = p.highlight == Some(category);

    let on_drag_over = {
        let cb = p.on_drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            if let Some(transfer) = e.data_transfer() {
                transfer.set_drop_effect("copy");
            }
            cb.emit(target);
        })
    };
    let on_drag_leave = {
        let cb = p.on_drag_leave.clone();
        Callback::from(move |e: DragEvent| {
            if let Some(bounds) = element_bounds(&e) {
                let pointer = (f64::from(e.client_x()), f64::from(e.client_y()));
                cb.emit((pointer, bounds));
            }
        })
    };
    let on_drop = {
        let cb = p.on_drop.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let payload = e
                .data_transfer()
                .and_then(|transfer| transfer.get_data("text/plain").ok())
                .and_then(|raw| DragPayload::decode(&raw));
            cb.emit((target, payload));
        })
    };

    let body = selected.map_or_else(
        || {
            html! {
                <div class="drop-zone__empty">
                    <span class="drop-zone__icon" aria-hidden="true">{ category.fallback_icon() }</span>
                    <p>{ format!("Drop {} here", category.label()) }</p>
                    <p class="muted">{ "Drag from sidebar" }</p>
                </div>
            }
        },
        |item| {
            let on_remove = {
                let cb = p.on_remove.clone();
                Callback::from(move |_| cb.emit(target))
            };
            html! {
                <div class="drop-zone__item">
                    <div class="drop-zone__item-head">
                        <h5>{ item.name.clone() }</h5>
                        <button
                            type="button"
                            class="drop-zone__remove"
                            aria-label={format!("Remove {}", item.name)}
                            onclick={on_remove}
                        >
                            { "✕" }
                        </button>
                    </div>
                    if let Some(location) = item.location.as_ref() {
                        <p class="muted">{ location.clone() }</p>
                    }
                    <div class="drop-zone__features">
                        { for item.features.iter().take(3).map(|feature| html! { <span class="badge">{ feature.clone() }</span> }) }
                    </div>
                    <span class="badge badge--outline">{ price_label(&p.currency, item) }</span>
                </div>
            }
        },
    );

    html! {
        <div class="drop-zone-group">
            <h4 class="drop-zone__title">{ category.label() }</h4>
            <div
                class={classes!("drop-zone", active.then_some("drop-zone--active"))}
                data-day={p.day.day.to_string()}
                data-category={category.key()}
                ondragover={on_drag_over}
                ondragleave={on_drag_leave}
                ondrop={on_drop}
            >
                { body }
            </div>
        </div>
    }
}

#[function_component(DayCard)]
pub fn day_card(p: &Props) -> Html {
    let day = p.day.day;
    let body_id = format!("day-card-{day}");
    let total = day_total(&p.catalog, &p.day);
    let on_toggle = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_| cb.emit(day))
    };
    let chips = Category::ALL.iter().filter_map(|category| {
        p.catalog
            .resolve(*category, p.day.slot(*category))
            .map(|item| {
                let label = if *category == Category::Transport {
                    item.name.as_str()
                } else {
                    item.short_name()
                };
                html! { <span class="chip" data-category={category.key()}>{ label.to_string() }</span> }
            })
    });

    html! {
        <article class={classes!("day-card", p.day.has_selection().then_some("day-card--filled"))}>
            <button
                type="button"
                class="day-card__header"
                aria-expanded={(!p.collapsed).to_string()}
                aria-controls={body_id.clone()}
                onclick={on_toggle}
            >
                <span class="day-card__number">{ day }</span>
                <span class="day-card__title">{ format!("Day {day}") }</span>
                <span class="badge">{ format_price(&p.currency, total) }</span>
            </button>
            if p.collapsed {
                <div class="day-card__summary">
                    <div class="day-card__chips">{ for chips }</div>
                    if let Some(hint) = pending_hint(&p.day) {
                        <p class="muted">{ hint }</p>
                    }
                </div>
            } else {
                <div id={body_id} class="day-card__body">
                    { for Category::ALL.iter().map(|category| drop_zone(p, *category)) }
                </div>
            }
        </article>
    }
}
