use crate::planner::{Catalog, CatalogItem, Category, DragPayload, format_price};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct Props {
    pub category: Category,
    pub catalog: Rc<Catalog>,
    pub currency: AttrValue,
    #[prop_or(false)]
    pub collapsed: bool,
    pub on_toggle: Callback<Category>,
    pub on_drag_start: Callback<DragPayload>,
    pub on_drag_end: Callback<()>,
    pub on_quick_add: Callback<DragPayload>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category
            && Rc::ptr_eq(&self.catalog, &other.catalog)
            && self.currency == other.currency
            && self.collapsed == other.collapsed
    }
}

/// `"AED 1,200/night"`, or `"Free"` for zero-priced items.
#[must_use]
pub fn price_label(currency: &str, item: &CatalogItem) -> String {
    if item.price == 0 {
        "Free".to_string()
    } else {
        format!("{}{}", format_price(currency, item.price), item.category.price_unit())
    }
}

fn item_card(p: &Props, item: &CatalogItem) -> Html {
    let payload = DragPayload::new(item.category, item.id.clone());
    let on_drag_start = {
        let cb = p.on_drag_start.clone();
        let payload = payload.clone();
        Callback::from(move |e: DragEvent| {
            if let Some(transfer) = e.data_transfer() {
                let _ = transfer.set_data("text/plain", &payload.encode());
                transfer.set_effect_allowed("copy");
            }
            cb.emit(payload.clone());
        })
    };
    let on_drag_end = {
        let cb = p.on_drag_end.clone();
        Callback::from(move |_: DragEvent| cb.emit(()))
    };
    let on_quick_add = {
        let cb = p.on_quick_add.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            cb.emit(payload.clone());
        })
    };
    let stars = item
        .stars
        .map(|stars| "★".repeat(usize::from(stars.min(5))))
        .unwrap_or_default();

    html! {
        <li
            class="catalog-card"
            draggable="true"
            data-item-id={item.id.clone()}
            ondragstart={on_drag_start}
            ondragend={on_drag_end}
        >
            <div class="catalog-card__title">
                <span class="catalog-card__icon" aria-hidden="true">{ item.icon_or_default() }</span>
                <h4>{ item.name.clone() }</h4>
            </div>
            <div class="catalog-card__meta">
                <span class="badge">{ price_label(&p.currency, item) }</span>
                if !stars.is_empty() {
                    <span class="catalog-card__stars" aria-label={format!("{} stars", stars.chars().count())}>{ stars }</span>
                }
            </div>
            if let Some(location) = item.location.as_ref() {
                <p class="catalog-card__location">{ location.clone() }</p>
            }
            if let Some(hours) = item.duration_hrs {
                <p class="catalog-card__duration">{ format!("{hours} hours") }</p>
            }
            <button
                type="button"
                class="catalog-card__quick-add"
                title="Quick add to first available day"
                aria-label={format!("Quick add {} to first available day", item.name)}
                onclick={on_quick_add}
            >
                { "+" }
            </button>
        </li>
    }
}

#[function_component(SidebarSection)]
pub fn sidebar_section(p: &Props) -> Html {
    let items = p.catalog.items(p.category);
    let section_id = format!("sidebar-{}", p.category.key());
    let on_toggle = {
        let cb = p.on_toggle.clone();
        let category = p.category;
        Callback::from(move |_| cb.emit(category))
    };

    html! {
        <section class="sidebar-section" data-category={p.category.key()}>
            <button
                type="button"
                class="sidebar-section__header"
                aria-expanded={(!p.collapsed).to_string()}
                aria-controls={section_id.clone()}
                onclick={on_toggle}
            >
                <span aria-hidden="true">{ p.category.fallback_icon() }</span>
                <span>{ p.category.section_title() }</span>
                <span class="badge">{ items.len() }</span>
            </button>
            if !p.collapsed {
                <ul id={section_id} class="sidebar-section__items">
                    { for items.iter().map(|item| item_card(p, item)) }
                </ul>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(collapsed: bool) -> Props {
        Props {
            category: Category::Transport,
            catalog: Rc::new(Catalog::load_embedded().unwrap()),
            currency: "AED".into(),
            collapsed,
            on_toggle: Callback::noop(),
            on_drag_start: Callback::noop(),
            on_drag_end: Callback::noop(),
            on_quick_add: Callback::noop(),
        }
    }

    #[test]
    fn lists_draggable_items_with_unit_prices() {
        let html = block_on(LocalServerRenderer::<SidebarSection>::with_props(props(false)).render());
        assert!(html.contains("draggable=\"true\""));
        assert!(html.contains("Basic Sedan"));
        assert!(html.contains("/day"));
        assert!(html.contains("Quick add to first available day"));
    }

    #[test]
    fn collapsed_section_hides_items() {
        let html = block_on(LocalServerRenderer::<SidebarSection>::with_props(props(true)).render());
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("Basic Sedan"));
    }

    #[test]
    fn zero_price_reads_free() {
        let catalog = Catalog::load_embedded().unwrap();
        let fountain = catalog.find(Category::Attraction, "dubai-fountain").unwrap();
        assert_eq!(price_label("AED", fountain), "Free");
        let hotel = catalog.find(Category::Hotel, "hotel-atlantis-5").unwrap();
        assert_eq!(price_label("AED", hotel), "AED 1,200/night");
    }
}
