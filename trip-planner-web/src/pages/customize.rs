use crate::components::ui::day_card::DayCard;
use crate::components::ui::price_breakdown::PriceBreakdownPanel;
use crate::components::ui::sidebar_section::SidebarSection;
use crate::planner::{Bounds, Catalog, Category, DragPayload, DropTarget, TripSession};
use std::collections::BTreeSet;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct CustomizePageProps {
    pub session: Rc<TripSession>,
    pub catalog: Rc<Catalog>,
    pub collapsed_days: Rc<BTreeSet<u32>>,
    pub collapsed_sections: Rc<BTreeSet<Category>>,
    pub on_toggle_section: Callback<Category>,
    pub on_toggle_day: Callback<u32>,
    pub on_drag_start: Callback<DragPayload>,
    pub on_drag_end: Callback<()>,
    pub on_quick_add: Callback<DragPayload>,
    pub on_drag_over: Callback<DropTarget>,
    pub on_drag_leave: Callback<((f64, f64), Bounds)>,
    pub on_drop: Callback<(DropTarget, Option<DragPayload>)>,
    pub on_remove: Callback<DropTarget>,
    pub on_back: Callback<()>,
    pub on_next: Callback<()>,
}

impl PartialEq for CustomizePageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
            && Rc::ptr_eq(&self.catalog, &other.catalog)
            && self.collapsed_days == other.collapsed_days
            && self.collapsed_sections == other.collapsed_sections
    }
}

#[function_component(CustomizePage)]
pub fn customize_page(p: &CustomizePageProps) -> Html {
    let session = &p.session;
    let currency: AttrValue = session.config().currency.clone().into();
    let duration = session.days().duration();
    let highlight = session.drag().highlight();
    let pricing = session.pricing(&p.catalog);
    let on_back = {
        let cb = p.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_next = {
        let cb = p.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let sections = Category::ALL.iter().map(|category| {
        html! {
            <SidebarSection
                key={category.key()}
                category={*category}
                catalog={p.catalog.clone()}
                currency={currency.clone()}
                collapsed={p.collapsed_sections.contains(category)}
                on_toggle={p.on_toggle_section.clone()}
                on_drag_start={p.on_drag_start.clone()}
                on_drag_end={p.on_drag_end.clone()}
                on_quick_add={p.on_quick_add.clone()}
            />
        }
    });
    let day_cards = session.days().days().iter().map(|day| {
        let day_highlight = highlight
            .filter(|target| target.day == day.day)
            .map(|target| target.category);
        html! {
            <DayCard
                key={day.day}
                day={day.clone()}
                catalog={p.catalog.clone()}
                currency={currency.clone()}
                highlight={day_highlight}
                collapsed={p.collapsed_days.contains(&day.day)}
                on_toggle={p.on_toggle_day.clone()}
                on_drag_over={p.on_drag_over.clone()}
                on_drag_leave={p.on_drag_leave.clone()}
                on_drop={p.on_drop.clone()}
                on_remove={p.on_remove.clone()}
            />
        }
    });

    html! {
        <section class="panel step-panel" data-testid="customize-step">
            <header class="step-panel__header">
                <h2>{ format!("Customize Your {duration}-Day UAE Experience") }</h2>
                <p class="muted">
                    { "Drag and drop items from the sidebar to customize each day. Click on days to expand or collapse." }
                </p>
                <p class="tip">
                    <strong>{ "Pro Tip: " }</strong>
                    { "Drag items from the sidebar to any day card, or click the + button for quick add to the first available day." }
                </p>
            </header>
            <div class="customize-layout">
                <aside class="customize-layout__sidebar" aria-label="Available options">
                    { for sections }
                </aside>
                <div class="customize-layout__days">
                    if session.drag().is_dragging() {
                        <p class="drag-hint" role="status">
                            <strong>{ "Dragging: " }</strong>
                            { "Drop this item on any day card to add it to your itinerary" }
                        </p>
                    }
                    { for day_cards }
                </div>
            </div>
            <PriceBreakdownPanel pricing={pricing} currency={currency.clone()} />
            <div class="step-panel__actions">
                <button type="button" class="btn btn--outline" onclick={on_back}>{ "← Back" }</button>
                <button type="button" class="btn btn--primary" id="next-btn" onclick={on_next}>
                    { "View Detailed Itinerary →" }
                </button>
            </div>
        </section>
    }
}
