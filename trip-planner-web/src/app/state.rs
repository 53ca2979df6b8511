use crate::pages::summary::BookingStatus;
use crate::planner::{Catalog, Category, TransitionError, TripPlan, TripSession, WizardFlow};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub session: UseStateHandle<TripSession>,
    pub catalog: Rc<Catalog>,
    /// Rejected transition awaiting acknowledgement
    pub prompt: UseStateHandle<Option<TransitionError>>,
    pub suggestion_progress: UseStateHandle<u8>,
    /// Ticket of the suggestion timer allowed to complete; cleared on cancel
    pub live_ticket: Rc<RefCell<Option<u64>>>,
    /// Plans delivered by the timer, merged into the current session on the next render
    pub arrived_plans: UseStateHandle<Option<(u64, Vec<TripPlan>)>>,
    pub collapsed_days: UseStateHandle<BTreeSet<u32>>,
    pub collapsed_sections: UseStateHandle<BTreeSet<Category>>,
    pub booking: UseStateHandle<BookingStatus>,
    pub show_preview: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        session: use_state(|| crate::planner::new_session(WizardFlow::default())),
        catalog: use_memo((), |()| crate::planner::load_planner().0),
        prompt: use_state(|| None::<TransitionError>),
        suggestion_progress: use_state(|| 0_u8),
        live_ticket: use_mut_ref(|| None::<u64>),
        arrived_plans: use_state(|| None),
        collapsed_days: use_state(BTreeSet::<u32>::new),
        collapsed_sections: use_state(BTreeSet::<Category>::new),
        booking: use_state(BookingStatus::default),
        show_preview: use_state(|| false),
    }
}

impl AppState {
    /// Forget any pending suggestion timer so its result is dropped.
    pub fn cancel_live_ticket(&self) {
        self.live_ticket.borrow_mut().take();
    }

    #[must_use]
    pub fn is_live_ticket(&self, ticket: u64) -> bool {
        *self.live_ticket.borrow() == Some(ticket)
    }
}
