//! Application Context
//!
//! Store and API client shared with every component via the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::RestApi;
use crate::config::AppConfig;
use crate::controller;
use crate::store::{self, Action, MovementsState, MovementsStateStoreFields, MovementsStore};
use crate::timestamp::browser_offset;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Movements screen state
    pub store: MovementsStore,
    api: StoredValue<RestApi>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: Store::new(MovementsState::new()),
            api: StoredValue::new(RestApi::new(config)),
        }
    }

    pub fn dispatch(&self, action: Action) {
        store::dispatch(&self.store, action);
    }

    /// Re-fetch movements and containers (mount, retry)
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(async move {
            let api = ctx.api.get_value();
            controller::load_data(&api, &|action| ctx.dispatch(action)).await;
        });
    }

    /// Save the open form
    pub fn submit(&self) {
        let ctx = *self;
        let modal = self.store.modal().get_untracked();
        let form = self.store.form().get_untracked();
        spawn_local(async move {
            let api = ctx.api.get_value();
            controller::submit_form(&api, modal, form, browser_offset, &|action| ctx.dispatch(action))
                .await;
        });
    }

    /// Delete after the user confirmed
    pub fn delete(&self, id: u32) {
        let ctx = *self;
        spawn_local(async move {
            let api = ctx.api.get_value();
            controller::confirm_delete(&api, id, &|action| ctx.dispatch(action)).await;
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
