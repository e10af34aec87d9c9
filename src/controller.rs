//! Movements Controller
//!
//! Async flows behind the screen: load, save, delete. Each flow reports
//! progress only through `Action`s, so it runs the same against the REST
//! client and against an in-memory fake.

use chrono::FixedOffset;
use futures::future::try_join;
use leptos::logging::{error, log};

use crate::api::MovementsApi;
use crate::error::{user_message, ApiResult, DELETE_CONTEXT, LOAD_CONTEXT, SAVE_CONTEXT};
use crate::mapper::{containers_from_records, create_payload, movements_from_records, update_payload};
use crate::models::MovementForm;
use crate::store::{Action, Modal};

/// Fetch movements and containers together; either both land or neither does
pub async fn load_data<A, D>(api: &A, dispatch: &D)
where
    A: MovementsApi + ?Sized,
    D: Fn(Action),
{
    dispatch(Action::LoadStarted);
    match try_join(api.list_movements(), api.list_containers()).await {
        Ok((movements, containers)) => {
            log!("[MOVEMENTS] Loaded {} movements, {} containers", movements.len(), containers.len());
            dispatch(Action::Loaded {
                movements: movements_from_records(movements),
                containers: containers_from_records(containers),
            });
        }
        Err(e) => {
            error!("[MOVEMENTS] load failed: {}", e);
            dispatch(Action::LoadFailed(user_message(LOAD_CONTEXT, &e)));
        }
    }
}

async fn save<A, O>(api: &A, modal: Modal, form: &MovementForm, resolve_offset: O) -> ApiResult<()>
where
    A: MovementsApi + ?Sized,
    O: Fn(&str) -> ApiResult<FixedOffset>,
{
    match modal {
        Modal::Edit(id) => {
            let payload = update_payload(form)?;
            api.update_movement(id, &payload).await
        }
        Modal::Create | Modal::Closed => {
            let offset = resolve_offset(&form.timestamp)?;
            let payload = create_payload(form, offset)?;
            api.create_movement(&payload).await
        }
    }
}

/// Create or update from the current form, then reload and close
///
/// `resolve_offset` gives the local timezone offset in effect at the
/// entered date-time; only the create path uses it.
pub async fn submit_form<A, O, D>(
    api: &A,
    modal: Modal,
    form: MovementForm,
    resolve_offset: O,
    dispatch: &D,
) where
    A: MovementsApi + ?Sized,
    O: Fn(&str) -> ApiResult<FixedOffset>,
    D: Fn(Action),
{
    dispatch(Action::SubmitStarted);
    match save(api, modal, &form, resolve_offset).await {
        Ok(()) => {
            load_data(api, dispatch).await;
            dispatch(Action::SubmitSucceeded);
        }
        Err(e) => {
            error!("[MOVEMENTS] save failed: {}", e);
            dispatch(Action::SubmitFailed(user_message(SAVE_CONTEXT, &e)));
        }
    }
}

/// Delete a movement the user already confirmed, then reload
pub async fn confirm_delete<A, D>(api: &A, id: u32, dispatch: &D)
where
    A: MovementsApi + ?Sized,
    D: Fn(Action),
{
    dispatch(Action::DeleteStarted);
    match api.delete_movement(id).await {
        Ok(()) => load_data(api, dispatch).await,
        Err(e) => {
            error!("[MOVEMENTS] delete of {} failed: {}", id, e);
            dispatch(Action::DeleteFailed(user_message(DELETE_CONTEXT, &e)));
        }
    }
}
