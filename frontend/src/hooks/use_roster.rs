use shared::Teacher;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;
use crate::services::roster_sync::{mutate_then_reload, LoadSequence};

/// The collection as last fetched from the record store
#[derive(Clone, PartialEq)]
pub struct RosterState {
    pub teachers: Vec<Teacher>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseRosterResult {
    pub state: RosterState,
    pub actions: UseRosterActions,
}

#[derive(Clone, PartialEq)]
pub struct UseRosterActions {
    /// Fetch the whole collection again
    pub reload: Callback<()>,
    pub delete_teacher: Callback<String>,
}

#[hook]
pub fn use_roster(api_client: &ApiClient) -> UseRosterResult {
    let teachers = use_state(Vec::<Teacher>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let load_sequence = use_mut_ref(LoadSequence::default);

    let reload = {
        let api_client = api_client.clone();
        let teachers = teachers.clone();
        let loading = loading.clone();
        let error = error.clone();
        let load_sequence = load_sequence.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let teachers = teachers.clone();
            let loading = loading.clone();
            let error = error.clone();
            let load_sequence = load_sequence.clone();
            let ticket = load_sequence.borrow_mut().begin();

            spawn_local(async move {
                loading.set(true);

                let result = api_client.list_teachers().await;
                if !load_sequence.borrow().is_latest(ticket) {
                    Logger::debug_with_component("use_roster", "Dropped a superseded load");
                    return;
                }

                match result {
                    Ok(list) => {
                        Logger::debug_with_component(
                            "use_roster",
                            &format!("Loaded {} teachers", list.len()),
                        );
                        teachers.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "use_roster",
                            &format!("Failed to load teachers: {}", e),
                        );
                        error.set(Some(e.to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Initial load
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let delete_teacher = {
        let api_client = api_client.clone();
        let error = error.clone();
        let reload = reload.clone();

        use_callback((), move |teacher_id: String, _| {
            let api_client = api_client.clone();
            let error = error.clone();
            let reload = reload.clone();

            spawn_local(async move {
                match mutate_then_reload(api_client.delete_teacher(&teacher_id), &reload).await {
                    Ok(()) => {
                        Logger::info_with_component(
                            "use_roster",
                            &format!("Deleted teacher {}", teacher_id),
                        );
                    }
                    Err(ApiError::NotFound(_)) => {
                        // Someone else removed it first; the row is stale.
                        Logger::warn_with_component(
                            "use_roster",
                            &format!("Teacher {} was already gone", teacher_id),
                        );
                        reload.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "use_roster",
                            &format!("Failed to delete teacher {}: {}", teacher_id, e),
                        );
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    UseRosterResult {
        state: RosterState {
            teachers: (*teachers).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        actions: UseRosterActions {
            reload,
            delete_teacher,
        },
    }
}
