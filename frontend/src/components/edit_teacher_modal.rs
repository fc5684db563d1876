use shared::TeacherDraft;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::teacher_fields::TeacherFieldInputs;
use crate::services::api::{ApiClient, ApiError};
use crate::services::date_utils::today;
use crate::services::logging::Logger;
use crate::services::roster_sync::mutate_then_reload;

#[derive(Properties, PartialEq)]
pub struct EditTeacherModalProps {
    pub api_client: ApiClient,
    /// The record being edited; `None` keeps the dialog closed
    pub teacher_id: Option<String>,
    pub on_close: Callback<()>,
    pub on_reload: Callback<()>,
}

/// Dialog that loads a single teacher and saves a full replacement
#[function_component(EditTeacherModal)]
pub fn edit_teacher_modal(props: &EditTeacherModalProps) -> Html {
    let draft = use_state(TeacherDraft::default);
    let is_loading = use_state(|| false);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    // Fetch the current record whenever a different one is opened
    use_effect_with(props.teacher_id.clone(), {
        let draft = draft.clone();
        let is_loading = is_loading.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let api_client = props.api_client.clone();
        let on_reload = props.on_reload.clone();
        move |teacher_id: &Option<String>| {
            draft.set(TeacherDraft::default());
            is_submitting.set(false);
            error_message.set(None);

            if let Some(teacher_id) = teacher_id.clone() {
                is_loading.set(true);
                spawn_local(async move {
                    match api_client.get_teacher(&teacher_id).await {
                        Ok(teacher) => draft.set(TeacherDraft::from_teacher(&teacher)),
                        Err(ApiError::NotFound(_)) => {
                            error_message.set(Some("This teacher no longer exists".to_string()));
                            on_reload.emit(());
                        }
                        Err(e) => {
                            Logger::error_with_component(
                                "edit_teacher_modal",
                                &format!("Failed to load teacher {}: {}", teacher_id, e),
                            );
                            error_message.set(Some(format!("Failed to load teacher: {}", e)));
                        }
                    }
                    is_loading.set(false);
                });
            }
            || ()
        }
    });

    let on_draft_change = {
        let draft = draft.clone();
        Callback::from(move |next: TeacherDraft| draft.set(next))
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let api_client = props.api_client.clone();
        let teacher_id = props.teacher_id.clone();
        let on_close = props.on_close.clone();
        let on_reload = props.on_reload.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(teacher_id) = teacher_id.clone() else {
                return;
            };
            let fields = match draft.to_fields(today()) {
                Ok(fields) => fields,
                Err(message) => {
                    error_message.set(Some(message));
                    return;
                }
            };

            is_submitting.set(true);
            error_message.set(None);

            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let api_client = api_client.clone();
            let on_close = on_close.clone();
            let on_reload = on_reload.clone();

            spawn_local(async move {
                let update = api_client.update_teacher(&teacher_id, &fields);
                match mutate_then_reload(update, &on_reload).await {
                    Ok(_) => {
                        Logger::info_with_component(
                            "edit_teacher_modal",
                            &format!("Updated teacher {}", teacher_id),
                        );
                        is_submitting.set(false);
                        on_close.emit(());
                    }
                    Err(e) => {
                        Logger::warn_with_component(
                            "edit_teacher_modal",
                            &format!("Failed to save teacher {}: {}", teacher_id, e),
                        );
                        is_submitting.set(false);
                        error_message.set(Some(format!("Failed to save teacher: {}", e)));
                    }
                }
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if props.teacher_id.is_none() {
        return html! {};
    }

    let busy = *is_loading || *is_submitting;

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3>{"Edit Teacher"}</h3>
                if let Some(error) = (*error_message).clone() {
                    <div class="form-error">{error}</div>
                }
                <form onsubmit={on_submit}>
                    <TeacherFieldInputs
                        draft={(*draft).clone()}
                        on_change={on_draft_change}
                        disabled={busy}
                    />
                    <button type="submit" class="btn btn-primary" disabled={busy}>
                        {if *is_submitting { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="btn" onclick={on_cancel}>{"Cancel"}</button>
                </form>
            </div>
        </div>
    }
}
