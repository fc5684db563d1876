use shared::TeacherDraft;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::teacher_fields::TeacherFieldInputs;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;
use crate::services::roster_sync::mutate_then_reload;

#[derive(Properties, PartialEq)]
pub struct TeacherFormProps {
    pub api_client: ApiClient,
    /// Fired after a successful create
    pub on_reload: Callback<()>,
}

/// Form for adding a teacher to the roster
#[function_component(TeacherForm)]
pub fn teacher_form(props: &TeacherFormProps) -> Html {
    let draft = use_state(TeacherDraft::default);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_draft_change = {
        let draft = draft.clone();
        Callback::from(move |next: TeacherDraft| draft.set(next))
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let api_client = props.api_client.clone();
        let on_reload = props.on_reload.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let fields = match draft.to_fields(today()) {
                Ok(fields) => fields,
                Err(message) => {
                    error_message.set(Some(message));
                    return;
                }
            };

            is_submitting.set(true);
            error_message.set(None);

            let draft = draft.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let api_client = api_client.clone();
            let on_reload = on_reload.clone();

            spawn_local(async move {
                match mutate_then_reload(api_client.create_teacher(&fields), &on_reload).await {
                    Ok(teacher) => {
                        Logger::info_with_component(
                            "teacher_form",
                            &format!("Created teacher {}", teacher.id),
                        );
                        draft.set(TeacherDraft::default());
                    }
                    Err(e) => {
                        Logger::warn_with_component(
                            "teacher_form",
                            &format!("Failed to add teacher: {}", e),
                        );
                        error_message.set(Some(format!("Failed to add teacher: {}", e)));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <form class="teacher-form" onsubmit={on_submit}>
            <h3>{"Add Teacher"}</h3>
            if let Some(error) = (*error_message).clone() {
                <div class="form-error">{error}</div>
            }
            <TeacherFieldInputs
                draft={(*draft).clone()}
                on_change={on_draft_change}
                disabled={*is_submitting}
            />
            <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                {if *is_submitting { "Adding..." } else { "Add Teacher" }}
            </button>
        </form>
    }
}
