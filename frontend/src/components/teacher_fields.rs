use shared::TeacherDraft;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::date_utils::{today, today_iso};

#[derive(Properties, PartialEq)]
pub struct TeacherFieldsProps {
    pub draft: TeacherDraft,
    pub on_change: Callback<TeacherDraft>,
    #[prop_or_default]
    pub disabled: bool,
}

/// The inputs shared by the create form and the edit dialog.
/// Age is read-only and follows the date of birth.
#[function_component(TeacherFieldInputs)]
pub fn teacher_field_inputs(props: &TeacherFieldsProps) -> Html {
    let on_name_input = {
        let draft = props.draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(draft.with_full_name(input.value()));
        })
    };

    let on_date_change = {
        let draft = props.draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(draft.with_date_of_birth(input.value(), today()));
        })
    };

    let on_classes_input = {
        let draft = props.draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(draft.with_number_of_classes(input.value()));
        })
    };

    let age = props.draft.age.map(|a| a.to_string()).unwrap_or_default();

    html! {
        <>
            <div class="form-group">
                <label>{"Full Name"}</label>
                <input
                    type="text"
                    placeholder="Full name"
                    value={props.draft.full_name.clone()}
                    oninput={on_name_input}
                    disabled={props.disabled}
                />
            </div>
            <div class="form-group">
                <label>{"Date of Birth"}</label>
                <input
                    type="date"
                    max={today_iso()}
                    value={props.draft.date_of_birth.clone()}
                    onchange={on_date_change}
                    disabled={props.disabled}
                />
            </div>
            <div class="form-group">
                <label>{"Age"}</label>
                <input type="text" value={age} readonly=true />
            </div>
            <div class="form-group">
                <label>{"Number of Classes"}</label>
                <input
                    type="number"
                    min="0"
                    placeholder="Number of classes"
                    value={props.draft.number_of_classes.clone()}
                    oninput={on_classes_input}
                    disabled={props.disabled}
                />
            </div>
        </>
    }
}
