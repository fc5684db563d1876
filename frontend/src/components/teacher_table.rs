use shared::Teacher;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils::format_date_for_display;

#[derive(Properties, PartialEq)]
pub struct TeacherTableProps {
    /// Already searched and sorted
    pub rows: Vec<Teacher>,
    pub loading: bool,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(TeacherTable)]
pub fn teacher_table(props: &TeacherTableProps) -> Html {
    let body = if props.loading && props.rows.is_empty() {
        html! { <tr><td colspan="5">{"Loading..."}</td></tr> }
    } else if props.rows.is_empty() {
        html! { <tr><td colspan="5">{"No teachers found"}</td></tr> }
    } else {
        props
            .rows
            .iter()
            .map(|teacher| {
                let on_edit = {
                    let on_edit = props.on_edit.clone();
                    let id = teacher.id.clone();
                    Callback::from(move |_: MouseEvent| on_edit.emit(id.clone()))
                };
                let on_delete = {
                    let on_delete = props.on_delete.clone();
                    let id = teacher.id.clone();
                    Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                };

                html! {
                    <tr key={teacher.id.clone()}>
                        <td>{teacher.full_name.clone()}</td>
                        <td>{format_date_for_display(teacher.date_of_birth)}</td>
                        <td>{teacher.age.to_string()}</td>
                        <td>{teacher.number_of_classes.to_string()}</td>
                        <td>
                            <button type="button" class="btn btn-primary" onclick={on_edit}>{"Edit"}</button>
                            <button type="button" class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                        </td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <table class="roster-table">
            <thead>
                <tr>
                    <td>{"Full Name"}</td>
                    <td>{"Date of Birth"}</td>
                    <td>{"Age"}</td>
                    <td>{"Number of Classes"}</td>
                    <td>{"Actions"}</td>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}
