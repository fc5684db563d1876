use shared::{RosterView, SortCriterion, Teacher};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::edit_teacher_modal::EditTeacherModal;
use components::header::Header;
use components::roster_toolbar::RosterToolbar;
use components::teacher_form::TeacherForm;
use components::teacher_table::TeacherTable;
use hooks::use_roster::use_roster;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::from_build_env());
    let roster = use_roster(&api_client);
    let view = use_state(RosterView::default);
    let editing_id = use_state(|| None::<String>);

    let on_search_change = {
        let view = view.clone();
        Callback::from(move |text: String| view.set(view.with_search_text(text)))
    };

    let on_sort_change = {
        let view = view.clone();
        Callback::from(move |criterion: SortCriterion| view.set(view.with_sort(criterion)))
    };

    let on_toggle_average = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(view.toggle_average()))
    };

    let on_edit = {
        let editing_id = editing_id.clone();
        Callback::from(move |teacher_id: String| editing_id.set(Some(teacher_id)))
    };

    let on_close_edit = {
        let editing_id = editing_id.clone();
        Callback::from(move |_: ()| editing_id.set(None))
    };

    let presented = view.present(&roster.state.teachers);
    let rows: Vec<Teacher> = presented.rows.into_iter().cloned().collect();

    html! {
        <div class="app">
            <Header
                search_text={view.search_text().to_string()}
                on_search_change={on_search_change}
            />
            <TeacherForm
                api_client={(*api_client).clone()}
                on_reload={roster.actions.reload.clone()}
            />
            <RosterToolbar
                sort={view.sort()}
                show_average={presented.show_average}
                average={presented.average}
                on_sort_change={on_sort_change}
                on_toggle_average={on_toggle_average}
            />
            if let Some(error) = roster.state.error.clone() {
                <div class="roster-error">{error}</div>
            }
            <TeacherTable
                rows={rows}
                loading={roster.state.loading}
                on_edit={on_edit}
                on_delete={roster.actions.delete_teacher.clone()}
            />
            <EditTeacherModal
                api_client={(*api_client).clone()}
                teacher_id={(*editing_id).clone()}
                on_close={on_close_edit}
                on_reload={roster.actions.reload.clone()}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
