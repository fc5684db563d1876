use shared::{ClassAverage, SortCriterion};
use web_sys::{HtmlSelectElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RosterToolbarProps {
    pub sort: SortCriterion,
    pub show_average: bool,
    pub average: ClassAverage,
    pub on_sort_change: Callback<SortCriterion>,
    pub on_toggle_average: Callback<()>,
}

#[function_component(RosterToolbar)]
pub fn roster_toolbar(props: &RosterToolbarProps) -> Html {
    let on_change = {
        let on_sort_change = props.on_sort_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            // The options are generated from SortCriterion::ALL
            if let Ok(criterion) = select.value().parse::<SortCriterion>() {
                on_sort_change.emit(criterion);
            }
        })
    };

    let on_toggle = {
        let on_toggle_average = props.on_toggle_average.clone();
        Callback::from(move |_: MouseEvent| on_toggle_average.emit(()))
    };

    html! {
        <div class="toolbar">
            <label>
                {"Sort by: "}
                <select onchange={on_change}>
                    {for SortCriterion::ALL.iter().map(|criterion| html! {
                        <option
                            value={criterion.as_str()}
                            selected={*criterion == props.sort}
                        >
                            {criterion.label()}
                        </option>
                    })}
                </select>
            </label>
            <div>
                <button type="button" class="btn btn-primary" onclick={on_toggle}>
                    {if props.show_average {
                        "Hide Average Number of Classes"
                    } else {
                        "Show Average Number of Classes"
                    }}
                </button>
                if props.show_average {
                    <span class="average-display">
                        {format!("Average number of classes: {}", props.average)}
                    </span>
                }
            </div>
        </div>
    }
}
