use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub search_text: String,
    pub on_search_change: Callback<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_input = {
        let on_search_change = props.on_search_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search_change.emit(input.value());
        })
    };

    html! {
        <header class="header">
            <h1>{"Teacher Management Application"}</h1>
            <input
                type="search"
                class="search-input"
                placeholder="Search by full name"
                value={props.search_text.clone()}
                oninput={on_input}
            />
        </header>
    }
}
