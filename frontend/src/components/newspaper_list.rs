use yew::prelude::*;
use shared::{format_rupees, Newspaper};

#[derive(Properties, PartialEq)]
pub struct NewspaperListProps {
    pub newspapers: Vec<Newspaper>,
    pub loading: bool,
}

#[function_component(NewspaperList)]
pub fn newspaper_list(props: &NewspaperListProps) -> Html {
    if props.loading {
        return html! { <div class="newspaper-list loading">{"Loading newspapers..."}</div> };
    }

    if props.newspapers.is_empty() {
        return html! {};
    }

    html! {
        <section class="newspaper-list">
            <h3>{"Newspapers"}</h3>
            <ul>
                {for props.newspapers.iter().map(|paper| html! {
                    <li key={paper.id.to_string()}>
                        <span class="newspaper-name">{&paper.name}</span>
                        <span class="newspaper-price">{format!("usual price {}", format_rupees(paper.price))}</span>
                    </li>
                })}
            </ul>
        </section>
    }
}
