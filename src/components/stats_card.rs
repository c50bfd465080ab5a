use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: AttrValue,
    #[prop_or_default]
    pub highlight: bool,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    let class = classes!("stats-card", props.highlight.then_some("stats-card-warning"));
    html! {
        <div {class}>
            <div class="stats-icon">{props.icon.clone()}</div>
            <div class="stats-body">
                <span class="stats-title">{props.title.clone()}</span>
                <span class="stats-value">{props.value.clone()}</span>
            </div>
        </div>
    }
}
