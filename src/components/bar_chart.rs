use yew::prelude::*;

use crate::models::ChartPoint;

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub title: AttrValue,
    pub points: Vec<ChartPoint>,
}

/// Gráfico de barras horizontal en HTML/CSS (ancho relativo al máximo)
#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let max = props.points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    html! {
        <div class="chart-card">
            <h3>{props.title.clone()}</h3>
            if props.points.is_empty() {
                <p class="chart-empty">{"No data"}</p>
            } else {
                <ul class="bar-chart">
                    { for props.points.iter().map(|point| {
                        let width = if max > 0.0 { point.value / max * 100.0 } else { 0.0 };
                        html! {
                            <li class="bar-row" key={point.key.clone()}>
                                <span class="bar-label">{&point.name}</span>
                                <span class="bar-track">
                                    <span class="bar-fill" style={format!("width: {:.1}%", width)}></span>
                                </span>
                                <span class="bar-value">{point.value}</span>
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
