use crate::store::use_survivor_store;
use leptos::*;
use survivor_model::chart::{pie_slices, ChartData, SliceShape, DATASET_LABEL};
use survivor_model::grid::format_number;

#[component]
pub fn InfectionChart() -> impl IntoView {
    let store = use_survivor_store();
    store.ensure_stats();

    let chart = create_memo(move |_| store.stats.with(|s| ChartData::from_stats(s.ready())));

    let slices = move || {
        let chart = chart.get();
        let stroke_width = chart.datasets.first().map_or(1, |d| d.border_width);
        pie_slices(&chart)
            .into_iter()
            .map(|slice| match slice.shape {
                SliceShape::Full => view! {
                  <circle
                    cx="0"
                    cy="0"
                    r="1"
                    fill=slice.fill
                    stroke=slice.stroke
                    stroke-width=stroke_width
                    vector-effect="non-scaling-stroke"
                  />
                }
                .into_view(),
                SliceShape::Wedge(d) => view! {
                  <path
                    d=d
                    fill=slice.fill
                    stroke=slice.stroke
                    stroke-width=stroke_width
                    vector-effect="non-scaling-stroke"
                  />
                }
                .into_view(),
            })
            .collect_view()
    };

    let legend = move || {
        let chart = chart.get();
        let Some(dataset) = chart.datasets.first().cloned() else {
            return ().into_view();
        };
        chart
            .labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let swatch = format!(
                    "background-color: {}; border: {}px solid {}",
                    dataset.background_color[i], dataset.border_width, dataset.border_color[i]
                );
                let value = dataset.data[i].map_or_else(|| "–".to_string(), format_number);
                view! {
                  <li>
                    <span class="swatch" style=swatch></span>
                    <span class="label">{label}</span>
                    " "
                    <span class="value">{value}</span>
                  </li>
                }
            })
            .collect_view()
    };

    view! {
      <figure class="infection-chart">
        <svg viewBox="-1.05 -1.05 2.1 2.1" width="320" height="320" role="img" aria-label=DATASET_LABEL>
          {slices}
        </svg>
        <figcaption>
          <ul class="legend">{legend}</ul>
        </figcaption>
      </figure>
    }
}
