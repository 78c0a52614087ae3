use crate::bridge::HttpSource;
use crate::components::header::Header;
use crate::components::infection_chart::InfectionChart;
use crate::components::intake_form::IntakeForm;
use crate::components::survivor_grid::SurvivorGrid;
use crate::store::SurvivorStore;
use leptos::*;
use survivor_model::UiConfig;

/// Page shell. Owns the shared store; which views appear below the header
/// is decided by `config.panels` (chart only unless configured otherwise).
#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    SurvivorStore::provide(HttpSource::new(config.api.clone()));
    let panels = config.panels;

    view! {
      <div class="App">
        <Header/>
        {panels.chart.then(|| view! { <InfectionChart/> })}
        {panels.grid.then(|| view! { <SurvivorGrid/> })}
        {panels.form.then(|| view! { <IntakeForm/> })}
      </div>
    }
}
