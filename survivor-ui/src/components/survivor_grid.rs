use crate::store::use_survivor_store;
use leptos::*;
use survivor_model::grid::{self, Column};

/// Every survivor the backend knows about, one row each, in the order
/// received. Stays header-only until the list arrives, and for good if the
/// request fails.
#[component]
pub fn SurvivorGrid() -> impl IntoView {
    let store = use_survivor_store();
    store.ensure_survivors();

    let rows = create_memo(move |_| {
        store
            .survivors
            .with(|s| grid::rows(s.ready().map(Vec::as_slice).unwrap_or_default()))
    });

    view! {
      <div class="survivor-grid">
        <table>
          <thead>
            <tr>
              {Column::ALL
                  .iter()
                  .map(|c| view! { <th scope="col" data-field=c.field()>{c.header()}</th> })
                  .collect_view()}
            </tr>
          </thead>
          <tbody>
            <For
              each=move || rows.get().into_iter().enumerate()
              key=|(i, row)| (*i, row.clone())
              children=move |(_, row)| view! {
                <tr>
                  {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                </tr>
              }
            />
          </tbody>
        </table>
      </div>
    }
}
