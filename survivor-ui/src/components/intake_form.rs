use leptos::*;
use survivor_model::intake::{IntakeDraft, IntakeField};

/// Captures a new survivor's details. Submitting is a no-op until a write
/// endpoint exists; the browser's default navigation is suppressed.
#[component]
pub fn IntakeForm() -> impl IntoView {
    let draft = create_rw_signal(IntakeDraft::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let filled = draft.with_untracked(IntakeDraft::filled);
        log::debug!(
            "intake submission ignored ({filled} of {} fields filled)",
            IntakeField::ALL.len()
        );
    };

    view! {
      <form class="intake-form" on:submit=on_submit>
        <div class="form-fields">
          {IntakeField::ALL
              .into_iter()
              .map(|field| view! {
                <div>
                  <label for=field.input_id()>{field.label()}</label>
                  <input
                    type="text"
                    id=field.input_id()
                    prop:value=move || draft.with(|d| d.get(field).to_string())
                    on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
                  />
                </div>
              })
              .collect_view()}
        </div>
        <div class="form-actions">
          <button type="submit">"Submit"</button>
        </div>
      </form>
    }
}
