use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
      <header class="header">
        <h1>"Robot Apocalypse"</h1>
      </header>
      <div class="main-image">
        <img src="the-matrix.png" alt="The matrix"/>
      </div>
    }
}
