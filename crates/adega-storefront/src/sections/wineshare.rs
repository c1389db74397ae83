use leptos::prelude::*;

/// Footer call to action for the referral program.
#[component]
pub fn Wineshare() -> impl IntoView {
    view! {
        <footer class="wineshare">
            <h2>"Wineshare"</h2>
            <p>"Indique amigos e ganhe créditos para a próxima compra."</p>
        </footer>
    }
}
