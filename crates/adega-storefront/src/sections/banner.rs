use leptos::prelude::*;

#[component]
pub fn Banner() -> impl IntoView {
    view! {
        <section class="banner">
            <h1>"Um clube de vinhos feito para você"</h1>
            <p>"Rótulos selecionados todo mês, direto na sua casa."</p>
        </section>
    }
}
