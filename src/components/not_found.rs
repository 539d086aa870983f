use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page-hero">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
        </div>
        <div class="page-body">
            <a href="/" class="btn btn-outline">"← All Dealers"</a>
        </div>
    }
}
