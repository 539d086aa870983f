use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p><strong>"🚗 Best Cars Dealership"</strong>" © 2024. All rights reserved."</p>
        </footer>
    }
}
