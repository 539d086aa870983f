use leptos::*;
use leptos_router::use_navigate;
use crate::auth::AuthContext;

/// Navigation bar. Shows the user and a logout button, or login/register links.
#[component]
pub fn Header(auth: AuthContext) -> impl IntoView {
    let navigate = use_navigate();

    let logout = move |_: ev::MouseEvent| {
        auth.handle_logout();
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar-brand">"🚗 Best Cars Dealership"</a>
            <ul class="navbar-nav">
                <li><a class="nav-link" rel="external" href="/static/About.html">"About Us"</a></li>
                <li><a class="nav-link" rel="external" href="/static/Contact.html">"Contact Us"</a></li>
                <Show
                    when=move || auth.is_logged_in()
                    fallback=|| view! {
                        <li><a href="/login" class="btn btn-outline btn-light">"Login"</a></li>
                        <li><a href="/register" class="btn btn-primary">"Register"</a></li>
                    }
                >
                    <li><span class="nav-link nav-user">"👤 " {move || auth.display_name()}</span></li>
                    <li>
                        <button class="btn btn-danger" on:click=logout.clone()>"Logout"</button>
                    </li>
                </Show>
            </ul>
        </nav>
    }
}
