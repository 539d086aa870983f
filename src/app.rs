/// Application shell for the Best Cars dealership frontend.
/// Owns the session, renders the header and routes each path to its page.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::api::ApiClient;
use crate::auth::AuthContext;
use crate::components::{
    dealer_detail::DealerDetail, dealers::Dealers, header::Header, login::Login,
    not_found::NotFound, post_review::PostReview, register::Register,
};
use crate::session::SessionStore;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::default();
    let auth = AuthContext::new(
        SessionStore::browser(),
        Callback::new(move |_| api.logout_in_background()),
    );

    // Effects only run in the browser, so the stored session is read after hydration.
    create_effect(move |_| auth.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/bestcars.css"/>
        <Title text="Best Cars Dealership"/>
        <Router>
            <Header auth=auth/>
            <main>
                <Routes>
                    <Route path="/" view=move || view! { <Dealers auth=auth api=api/> }/>
                    <Route path="/dealers" view=move || view! { <Dealers auth=auth api=api/> }/>
                    <Route path="/dealer/:id" view=move || view! { <DealerDetail auth=auth api=api/> }/>
                    <Route path="/postreview/:id" view=move || view! { <PostReview auth=auth api=api/> }/>
                    <Route path="/login" view=move || view! { <Login auth=auth api=api/> }/>
                    <Route path="/register" view=move || view! { <Register auth=auth api=api/> }/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}
