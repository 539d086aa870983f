// Browser tests: wasm-pack test --headless --firefox --no-default-features --features wasm-test
#![cfg(target_arch = "wasm32")]

mod mocks;

use bestcars::api::ApiClient;
use bestcars::auth::AuthContext;
use bestcars::components::dealers::Dealers;
use bestcars::components::header::Header;
use bestcars::components::post_review::PostReview;
use bestcars::components::register::Register;
use bestcars::components::reviews_list::ReviewsList;
use bestcars::components::sentiment_badge::SentimentBadge;
use bestcars::models::review::Review;
use bestcars::session::{MemoryStorage, SessionStorage, SessionStore};
use gloo_timers::future::sleep;
use leptos::*;
use leptos_router::{Route, Router, Routes};
use mocks::fetch_mock::{fetch_calls_matching, install_fetch_mock, last_fetch_matching, restore_fetch};
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Helper function to create a fresh mount point
fn mount_point(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.dyn_into::<web_sys::HtmlElement>().unwrap()
}

fn logged_out_auth() -> AuthContext {
    AuthContext::new(SessionStore::new(MemoryStorage::default()), Callback::new(|_| ()))
}

// Dispatches a bubbling event so delegated listeners see it
fn fire(element: &web_sys::Element, kind: &str) {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = web_sys::Event::new_with_event_init_dict(kind, &init).unwrap();
    element.dispatch_event(&event).unwrap();
}

fn type_into(container: &web_sys::HtmlElement, selector: &str, text: &str) {
    let element = container.query_selector(selector).unwrap().unwrap();
    element.clone().dyn_into::<web_sys::HtmlInputElement>().unwrap().set_value(text);
    fire(&element, "input");
}

fn current_path() -> String {
    web_sys::window().unwrap().location().pathname().unwrap()
}

#[wasm_bindgen_test]
async fn unknown_sentiment_renders_neutral_badge() {
    let container = mount_point("badge-unknown");
    mount_to(container.clone(), || view! { <SentimentBadge label="mixed"/> });
    sleep(Duration::from_millis(10)).await;

    let html = container.inner_html();
    assert!(html.contains("badge-neutral"), "got {html}");
    assert!(html.contains("😐"));
    assert!(html.contains("mixed"));
}

#[wasm_bindgen_test]
async fn positive_sentiment_renders_positive_badge() {
    let container = mount_point("badge-positive");
    mount_to(container.clone(), || view! { <SentimentBadge label="positive"/> });
    sleep(Duration::from_millis(10)).await;

    let html = container.inner_html();
    assert!(html.contains("badge-positive"));
    assert!(html.contains("😊"));
}

#[wasm_bindgen_test]
async fn verified_purchase_only_for_purchases() {
    let container = mount_point("reviews");
    let reviews = vec![
        Review {
            id: "1".into(),
            name: "Buyer".into(),
            review: "Bought a car".into(),
            purchase: true,
            sentiment: Some("positive".into()),
            ..Default::default()
        },
        Review {
            id: "2".into(),
            name: "Visitor".into(),
            review: "Just looked".into(),
            purchase: false,
            ..Default::default()
        },
    ];
    mount_to(container.clone(), move || view! { <ReviewsList reviews=reviews/> });
    sleep(Duration::from_millis(10)).await;

    let html = container.inner_html();
    assert_eq!(html.matches("Verified Purchase").count(), 1);
    // the second review has no sentiment and therefore no badge
    assert_eq!(html.matches("badge-positive").count(), 1);
    assert!(!html.contains("badge-neutral"));
}

#[wasm_bindgen_test]
async fn header_shows_user_after_restore() {
    let container = mount_point("header-logged-in");
    let storage = MemoryStorage::default();
    storage.set("username", "jdoe");
    storage.set("firstname", "Jane");

    mount_to(container.clone(), move || {
        let auth = AuthContext::new(SessionStore::new(storage), Callback::new(|_| ()));
        auth.restore();
        view! { <Router><Header auth=auth/></Router> }
    });
    sleep(Duration::from_millis(10)).await;

    let html = container.inner_html();
    assert!(html.contains("Jane"));
    assert!(html.contains("Logout"));
    assert!(!html.contains("/register"));
}

#[wasm_bindgen_test]
async fn header_offers_login_when_logged_out() {
    let container = mount_point("header-logged-out");

    mount_to(container.clone(), move || {
        let auth = AuthContext::new(SessionStore::new(MemoryStorage::default()), Callback::new(|_| ()));
        auth.restore();
        view! { <Router><Header auth=auth/></Router> }
    });
    sleep(Duration::from_millis(10)).await;

    let html = container.inner_html();
    assert!(html.contains("/login"));
    assert!(html.contains("/register"));
    assert!(!html.contains("Logout"));
    assert!(html.contains("/static/About.html"));
}

#[wasm_bindgen_test]
async fn search_filters_locally_and_state_change_refetches() {
    install_fetch_mock();
    let container = mount_point("dealers");
    let auth = logged_out_auth();
    auth.restore();
    let api = ApiClient::new("http://bestcars.test");

    mount_to(container.clone(), move || view! { <Dealers auth=auth api=api/> });
    sleep(Duration::from_millis(50)).await;

    assert_eq!(fetch_calls_matching("/djangoapp/get_dealers"), 1);
    let html = container.inner_html();
    assert!(html.contains("Springfield Motors"), "got {html}");
    // the second dealer carries a string id
    assert!(html.contains("Lakeside Autos"));
    assert!(html.contains("/dealer/a1b2c3"));
    assert!(!html.contains("Review Dealer"));

    type_into(&container, "input[type=text]", "LAKE");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(fetch_calls_matching("/djangoapp/get_dealers"), 1);
    let html = container.inner_html();
    assert!(html.contains("Lakeside Autos"));
    assert!(!html.contains("Springfield Motors"));

    let select = container.query_selector("select").unwrap().unwrap();
    select.clone().dyn_into::<web_sys::HtmlSelectElement>().unwrap().set_value("Texas");
    fire(&select, "change");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(fetch_calls_matching("/djangoapp/get_dealers"), 2);
    assert!(last_fetch_matching("/djangoapp/get_dealers").ends_with("/get_dealers/Texas"));

    restore_fetch();
}

#[wasm_bindgen_test]
async fn duplicate_username_stays_on_register_page() {
    install_fetch_mock();
    let container = mount_point("register");
    let auth = logged_out_auth();
    auth.restore();
    let api = ApiClient::new("http://bestcars.test");
    let start_path = current_path();

    mount_to(container.clone(), move || view! { <Router><Register auth=auth api=api/></Router> });
    sleep(Duration::from_millis(10)).await;

    type_into(&container, "input[name=userName]", "taken");
    type_into(&container, "input[name=firstName]", "Jane");
    type_into(&container, "input[name=lastName]", "Doe");
    type_into(&container, "input[name=email]", "jane@bestcars.test");
    type_into(&container, "input[name=password]", "secret1");
    fire(&container.query_selector("form").unwrap().unwrap(), "submit");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(fetch_calls_matching("/djangoapp/register"), 1);
    let html = container.inner_html();
    assert!(html.contains("This username is already taken"), "got {html}");
    assert!(!auth.is_logged_in());
    assert_eq!(current_path(), start_path);

    restore_fetch();
}

#[wasm_bindgen_test]
async fn review_page_waits_for_restore_then_redirects_logged_out_visitor() {
    install_fetch_mock();
    let window = web_sys::window().unwrap();
    let start_href = window.location().href().unwrap();
    let container = mount_point("post-review");
    let auth = logged_out_auth();
    let api = ApiClient::new("http://bestcars.test");

    mount_to(container.clone(), move || {
        view! {
            <Router>
                <Routes>
                    <Route path="/login" view=|| view! { <p>"login page"</p> }/>
                    <Route path="/*any" view=move || view! { <PostReview auth=auth api=api/> }/>
                </Routes>
            </Router>
        }
    });
    sleep(Duration::from_millis(20)).await;

    // session not read yet: neither the form nor a redirect
    let html = container.inner_html();
    assert!(html.contains("spinner"), "got {html}");
    assert!(!html.contains("<form"));
    assert!(!html.contains("login page"));

    auth.restore();
    sleep(Duration::from_millis(50)).await;

    let html = container.inner_html();
    assert!(html.contains("login page"), "got {html}");
    assert!(!html.contains("<form"));
    assert_eq!(current_path(), "/login");
    assert_eq!(fetch_calls_matching("/djangoapp/get_cars"), 0);

    window
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(&start_href))
        .unwrap();
    restore_fetch();
}
