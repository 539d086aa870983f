/// Dealer listing with a state filter (re-fetches) and a name/city search (local only).
use leptos::logging::{error, log};
use leptos::*;
use crate::api::ApiClient;
use crate::auth::AuthContext;
use crate::components::footer::Footer;
use crate::config::{ALL_STATES, STATE_FILTERS};
use crate::models::dealer::{filter_dealers, Dealer};

#[component]
pub fn Dealers(auth: AuthContext, api: ApiClient) -> impl IntoView {
    let (dealers, set_dealers) = create_signal(Vec::<Dealer>::new());
    let (loading, set_loading) = create_signal(true);
    let (selected_state, set_selected_state) = create_signal(ALL_STATES.to_string());
    let (search, set_search) = create_signal(String::new());

    // Fetch on mount and on every state change; the search box never re-fetches.
    create_effect(move |_| {
        let state = selected_state.get();
        set_loading.set(true);
        spawn_local(async move {
            match api.get_dealers(Some(&state)).await {
                Ok(list) => {
                    log!("[DEALERS] loaded {} dealers for {}", list.len(), state);
                    set_dealers.set(list);
                }
                Err(err) => {
                    error!("[DEALERS] failed to fetch dealers for {}: {}", state, err);
                    set_dealers.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    let visible = create_memo(move |_| search.with(|query| dealers.with(|all| filter_dealers(all, query))));

    view! {
        <div>
            <div class="page-hero">
                <h1>"🚗 Car Dealerships"</h1>
                <p>"Find trusted dealerships across the United States"</p>
            </div>

            <div class="filter-bar">
                <div class="filter-search">
                    <input
                        type="text"
                        class="form-control"
                        placeholder="🔍 Search by name or city..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <select
                        class="form-control"
                        prop:value=move || selected_state.get()
                        on:change=move |ev| set_selected_state.set(event_target_value(&ev))
                    >
                        {STATE_FILTERS
                            .iter()
                            .map(|state| {
                                let label = if *state == ALL_STATES { "All States" } else { *state };
                                view! { <option value=state.to_string()>{label}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
                <Show when=move || auth.is_logged_in()>
                    <div class="logged-in-as">
                        "✅ Logged in as: " <strong>{move || auth.user_name()}</strong>
                    </div>
                </Show>
            </div>

            <div class="dealer-grid">
                {move || {
                    if loading.get() {
                        view! { <div class="spinner"></div> }.into_view()
                    } else if visible.with(Vec::is_empty) {
                        view! {
                            <div class="empty-state">
                                <div class="empty-icon">"🔍"</div>
                                <h3>"No dealers found"</h3>
                                <p>"Try adjusting your search or state filter"</p>
                            </div>
                        }
                            .into_view()
                    } else {
                        view! {
                            <div class="row">
                                <For
                                    each=move || visible.get()
                                    key=Dealer::key
                                    children=move |dealer| view! { <DealerCard dealer=dealer auth=auth/> }
                                />
                            </div>
                        }
                            .into_view()
                    }
                }}
            </div>

            <Footer/>
        </div>
    }
}

#[component]
fn DealerCard(dealer: Dealer, auth: AuthContext) -> impl IntoView {
    let detail_href = format!("/dealer/{}", dealer.id);
    let review_href = format!("/postreview/{}", dealer.id);

    view! {
        <div class="col-3">
            <div class="card">
                <div class="card-tags">
                    <span class="tag-id">"ID: " {dealer.id.clone()}</span>
                    <span class="tag-state">{dealer.st.clone()}</span>
                </div>
                <h3 class="card-title">{dealer.full_name.clone()}</h3>
                <p class="card-city">"📍 " {dealer.city.clone()} ", " {dealer.state.clone()}</p>
                <p class="card-address">{dealer.address.clone()} ", " {dealer.zip.clone()}</p>
                <div class="card-actions">
                    <a href=detail_href class="btn btn-primary">"View Reviews"</a>
                    <Show when=move || auth.is_logged_in()>
                        <a href=review_href.clone() class="btn btn-danger">"Review Dealer"</a>
                    </Show>
                </div>
            </div>
        </div>
    }
}
