use leptos::logging::error;
use leptos::*;
use leptos_router::use_params_map;
use crate::api::ApiClient;
use crate::auth::AuthContext;
use crate::components::footer::Footer;
use crate::components::reviews_list::ReviewsList;
use crate::models::dealer::Dealer;
use crate::models::review::Review;

/// `/dealer/:id`: dealer information and its reviews.
#[component]
pub fn DealerDetail(auth: AuthContext, api: ApiClient) -> impl IntoView {
    let params = use_params_map();
    let dealer_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let (dealer, set_dealer) = create_signal(None::<Dealer>);
    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        let id = dealer_id();
        set_loading.set(true);
        spawn_local(async move {
            // Both requests run concurrently and the page renders once both settled
            let (dealer_result, reviews_result) =
                futures::join!(api.get_dealer(&id), api.get_reviews(&id));

            set_dealer.set(dealer_result.unwrap_or_else(|err| {
                error!("[DEALER] failed to fetch dealer {}: {}", id, err);
                None
            }));
            set_reviews.set(reviews_result.unwrap_or_else(|err| {
                error!("[DEALER] failed to fetch reviews for dealer {}: {}", id, err);
                Vec::new()
            }));
            set_loading.set(false);
        });
    });

    let post_review_href = move || format!("/postreview/{}", dealer_id());

    let content = move || {
        if loading.get() {
            return view! { <div class="spinner"></div> }.into_view();
        }

        let hero = match dealer.get() {
            Some(d) => view! {
                <h1>{d.full_name.clone()}</h1>
                <p>"📍 " {d.city.clone()} ", " {d.state.clone()} " — " {d.address.clone()}</p>
            }
            .into_view(),
            None => view! { <h1>"Dealer #" {dealer_id()}</h1> }.into_view(),
        };

        view! {
            <div class="page-hero">{hero}</div>
            <div class="page-body">
                <div class="action-bar">
                    <a href="/" class="btn btn-outline">"← All Dealers"</a>
                    <Show
                        when=move || auth.is_logged_in()
                        fallback=|| view! {
                            <div class="login-hint">
                                <a href="/login">"Login"</a> " to post a review"
                            </div>
                        }
                    >
                        <a href=post_review_href class="btn btn-danger">"✍️ Write a Review"</a>
                    </Show>
                </div>

                {dealer.get().map(|d| view! { <DealerInfo dealer=d/> })}

                <h2 class="section-title">"Customer Reviews (" {move || reviews.with(Vec::len)} ")"</h2>
                {move || {
                    let list = reviews.get();
                    if list.is_empty() {
                        view! {
                            <div class="card empty-state">
                                <div class="empty-icon">"💬"</div>
                                <h4>"No reviews yet"</h4>
                                <p>"Be the first to review this dealership!"</p>
                                <Show when=move || auth.is_logged_in()>
                                    <a href=post_review_href class="btn btn-primary">"Write First Review"</a>
                                </Show>
                            </div>
                        }
                            .into_view()
                    } else {
                        view! { <ReviewsList reviews=list/> }.into_view()
                    }
                }}
            </div>
        }
        .into_view()
    };

    view! {
        <div>
            {content}
            <Footer/>
        </div>
    }
}

#[component]
fn DealerInfo(dealer: Dealer) -> impl IntoView {
    view! {
        <div class="card dealer-info">
            <h3>"Dealer Information"</h3>
            <div class="info-grid">
                <div><strong>"Full Name: "</strong>{dealer.full_name}</div>
                <div><strong>"Short Name: "</strong>{dealer.short_name}</div>
                <div><strong>"City: "</strong>{dealer.city}</div>
                <div><strong>"State: "</strong>{dealer.state} " (" {dealer.st} ")"</div>
                <div><strong>"Address: "</strong>{dealer.address}</div>
                <div><strong>"Zip Code: "</strong>{dealer.zip}</div>
            </div>
        </div>
    }
}
