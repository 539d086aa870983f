use chrono::{Datelike, Utc};
use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::logging::{error, log, warn};
use leptos::*;
use leptos_router::{use_navigate, use_params_map, Redirect};
use crate::api::ApiClient;
use crate::auth::AuthContext;
use crate::components::footer::Footer;
use crate::components::sentiment_badge::SentimentBadge;
use crate::config::{REDIRECT_DELAY_MS, REVIEW_YEARS};
use crate::models::car::CarCatalog;
use crate::models::dealer::Dealer;
use crate::models::review::{default_car_year, ReviewDraft};

/// `/postreview/:id`. Logged-out visitors are sent to `/login` without seeing the form.
#[component]
pub fn PostReview(auth: AuthContext, api: ApiClient) -> impl IntoView {
    let params = use_params_map();
    let dealer_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    move || {
        if !auth.is_restored() {
            // the session has not been read from storage yet
            view! { <div class="spinner"></div> }.into_view()
        } else if !auth.is_logged_in() {
            view! { <Redirect path="/login"/> }.into_view()
        } else {
            view! { <ReviewForm auth=auth api=api dealer_id=dealer_id()/> }.into_view()
        }
    }
}

#[component]
fn ReviewForm(auth: AuthContext, api: ApiClient, dealer_id: String) -> impl IntoView {
    let navigate = use_navigate();

    let (dealer, set_dealer) = create_signal(None::<Dealer>);
    let (catalog, set_catalog) = create_signal(CarCatalog::default());
    let draft = create_rw_signal(ReviewDraft::new(default_car_year(Utc::now().year())));
    let (submitting, set_submitting) = create_signal(false);
    let (submitted, set_submitted) = create_signal(false);
    let (form_error, set_form_error) = create_signal(None::<String>);
    let (preview, set_preview) = create_signal(None::<String>);

    let fetch_id = dealer_id.clone();
    create_effect(move |_| {
        let id = fetch_id.clone();
        spawn_local(async move {
            let (dealer_result, cars_result) = futures::join!(api.get_dealer(&id), api.get_cars());
            match dealer_result {
                Ok(found) => set_dealer.set(found),
                Err(err) => error!("[POST_REVIEW] failed to fetch dealer {}: {}", id, err),
            }
            match cars_result {
                Ok(cars) => set_catalog.set(cars),
                Err(err) => error!("[POST_REVIEW] failed to fetch car models: {}", err),
            }
        });
    });

    let submit_id = dealer_id.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let payload = match draft.get_untracked().into_submission(&submit_id, &auth.user_name()) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("[POST_REVIEW] not submitting: {}", err);
                set_form_error.set(Some(err.to_string()));
                return;
            }
        };
        set_form_error.set(None);
        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api.add_review(&payload).await;
            set_submitting.set(false);
            match result {
                Ok(true) => {
                    log!("[POST_REVIEW] review posted for dealer {}", payload.dealership);
                    set_submitted.set(true);
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate(&format!("/dealer/{}", payload.dealership), Default::default());
                }
                Ok(false) => error!("[POST_REVIEW] backend rejected review for dealer {}", payload.dealership),
                Err(err) => error!("[POST_REVIEW] error submitting review: {}", err),
            }
        });
    };

    let preview_sentiment = move |_: ev::MouseEvent| {
        let text = draft.with_untracked(|d| d.review.clone());
        if text.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match api.analyze_review(&text).await {
                Ok(label) => set_preview.set(label),
                Err(err) => error!("[POST_REVIEW] sentiment preview failed: {}", err),
            }
        });
    };

    let on_make_change = move |ev: ev::Event| {
        let make = event_target_value(&ev);
        catalog.with_untracked(|cars| draft.update(|d| d.select_make(&make, cars)));
    };

    let dealer_label = dealer_id.clone();
    let back_href = format!("/dealer/{}", dealer_id);

    let form = move || {
        if submitted.get() {
            return view! {
                <div class="submitted">
                    <div class="submitted-icon">"✅"</div>
                    <h2>"Review Submitted!"</h2>
                    <p>"Redirecting to dealer page..."</p>
                </div>
            }
            .into_view();
        }

        view! {
            <form on:submit=on_submit.clone()>
                <div class="form-group">
                    <label class="form-label">"Your Review *"</label>
                    <textarea
                        name="review"
                        class="form-control"
                        rows="5"
                        required
                        placeholder="Share your experience with this dealership..."
                        prop:value=move || draft.with(|d| d.review.clone())
                        on:input=move |ev| draft.update(|d| d.review = event_target_value(&ev))
                    ></textarea>
                    <div class="preview-row">
                        <button type="button" class="btn btn-outline" on:click=preview_sentiment>
                            "Preview sentiment"
                        </button>
                        {move || preview.get().map(|label| view! { <SentimentBadge label=label/> })}
                    </div>
                </div>

                <div class="form-group form-check">
                    <input
                        type="checkbox"
                        id="purchase"
                        name="purchase"
                        prop:checked=move || draft.with(|d| d.purchase)
                        on:change=move |ev| draft.update(|d| d.purchase = event_target_checked(&ev))
                    />
                    <label for="purchase">"I purchased a car from this dealership"</label>
                </div>

                <Show when=move || draft.with(|d| d.purchase)>
                    <div class="form-group">
                        <label class="form-label">"Purchase Date"</label>
                        <input
                            type="date"
                            name="purchase_date"
                            class="form-control"
                            prop:value=move || draft.with(|d| d.purchase_date.clone())
                            on:input=move |ev| draft.update(|d| d.purchase_date = event_target_value(&ev))
                        />
                    </div>
                </Show>

                <div class="form-group">
                    <label class="form-label">"Car Make"</label>
                    <select
                        name="car_make"
                        class="form-control"
                        prop:value=move || draft.with(|d| d.car_make.clone())
                        on:change=on_make_change
                    >
                        <option value="">"-- Select Car Make --"</option>
                        {move || catalog.with(CarCatalog::makes)
                            .into_iter()
                            .map(|make| view! { <option value=make.clone()>{make}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label class="form-label">"Car Model"</label>
                    <select
                        name="car_model"
                        class="form-control"
                        prop:disabled=move || draft.with(|d| d.car_make.is_empty())
                        prop:value=move || draft.with(|d| d.car_model.clone())
                        on:change=move |ev| draft.update(|d| d.car_model = event_target_value(&ev))
                    >
                        <option value="">"-- Select Car Model --"</option>
                        {move || {
                            let make = draft.with(|d| d.car_make.clone());
                            catalog
                                .with(|cars| cars.models_for(&make))
                                .into_iter()
                                .map(|model| view! {
                                    <option value=model.car_model.clone()>
                                        {format!("{} ({})", model.car_model, model.car_type)}
                                    </option>
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="form-group">
                    <label class="form-label">"Car Year"</label>
                    <select
                        name="car_year"
                        class="form-control"
                        prop:value=move || draft.with(|d| d.car_year.to_string())
                        on:change=move |ev| {
                            if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                                draft.update(|d| d.car_year = year);
                            }
                        }
                    >
                        {REVIEW_YEARS
                            .iter()
                            .map(|year| view! { <option value=year.to_string()>{*year}</option> })
                            .collect_view()}
                    </select>
                </div>

                {move || form_error.get().map(|message| view! { <div class="alert-error">{message}</div> })}

                <button type="submit" class="btn btn-primary btn-block" prop:disabled=move || submitting.get()>
                    {move || if submitting.get() { "⏳ Submitting..." } else { "🚀 Submit Review" }}
                </button>
            </form>
        }
        .into_view()
    };

    view! {
        <div>
            <div class="page-hero">
                <h1>"✍️ Post a Review"</h1>
                <p>
                    {move || match dealer.get() {
                        Some(d) => d.full_name,
                        None => format!("Dealer #{}", dealer_label),
                    }}
                </p>
            </div>

            <div class="page-body narrow">
                <div class="action-bar">
                    <a href=back_href class="btn btn-outline">"← Back to Dealer"</a>
                </div>
                <div class="card">
                    <h3>"Share Your Experience"</h3>
                    <p class="posting-as">"Posting as: " <strong>{move || auth.user_name()}</strong></p>
                    {form}
                </div>
            </div>

            <Footer/>
        </div>
    }
}
