use leptos::*;
use crate::components::sentiment_badge::SentimentBadge;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    reviews
        .into_iter()
        .map(|review| view! { <ReviewCard review=review/> })
        .collect_view()
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let badge = review
        .sentiment_label()
        .map(|label| view! { <SentimentBadge label=label.to_string()/> });
    let car = review
        .car_summary()
        .map(|summary| view! { <div class="review-car">"🚗 " {summary}</div> });

    view! {
        <div class="card review-card">
            <div class="review-header">
                <div>
                    <strong class="review-author">{review.name.clone()}</strong>
                    {review.purchase.then(|| view! {
                        <span class="badge-verified">"✅ Verified Purchase"</span>
                    })}
                </div>
                {badge}
            </div>
            <p class="review-body">"\"" {review.review.clone()} "\""</p>
            {car}
        </div>
    }
}
