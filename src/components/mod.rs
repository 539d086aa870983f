pub mod dealer_detail;
pub mod dealers;
pub mod footer;
pub mod header;
pub mod login;
pub mod not_found;
pub mod post_review;
pub mod register;
pub mod reviews_list;
pub mod sentiment_badge;
