/// Base URL of the backend that serves `/djangoapp/*`.
/// Set at compile time through `BESTCARS_API_BASE` (or `.env`); empty means same-origin.
pub const API_BASE_URL: &str = match option_env!("BESTCARS_API_BASE") {
    Some(url) => url,
    None => "",
};

// sessionStorage keys
pub const USERNAME_KEY: &str = "username";
pub const FIRST_NAME_KEY: &str = "firstname";

/// Delay between a successful review submission and the jump back to the dealer page.
pub const REDIRECT_DELAY_MS: u32 = 2000;

/// Selectable car years on the review form, newest first.
pub const REVIEW_YEARS: [i32; 9] = [2023, 2022, 2021, 2020, 2019, 2018, 2017, 2016, 2015];

/// Filter value meaning "no state scope".
pub const ALL_STATES: &str = "All";

pub const STATE_FILTERS: &[&str] = &[
    ALL_STATES,
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];
