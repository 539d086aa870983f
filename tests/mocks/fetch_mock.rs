use wasm_bindgen::prelude::*;

/// Replaces `window.fetch` with a stub that records every requested URL and
/// answers the `/djangoapp` endpoints from canned JSON.
#[wasm_bindgen(inline_js = r#"
export function install_fetch_mock() {
    if (!window.__realFetch) {
        window.__realFetch = window.fetch;
    }
    window.__fetchCalls = [];
    window.fetch = function(input, init) {
        const url = typeof input === "string" ? input : input.url;
        window.__fetchCalls.push(url);
        console.log("[MOCK FETCH]", url);

        let body = {};
        if (url.includes("/get_dealers")) {
            body = { status: 200, dealers: [
                { id: 1, full_name: "Springfield Motors", city: "Boston", state: "Massachusetts", st: "MA", address: "1 Elm St", zip: "02101" },
                { id: "a1b2c3", full_name: "Lakeside Autos", city: "Chicago", state: "Illinois", st: "IL", address: "2 Lake Dr", zip: 60601 }
            ] };
        } else if (url.includes("/register")) {
            body = { userName: "taken", error: "Already Registered" };
        }

        return Promise.resolve(new Response(JSON.stringify(body), {
            status: 200,
            headers: { "Content-Type": "application/json" }
        }));
    };
    return true;
}

export function restore_fetch() {
    if (window.__realFetch) {
        window.fetch = window.__realFetch;
    }
    window.__fetchCalls = [];
}

export function fetch_calls_matching(fragment) {
    return (window.__fetchCalls || []).filter((url) => url.includes(fragment)).length;
}

export function last_fetch_matching(fragment) {
    const calls = (window.__fetchCalls || []).filter((url) => url.includes(fragment));
    return calls.length ? calls[calls.length - 1] : "";
}
"#)]
extern "C" {
    pub fn install_fetch_mock() -> bool;
    pub fn restore_fetch();
    pub fn fetch_calls_matching(fragment: &str) -> usize;
    pub fn last_fetch_matching(fragment: &str) -> String;
}
