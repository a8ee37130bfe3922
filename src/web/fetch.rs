use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// GET `url` and return the response body as text. Non-2xx statuses are
/// errors; the fragment endpoint is same-origin.
pub(super) async fn fetch_text(url: &str) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| format!("request error: {e:?}"))?;

    let window = web_sys::window().ok_or("no window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {e:?}"))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response")?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|e| format!("text promise error: {e:?}"))?)
        .await
        .map_err(|e| format!("text error: {e:?}"))?;

    text.as_string().ok_or("text: expected a string body".to_string())
}
