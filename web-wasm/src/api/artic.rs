//! 作品一覧API連携（ブラウザの fetch）

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use artwork_table_common::{
    page_url, parse_page_response, ArtworkPage, Error, PageLoader, Result,
};

/// fetch でページを取得するローダー
#[derive(Clone)]
pub struct FetchPageLoader {
    api_url: String,
}

impl FetchPageLoader {
    pub fn new(api_url: &str) -> Self {
        Self { api_url: api_url.to_string() }
    }
}

impl PageLoader for FetchPageLoader {
    async fn load(&self, page: u32) -> Result<ArtworkPage> {
        let url = page_url(&self.api_url, page)?;
        let body = fetch_text(&url).await?;
        parse_page_response(page, &body)
    }
}

fn js_error(value: JsValue) -> Error {
    Error::Http(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// GETして本文を文字列で返す
async fn fetch_text(url: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Http("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| Error::Http("response body is not text".into()))
}
