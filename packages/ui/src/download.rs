//! Hand a downloaded document to the user.
//!
//! - **Web**: wrap the bytes in a `Blob`, point a temporary anchor at an object
//!   URL and click it.
//! - **Native**: write the file into the user's download directory.

#[cfg(target_arch = "wasm32")]
pub fn save_document(file_name: &str, bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let describe = |e: wasm_bindgen::JsValue| format!("{e:?}");

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no document body")?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(describe)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(describe)?;

    let anchor = document
        .create_element("a")
        .map_err(describe)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "not an anchor element".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor).map_err(describe)?;
    anchor.click();
    anchor.remove();

    web_sys::Url::revoke_object_url(&url).map_err(describe)?;
    tracing::info!("Saved {file_name} ({} bytes)", bytes.len());
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_document(file_name: &str, bytes: &[u8]) -> Result<(), String> {
    let dir = dirs::download_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    let path = dir.join(file_name);
    std::fs::write(&path, bytes).map_err(|e| format!("{}: {e}", path.display()))?;
    tracing::info!("Saved {}", path.display());
    Ok(())
}
