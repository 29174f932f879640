use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Take the file picked in an `<input type="file">` change event.
///
/// The input is cleared so picking the same file again fires another change.
pub fn take_selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0);
    input.set_value("");
    file
}

/// Read a picked file as UTF-8 text
pub async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let content = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    content
        .as_string()
        .ok_or_else(|| format!("{} is not a text file", file.name()))
}
