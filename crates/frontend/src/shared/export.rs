//! CSV export with a browser download.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds the CSV text (UTF-8 BOM, comma separated, CRLF-free).
pub fn build_csv<T: CsvExportable>(data: &[T]) -> Result<String, String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let mut csv_content = String::from('\u{FEFF}');
    csv_content.push_str(&T::headers().join(","));
    csv_content.push('\n');

    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&row.join(","));
        csv_content.push('\n');
    }

    Ok(csv_content)
}

pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let csv_content = build_csv(data)?;
    let blob = create_csv_blob(&csv_content)?;
    download_blob(&blob, filename)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(&'static str, f64);

    impl CsvExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Craft", "Hours"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), format!("{:.1}", self.1)]
        }
    }

    #[test]
    fn test_build_csv() {
        let csv = build_csv(&[Line("Welding", 12.0), Line("Paint, coat", 3.5)]).unwrap();
        assert_eq!(
            csv,
            "\u{FEFF}Craft,Hours\nWelding,12.0\n\"Paint, coat\",3.5\n"
        );
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("plain"), "plain");
    }

    #[test]
    fn test_empty_export_is_error() {
        assert!(build_csv::<Line>(&[]).is_err());
    }
}
