#![allow(dead_code)]

use lopdf::Document as LopdfDocument;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Extract the text of a single (1-based) page
pub fn extract_page_text(doc: &LopdfDocument, page_num: u32) -> String {
    doc.extract_text(&[page_num]).unwrap_or_default()
}

/// Base font names referenced from page resources
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = std::collections::BTreeSet::new();

    for page_id in doc.get_pages().values() {
        let Ok(page_dict) = doc.get_dictionary(*page_id) else {
            continue;
        };
        let resources = match page_dict.get(b"Resources") {
            Ok(obj) => match obj.as_reference() {
                Ok(id) => doc.get_dictionary(id).ok(),
                Err(_) => obj.as_dict().ok(),
            },
            Err(_) => None,
        };
        let Some(font_dict) = resources
            .and_then(|r| r.get(b"Font").ok())
            .and_then(|f| f.as_dict().ok())
        else {
            continue;
        };
        for (_, font) in font_dict.iter() {
            let font = match font.as_reference() {
                Ok(id) => doc.get_dictionary(id).ok(),
                Err(_) => font.as_dict().ok(),
            };
            if let Some(name) = font
                .and_then(|f| f.get(b"BaseFont").ok())
                .and_then(|b| b.as_name().ok())
            {
                fonts.insert(String::from_utf8_lossy(name).to_string());
            }
        }
    }

    fonts.into_iter().collect()
}

/// Page MediaBox as `[x0, y0, x1, y1]`
pub fn page_media_box(doc: &LopdfDocument, page_num: u32) -> Option<[f32; 4]> {
    let page_id = *doc.get_pages().get(&page_num)?;
    let media_box = doc.get_dictionary(page_id).ok()?.get(b"MediaBox").ok()?.as_array().ok()?;
    let values: Vec<f32> = media_box.iter().filter_map(|v| v.as_float().ok()).collect();
    values.try_into().ok()
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF references a font whose name contains a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should reference a font matching '{}', found: {:?}",
            $pattern,
            fonts
        );
    };
}
