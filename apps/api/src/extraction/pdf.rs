//! Upstream PDF-to-text decoding. Runs before extraction and is the only
//! place raw upload bytes are interpreted.

use tracing::debug;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Decodes PDF bytes into plain text, one rendered line per text line.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if !looks_like_pdf(bytes) {
        return Err(AppError::PdfDecode("missing %PDF- header".to_string()));
    }

    // pdf_extract panics on some malformed documents
    let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| AppError::PdfDecode("decoder panicked on malformed PDF".to_string()))?
        .map_err(|e| AppError::PdfDecode(e.to_string()))?;
    debug!("Decoded {} PDF bytes into {} chars of text", bytes.len(), text.len());
    Ok(text)
}

/// PDF files may carry a few bytes of junk before the header.
fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes
        .windows(PDF_MAGIC.len())
        .take(1024)
        .any(|w| w == PDF_MAGIC)
}

/// Single-page PDF with one Helvetica text line per entry, xref offsets
/// computed so the document parses without repair.
#[cfg(test)]
pub(crate) fn sample_pdf(lines: &[&str]) -> Vec<u8> {
    let mut content = String::from("BT /F1 12 Tf 72 720 Td 14 TL");
    for line in lines {
        content.push_str(&format!(" ({line}) Tj T*"));
    }
    content.push_str(" ET");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_at = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(xref.as_bytes());
    pdf
}
