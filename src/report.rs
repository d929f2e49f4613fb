//! Stdout summary for an embedding vector.
//!
//! The demo prints the vector length and its leading dimensions. Vectors
//! shorter than the preview width are shown in full; the preview label
//! states how many dimensions are actually shown.

/// Slice of up to the first `max_dims` elements of `vector`.
#[must_use]
pub fn preview(vector: &[f32], max_dims: usize) -> &[f32] {
    &vector[..vector.len().min(max_dims)]
}

/// Render the two-line demo summary: length, then leading dimensions.
#[must_use]
pub fn summarize(vector: &[f32], max_dims: usize) -> String {
    let shown = preview(vector, max_dims);
    format!(
        "向量长度: {}\n前{}个维度: {:?}",
        vector.len(),
        shown.len(),
        shown
    )
}

// ── Tests ────────────────────────────────────────────────────────────
