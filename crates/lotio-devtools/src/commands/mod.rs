pub mod build_docs;
pub mod measure_padding;
