//! Built-in default values for settings fields.
//!
//! Used both by `Settings::default()` and as the fallback for fields whose
//! stored value is missing or malformed.

pub fn splitter_weights() -> Vec<i32> {
    vec![15, 85]
}

pub fn tab_weights() -> Vec<i32> {
    vec![20, 60, 20] // left, center, right
}

pub fn report_splitter_weights() -> Vec<i32> {
    vec![75, 25]
}

pub fn shader_splitter_weights() -> Vec<i32> {
    vec![70, 30]
}

pub fn texture_splitter_weights() -> Vec<i32> {
    vec![20, 80]
}

pub fn hidden_tabs() -> Vec<String> {
    vec!["Log".to_string()]
}
