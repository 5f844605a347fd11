use crate::domain::text::stripped_str;

pub fn normalize_email(value: &str) -> Option<String> {
    let lowered = stripped_str(value)?.to_lowercase();
    if !lowered.contains('@') {
        return None;
    }
    Some(lowered)
}
