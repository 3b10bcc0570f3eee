// WHY: whitespace cleanup that runs once on the raw input before sentence splitting
// Line structure carries no meaning for chunking, so every break becomes a single space

/// Normalize input text by turning line breaks into spaces and collapsing whitespace runs
/// Treats \r\n as a single break and trims both ends
pub fn normalize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_text_into(text, &mut result);
    result
}

/// Normalize text into supplied buffer to avoid allocation
pub fn normalize_text_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut prev_was_space = false;

    // \r, \n and every other whitespace char collapse into one space
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                buffer.push(' ');
                prev_was_space = true;
            }
        } else {
            buffer.push(ch);
            prev_was_space = false;
        }
    }

    let trimmed = buffer.trim();
    if trimmed.len() != buffer.len() {
        let trimmed_content = trimmed.to_string();
        buffer.clear();
        buffer.push_str(&trimmed_content);
    }
}
