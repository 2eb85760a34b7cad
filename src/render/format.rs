use super::colors;

/// Pad with trailing spaces up to `width`; longer strings pass through.
pub fn pad_right(text: &str, width: usize) -> String {
    if text.len() >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - text.len()))
    }
}

pub fn pad_left(text: &str, width: usize) -> String {
    if text.len() >= width {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(width - text.len()), text)
    }
}

pub fn center(text: &str, width: usize) -> String {
    if text.len() >= width {
        return text.to_string();
    }
    let padding = width - text.len();
    let left = padding / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(padding - left))
}

pub fn separator(ch: char, width: usize) {
    println!("{}", ch.to_string().repeat(width));
}

pub fn sub_header(title: &str) {
    println!("{}{}{}{}", colors::BOLD, colors::CYAN, title, colors::RESET);
    println!("{}", "-".repeat(title.len().min(60)));
}
