use crate::cli::ColorChoice;
use colored::Color;
use std::io::IsTerminal;

/// Decide once whether output is colorized
pub fn init(choice: ColorChoice) {
    let should_color = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        // Respect NO_COLOR (https://no-color.org/), then require a terminal
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    };

    colored::control::set_override(should_color);
}

/// Badge color for a repository language
pub fn language_color(language: &str) -> Color {
    match language {
        "JavaScript" => Color::Yellow,
        "TypeScript" => Color::Blue,
        "Python" => Color::Green,
        "Java" => Color::Red,
        "C#" => Color::Magenta,
        "PHP" => Color::BrightBlue,
        "Ruby" => Color::BrightRed,
        "Go" => Color::Cyan,
        "Rust" => Color::TrueColor { r: 222, g: 165, b: 132 },
        "Swift" => Color::TrueColor { r: 240, g: 81, b: 56 },
        "Kotlin" => Color::BrightMagenta,
        "Dart" => Color::BrightCyan,
        "C++" => Color::TrueColor { r: 243, g: 75, b: 125 },
        "C" => Color::TrueColor { r: 85, g: 85, b: 85 },
        "Shell" => Color::BrightGreen,
        "HTML" => Color::TrueColor { r: 227, g: 76, b: 38 },
        "CSS" => Color::TrueColor { r: 86, g: 61, b: 124 },
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_languages_use_neutral_color() {
        assert_eq!(language_color("Unknown"), Color::White);
        assert_eq!(language_color("Brainfuck"), Color::White);
    }

    #[test]
    fn palette_is_case_sensitive() {
        assert_eq!(language_color("Python"), Color::Green);
        assert_eq!(language_color("python"), Color::White);
    }
}
