//! Shared style framing applied to every prompt in the batch.
//!
//! Every generated image must read as part of one visual set, so the same
//! prefix and suffix wrap each job's prompt regardless of content.

/// Style description prepended to every prompt.
pub const STYLE_PREFIX: &str = "\
Art style reference: Cinematic sci-fi illustration with Studio Ghibli meets Blade Runner aesthetic.
Color palette: Teal (#00FFFF cyan), Magenta (#FF00FF), Deep black (#0A0A0F), with warm golden accents.
Lighting: Dramatic contrast between cold neon blues and warm amber highlights.
Mechanical design: Detailed, worn, showing age and character.";

/// Constraints appended to every prompt.
pub const STYLE_SUFFIX: &str = "\
No text, no letters, no words, no UI elements in the image.
High quality, detailed, professional illustration.";

/// Wraps a job's raw prompt with the shared style framing.
///
/// Output is always `prefix`, blank line, raw prompt, blank line, `suffix`.
pub fn compose_prompt(prompt: &str) -> String {
    format!("{STYLE_PREFIX}\n\n{prompt}\n\n{STYLE_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_suffix_framing() {
        let composed = compose_prompt("A tiny robot at dawn.");
        assert!(composed.starts_with(STYLE_PREFIX));
        assert!(composed.ends_with(STYLE_SUFFIX));
    }

    #[test]
    fn test_raw_prompt_verbatim_between_separators() {
        let raw = "Line one.\nLine two.";
        let composed = compose_prompt(raw);
        let expected_middle = format!("\n\n{raw}\n\n");
        assert!(composed.contains(&expected_middle));
    }

    #[test]
    fn test_exact_layout() {
        let composed = compose_prompt("X");
        assert_eq!(composed, format!("{STYLE_PREFIX}\n\nX\n\n{STYLE_SUFFIX}"));
    }

    #[test]
    fn test_empty_prompt_still_framed() {
        let composed = compose_prompt("");
        assert_eq!(composed, format!("{STYLE_PREFIX}\n\n\n\n{STYLE_SUFFIX}"));
    }
}
