//! Instruction template for the summarize stage.

/// Podcast scriptwriter instructions. The length limit is guidance for the
/// model only; responses are not checked against it.
pub const PODCAST_SCRIPT_INSTRUCTIONS: &str = include_str!("./prompts/podcast_script.txt");

/// Builds the single prompt sent to the language model for `blog_content`.
pub fn podcast_script_prompt(blog_content: &str) -> String {
    format!(
        "{}\n\nHere is the blog content:\n\n{blog_content}",
        PODCAST_SCRIPT_INSTRUCTIONS.trim_end()
    )
}
