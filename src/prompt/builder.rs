//! Prompt construction with a bounded example block
//!
//! Renders the persona prefix, the surviving few-shot examples and the
//! question suffix into one prompt string. Pure and deterministic.

use super::examples::{examples_for, ExamplePair};
use super::options::{AgeGroup, ContentStyle, Platform, TaskType};

/// Maximum total length of the rendered example block, in characters
pub const EXAMPLE_BLOCK_BUDGET: usize = 200;

/// Render one example as its prompt block
fn render_example(example: &ExamplePair) -> String {
    format!("Question: {}\nResponse: {}", example.question, example.answer)
}

/// Select examples that fit inside the character budget
///
/// Examples are taken in table order while the running total of rendered
/// block lengths stays within `budget`; the first example that would
/// overflow and everything after it are dropped whole.
pub fn select_examples(examples: &[ExamplePair], budget: usize) -> Vec<String> {
    let mut rendered = Vec::new();
    let mut total = 0usize;

    for example in examples {
        let block = render_example(example);
        if total + block.len() > budget {
            break;
        }
        total += block.len();
        rendered.push(block);
    }

    rendered
}

/// Build the completion prompt for a query and configuration choice set
///
/// Layout: persona/task prefix, newline-separated example blocks, then the
/// query suffix ending in a trailing `"Response: "` marker for the model
/// to continue from.
pub fn build_prompt(
    query: &str,
    age_group: AgeGroup,
    task_type: TaskType,
    platform: Platform,
    style: ContentStyle,
) -> String {
    let examples = select_examples(examples_for(age_group), EXAMPLE_BLOCK_BUDGET);

    let mut prompt = format!(
        "You are a {} creating {} content for {}. Task: {}. Examples:",
        age_group, style, platform, task_type
    );
    for block in &examples {
        prompt.push('\n');
        prompt.push_str(block);
    }
    prompt.push_str(&format!("\nQuestion: {}\nResponse: ", query));

    prompt
}
