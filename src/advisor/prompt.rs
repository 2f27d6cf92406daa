//! Prompt construction for advisor requests.

use crate::build_state::BuildState;
use crate::types::Category;

/// One line per selected part: `- <Category>: <name> (<brand>)`.
pub fn describe_build(build: &BuildState) -> String {
    let mut text = String::from("Current PC Build Parts:\n");
    for (category, part) in build.iter() {
        text.push_str(&format!("- {}: {} ({})\n", category, part.name, part.brand));
    }
    text
}

/// Prompt asking for a compatibility review of a finished build.
pub fn review_prompt(build: &BuildState) -> String {
    format!(
        "{}\n\
         Analyze this PC build for compatibility issues, power sufficiency, and potential bottlenecks.\n\
         The user is building this in India.\n\n\
         If there are errors (like incompatible sockets or RAM types), highlight them clearly.\n\
         If the PSU is too weak, warn them.\n\
         If it looks good, give a \"thumbs up\" and a brief compliment on the performance level (Entry, Mid, High).\n\
         Keep the response concise (under 100 words).\n",
        describe_build(build)
    )
}

/// Prompt asking what kind of `category` part suits the build so far.
pub fn recommendation_prompt(category: Category, build: &BuildState) -> String {
    format!(
        "{}\n\
         The user is now looking for a {category}.\n\
         Suggest 2-3 general specs or specific types of {category} that would fit well with the current existing parts.\n\
         For example, if they have a high-end CPU, suggest a high-end GPU.\n\
         Keep it short and helpful.\n",
        describe_build(build)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_describe_empty_build() {
        assert_eq!(describe_build(&BuildState::new()), "Current PC Build Parts:\n");
    }

    #[test]
    fn test_describe_build_lists_parts_in_wizard_order() {
        let catalog = Catalog::builtin();
        let mut build = BuildState::new();
        build.select_part(catalog.get("mobo-2").cloned().unwrap());
        build.select_part(catalog.get("cpu-2").cloned().unwrap());
        assert_eq!(
            describe_build(&build),
            "Current PC Build Parts:\n\
             - Processor: AMD Ryzen 5 7600X (AMD)\n\
             - Motherboard: Gigabyte B650 Gaming X AX (Gigabyte)\n"
        );
    }

    #[test]
    fn test_recommendation_prompt_names_category() {
        let prompt = recommendation_prompt(Category::Gpu, &BuildState::new());
        assert!(prompt.contains("looking for a Graphics Card"));
    }

    #[test]
    fn test_review_prompt_asks_for_brevity() {
        assert!(review_prompt(&BuildState::new()).contains("under 100 words"));
    }
}
