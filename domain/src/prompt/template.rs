//! Prompt templates for generation and validation

use super::examples::FEW_SHOT_EXAMPLES;
use crate::node::{NodeCategory, NodeSequence, NodeVocabulary};

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt shared by generation and validation requests.
    ///
    /// Contains the output contract, the categorized node listing and the
    /// worked examples.
    pub fn system(vocabulary: &NodeVocabulary) -> String {
        let mut prompt = String::from(
            r#"You are a system that converts a user's instruction into a sequence of nodes.
Use a step by step approach. First define the actions in an order that achieves the user's goal.
Then assign the nodes to the actions.
In the final step, you must respond with a JSON object containing only a "sequence" key with an array of node names.
No explanations, no introductions, no trailing text.

You are only allowed to use the following nodes:
"#,
        );

        prompt.push_str(&Self::node_listing(vocabulary));
        prompt.push_str("\nExamples:\n");

        for example in FEW_SHOT_EXAMPLES {
            prompt.push_str(&format!(
                "\nUser Prompt: \"{}\"\nCorrect Output: {}\n",
                example.prompt,
                json_list(example.output.iter().copied())
            ));
        }

        prompt
    }

    /// Categorized listing of every node with its description
    pub fn node_listing(vocabulary: &NodeVocabulary) -> String {
        let mut listing = String::new();

        for category in NodeCategory::ALL {
            let mut nodes = vocabulary.by_category(category).peekable();
            if nodes.peek().is_none() {
                continue;
            }
            listing.push_str(&format!("\n{}:\n", category.heading()));
            for node in nodes {
                listing.push_str(&format!("  [{}]: {}\n", node.name, node.description));
            }
        }

        listing
    }

    /// User prompt asking for a sequence
    pub fn generation_prompt(query: &str, vocabulary: &NodeVocabulary) -> String {
        let names = vocabulary
            .nodes()
            .iter()
            .map(|n| n.name)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"User request: {query}

Convert this request into a sequence of nodes that achieves the desired functionality.
You are only allowed to use the nodes defined in the system message. They are:

{names}

You must respond with a JSON object containing only a "sequence" key with an array of node names.

Example format:
{{
    "sequence": ["OnClick", "FetchData", "DisplayModal"]
}}

Use only the node names defined in the system message. Ensure the sequence is logical and achieves the user's goal."#
        )
    }

    /// User prompt asking whether a candidate sequence fulfils the request
    pub fn validation_prompt(query: &str, sequence: &NodeSequence) -> String {
        format!(
            r#"Original User Request: "{query}"
Generated Node Sequence: {sequence}

Evaluate if this sequence correctly fulfills the user's request.
Return ONLY a JSON object with a single "valid" boolean key.
Example: {{"valid": true}}"#,
            sequence = json_list(sequence.iter())
        )
    }
}

fn json_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = items.map(|s| format!("\"{}\"", s)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_lists_every_node() {
        let vocab = NodeVocabulary::standard();
        let prompt = PromptTemplate::system(&vocab);
        for node in vocab.nodes() {
            assert!(prompt.contains(&format!("[{}]", node.name)), "missing {}", node.name);
        }
        assert!(prompt.contains("Event Nodes:"));
        assert!(prompt.contains("Data Nodes:"));
    }

    #[test]
    fn test_system_prompt_contains_examples() {
        let prompt = PromptTemplate::system(&NodeVocabulary::standard());
        assert!(prompt.contains(r#"Correct Output: ["OnClick", "Delay", "Navigate"]"#));
    }

    #[test]
    fn test_generation_prompt_contains_query() {
        let query = "Play a sound when the user presses a key";
        let prompt = PromptTemplate::generation_prompt(query, &NodeVocabulary::standard());
        assert!(prompt.contains(query));
        assert!(prompt.contains("\"sequence\""));
        assert!(prompt.contains("OnKeyPress"));
    }

    #[test]
    fn test_validation_prompt_contains_query_and_sequence() {
        let seq = NodeSequence::from(["OnKeyPress", "PlaySound"]);
        let prompt = PromptTemplate::validation_prompt("Play a sound on key press", &seq);
        assert!(prompt.contains("\"Play a sound on key press\""));
        assert!(prompt.contains(r#"["OnKeyPress", "PlaySound"]"#));
        assert!(prompt.contains("\"valid\""));
    }

    #[test]
    fn test_listing_skips_empty_categories() {
        let vocab = NodeVocabulary::from_specs(
            NodeVocabulary::standard()
                .by_category(NodeCategory::Data)
                .copied()
                .collect(),
        );
        let listing = PromptTemplate::node_listing(&vocab);
        assert!(listing.contains("Data Nodes:"));
        assert!(!listing.contains("Event Nodes:"));
    }
}
