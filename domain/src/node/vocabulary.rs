//! Node vocabulary: the fixed taxonomy of legal node names

use super::sequence::NodeSequence;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Category a node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Event,
    Action,
    Transformation,
    Display,
    Data,
}

impl NodeCategory {
    /// All categories in presentation order
    pub const ALL: [NodeCategory; 5] = [
        NodeCategory::Event,
        NodeCategory::Action,
        NodeCategory::Transformation,
        NodeCategory::Display,
        NodeCategory::Data,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Event => "event",
            NodeCategory::Action => "action",
            NodeCategory::Transformation => "transformation",
            NodeCategory::Display => "display",
            NodeCategory::Data => "data",
        }
    }

    /// Heading used when listing nodes in prompts
    pub fn heading(&self) -> &'static str {
        match self {
            NodeCategory::Event => "Event Nodes",
            NodeCategory::Action => "Action Nodes",
            NodeCategory::Transformation => "Transformation Nodes",
            NodeCategory::Display => "Display Nodes",
            NodeCategory::Data => "Data Nodes",
        }
    }
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single legal node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpec {
    pub name: &'static str,
    pub category: NodeCategory,
    pub description: &'static str,
}

const fn node(name: &'static str, category: NodeCategory, description: &'static str) -> NodeSpec {
    NodeSpec {
        name,
        category,
        description,
    }
}

use NodeCategory::{Action, Data, Display, Event, Transformation};

const STANDARD_NODES: &[NodeSpec] = &[
    node("OnVariableChange", Event, "Triggered when a specified variable changes value."),
    node("OnKeyRelease", Event, "Triggered when a key is released."),
    node("OnKeyPress", Event, "Triggered when a key is pressed."),
    node("OnClick", Event, "Triggered when an element is clicked."),
    node("OnWindowResize", Event, "Triggered when the window is resized."),
    node("OnMouseEnter", Event, "Triggered when the mouse pointer enters an element."),
    node("OnMouseLeave", Event, "Triggered when the mouse pointer leaves an element."),
    node("OnTimer", Event, "Triggered at specified time intervals."),
    node("Delay", Event, "Delays the execution of the next node by a specified amount of time."),
    node("Console", Action, "Prints a message to the console."),
    node("Alert", Action, "Displays an alert message."),
    node("Log", Action, "Logs information for debugging purposes."),
    node("Assign", Action, "Assigns a value to a variable."),
    node("SendRequest", Action, "Sends a network request."),
    node("Navigate", Action, "Navigates to a different URL or page."),
    node("Save", Action, "Saves data to local storage or a database."),
    node("Delete", Action, "Deletes specified data or records."),
    node("PlaySound", Action, "Plays an audio file."),
    node("PauseSound", Action, "Pauses an audio file."),
    node("StopSound", Action, "Stops an audio file."),
    node(
        "Branch",
        Transformation,
        "Conditional node that branches based on a true/false evaluation.",
    ),
    node("Map", Transformation, "Transforms data from one format to another."),
    node("Filter", Transformation, "Filters data based on specified criteria."),
    node("Reduce", Transformation, "Reduces a list of items to a single value."),
    node("Sort", Transformation, "Sorts data based on specified criteria."),
    node("GroupBy", Transformation, "Groups data by a specified attribute."),
    node("Merge", Transformation, "Merges multiple datasets into one."),
    node("Split", Transformation, "Splits data into multiple parts based on criteria."),
    node("Show", Display, "Displays information on the screen."),
    node("Hide", Display, "Hides information from the screen."),
    node("Update", Display, "Updates the display with new information."),
    node("DisplayModal", Display, "Displays a modal dialog."),
    node("CloseModal", Display, "Closes an open modal dialog."),
    node("Highlight", Display, "Highlights an element on the screen."),
    node("Tooltip", Display, "Shows a tooltip with additional information."),
    node("RenderChart", Display, "Renders a chart with specified data."),
    node("FetchData", Data, "Fetches data from an API or database."),
    node("StoreData", Data, "Stores data in a variable or storage."),
    node("UpdateData", Data, "Updates existing data."),
    node("DeleteData", Data, "Deletes specified data."),
    node("CacheData", Data, "Caches data for performance improvement."),
];

/// Outcome of checking a sequence against the vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralCheck {
    /// Offending names in original order, duplicates preserved
    pub invalid_nodes: Vec<String>,
}

impl StructuralCheck {
    pub fn is_valid(&self) -> bool {
        self.invalid_nodes.is_empty()
    }

    /// The `(valid, invalid_nodes)` pair form
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.invalid_nodes.is_empty(), self.invalid_nodes)
    }
}

/// The fixed set of legal node names
///
/// Lookup is a case-sensitive exact match with no aliasing.
///
/// # Example
///
/// ```
/// use nodeseq_domain::{NodeSequence, NodeVocabulary};
///
/// let vocab = NodeVocabulary::standard();
/// let check = vocab.validate_node_names(&NodeSequence::from(["OnClick", "Teleport"]));
/// assert_eq!(check.into_parts(), (false, vec!["Teleport".to_string()]));
/// ```
#[derive(Debug, Clone)]
pub struct NodeVocabulary {
    nodes: Vec<NodeSpec>,
    names: HashSet<&'static str>,
}

impl NodeVocabulary {
    /// Build a vocabulary from an explicit node list
    pub fn from_specs(nodes: Vec<NodeSpec>) -> Self {
        let names = nodes.iter().map(|n| n.name).collect();
        Self { nodes, names }
    }

    /// The built-in UI-flow vocabulary
    pub fn standard() -> Self {
        Self::from_specs(STANDARD_NODES.to_vec())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&NodeSpec> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// All nodes in declaration order
    pub fn nodes(&self) -> &[NodeSpec] {
        &self.nodes
    }

    pub fn by_category(&self, category: NodeCategory) -> impl Iterator<Item = &NodeSpec> {
        self.nodes.iter().filter(move |n| n.category == category)
    }

    /// Check every element of `sequence` for membership.
    pub fn validate_node_names(&self, sequence: &NodeSequence) -> StructuralCheck {
        let invalid_nodes = sequence
            .iter()
            .filter(|name| !self.contains(name))
            .map(str::to_string)
            .collect();
        StructuralCheck { invalid_nodes }
    }
}

impl Default for NodeVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
