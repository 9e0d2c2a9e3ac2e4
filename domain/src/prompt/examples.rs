//! Worked examples embedded in the generation system prompt

/// A prompt with the sequence it should produce
#[derive(Debug, Clone, Copy)]
pub struct FewShotExample {
    pub prompt: &'static str,
    pub output: &'static [&'static str],
}

const fn example(prompt: &'static str, output: &'static [&'static str]) -> FewShotExample {
    FewShotExample { prompt, output }
}

pub const FEW_SHOT_EXAMPLES: &[FewShotExample] = &[
    example(
        "Navigate to a new page after a delay of 3 seconds when the user clicks a button.",
        &["OnClick", "Delay", "Navigate"],
    ),
    example(
        "Fetch user data and display it in a modal when a button is clicked.",
        &["OnClick", "FetchData", "DisplayModal"],
    ),
    example(
        "Reduce a list of scores to find the highest score and log the result.",
        &["Reduce", "Log"],
    ),
    example(
        "Cache fetched data to improve performance and display the data on the screen.",
        &["FetchData", "CacheData", "Show"],
    ),
    example(
        "Log a message when a key is pressed and display the key value on the screen.",
        &["OnKeyPress", "Log", "Show"],
    ),
    example(
        "Highlight an element when the mouse enters it and remove the highlight when the mouse leaves.",
        &["OnMouseEnter", "Highlight", "OnMouseLeave", "Show"],
    ),
    example(
        "Filter out items that are out of stock and sort the remaining items by price before displaying them on the screen.",
        &["Filter", "Sort", "Show"],
    ),
    example(
        "Send a network request, map the response, and then render a chart with the transformed data.",
        &["SendRequest", "Map", "RenderChart"],
    ),
    example(
        "Fetch data, branch logic to check if count > 10, if true display a modal, otherwise show a tooltip.",
        &["FetchData", "Branch", "DisplayModal", "Tooltip"],
    ),
    example(
        "Fetch data, group it by category, then render a chart of counts per category.",
        &["FetchData", "GroupBy", "RenderChart"],
    ),
    example(
        "Send a request, merge its response with local data, and then show the merged result.",
        &["SendRequest", "Merge", "Show"],
    ),
    example(
        "Fetch data, split it into two arrays based on a condition, and then show the first array.",
        &["FetchData", "Split", "Show"],
    ),
    example(
        "Assign a value to a variable, then log that value.",
        &["Assign", "Log"],
    ),
    example(
        "Play a sound, after some processing pause it, then show a message that playback ended.",
        &["PlaySound", "PauseSound", "Show"],
    ),
    example(
        "Send a request, assign part of the response to a variable, and then update the display with it.",
        &["SendRequest", "Assign", "Update"],
    ),
    example(
        "Fetch data, filter out outdated entries, sort the remainder, and show the sorted list.",
        &["FetchData", "Filter", "Sort", "Show"],
    ),
    example(
        "Fetch data, update it with new information, and then display the updated data.",
        &["FetchData", "UpdateData", "Show"],
    ),
    example(
        "Send a request, map the result, cache it, and then render a chart of the cached data.",
        &["SendRequest", "Map", "CacheData", "RenderChart"],
    ),
];
