use videolens_core::build_prompt;

#[test]
fn prompt_carries_instruction_then_context_then_query() {
    let prompt = build_prompt("what are cats?", "cats are mammals");

    assert!(prompt.contains("grounded in the provided information"));
    let context_at = prompt
        .find("Context: cats are mammals")
        .expect("context present");
    let query_at = prompt.find("Query: what are cats?").expect("query present");
    assert!(context_at < query_at, "context must precede the query");
}

#[test]
fn instruction_precedes_the_context() {
    let prompt = build_prompt("q", "c");

    let instruction_at = prompt.find("Instructions:").expect("instruction present");
    let context_at = prompt.find("Context:").expect("context present");
    assert!(instruction_at < context_at);
}

#[test]
fn empty_context_still_forms_a_well_shaped_prompt() {
    let prompt = build_prompt("what happened?", "");

    assert!(prompt.contains("Context: \n\nQuery: what happened?"));
    assert!(prompt.contains("request more details"));
}
