/// Maximum number of characters of a scenario name carried into the prompt.
pub const MAX_SCENARIO_CHARS: usize = 200;

const PERSONA: &str = "You are MindHelper, a careful and supportive AI psychologist.
Answer format: empathy -> analysis -> one practice -> one small next step.
Do not confirm delusional or paranoid ideas, stay neutral.
If the user mentions self-harm or danger to life, urge them to contact local emergency services.";

/// System prompt for a chat turn, optionally framed by a guided scenario.
pub fn system_prompt(scenario: Option<&str>) -> String {
    let mut prompt = PERSONA.to_string();

    if let Some(scenario) = scenario.map(str::trim).filter(|s| !s.is_empty()) {
        let scenario: String = scenario.chars().take(MAX_SCENARIO_CHARS).collect();
        prompt.push_str(&format!(
            "\nScenario: {scenario}. Keep the conversation within this scenario."
        ));
    }

    prompt
}
