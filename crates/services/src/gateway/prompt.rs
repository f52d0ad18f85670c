//! Prompt templates sent to the language model.

/// Topic the code editor asks about when the learner presses "AI Explain".
pub const EXPLAIN_CODE_TOPIC: &str = "Explain what this code does and any output it generates";

/// Asks the model to behave like a Python 3 interpreter and reply with stdout only.
#[must_use]
pub fn interpreter_prompt(source: &str) -> String {
    format!(
        "You are a Python 3 interpreter.\n\
         I will provide you with a snippet of Python code.\n\
         Your task is to execute it mentally and provide the Standard Output (stdout).\n\
         \n\
         Rules:\n\
         1. If the code runs successfully, return ONLY the output.\n\
         2. If there is a syntax error or runtime error, return the error message as a Python interpreter would.\n\
         3. Do not provide explanations unless the code explicitly prints them.\n\
         4. Be concise.\n\
         \n\
         Code:\n\
         {source}\n"
    )
}

/// Asks the model for a short beginner-level explanation of `topic` in the
/// context of `source`.
#[must_use]
pub fn tutor_prompt(topic: &str, source: &str) -> String {
    format!(
        "You are a friendly and expert Python tutor.\n\
         The student is asking about: \"{topic}\".\n\
         \n\
         Here is the code they are currently looking at:\n\
         ```python\n\
         {source}\n\
         ```\n\
         \n\
         Provide a short, clear, 1-paragraph explanation suitable for a beginner.\n\
         Use simple analogies if possible.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpreter_prompt_ends_with_the_code() {
        let prompt = interpreter_prompt("print(2+2)");

        assert!(prompt.starts_with("You are a Python 3 interpreter."));
        assert!(prompt.contains("return ONLY the output"));
        assert!(prompt.trim_end().ends_with("Code:\nprint(2+2)"));
    }

    #[test]
    fn tutor_prompt_fences_the_code() {
        let prompt = tutor_prompt(EXPLAIN_CODE_TOPIC, "x = 5\nprint(x)");

        assert!(prompt.contains("asking about: \"Explain what this code does"));
        assert!(prompt.contains("```python\nx = 5\nprint(x)\n```"));
        assert!(prompt.contains("1-paragraph explanation"));
    }
}
