/// Instructions sent with every article. `{content}` is replaced verbatim.
const SUMMARY_PROMPT_TEMPLATE: &str = r#"Please analyze and summarize the following article. Provide:
1. A concise summary that captures the main points and essence
2. Key takeaways as bullet points
3. Maintain professional tone and accuracy

Article content:
{content}

Please respond in JSON format with the following structure:
{
  "summary": "concise summary paragraph",
  "keyPoints": ["key point 1", "key point 2", "key point 3", "key point 4"]
}
"#;

pub fn build_summary_prompt(content: &str) -> String {
    SUMMARY_PROMPT_TEMPLATE.replacen("{content}", content, 1)
}
