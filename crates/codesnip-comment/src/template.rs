use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentTemplate {
    pub style: String,
    pub language_hint: String,
    pub instruction_template: String,
}

impl CommentTemplate {
    /// Create default line-comment template
    pub fn default_line() -> Self {
        Self {
            style: "line".to_string(),
            language_hint: String::new(),
            instruction_template:
                "Add {style} comments explaining this {language} code. Return only the code."
                    .to_string(),
        }
    }

    /// Create custom template
    pub fn new(style: String, language_hint: String) -> Self {
        Self {
            style,
            language_hint,
            ..Self::default_line()
        }
    }

    /// Format the instruction sent alongside the code
    pub fn format_instruction(&self) -> String {
        let language = if self.language_hint.is_empty() {
            "source"
        } else {
            &self.language_hint
        };
        self.instruction_template
            .replace("{style}", &self.style)
            .replace("{language}", language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_substitutes_style_and_language() {
        let template = CommentTemplate::new("block".into(), "rust".into());
        let instruction = template.format_instruction();
        assert!(instruction.contains("block comments"));
        assert!(instruction.contains("rust code"));
    }

    #[test]
    fn missing_language_hint_falls_back_to_source() {
        let instruction = CommentTemplate::default_line().format_instruction();
        assert!(instruction.contains("source code"));
    }
}
