//! Prompt assembly for coverage analysis

use terkel_domain::OutlineQuestion;

/// System message sent alongside every analysis prompt
pub const SYSTEM_INSTRUCTION: &str = "你是一个专业的访谈内容分析助手。";

/// Builds the analysis prompt for the model
pub struct PromptBuilder {
    transcript: String,
    questions: Vec<String>,
    summary_char_limit: usize,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(transcript: impl Into<String>, questions: &[OutlineQuestion]) -> Self {
        Self {
            transcript: transcript.into(),
            questions: questions.iter().map(|q| q.as_str().to_string()).collect(),
            summary_char_limit: 50,
        }
    }

    /// Override the summary length the model is asked to stay within
    pub fn with_summary_limit(mut self, chars: usize) -> Self {
        self.summary_char_limit = chars;
        self
    }

    /// Build the complete analysis prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Task instruction
        prompt.push_str(ANALYSIS_INSTRUCTION);
        prompt.push_str("\n\n");

        // 2. The transcript
        prompt.push_str("=== 访谈记录 ===\n");
        prompt.push_str(&self.transcript);
        prompt.push_str("\n\n");

        // 3. The outline questions, numbered
        prompt.push_str("=== 问题列表 ===\n");
        for (i, question) in self.questions.iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", i + 1, question));
        }
        prompt.push('\n');

        // 4. Expected reply format
        prompt.push_str(OUTPUT_FORMAT);
        prompt.push_str("\n\n");

        // 5. Rules, with the summary limit injected
        prompt.push_str("要求:\n");
        prompt.push_str("1. 每个问题一行，字段之间用 | 分隔\n");
        prompt.push_str(&format!(
            "2. 匹配内容摘要要简洁，不超过{}字\n",
            self.summary_char_limit
        ));
        prompt.push_str(COVERAGE_CRITERIA);
        prompt.push_str("4. 建议补问内容要具体可行\n");

        prompt
    }
}

const ANALYSIS_INSTRUCTION: &str =
    "请根据以下访谈记录内容，将回答对应到以下问题中，并评估覆盖情况:";

const OUTPUT_FORMAT: &str = "请按以下格式返回结果:
问题 | 匹配内容摘要 | 覆盖情况(充分/部分/未覆盖) | 建议补问内容";

const COVERAGE_CRITERIA: &str = "3. 覆盖情况评估标准:
   - 充分: 有直接明确的回答
   - 部分: 有相关但不完全的回答
   - 未覆盖: 完全没有相关内容
";

#[cfg(test)]
mod tests {
    use super::*;
    use terkel_domain::coverage::{LABEL_FULL, LABEL_NOT_COVERED, LABEL_PARTIAL};

    fn questions(texts: &[&str]) -> Vec<OutlineQuestion> {
        texts
            .iter()
            .map(|t| OutlineQuestion::new(t.to_string()).unwrap())
            .collect()
    }

    #[test]
    fn test_prompt_includes_transcript() {
        let qs = questions(&["你的职业是什么?"]);
        let prompt = PromptBuilder::new("我是一名教师，已经工作十年了。", &qs).build();
        assert!(prompt.contains("我是一名教师，已经工作十年了。"));
        assert!(prompt.contains("=== 访谈记录 ==="));
    }

    #[test]
    fn test_prompt_numbers_questions_in_order() {
        let qs = questions(&["第一个问题", "第二个问题", "第三个问题"]);
        let prompt = PromptBuilder::new("transcript", &qs).build();
        assert!(prompt.contains("1. 第一个问题"));
        assert!(prompt.contains("2. 第二个问题"));
        assert!(prompt.contains("3. 第三个问题"));

        let first = prompt.find("第一个问题").unwrap();
        let third = prompt.find("第三个问题").unwrap();
        assert!(first < third);
    }

    #[test]
    fn test_prompt_includes_coverage_labels() {
        let qs = questions(&["q"]);
        let prompt = PromptBuilder::new("t", &qs).build();
        assert!(prompt.contains(LABEL_FULL));
        assert!(prompt.contains(LABEL_PARTIAL));
        assert!(prompt.contains(LABEL_NOT_COVERED));
    }

    #[test]
    fn test_prompt_includes_format_line() {
        let qs = questions(&["q"]);
        let prompt = PromptBuilder::new("t", &qs).build();
        assert!(prompt.contains("问题 | 匹配内容摘要 | 覆盖情况(充分/部分/未覆盖) | 建议补问内容"));
    }

    #[test]
    fn test_summary_limit_injected() {
        let qs = questions(&["q"]);

        let prompt = PromptBuilder::new("t", &qs).build();
        assert!(prompt.contains("不超过50字"));

        let prompt = PromptBuilder::new("t", &qs).with_summary_limit(30).build();
        assert!(prompt.contains("不超过30字"));
        assert!(!prompt.contains("不超过50字"));
    }

    #[test]
    fn test_system_instruction_is_stable() {
        assert_eq!(SYSTEM_INSTRUCTION, "你是一个专业的访谈内容分析助手。");
    }
}
