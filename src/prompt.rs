// src/prompt.rs
use crate::models::EvaluationRequest;

/// System-role instruction sent alongside every grading prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert programming judge. Analyze code submissions and provide scores in JSON format only.";

/// Builds the grading prompt for one submission.
///
/// The constraints section is only rendered when the request carries
/// non-blank constraints; otherwise it is left out entirely.
pub fn build_prompt(request: &EvaluationRequest) -> String {
    let constraints_section = request
        .constraints
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(|c| format!("**Constraints:**\n{}\n\n", c))
        .unwrap_or_default();

    format!(
        r#"You are an expert code evaluator for a hackathon. Analyze the following code submission.

**Problem Description:**
{problem}

**Sample Input:**
{input}

**Expected Output:**
{output}

{constraints}**Submitted Code ({language}):**
```{language}
{code}
```

**Evaluation Criteria:**
1. **Correctness (40%)**: Does the logic correctly solve the problem for the given sample?
2. **Code Quality (30%)**: Is the code clean, readable, and well-structured?
3. **Efficiency (20%)**: Is the algorithm efficient? Any obvious optimizations?
4. **Edge Cases (10%)**: Does it handle edge cases mentioned in constraints?

**Important:**
- Do NOT execute the code
- Analyze the logic and algorithm
- Check if it would produce the expected output for the sample input
- Consider time/space complexity

**Response Format (JSON only):**
{{
    "score": <0-10>,
    "status": "<passed/failed/partial>",
    "correctness": <0-4>,
    "code_quality": <0-3>,
    "efficiency": <0-2>,
    "edge_cases": <0-1>,
    "feedback": "<detailed feedback in 2-3 sentences>",
    "suggestions": "<improvement suggestions if any>"
}}

Provide only valid JSON, no additional text."#,
        problem = request.problem_description,
        input = request.sample_input,
        output = request.sample_output,
        constraints = constraints_section,
        language = request.language,
        code = request.code,
    )
}
