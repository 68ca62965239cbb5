//! Prompt templates for the language model.
//!
//! Every builder is a pure string interpolation, so equal inputs always produce
//! equal prompts.

use crate::domain::CompletionRequest;
use crate::domain::entities::{GuitaristProfile, TierDistribution};

pub const TEMPERATURE: f32 = 0.7;
pub const INSIGHT_MAX_TOKENS: u32 = 500;
pub const COMPARE_MAX_TOKENS: u32 = 600;
pub const RECOMMEND_MAX_TOKENS: u32 = 800;

const INSIGHT_SYSTEM: &str = "You are a knowledgeable music analyst specializing in guitar techniques and playing styles. You provide insightful, non-judgmental analysis focused on technique choice and musical expression.";
const COMPARE_SYSTEM: &str = "You are a music analyst comparing guitarists based on technique choice and musical approach, not skill level.";
const RECOMMEND_SYSTEM: &str = "You are a music recommendation engine. Provide recommendations based on technique similarities and musical approach. Return valid JSON only.";

/// Prompt for a single guitarist's insight.
pub fn insight(
    guitarist: &str,
    style: Option<&str>,
    distribution: &TierDistribution,
    top_techniques: Option<&[String]>,
) -> CompletionRequest {
    let style = style.filter(|s| !s.trim().is_empty()).unwrap_or("Unknown");
    let top = top_techniques
        .map(|names| names.join(", "))
        .unwrap_or_else(|| "Not specified".to_string());

    let prompt = format!(
        r#"You are analyzing a guitarist's technique profile for the "Guitar Tech Signature" project. This project focuses on technique distribution, not rankings or skill hierarchies.

Guitarist: {guitarist}
Style: {style}
Technique Distribution:
- Beginner techniques: {beginner}
- Intermediate techniques: {intermediate}
- Advanced techniques: {advanced}

Top Techniques: {top}

Generate a thoughtful, 2-3 paragraph insight about this guitarist's technique signature. Focus on:
1. What makes their technique choice unique or distinctive
2. How their technique distribution reflects their musical identity
3. The balance between foundational, expressive, and advanced techniques
4. Avoid ranking or judging skill level - focus on technique choice and musical expression

Keep the tone educational and appreciative. Write in a professional, engaging style."#,
        beginner = distribution.beginner,
        intermediate = distribution.intermediate,
        advanced = distribution.advanced,
    );

    CompletionRequest {
        system: INSIGHT_SYSTEM.to_string(),
        prompt,
        temperature: TEMPERATURE,
        max_tokens: INSIGHT_MAX_TOKENS,
        json_output: false,
    }
}

/// Prompt comparing two or more guitarists.
pub fn compare(guitarists: &[GuitaristProfile]) -> CompletionRequest {
    let summaries = guitarists
        .iter()
        .map(GuitaristProfile::summary_line)
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = format!(
        "Compare these guitarists based on their technique profiles. Focus on technique choice and musical approach, not skill rankings.

{summaries}

Provide:
1. A brief comparison highlighting their similarities and differences
2. What makes each guitarist's approach distinctive
3. How their technique choices reflect different musical philosophies

Keep it concise (2-3 paragraphs) and insightful."
    );

    CompletionRequest {
        system: COMPARE_SYSTEM.to_string(),
        prompt,
        temperature: TEMPERATURE,
        max_tokens: COMPARE_MAX_TOKENS,
        json_output: false,
    }
}

/// Prompt asking for three similar guitarists as JSON.
pub fn recommend(guitarist: &GuitaristProfile, all: &[GuitaristProfile]) -> CompletionRequest {
    let candidates = all
        .iter()
        .map(|g| format!("- {}", g.summary_line()))
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = format!(
        "Based on {name}'s technique profile ({techniques}), recommend 3 similar guitarists from this list and explain why:

{candidates}

For each recommendation, provide:
1. The guitarist's name
2. A brief explanation of the similarity (1-2 sentences)
3. What a fan of {name} might appreciate about them

Format as JSON array with objects containing: name, reason, appeal",
        name = guitarist.name,
        techniques = guitarist.top_techniques.join(", "),
    );

    CompletionRequest {
        system: RECOMMEND_SYSTEM.to_string(),
        prompt,
        temperature: TEMPERATURE,
        max_tokens: RECOMMEND_MAX_TOKENS,
        json_output: true,
    }
}
