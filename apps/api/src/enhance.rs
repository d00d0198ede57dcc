//! Static enhancement: fixed expert prefix + prompt + citation-request suffix.
//!
//! Also owns the text-assembly rule shared with the AI-powered mode, so both
//! modes produce `"{prefix} {body}{SUFFIX}"`.

/// Appended to every enhanced prompt. Carries its own leading space.
pub const SUFFIX: &str =
    " 请提供主要观点的3个不同出处的网页链接以便我查验。如果你不知道或查不到,就实说,不要编造";

/// Prefix used by static mode, and by AI mode when the provider returns nothing.
pub const DEFAULT_PREFIX: &str = "你是专家";

/// Joins prefix and body with a single space, then appends [`SUFFIX`].
pub fn compose_full_text(prefix: &str, body: &str) -> String {
    format!("{prefix} {body}{SUFFIX}")
}

/// Offline enhancement. Never fails, accepts any input including "".
pub fn enhance_static(prompt: &str) -> String {
    compose_full_text(DEFAULT_PREFIX, prompt)
}
