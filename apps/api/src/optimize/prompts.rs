// LLM prompt constants for the optimization service.

/// Output cap for the prefix call: the answer is a short phrase.
pub const PREFIX_MAX_TOKENS: u32 = 50;

/// Output cap for the polish call: the answer is the whole rewritten prompt.
pub const POLISH_MAX_TOKENS: u32 = 500;

/// System prompt for expert-prefix generation.
pub const PREFIX_SYSTEM: &str = "你是一个领域分析专家。\
    阅读用户的提示词,判断它属于哪个知识领域,然后给出一个简短的专家角色前缀。\
    前缀格式必须是:\"你是 [领域]专家\",例如\"你是 AI 辅助软件开发专家\"或\"你是 医学专家\"。\
    只输出前缀本身,不要输出任何其他内容。";

/// User message for prefix generation. Replace `{prompt}` before sending.
pub const PREFIX_USER_TEMPLATE: &str = "请为以下提示词生成专家角色前缀:\n\n{prompt}";

/// System prompt for punctuation and fluency polish.
pub const POLISH_SYSTEM: &str = "你是一个文本优化专家。\
    修正用户提示词中的标点符号错误,让语句更通顺。\
    不要改变原意,只输出优化后的文本,不要附加任何解释。";

/// User message for the polish call. Replace `{prompt}` before sending.
pub const POLISH_USER_TEMPLATE: &str = "优化以下提示词的标点符号和流畅度:\n\n{prompt}";
