//! Built-in override data: canonical benchmark slug -> marketplace model id.
//!
//! Entries cover renames the normalization rules cannot bridge: reordered
//! version tokens (`claude-4-sonnet` vs `claude-sonnet-4`), differing creator
//! namespaces (`xai` vs `x-ai`, `alibaba` vs `qwen`) and marketing aliases.
//! Keys must already be in canonical form.

pub const BUILTIN_OVERRIDES: &[(&str, &str)] = &[
    // Anthropic
    ("claude-35-sonnet", "anthropic/claude-3.5-sonnet"),
    ("claude-35-sonnet-june-24", "anthropic/claude-3.5-sonnet-20240620"),
    ("claude-3-5-haiku", "anthropic/claude-3.5-haiku"),
    ("claude-3-7-sonnet", "anthropic/claude-3.7-sonnet"),
    ("claude-3-7-sonnet-thinking", "anthropic/claude-3.7-sonnet:thinking"),
    ("claude-4-sonnet", "anthropic/claude-sonnet-4"),
    ("claude-4-opus", "anthropic/claude-opus-4"),
    ("claude-4-1-opus", "anthropic/claude-opus-4.1"),
    ("claude-4-5-sonnet", "anthropic/claude-sonnet-4.5"),
    // OpenAI
    ("gpt-4o-chatgpt", "openai/chatgpt-4o-latest"),
    ("gpt-4o-2024-08-06", "openai/gpt-4o-2024-08-06"),
    ("o1-preview", "openai/o1-preview"),
    ("o3-mini-high", "openai/o3-mini-high"),
    ("gpt-oss-120b", "openai/gpt-oss-120b"),
    // Google
    ("gemini-2-0-flash-experimental", "google/gemini-2.0-flash-exp:free"),
    ("gemini-1-5-pro", "google/gemini-pro-1.5"),
    ("gemini-1-5-flash", "google/gemini-flash-1.5"),
    ("gemma-3-27b", "google/gemma-3-27b-it"),
    // Meta
    ("llama-3-1-instruct-405b", "meta-llama/llama-3.1-405b-instruct"),
    ("llama-3-1-instruct-70b", "meta-llama/llama-3.1-70b-instruct"),
    ("llama-3-1-instruct-8b", "meta-llama/llama-3.1-8b-instruct"),
    ("llama-3-3-instruct-70b", "meta-llama/llama-3.3-70b-instruct"),
    ("llama-4-maverick", "meta-llama/llama-4-maverick"),
    ("llama-4-scout", "meta-llama/llama-4-scout"),
    // DeepSeek
    ("deepseek-v3", "deepseek/deepseek-chat"),
    ("deepseek-v3-0324", "deepseek/deepseek-chat-v3-0324"),
    ("deepseek-r1", "deepseek/deepseek-r1"),
    ("deepseek-r1-0528", "deepseek/deepseek-r1-0528"),
    // xAI
    ("grok-2", "x-ai/grok-2-1212"),
    ("grok-3", "x-ai/grok-3"),
    ("grok-3-mini-reasoning", "x-ai/grok-3-mini"),
    ("grok-4", "x-ai/grok-4"),
    // Alibaba / Qwen
    ("qwen2-5-72b-instruct", "qwen/qwen-2.5-72b-instruct"),
    ("qwen2-5-coder-32b-instruct", "qwen/qwen-2.5-coder-32b-instruct"),
    ("qwq-32b", "qwen/qwq-32b"),
    ("qwen3-235b-a22b-instruct-reasoning", "qwen/qwen3-235b-a22b"),
    // Mistral
    ("mistral-large-2", "mistralai/mistral-large-2411"),
    ("mistral-small-3", "mistralai/mistral-small-24b-instruct-2501"),
    ("codestral", "mistralai/codestral-2501"),
    // Others
    ("nova-pro", "amazon/nova-pro-v1"),
    ("nova-lite", "amazon/nova-lite-v1"),
    ("command-r-plus", "cohere/command-r-plus-08-2024"),
    ("kimi-k2", "moonshotai/kimi-k2"),
    ("glm-4-5", "z-ai/glm-4.5"),
    ("minimax-m1-80k", "minimax/minimax-m1"),
];
