//! Fallback target universe used when no marketplace catalog is supplied.
//!
//! A snapshot of marketplace ids for the models most often benchmarked. It must
//! contain every built-in override target (checked in `overrides` tests).

pub const WELL_KNOWN_TARGET_IDS: &[&str] = &[
    // Anthropic
    "anthropic/claude-3-haiku",
    "anthropic/claude-3-opus",
    "anthropic/claude-3.5-haiku",
    "anthropic/claude-3.5-sonnet",
    "anthropic/claude-3.5-sonnet-20240620",
    "anthropic/claude-3.7-sonnet",
    "anthropic/claude-3.7-sonnet:thinking",
    "anthropic/claude-opus-4",
    "anthropic/claude-opus-4.1",
    "anthropic/claude-sonnet-4",
    "anthropic/claude-sonnet-4.5",
    // OpenAI
    "openai/chatgpt-4o-latest",
    "openai/gpt-4-turbo",
    "openai/gpt-4.1",
    "openai/gpt-4.1-mini",
    "openai/gpt-4.1-nano",
    "openai/gpt-4o",
    "openai/gpt-4o-2024-08-06",
    "openai/gpt-4o-mini",
    "openai/gpt-5",
    "openai/gpt-5-mini",
    "openai/gpt-oss-120b",
    "openai/gpt-oss-20b",
    "openai/o1",
    "openai/o1-mini",
    "openai/o1-preview",
    "openai/o3",
    "openai/o3-mini",
    "openai/o3-mini-high",
    "openai/o4-mini",
    // Google
    "google/gemini-2.0-flash-001",
    "google/gemini-2.0-flash-exp:free",
    "google/gemini-2.0-flash-lite-001",
    "google/gemini-2.5-flash",
    "google/gemini-2.5-pro",
    "google/gemini-flash-1.5",
    "google/gemini-pro-1.5",
    "google/gemma-3-27b-it",
    // Meta
    "meta-llama/llama-3.1-405b-instruct",
    "meta-llama/llama-3.1-70b-instruct",
    "meta-llama/llama-3.1-8b-instruct",
    "meta-llama/llama-3.3-70b-instruct",
    "meta-llama/llama-4-maverick",
    "meta-llama/llama-4-scout",
    // DeepSeek
    "deepseek/deepseek-chat",
    "deepseek/deepseek-chat-v3-0324",
    "deepseek/deepseek-r1",
    "deepseek/deepseek-r1-0528",
    // xAI
    "x-ai/grok-2-1212",
    "x-ai/grok-3",
    "x-ai/grok-3-mini",
    "x-ai/grok-4",
    // Qwen
    "qwen/qwen-2.5-72b-instruct",
    "qwen/qwen-2.5-coder-32b-instruct",
    "qwen/qwen3-235b-a22b",
    "qwen/qwen3-32b",
    "qwen/qwq-32b",
    // Mistral
    "mistralai/codestral-2501",
    "mistralai/mistral-large-2411",
    "mistralai/mistral-medium-3",
    "mistralai/mistral-small-24b-instruct-2501",
    "mistralai/mixtral-8x22b-instruct",
    // Others
    "amazon/nova-lite-v1",
    "amazon/nova-micro-v1",
    "amazon/nova-pro-v1",
    "cohere/command-r-plus-08-2024",
    "minimax/minimax-m1",
    "moonshotai/kimi-k2",
    "z-ai/glm-4.5",
];
